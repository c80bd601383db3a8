//! The hand-authored catalog. Data only; no logic.

use super::{CareerPath, Industry, Level, Role, SalaryPercentiles, SalaryRange, SkillClusters};

/// Every industry the app knows about, in display order.
pub static INDUSTRIES: &[Industry] = &[
	Industry {
		id: "tech",
		name: "Technology",
		description: "Build the future with code, systems, and innovation. From frontend to cloud architecture.",
		icon: "monitor",
		accent_color: "#06b6d4",
		paths: &[
			CareerPath {
				id: "frontend",
				title: "Frontend Engineer",
				description: "Craft beautiful, performant user interfaces and web experiences.",
				roles: &[
					Role {
						id: "fe-intern",
						title: "Frontend Intern",
						level: Level::Junior,
						description: "Learn the fundamentals of web development, HTML, CSS, and JavaScript. Contribute to small features and bug fixes under mentorship.",
						required_skills: &["HTML", "CSS", "JavaScript", "Git", "Basic React"],
						skill_clusters: SkillClusters {
							core: &["HTML5 Semantics", "CSS Fundamentals", "JavaScript ES6+", "Basic React"],
							secondary: &["Git Basics", "Chrome DevTools", "npm/yarn", "Responsive Design"],
							soft: &["Curiosity", "Willingness to Learn", "Time Management"],
						},
						salary_range: SalaryRange { min: 45_000, max: 65_000, median: 55_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 40_000, p25: 48_000, p50: 55_000, p75: 60_000, p90: 68_000 },
						years_experience: "0-1",
						next_roles: &["fe-junior"],
						next_step_requirements: &[
							"Complete 3+ production features independently",
							"Learn TypeScript fundamentals",
							"Pass code reviews without major revisions",
							"Build a small project from scratch",
							"Understand component lifecycle and state management basics",
						],
					},
					Role {
						id: "fe-junior",
						title: "Junior Frontend Engineer",
						level: Level::Junior,
						description: "Build UI components and pages with guidance. Write clean, maintainable code and participate in code reviews.",
						required_skills: &["React/Vue/Angular", "TypeScript", "CSS-in-JS", "REST APIs", "Testing Basics"],
						skill_clusters: SkillClusters {
							core: &["React (or Vue/Angular)", "TypeScript", "CSS-in-JS / Tailwind", "REST API Integration"],
							secondary: &["Unit Testing (Jest/Vitest)", "Storybook", "Figma Reading", "Basic CI/CD"],
							soft: &["Communication", "Code Review Etiquette", "Self-Organization"],
						},
						salary_range: SalaryRange { min: 65_000, max: 90_000, median: 78_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 60_000, p25: 70_000, p50: 78_000, p75: 85_000, p90: 95_000 },
						years_experience: "1-2",
						next_roles: &["fe-mid"],
						next_step_requirements: &[
							"Own a feature end-to-end from design to deployment",
							"Mentor at least 1 intern or new hire",
							"Contribute to the component library or design system",
							"Achieve 80%+ test coverage on owned modules",
							"Present a tech topic in a team meeting",
						],
					},
					Role {
						id: "fe-mid",
						title: "Mid Frontend Engineer",
						level: Level::Mid,
						description: "Own feature development end-to-end. Mentor juniors, optimize performance, and make architectural decisions for your domain.",
						required_skills: &["Advanced React", "State Management", "Performance Optimization", "Accessibility", "CI/CD", "Design Systems"],
						skill_clusters: SkillClusters {
							core: &["Advanced React Patterns", "State Management (Redux/Zustand)", "Performance Optimization", "Accessibility (WCAG)"],
							secondary: &["Design Systems", "CI/CD Pipelines", "Bundler Configuration", "E2E Testing (Playwright/Cypress)", "Animation Libraries"],
							soft: &["Mentoring", "Technical Writing", "Cross-team Collaboration", "Prioritization"],
						},
						salary_range: SalaryRange { min: 95_000, max: 140_000, median: 118_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 88_000, p25: 100_000, p50: 118_000, p75: 132_000, p90: 148_000 },
						years_experience: "3-5",
						next_roles: &["fe-senior"],
						next_step_requirements: &[
							"Lead a complex, multi-sprint project to completion",
							"Drive a significant performance improvement (measurable metrics)",
							"Author and maintain a shared library or tool used by the team",
							"Conduct technical design reviews for peers",
							"Successfully onboard 2+ new engineers",
						],
					},
					Role {
						id: "fe-senior",
						title: "Senior Frontend Engineer",
						level: Level::Senior,
						description: "Drive technical strategy for frontend systems. Lead complex projects, define best practices, and influence team culture.",
						required_skills: &["System Design", "Micro-Frontends", "Webpack/Vite Deep Dive", "Team Leadership", "Cross-functional Communication", "GraphQL"],
						skill_clusters: SkillClusters {
							core: &["System Design & Architecture", "Micro-Frontends", "Advanced Bundling (Webpack/Vite)", "GraphQL"],
							secondary: &["SSR/SSG Strategies", "Web Workers & PWA", "Security Best Practices", "Monorepo Tooling"],
							soft: &["Team Leadership", "Cross-functional Communication", "Conflict Resolution", "Technical Mentorship"],
						},
						salary_range: SalaryRange { min: 145_000, max: 200_000, median: 170_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 135_000, p25: 152_000, p50: 170_000, p75: 188_000, p90: 210_000 },
						years_experience: "5-8",
						next_roles: &["fe-staff", "fe-lead"],
						next_step_requirements: &[
							"Define and execute a multi-quarter technical roadmap",
							"Drive adoption of a new architectural pattern across the org",
							"Be recognized as the go-to expert in a specific domain",
							"Influence hiring decisions and interview processes",
							"Publish internal or external technical content (blog, talk, RFC)",
						],
					},
					Role {
						id: "fe-staff",
						title: "Staff Frontend Engineer",
						level: Level::Lead,
						description: "Set the technical vision across multiple teams. Solve the hardest problems and drive org-wide frontend initiatives.",
						required_skills: &["Architecture at Scale", "Technical Strategy", "Cross-team Leadership", "Performance at Scale", "Developer Experience"],
						skill_clusters: SkillClusters {
							core: &["Architecture at Scale", "Technical Strategy & Vision", "Cross-team System Design", "Performance at Scale"],
							secondary: &["Developer Experience Tooling", "Build Infrastructure", "Platform Engineering", "Tech Radar Curation"],
							soft: &["Org-wide Influence", "Executive Communication", "Navigating Ambiguity", "Strategic Thinking"],
						},
						salary_range: SalaryRange { min: 200_000, max: 300_000, median: 250_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 185_000, p25: 215_000, p50: 250_000, p75: 280_000, p90: 320_000 },
						years_experience: "8-12",
						next_roles: &["fe-principal"],
						next_step_requirements: &[
							"Drive a company-wide technical initiative to completion",
							"Author the definitive architecture doc for a core system",
							"Build and ship a developer platform used by 50+ engineers",
							"Establish yourself as an industry-recognized expert",
							"Shape multi-year technical strategy with VP+ leadership",
						],
					},
					Role {
						id: "fe-lead",
						title: "Frontend Engineering Manager",
						level: Level::Lead,
						description: "Lead a team of frontend engineers. Balance technical excellence with people management and project delivery.",
						required_skills: &["People Management", "Project Planning", "Hiring", "Performance Reviews", "Stakeholder Management", "Technical Vision"],
						skill_clusters: SkillClusters {
							core: &["People Management", "Project Planning & Delivery", "Hiring & Team Building", "Performance Reviews"],
							secondary: &["Budget Forecasting", "Agile Methodologies", "OKR Setting", "Vendor Evaluation"],
							soft: &["Empathy", "Stakeholder Management", "Delegation", "Coaching"],
						},
						salary_range: SalaryRange { min: 180_000, max: 270_000, median: 225_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 168_000, p25: 195_000, p50: 225_000, p75: 255_000, p90: 285_000 },
						years_experience: "7-12",
						next_roles: &["fe-director"],
						next_step_requirements: &[
							"Grow team from N to N+4 while maintaining velocity",
							"Successfully manage a senior engineer through promotion",
							"Own and deliver a department-level initiative",
							"Establish a repeatable hiring pipeline for frontend roles",
							"Present quarterly plans to VP/Director-level stakeholders",
						],
					},
					Role {
						id: "fe-principal",
						title: "Principal Frontend Engineer",
						level: Level::Director,
						description: "Shape the entire frontend ecosystem. Define company-wide standards and drive multi-year technical roadmaps.",
						required_skills: &["Industry Thought Leadership", "Company-wide Architecture", "Business Strategy Alignment", "Innovation"],
						skill_clusters: SkillClusters {
							core: &["Company-wide Architecture", "Multi-year Roadmap Planning", "Business Strategy Alignment", "Innovation Leadership"],
							secondary: &["Open Source Strategy", "Conference Speaking", "Patent / IP Development", "Academic Partnerships"],
							soft: &["Industry Thought Leadership", "Board-level Communication", "Visionary Thinking", "Mentoring Leaders"],
						},
						salary_range: SalaryRange { min: 280_000, max: 420_000, median: 350_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 260_000, p25: 305_000, p50: 350_000, p75: 395_000, p90: 450_000 },
						years_experience: "12+",
						next_roles: &[],
						next_step_requirements: &[],
					},
					Role {
						id: "fe-director",
						title: "Director of Engineering",
						level: Level::Director,
						description: "Oversee multiple engineering teams. Drive organizational strategy, resource allocation, and engineering culture.",
						required_skills: &["Org Design", "Budget Management", "Executive Communication", "Multi-team Strategy", "Talent Development"],
						skill_clusters: SkillClusters {
							core: &["Org Design", "Budget & Resource Management", "Multi-team Strategy", "Talent Development"],
							secondary: &["M&A Due Diligence (Tech)", "Vendor Negotiations", "Compliance Oversight", "Data-Driven Decision Making"],
							soft: &["Executive Communication", "Change Management", "Culture Building", "Strategic Patience"],
						},
						salary_range: SalaryRange { min: 250_000, max: 400_000, median: 320_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 230_000, p25: 275_000, p50: 320_000, p75: 375_000, p90: 425_000 },
						years_experience: "12+",
						next_roles: &[],
						next_step_requirements: &[],
					},
				],
			},
			CareerPath {
				id: "backend",
				title: "Backend Engineer",
				description: "Design scalable systems, APIs, and data pipelines that power applications.",
				roles: &[
					Role {
						id: "be-junior",
						title: "Junior Backend Engineer",
						level: Level::Junior,
						description: "Build APIs and services with guidance. Learn database design, testing, and deployment fundamentals.",
						required_skills: &["Python/Node/Java/Go", "SQL", "REST APIs", "Git", "Linux Basics"],
						skill_clusters: SkillClusters {
							core: &["Python/Node.js/Java/Go", "SQL & Relational Databases", "REST API Design", "Git Workflows"],
							secondary: &["Linux CLI", "Docker Basics", "Redis/Caching Intro", "Logging & Monitoring"],
							soft: &["Problem Solving", "Attention to Detail", "Asking Good Questions"],
						},
						salary_range: SalaryRange { min: 70_000, max: 95_000, median: 82_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 64_000, p25: 74_000, p50: 82_000, p75: 90_000, p90: 100_000 },
						years_experience: "0-2",
						next_roles: &["be-mid"],
						next_step_requirements: &[
							"Design and ship a new API endpoint with full test coverage",
							"Optimize a slow database query (demonstrate before/after)",
							"Write a post-mortem for a production incident",
							"Set up a CI/CD pipeline for a service",
							"Understand service-to-service communication patterns",
						],
					},
					Role {
						id: "be-mid",
						title: "Mid Backend Engineer",
						level: Level::Mid,
						description: "Design and implement services. Own system components and contribute to architectural decisions.",
						required_skills: &["Microservices", "Message Queues", "Caching", "Docker", "Cloud Services (AWS/GCP)", "Database Optimization"],
						skill_clusters: SkillClusters {
							core: &["Microservices Architecture", "Message Queues (Kafka/RabbitMQ)", "Advanced Caching Strategies", "Cloud Services (AWS/GCP)"],
							secondary: &["Docker & Containerization", "Database Optimization", "API Gateway Patterns", "gRPC"],
							soft: &["System Thinking", "Code Review Leadership", "Documentation Habits"],
						},
						salary_range: SalaryRange { min: 100_000, max: 150_000, median: 125_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 92_000, p25: 108_000, p50: 125_000, p75: 142_000, p90: 158_000 },
						years_experience: "2-5",
						next_roles: &["be-senior"],
						next_step_requirements: &[
							"Lead the design of a new microservice from RFC to production",
							"Reduce latency or cost significantly for a core service",
							"Become the on-call lead for a critical system",
							"Mentor a junior engineer through their first quarter",
							"Author an architectural decision record (ADR) that gets adopted",
						],
					},
					Role {
						id: "be-senior",
						title: "Senior Backend Engineer",
						level: Level::Senior,
						description: "Lead system design for large-scale distributed systems. Mentor team members and drive technical excellence.",
						required_skills: &["Distributed Systems", "System Design", "Kubernetes", "Observability", "Security", "Technical Leadership"],
						skill_clusters: SkillClusters {
							core: &["Distributed Systems Design", "Kubernetes Orchestration", "Observability (Metrics/Traces/Logs)", "Security Architecture"],
							secondary: &["Service Mesh", "Chaos Engineering", "Cost Optimization", "Data Pipeline Design"],
							soft: &["Technical Leadership", "Cross-team Negotiation", "Mentorship Culture", "Incident Command"],
						},
						salary_range: SalaryRange { min: 155_000, max: 220_000, median: 185_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 145_000, p25: 165_000, p50: 185_000, p75: 205_000, p90: 235_000 },
						years_experience: "5-8",
						next_roles: &["be-staff"],
						next_step_requirements: &[
							"Architect a system handling 10x current scale",
							"Establish observability standards adopted org-wide",
							"Drive a multi-team migration or platform initiative",
							"Be the escalation point for the hardest backend problems",
							"Build consensus across teams with competing priorities",
						],
					},
					Role {
						id: "be-staff",
						title: "Staff Backend Engineer",
						level: Level::Lead,
						description: "Drive architecture across the organization. Solve cross-cutting concerns and define engineering best practices.",
						required_skills: &["Architecture at Scale", "Cross-org Leadership", "Technical Strategy", "Capacity Planning"],
						skill_clusters: SkillClusters {
							core: &["Architecture at Scale", "Cross-org Technical Strategy", "Capacity Planning", "Platform Design"],
							secondary: &["Compliance & Governance", "Build vs. Buy Analysis", "Technical Due Diligence"],
							soft: &["Organizational Influence", "Executive Storytelling", "Strategic Prioritization"],
						},
						salary_range: SalaryRange { min: 220_000, max: 340_000, median: 275_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 200_000, p25: 240_000, p50: 275_000, p75: 315_000, p90: 360_000 },
						years_experience: "8+",
						next_roles: &[],
						next_step_requirements: &[],
					},
				],
			},
			CareerPath {
				id: "fullstack",
				title: "Full-Stack Engineer",
				description: "Bridge frontend and backend, building complete features from database to UI.",
				roles: &[
					Role {
						id: "fs-junior",
						title: "Junior Full-Stack Engineer",
						level: Level::Junior,
						description: "Work across the stack on small features. Learn both frontend and backend patterns.",
						required_skills: &["React/Next.js", "Node.js/Python", "SQL", "REST APIs", "Git"],
						skill_clusters: SkillClusters {
							core: &["React / Next.js", "Node.js / Python", "SQL Databases", "REST API Design"],
							secondary: &["Git Workflows", "Docker Basics", "Basic Auth (JWT/OAuth)", "Deployment"],
							soft: &["Adaptability", "Breadth-First Learning", "Pragmatism"],
						},
						salary_range: SalaryRange { min: 68_000, max: 92_000, median: 80_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 62_000, p25: 72_000, p50: 80_000, p75: 88_000, p90: 97_000 },
						years_experience: "0-2",
						next_roles: &["fs-mid"],
						next_step_requirements: &[
							"Ship a full feature (frontend + backend + database migration)",
							"Write integration tests spanning the full stack",
							"Set up a local development environment for the team",
							"Contribute meaningful code reviews across both layers",
						],
					},
					Role {
						id: "fs-mid",
						title: "Mid Full-Stack Engineer",
						level: Level::Mid,
						description: "Own end-to-end feature delivery. Contribute to system design and mentor juniors.",
						required_skills: &["Advanced React", "Server-side Rendering", "Database Design", "Docker", "Testing Strategies", "CI/CD"],
						skill_clusters: SkillClusters {
							core: &["Advanced React / SSR / SSG", "Database Design & Migrations", "API Design Patterns", "Testing Strategies"],
							secondary: &["Docker & Docker Compose", "CI/CD Pipelines", "Caching", "Queue Systems"],
							soft: &["Feature Ownership", "Estimation Skills", "Stakeholder Updates"],
						},
						salary_range: SalaryRange { min: 100_000, max: 145_000, median: 122_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 92_000, p25: 108_000, p50: 122_000, p75: 138_000, p90: 152_000 },
						years_experience: "2-5",
						next_roles: &["fs-senior"],
						next_step_requirements: &[
							"Design and implement a new product feature end-to-end",
							"Improve system reliability (uptime, error rate)",
							"Mentor a junior through a full sprint cycle",
							"Contribute to architectural decisions at the team level",
						],
					},
					Role {
						id: "fs-senior",
						title: "Senior Full-Stack Engineer",
						level: Level::Senior,
						description: "Lead cross-functional projects and define architectural patterns. Drive team technical direction.",
						required_skills: &["System Architecture", "Cloud Infrastructure", "Performance", "Security", "Team Leadership", "Product Thinking"],
						skill_clusters: SkillClusters {
							core: &["System Architecture", "Cloud Infrastructure (AWS/GCP)", "Performance Engineering", "Security Practices"],
							secondary: &["Infrastructure as Code", "Observability", "Feature Flagging", "A/B Testing Infra"],
							soft: &["Product Thinking", "Team Leadership", "Technical Storytelling"],
						},
						salary_range: SalaryRange { min: 150_000, max: 210_000, median: 178_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 140_000, p25: 160_000, p50: 178_000, p75: 198_000, p90: 220_000 },
						years_experience: "5-8",
						next_roles: &["fs-staff"],
						next_step_requirements: &[
							"Own a product area's technical direction",
							"Lead a cross-team initiative to completion",
							"Establish reusable patterns adopted by multiple teams",
							"Drive measurable business impact through technical work",
						],
					},
					Role {
						id: "fs-staff",
						title: "Staff Full-Stack Engineer",
						level: Level::Lead,
						description: "Set technical vision across multiple product areas. Influence company-wide engineering strategy.",
						required_skills: &["Architecture at Scale", "Product Strategy", "Technical Vision", "Org Influence"],
						skill_clusters: SkillClusters {
							core: &["Architecture at Scale", "Product-Engineering Strategy", "Technical Vision", "Platform Thinking"],
							secondary: &["Build vs. Buy", "Vendor Evaluation", "Cost Modeling", "Technical Debt Strategy"],
							soft: &["Org Influence", "Long-term Planning", "Consensus Building"],
						},
						salary_range: SalaryRange { min: 210_000, max: 320_000, median: 265_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 195_000, p25: 230_000, p50: 265_000, p75: 300_000, p90: 340_000 },
						years_experience: "8+",
						next_roles: &[],
						next_step_requirements: &[],
					},
				],
			},
		],
	},
	Industry {
		id: "finance",
		name: "Finance",
		description: "Navigate markets, manage risk, and drive financial strategy in the world's most dynamic industry.",
		icon: "trending-up",
		accent_color: "#10b981",
		paths: &[
			CareerPath {
				id: "investment-banking",
				title: "Investment Banking",
				description: "Advise companies on mergers, acquisitions, and capital markets transactions.",
				roles: &[
					Role {
						id: "ib-analyst",
						title: "IB Analyst",
						level: Level::Junior,
						description: "Build financial models, create pitch books, and support deal execution. The foundational role in investment banking.",
						required_skills: &["Financial Modeling", "Excel/Sheets", "Valuation Methods", "Pitch Book Creation", "Accounting Fundamentals"],
						skill_clusters: SkillClusters {
							core: &["Financial Modeling (DCF, LBO, Comps)", "Advanced Excel / Google Sheets", "Valuation Methodologies", "Accounting Fundamentals"],
							secondary: &["Pitch Book Creation", "Bloomberg Terminal", "Capital IQ / FactSet", "Industry Research"],
							soft: &["Work Ethic", "Attention to Detail", "Working Under Pressure", "Team Player"],
						},
						salary_range: SalaryRange { min: 100_000, max: 150_000, median: 125_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 95_000, p25: 110_000, p50: 125_000, p75: 140_000, p90: 160_000 },
						years_experience: "0-3",
						next_roles: &["ib-associate"],
						next_step_requirements: &[
							"Complete 2+ live deal cycles from start to close",
							"Build financial models independently without senior review",
							"Earn an MBA or equivalent graduate degree (typical path)",
							"Develop a coverage area or industry vertical expertise",
							"Manage and delegate work to incoming analysts",
						],
					},
					Role {
						id: "ib-associate",
						title: "IB Associate",
						level: Level::Mid,
						description: "Lead analyst teams, manage client relationships, and drive deal processes. Bridge between execution and origination.",
						required_skills: &["Deal Structuring", "Client Management", "Team Leadership", "Advanced Modeling", "Market Analysis"],
						skill_clusters: SkillClusters {
							core: &["Deal Structuring", "Client Relationship Management", "Advanced Financial Modeling", "Market & Sector Analysis"],
							secondary: &["Due Diligence Coordination", "Legal Documentation Review", "Regulatory Filing", "Credit Analysis"],
							soft: &["Team Leadership", "Client Communication", "Negotiation Basics", "Time Management"],
						},
						salary_range: SalaryRange { min: 150_000, max: 250_000, median: 200_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 140_000, p25: 170_000, p50: 200_000, p75: 230_000, p90: 270_000 },
						years_experience: "3-5",
						next_roles: &["ib-vp"],
						next_step_requirements: &[
							"Lead the execution of 3+ transactions",
							"Develop independent client relationships",
							"Originate a meaningful portion of deal pipeline",
							"Demonstrate strong people management abilities",
							"Build a reputation within a specific industry group",
						],
					},
					Role {
						id: "ib-vp",
						title: "Vice President",
						level: Level::Senior,
						description: "Manage deal execution and client relationships. Develop new business and mentor junior bankers.",
						required_skills: &["Business Development", "Negotiation", "Industry Expertise", "Cross-border Transactions", "Regulatory Knowledge"],
						skill_clusters: SkillClusters {
							core: &["Business Development", "Advanced Negotiation", "Industry Deep Expertise", "Cross-border Transactions"],
							secondary: &["Regulatory & Compliance Knowledge", "Risk Assessment", "Capital Markets Strategy", "Restructuring Basics"],
							soft: &["Relationship Building", "Strategic Thinking", "Executive Presence", "Crisis Management"],
						},
						salary_range: SalaryRange { min: 250_000, max: 450_000, median: 350_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 230_000, p25: 290_000, p50: 350_000, p75: 420_000, p90: 500_000 },
						years_experience: "5-10",
						next_roles: &["ib-director"],
						next_step_requirements: &[
							"Originate $50M+ in deal fees independently",
							"Build a personal network of C-suite relationships",
							"Manage and develop a team of 5+ junior bankers",
							"Close a landmark or complex transaction",
							"Develop a reputation as a trusted advisor in your sector",
						],
					},
					Role {
						id: "ib-director",
						title: "Director / Executive Director",
						level: Level::Director,
						description: "Senior deal maker with deep industry expertise. Originate transactions and manage key client relationships.",
						required_skills: &["Deal Origination", "C-Suite Relationships", "Strategic Advisory", "Market Making"],
						skill_clusters: SkillClusters {
							core: &["Deal Origination at Scale", "C-Suite Advisory", "Strategic Transaction Design", "Market Positioning"],
							secondary: &["Cross-selling Products", "Capital Allocation Advisory", "Public Market Strategy"],
							soft: &["Board-level Presence", "Industry Thought Leadership", "Long-term Relationship Cultivation"],
						},
						salary_range: SalaryRange { min: 400_000, max: 800_000, median: 600_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 350_000, p25: 480_000, p50: 600_000, p75: 720_000, p90: 900_000 },
						years_experience: "10-15",
						next_roles: &["ib-md"],
						next_step_requirements: &[
							"Build and maintain 10+ active C-suite relationships",
							"Generate consistent annual revenue exceeding targets",
							"Lead a coverage or product group",
							"Win mandates against competing banks",
							"Demonstrate firm-building contributions (recruiting, culture)",
						],
					},
					Role {
						id: "ib-md",
						title: "Managing Director",
						level: Level::CSuite,
						description: "Top-level dealmaker. Responsible for major client relationships, revenue targets, and firm strategy.",
						required_skills: &["Revenue Generation", "Firm Strategy", "Industry Thought Leadership", "Global Relationships"],
						skill_clusters: SkillClusters {
							core: &["Revenue Generation & P&L Ownership", "Firm Strategy", "Global Client Relationships", "Market Leadership"],
							secondary: &["Regulatory Lobbying", "Joint Venture Structuring", "Public Speaking", "Media Relations"],
							soft: &["Industry Thought Leadership", "Gravitas", "Political Navigation", "Legacy Building"],
						},
						salary_range: SalaryRange { min: 700_000, max: 2_000_000, median: 1_200_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 600_000, p25: 850_000, p50: 1_200_000, p75: 1_700_000, p90: 2_500_000 },
						years_experience: "15+",
						next_roles: &[],
						next_step_requirements: &[],
					},
				],
			},
			CareerPath {
				id: "quant",
				title: "Quantitative Finance",
				description: "Apply mathematical models to financial markets and trading strategies.",
				roles: &[
					Role {
						id: "q-junior",
						title: "Junior Quant Analyst",
						level: Level::Junior,
						description: "Implement and test quantitative models. Analyze data and support strategy development.",
						required_skills: &["Python/R", "Statistics", "Linear Algebra", "Time Series Analysis", "SQL"],
						skill_clusters: SkillClusters {
							core: &["Python / R Programming", "Statistics & Probability", "Linear Algebra", "Time Series Analysis"],
							secondary: &["SQL & Data Pipelines", "NumPy / Pandas", "Basic ML Models", "Bloomberg API"],
							soft: &["Analytical Rigor", "Research Methodology", "Intellectual Curiosity"],
						},
						salary_range: SalaryRange { min: 90_000, max: 140_000, median: 115_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 82_000, p25: 100_000, p50: 115_000, p75: 130_000, p90: 150_000 },
						years_experience: "0-2",
						next_roles: &["q-mid"],
						next_step_requirements: &[
							"Implement and backtest 2+ quantitative strategies",
							"Publish an internal research paper or model validation",
							"Master stochastic calculus fundamentals",
							"Build a data pipeline for a new alpha signal",
						],
					},
					Role {
						id: "q-mid",
						title: "Quant Analyst",
						level: Level::Mid,
						description: "Develop and validate pricing models and trading strategies. Collaborate with traders and risk managers.",
						required_skills: &["Stochastic Calculus", "Machine Learning", "C++", "Monte Carlo Simulation", "Risk Modeling"],
						skill_clusters: SkillClusters {
							core: &["Stochastic Calculus", "Machine Learning / Deep Learning", "C++ (Performance-Critical Code)", "Monte Carlo Simulation"],
							secondary: &["Risk Modeling (VaR, CVaR)", "Options Pricing", "Natural Language Processing", "GPU Computing"],
							soft: &["Cross-team Collaboration (with Traders)", "Clear Research Communication", "Skepticism & Validation"],
						},
						salary_range: SalaryRange { min: 150_000, max: 250_000, median: 200_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 135_000, p25: 170_000, p50: 200_000, p75: 235_000, p90: 275_000 },
						years_experience: "2-5",
						next_roles: &["q-senior"],
						next_step_requirements: &[
							"Develop a strategy that generates positive P&L in live trading",
							"Lead a research initiative from hypothesis to production",
							"Optimize model performance achieving measurable speed gains",
							"Mentor a junior quant through a research project",
						],
					},
					Role {
						id: "q-senior",
						title: "Senior Quant",
						level: Level::Senior,
						description: "Lead research initiatives and design novel strategies. Own P&L for specific strategy books.",
						required_skills: &["Research Leadership", "Advanced ML/DL", "Strategy Design", "Portfolio Optimization"],
						skill_clusters: SkillClusters {
							core: &["Research Leadership", "Advanced ML / Deep Learning", "Strategy Design & Backtesting", "Portfolio Optimization"],
							secondary: &["Alternative Data Sources", "Execution Algorithms", "Regulatory Modeling", "Cross-asset Strategies"],
							soft: &["Vision Setting", "Research Team Management", "P&L Accountability"],
						},
						salary_range: SalaryRange { min: 250_000, max: 500_000, median: 375_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 220_000, p25: 300_000, p50: 375_000, p75: 460_000, p90: 550_000 },
						years_experience: "5-10",
						next_roles: &["q-head"],
						next_step_requirements: &[
							"Own P&L for a strategy book exceeding firm benchmarks",
							"Build and lead a quant research pod of 3+ researchers",
							"Publish externally recognized research",
							"Navigate a major market regime change successfully",
						],
					},
					Role {
						id: "q-head",
						title: "Head of Quant Research",
						level: Level::Director,
						description: "Direct the quantitative research group. Set strategy, manage talent, and drive innovation.",
						required_skills: &["Team Building", "Research Vision", "Business Strategy", "Regulatory Navigation"],
						skill_clusters: SkillClusters {
							core: &["Research Group Leadership", "Research Vision & Roadmap", "Business Strategy Alignment", "Regulatory Navigation"],
							secondary: &["Technology Infrastructure Planning", "Academic Partnership", "Talent Pipeline Development"],
							soft: &["Talent Attraction & Retention", "Firm-wide Influence", "External Representation"],
						},
						salary_range: SalaryRange { min: 500_000, max: 1_500_000, median: 900_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 420_000, p25: 650_000, p50: 900_000, p75: 1_250_000, p90: 1_800_000 },
						years_experience: "10+",
						next_roles: &[],
						next_step_requirements: &[],
					},
				],
			},
			CareerPath {
				id: "financial-planning",
				title: "Financial Planning & Analysis",
				description: "Drive business decisions through financial forecasting, budgeting, and strategic analysis.",
				roles: &[
					Role {
						id: "fpa-analyst",
						title: "FP&A Analyst",
						level: Level::Junior,
						description: "Build budgets, forecasts, and financial reports. Support month-end close and variance analysis.",
						required_skills: &["Excel Advanced", "Financial Reporting", "Budgeting", "ERP Systems", "Data Analysis"],
						skill_clusters: SkillClusters {
							core: &["Advanced Excel / Modeling", "Financial Reporting (GAAP)", "Budgeting & Forecasting", "ERP Systems (SAP/Oracle)"],
							secondary: &["Data Analysis (SQL/BI Tools)", "Variance Analysis", "Cash Flow Modeling", "Dashboard Building"],
							soft: &["Analytical Mindset", "Deadline Management", "Clear Reporting"],
						},
						salary_range: SalaryRange { min: 60_000, max: 85_000, median: 72_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 55_000, p25: 64_000, p50: 72_000, p75: 80_000, p90: 90_000 },
						years_experience: "0-2",
						next_roles: &["fpa-senior"],
						next_step_requirements: &[
							"Own the monthly financial close process for a business unit",
							"Build and maintain a rolling 12-month forecast model",
							"Present variance analysis to senior management",
							"Automate a manual reporting process",
						],
					},
					Role {
						id: "fpa-senior",
						title: "Senior FP&A Analyst",
						level: Level::Mid,
						description: "Lead forecasting processes and business partnering. Present insights to leadership.",
						required_skills: &["Business Partnering", "Scenario Modeling", "Presentation Skills", "SQL/BI Tools", "Strategic Analysis"],
						skill_clusters: SkillClusters {
							core: &["Business Partnering", "Scenario & Sensitivity Modeling", "Strategic Analysis", "SQL / BI Tools (Tableau/Power BI)"],
							secondary: &["M&A Support Analysis", "Working Capital Optimization", "KPI Framework Design", "Board Deck Preparation"],
							soft: &["Presentation Skills", "Influencing Without Authority", "Business Acumen"],
						},
						salary_range: SalaryRange { min: 85_000, max: 130_000, median: 108_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 78_000, p25: 92_000, p50: 108_000, p75: 122_000, p90: 138_000 },
						years_experience: "2-5",
						next_roles: &["fpa-manager"],
						next_step_requirements: &[
							"Lead the annual budget process for the organization",
							"Partner with a VP+ stakeholder on strategic decisions",
							"Implement a new forecasting tool or methodology",
							"Develop a business case that influences a major investment",
						],
					},
					Role {
						id: "fpa-manager",
						title: "FP&A Manager",
						level: Level::Senior,
						description: "Manage the FP&A function. Drive strategic planning and cross-functional financial leadership.",
						required_skills: &["Team Management", "Strategic Planning", "Board Presentations", "Process Improvement", "Systems Implementation"],
						skill_clusters: SkillClusters {
							core: &["Team Management", "Strategic Planning", "Board Presentations", "Process Improvement"],
							secondary: &["Systems Implementation", "Cost Optimization Programs", "Treasury Coordination", "Audit Support"],
							soft: &["Leadership", "Cross-functional Influence", "Executive Communication"],
						},
						salary_range: SalaryRange { min: 130_000, max: 190_000, median: 160_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 120_000, p25: 142_000, p50: 160_000, p75: 180_000, p90: 200_000 },
						years_experience: "5-8",
						next_roles: &["fpa-director"],
						next_step_requirements: &[
							"Build and lead an FP&A team of 3+ analysts",
							"Drive a major cost savings or revenue initiative",
							"Own the relationship with the CFO or VP Finance",
							"Lead a transformation project (systems, processes)",
						],
					},
					Role {
						id: "fpa-director",
						title: "Director of FP&A",
						level: Level::Director,
						description: "Lead enterprise financial planning. Partner with C-suite on strategic decisions.",
						required_skills: &["Executive Partnership", "M&A Analysis", "Org Strategy", "Capital Allocation"],
						skill_clusters: SkillClusters {
							core: &["Executive Partnership", "M&A Financial Analysis", "Organizational Strategy", "Capital Allocation"],
							secondary: &["Investor Relations Support", "Tax Strategy Input", "International Finance", "Risk Management"],
							soft: &["C-Suite Communication", "Strategic Vision", "Organizational Leadership"],
						},
						salary_range: SalaryRange { min: 180_000, max: 280_000, median: 230_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 165_000, p25: 200_000, p50: 230_000, p75: 260_000, p90: 300_000 },
						years_experience: "8+",
						next_roles: &[],
						next_step_requirements: &[],
					},
				],
			},
		],
	},
	Industry {
		id: "marketing",
		name: "Marketing",
		description: "Shape brands, drive growth, and connect products with people through creative strategy and data.",
		icon: "megaphone",
		accent_color: "#f43f5e",
		paths: &[
			CareerPath {
				id: "growth",
				title: "Growth Marketing",
				description: "Drive user acquisition, retention, and revenue through data-driven experiments.",
				roles: &[
					Role {
						id: "gm-associate",
						title: "Growth Associate",
						level: Level::Junior,
						description: "Run experiments, analyze metrics, and support growth campaigns across channels.",
						required_skills: &["Google Analytics", "A/B Testing", "SQL Basics", "Paid Ads", "Email Marketing"],
						skill_clusters: SkillClusters {
							core: &["Google Analytics (GA4)", "A/B Testing Frameworks", "Paid Ads (Google/Meta)", "Email Marketing & Automation"],
							secondary: &["SQL Basics", "Landing Page Optimization", "Referral Programs", "UTM Tracking"],
							soft: &["Data-Driven Mindset", "Experimentation Culture", "Fast Iteration"],
						},
						salary_range: SalaryRange { min: 55_000, max: 80_000, median: 67_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 50_000, p25: 58_000, p50: 67_000, p75: 75_000, p90: 85_000 },
						years_experience: "0-2",
						next_roles: &["gm-manager"],
						next_step_requirements: &[
							"Run 10+ experiments with documented results",
							"Manage a paid ads budget of $10K+/month profitably",
							"Build and optimize an email nurture sequence",
							"Demonstrate measurable impact on a core growth metric (CAC, LTV)",
						],
					},
					Role {
						id: "gm-manager",
						title: "Growth Marketing Manager",
						level: Level::Mid,
						description: "Own growth metrics and experiment roadmaps. Manage channels and optimize funnels.",
						required_skills: &["Funnel Optimization", "Attribution Modeling", "Budget Management", "CRO", "Marketing Automation"],
						skill_clusters: SkillClusters {
							core: &["Funnel Optimization", "Attribution Modeling (MTA/MMM)", "CRO (Conversion Rate Optimization)", "Marketing Automation (HubSpot/Marketo)"],
							secondary: &["Budget Management", "SEO Fundamentals", "Retention Campaigns", "Product Analytics (Amplitude/Mixpanel)"],
							soft: &["Channel Strategy", "Cross-functional Partnership", "Storytelling with Data"],
						},
						salary_range: SalaryRange { min: 85_000, max: 130_000, median: 107_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 78_000, p25: 92_000, p50: 107_000, p75: 122_000, p90: 138_000 },
						years_experience: "2-5",
						next_roles: &["gm-senior"],
						next_step_requirements: &[
							"Own a core acquisition channel end-to-end",
							"Build and lead an experiment roadmap generating 20% growth",
							"Implement a multi-touch attribution model",
							"Hire and manage a direct report",
							"Present growth results to executive leadership",
						],
					},
					Role {
						id: "gm-senior",
						title: "Senior Growth Manager",
						level: Level::Senior,
						description: "Lead growth strategy and team. Drive cross-functional initiatives and large-scale campaigns.",
						required_skills: &["Growth Strategy", "Team Leadership", "Product-Led Growth", "Data Science Basics", "P&L Management"],
						skill_clusters: SkillClusters {
							core: &["Growth Strategy & Planning", "Product-Led Growth (PLG)", "P&L Management", "Data Science Collaboration"],
							secondary: &["International Expansion", "Pricing Strategy", "Lifecycle Marketing", "Partnerships & BD"],
							soft: &["Team Leadership", "Executive Influence", "Strategic Prioritization"],
						},
						salary_range: SalaryRange { min: 130_000, max: 190_000, median: 160_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 120_000, p25: 142_000, p50: 160_000, p75: 182_000, p90: 200_000 },
						years_experience: "5-8",
						next_roles: &["gm-head"],
						next_step_requirements: &[
							"Define and execute a growth strategy across multiple channels",
							"Build and manage a team of 3+ growth professionals",
							"Drive a 2x improvement in a key growth metric",
							"Partner with Product to ship growth-focused features",
							"Establish growth experimentation culture within the org",
						],
					},
					Role {
						id: "gm-head",
						title: "Head of Growth",
						level: Level::Director,
						description: "Define and execute the company's growth vision. Report to C-suite and drive revenue targets.",
						required_skills: &["Company Strategy", "Board Reporting", "Multi-channel Mastery", "Talent Development"],
						skill_clusters: SkillClusters {
							core: &["Company Growth Strategy", "Board / Investor Reporting", "Multi-channel Mastery", "Revenue Targets"],
							secondary: &["Talent Development Pipeline", "MarTech Stack Architecture", "Brand-Performance Balance"],
							soft: &["C-Suite Partnership", "Vision Communication", "Organizational Design"],
						},
						salary_range: SalaryRange { min: 180_000, max: 300_000, median: 240_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 165_000, p25: 205_000, p50: 240_000, p75: 280_000, p90: 320_000 },
						years_experience: "8+",
						next_roles: &["gm-cmo"],
						next_step_requirements: &[
							"Own company-level revenue or growth targets",
							"Build a growth org of 10+ people across disciplines",
							"Report growth metrics to the board regularly",
							"Navigate a major pivot or market expansion",
						],
					},
					Role {
						id: "gm-cmo",
						title: "Chief Marketing Officer",
						level: Level::CSuite,
						description: "Lead all marketing functions. Define brand, drive revenue, and shape company direction.",
						required_skills: &["Executive Leadership", "Brand Vision", "Revenue Strategy", "Board Management", "Industry Influence"],
						skill_clusters: SkillClusters {
							core: &["Executive Leadership", "Brand & Revenue Strategy", "Board Management", "Company Direction"],
							secondary: &["IPO / Public Company Marketing", "Global Brand Management", "Crisis Communications"],
							soft: &["Industry Influence", "Visionary Leadership", "Public Speaking", "Media Savvy"],
						},
						salary_range: SalaryRange { min: 250_000, max: 600_000, median: 400_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 220_000, p25: 300_000, p50: 400_000, p75: 520_000, p90: 650_000 },
						years_experience: "12+",
						next_roles: &[],
						next_step_requirements: &[],
					},
				],
			},
			CareerPath {
				id: "product-marketing",
				title: "Product Marketing",
				description: "Bridge products and markets through positioning, messaging, and go-to-market strategy.",
				roles: &[
					Role {
						id: "pmm-associate",
						title: "Product Marketing Associate",
						level: Level::Junior,
						description: "Support product launches, create collateral, and conduct competitive analysis.",
						required_skills: &["Copywriting", "Market Research", "Competitive Analysis", "Sales Enablement", "Presentation Skills"],
						skill_clusters: SkillClusters {
							core: &["Copywriting & Messaging", "Market Research", "Competitive Intelligence", "Sales Enablement"],
							secondary: &["Product Demo Skills", "Analyst Briefings", "Customer Interview Techniques", "CRM Tools"],
							soft: &["Presentation Skills", "Cross-team Agility", "Customer Empathy"],
						},
						salary_range: SalaryRange { min: 58_000, max: 82_000, median: 70_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 52_000, p25: 62_000, p50: 70_000, p75: 78_000, p90: 88_000 },
						years_experience: "0-2",
						next_roles: &["pmm-manager"],
						next_step_requirements: &[
							"Support 3+ product launches end-to-end",
							"Create a competitive battlecard used by the sales team",
							"Conduct 10+ customer interviews for persona development",
							"Write positioning that gets adopted in marketing campaigns",
						],
					},
					Role {
						id: "pmm-manager",
						title: "Product Marketing Manager",
						level: Level::Mid,
						description: "Own product positioning and GTM strategy. Lead launches and drive adoption.",
						required_skills: &["Go-to-Market Strategy", "Positioning & Messaging", "Customer Research", "Cross-functional Leadership", "Metrics & Analytics"],
						skill_clusters: SkillClusters {
							core: &["Go-to-Market Strategy", "Positioning & Messaging Frameworks", "Customer Research & Personas", "Launch Management"],
							secondary: &["Metrics & Analytics", "Pricing Input", "Analyst Relations", "Sales Training"],
							soft: &["Cross-functional Leadership", "Storytelling", "Influence Without Authority"],
						},
						salary_range: SalaryRange { min: 90_000, max: 140_000, median: 115_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 82_000, p25: 98_000, p50: 115_000, p75: 132_000, p90: 148_000 },
						years_experience: "2-5",
						next_roles: &["pmm-senior"],
						next_step_requirements: &[
							"Own the GTM strategy for a major product launch",
							"Build positioning that demonstrably improves win rates",
							"Establish a repeatable launch framework for the team",
							"Partner with Product to influence the roadmap",
						],
					},
					Role {
						id: "pmm-senior",
						title: "Senior Product Marketing Manager",
						level: Level::Senior,
						description: "Lead PMM for major product lines. Define strategy and mentor the team.",
						required_skills: &["Strategic Planning", "Executive Communication", "Market Strategy", "Team Development", "Revenue Impact"],
						skill_clusters: SkillClusters {
							core: &["Strategic Market Planning", "Executive Communication", "Revenue Impact Analysis", "Portfolio GTM Strategy"],
							secondary: &["Market Segmentation", "Pricing Strategy", "Competitive Moats", "Partner Marketing"],
							soft: &["Team Development", "Thought Leadership", "Strategic Vision"],
						},
						salary_range: SalaryRange { min: 140_000, max: 200_000, median: 170_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 128_000, p25: 152_000, p50: 170_000, p75: 190_000, p90: 212_000 },
						years_experience: "5-8",
						next_roles: &["pmm-director"],
						next_step_requirements: &[
							"Define PMM strategy for a product line generating $10M+ ARR",
							"Build and mentor a team of 2+ PMMs",
							"Drive measurable revenue impact through positioning changes",
							"Establish the company as a category leader in analyst reports",
						],
					},
					Role {
						id: "pmm-director",
						title: "Director of Product Marketing",
						level: Level::Director,
						description: "Lead the PMM function. Shape company narrative and drive market leadership.",
						required_skills: &["Org Leadership", "Brand Strategy", "Market Vision", "C-Suite Partnership"],
						skill_clusters: SkillClusters {
							core: &["PMM Org Leadership", "Brand & Narrative Strategy", "Market Vision", "Revenue Strategy"],
							secondary: &["Analyst Relations Program", "Customer Advisory Boards", "Category Creation"],
							soft: &["C-Suite Partnership", "Organizational Influence", "Industry Presence"],
						},
						salary_range: SalaryRange { min: 190_000, max: 300_000, median: 245_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 175_000, p25: 210_000, p50: 245_000, p75: 280_000, p90: 320_000 },
						years_experience: "8+",
						next_roles: &[],
						next_step_requirements: &[],
					},
				],
			},
			CareerPath {
				id: "content",
				title: "Content Marketing",
				description: "Create compelling narratives that educate, engage, and convert audiences.",
				roles: &[
					Role {
						id: "cm-writer",
						title: "Content Writer",
						level: Level::Junior,
						description: "Write blog posts, social content, and marketing copy. Learn SEO and content strategy basics.",
						required_skills: &["Writing", "SEO Basics", "Social Media", "CMS Platforms", "Research"],
						skill_clusters: SkillClusters {
							core: &["Long-form & Short-form Writing", "SEO Fundamentals", "CMS Platforms (WordPress/Webflow)", "Research & Fact-checking"],
							secondary: &["Social Media Content", "Basic Graphic Design (Canva)", "Email Newsletter Writing", "Content Calendar Management"],
							soft: &["Creativity", "Consistency", "Receptiveness to Feedback"],
						},
						salary_range: SalaryRange { min: 45_000, max: 68_000, median: 56_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 40_000, p25: 48_000, p50: 56_000, p75: 64_000, p90: 72_000 },
						years_experience: "0-2",
						next_roles: &["cm-strategist"],
						next_step_requirements: &[
							"Publish 30+ pieces of content across formats",
							"Achieve measurable organic traffic growth for 3+ articles",
							"Develop a consistent brand voice in writing",
							"Learn intermediate SEO (keyword research, on-page optimization)",
						],
					},
					Role {
						id: "cm-strategist",
						title: "Content Strategist",
						level: Level::Mid,
						description: "Define content strategy, manage editorial calendars, and drive organic growth.",
						required_skills: &["Content Strategy", "SEO Advanced", "Editorial Planning", "Analytics", "Brand Voice"],
						skill_clusters: SkillClusters {
							core: &["Content Strategy & Pillars", "Advanced SEO (Technical + Content)", "Editorial Calendar Management", "Analytics & Attribution"],
							secondary: &["Brand Voice Development", "Content Distribution", "Video Content Strategy", "Influencer Partnerships"],
							soft: &["Strategic Planning", "Stakeholder Alignment", "Creative Direction"],
						},
						salary_range: SalaryRange { min: 75_000, max: 115_000, median: 95_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 68_000, p25: 82_000, p50: 95_000, p75: 108_000, p90: 122_000 },
						years_experience: "2-5",
						next_roles: &["cm-senior"],
						next_step_requirements: &[
							"Build a content strategy that drives measurable pipeline",
							"Manage freelancers or a small content team",
							"Launch a new content channel (podcast, video, newsletter)",
							"Develop a thought leadership program for executives",
						],
					},
					Role {
						id: "cm-senior",
						title: "Senior Content Manager",
						level: Level::Senior,
						description: "Lead content teams and multi-channel content strategy. Drive thought leadership.",
						required_skills: &["Team Management", "Multi-channel Strategy", "Thought Leadership", "Budget Management", "Performance Marketing"],
						skill_clusters: SkillClusters {
							core: &["Content Team Management", "Multi-channel Strategy", "Thought Leadership Programs", "Budget & Vendor Management"],
							secondary: &["Performance Content Marketing", "Content Operations", "Content Technology Stack", "Localization Strategy"],
							soft: &["People Leadership", "Creative Vision", "Executive Reporting"],
						},
						salary_range: SalaryRange { min: 110_000, max: 165_000, median: 138_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 100_000, p25: 120_000, p50: 138_000, p75: 155_000, p90: 175_000 },
						years_experience: "5-8",
						next_roles: &["cm-head"],
						next_step_requirements: &[
							"Build and manage a content team of 3+ people",
							"Drive content-attributed revenue of $1M+",
							"Establish content operations and governance processes",
							"Launch a flagship content property (blog, podcast, community)",
						],
					},
					Role {
						id: "cm-head",
						title: "Head of Content",
						level: Level::Director,
						description: "Own the entire content function. Define brand narrative and content-driven growth.",
						required_skills: &["Content Vision", "Brand Architecture", "Revenue Attribution", "Executive Presence"],
						skill_clusters: SkillClusters {
							core: &["Content Vision & Strategy", "Brand Architecture", "Revenue Attribution Models", "Content-Driven Growth"],
							secondary: &["PR & Comms Integration", "Community Strategy", "Content M&A (Acquisitions)"],
							soft: &["Executive Presence", "Industry Networking", "Organizational Storytelling"],
						},
						salary_range: SalaryRange { min: 150_000, max: 240_000, median: 195_000, currency: "USD" },
						salary_percentiles: SalaryPercentiles { p10: 138_000, p25: 168_000, p50: 195_000, p75: 225_000, p90: 255_000 },
						years_experience: "8+",
						next_roles: &[],
						next_step_requirements: &[],
					},
				],
			},
		],
	},
];
