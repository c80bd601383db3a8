//! The static role catalog: industries, career paths and the roles that
//! form each path's directed graph.
//!
//! Everything here is `'static` and read-only. Presentation state
//! (selected, hovered, current role) lives in the UI layer keyed by role
//! id and is never written back into these types.

mod catalog;

pub use catalog::INDUSTRIES;

/// Seniority stage of a role, ordered from entry level upward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
	/// Entry level.
	Junior,
	/// Mid level individual contributor.
	Mid,
	/// Senior individual contributor.
	Senior,
	/// Staff engineer or line manager.
	Lead,
	/// Director / principal.
	Director,
	/// Vice president.
	Vp,
	/// Executive.
	CSuite,
}

impl Level {
	/// Display label, matching the authored data.
	pub fn label(self) -> &'static str {
		match self {
			Level::Junior => "Junior",
			Level::Mid => "Mid",
			Level::Senior => "Senior",
			Level::Lead => "Lead",
			Level::Director => "Director",
			Level::Vp => "VP",
			Level::CSuite => "C-Suite",
		}
	}
}

/// Authored salary band for a role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SalaryRange {
	/// Low end of the band.
	pub min: u32,
	/// High end of the band.
	pub max: u32,
	/// Median of the band; must sit between `min` and `max`.
	pub median: u32,
	/// ISO currency code.
	pub currency: &'static str,
}

/// Five-point salary distribution. Values must be non-decreasing from
/// `p10` through `p90`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SalaryPercentiles {
	/// 10th percentile.
	pub p10: u32,
	/// 25th percentile.
	pub p25: u32,
	/// 50th percentile.
	pub p50: u32,
	/// 75th percentile.
	pub p75: u32,
	/// 90th percentile.
	pub p90: u32,
}

/// Skills grouped by how central they are to the role.
#[derive(Clone, Copy, Debug)]
pub struct SkillClusters {
	/// Must-have skills.
	pub core: &'static [&'static str],
	/// Nice-to-have skills.
	pub secondary: &'static [&'static str],
	/// Non-technical skills.
	pub soft: &'static [&'static str],
}

/// One node in a career path's graph.
#[derive(Clone, Copy, Debug)]
pub struct Role {
	/// Unique within the containing path.
	pub id: &'static str,
	/// Display title.
	pub title: &'static str,
	/// Seniority stage.
	pub level: Level,
	/// Free-text summary.
	pub description: &'static str,
	/// Flat skill list, used by search.
	pub required_skills: &'static [&'static str],
	/// Categorized skills, used by the detail panel.
	pub skill_clusters: SkillClusters,
	/// Authored salary band.
	pub salary_range: SalaryRange,
	/// Authored salary distribution.
	pub salary_percentiles: SalaryPercentiles,
	/// Years-of-experience label, e.g. "3-5".
	pub years_experience: &'static str,
	/// Ids of successor roles within the same path. These are the edges
	/// of the graph.
	pub next_roles: &'static [&'static str],
	/// What it takes to reach a successor role.
	pub next_step_requirements: &'static [&'static str],
}

/// An ordered, named collection of roles forming one directed graph.
#[derive(Clone, Copy, Debug)]
pub struct CareerPath {
	/// Unique within the containing industry.
	pub id: &'static str,
	/// Display title.
	pub title: &'static str,
	/// Free-text summary.
	pub description: &'static str,
	/// Roles in authoring order.
	pub roles: &'static [Role],
}

/// A named grouping of career paths plus display metadata.
#[derive(Clone, Copy, Debug)]
pub struct Industry {
	/// Unique identifier, used in routes.
	pub id: &'static str,
	/// Display name.
	pub name: &'static str,
	/// Free-text summary.
	pub description: &'static str,
	/// Icon name, resolved by the presentation layer.
	pub icon: &'static str,
	/// Accent color hex, keys the presentation theme table.
	pub accent_color: &'static str,
	/// Career paths in authoring order.
	pub paths: &'static [CareerPath],
}

/// Look up an industry by id.
pub fn industry(id: &str) -> Option<&'static Industry> {
	INDUSTRIES.iter().find(|i| i.id == id)
}

/// Look up a path within an industry.
pub fn path(industry_id: &str, path_id: &str) -> Option<&'static CareerPath> {
	industry(industry_id)?.paths.iter().find(|p| p.id == path_id)
}

/// Compact salary formatting: `$55K`, `$1.2M`.
pub fn format_salary(amount: u32) -> String {
	if amount >= 1_000_000 {
		format!("${:.1}M", amount as f64 / 1_000_000.0)
	} else {
		format!("${}K", amount / 1000)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn all_paths() -> impl Iterator<Item = &'static CareerPath> {
		INDUSTRIES.iter().flat_map(|i| i.paths.iter())
	}

	#[test]
	fn role_ids_unique_within_path() {
		for path in all_paths() {
			for (i, role) in path.roles.iter().enumerate() {
				assert!(
					!path.roles[..i].iter().any(|r| r.id == role.id),
					"duplicate role id {} in path {}",
					role.id,
					path.id
				);
			}
		}
	}

	#[test]
	fn next_roles_resolve_within_path() {
		for path in all_paths() {
			for role in path.roles {
				for next in role.next_roles {
					assert!(
						path.roles.iter().any(|r| r.id == *next),
						"role {} references {} which is not in path {}",
						role.id,
						next,
						path.id
					);
				}
			}
		}
	}

	#[test]
	fn salary_percentiles_monotone() {
		for path in all_paths() {
			for role in path.roles {
				let p = role.salary_percentiles;
				assert!(
					p.p10 <= p.p25 && p.p25 <= p.p50 && p.p50 <= p.p75 && p.p75 <= p.p90,
					"percentiles out of order for {}",
					role.id
				);
			}
		}
	}

	#[test]
	fn salary_range_ordered() {
		for path in all_paths() {
			for role in path.roles {
				let s = role.salary_range;
				assert!(
					s.min <= s.median && s.median <= s.max,
					"salary range out of order for {}",
					role.id
				);
			}
		}
	}

	#[test]
	fn lookups() {
		assert_eq!(industry("tech").map(|i| i.name), Some("Technology"));
		assert!(industry("aerospace").is_none());
		assert_eq!(path("tech", "frontend").map(|p| p.title), Some("Frontend Engineer"));
		assert!(path("tech", "quant").is_none());
	}

	#[test]
	fn salary_formatting() {
		assert_eq!(format_salary(55_000), "$55K");
		assert_eq!(format_salary(680_000), "$680K");
		assert_eq!(format_salary(1_200_000), "$1.2M");
	}
}
