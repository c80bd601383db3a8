//! Text search over the flattened role catalog.

use crate::data::{CareerPath, INDUSTRIES, Industry, Role};

/// How many roles to surface when the query is empty.
const EMPTY_QUERY_LIMIT: usize = 8;

/// One searchable role together with where it lives, enough to render a
/// result row and build its roadmap link.
#[derive(Clone, Copy, Debug)]
pub struct RoleHit {
	/// Containing industry.
	pub industry: &'static Industry,
	/// Containing path.
	pub path: &'static CareerPath,
	/// The role itself.
	pub role: &'static Role,
}

/// Every role in the catalog, flattened in authoring order.
pub fn all_roles() -> Vec<RoleHit> {
	flatten(INDUSTRIES)
}

/// Case-insensitive substring filter over role title, required skills,
/// industry name and path title. An empty or whitespace query returns the
/// first few roles instead of everything.
pub fn search_roles(query: &str) -> Vec<RoleHit> {
	filter(INDUSTRIES, query)
}

fn flatten(industries: &'static [Industry]) -> Vec<RoleHit> {
	let mut hits = Vec::new();
	for industry in industries {
		for path in industry.paths {
			for role in path.roles {
				hits.push(RoleHit { industry, path, role });
			}
		}
	}
	hits
}

fn filter(industries: &'static [Industry], query: &str) -> Vec<RoleHit> {
	let all = flatten(industries);
	let q = query.trim().to_lowercase();
	if q.is_empty() {
		return all.into_iter().take(EMPTY_QUERY_LIMIT).collect();
	}
	all.into_iter().filter(|hit| matches(hit, &q)).collect()
}

fn matches(hit: &RoleHit, q: &str) -> bool {
	let contains = |s: &str| s.to_lowercase().contains(q);
	contains(hit.role.title)
		|| hit.role.required_skills.iter().any(|s| contains(s))
		|| contains(hit.industry.name)
		|| contains(hit.path.title)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_query_returns_leading_roles() {
		let hits = search_roles("   ");
		assert_eq!(hits.len(), EMPTY_QUERY_LIMIT);
		assert_eq!(hits[0].role.id, "fe-intern");
	}

	#[test]
	fn matches_role_title_case_insensitively() {
		let hits = search_roles("quant analyst");
		assert!(hits.iter().any(|h| h.role.id == "q-mid"));
	}

	#[test]
	fn matches_skills() {
		let hits = search_roles("kubernetes");
		assert!(hits.iter().any(|h| h.role.id == "be-senior"));
	}

	#[test]
	fn matches_industry_and_path() {
		// Industry name matches pull in every role of that industry.
		let marketing: usize = INDUSTRIES
			.iter()
			.filter(|i| i.id == "marketing")
			.flat_map(|i| i.paths)
			.map(|p| p.roles.len())
			.sum();
		assert!(search_roles("marketing").len() >= marketing);

		let hits = search_roles("investment banking");
		assert!(hits.iter().any(|h| h.path.id == "investment-banking"));
	}

	#[test]
	fn no_match_is_empty() {
		assert!(search_roles("zookeeper wrangler").is_empty());
	}

	#[test]
	fn all_roles_covers_catalog() {
		let expected: usize = INDUSTRIES
			.iter()
			.flat_map(|i| i.paths)
			.map(|p| p.roles.len())
			.sum();
		assert_eq!(all_roles().len(), expected);
	}
}
