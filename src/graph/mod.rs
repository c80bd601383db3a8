//! Pure graph algorithms over one career path's role list.
//!
//! All functions here are deterministic, side-effect free and safe to
//! call on every hover or state change. Roles are addressed by string id
//! rather than index so results can be held by the UI independently of
//! the slice they were computed from. Traversals carry an explicit
//! visited set and terminate even on (unexpected) cyclic data.

mod layout;
mod linearize;
mod queries;

pub use layout::{
	COLUMN_GAP, EdgeEmphasis, EdgeRoute, NODE_HEIGHT, NODE_WIDTH, NodePosition, PADDING, ROW_GAP,
	canvas_extent, classify_edge, compute_layout, compute_levels, connections, edge_route,
};
pub use linearize::linearize;
pub use queries::{ancestors_of, neighbors_of};

use std::collections::HashSet;

use crate::data::Role;

/// Roles with no incoming edge within `roles`. Falls back to the first
/// role in authoring order when every role is referenced (cyclic or
/// malformed data), so traversals always have a starting point.
pub fn entry_roles<'a>(roles: &'a [Role]) -> Vec<&'a Role> {
	let referenced: HashSet<&str> = roles
		.iter()
		.flat_map(|r| r.next_roles.iter().copied())
		.collect();
	let entries: Vec<&Role> = roles.iter().filter(|r| !referenced.contains(r.id)).collect();
	if entries.is_empty() {
		roles.first().into_iter().collect()
	} else {
		entries
	}
}

#[cfg(test)]
pub(crate) mod fixtures {
	use crate::data::{Level, Role, SalaryPercentiles, SalaryRange, SkillClusters};

	pub fn role(id: &'static str, next_roles: &'static [&'static str]) -> Role {
		Role {
			id,
			title: id,
			level: Level::Junior,
			description: "",
			required_skills: &[],
			skill_clusters: SkillClusters { core: &[], secondary: &[], soft: &[] },
			salary_range: SalaryRange { min: 0, max: 0, median: 0, currency: "USD" },
			salary_percentiles: SalaryPercentiles { p10: 0, p25: 0, p50: 0, p75: 0, p90: 0 },
			years_experience: "0-1",
			next_roles,
			next_step_requirements: &[],
		}
	}

	/// A -> B, A -> C, B -> D, C -> D.
	pub fn diamond() -> Vec<Role> {
		vec![
			role("a", &["b", "c"]),
			role("b", &["d"]),
			role("c", &["d"]),
			role("d", &[]),
		]
	}

	/// A -> B -> C -> D.
	pub fn chain() -> Vec<Role> {
		vec![
			role("a", &["b"]),
			role("b", &["c"]),
			role("c", &["d"]),
			role("d", &[]),
		]
	}

	/// A -> B -> A: every role referenced, no entry role.
	pub fn cycle() -> Vec<Role> {
		vec![role("a", &["b"]), role("b", &["a"])]
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use fixtures::role;

	#[test]
	fn entry_roles_are_unreferenced() {
		let roles = fixtures::diamond();
		let entries = entry_roles(&roles);
		assert_eq!(entries.iter().map(|r| r.id).collect::<Vec<_>>(), ["a"]);
	}

	#[test]
	fn entry_fallback_on_cycle() {
		let roles = fixtures::cycle();
		let entries = entry_roles(&roles);
		assert_eq!(entries.iter().map(|r| r.id).collect::<Vec<_>>(), ["a"]);
	}

	#[test]
	fn multiple_entry_roles() {
		let roles = vec![role("a", &["c"]), role("b", &["c"]), role("c", &[])];
		let entries = entry_roles(&roles);
		assert_eq!(entries.iter().map(|r| r.id).collect::<Vec<_>>(), ["a", "b"]);
	}

	#[test]
	fn empty_role_list() {
		assert!(entry_roles(&[]).is_empty());
	}
}
