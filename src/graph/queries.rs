//! Ancestor and neighbor queries used for progress tracking and hover
//! highlighting.

use std::collections::HashSet;

use crate::data::Role;

/// All transitive predecessors of `target_id`: every role from which the
/// target is reachable by following `next_roles` edges. The target itself
/// is excluded. An id not present in `roles` yields the empty set.
///
/// Implemented as an iterative reverse-edge search with a visited set, so
/// it terminates on cyclic data and never recurses.
pub fn ancestors_of<'a>(roles: &'a [Role], target_id: &str) -> HashSet<&'a str> {
	let mut ancestors = HashSet::new();
	let Some(target) = roles.iter().find(|r| r.id == target_id) else {
		return ancestors;
	};

	let mut stack = vec![target.id];
	while let Some(id) = stack.pop() {
		for role in roles {
			if role.id == target.id {
				continue;
			}
			if role.next_roles.iter().any(|n| *n == id) && ancestors.insert(role.id) {
				stack.push(role.id);
			}
		}
	}
	ancestors
}

/// The hovered role plus everything one hop away in either direction:
/// its direct successors and every role that lists it as a successor.
/// Not transitive. An id not present in `roles` yields the empty set.
pub fn neighbors_of<'a>(roles: &'a [Role], hovered_id: &str) -> HashSet<&'a str> {
	let mut connected = HashSet::new();
	let Some(role) = roles.iter().find(|r| r.id == hovered_id) else {
		return connected;
	};

	connected.insert(role.id);
	for next in role.next_roles {
		connected.insert(*next);
	}
	for r in roles {
		if r.next_roles.iter().any(|n| *n == role.id) {
			connected.insert(r.id);
		}
	}
	connected
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::fixtures::{self, role};

	fn ids<'a>(set: &HashSet<&'a str>) -> Vec<&'a str> {
		let mut v: Vec<_> = set.iter().copied().collect();
		v.sort_unstable();
		v
	}

	#[test]
	fn chain_ancestors() {
		let roles = fixtures::chain();
		assert_eq!(ids(&ancestors_of(&roles, "d")), ["a", "b", "c"]);
		assert!(ancestors_of(&roles, "a").is_empty());
	}

	#[test]
	fn diamond_ancestors() {
		let roles = fixtures::diamond();
		assert_eq!(ids(&ancestors_of(&roles, "d")), ["a", "b", "c"]);
		assert_eq!(ids(&ancestors_of(&roles, "b")), ["a"]);
	}

	#[test]
	fn unknown_target_is_empty() {
		let roles = fixtures::chain();
		assert!(ancestors_of(&roles, "nope").is_empty());
		assert!(neighbors_of(&roles, "nope").is_empty());
	}

	#[test]
	fn cycle_terminates_and_excludes_target() {
		let roles = fixtures::cycle();
		assert_eq!(ids(&ancestors_of(&roles, "a")), ["b"]);
	}

	#[test]
	fn neighbors_one_hop_both_directions() {
		let roles = vec![role("a", &["b", "c"]), role("b", &[]), role("c", &[])];
		assert_eq!(ids(&neighbors_of(&roles, "a")), ["a", "b", "c"]);
		assert_eq!(ids(&neighbors_of(&roles, "b")), ["a", "b"]);
	}

	#[test]
	fn neighbors_not_transitive() {
		let roles = fixtures::chain();
		assert_eq!(ids(&neighbors_of(&roles, "b")), ["a", "b", "c"]);
	}

	#[test]
	fn single_role_has_no_ancestors() {
		let roles = vec![role("solo", &[])];
		assert!(ancestors_of(&roles, "solo").is_empty());
		assert_eq!(ids(&neighbors_of(&roles, "solo")), ["solo"]);
	}
}
