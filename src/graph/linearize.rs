//! Flattening a path's graph into one total order for stepper views.

use std::collections::{HashSet, VecDeque};

use crate::data::Role;
use crate::graph::entry_roles;

/// Flatten a path's role graph into a single ordered sequence.
///
/// Breadth-first from the entry roles (first authored role when none
/// exist), each role appearing once in discovery order. Roles the
/// traversal never reaches are appended afterward in authoring order, so
/// the result always contains every role exactly once. The index in the
/// returned sequence is the role's step number in linear presentations.
pub fn linearize<'a>(roles: &'a [Role]) -> Vec<&'a Role> {
	if roles.is_empty() {
		return Vec::new();
	}

	let mut ordered = Vec::with_capacity(roles.len());
	let mut visited: HashSet<&str> = HashSet::new();
	let mut queue: VecDeque<&Role> = entry_roles(roles).into();

	while let Some(role) = queue.pop_front() {
		if !visited.insert(role.id) {
			continue;
		}
		ordered.push(role);
		for id in role.next_roles {
			let Some(next) = roles.iter().find(|r| r.id == *id) else {
				continue;
			};
			if !visited.contains(next.id) {
				queue.push_back(next);
			}
		}
	}

	for role in roles {
		if !visited.contains(role.id) {
			ordered.push(role);
		}
	}
	ordered
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::fixtures::{self, role};

	fn ids(ordered: &[&Role]) -> Vec<&'static str> {
		ordered.iter().map(|r| r.id).collect()
	}

	#[test]
	fn chain_in_order() {
		let roles = fixtures::chain();
		assert_eq!(ids(&linearize(&roles)), ["a", "b", "c", "d"]);
	}

	#[test]
	fn diamond_respects_edge_direction() {
		let roles = fixtures::diamond();
		let ordered = linearize(&roles);
		assert_eq!(ordered.len(), roles.len());
		let index = |id: &str| ordered.iter().position(|r| r.id == id).unwrap();
		for r in &roles {
			for next in r.next_roles {
				assert!(index(r.id) < index(next));
			}
		}
	}

	#[test]
	fn every_role_exactly_once() {
		let roles = vec![
			role("a", &["c"]),
			role("b", &["c"]),
			role("c", &[]),
			role("island", &[]),
		];
		let ordered = linearize(&roles);
		assert_eq!(ordered.len(), roles.len());
		for r in &roles {
			assert_eq!(ordered.iter().filter(|o| o.id == r.id).count(), 1);
		}
	}

	#[test]
	fn cycle_falls_back_to_first_authored() {
		let roles = fixtures::cycle();
		assert_eq!(ids(&linearize(&roles)), ["a", "b"]);
	}

	#[test]
	fn unreached_appended_in_authoring_order() {
		let roles = vec![role("a", &[]), role("x", &["y"]), role("y", &["x"])];
		// x and y only reference each other; both unreached from "a".
		assert_eq!(ids(&linearize(&roles)), ["a", "x", "y"]);
	}

	#[test]
	fn dangling_edge_skipped() {
		let roles = vec![role("a", &["ghost", "b"]), role("b", &[])];
		assert_eq!(ids(&linearize(&roles)), ["a", "b"]);
	}

	#[test]
	fn empty_and_single() {
		assert!(linearize(&[]).is_empty());
		let solo = vec![role("solo", &[])];
		assert_eq!(ids(&linearize(&solo)), ["solo"]);
	}
}
