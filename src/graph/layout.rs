//! Layered diagram layout: topological leveling, column positioning and
//! circuit-board edge routing.
//!
//! Columns are topological levels (breadth-first from the entry roles);
//! rows within a column are stacked with a fixed gap and centered against
//! a nominal viewport height. All geometry is a pure function of the role
//! list, so the consumer recomputes it whenever the active path changes.

use std::collections::HashSet;

use crate::data::Role;
use crate::graph::entry_roles;

/// Node bounding-box width in layout units.
pub const NODE_WIDTH: f64 = 250.0;
/// Node bounding-box height in layout units.
pub const NODE_HEIGHT: f64 = 105.0;
/// Horizontal distance between column origins.
pub const COLUMN_GAP: f64 = 320.0;
/// Vertical distance between row origins within a column.
pub const ROW_GAP: f64 = 148.0;
/// Margin kept clear on the top and left of the diagram.
pub const PADDING: f64 = 60.0;

/// Nominal height the column stacks are centered against.
const VIEWPORT_HEIGHT: f64 = 420.0;
/// Extra space added past the furthest node when sizing the surface.
const EXTENT_MARGIN: f64 = 80.0;
/// Corner rounding for orthogonal edge turns, before clamping.
const CORNER_RADIUS: f64 = 14.0;
/// Below this vertical delta two endpoints count as the same row.
const SAME_ROW_EPSILON: f64 = 2.0;

/// A role placed on the drawing surface. `x`/`y` is the top-left corner
/// of its bounding box.
#[derive(Clone, Copy, Debug)]
pub struct NodePosition<'a> {
	/// Left edge.
	pub x: f64,
	/// Top edge.
	pub y: f64,
	/// The placed role.
	pub role: &'a Role,
}

/// Topological layering of a path's roles.
///
/// Level 0 holds the entry roles; each following level holds the
/// not-yet-placed successors of the previous one. A role reached through
/// several converging paths is placed once, at the earliest level that
/// reaches it. Roles the traversal never reaches (disconnected, or only
/// reachable through a cycle) are appended as one final level in
/// authoring order.
pub fn compute_levels<'a>(roles: &'a [Role]) -> Vec<Vec<&'a Role>> {
	if roles.is_empty() {
		return Vec::new();
	}

	let mut levels: Vec<Vec<&Role>> = Vec::new();
	let mut visited: HashSet<&str> = HashSet::new();
	let mut current = entry_roles(roles);

	while !current.is_empty() {
		let level: Vec<&Role> = current
			.iter()
			.copied()
			.filter(|r| !visited.contains(r.id))
			.collect();
		if level.is_empty() {
			break;
		}
		for r in &level {
			visited.insert(r.id);
		}

		let mut next: Vec<&Role> = Vec::new();
		for r in &level {
			for id in r.next_roles {
				// Dangling successor ids are authoring defects; skip them.
				let Some(succ) = roles.iter().find(|c| c.id == *id) else {
					continue;
				};
				if !visited.contains(succ.id) && !next.iter().any(|n| n.id == succ.id) {
					next.push(succ);
				}
			}
		}
		levels.push(level);
		current = next;
	}

	let unreached: Vec<&Role> = roles.iter().filter(|r| !visited.contains(r.id)).collect();
	if !unreached.is_empty() {
		levels.push(unreached);
	}
	levels
}

/// Positions for every role in `roles`, one per role, columns left to
/// right by level and rows vertically centered per column.
pub fn compute_layout<'a>(roles: &'a [Role]) -> Vec<NodePosition<'a>> {
	let mut positions = Vec::with_capacity(roles.len());
	for (col, level) in compute_levels(roles).into_iter().enumerate() {
		let n = level.len() as f64;
		let stack_height = n * NODE_HEIGHT + (n - 1.0) * (ROW_GAP - NODE_HEIGHT);
		let start_y = ((VIEWPORT_HEIGHT - stack_height) / 2.0).max(PADDING);
		for (row, role) in level.into_iter().enumerate() {
			positions.push(NodePosition {
				x: PADDING + col as f64 * COLUMN_GAP,
				y: start_y + row as f64 * ROW_GAP,
				role,
			});
		}
	}
	positions
}

/// Overall drawing-surface size: furthest node corner plus a margin, so
/// the renderer knows how large to make the scrollable area.
pub fn canvas_extent(positions: &[NodePosition<'_>]) -> (f64, f64) {
	if positions.is_empty() {
		return (0.0, 0.0);
	}
	let max_x = positions.iter().fold(0.0_f64, |m, p| m.max(p.x));
	let max_y = positions.iter().fold(0.0_f64, |m, p| m.max(p.y));
	(max_x + NODE_WIDTH + EXTENT_MARGIN, max_y + NODE_HEIGHT + EXTENT_MARGIN)
}

/// Every `(from, to)` position pair implied by `next_roles` edges among
/// the positioned roles. Edges whose target was never positioned
/// (dangling id) are skipped.
pub fn connections<'a>(
	positions: &[NodePosition<'a>],
) -> Vec<(NodePosition<'a>, NodePosition<'a>)> {
	let mut out = Vec::new();
	for from in positions {
		for id in from.role.next_roles {
			if let Some(to) = positions.iter().find(|p| p.role.id == *id) {
				out.push((*from, *to));
			}
		}
	}
	out
}

/// Routed geometry for one edge, from the right edge of the source box to
/// the left edge of the target box.
#[derive(Clone, Debug, PartialEq)]
pub enum EdgeRoute {
	/// Both endpoints share a row: a single horizontal segment.
	Straight {
		/// Exit point on the source box.
		start: (f64, f64),
		/// Entry point on the target box.
		end: (f64, f64),
	},
	/// Orthogonal route: horizontal, a vertical run at the midpoint
	/// between the boxes, then horizontal into the target.
	Orthogonal {
		/// Exit point on the source box.
		start: (f64, f64),
		/// Entry point on the target box.
		end: (f64, f64),
		/// X coordinate of the vertical run.
		mid_x: f64,
		/// Corner radius after clamping against the travel distances.
		radius: f64,
	},
}

/// Route an edge between two positioned roles. Pure function of the two
/// endpoints; recompute whenever positions change.
pub fn edge_route(from: &NodePosition<'_>, to: &NodePosition<'_>) -> EdgeRoute {
	let start = (from.x + NODE_WIDTH, from.y + NODE_HEIGHT / 2.0);
	let end = (to.x, to.y + NODE_HEIGHT / 2.0);

	if (start.1 - end.1).abs() < SAME_ROW_EPSILON {
		return EdgeRoute::Straight { start, end };
	}

	let mid_x = (start.0 + end.0) / 2.0;
	// Clamp so the rounding never overshoots a short vertical or
	// horizontal run.
	let radius = CORNER_RADIUS
		.min((end.1 - start.1).abs() / 2.0)
		.min((end.0 - start.0) / 4.0);
	EdgeRoute::Orthogonal { start, end, mid_x, radius }
}

impl EdgeRoute {
	/// The point where the edge meets the target box, where the renderer
	/// anchors the arrowhead.
	pub fn end(&self) -> (f64, f64) {
		match self {
			EdgeRoute::Straight { end, .. } | EdgeRoute::Orthogonal { end, .. } => *end,
		}
	}

	/// SVG path data for this route, with quadratic corner rounding on
	/// the orthogonal turns.
	pub fn svg_path(&self) -> String {
		match *self {
			EdgeRoute::Straight { start: (sx, sy), end: (ex, ey) } => {
				format!("M {sx} {sy} L {ex} {ey}")
			}
			EdgeRoute::Orthogonal { start: (sx, sy), end: (ex, ey), mid_x, radius: r } => {
				if ey > sy {
					format!(
						"M {sx} {sy} L {} {sy} Q {mid_x} {sy} {mid_x} {} L {mid_x} {} Q {mid_x} {ey} {} {ey} L {ex} {ey}",
						mid_x - r,
						sy + r,
						ey - r,
						mid_x + r,
					)
				} else {
					format!(
						"M {sx} {sy} L {} {sy} Q {mid_x} {sy} {mid_x} {} L {mid_x} {} Q {mid_x} {ey} {} {ey} L {ex} {ey}",
						mid_x - r,
						sy - r,
						ey + r,
						mid_x + r,
					)
				}
			}
		}
	}
}

/// Stroke emphasis for one edge. Drives styling only, never geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeEmphasis {
	/// Both endpoints are in the active neighbor set.
	Highlighted,
	/// Both endpoints lie behind the current role and no highlight is
	/// active.
	Completed,
	/// No highlight active and not yet completed.
	Active,
	/// A highlight is active elsewhere; this edge recedes.
	Dimmed,
}

/// Classify one edge against the hover/highlight set and the completed
/// set derived from the current role.
pub fn classify_edge(
	from_id: &str,
	to_id: &str,
	connected: Option<&HashSet<&str>>,
	completed: &HashSet<&str>,
	current_id: Option<&str>,
) -> EdgeEmphasis {
	if let Some(set) = connected {
		if set.contains(from_id) && set.contains(to_id) {
			EdgeEmphasis::Highlighted
		} else {
			EdgeEmphasis::Dimmed
		}
	} else if completed.contains(from_id)
		&& (completed.contains(to_id) || current_id == Some(to_id))
	{
		EdgeEmphasis::Completed
	} else {
		EdgeEmphasis::Active
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::fixtures::{self, role};

	fn level_ids(levels: &[Vec<&Role>]) -> Vec<Vec<&'static str>> {
		levels
			.iter()
			.map(|l| l.iter().map(|r| r.id).collect())
			.collect()
	}

	#[test]
	fn diamond_levels() {
		let roles = fixtures::diamond();
		assert_eq!(level_ids(&compute_levels(&roles)), [vec!["a"], vec!["b", "c"], vec!["d"]]);
	}

	#[test]
	fn leveling_is_topological() {
		let roles = fixtures::diamond();
		let levels = compute_levels(&roles);
		let level_of = |id: &str| {
			levels
				.iter()
				.position(|l| l.iter().any(|r| r.id == id))
				.unwrap()
		};
		for r in &roles {
			for next in r.next_roles {
				assert!(level_of(r.id) < level_of(next));
			}
		}
	}

	#[test]
	fn layout_places_each_role_once() {
		let roles = fixtures::diamond();
		let positions = compute_layout(&roles);
		assert_eq!(positions.len(), roles.len());
		for r in &roles {
			assert_eq!(positions.iter().filter(|p| p.role.id == r.id).count(), 1);
		}
	}

	#[test]
	fn layout_is_deterministic() {
		let roles = fixtures::diamond();
		let a = compute_layout(&roles);
		let b = compute_layout(&roles);
		for (p, q) in a.iter().zip(&b) {
			assert_eq!((p.x, p.y, p.role.id), (q.x, q.y, q.role.id));
		}
	}

	#[test]
	fn columns_advance_by_gap() {
		let roles = fixtures::chain();
		let positions = compute_layout(&roles);
		for (i, p) in positions.iter().enumerate() {
			assert_eq!(p.x, PADDING + i as f64 * COLUMN_GAP);
		}
	}

	#[test]
	fn single_role_clamps_to_padding() {
		let roles = vec![role("solo", &[])];
		let positions = compute_layout(&roles);
		assert_eq!(positions.len(), 1);
		assert_eq!(positions[0].x, PADDING);
		// One 105-high node centered in 420 sits below the padding floor.
		assert_eq!(positions[0].y, (VIEWPORT_HEIGHT - NODE_HEIGHT) / 2.0);
	}

	#[test]
	fn tall_column_clamps_to_padding() {
		let roles = vec![
			role("a", &["b", "c", "d", "e"]),
			role("b", &[]),
			role("c", &[]),
			role("d", &[]),
			role("e", &[]),
		];
		let positions = compute_layout(&roles);
		let col1_top = positions
			.iter()
			.filter(|p| p.role.id != "a")
			.fold(f64::MAX, |m, p| m.min(p.y));
		assert_eq!(col1_top, PADDING);
	}

	#[test]
	fn cycle_still_layouts_every_role() {
		let roles = fixtures::cycle();
		let levels = compute_levels(&roles);
		assert_eq!(level_ids(&levels), [vec!["a"], vec!["b"]]);
		assert_eq!(compute_layout(&roles).len(), 2);
	}

	#[test]
	fn disconnected_role_appended_as_final_level() {
		let roles = vec![role("a", &["b"]), role("b", &[]), role("island", &[])];
		// "island" is unreferenced, so it is an entry role too.
		let levels = compute_levels(&roles);
		assert_eq!(level_ids(&levels), [vec!["a", "island"], vec!["b"]]);

		// Only reachable via a cycle: never visited, appended at the end.
		let roles = vec![role("a", &["b"]), role("b", &[]), role("x", &["y"]), role("y", &["x"])];
		let levels = compute_levels(&roles);
		assert_eq!(level_ids(&levels), [vec!["a"], vec!["b"], vec!["x", "y"]]);
	}

	#[test]
	fn empty_roles_empty_layout() {
		assert!(compute_levels(&[]).is_empty());
		assert!(compute_layout(&[]).is_empty());
		assert_eq!(canvas_extent(&[]), (0.0, 0.0));
	}

	#[test]
	fn extent_covers_furthest_node() {
		let roles = fixtures::chain();
		let positions = compute_layout(&roles);
		let (w, h) = canvas_extent(&positions);
		assert_eq!(w, PADDING + 3.0 * COLUMN_GAP + NODE_WIDTH + 80.0);
		assert!(h > NODE_HEIGHT);
	}

	#[test]
	fn connections_skip_dangling_edges() {
		let roles = vec![role("a", &["b", "ghost"]), role("b", &[])];
		let positions = compute_layout(&roles);
		let conns = connections(&positions);
		assert_eq!(conns.len(), 1);
		assert_eq!((conns[0].0.role.id, conns[0].1.role.id), ("a", "b"));
	}

	#[test]
	fn same_row_edge_is_straight() {
		let a = role("a", &["b"]);
		let b = role("b", &[]);
		let from = NodePosition { x: 60.0, y: 100.0, role: &a };
		let to = NodePosition { x: 380.0, y: 101.0, role: &b };
		match edge_route(&from, &to) {
			EdgeRoute::Straight { start, end } => {
				assert_eq!(start, (60.0 + NODE_WIDTH, 100.0 + NODE_HEIGHT / 2.0));
				assert_eq!(end, (380.0, 101.0 + NODE_HEIGHT / 2.0));
			}
			other => panic!("expected straight route, got {other:?}"),
		}
	}

	#[test]
	fn offset_rows_route_orthogonally() {
		let a = role("a", &["b"]);
		let b = role("b", &[]);
		let from = NodePosition { x: 60.0, y: 60.0, role: &a };
		let to = NodePosition { x: 380.0, y: 208.0, role: &b };
		match edge_route(&from, &to) {
			EdgeRoute::Orthogonal { start, end, mid_x, radius } => {
				assert_eq!(mid_x, (start.0 + end.0) / 2.0);
				assert_eq!(radius, 14.0);
				assert!(end.1 > start.1);
			}
			other => panic!("expected orthogonal route, got {other:?}"),
		}
	}

	#[test]
	fn corner_radius_clamped_on_short_edges() {
		let a = role("a", &["b"]);
		let b = role("b", &[]);
		// Vertical travel of 10 clamps the radius to 5.
		let from = NodePosition { x: 60.0, y: 60.0, role: &a };
		let to = NodePosition { x: 380.0, y: 70.0, role: &b };
		match edge_route(&from, &to) {
			EdgeRoute::Orthogonal { radius, .. } => assert_eq!(radius, 5.0),
			other => panic!("expected orthogonal route, got {other:?}"),
		}
	}

	#[test]
	fn svg_path_shapes() {
		let a = role("a", &["b"]);
		let b = role("b", &[]);
		let from = NodePosition { x: 0.0, y: 0.0, role: &a };
		let same = NodePosition { x: 320.0, y: 0.0, role: &b };
		assert_eq!(edge_route(&from, &same).svg_path(), "M 250 52.5 L 320 52.5");

		let below = NodePosition { x: 320.0, y: 148.0, role: &b };
		let d = edge_route(&from, &below).svg_path();
		assert!(d.starts_with("M 250 52.5 L "));
		assert_eq!(d.matches('Q').count(), 2);
	}

	#[test]
	fn edge_classification() {
		use std::collections::HashSet;

		let completed: HashSet<&str> = ["a", "b"].into();
		// Highlight wins over everything else.
		let connected: HashSet<&str> = ["a", "b"].into();
		assert_eq!(
			classify_edge("a", "b", Some(&connected), &completed, Some("c")),
			EdgeEmphasis::Highlighted
		);
		assert_eq!(
			classify_edge("b", "c", Some(&connected), &completed, Some("c")),
			EdgeEmphasis::Dimmed
		);
		// Without a highlight, edges behind the current role are completed.
		assert_eq!(
			classify_edge("a", "b", None, &completed, Some("c")),
			EdgeEmphasis::Completed
		);
		// Edge into the current role counts as completed too.
		assert_eq!(
			classify_edge("b", "c", None, &completed, Some("c")),
			EdgeEmphasis::Completed
		);
		assert_eq!(
			classify_edge("c", "d", None, &completed, Some("c")),
			EdgeEmphasis::Active
		);
		assert_eq!(
			classify_edge("a", "b", None, &HashSet::new(), None),
			EdgeEmphasis::Active
		);
	}
}
