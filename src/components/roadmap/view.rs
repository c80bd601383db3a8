use std::collections::HashSet;

use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

use super::node::RoleNode;
use crate::data::{CareerPath, Role};
use crate::graph::{
	EdgeEmphasis, PADDING, canvas_extent, classify_edge, compute_layout, connections, edge_route,
	neighbors_of,
};

/// Arrowhead length along the edge direction.
const ARROW_LENGTH: f64 = 8.0;
/// Arrowhead half-width.
const ARROW_SPREAD: f64 = 4.5;

fn emphasis_class(emphasis: EdgeEmphasis) -> &'static str {
	match emphasis {
		EdgeEmphasis::Highlighted => "edge-highlighted",
		EdgeEmphasis::Completed => "edge-completed",
		EdgeEmphasis::Active => "edge-active",
		EdgeEmphasis::Dimmed => "edge-dimmed",
	}
}

/// Rightward arrowhead anchored at the edge's entry point.
fn arrow_points((ex, ey): (f64, f64)) -> String {
	format!(
		"{ex},{ey} {bx},{ty} {bx},{by}",
		bx = ex - ARROW_LENGTH,
		ty = ey - ARROW_SPREAD,
		by = ey + ARROW_SPREAD,
	)
}

/// The scrollable roadmap diagram: routed edges in an SVG layer with the
/// role cards absolutely positioned above it. Geometry is computed once
/// per path; only edge emphasis and node state are reactive.
#[component]
pub fn RoadmapView(
	path: &'static CareerPath,
	selected: RwSignal<Option<&'static Role>>,
	highlighted: RwSignal<Option<&'static str>>,
	current_role_id: RwSignal<Option<&'static str>>,
	#[prop(into)] completed: Signal<HashSet<&'static str>>,
	#[prop(into)] on_select: Callback<&'static Role>,
) -> impl IntoView {
	let hovered = RwSignal::new(None::<&'static str>);
	let positions = compute_layout(path.roles);
	let (width, height) = canvas_extent(&positions);
	let container_ref = NodeRef::<leptos::html::Div>::new();

	// Hover takes precedence over the sticky highlight from navigation.
	let connected: Memo<Option<HashSet<&'static str>>> = Memo::new(move |_| {
		hovered
			.get()
			.or_else(|| highlighted.get())
			.map(|id| neighbors_of(path.roles, id))
	});

	// Keep the highlighted role in view when selection jumps across columns.
	let scroll_targets = positions.clone();
	Effect::new(move |_| {
		let Some(id) = highlighted.get() else {
			return;
		};
		let Some(container) = container_ref.get() else {
			return;
		};
		if let Some(pos) = scroll_targets.iter().find(|p| p.role.id == id) {
			let opts = ScrollToOptions::new();
			opts.set_left((pos.x - 2.0 * PADDING).max(0.0));
			opts.set_top(0.0);
			opts.set_behavior(ScrollBehavior::Smooth);
			container.scroll_to_with_scroll_to_options(&opts);
		}
	});

	let edges = connections(&positions)
		.into_iter()
		.map(|(from, to)| {
			let route = edge_route(&from, &to);
			let d = route.svg_path();
			let arrow = arrow_points(route.end());
			let (from_id, to_id) = (from.role.id, to.role.id);
			let emphasis = Memo::new(move |_| {
				classify_edge(
					from_id,
					to_id,
					connected.get().as_ref(),
					&completed.get(),
					current_role_id.get(),
				)
			});
			view! {
				<g class=move || format!("edge {}", emphasis_class(emphasis.get()))>
					<path d=d fill="none" />
					<polygon points=arrow />
				</g>
			}
		})
		.collect_view();

	let nodes = positions
		.iter()
		.map(|pos| {
			let role = pos.role;
			let is_active = Signal::derive(move || {
				current_role_id.get() == Some(role.id)
					|| selected.get().is_some_and(|r| r.id == role.id)
					|| highlighted.get() == Some(role.id)
			});
			let is_completed = Signal::derive(move || completed.get().contains(role.id));
			let is_current = Signal::derive(move || current_role_id.get() == Some(role.id));
			let is_dimmed =
				Signal::derive(move || connected.get().is_some_and(|set| !set.contains(role.id)));
			view! {
				<RoleNode
					role=role
					x=pos.x
					y=pos.y
					is_active=is_active
					is_completed=is_completed
					is_current=is_current
					is_dimmed=is_dimmed
					hovered=hovered
					on_select=on_select
				/>
			}
		})
		.collect_view();

	view! {
		<div class="roadmap-canvas" node_ref=container_ref>
			<div
				class="roadmap-surface"
				style:width=format!("{width}px")
				style:height=format!("{height}px")
			>
				<svg class="roadmap-edges" width=width.to_string() height=height.to_string()>
					{edges}
				</svg>
				{nodes}
			</div>
		</div>
	}
}
