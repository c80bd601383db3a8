use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::{use_params_map, use_query_map};

use crate::components::theme::accent_theme;
use crate::components::{PathSelector, RoadmapStepper, RoadmapView, RoleDetailPanel};
use crate::data::{self, CareerPath, Industry, Role};
use crate::graph::ancestors_of;

/// Per-industry roadmap page. The industry comes from the route path,
/// the active career path and an optional preselected role from the
/// query string. Switching paths navigates, which recreates the whole
/// roadmap section and so resets selection and progress state.
#[component]
pub fn RoadmapPage() -> impl IntoView {
	let params = use_params_map();
	let query = use_query_map();

	let industry = Signal::derive(move || {
		params.with(|p| p.get("industry").and_then(|id| data::industry(&id)))
	});
	let current_path = Signal::derive(move || {
		let ind = industry.get()?;
		match query.with(|q| q.get("path")) {
			Some(id) => ind.paths.iter().find(|p| p.id == id),
			None => ind.paths.first(),
		}
	});

	view! {
		{move || match (industry.get(), current_path.get()) {
			(Some(ind), Some(path)) => {
				view! { <RoadmapContent industry=ind path=path /> }.into_any()
			}
			_ => {
				view! {
					<main class="roadmap-missing">
						<h1>"Unknown roadmap"</h1>
						<p>"We don't have a roadmap for that industry yet."</p>
						<A href="/">"Browse industries"</A>
					</main>
				}
				.into_any()
			}
		}}
	}
}

/// Everything below the navbar for one (industry, path) pair. Recreated
/// whenever either changes, so all selection state starts fresh.
#[component]
fn RoadmapContent(industry: &'static Industry, path: &'static CareerPath) -> impl IntoView {
	let theme = accent_theme(industry.accent_color);

	// ?role=<id> preselects and highlights a role, used by search results.
	let initial = use_query_map()
		.with_untracked(|q| q.get("role"))
		.and_then(|id| path.roles.iter().find(|r| r.id == id));
	let selected = RwSignal::new(initial);
	let highlighted = RwSignal::new(initial.map(|r| r.id));
	let current_role_id = RwSignal::new(None::<&'static str>);

	// Marking a role as current completes all of its ancestors.
	let completed = Memo::new(move |_| {
		current_role_id
			.get()
			.map(|id| ancestors_of(path.roles, id))
			.unwrap_or_default()
	});
	let previous = Signal::derive(move || {
		let role = selected.get()?;
		path.roles
			.iter()
			.find(|r| r.next_roles.iter().any(|n| *n == role.id))
	});
	let current_role = move || {
		current_role_id
			.get()
			.and_then(|id| path.roles.iter().find(|r| r.id == id))
	};

	let on_select = Callback::new(move |role: &'static Role| selected.set(Some(role)));
	let on_navigate = Callback::new(move |role: &'static Role| {
		selected.set(Some(role));
		highlighted.set(Some(role.id));
	});
	let on_set_current = Callback::new(move |id: &'static str| current_role_id.set(Some(id)));

	view! {
		<Title text=format!("{} | Pathfinder", industry.name) />
		<main
			class="roadmap-page"
			style=("--accent", theme.color)
			style=("--accent-rgb", theme.rgb)
			style=("--accent-glow", theme.glow)
		>
			<header class="roadmap-header">
				<A href="/" attr:class="back-link">"\u{2190} All industries"</A>
				<h1>{industry.name}</h1>
				<p>{path.description}</p>
			</header>

			<PathSelector
				industry_id=industry.id
				paths=industry.paths
				selected_id=Signal::derive(move || path.id)
			/>

			<Show when=move || current_role_id.get().is_some()>
				<div class="progress-banner">
					<span>
						"Tracking progress from "
						<strong>
							{move || current_role().map(|r| r.title).unwrap_or_default()}
						</strong>
					</span>
					<button on:click=move |_| current_role_id.set(None)>"Clear"</button>
				</div>
			</Show>

			<div class="roadmap-desktop">
				<RoadmapView
					path=path
					selected=selected
					highlighted=highlighted
					current_role_id=current_role_id
					completed=completed
					on_select=on_select
				/>
				<div class="roadmap-legend">
					<span class="legend-item legend-completed">"Completed"</span>
					<span class="legend-item legend-current">"Current role"</span>
					<span class="legend-item legend-upcoming">"Ahead of you"</span>
				</div>
			</div>

			<div class="roadmap-mobile">
				<RoadmapStepper
					path=path
					selected=selected
					current_role_id=current_role_id
					completed=completed
					on_select=on_select
				/>
			</div>

			<RoleDetailPanel
				path=path
				selected=selected
				current_role_id=current_role_id
				previous=previous
				on_navigate=on_navigate
				on_set_current=on_set_current
			/>
			<Show when=move || selected.get().is_some()>
				<div class="detail-backdrop" on:click=move |_| selected.set(None)></div>
			</Show>
		</main>
	}
}
