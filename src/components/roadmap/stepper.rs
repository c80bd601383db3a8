use std::collections::HashSet;

use leptos::prelude::*;

use crate::components::theme::level_class;
use crate::data::{CareerPath, Role, format_salary};
use crate::graph::linearize;

/// How many core skills a step card previews before truncating.
const SKILL_PREVIEW: usize = 3;

/// Vertical step-by-step rendering of a path for narrow screens. The
/// graph is flattened into one sequence; branches appear as consecutive
/// steps.
#[component]
pub fn RoadmapStepper(
	path: &'static CareerPath,
	selected: RwSignal<Option<&'static Role>>,
	current_role_id: RwSignal<Option<&'static str>>,
	#[prop(into)] completed: Signal<HashSet<&'static str>>,
	#[prop(into)] on_select: Callback<&'static Role>,
) -> impl IntoView {
	let steps = linearize(path.roles);
	let last = steps.len().saturating_sub(1);

	view! {
		<ol class="roadmap-stepper">
			{steps
				.into_iter()
				.enumerate()
				.map(|(index, role)| step(index, index == last, role, selected, current_role_id, completed, on_select))
				.collect_view()}
		</ol>
	}
}

fn step(
	index: usize,
	is_last: bool,
	role: &'static Role,
	selected: RwSignal<Option<&'static Role>>,
	current_role_id: RwSignal<Option<&'static str>>,
	completed: Signal<HashSet<&'static str>>,
	on_select: Callback<&'static Role>,
) -> impl IntoView {
	let is_completed = Signal::derive(move || completed.get().contains(role.id));
	let is_current = Signal::derive(move || current_role_id.get() == Some(role.id));
	let is_selected = Signal::derive(move || selected.get().is_some_and(|r| r.id == role.id));
	let core = role.skill_clusters.core;
	let shown = &core[..core.len().min(SKILL_PREVIEW)];
	let more = core.len().saturating_sub(SKILL_PREVIEW);

	view! {
		<li class="stepper-step">
			<div class="stepper-rail">
				<span
					class="stepper-dot"
					class:completed=is_completed
					class:current=is_current
				>
					{move || {
						if is_current.get() {
							"\u{25cf}".to_string()
						} else if is_completed.get() {
							"\u{2713}".to_string()
						} else {
							(index + 1).to_string()
						}
					}}
				</span>
				<Show when=move || !is_last>
					<span class="stepper-line" class:completed=is_completed></span>
				</Show>
			</div>
			<button
				class="stepper-card"
				class:selected=is_selected
				on:click=move |_| on_select.run(role)
			>
				<div class="stepper-card-top">
					<span class=format!("level-badge {}", level_class(role.level))>
						{role.level.label()}
					</span>
					<span class="stepper-salary">{format_salary(role.salary_range.median)}</span>
				</div>
				<h3>{role.title}</h3>
				<div class="stepper-skills">
					{shown
						.iter()
						.map(|skill| view! { <span class="skill-chip">{*skill}</span> })
						.collect_view()}
					{(more > 0).then(|| view! { <span class="skill-chip skill-more">"+" {more}</span> })}
				</div>
			</button>
		</li>
	}
}
