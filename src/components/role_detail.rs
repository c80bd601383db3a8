use leptos::prelude::*;

use crate::components::salary_insight::SalaryInsight;
use crate::components::theme::level_class;
use crate::data::{CareerPath, Role};

/// Sliding side panel with everything about the selected role: level and
/// experience badges, salary insight, skill clusters, promotion
/// requirements and links to its successor roles.
#[component]
pub fn RoleDetailPanel(
	path: &'static CareerPath,
	selected: RwSignal<Option<&'static Role>>,
	current_role_id: RwSignal<Option<&'static str>>,
	#[prop(into)] previous: Signal<Option<&'static Role>>,
	#[prop(into)] on_navigate: Callback<&'static Role>,
	#[prop(into)] on_set_current: Callback<&'static str>,
) -> impl IntoView {
	view! {
		<aside class="role-detail" class:open=move || selected.get().is_some()>
			{move || {
				selected
					.get()
					.map(|role| role_content(path, role, previous.get(), current_role_id, selected, on_navigate, on_set_current))
			}}
		</aside>
	}
}

#[allow(clippy::too_many_arguments)]
fn role_content(
	path: &'static CareerPath,
	role: &'static Role,
	previous: Option<&'static Role>,
	current_role_id: RwSignal<Option<&'static str>>,
	selected: RwSignal<Option<&'static Role>>,
	on_navigate: Callback<&'static Role>,
	on_set_current: Callback<&'static str>,
) -> impl IntoView {
	let clusters = [
		("Core skills", role.skill_clusters.core),
		("Secondary skills", role.skill_clusters.secondary),
		("Soft skills", role.skill_clusters.soft),
	];
	// Dangling successor ids are simply not rendered.
	let successors: Vec<&'static Role> = role
		.next_roles
		.iter()
		.filter_map(|id| path.roles.iter().find(|r| r.id == *id))
		.collect();
	let is_current = move || current_role_id.get() == Some(role.id);

	view! {
		<div class="role-detail-body">
			<header class="role-detail-header">
				<div>
					<span class=format!("level-badge {}", level_class(role.level))>
						{role.level.label()}
					</span>
					<span class="experience-badge">{role.years_experience} " yrs"</span>
				</div>
				<button class="role-detail-close" on:click=move |_| selected.set(None)>
					"\u{00d7}"
				</button>
			</header>
			<h2>{role.title}</h2>
			<p class="role-detail-description">{role.description}</p>

			<Show
				when=is_current
				fallback=move || {
					view! {
						<button
							class="set-current"
							on:click=move |_| on_set_current.run(role.id)
						>
							"I'm here today"
						</button>
					}
				}
			>
				<p class="current-note">"This is your current role"</p>
			</Show>

			<SalaryInsight role=role previous=previous />

			{clusters
				.iter()
				.filter(|(_, skills)| !skills.is_empty())
				.map(|(title, skills)| {
					view! {
						<section class="skill-cluster">
							<h4>{*title}</h4>
							<ul class="skill-list">
								{skills
									.iter()
									.map(|skill| view! { <li class="skill-chip">{*skill}</li> })
									.collect_view()}
							</ul>
						</section>
					}
				})
				.collect_view()}

			{(!role.next_step_requirements.is_empty())
				.then(|| {
					view! {
						<section class="next-steps">
							<h4>"To reach the next step"</h4>
							<ol>
								{role
									.next_step_requirements
									.iter()
									.map(|req| view! { <li>{*req}</li> })
									.collect_view()}
							</ol>
						</section>
					}
				})}

			{(!successors.is_empty())
				.then(|| {
					view! {
						<section class="next-roles">
							<h4>"Where this can lead"</h4>
							{successors
								.into_iter()
								.map(|next| {
									view! {
										<button
											class="next-role-link"
											on:click=move |_| on_navigate.run(next)
										>
											<span>{next.title}</span>
											<span class="next-role-arrow">"\u{2192}"</span>
										</button>
									}
								})
								.collect_view()}
						</section>
					}
				})}
		</div>
	}
}
