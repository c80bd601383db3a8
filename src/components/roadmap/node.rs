use leptos::prelude::*;

use crate::components::theme::level_class;
use crate::data::{Role, format_salary};
use crate::graph::{NODE_HEIGHT, NODE_WIDTH};

/// One positioned role card on the diagram surface.
#[component]
pub fn RoleNode(
	role: &'static Role,
	x: f64,
	y: f64,
	#[prop(into)] is_active: Signal<bool>,
	#[prop(into)] is_completed: Signal<bool>,
	#[prop(into)] is_current: Signal<bool>,
	#[prop(into)] is_dimmed: Signal<bool>,
	hovered: RwSignal<Option<&'static str>>,
	#[prop(into)] on_select: Callback<&'static Role>,
) -> impl IntoView {
	view! {
		<div
			class="role-node"
			class:active=is_active
			class:completed=is_completed
			class:current=is_current
			class:dimmed=is_dimmed
			style:left=format!("{x}px")
			style:top=format!("{y}px")
			style:width=format!("{NODE_WIDTH}px")
			style:height=format!("{NODE_HEIGHT}px")
			on:click=move |_| on_select.run(role)
			on:mouseenter=move |_| hovered.set(Some(role.id))
			on:mouseleave=move |_| hovered.set(None)
		>
			<div class="role-node-top">
				<span class=format!("level-badge {}", level_class(role.level))>
					{role.level.label()}
				</span>
				<Show when=move || is_current.get()>
					<span class="you-pill">"YOU"</span>
				</Show>
				<Show when=move || is_completed.get() && !is_current.get()>
					<span class="completed-check">"\u{2713}"</span>
				</Show>
			</div>
			<h3 class="role-node-title">{role.title}</h3>
			<div class="role-node-meta">
				<span>{format_salary(role.salary_range.median)} " median"</span>
				<span>{role.years_experience} " yrs"</span>
			</div>
		</div>
	}
}
