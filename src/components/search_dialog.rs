use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::search::{RoleHit, search_roles};

/// Modal role search over every industry and path. The app shell owns the
/// `open` signal and toggles it from a global Ctrl/Cmd+K shortcut;
/// selecting a result navigates to that role's roadmap with the role
/// preselected.
#[component]
pub fn SearchDialog(open: RwSignal<bool>) -> impl IntoView {
	let query = RwSignal::new(String::new());
	let results = Signal::derive(move || query.with(|q| search_roles(q)));
	let input_ref = NodeRef::<leptos::html::Input>::new();

	// Focus the input whenever the dialog opens.
	Effect::new(move |_| {
		if open.get() {
			if let Some(input) = input_ref.get() {
				let _ = input.focus();
			}
		}
	});

	let close = move || {
		open.set(false);
		query.set(String::new());
	};

	view! {
		<Show when=move || open.get()>
			<div class="search-backdrop" on:click=move |_| close()>
				<div class="search-dialog" on:click=|ev| ev.stop_propagation()>
					<input
						node_ref=input_ref
						class="search-input"
						type="text"
						placeholder="Search roles, skills, industries..."
						prop:value=move || query.get()
						on:input=move |ev| query.set(event_target_value(&ev))
						on:keydown=move |ev| {
							if ev.key() == "Escape" {
								close();
							}
						}
					/>
					<div class="search-results">
						{move || {
							let hits = results.get();
							if hits.is_empty() {
								view! { <p class="search-empty">"No roles found"</p> }.into_any()
							} else {
								hits.into_iter()
									.map(|hit| search_hit(hit, open))
									.collect_view()
									.into_any()
							}
						}}
					</div>
				</div>
			</div>
		</Show>
	}
}

fn search_hit(hit: RoleHit, open: RwSignal<bool>) -> impl IntoView {
	let navigate = use_navigate();
	let href = format!(
		"/roadmap/{}?path={}&role={}",
		hit.industry.id, hit.path.id, hit.role.id
	);
	view! {
		<button
			class="search-hit"
			on:click=move |_| {
				open.set(false);
				navigate(&href, NavigateOptions::default());
			}
		>
			<span class="search-hit-title">{hit.role.title}</span>
			<span class="search-hit-context">
				{hit.industry.name} " \u{00b7} " {hit.path.title}
			</span>
			<span class="search-hit-level">{hit.role.level.label()}</span>
		</button>
	}
}
