use leptos::prelude::*;

use crate::data::CareerPath;

/// Horizontal tab strip for switching between an industry's paths. Tabs
/// are plain links; the router swap recreates the roadmap below.
#[component]
pub fn PathSelector(
	industry_id: &'static str,
	paths: &'static [CareerPath],
	#[prop(into)] selected_id: Signal<&'static str>,
) -> impl IntoView {
	view! {
		<nav class="path-selector">
			{paths
				.iter()
				.map(|path| {
					let id = path.id;
					view! {
						<a
							class="path-tab"
							class:active=move || selected_id.get() == id
							href=format!("/roadmap/{industry_id}?path={id}")
						>
							{path.title}
						</a>
					}
				})
				.collect_view()}
		</nav>
	}
}
