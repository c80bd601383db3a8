use leptos::prelude::*;
use leptos_router::components::A;

/// 404 - Not Found
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<main class="not-found">
			<h1>"404"</h1>
			<p>"This page does not exist."</p>
			<A href="/">"Back to the roadmaps"</A>
		</main>
	}
}
