use leptos::prelude::*;
use leptos_router::components::A;

/// Fixed top navigation bar with the brand link and the search trigger.
#[component]
pub fn Navbar(#[prop(into)] on_search_open: Callback<()>) -> impl IntoView {
	view! {
		<header class="navbar">
			<A href="/" attr:class="navbar-brand">
				<span class="navbar-mark">"P"</span>
				<span>"Pathfinder"</span>
			</A>
			<button
				class="navbar-search"
				on:click=move |_| on_search_open.run(())
			>
				<span>"Search roles"</span>
				<kbd>"\u{2318}K"</kbd>
			</button>
		</header>
	}
}
