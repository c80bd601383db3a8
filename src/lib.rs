//! Leptos client-side app wiring and routes.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};
use wasm_bindgen::prelude::*;
use web_sys::KeyboardEvent;

// Modules
mod components;
pub mod data;
pub mod graph;
mod pages;
pub mod search;

// Top-Level pages
use crate::components::{Navbar, SearchDialog};
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;
use crate::pages::roadmap::RoadmapPage;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders the homepage, the per-industry roadmap and
/// handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	// The search dialog is global; Ctrl/Cmd+K toggles it from anywhere.
	// The listener lives for the whole app, so the closure is leaked on
	// purpose.
	let search_open = RwSignal::new(false);
	let keydown: Closure<dyn FnMut(KeyboardEvent)> = Closure::new(move |ev: KeyboardEvent| {
		if (ev.meta_key() || ev.ctrl_key()) && ev.key().eq_ignore_ascii_case("k") {
			ev.prevent_default();
			search_open.update(|o| *o = !*o);
		}
	});
	if let Some(window) = web_sys::window() {
		let _ =
			window.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
	}
	keydown.forget();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		// sets the document title
		<Title text="Pathfinder | Career Roadmaps" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Navbar on_search_open=move |()| search_open.set(true) />
			<SearchDialog open=search_open />
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
				<Route path=path!("/roadmap/:industry") view=RoadmapPage />
			</Routes>
		</Router>
	}
}
