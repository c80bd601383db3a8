use leptos::prelude::*;

use crate::components::IndustryCard;
use crate::data::INDUSTRIES;

/// Landing page: hero, catalog stats and one card per industry.
#[component]
pub fn Home() -> impl IntoView {
	let path_count: usize = INDUSTRIES.iter().map(|i| i.paths.len()).sum();
	let role_count: usize = INDUSTRIES
		.iter()
		.flat_map(|i| i.paths)
		.map(|p| p.roles.len())
		.sum();

	view! {
		<main class="home">
			<section class="hero">
				<h1>"Map your next career move"</h1>
				<p class="subtitle">
					"Interactive roadmaps for every stage, with real salary bands, \
					 the skills each step demands, and what it takes to reach the next one."
				</p>
				<div class="hero-stats">
					<div class="hero-stat">
						<strong>{INDUSTRIES.len()}</strong>
						<span>"industries"</span>
					</div>
					<div class="hero-stat">
						<strong>{path_count}</strong>
						<span>"career paths"</span>
					</div>
					<div class="hero-stat">
						<strong>{role_count}</strong>
						<span>"roles mapped"</span>
					</div>
				</div>
			</section>

			<section class="industries">
				<h2>"Pick an industry"</h2>
				<div class="industry-grid">
					{INDUSTRIES
						.iter()
						.map(|industry| view! { <IndustryCard industry=industry /> })
						.collect_view()}
				</div>
			</section>
		</main>
	}
}
