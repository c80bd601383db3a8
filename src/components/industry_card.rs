use leptos::prelude::*;

use crate::components::theme::accent_theme;
use crate::data::Industry;

/// Home page card linking into one industry's roadmap. The link lands on
/// the industry's first path.
#[component]
pub fn IndustryCard(industry: &'static Industry) -> impl IntoView {
	let theme = accent_theme(industry.accent_color);
	let role_count: usize = industry.paths.iter().map(|p| p.roles.len()).sum();
	let href = industry
		.paths
		.first()
		.map(|p| format!("/roadmap/{}?path={}", industry.id, p.id))
		.unwrap_or_else(|| format!("/roadmap/{}", industry.id));

	view! {
		<a
			class="industry-card"
			href=href
			style=("--accent", theme.color)
			style=("--accent-rgb", theme.rgb)
		>
			<span class=format!("industry-icon icon-{}", industry.icon)></span>
			<h3>{industry.name}</h3>
			<p>{industry.description}</p>
			<div class="industry-card-stats">
				<span>{industry.paths.len()} " paths"</span>
				<span>{role_count} " roles"</span>
			</div>
			<span class="industry-card-cta">"Explore roadmap \u{2192}"</span>
		</a>
	}
}
