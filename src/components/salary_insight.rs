use leptos::prelude::*;

use crate::data::{Role, format_salary};

/// Position of `value` along the p10..p90 gauge, as a 0..100 percentage.
fn percent(value: u32, p10: u32, p90: u32) -> f64 {
	let span = p90.saturating_sub(p10).max(1) as f64;
	let pct = (value.saturating_sub(p10) as f64) / span * 100.0;
	pct.clamp(0.0, 100.0)
}

/// Salary distribution gauge for one role: percentile markers along a
/// p10..p90 band, the median highlighted, and the pay jump from the
/// previous role when there is one.
#[component]
pub fn SalaryInsight(
	role: &'static Role,
	#[prop(default = None)] previous: Option<&'static Role>,
) -> impl IntoView {
	let p = &role.salary_percentiles;
	let range = &role.salary_range;
	let markers = [
		("p10", p.p10),
		("p25", p.p25),
		("p50", p.p50),
		("p75", p.p75),
		("p90", p.p90),
	];

	let jump = previous.map(|prev| {
		let prev_median = prev.salary_range.median;
		let delta = range.median as i64 - prev_median as i64;
		let pct = delta as f64 / prev_median.max(1) as f64 * 100.0;
		(delta, pct)
	});

	view! {
		<section class="salary-insight">
			<h4>"Salary insight"</h4>
			<div class="salary-gauge">
				<div class="salary-gauge-track"></div>
				{markers
					.iter()
					.map(|(name, value)| {
						let left = percent(*value, p.p10, p.p90);
						view! {
							<span
								class=format!("salary-marker salary-{name}")
								class=("salary-median", *name == "p50")
								style:left=format!("{left:.1}%")
							></span>
						}
					})
					.collect_view()}
			</div>
			<div class="salary-gauge-labels">
				{markers
					.iter()
					.map(|(name, value)| {
						view! {
							<span class="salary-label">
								<strong>{format_salary(*value)}</strong>
								<small>{*name}</small>
							</span>
						}
					})
					.collect_view()}
			</div>
			<div class="salary-summary">
				<div class="salary-card">
					<small>"Min"</small>
					<strong>{format_salary(range.min)}</strong>
				</div>
				<div class="salary-card salary-card-median">
					<small>"Median"</small>
					<strong>{format_salary(range.median)}</strong>
				</div>
				<div class="salary-card">
					<small>"Max"</small>
					<strong>{format_salary(range.max)}</strong>
				</div>
			</div>
			{jump.map(|(delta, pct)| {
				let sign = if delta >= 0 { "+" } else { "\u{2212}" };
				let amount = format_salary(delta.unsigned_abs() as u32);
				view! {
					<p class="salary-jump" class=("salary-jump-down", delta < 0)>
						{sign}{amount}
						" (" {format!("{sign}{:.0}%", pct.abs())} ") median vs previous step"
					</p>
				}
			})}
		</section>
	}
}
