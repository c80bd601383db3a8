//! Accent and level styling lookups. Presentation-only configuration;
//! the data model never carries style information.

use crate::data::Level;

/// Visual accent for one industry, applied through CSS custom properties
/// on the page container.
#[derive(Clone, Copy, Debug)]
pub struct AccentTheme {
	/// Solid accent color.
	pub color: &'static str,
	/// Accent color as an rgb triple, for translucent derivations.
	pub rgb: &'static str,
	/// Glow color used behind highlighted elements.
	pub glow: &'static str,
}

const THEMES: &[AccentTheme] = &[
	AccentTheme { color: "#06b6d4", rgb: "6,182,212", glow: "rgba(6,182,212,0.4)" },
	AccentTheme { color: "#10b981", rgb: "16,185,129", glow: "rgba(16,185,129,0.4)" },
	AccentTheme { color: "#f43f5e", rgb: "244,63,94", glow: "rgba(244,63,94,0.4)" },
];

/// Theme for an industry's accent color. Unknown colors fall back to the
/// first (cyan) entry so new data never renders unstyled.
pub fn accent_theme(accent_color: &str) -> &'static AccentTheme {
	THEMES
		.iter()
		.find(|t| t.color == accent_color)
		.unwrap_or(&THEMES[0])
}

/// CSS modifier class for a seniority badge.
pub fn level_class(level: Level) -> &'static str {
	match level {
		Level::Junior => "level-junior",
		Level::Mid => "level-mid",
		Level::Senior => "level-senior",
		Level::Lead => "level-lead",
		Level::Director => "level-director",
		Level::Vp => "level-vp",
		Level::CSuite => "level-csuite",
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn known_accents_resolve() {
		assert_eq!(accent_theme("#10b981").rgb, "16,185,129");
	}

	#[test]
	fn unknown_accent_falls_back() {
		assert_eq!(accent_theme("#123456").color, "#06b6d4");
	}
}
