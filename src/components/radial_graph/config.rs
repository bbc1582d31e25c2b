use serde::{Deserialize, Serialize};

/// Color tokens offered by the inspector, with the CSS color each renders as.
pub const PALETTE: &[(&str, &str)] = &[
	("blue", "#3b82f6"),
	("purple", "#8b5cf6"),
	("green", "#10b981"),
	("orange", "#f59e0b"),
	("pink", "#ec4899"),
	("teal", "#14b8a6"),
	("red", "#ef4444"),
	("slate", "#64748b"),
];

/// Resolves a palette token to a CSS color. Unknown tokens are passed through
/// unchanged so any CSS color string still renders.
pub fn resolve_color(token: &str) -> &str {
	PALETTE
		.iter()
		.find(|(name, _)| *name == token)
		.map(|(_, css)| *css)
		.unwrap_or(token)
}

/// Tunables for the editor. Every field has a default so a partial JSON
/// object deserializes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
	/// Radius given to new categories (the second ring).
	pub default_radius: f64,
	/// Palette token given to new categories and tools.
	pub default_color: String,
	pub center_radius: f64,
	pub node_radius: f64,
	pub tool_radius: f64,
	/// Distance of tool satellites from their category.
	pub satellite_orbit: f64,
	/// Hit radius in canvas units, scales with zoom like the nodes do.
	pub hit_radius: f64,
	/// Guide circles drawn around the center.
	pub rings: Vec<f64>,
	pub min_zoom: f64,
	pub max_zoom: f64,
	/// `localStorage` key used by the browser gateway.
	pub storage_key: String,
}

impl Default for EditorConfig {
	fn default() -> Self {
		Self {
			default_radius: 200.0,
			default_color: PALETTE[0].0.to_owned(),
			center_radius: 36.0,
			node_radius: 22.0,
			tool_radius: 9.0,
			satellite_orbit: 42.0,
			hit_radius: 24.0,
			rings: vec![100.0, 200.0, 300.0],
			min_zoom: 0.1,
			max_zoom: 10.0,
			storage_key: "radial-graph-editor/expertise".to_owned(),
		}
	}
}
