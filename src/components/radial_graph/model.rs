//! Mutators over [`GraphModel`]. All of them are total: unknown ids are
//! silently ignored since a delete can race a pending drag update.

use log::debug;

use super::config::EditorConfig;
use super::coords::{Point, clamp_radius, normalize_angle, to_cartesian};
use super::types::{Category, CategoryId, CategoryPatch, GraphModel, Tool, ToolField, ToolId};

#[cfg(target_arch = "wasm32")]
fn now_millis() -> u64 {
	js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_millis() -> u64 {
	std::time::SystemTime::now()
		.duration_since(std::time::UNIX_EPOCH)
		.map(|d| d.as_millis() as u64)
		.unwrap_or_default()
}

/// Uniform sample in `[0, 1)`.
#[cfg(target_arch = "wasm32")]
fn random_unit() -> f64 {
	js_sys::Math::random()
}

#[cfg(not(target_arch = "wasm32"))]
fn random_unit() -> f64 {
	let nanos = std::time::SystemTime::now()
		.duration_since(std::time::UNIX_EPOCH)
		.map(|d| d.subsec_nanos() as u64)
		.unwrap_or_default();
	let x = ((nanos + 1) * 9301 + 49297) % 233280;
	(x as f64) / 233280.0
}

/// Timestamp-based ids, strictly increasing for the lifetime of the generator
/// so a deleted id is never handed out again.
#[derive(Clone, Debug, Default)]
pub struct IdGenerator {
	last: u64,
}

impl IdGenerator {
	pub fn next_stamp(&mut self, now_ms: u64) -> u64 {
		let stamp = now_ms.max(self.last + 1);
		self.last = stamp;
		stamp
	}

	pub fn category_id(&mut self, model: &GraphModel) -> CategoryId {
		loop {
			let id = CategoryId(format!("cat-{}", self.next_stamp(now_millis())));
			if model.category(&id).is_none() {
				return id;
			}
		}
	}

	/// A tool id unique within `category`.
	pub fn tool_id(&mut self, category: &Category) -> ToolId {
		loop {
			let id = ToolId(format!("tool-{}", self.next_stamp(now_millis())));
			if !category.tools.iter().any(|t| t.id == id) {
				return id;
			}
		}
	}
}

/// The caller-supplied parts of a new category, so id and angle can be
/// chosen deterministically in tests.
#[derive(Clone, Debug, PartialEq)]
pub struct CategorySeed {
	pub id: CategoryId,
	pub angle: f64,
}

impl CategorySeed {
	/// Fresh unique id and a uniformly random angle.
	pub fn fresh(ids: &mut IdGenerator, model: &GraphModel) -> Self {
		Self {
			id: ids.category_id(model),
			angle: random_unit() * 360.0,
		}
	}
}

impl GraphModel {
	pub fn category(&self, id: &CategoryId) -> Option<&Category> {
		self.categories.iter().find(|c| &c.id == id)
	}

	pub fn category_mut(&mut self, id: &CategoryId) -> Option<&mut Category> {
		self.categories.iter_mut().find(|c| &c.id == id)
	}

	/// Canvas position of a category, derived from its angle and radius.
	pub fn position_of(&self, id: &CategoryId, origin: Point) -> Option<Point> {
		self.category(id).map(|c| to_cartesian(origin, c.angle, c.radius))
	}

	/// Brings every category back inside its invariants. Used on load.
	pub fn sanitize(&mut self) {
		for c in &mut self.categories {
			c.angle = normalize_angle(c.angle);
			c.radius = clamp_radius(c.radius);
		}
	}

	pub fn set_title(&mut self, title: impl Into<String>) {
		self.title = title.into();
	}

	pub fn set_subtitle(&mut self, subtitle: impl Into<String>) {
		self.subtitle = subtitle.into();
	}

	/// Appends a category at the default radius and color with no tools.
	pub fn add_category(&mut self, seed: CategorySeed, config: &EditorConfig) -> &Category {
		debug!("adding category {} at {:.0}°", seed.id, seed.angle);
		self.categories.push(Category {
			id: seed.id,
			label: "New category".to_owned(),
			icon_type: String::new(),
			angle: normalize_angle(seed.angle),
			radius: clamp_radius(config.default_radius),
			color: config.default_color.clone(),
			tools: Vec::new(),
		});
		&self.categories[self.categories.len() - 1]
	}

	/// Merges `patch` into the category. Angle and radius are normalized
	/// whatever the caller passed. Returns whether the category exists.
	pub fn update_category(&mut self, id: &CategoryId, patch: CategoryPatch) -> bool {
		let Some(c) = self.category_mut(id) else {
			return false;
		};
		if let Some(label) = patch.label {
			c.label = label;
		}
		if let Some(icon_type) = patch.icon_type {
			c.icon_type = icon_type;
		}
		if let Some(angle) = patch.angle {
			c.angle = normalize_angle(angle);
		}
		if let Some(radius) = patch.radius {
			c.radius = clamp_radius(radius);
		}
		if let Some(color) = patch.color {
			c.color = color;
		}
		true
	}

	pub fn remove_category(&mut self, id: &CategoryId) -> Option<Category> {
		let idx = self.categories.iter().position(|c| &c.id == id)?;
		debug!("removing category {id}");
		Some(self.categories.remove(idx))
	}

	pub fn add_tool(
		&mut self,
		category_id: &CategoryId,
		tool_id: ToolId,
		color: &str,
	) -> Option<&Tool> {
		let c = self.category_mut(category_id)?;
		c.tools.push(Tool {
			id: tool_id,
			name: "New tool".to_owned(),
			icon_url: String::new(),
			color: color.to_owned(),
		});
		c.tools.last()
	}

	pub fn update_tool(
		&mut self,
		category_id: &CategoryId,
		tool_id: &ToolId,
		field: ToolField,
		value: impl Into<String>,
	) -> bool {
		let Some(tool) = self
			.category_mut(category_id)
			.and_then(|c| c.tools.iter_mut().find(|t| &t.id == tool_id))
		else {
			return false;
		};
		let value = value.into();
		match field {
			ToolField::Name => tool.name = value,
			ToolField::IconUrl => tool.icon_url = value,
			ToolField::Color => tool.color = value,
		}
		true
	}

	pub fn remove_tool(&mut self, category_id: &CategoryId, tool_id: &ToolId) -> Option<Tool> {
		let c = self.category_mut(category_id)?;
		let idx = c.tools.iter().position(|t| &t.id == tool_id)?;
		Some(c.tools.remove(idx))
	}
}
