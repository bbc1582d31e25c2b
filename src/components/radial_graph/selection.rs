//! Which category is being edited, and the mutators the inspector form binds to.

use log::debug;

use super::config::EditorConfig;
use super::model::IdGenerator;
use super::types::{Category, CategoryId, CategoryPatch, GraphModel, Tool, ToolField, ToolId};

/// At most one selected category. Not persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
	selected: Option<CategoryId>,
}

impl Selection {
	pub fn select(&mut self, id: Option<CategoryId>) {
		if self.selected != id {
			debug!("selection: {:?} -> {:?}", self.selected, id);
			self.selected = id;
		}
	}

	pub fn selected_id(&self) -> Option<&CategoryId> {
		self.selected.as_ref()
	}

	pub fn is_selected(&self, id: &CategoryId) -> bool {
		self.selected.as_ref() == Some(id)
	}

	/// Drops the selection if it points at `id`.
	pub fn clear_if(&mut self, id: &CategoryId) {
		if self.is_selected(id) {
			self.selected = None;
		}
	}

	/// The selected category, or `None` if nothing is selected or the
	/// selected id no longer exists.
	pub fn get<'m>(&self, model: &'m GraphModel) -> Option<&'m Category> {
		self.selected.as_ref().and_then(|id| model.category(id))
	}
}

/// Mutation surface pre-bound to the current selection. With no selection
/// only the global title/subtitle setters have an effect.
pub struct Inspector<'a> {
	pub model: &'a mut GraphModel,
	pub selection: &'a mut Selection,
	pub ids: &'a mut IdGenerator,
	pub config: &'a EditorConfig,
}

impl Inspector<'_> {
	pub fn selected(&self) -> Option<&Category> {
		self.selection.get(&*self.model)
	}

	fn patch(&mut self, patch: CategoryPatch) {
		if let Some(id) = self.selection.selected_id() {
			self.model.update_category(id, patch);
		}
	}

	pub fn set_label(&mut self, label: impl Into<String>) {
		self.patch(CategoryPatch {
			label: Some(label.into()),
			..Default::default()
		});
	}

	pub fn set_icon_type(&mut self, icon_type: impl Into<String>) {
		self.patch(CategoryPatch {
			icon_type: Some(icon_type.into()),
			..Default::default()
		});
	}

	pub fn set_color(&mut self, color: impl Into<String>) {
		self.patch(CategoryPatch {
			color: Some(color.into()),
			..Default::default()
		});
	}

	pub fn set_angle(&mut self, angle: f64) {
		self.patch(CategoryPatch {
			angle: Some(angle),
			..Default::default()
		});
	}

	pub fn set_radius(&mut self, radius: f64) {
		self.patch(CategoryPatch {
			radius: Some(radius),
			..Default::default()
		});
	}

	pub fn add_tool(&mut self) -> Option<Tool> {
		let category = self.selection.get(&*self.model)?;
		let tool_id = self.ids.tool_id(category);
		let category_id = category.id.clone();
		self.model
			.add_tool(&category_id, tool_id, &self.config.default_color)
			.cloned()
	}

	pub fn update_tool(&mut self, tool_id: &ToolId, field: ToolField, value: impl Into<String>) {
		if let Some(id) = self.selection.selected_id() {
			self.model.update_tool(id, tool_id, field, value);
		}
	}

	pub fn remove_tool(&mut self, tool_id: &ToolId) {
		if let Some(id) = self.selection.selected_id() {
			self.model.remove_tool(id, tool_id);
		}
	}

	/// Deletes the selected category and returns to the global mode.
	pub fn remove_selected(&mut self) -> Option<Category> {
		let id = self.selection.selected_id()?.clone();
		self.selection.select(None);
		self.model.remove_category(&id)
	}

	pub fn set_title(&mut self, title: impl Into<String>) {
		if self.selection.selected_id().is_none() {
			self.model.set_title(title);
		}
	}

	pub fn set_subtitle(&mut self, subtitle: impl Into<String>) {
		if self.selection.selected_id().is_none() {
			self.model.set_subtitle(subtitle);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::radial_graph::model::CategorySeed;

	fn two_categories() -> GraphModel {
		let mut model = GraphModel::default();
		let config = EditorConfig::default();
		for (id, angle) in [("a", 0.0), ("b", 180.0)] {
			model.add_category(
				CategorySeed {
					id: id.into(),
					angle,
				},
				&config,
			);
		}
		model
	}

	#[test]
	fn test_select_is_idempotent() {
		let model = two_categories();
		let before = model.clone();
		let mut sel = Selection::default();
		sel.select(Some("a".into()));
		let once = sel.clone();
		sel.select(Some("a".into()));
		assert_eq!(sel, once);
		assert_eq!(sel.get(&model).map(|c| c.id.as_str()), Some("a"));
		assert_eq!(model, before);
	}

	#[test]
	fn test_clear_if_only_clears_matching() {
		let mut sel = Selection::default();
		sel.select(Some("a".into()));
		sel.clear_if(&"b".into());
		assert!(sel.is_selected(&"a".into()));
		sel.clear_if(&"a".into());
		assert_eq!(sel.selected_id(), None);
	}

	#[test]
	fn test_inspector_edits_only_selected() {
		let mut model = two_categories();
		let mut sel = Selection::default();
		let mut ids = IdGenerator::default();
		let config = EditorConfig::default();
		sel.select(Some("b".into()));
		let mut inspector = Inspector {
			model: &mut model,
			selection: &mut sel,
			ids: &mut ids,
			config: &config,
		};
		inspector.set_label("Design");
		inspector.set_color("pink");
		inspector.set_angle(400.0);
		inspector.set_radius(-1.0);
		let tool = inspector.add_tool().unwrap();
		inspector.update_tool(&tool.id, ToolField::Name, "Figma");

		let b = model.category(&"b".into()).unwrap();
		assert_eq!(b.label, "Design");
		assert_eq!(b.color, "pink");
		assert_eq!(b.angle, 40.0);
		assert_eq!(b.radius, 0.0);
		assert_eq!(b.tools[0].name, "Figma");
		assert_eq!(b.tools[0].color, "blue");
		let a = model.category(&"a".into()).unwrap();
		assert_eq!(a.label, "New category");
		assert!(a.tools.is_empty());
	}

	#[test]
	fn test_inspector_without_selection_edits_globals() {
		let mut model = two_categories();
		let before = model.categories.clone();
		let mut sel = Selection::default();
		let mut ids = IdGenerator::default();
		let config = EditorConfig::default();
		let mut inspector = Inspector {
			model: &mut model,
			selection: &mut sel,
			ids: &mut ids,
			config: &config,
		};
		inspector.set_label("ignored");
		assert!(inspector.add_tool().is_none());
		assert!(inspector.remove_selected().is_none());
		inspector.set_title("Expertise");
		inspector.set_subtitle("What I work with");
		assert_eq!(model.title, "Expertise");
		assert_eq!(model.subtitle, "What I work with");
		assert_eq!(model.categories, before);
	}

	#[test]
	fn test_remove_selected_clears_selection() {
		let mut model = two_categories();
		let mut sel = Selection::default();
		let mut ids = IdGenerator::default();
		let config = EditorConfig::default();
		sel.select(Some("a".into()));
		let removed = Inspector {
			model: &mut model,
			selection: &mut sel,
			ids: &mut ids,
			config: &config,
		}
		.remove_selected();
		assert_eq!(removed.map(|c| c.id), Some(CategoryId::from("a")));
		assert_eq!(sel.selected_id(), None);
		assert_eq!(model.categories.len(), 1);
	}
}
