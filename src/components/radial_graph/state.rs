use log::{debug, info};

use super::config::EditorConfig;
use super::coords::{Point, ViewTransform, satellite_positions, to_cartesian};
use super::drag::{DragController, PointerId};
use super::model::{CategorySeed, IdGenerator};
use super::selection::{Inspector, Selection};
use super::types::{Category, CategoryId, GraphModel, NodeHit};

/// The center node sits at the canvas origin.
pub const ORIGIN: Point = Point::new(0.0, 0.0);

const WHEEL_ZOOM_OUT: f64 = 0.9;
const WHEEL_ZOOM_IN: f64 = 1.1;

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub pointer: Option<PointerId>,
	pub start: Point,
	pub transform_start: Point,
}

/// Everything the canvas and the inspector need: the model plus the
/// ephemeral interaction state around it.
#[derive(Clone, Debug)]
pub struct EditorState {
	pub model: GraphModel,
	pub selection: Selection,
	pub drag: DragController,
	pub transform: ViewTransform,
	pub pan: PanState,
	pub hover: Option<NodeHit>,
	pub width: f64,
	pub height: f64,
	pub config: EditorConfig,
	ids: IdGenerator,
}

impl EditorState {
	pub fn new(mut model: GraphModel, config: EditorConfig, width: f64, height: f64) -> Self {
		model.sanitize();
		Self {
			model,
			selection: Selection::default(),
			drag: DragController::default(),
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			pan: PanState::default(),
			hover: None,
			width,
			height,
			config,
			ids: IdGenerator::default(),
		}
	}

	pub fn category_position(&self, category: &Category) -> Point {
		to_cartesian(ORIGIN, category.angle, category.radius)
	}

	pub fn tool_positions(&self, category: &Category) -> Vec<Point> {
		satellite_positions(
			self.category_position(category),
			category.tools.len(),
			self.config.satellite_orbit,
		)
	}

	/// What is under a pointer at `screen` (relative to the canvas element).
	/// Later categories are drawn on top, so they win.
	pub fn node_at_position(&self, screen: Point) -> Option<NodeHit> {
		let p = self.transform.screen_to_canvas(screen);
		let on_center = p.distance(ORIGIN) < self.config.center_radius;
		let mut found = on_center.then_some(NodeHit::Center);
		let tool_hit = self.config.tool_radius * 1.5;
		for category in &self.model.categories {
			if p.distance(self.category_position(category)) < self.config.hit_radius {
				found = Some(NodeHit::Category(category.id.clone()));
			}
			for (tool, pos) in category.tools.iter().zip(self.tool_positions(category)) {
				if p.distance(pos) < tool_hit {
					found = Some(NodeHit::Tool {
						category: category.id.clone(),
						tool: tool.id.clone(),
					});
				}
			}
		}
		found
	}

	pub fn is_hovered(&self, hit: &NodeHit) -> bool {
		self.hover.as_ref() == Some(hit)
	}

	pub fn pointer_down(&mut self, pointer: PointerId, screen: Point) {
		let target = self.node_at_position(screen);
		if self.drag.pointer_down(pointer, target.as_ref(), &mut self.selection) {
			// a drag takes over from any pan still held by another pointer
			if self.drag.dragging().is_some() {
				self.pan = PanState::default();
			}
			return;
		}
		if target.is_none() && self.drag.dragging().is_none() && self.pan.pointer.is_none() {
			self.pan = PanState {
				pointer: Some(pointer),
				start: screen,
				transform_start: Point::new(self.transform.x, self.transform.y),
			};
		}
	}

	pub fn pointer_move(&mut self, pointer: PointerId, screen: Point) {
		if self.drag.dragging().is_some() {
			self.drag
				.pointer_move(pointer, screen, &self.transform, ORIGIN, &mut self.model);
			return;
		}
		if self.pan.pointer == Some(pointer) {
			self.transform.x = self.pan.transform_start.x + (screen.x - self.pan.start.x);
			self.transform.y = self.pan.transform_start.y + (screen.y - self.pan.start.y);
			return;
		}
		self.hover = self.node_at_position(screen);
	}

	pub fn pointer_up(&mut self, pointer: PointerId) {
		self.drag.pointer_up(pointer);
		if self.pan.pointer == Some(pointer) {
			self.pan = PanState::default();
		}
	}

	pub fn pointer_leave(&mut self) {
		self.drag.pointer_leave();
		self.pan = PanState::default();
		self.hover = None;
	}

	/// Wheel zoom about the cursor.
	pub fn wheel(&mut self, screen: Point, delta_y: f64) {
		let factor = if delta_y > 0.0 {
			WHEEL_ZOOM_OUT
		} else {
			WHEEL_ZOOM_IN
		};
		self.transform
			.zoom_at(screen, factor, self.config.min_zoom, self.config.max_zoom);
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.transform.x += (width - self.width) / 2.0;
		self.transform.y += (height - self.height) / 2.0;
		self.width = width;
		self.height = height;
	}

	/// Adds a category at a random angle and selects it.
	pub fn add_category(&mut self) -> CategoryId {
		let seed = CategorySeed::fresh(&mut self.ids, &self.model);
		let id = self.model.add_category(seed, &self.config).id.clone();
		info!("added category {id}");
		self.selection.select(Some(id.clone()));
		id
	}

	pub fn remove_category(&mut self, id: &CategoryId) {
		if self.model.remove_category(id).is_some() {
			info!("removed category {id}");
		}
		self.selection.clear_if(id);
	}

	/// Swaps in a freshly loaded model. Interaction state pointing at ids that
	/// no longer exist is dropped.
	pub fn replace_model(&mut self, mut model: GraphModel) {
		debug!("replacing model ({} categories)", model.categories.len());
		model.sanitize();
		self.model = model;
		if let Some(id) = self.selection.selected_id().cloned() {
			if self.model.category(&id).is_none() {
				self.selection.select(None);
			}
		}
		self.drag.pointer_leave();
		self.hover = None;
	}

	pub fn selected(&self) -> Option<&Category> {
		self.selection.get(&self.model)
	}

	pub fn inspector(&mut self) -> Inspector<'_> {
		Inspector {
			model: &mut self.model,
			selection: &mut self.selection,
			ids: &mut self.ids,
			config: &self.config,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::radial_graph::drag::DragPhase;
	use crate::components::radial_graph::types::Tool;

	fn state() -> EditorState {
		let model = GraphModel {
			categories: vec![
				Category {
					id: "a".into(),
					angle: 0.0,
					radius: 200.0,
					tools: vec![
						Tool {
							id: "t1".into(),
							..Default::default()
						},
						Tool {
							id: "t2".into(),
							..Default::default()
						},
					],
					..Default::default()
				},
				Category {
					id: "b".into(),
					angle: 180.0,
					radius: 100.0,
					..Default::default()
				},
			],
			..Default::default()
		};
		EditorState::new(model, EditorConfig::default(), 800.0, 600.0)
	}

	fn hit_at(s: &EditorState, x: f64, y: f64) -> Option<NodeHit> {
		s.node_at_position(Point::new(x, y))
	}

	fn category(id: &str) -> NodeHit {
		NodeHit::Category(id.into())
	}

	#[test]
	fn test_hit_testing_targets() {
		let s = state();
		// origin is drawn at the middle of the canvas
		assert_eq!(hit_at(&s, 400.0, 300.0), Some(NodeHit::Center));
		assert_eq!(hit_at(&s, 600.0, 300.0), Some(category("a")));
		assert_eq!(hit_at(&s, 300.0, 300.0), Some(category("b")));
		// first satellite sits straight above its category
		assert_eq!(
			s.node_at_position(Point::new(600.0, 258.0)),
			Some(NodeHit::Tool {
				category: "a".into(),
				tool: "t1".into()
			})
		);
		assert_eq!(hit_at(&s, 10.0, 10.0), None);
	}

	#[test]
	fn test_hit_testing_follows_zoom() {
		let mut s = state();
		s.transform.k = 2.0;
		assert_eq!(hit_at(&s, 800.0, 300.0), Some(category("a")));
		assert_eq!(hit_at(&s, 600.0, 300.0), None);
	}

	#[test]
	fn test_drag_through_editor() {
		let mut s = state();
		s.pointer_down(PointerId::Mouse, Point::new(600.0, 300.0));
		assert!(s.selection.is_selected(&"a".into()));
		s.pointer_move(PointerId::Mouse, Point::new(400.0, 450.0));
		s.pointer_up(PointerId::Mouse);
		assert_eq!(s.drag.phase(), &DragPhase::Idle);
		let a = s.model.category(&"a".into()).unwrap();
		assert_eq!((a.angle, a.radius), (90.0, 150.0));
		let b = s.model.category(&"b".into()).unwrap();
		assert_eq!((b.angle, b.radius), (180.0, 100.0));
	}

	#[test]
	fn test_background_drag_pans_without_touching_model() {
		let mut s = state();
		let before = s.model.clone();
		s.pointer_down(PointerId::Mouse, Point::new(10.0, 10.0));
		s.pointer_move(PointerId::Mouse, Point::new(60.0, 30.0));
		s.pointer_up(PointerId::Mouse);
		assert_eq!((s.transform.x, s.transform.y), (450.0, 320.0));
		assert_eq!(s.model, before);
		assert_eq!(s.selection.selected_id(), None);
	}

	#[test]
	fn test_wheel_zoom_is_clamped() {
		let mut s = state();
		for _ in 0..200 {
			s.wheel(Point::new(400.0, 300.0), 1.0);
		}
		assert_eq!(s.transform.k, s.config.min_zoom);
	}

	#[test]
	fn test_add_and_remove_category_drive_selection() {
		let mut s = state();
		let id = s.add_category();
		assert!(s.selection.is_selected(&id));
		let c = s.model.category(&id).unwrap();
		assert_eq!(c.radius, 200.0);
		assert!((0.0..360.0).contains(&c.angle));
		s.remove_category(&id);
		assert_eq!(s.selection.selected_id(), None);
		assert_eq!(s.model.categories.len(), 2);
		s.remove_category(&id);
		assert_eq!(s.model.categories.len(), 2);
	}

	#[test]
	fn test_replace_model_drops_stale_selection() {
		let mut s = state();
		s.selection.select(Some("b".into()));
		s.pointer_down(PointerId::Mouse, Point::new(600.0, 300.0));
		s.replace_model(GraphModel::default());
		assert_eq!(s.selection.selected_id(), None);
		assert_eq!(s.drag.dragging(), None);
	}

	#[test]
	fn test_replace_model_repairs_positions() {
		let mut s = state();
		s.replace_model(GraphModel {
			categories: vec![Category {
				id: "x".into(),
				angle: -30.0,
				radius: -50.0,
				..Default::default()
			}],
			..Default::default()
		});
		let x = s.model.category(&"x".into()).unwrap();
		assert_eq!((x.angle, x.radius), (330.0, 0.0));
	}

	#[test]
	fn test_new_repairs_positions() {
		let model = GraphModel {
			categories: vec![Category {
				id: "x".into(),
				angle: 725.0,
				radius: f64::NAN,
				..Default::default()
			}],
			..Default::default()
		};
		let s = EditorState::new(model, EditorConfig::default(), 800.0, 600.0);
		let x = s.model.category(&"x".into()).unwrap();
		assert_eq!((x.angle, x.radius), (5.0, 0.0));
	}

	#[test]
	fn test_drag_start_cancels_other_pointer_pan() {
		let mut s = state();
		let panning = PointerId::Touch(1);
		let dragging = PointerId::Touch(2);
		s.pointer_down(panning, Point::new(10.0, 10.0));
		assert_eq!(s.pan.pointer, Some(panning));
		s.pointer_down(dragging, Point::new(600.0, 300.0));
		assert_eq!(s.pan.pointer, None);
		s.pointer_move(dragging, Point::new(400.0, 450.0));
		s.pointer_up(dragging);
		// the first finger moving again must not jump the view
		s.pointer_move(panning, Point::new(300.0, 200.0));
		assert_eq!((s.transform.x, s.transform.y), (400.0, 300.0));
		s.pointer_up(panning);
		let a = s.model.category(&"a".into()).unwrap();
		assert_eq!((a.angle, a.radius), (90.0, 150.0));
	}

	#[test]
	fn test_tools_without_satellites() {
		let s = state();
		let b = s.model.category(&"b".into()).unwrap();
		assert!(s.tool_positions(b).is_empty());
	}
}
