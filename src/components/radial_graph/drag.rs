//! Pointer-drag state machine: turns down/move/up events into angle/radius
//! updates on the dragged category.
//!
//! One drag at a time, first pointer wins. While a drag is active, downs from
//! any pointer are ignored and moves/ups from other pointers are ignored.
//! Leaving the canvas always ends the drag.

use log::debug;

use super::coords::{Point, Polar, ViewTransform, to_polar};
use super::selection::Selection;
use super::types::{CategoryId, CategoryPatch, GraphModel, NodeHit};

/// Which physical pointer produced an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerId {
	Mouse,
	Touch(i32),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
	#[default]
	Idle,
	Dragging {
		category: CategoryId,
		pointer: PointerId,
	},
}

#[derive(Clone, Debug, Default)]
pub struct DragController {
	phase: DragPhase,
}

impl DragController {
	pub fn phase(&self) -> &DragPhase {
		&self.phase
	}

	pub fn dragging(&self) -> Option<&CategoryId> {
		match &self.phase {
			DragPhase::Idle => None,
			DragPhase::Dragging { category, .. } => Some(category),
		}
	}

	/// Handles a press on `target`. Returns `false` when the event was not for
	/// the controller (a drag is already running, or nothing was hit).
	///
	/// A plain click is a zero-length drag, so pressing a category selects it
	/// as well. Tools select their category without dragging; the center
	/// clears the selection.
	pub fn pointer_down(
		&mut self,
		pointer: PointerId,
		target: Option<&NodeHit>,
		selection: &mut Selection,
	) -> bool {
		if self.dragging().is_some() {
			return false;
		}
		match target {
			None => false,
			Some(NodeHit::Center) => {
				selection.select(None);
				true
			}
			Some(NodeHit::Tool { category, .. }) => {
				selection.select(Some(category.clone()));
				true
			}
			Some(NodeHit::Category(id)) => {
				debug!("drag start {id} ({pointer:?})");
				selection.select(Some(id.clone()));
				self.phase = DragPhase::Dragging {
					category: id.clone(),
					pointer,
				};
				true
			}
		}
	}

	/// Moves the dragged category under the pointer. `screen` is relative to
	/// the canvas element; it is mapped through `view` before the polar
	/// conversion so zoom and pan never leak into the model.
	///
	/// Returns the rounded position written to the model, or `None` if no drag
	/// is active for this pointer or the category has since been deleted.
	pub fn pointer_move(
		&mut self,
		pointer: PointerId,
		screen: Point,
		view: &ViewTransform,
		origin: Point,
		model: &mut GraphModel,
	) -> Option<Polar> {
		let DragPhase::Dragging {
			category,
			pointer: active,
		} = &self.phase
		else {
			return None;
		};
		if *active != pointer {
			return None;
		}
		let polar = to_polar(origin, view.screen_to_canvas(screen)).rounded();
		model
			.update_category(category, CategoryPatch::position(polar.angle, polar.radius))
			.then_some(polar)
	}

	/// Ends the drag if `pointer` owns it. The model keeps the last position.
	pub fn pointer_up(&mut self, pointer: PointerId) -> Option<CategoryId> {
		if self.owner() == Some(pointer) {
			self.finish()
		} else {
			None
		}
	}

	pub fn pointer_leave(&mut self) -> Option<CategoryId> {
		self.finish()
	}

	fn owner(&self) -> Option<PointerId> {
		match self.phase {
			DragPhase::Idle => None,
			DragPhase::Dragging { pointer, .. } => Some(pointer),
		}
	}

	fn finish(&mut self) -> Option<CategoryId> {
		match std::mem::take(&mut self.phase) {
			DragPhase::Idle => None,
			DragPhase::Dragging { category, .. } => {
				debug!("drag end {category}");
				Some(category)
			}
		}
	}
}
