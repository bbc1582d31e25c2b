use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_id {
	($name:ident) => {
		#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
		#[serde(transparent)]
		pub struct $name(pub String);

		impl $name {
			pub fn as_str(&self) -> &str {
				&self.0
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str(&self.0)
			}
		}

		impl From<&str> for $name {
			fn from(s: &str) -> Self {
				Self(s.to_owned())
			}
		}

		impl From<String> for $name {
			fn from(s: String) -> Self {
				Self(s)
			}
		}
	};
}

string_id!(CategoryId);
string_id!(ToolId);

/// A satellite of a category.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Tool {
	pub id: ToolId,
	pub name: String,
	pub icon_url: String,
	pub color: String,
}

/// A draggable node orbiting the center.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Category {
	pub id: CategoryId,
	pub label: String,
	pub icon_type: String,
	/// Degrees, kept in `[0, 360)`.
	pub angle: f64,
	/// Canvas units from the origin, kept `>= 0`.
	pub radius: f64,
	pub color: String,
	pub tools: Vec<Tool>,
}

/// The whole persisted graph. Category order is the z-order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphModel {
	pub title: String,
	pub subtitle: String,
	pub categories: Vec<Category>,
}

/// Fields to merge into a category. `None` leaves the field untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryPatch {
	pub label: Option<String>,
	pub icon_type: Option<String>,
	pub angle: Option<f64>,
	pub radius: Option<f64>,
	pub color: Option<String>,
}

impl CategoryPatch {
	pub fn position(angle: f64, radius: f64) -> Self {
		Self {
			angle: Some(angle),
			radius: Some(radius),
			..Default::default()
		}
	}
}

/// Editable tool fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolField {
	Name,
	IconUrl,
	Color,
}

/// Anything on the canvas a pointer can land on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeHit {
	Center,
	Category(CategoryId),
	Tool { category: CategoryId, tool: ToolId },
}
