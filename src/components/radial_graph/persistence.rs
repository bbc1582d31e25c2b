//! Load/save of the whole graph. The editor only sees [`PersistenceGateway`].

use log::{debug, info};
use thiserror::Error;

use super::types::GraphModel;

#[derive(Debug, Error)]
pub enum PersistenceError {
	#[error("storage is unavailable")]
	Unavailable,
	#[error("storage error: {0}")]
	Storage(String),
	#[error("serialization error: {0}")]
	Serde(#[from] serde_json::Error),
}

/// Wholesale load and replace of the stored graph. No partial saves.
pub trait PersistenceGateway {
	/// The stored graph, or the default graph if nothing was stored yet.
	fn load(&self) -> Result<GraphModel, PersistenceError>;
	fn save(&self, model: &GraphModel) -> Result<(), PersistenceError>;
}

/// Parses a stored graph and repairs out-of-range positions.
pub fn decode(json: &str) -> Result<GraphModel, PersistenceError> {
	let mut model: GraphModel = serde_json::from_str(json)?;
	model.sanitize();
	Ok(model)
}

pub fn encode(model: &GraphModel) -> Result<String, PersistenceError> {
	Ok(serde_json::to_string(model)?)
}

/// Stores the graph as JSON under one `localStorage` key.
#[derive(Clone, Debug)]
pub struct LocalStorageGateway {
	key: String,
	fallback: GraphModel,
}

impl LocalStorageGateway {
	pub fn new(key: impl Into<String>, fallback: GraphModel) -> Self {
		Self {
			key: key.into(),
			fallback,
		}
	}

	fn storage(&self) -> Result<web_sys::Storage, PersistenceError> {
		web_sys::window()
			.ok_or(PersistenceError::Unavailable)?
			.local_storage()
			.map_err(|e| PersistenceError::Storage(format!("{e:?}")))?
			.ok_or(PersistenceError::Unavailable)
	}
}

impl PersistenceGateway for LocalStorageGateway {
	fn load(&self) -> Result<GraphModel, PersistenceError> {
		let stored = self
			.storage()?
			.get_item(&self.key)
			.map_err(|e| PersistenceError::Storage(format!("{e:?}")))?;
		match stored {
			Some(json) => {
				let model = decode(&json)?;
				let count = model.categories.len();
				info!("loaded {count} categories from {}", self.key);
				Ok(model)
			}
			None => {
				debug!("nothing stored under {}, using default graph", self.key);
				Ok(self.fallback.clone())
			}
		}
	}

	fn save(&self, model: &GraphModel) -> Result<(), PersistenceError> {
		let json = encode(model)?;
		self.storage()?
			.set_item(&self.key, &json)
			.map_err(|e| PersistenceError::Storage(format!("{e:?}")))?;
		let count = model.categories.len();
		info!("saved {count} categories to {}", self.key);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use super::*;
	use crate::components::radial_graph::types::Category;

	/// Keeps the serialized graph in memory.
	#[derive(Debug)]
	struct MemoryGateway {
		stored: RefCell<Option<String>>,
		fallback: GraphModel,
	}

	impl MemoryGateway {
		fn new(fallback: GraphModel) -> Self {
			Self {
				stored: RefCell::new(None),
				fallback,
			}
		}

		fn with_json(json: impl Into<String>) -> Self {
			Self {
				stored: RefCell::new(Some(json.into())),
				fallback: GraphModel::default(),
			}
		}
	}

	impl PersistenceGateway for MemoryGateway {
		fn load(&self) -> Result<GraphModel, PersistenceError> {
			match self.stored.borrow().as_deref() {
				Some(json) => decode(json),
				None => Ok(self.fallback.clone()),
			}
		}

		fn save(&self, model: &GraphModel) -> Result<(), PersistenceError> {
			*self.stored.borrow_mut() = Some(encode(model)?);
			Ok(())
		}
	}

	fn sample() -> GraphModel {
		GraphModel {
			title: "Expertise".into(),
			subtitle: "Tools I use".into(),
			categories: vec![Category {
				id: "c1".into(),
				label: "Backend".into(),
				angle: 30.0,
				radius: 150.0,
				color: "green".into(),
				..Default::default()
			}],
		}
	}

	#[test]
	fn test_load_without_saved_graph_returns_fallback() {
		let gateway = MemoryGateway::new(sample());
		assert_eq!(gateway.load().unwrap(), sample());
	}

	#[test]
	fn test_save_replaces_whole_graph() {
		let gateway = MemoryGateway::new(sample());
		let mut model = sample();
		model.categories.clear();
		model.title = "Empty".into();
		gateway.save(&model).unwrap();
		assert_eq!(gateway.load().unwrap(), model);
	}

	#[test]
	fn test_load_repairs_invalid_positions() {
		let json = r#"{"categories":[{"id":"x","angle":-30,"radius":-50}]}"#;
		let gateway = MemoryGateway::with_json(json);
		let model = gateway.load().unwrap();
		assert_eq!(model.categories[0].angle, 330.0);
		assert_eq!(model.categories[0].radius, 0.0);
	}

	#[test]
	fn test_load_malformed_json_is_an_error() {
		let gateway = MemoryGateway::with_json("{not json");
		assert!(matches!(gateway.load(), Err(PersistenceError::Serde(_))));
	}
}
