mod component;
pub mod config;
pub mod coords;
pub mod drag;
mod inspector;
pub mod model;
pub mod persistence;
mod render;
pub mod selection;
pub mod state;
pub mod types;

pub use component::RadialGraphEditor;
pub use config::EditorConfig;
pub use persistence::{LocalStorageGateway, PersistenceError, PersistenceGateway};
pub use types::{Category, CategoryId, GraphModel, Tool, ToolId};
