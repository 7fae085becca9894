pub mod config;
pub mod env_keys;
pub mod error;
pub mod flow;
pub mod render;
pub mod service;
pub mod state;
pub mod utilities;

pub use config::{Mode, SnapConfig};
pub use flow::Session;
pub use state::{Outcome, UiState};
