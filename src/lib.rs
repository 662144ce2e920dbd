pub mod api;
pub mod config;
pub mod domain;
pub mod store;
pub mod utils;

pub use config::CliConfig;
pub use domain::model::{Project, ProjectStatus};
pub use store::ProjectStore;
pub use utils::error::{Result, TrackerError};
