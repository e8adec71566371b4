//! Infrastructure layer for mockprep.
//!
//! Local file storage and process setup: paths, configuration, the
//! persisted auth context and logging.

pub mod auth_store;
pub mod config_service;
pub mod logging;
pub mod paths;

pub use auth_store::FileAuthStore;
pub use config_service::ConfigService;
pub use logging::init_logging;
pub use paths::PrepPaths;
