//! Configuration loading for the deadline engine.
//!
//! This module loads engine settings from `engine.yaml` and resolves the
//! holiday file the engine reads its holiday table from.
//!
//! # Example
//!
//! ```no_run
//! use deadline_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/cl").unwrap();
//! println!("Loaded calendar: {}", config.settings().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::EngineSettings;
