//! Configuration types for the deadline engine.
//!
//! This module contains the strongly-typed structure deserialized from
//! `engine.yaml`.

use std::path::PathBuf;

use serde::Deserialize;

use crate::models::DEFAULT_HOLIDAY_DESCRIPTION;

fn default_bind_address() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_description() -> String {
    DEFAULT_HOLIDAY_DESCRIPTION.to_string()
}

/// Engine settings from `engine.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    /// Human-readable name of the calendar (e.g., "Calendario legal Chile").
    pub name: String,
    /// Address the HTTP service listens on.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Holiday file, relative to the configuration directory.
    pub holidays_file: PathBuf,
    /// Description given to holidays that carry none.
    #[serde(default = "default_description")]
    pub default_description: String,
}
