//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, EngineResult};
use crate::holidays::{HolidayEngine, YamlHolidaySource};

use super::types::EngineSettings;

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/cl/
/// ├── engine.yaml     # Engine settings
/// └── holidays.yaml   # Holiday table (named by `holidays_file`)
/// ```
///
/// # Example
///
/// ```no_run
/// use deadline_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/cl")?;
/// println!("Calendar: {}", loader.settings().name);
/// let engine = loader.holiday_engine();
/// # Ok::<(), deadline_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: EngineSettings,
    holidays_path: PathBuf,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Fails with [`EngineError::ConfigNotFound`] if `engine.yaml` or the
    /// holiday file it names is missing, and with
    /// [`EngineError::ConfigParseError`] if `engine.yaml` is invalid.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<EngineSettings>(&path.join("engine.yaml"))?;

        let holidays_path = path.join(&settings.holidays_file);
        if !holidays_path.is_file() {
            return Err(EngineError::ConfigNotFound {
                path: holidays_path.display().to_string(),
            });
        }

        Ok(Self {
            settings,
            holidays_path,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Returns the resolved path of the holiday file.
    pub fn holidays_path(&self) -> &Path {
        &self.holidays_path
    }

    /// Builds a holiday source reading the configured file.
    pub fn holiday_source(&self) -> YamlHolidaySource {
        YamlHolidaySource::new(&self.holidays_path)
    }

    /// Builds an engine over the configured holiday file.
    pub fn holiday_engine(&self) -> HolidayEngine<YamlHolidaySource> {
        HolidayEngine::new(self.holiday_source())
            .with_default_description(self.settings.default_description.clone())
    }
}
