//! Holiday data sources.
//!
//! A [`HolidaySource`] answers a single "every holiday, ordered by date"
//! query. The engine calls it once per refresh and never writes to it.

use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::HolidayRow;

/// Query interface over the holiday table.
///
/// Implementations must return the complete set in one response; there is
/// no pagination.
pub trait HolidaySource: Send + Sync {
    /// Fetches every holiday row, ordered by date ascending.
    fn fetch_holidays(&self) -> impl Future<Output = EngineResult<Vec<HolidayRow>>> + Send;
}

/// A holiday source backed by rows held in memory.
///
/// # Example
///
/// ```
/// use deadline_engine::holidays::{HolidayEngine, StaticHolidaySource};
/// use deadline_engine::models::HolidayRow;
///
/// # #[tokio::main]
/// # async fn main() {
/// let source = StaticHolidaySource::new(vec![
///     HolidayRow::new("2026-09-18", "Fiestas Patrias", true),
/// ]);
/// let engine = HolidayEngine::new(source);
/// let holidays = engine.load_holidays(false).await.into_map_or_empty();
/// assert_eq!(holidays.len(), 1);
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticHolidaySource {
    rows: Vec<HolidayRow>,
}

impl StaticHolidaySource {
    /// Creates a source that always returns `rows`, sorted by date.
    pub fn new(mut rows: Vec<HolidayRow>) -> Self {
        rows.sort_by(|a, b| a.fecha.cmp(&b.fecha));
        Self { rows }
    }
}

impl HolidaySource for StaticHolidaySource {
    fn fetch_holidays(&self) -> impl Future<Output = EngineResult<Vec<HolidayRow>>> + Send {
        let rows = self.rows.clone();
        async move { Ok(rows) }
    }
}

/// Layout of a holiday YAML file.
#[derive(Debug, Deserialize)]
struct HolidayFile {
    #[serde(default)]
    holidays: Vec<HolidayRow>,
}

/// A holiday source that reads a YAML file on every fetch.
///
/// The file holds a list under a `holidays:` key:
///
/// ```text
/// holidays:
///   - fecha: "2026-09-18"
///     descripcion: "Fiestas Patrias"
///     es_irrenunciable: true
///   - fecha: "2026-06-29"        # description defaults to "Feriado"
/// ```
///
/// Edits to the file are picked up by the next forced refresh.
#[derive(Debug, Clone)]
pub struct YamlHolidaySource {
    path: PathBuf,
}

impl YamlHolidaySource {
    /// Creates a source reading from `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the file this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_rows(&self) -> EngineResult<Vec<HolidayRow>> {
        let path_str = self.path.display().to_string();

        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|err| match err.kind() {
                ErrorKind::NotFound => EngineError::ConfigNotFound {
                    path: path_str.clone(),
                },
                _ => EngineError::HolidaySourceUnavailable {
                    message: format!("{}: {}", path_str, err),
                },
            })?;

        let file: HolidayFile =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        let mut rows = file.holidays;
        rows.sort_by(|a, b| a.fecha.cmp(&b.fecha));
        debug!(path = %path_str, rows = rows.len(), "Read holiday file");
        Ok(rows)
    }
}

impl HolidaySource for YamlHolidaySource {
    fn fetch_holidays(&self) -> impl Future<Output = EngineResult<Vec<HolidayRow>>> + Send {
        self.read_rows()
    }
}
