//! The holiday engine and its cache.
//!
//! [`HolidayEngine`] owns the process-local holiday cache. The cache starts
//! empty, is filled by the first [`HolidayEngine::load_holidays`] call and
//! is replaced wholesale on a forced refresh. Readers hold an
//! `Arc<HolidayMap>` snapshot, so a refresh in flight never exposes a
//! half-built map.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use chrono::Month;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::calendar::{self, CivilDate};
use crate::models::{DEFAULT_HOLIDAY_DESCRIPTION, Holiday, HolidayMap};

use super::source::HolidaySource;

/// Outcome of a holiday load.
///
/// `Unavailable` means the source could not be queried. It is not the same
/// as `Loaded` with an empty map, which means the table holds no holidays.
#[derive(Debug, Clone)]
pub enum HolidayLoad {
    /// The holidays as of the last successful fetch.
    Loaded(Arc<HolidayMap>),
    /// The source failed; holidays are unknown.
    Unavailable,
}

impl HolidayLoad {
    /// Returns whether the holidays are unknown.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, HolidayLoad::Unavailable)
    }

    /// Returns the loaded map, if any.
    pub fn holidays(&self) -> Option<&HolidayMap> {
        match self {
            HolidayLoad::Loaded(map) => Some(map),
            HolidayLoad::Unavailable => None,
        }
    }

    /// Returns the loaded map, treating unknown holidays as none at all.
    ///
    /// A missed holiday yields an optimistic deadline hint rather than an
    /// error, which is the behaviour UI callers expect.
    pub fn into_map_or_empty(self) -> Arc<HolidayMap> {
        match self {
            HolidayLoad::Loaded(map) => map,
            HolidayLoad::Unavailable => Arc::new(HolidayMap::new()),
        }
    }
}

/// Business-day engine backed by a cached holiday set.
///
/// Construct one per process (or per session) and share it by reference.
///
/// # Example
///
/// ```
/// use deadline_engine::holidays::{HolidayEngine, StaticHolidaySource};
/// use deadline_engine::models::HolidayRow;
///
/// # #[tokio::main]
/// # async fn main() {
/// let engine = HolidayEngine::new(StaticHolidaySource::new(vec![
///     HolidayRow::new("2026-09-18", "Fiestas Patrias", true),
/// ]));
///
/// assert!(!engine.is_business_day("2026-09-18").await);
/// assert_eq!(
///     engine.describe_holiday("2026-09-18").await.as_deref(),
///     Some("Fiestas Patrias")
/// );
/// # }
/// ```
pub struct HolidayEngine<S> {
    source: S,
    cache: RwLock<Option<Arc<HolidayMap>>>,
    refresh_lock: Mutex<()>,
    fetches: AtomicU64,
    default_description: String,
}

impl<S: HolidaySource> HolidayEngine<S> {
    /// Creates an engine with an empty cache.
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: RwLock::new(None),
            refresh_lock: Mutex::new(()),
            fetches: AtomicU64::new(0),
            default_description: DEFAULT_HOLIDAY_DESCRIPTION.to_string(),
        }
    }

    /// Sets the description given to rows that carry none.
    pub fn with_default_description(mut self, description: impl Into<String>) -> Self {
        self.default_description = description.into();
        self
    }

    /// Returns the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Loads the holiday set.
    ///
    /// Returns the cached map unless `force_refresh` is set or nothing has
    /// been loaded yet; in those cases the full set is fetched, rebuilt
    /// keyed by date and swapped into the cache.
    ///
    /// A failed fetch is logged and reported as [`HolidayLoad::Unavailable`].
    /// Whatever was cached before stays in place.
    ///
    /// Concurrent non-forced loads share one fetch. Forced loads always
    /// fetch.
    pub async fn load_holidays(&self, force_refresh: bool) -> HolidayLoad {
        if !force_refresh {
            if let Some(map) = self.cached() {
                return HolidayLoad::Loaded(map);
            }
        }

        let _guard = self.refresh_lock.lock().await;

        // Another caller may have filled the cache while we waited.
        if !force_refresh {
            if let Some(map) = self.cached() {
                return HolidayLoad::Loaded(map);
            }
        }

        self.refresh().await
    }

    async fn refresh(&self) -> HolidayLoad {
        let attempt = self.fetches.fetch_add(1, Ordering::Relaxed) + 1;
        debug!(attempt, "Fetching holidays");

        match self.source.fetch_holidays().await {
            Ok(rows) => {
                let row_count = rows.len();
                let map = Arc::new(HolidayMap::from_rows(rows, &self.default_description));
                *self.cache.write().unwrap_or_else(PoisonError::into_inner) =
                    Some(Arc::clone(&map));
                info!(
                    rows = row_count,
                    holidays = map.len(),
                    "Holiday cache refreshed"
                );
                HolidayLoad::Loaded(map)
            }
            Err(err) => {
                warn!(
                    error = %err,
                    cache_kept = self.cached().is_some(),
                    "Holiday fetch failed; holidays are unknown"
                );
                HolidayLoad::Unavailable
            }
        }
    }

    /// Returns the current snapshot without touching the source.
    pub fn cached(&self) -> Option<Arc<HolidayMap>> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drops the cached snapshot; the next load fetches again.
    pub fn clear(&self) {
        *self.cache.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Number of fetches issued against the source so far.
    pub fn fetch_count(&self) -> u64 {
        self.fetches.load(Ordering::Relaxed)
    }

    /// Returns whether `date` is a business day, loading holidays if needed.
    ///
    /// Unknown holidays count as none.
    pub async fn is_business_day(&self, date: impl CivilDate) -> bool {
        let holidays = self.load_holidays(false).await.into_map_or_empty();
        calendar::is_business_day(date, &holidays)
    }

    /// Returns the holiday description for `date`, loading holidays if needed.
    pub async fn describe_holiday(&self, date: impl CivilDate) -> Option<String> {
        let holidays = self.load_holidays(false).await.into_map_or_empty();
        calendar::describe_holiday(date, &holidays).map(str::to_string)
    }

    /// Returns the holidays in a month, loading holidays if needed.
    pub async fn holidays_in_month(&self, year: i32, month: Month) -> Vec<Holiday> {
        let holidays = self.load_holidays(false).await.into_map_or_empty();
        calendar::holidays_in_month(year, month, &holidays)
            .into_iter()
            .cloned()
            .collect()
    }
}

impl<S> std::fmt::Debug for HolidayEngine<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HolidayEngine")
            .field("fetches", &self.fetches.load(Ordering::Relaxed))
            .field("default_description", &self.default_description)
            .finish_non_exhaustive()
    }
}
