//! Holiday records and the date-keyed holiday map.
//!
//! [`HolidayRow`] is the shape rows arrive in from a holiday source;
//! [`Holiday`] is the normalized record the engine works with, and
//! [`HolidayMap`] is the ordered snapshot built from one fetch.

use std::collections::BTreeMap;
use std::ops::RangeBounds;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calendar::parse_civil_date;
use crate::error::EngineResult;

/// Description used when a source row carries none.
pub const DEFAULT_HOLIDAY_DESCRIPTION: &str = "Feriado";

/// A single holiday.
///
/// # Example
///
/// ```
/// use deadline_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2026, 9, 18).unwrap(),
///     description: "Fiestas Patrias".to_string(),
///     is_non_waivable: true,
/// };
/// assert_eq!(holiday.date.to_string(), "2026-09-18");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The civil date of the holiday.
    pub date: NaiveDate,
    /// Human-readable name of the holiday.
    pub description: String,
    /// Whether the day can never be treated as a working day. Carried as
    /// data only.
    pub is_non_waivable: bool,
}

/// A holiday row as returned by a holiday source.
///
/// Field names follow the holiday table's columns. Missing descriptions
/// and flags are filled in by [`HolidayRow::into_holiday`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRow {
    /// The holiday date, `YYYY-MM-DD`, optionally followed by a time.
    pub fecha: String,
    /// The holiday description.
    #[serde(default)]
    pub descripcion: Option<String>,
    /// The non-waivable flag.
    #[serde(default)]
    pub es_irrenunciable: Option<bool>,
}

impl HolidayRow {
    /// Creates a row with every column present.
    pub fn new(
        fecha: impl Into<String>,
        descripcion: impl Into<String>,
        es_irrenunciable: bool,
    ) -> Self {
        Self {
            fecha: fecha.into(),
            descripcion: Some(descripcion.into()),
            es_irrenunciable: Some(es_irrenunciable),
        }
    }

    /// Normalizes the row into a [`Holiday`].
    ///
    /// The date is decomposed into civil components; any time component is
    /// dropped. An absent description becomes `default_description` and an
    /// absent flag becomes `false`.
    pub fn into_holiday(self, default_description: &str) -> EngineResult<Holiday> {
        let date = parse_civil_date(&self.fecha)?;
        Ok(Holiday {
            date,
            description: self
                .descripcion
                .unwrap_or_else(|| default_description.to_string()),
            is_non_waivable: self.es_irrenunciable.unwrap_or(false),
        })
    }
}

/// Holidays keyed by civil date, iterated in ascending date order.
///
/// # Example
///
/// ```
/// use deadline_engine::models::{Holiday, HolidayMap};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 12, 25).unwrap();
/// let map: HolidayMap = vec![Holiday {
///     date,
///     description: "Navidad".to_string(),
///     is_non_waivable: true,
/// }]
/// .into_iter()
/// .collect();
///
/// assert!(map.contains(date));
/// assert_eq!(map.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayMap {
    entries: BTreeMap<NaiveDate, Holiday>,
}

impl HolidayMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from source rows.
    ///
    /// Rows whose date cannot be decomposed are skipped with a warning.
    /// When two rows share a date the later one wins.
    pub fn from_rows(rows: Vec<HolidayRow>, default_description: &str) -> Self {
        let mut map = Self::new();
        for row in rows {
            let fecha = row.fecha.clone();
            match row.into_holiday(default_description) {
                Ok(holiday) => {
                    map.insert(holiday);
                }
                Err(err) => {
                    warn!(fecha = %fecha, error = %err, "Skipping holiday row with unusable date");
                }
            }
        }
        map
    }

    /// Inserts a holiday, returning the one it replaced on the same date.
    pub fn insert(&mut self, holiday: Holiday) -> Option<Holiday> {
        self.entries.insert(holiday.date, holiday)
    }

    /// Returns the holiday on `date`, if any.
    pub fn get(&self, date: NaiveDate) -> Option<&Holiday> {
        self.entries.get(&date)
    }

    /// Returns whether `date` is a holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.entries.contains_key(&date)
    }

    /// Number of holidays.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the map holds no holidays.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates all holidays in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = &Holiday> {
        self.entries.values()
    }

    /// Iterates the holidays whose dates fall in `range`, ascending.
    pub fn range<R: RangeBounds<NaiveDate>>(&self, range: R) -> impl Iterator<Item = &Holiday> {
        self.entries.range(range).map(|(_, holiday)| holiday)
    }
}

impl FromIterator<Holiday> for HolidayMap {
    fn from_iter<I: IntoIterator<Item = Holiday>>(iter: I) -> Self {
        let mut map = Self::new();
        for holiday in iter {
            map.insert(holiday);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_row_with_all_columns_converts() {
        let row = HolidayRow::new("2026-09-18", "Fiestas Patrias", true);
        let holiday = row.into_holiday(DEFAULT_HOLIDAY_DESCRIPTION).unwrap();

        assert_eq!(holiday.date, make_date(2026, 9, 18));
        assert_eq!(holiday.description, "Fiestas Patrias");
        assert!(holiday.is_non_waivable);
    }

    #[test]
    fn test_row_missing_description_uses_default() {
        let row = HolidayRow {
            fecha: "2026-06-29".to_string(),
            descripcion: None,
            es_irrenunciable: None,
        };
        let holiday = row.into_holiday(DEFAULT_HOLIDAY_DESCRIPTION).unwrap();

        assert_eq!(holiday.description, "Feriado");
        assert!(!holiday.is_non_waivable);
    }

    #[test]
    fn test_row_with_timestamp_keeps_civil_date() {
        let row = HolidayRow::new("2026-09-18T00:00:00Z", "Fiestas Patrias", true);
        let holiday = row.into_holiday(DEFAULT_HOLIDAY_DESCRIPTION).unwrap();
        assert_eq!(holiday.date, make_date(2026, 9, 18));
    }

    #[test]
    fn test_row_with_bad_date_is_an_error() {
        let row = HolidayRow::new("not-a-date", "Nada", false);
        assert!(row.into_holiday(DEFAULT_HOLIDAY_DESCRIPTION).is_err());
    }

    #[test]
    fn test_deserialize_row_with_missing_columns() {
        let json = r#"{ "fecha": "2026-05-21" }"#;
        let row: HolidayRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.fecha, "2026-05-21");
        assert_eq!(row.descripcion, None);
        assert_eq!(row.es_irrenunciable, None);
    }

    #[test]
    fn test_from_rows_skips_unusable_rows() {
        let rows = vec![
            HolidayRow::new("2026-01-01", "Año Nuevo", true),
            HolidayRow::new("2026/05/01", "Bad separator", true),
            HolidayRow::new("2026-05-21", "Glorias Navales", false),
        ];
        let map = HolidayMap::from_rows(rows, DEFAULT_HOLIDAY_DESCRIPTION);

        assert_eq!(map.len(), 2);
        assert!(map.contains(make_date(2026, 1, 1)));
        assert!(map.contains(make_date(2026, 5, 21)));
    }

    #[test]
    fn test_from_rows_later_duplicate_wins() {
        let rows = vec![
            HolidayRow::new("2026-12-08", "First", false),
            HolidayRow::new("2026-12-08", "Inmaculada Concepción", true),
        ];
        let map = HolidayMap::from_rows(rows, DEFAULT_HOLIDAY_DESCRIPTION);

        assert_eq!(map.len(), 1);
        let holiday = map.get(make_date(2026, 12, 8)).unwrap();
        assert_eq!(holiday.description, "Inmaculada Concepción");
        assert!(holiday.is_non_waivable);
    }

    #[test]
    fn test_iteration_is_ascending() {
        let rows = vec![
            HolidayRow::new("2026-12-25", "Navidad", true),
            HolidayRow::new("2026-01-01", "Año Nuevo", true),
            HolidayRow::new("2026-09-18", "Fiestas Patrias", true),
        ];
        let map = HolidayMap::from_rows(rows, DEFAULT_HOLIDAY_DESCRIPTION);
        let dates: Vec<NaiveDate> = map.iter().map(|h| h.date).collect();

        assert_eq!(
            dates,
            vec![
                make_date(2026, 1, 1),
                make_date(2026, 9, 18),
                make_date(2026, 12, 25)
            ]
        );
    }

    #[test]
    fn test_range_is_inclusive_of_bounds() {
        let rows = vec![
            HolidayRow::new("2026-09-18", "Fiestas Patrias", true),
            HolidayRow::new("2026-09-19", "Glorias del Ejército", true),
            HolidayRow::new("2026-10-12", "Encuentro de Dos Mundos", false),
        ];
        let map = HolidayMap::from_rows(rows, DEFAULT_HOLIDAY_DESCRIPTION);
        let in_range: Vec<&Holiday> = map
            .range(make_date(2026, 9, 19)..=make_date(2026, 10, 12))
            .collect();

        assert_eq!(in_range.len(), 2);
        assert_eq!(in_range[0].date, make_date(2026, 9, 19));
    }

    #[test]
    fn test_serialize_holiday() {
        let holiday = Holiday {
            date: make_date(2026, 9, 18),
            description: "Fiestas Patrias".to_string(),
            is_non_waivable: true,
        };
        let json = serde_json::to_string(&holiday).unwrap();
        assert!(json.contains("\"date\":\"2026-09-18\""));
        assert!(json.contains("\"description\":\"Fiestas Patrias\""));
        assert!(json.contains("\"is_non_waivable\":true"));
    }
}
