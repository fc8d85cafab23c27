//! Business-day classification.
//!
//! This module provides the predicates every deadline calculation is built
//! on: whether a civil date falls on a weekend, whether it is a listed
//! holiday, and whether it is therefore a business day. All of them are
//! pure functions over an already-loaded [`HolidayMap`].

use chrono::{Datelike, Month, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Holiday, HolidayMap};

use super::civil_date::CivilDate;

/// How a civil date counts for deadline purposes.
///
/// # Example
///
/// ```
/// use deadline_engine::calendar::DayKind;
///
/// assert_eq!(format!("{}", DayKind::Weekend), "Weekend");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// Monday through Friday, not a holiday.
    Weekday,
    /// Saturday or Sunday, not a holiday.
    Weekend,
    /// A listed holiday, whatever day of the week it falls on.
    Holiday,
}

impl DayKind {
    /// Classifies a civil date. Holidays take precedence over weekends.
    pub fn of(date: NaiveDate, holidays: &HolidayMap) -> Self {
        if holidays.contains(date) {
            DayKind::Holiday
        } else if is_weekend(date) {
            DayKind::Weekend
        } else {
            DayKind::Weekday
        }
    }

    /// Returns whether deadlines may count this day.
    pub fn is_business_day(self) -> bool {
        matches!(self, DayKind::Weekday)
    }
}

impl std::fmt::Display for DayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayKind::Weekday => write!(f, "Weekday"),
            DayKind::Weekend => write!(f, "Weekend"),
            DayKind::Holiday => write!(f, "Holiday"),
        }
    }
}

fn resolve(date: &impl CivilDate, operation: &'static str) -> Option<NaiveDate> {
    let resolved = date.civil_date();
    if resolved.is_none() {
        debug!(operation, "Date could not be decomposed into civil components");
    }
    resolved
}

/// Returns whether the date falls on a Saturday or Sunday.
///
/// The day of the week comes from the civil date alone, so the answer does
/// not depend on the process time zone. Malformed input is not a weekend.
///
/// # Example
///
/// ```
/// use deadline_engine::calendar::is_weekend;
///
/// assert!(is_weekend("2026-01-03")); // Saturday
/// assert!(is_weekend("2026-01-04")); // Sunday
/// assert!(!is_weekend("2026-01-05")); // Monday
/// ```
pub fn is_weekend(date: impl CivilDate) -> bool {
    resolve(&date, "is_weekend")
        .is_some_and(|d| matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
}

/// Returns whether the date is listed in `holidays`.
///
/// Any time-of-day component is dropped before the lookup.
///
/// # Example
///
/// ```
/// use deadline_engine::calendar::is_holiday;
/// use deadline_engine::models::{HolidayMap, HolidayRow};
///
/// let holidays = HolidayMap::from_rows(
///     vec![HolidayRow::new("2026-09-18", "Fiestas Patrias", true)],
///     "Feriado",
/// );
///
/// assert!(is_holiday("2026-09-18", &holidays));
/// assert!(is_holiday("2026-09-18T00:00:00Z", &holidays));
/// assert!(!is_holiday("2026-09-17", &holidays));
/// ```
pub fn is_holiday(date: impl CivilDate, holidays: &HolidayMap) -> bool {
    resolve(&date, "is_holiday").is_some_and(|d| holidays.contains(d))
}

/// Returns the description of the holiday on `date`, if there is one.
pub fn describe_holiday(date: impl CivilDate, holidays: &HolidayMap) -> Option<&str> {
    let date = resolve(&date, "describe_holiday")?;
    holidays.get(date).map(|h| h.description.as_str())
}

/// Returns whether the date is neither a weekend day nor a holiday.
///
/// Malformed input is never a business day.
///
/// # Example
///
/// ```
/// use deadline_engine::calendar::is_business_day;
/// use deadline_engine::models::{HolidayMap, HolidayRow};
///
/// let holidays = HolidayMap::from_rows(
///     vec![HolidayRow::new("2026-09-18", "Fiestas Patrias", true)],
///     "Feriado",
/// );
///
/// assert!(is_business_day("2026-09-17", &holidays)); // Thursday
/// assert!(!is_business_day("2026-09-18", &holidays)); // Friday, holiday
/// assert!(!is_business_day("2026-09-19", &holidays)); // Saturday
/// ```
pub fn is_business_day(date: impl CivilDate, holidays: &HolidayMap) -> bool {
    match resolve(&date, "is_business_day") {
        Some(d) => !is_weekend(d) && !is_holiday(d, holidays),
        None => false,
    }
}

/// Classifies a date, or returns `None` for malformed input.
pub fn classify_day(date: impl CivilDate, holidays: &HolidayMap) -> Option<DayKind> {
    resolve(&date, "classify_day").map(|d| DayKind::of(d, holidays))
}

/// Returns the holidays that fall in the given month, ascending by date.
///
/// # Example
///
/// ```
/// use deadline_engine::calendar::holidays_in_month;
/// use deadline_engine::models::{HolidayMap, HolidayRow};
/// use chrono::Month;
///
/// let holidays = HolidayMap::from_rows(
///     vec![
///         HolidayRow::new("2026-08-15", "Asunción de la Virgen", false),
///         HolidayRow::new("2026-09-18", "Fiestas Patrias", true),
///         HolidayRow::new("2026-09-19", "Glorias del Ejército", true),
///     ],
///     "Feriado",
/// );
///
/// let september = holidays_in_month(2026, Month::September, &holidays);
/// assert_eq!(september.len(), 2);
/// ```
pub fn holidays_in_month(year: i32, month: Month, holidays: &HolidayMap) -> Vec<&Holiday> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month.number_from_month(), 1) else {
        return Vec::new();
    };
    match first.checked_add_months(Months::new(1)) {
        Some(next) => holidays.range(first..next).collect(),
        None => holidays.range(first..).collect(),
    }
}

/// Returns the holidays that fall in the given year, ascending by date.
pub fn holidays_in_year(year: i32, holidays: &HolidayMap) -> Vec<&Holiday> {
    let Some(first) = NaiveDate::from_ymd_opt(year, 1, 1) else {
        return Vec::new();
    };
    match NaiveDate::from_ymd_opt(year + 1, 1, 1) {
        Some(next) => holidays.range(first..next).collect(),
        None => holidays.range(first..).collect(),
    }
}
