//! Civil calendar dates.
//!
//! Every date the engine looks at is reduced to its year, month and day
//! before anything else happens. Strings are decomposed by hand rather
//! than fed to a date-time parser, so a plain `2026-01-01` can never be
//! read as UTC midnight and shifted into the previous day.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

use crate::error::{EngineError, EngineResult};

/// A value that identifies a civil calendar date.
///
/// Implementations return the date as written in the value's own
/// calendar, never after conversion to another offset. `None` means the
/// value could not be decomposed.
///
/// # Example
///
/// ```
/// use deadline_engine::calendar::CivilDate;
/// use chrono::{DateTime, NaiveDate};
///
/// let expected = NaiveDate::from_ymd_opt(2026, 1, 2);
///
/// assert_eq!("2026-01-02".civil_date(), expected);
/// assert_eq!("2026-01-02T23:30:00Z".civil_date(), expected);
///
/// // 22:00 on the 2nd at UTC-5 is already the 3rd in UTC; the civil date stays the 2nd.
/// let evening = DateTime::parse_from_rfc3339("2026-01-02T22:00:00-05:00").unwrap();
/// assert_eq!(evening.civil_date(), expected);
/// ```
pub trait CivilDate {
    /// Returns the civil date, or `None` if the value is malformed.
    fn civil_date(&self) -> Option<NaiveDate>;
}

impl CivilDate for NaiveDate {
    fn civil_date(&self) -> Option<NaiveDate> {
        Some(*self)
    }
}

impl CivilDate for NaiveDateTime {
    fn civil_date(&self) -> Option<NaiveDate> {
        Some(self.date())
    }
}

impl<Tz: TimeZone> CivilDate for DateTime<Tz> {
    fn civil_date(&self) -> Option<NaiveDate> {
        Some(self.date_naive())
    }
}

impl CivilDate for str {
    fn civil_date(&self) -> Option<NaiveDate> {
        parse_civil_date(self).ok()
    }
}

impl CivilDate for String {
    fn civil_date(&self) -> Option<NaiveDate> {
        self.as_str().civil_date()
    }
}

impl<T: CivilDate + ?Sized> CivilDate for &T {
    fn civil_date(&self) -> Option<NaiveDate> {
        (**self).civil_date()
    }
}

/// Parses a `YYYY-MM-DD` string into a civil date.
///
/// Anything from the first `T` or space onwards is treated as a time
/// component and dropped. The remainder must be exactly three `-`
/// separated integers forming a real calendar date.
///
/// # Example
///
/// ```
/// use deadline_engine::calendar::parse_civil_date;
/// use chrono::NaiveDate;
///
/// let date = parse_civil_date("2026-09-18T00:00:00Z").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2026, 9, 18).unwrap());
///
/// assert!(parse_civil_date("2026-02-30").is_err());
/// ```
pub fn parse_civil_date(input: &str) -> EngineResult<NaiveDate> {
    let trimmed = input.trim();
    let date_part = trimmed.split(['T', ' ']).next().unwrap_or_default();

    let mut components = date_part.split('-');
    let (Some(year), Some(month), Some(day), None) = (
        components.next(),
        components.next(),
        components.next(),
        components.next(),
    ) else {
        return Err(invalid_date(input, "expected YYYY-MM-DD"));
    };

    let year: i32 = year
        .parse()
        .map_err(|_| invalid_date(input, "year is not a number"))?;
    let month: u32 = month
        .parse()
        .map_err(|_| invalid_date(input, "month is not a number"))?;
    let day: u32 = day
        .parse()
        .map_err(|_| invalid_date(input, "day is not a number"))?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| invalid_date(input, "no such calendar date"))
}

fn invalid_date(input: &str, message: &str) -> EngineError {
    EngineError::InvalidDate {
        input: input.to_string(),
        message: message.to_string(),
    }
}
