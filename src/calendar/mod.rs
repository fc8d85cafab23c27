//! Calendar logic for legal-deadline tracking.
//!
//! This module contains civil date decomposition and the business-day
//! predicates (weekend detection, holiday lookup, holiday descriptions and
//! month/year holiday listings) that deadline calculations build on.

mod business_day;
mod civil_date;

pub use business_day::{
    DayKind, classify_day, describe_holiday, holidays_in_month, holidays_in_year,
    is_business_day, is_holiday, is_weekend,
};
pub use civil_date::{CivilDate, parse_civil_date};
