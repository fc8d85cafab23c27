//! Request types for the deadline engine API.
//!
//! This module defines the query-string structures accepted by the
//! `/holidays` endpoint and their validation.

use chrono::Month;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Query parameters for `GET /holidays`.
///
/// `month` is 1-based (1 = January). Without it the whole year is listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidaysQuery {
    /// The calendar year.
    pub year: i32,
    /// The month, 1 through 12.
    #[serde(default)]
    pub month: Option<u32>,
}

impl HolidaysQuery {
    /// Validates the month number, returning `None` when no month was given.
    pub fn month(&self) -> EngineResult<Option<Month>> {
        self.month
            .map(|number| {
                u8::try_from(number)
                    .ok()
                    .and_then(|n| Month::try_from(n).ok())
                    .ok_or_else(|| EngineError::InvalidQuery {
                        message: format!("month must be between 1 and 12, got {}", number),
                    })
            })
            .transpose()
    }
}
