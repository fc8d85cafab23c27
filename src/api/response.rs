//! Response types for the deadline engine API.
//!
//! This module defines the JSON bodies returned by the endpoints and the
//! mapping from [`EngineError`] to HTTP error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::DayKind;
use crate::error::EngineError;
use crate::models::Holiday;

/// Answer for `GET /business-days/{date}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessDayResponse {
    /// The civil date that was classified.
    pub date: NaiveDate,
    /// How the date counts.
    pub kind: DayKind,
    /// Saturday or Sunday.
    pub is_weekend: bool,
    /// Listed holiday.
    pub is_holiday: bool,
    /// Neither weekend nor holiday.
    pub is_business_day: bool,
    /// Holiday description, when the date is a holiday.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    /// `false` when the holiday source was unavailable and the answer
    /// assumes no holidays.
    pub holidays_known: bool,
}

/// Answer for `GET /holidays`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidaysResponse {
    /// The requested year.
    pub year: i32,
    /// The requested month (1-12), if any.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub month: Option<u32>,
    /// Matching holidays, ascending by date.
    pub holidays: Vec<Holiday>,
    /// `false` when the holiday source was unavailable.
    pub holidays_known: bool,
}

/// Answer for `POST /holidays/refresh`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshResponse {
    /// Number of holidays now cached.
    pub count: usize,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a holiday not found error response.
    pub fn holiday_not_found(date: NaiveDate) -> Self {
        Self::new("HOLIDAY_NOT_FOUND", format!("No holiday on {}", date))
    }

    /// Creates a holidays unavailable error response.
    pub fn holidays_unavailable() -> Self {
        Self::with_details(
            "HOLIDAYS_UNAVAILABLE",
            "Holiday source unavailable",
            "The holiday source could not be queried; the previous holiday set is still served",
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Pairs an error body with a status code.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidDate { input, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DATE",
                    format!("Invalid date '{}'", input),
                    message,
                ),
            },
            EngineError::HolidaySourceUnavailable { .. } => ApiErrorResponse {
                status: StatusCode::SERVICE_UNAVAILABLE,
                error: ApiError::holidays_unavailable(),
            },
            EngineError::InvalidQuery { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_QUERY", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_holiday_not_found_error() {
        let error = ApiError::holiday_not_found(NaiveDate::from_ymd_opt(2026, 9, 17).unwrap());
        assert_eq!(error.code, "HOLIDAY_NOT_FOUND");
        assert!(error.message.contains("2026-09-17"));
    }

    #[test]
    fn test_invalid_date_maps_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::InvalidDate {
            input: "2026-02-30".to_string(),
            message: "no such calendar date".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_DATE");
        assert_eq!(api_error.error.details.as_deref(), Some("no such calendar date"));
    }

    #[test]
    fn test_source_failure_maps_to_service_unavailable() {
        let api_error: ApiErrorResponse = EngineError::HolidaySourceUnavailable {
            message: "timeout".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(api_error.error.code, "HOLIDAYS_UNAVAILABLE");
    }

    #[test]
    fn test_business_day_response_omits_missing_description() {
        let response = BusinessDayResponse {
            date: NaiveDate::from_ymd_opt(2026, 9, 17).unwrap(),
            kind: DayKind::Weekday,
            is_weekend: false,
            is_holiday: false,
            is_business_day: true,
            description: None,
            holidays_known: true,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"date\":\"2026-09-17\""));
        assert!(json.contains("\"kind\":\"weekday\""));
        assert!(!json.contains("description"));
    }
}
