//! HTTP request handlers for the deadline engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calendar::{
    DayKind, describe_holiday, holidays_in_month, holidays_in_year, is_business_day, is_holiday,
    is_weekend, parse_civil_date,
};
use crate::error::EngineError;
use crate::holidays::{HolidayLoad, HolidaySource};

use super::request::HolidaysQuery;
use super::response::{
    ApiError, ApiErrorResponse, BusinessDayResponse, HolidaysResponse, RefreshResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router<S: HolidaySource + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/business-days/:date", get(business_day_handler::<S>))
        .route("/holidays", get(list_holidays_handler::<S>))
        .route("/holidays/refresh", post(refresh_handler::<S>))
        .route("/holidays/:date", get(holiday_handler::<S>))
        .with_state(state)
}

/// Handler for GET /business-days/{date}.
///
/// Classifies the date against the cached holidays. When the holiday source
/// is unavailable the answer assumes no holidays and says so.
async fn business_day_handler<S: HolidaySource + 'static>(
    State(state): State<AppState<S>>,
    Path(raw_date): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let date = match parse_civil_date(&raw_date) {
        Ok(date) => date,
        Err(err) => {
            warn!(correlation_id = %correlation_id, input = %raw_date, "Rejected malformed date");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let load = state.engine().load_holidays(false).await;
    let holidays_known = !load.is_unavailable();
    let holidays = load.into_map_or_empty();

    let response = BusinessDayResponse {
        date,
        kind: DayKind::of(date, &holidays),
        is_weekend: is_weekend(date),
        is_holiday: is_holiday(date, &holidays),
        is_business_day: is_business_day(date, &holidays),
        description: describe_holiday(date, &holidays).map(str::to_string),
        holidays_known,
    };

    info!(
        correlation_id = %correlation_id,
        date = %date,
        kind = %response.kind,
        holidays_known,
        "Classified date"
    );
    (StatusCode::OK, Json(response)).into_response()
}

/// Handler for GET /holidays?year=YYYY[&month=M].
async fn list_holidays_handler<S: HolidaySource + 'static>(
    State(state): State<AppState<S>>,
    query: Result<Query<HolidaysQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, error = %rejection, "Rejected holiday query");
            return ApiErrorResponse::from(EngineError::InvalidQuery {
                message: rejection.body_text(),
            })
            .into_response();
        }
    };

    let month = match query.month() {
        Ok(month) => month,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Rejected holiday query");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let load = state.engine().load_holidays(false).await;
    let holidays_known = !load.is_unavailable();
    let holidays = load.into_map_or_empty();

    let selected = match month {
        Some(month) => holidays_in_month(query.year, month, &holidays),
        None => holidays_in_year(query.year, &holidays),
    };

    info!(
        correlation_id = %correlation_id,
        year = query.year,
        month = ?query.month,
        count = selected.len(),
        holidays_known,
        "Listed holidays"
    );

    let response = HolidaysResponse {
        year: query.year,
        month: query.month,
        holidays: selected.into_iter().cloned().collect(),
        holidays_known,
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// Handler for GET /holidays/{date}.
async fn holiday_handler<S: HolidaySource + 'static>(
    State(state): State<AppState<S>>,
    Path(raw_date): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let date = match parse_civil_date(&raw_date) {
        Ok(date) => date,
        Err(err) => {
            warn!(correlation_id = %correlation_id, input = %raw_date, "Rejected malformed date");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    match state.engine().load_holidays(false).await {
        HolidayLoad::Loaded(holidays) => match holidays.get(date) {
            Some(holiday) => (StatusCode::OK, Json(holiday.clone())).into_response(),
            None => ApiErrorResponse::new(StatusCode::NOT_FOUND, ApiError::holiday_not_found(date))
                .into_response(),
        },
        HolidayLoad::Unavailable => {
            warn!(correlation_id = %correlation_id, date = %date, "Holiday lookup without holidays");
            ApiErrorResponse::new(
                StatusCode::SERVICE_UNAVAILABLE,
                ApiError::holidays_unavailable(),
            )
            .into_response()
        }
    }
}

/// Handler for POST /holidays/refresh.
///
/// Forces a reload from the source. A failed reload keeps serving the
/// previous holiday set.
async fn refresh_handler<S: HolidaySource + 'static>(State(state): State<AppState<S>>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Refreshing holidays");

    match state.engine().load_holidays(true).await {
        HolidayLoad::Loaded(holidays) => {
            info!(correlation_id = %correlation_id, count = holidays.len(), "Holidays refreshed");
            (
                StatusCode::OK,
                Json(RefreshResponse {
                    count: holidays.len(),
                }),
            )
                .into_response()
        }
        HolidayLoad::Unavailable => ApiErrorResponse::new(
            StatusCode::SERVICE_UNAVAILABLE,
            ApiError::holidays_unavailable(),
        )
        .into_response(),
    }
}
