//! HTTP API module for the deadline engine.
//!
//! This module provides the REST endpoints for classifying dates as
//! business days and listing holidays.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::HolidaysQuery;
pub use response::{ApiError, BusinessDayResponse, HolidaysResponse, RefreshResponse};
pub use state::AppState;
