//! Core data models for the deadline engine.
//!
//! This module contains the holiday records shared by the calendar
//! predicates, the holiday engine and the HTTP API.

mod holiday;

pub use holiday::{DEFAULT_HOLIDAY_DESCRIPTION, Holiday, HolidayMap, HolidayRow};
