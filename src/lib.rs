//! Business-Day Deadline Engine
//!
//! This crate classifies civil calendar dates as business or non-business
//! days for legal-deadline tracking. Weekends and a holiday table loaded
//! from an external source are excluded; everything else is a business day.

#![warn(missing_docs)]

pub mod api;
pub mod calendar;
pub mod cli;
pub mod config;
pub mod error;
pub mod holidays;
pub mod models;
