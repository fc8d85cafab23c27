//! Holiday loading and caching.
//!
//! This module provides the [`HolidaySource`] query interface, the in-memory
//! and YAML-file sources, and the [`HolidayEngine`] that owns the holiday
//! cache and answers business-day questions against it.

mod engine;
mod source;

pub use engine::{HolidayEngine, HolidayLoad};
pub use source::{HolidaySource, StaticHolidaySource, YamlHolidaySource};
