//! Application state for the deadline engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::holidays::HolidayEngine;

/// Shared application state.
///
/// Wraps the single [`HolidayEngine`] every handler queries, so all
/// requests share one holiday cache.
pub struct AppState<S> {
    engine: Arc<HolidayEngine<S>>,
}

impl<S> AppState<S> {
    /// Creates a new application state around the given engine.
    pub fn new(engine: HolidayEngine<S>) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Returns a reference to the holiday engine.
    pub fn engine(&self) -> &HolidayEngine<S> {
        &self.engine
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
        }
    }
}
