//! Test fixtures for dispatch-planner.
//!
//! Provides realistic test data including:
//! - Real Nairobi locations (from OpenStreetMap)
//! - Builders for jobs and drivers with sensible defaults

pub mod nairobi_locations;

pub use nairobi_locations::*;
