//! Test fixtures for touring-planner.
//!
//! Provides realistic test data including:
//! - Real Magic Kingdom rides with typical mid-morning waits
//! - Builders for ride snapshots

pub mod magic_kingdom_rides;

pub use magic_kingdom_rides::*;
