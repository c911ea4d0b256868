//! Core domain traits for the touring planner.
//!
//! These are intentionally minimal and domain-agnostic. The planner only
//! sees these seams, so topologies, priority models, and historical stores
//! can all be swapped out independently.

use std::collections::HashMap;

use crate::history::HistoricalStat;

/// Queue-Times park identifier.
pub type ParkId = u32;

/// Provides walking-time estimates between lands of a park.
pub trait WalkTimeProvider {
    /// Estimated walk time in minutes between two lands.
    ///
    /// Must return `0` when `from == to` and must never fail: gaps in the
    /// underlying data degrade to a flat estimate rather than blocking
    /// route generation.
    fn walk_time(&self, park_id: ParkId, from: &str, to: &str) -> u32;

    /// The land a visitor enters the park through, or `None` when the park
    /// has no topology data at all.
    fn entry_land(&self, park_id: ParkId) -> Option<&str>;
}

/// Inputs available to a [`PriorityModel`].
///
/// A struct rather than bare arguments so richer models (e.g. a
/// time-series forecast) can be fed more context later without changing
/// the trait.
#[derive(Debug)]
pub struct PriorityContext<'a> {
    pub ride_name: &'a str,
    /// Wall-clock hour at the park (0..=23).
    pub current_hour: u8,
    /// Historical statistics keyed by exact ride name.
    pub historical_averages: &'a HashMap<String, HistoricalStat>,
}

/// Historical adjustment to a ride's priority score.
pub trait PriorityModel {
    /// Multiplier applied to the historical share of the score.
    ///
    /// Values above `1.0` mean the ride should be done sooner (it gets
    /// busier later); below `1.0` mean it can wait; `1.0` is neutral.
    fn multiplier(&self, ctx: &PriorityContext<'_>) -> f64;
}

/// Neutral model used until multi-hour historical data exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutralPriority;

impl PriorityModel for NeutralPriority {
    fn multiplier(&self, _ctx: &PriorityContext<'_>) -> f64 {
        1.0
    }
}

/// Read-only query surface over recorded wait-time observations.
pub trait WaitHistoryProvider {
    /// Per-ride statistics keyed by exact ride name.
    fn ride_averages(
        &self,
        park_id: ParkId,
        day_of_week: Option<u8>,
        hour_of_day: Option<u8>,
    ) -> HashMap<String, HistoricalStat>;

    /// Aggregate statistics over every sample whose ride name contains
    /// `name`, case-insensitively.
    ///
    /// Note the asymmetry with [`ride_averages`](Self::ride_averages):
    /// single-ride lookups match by substring, the bulk query keys by
    /// exact name. Both behaviours are relied on by callers.
    fn historical_average(
        &self,
        park_id: ParkId,
        name: &str,
        day_of_week: Option<u8>,
        hour_of_day: Option<u8>,
    ) -> Option<HistoricalStat>;
}
