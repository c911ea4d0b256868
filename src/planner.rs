//! Touring-route planner.
//!
//! Factors considered, in weight order:
//! 1. Land grouping - minimise walking between areas
//! 2. Walk times - estimated minutes between lands
//! 3. Current wait times - shorter waits first within a land
//! 4. Historical patterns - via the pluggable [`PriorityModel`]
//!
//! The pipeline: filter to ridable candidates, score and group them by
//! land, order the lands greedily from the park entrance, then emit rides
//! until the optional time budget would be exceeded. Deliberately a cheap
//! heuristic, not a TSP solver: parks have at most ~8 lands, and a
//! deterministic O(n^2) pass beats an optimal tour that arrives late.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::history::HistoricalStat;
use crate::ride::Ride;
use crate::traits::{ParkId, PriorityContext, PriorityModel, WalkTimeProvider};

/// Score weights: 70% current wait, 30% historical priority.
const WAIT_WEIGHT: f64 = 0.7;
const HISTORY_WEIGHT: f64 = 0.3;

/// Tuning knobs for a single planning call.
#[derive(Debug, Clone, Default)]
pub struct PlanOptions {
    /// Ride names that must be included, matched as case-insensitive
    /// substrings. An unmatched list silently falls back to all rides.
    pub must_do: Option<Vec<String>>,
    /// Historical statistics keyed by exact ride name, fed to the
    /// priority model.
    pub historical_averages: HashMap<String, HistoricalStat>,
    /// Hard cap on wait + walk minutes. The route stops before it is
    /// exceeded.
    pub max_total_time: Option<u32>,
    /// Wall-clock hour at the park, fed to the priority model.
    pub current_hour: u8,
}

/// One stop on the itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteItem {
    pub name: String,
    pub land: String,
    pub wait_time: u32,
    /// Walk minutes from the previous stop; zero within a land and for
    /// the first stop overall.
    pub walk_from_previous: u32,
    /// Running wait + walk total up to and including this stop.
    pub cumulative_time: u32,
}

/// Outcome of one planning call. Built once, never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RouteResult {
    pub success: bool,
    pub route: Vec<RouteItem>,
    pub total_wait_time: u32,
    pub total_walk_time: u32,
    pub total_time: u32,
    pub ride_count: usize,
    pub lands_visited: usize,
    pub error: Option<String>,
}

impl RouteResult {
    fn failure(message: &str) -> Self {
        Self {
            error: Some(message.to_string()),
            ..Self::default()
        }
    }
}

/// Priority score for a ride: lower is better.
///
/// The live wait carries 70% of the weight; the remaining 30% scales
/// with the historical multiplier, which is neutral (`1.0`) today.
pub fn priority_score(wait_time: u32, multiplier: f64) -> f64 {
    f64::from(wait_time) * (WAIT_WEIGHT + HISTORY_WEIGHT * multiplier)
}

/// Order lands for visiting, greedy nearest-neighbour from the entrance.
///
/// Starts at the entry land when it is among `lands`, otherwise at the
/// land closest to it, then repeatedly hops to the nearest unvisited
/// land. Ties break to the lexicographically smallest name. A park with
/// no topology gets the input order back untouched.
pub fn order_lands<W>(walk_times: &W, park_id: ParkId, lands: &[String]) -> Vec<String>
where
    W: WalkTimeProvider,
{
    let Some(entry) = walk_times.entry_land(park_id) else {
        return lands.to_vec();
    };

    let mut remaining: Vec<String> = lands.to_vec();
    // Sorting first makes min_by_key's first-wins tie-break lexicographic
    remaining.sort();
    remaining.dedup();
    if remaining.is_empty() {
        return remaining;
    }

    let start = remaining
        .iter()
        .position(|land| land == entry)
        .unwrap_or_else(|| nearest(walk_times, park_id, entry, &remaining));

    let mut ordered = Vec::with_capacity(remaining.len());
    let mut current = remaining.remove(start);
    while !remaining.is_empty() {
        let next_idx = nearest(walk_times, park_id, &current, &remaining);
        let next = remaining.remove(next_idx);
        ordered.push(std::mem::replace(&mut current, next));
    }
    ordered.push(current);
    ordered
}

fn nearest<W>(walk_times: &W, park_id: ParkId, from: &str, candidates: &[String]) -> usize
where
    W: WalkTimeProvider,
{
    candidates
        .iter()
        .enumerate()
        .min_by_key(|(_, land)| walk_times.walk_time(park_id, from, land))
        .map(|(idx, _)| idx)
        .unwrap_or(0)
}

struct ScoredRide<'a> {
    ride: &'a Ride,
    wait: u32,
    score: f64,
}

/// Generate an optimised touring route over a snapshot of rides.
///
/// Closed rides and rides without a posted wait are skipped. When
/// `options.max_total_time` is set, a ride is only emitted if it keeps
/// the running wait + walk total within the budget; the first ride that
/// would overshoot ends the route, so the totals always equal the sum
/// over emitted stops.
pub fn plan_route<W, P>(
    park_id: ParkId,
    rides: &[Ride],
    walk_times: &W,
    priority: &P,
    options: &PlanOptions,
) -> RouteResult
where
    W: WalkTimeProvider,
    P: PriorityModel,
{
    let mut available: Vec<&Ride> = rides
        .iter()
        .filter(|ride| ride.is_open && ride.wait_time.is_some())
        .collect();

    if let Some(must_do) = options.must_do.as_ref().filter(|terms| !terms.is_empty()) {
        let needles: Vec<String> = must_do.iter().map(|term| term.to_lowercase()).collect();
        let selected: Vec<&Ride> = available
            .iter()
            .copied()
            .filter(|ride| {
                let name = ride.name.to_lowercase();
                needles.iter().any(|needle| name.contains(needle))
            })
            .collect();
        // An unmatched must-do list falls back to the full field rather
        // than failing the whole plan.
        if !selected.is_empty() {
            available = selected;
        }
    }

    if available.is_empty() {
        return RouteResult::failure("No matching rides available");
    }
    debug!(park_id, candidates = available.len(), "planning touring route");

    // Group by land, first-appearance order, scoring as we go
    let mut lands: Vec<String> = Vec::new();
    let mut rides_by_land: HashMap<String, Vec<ScoredRide<'_>>> = HashMap::new();
    for ride in available {
        let Some(wait) = ride.wait_time else { continue };
        let multiplier = priority.multiplier(&PriorityContext {
            ride_name: &ride.name,
            current_hour: options.current_hour,
            historical_averages: &options.historical_averages,
        });
        let scored = ScoredRide {
            ride,
            wait,
            score: priority_score(wait, multiplier),
        };
        if !rides_by_land.contains_key(&ride.land) {
            lands.push(ride.land.clone());
        }
        rides_by_land.entry(ride.land.clone()).or_default().push(scored);
    }

    for scored in rides_by_land.values_mut() {
        scored.sort_by(|a, b| a.score.total_cmp(&b.score));
    }

    let land_order = order_lands(walk_times, park_id, &lands);
    debug!(?land_order, "land visiting order");

    let mut route: Vec<RouteItem> = Vec::new();
    let mut total_wait = 0u32;
    let mut total_walk = 0u32;
    let mut current_land: Option<&str> = None;

    'lands: for land in &land_order {
        let Some(land_rides) = rides_by_land.get(land.as_str()) else {
            continue;
        };
        for scored in land_rides {
            let hop = match current_land {
                Some(prev) if prev != land.as_str() => walk_times.walk_time(park_id, prev, land),
                _ => 0,
            };
            let cumulative = total_wait + total_walk + hop + scored.wait;
            if let Some(max) = options.max_total_time {
                if cumulative > max {
                    debug!(
                        ride = %scored.ride.name,
                        cumulative,
                        max,
                        "time budget reached; truncating route"
                    );
                    break 'lands;
                }
            }
            total_walk += hop;
            total_wait += scored.wait;
            route.push(RouteItem {
                name: scored.ride.name.clone(),
                land: land.clone(),
                wait_time: scored.wait,
                walk_from_previous: hop,
                cumulative_time: cumulative,
            });
            current_land = Some(land.as_str());
        }
    }

    let lands_visited = route
        .iter()
        .map(|item| item.land.as_str())
        .collect::<HashSet<_>>()
        .len();

    RouteResult {
        success: true,
        ride_count: route.len(),
        lands_visited,
        total_wait_time: total_wait,
        total_walk_time: total_walk,
        total_time: total_wait + total_walk,
        route,
        error: None,
    }
}
