//! Historical aggregation and comparison tests
//!
//! Pins the sample filters, the exact-name vs substring query asymmetry,
//! and the comparison threshold boundaries.

use touring_planner::history::{compare_to_average, WaitHistory, WaitLevel, WaitObservation};
use touring_planner::ride::Ride;
use touring_planner::traits::WaitHistoryProvider;

const MAGIC_KINGDOM: u32 = 6;
const EPCOT: u32 = 5;

fn observation(park_id: u32, name: &str, wait: Option<u32>, is_open: bool) -> WaitObservation {
    WaitObservation {
        park_id,
        ride_id: 1,
        ride_name: name.to_string(),
        land: None,
        wait_minutes: wait,
        is_open,
        day_of_week: 0,
        hour_of_day: 9,
    }
}

fn open_ride(id: u32, name: &str, land: &str, wait: u32) -> Ride {
    Ride {
        id,
        name: name.to_string(),
        land: land.to_string(),
        is_open: true,
        wait_time: Some(wait),
        last_updated: None,
    }
}

// ============================================================================
// Aggregation
// ============================================================================

#[test]
fn averages_only_count_open_positive_samples() {
    let mut history = WaitHistory::new();
    history.push(observation(MAGIC_KINGDOM, "Space Mountain", Some(40), true));
    // Walk-ons must not drag the baseline toward zero
    history.push(observation(MAGIC_KINGDOM, "Space Mountain", Some(0), true));
    // Closed rides carry no wait signal
    history.push(observation(MAGIC_KINGDOM, "Space Mountain", Some(60), false));
    history.push(observation(MAGIC_KINGDOM, "Space Mountain", None, true));

    let averages = history.ride_averages(MAGIC_KINGDOM, None, None);
    let stat = &averages["Space Mountain"];

    assert_eq!(stat.sample_count, 1);
    assert_eq!(stat.average, 40.0);
    assert_eq!(stat.min, 40);
    assert_eq!(stat.max, 40);
}

#[test]
fn averages_round_to_one_decimal() {
    let mut history = WaitHistory::new();
    history.push(observation(MAGIC_KINGDOM, "Peter Pan's Flight", Some(10), true));
    history.push(observation(MAGIC_KINGDOM, "Peter Pan's Flight", Some(15), true));
    history.push(observation(MAGIC_KINGDOM, "Peter Pan's Flight", Some(20), true));

    let averages = history.ride_averages(MAGIC_KINGDOM, None, None);
    let stat = &averages["Peter Pan's Flight"];

    assert_eq!(stat.average, 15.0);
    assert_eq!(stat.min, 10);
    assert_eq!(stat.max, 20);
    assert_eq!(stat.sample_count, 3);

    let mut uneven = WaitHistory::new();
    uneven.push(observation(MAGIC_KINGDOM, "Haunted Mansion", Some(10), true));
    uneven.push(observation(MAGIC_KINGDOM, "Haunted Mansion", Some(15), true));
    let stat = uneven.ride_averages(MAGIC_KINGDOM, None, None)["Haunted Mansion"].clone();
    assert_eq!(stat.average, 12.5);
}

#[test]
fn averages_are_scoped_to_the_park() {
    let mut history = WaitHistory::new();
    history.push(observation(MAGIC_KINGDOM, "Space Mountain", Some(40), true));
    history.push(observation(EPCOT, "Test Track", Some(55), true));

    let averages = history.ride_averages(MAGIC_KINGDOM, None, None);

    assert_eq!(averages.len(), 1);
    assert!(averages.contains_key("Space Mountain"));
}

#[test]
fn day_and_hour_filters_are_equality_matches() {
    let mut history = WaitHistory::new();
    let rides = vec![open_ride(1, "Space Mountain", "Tomorrowland", 30)];
    assert_eq!(history.record(MAGIC_KINGDOM, &rides, 0, 9), 1);
    let rides = vec![open_ride(1, "Space Mountain", "Tomorrowland", 90)];
    assert_eq!(history.record(MAGIC_KINGDOM, &rides, 5, 14), 1);

    let monday_morning = history.ride_averages(MAGIC_KINGDOM, Some(0), Some(9));
    assert_eq!(monday_morning["Space Mountain"].average, 30.0);

    let saturday = history.ride_averages(MAGIC_KINGDOM, Some(5), None);
    assert_eq!(saturday["Space Mountain"].average, 90.0);

    let unfiltered = history.ride_averages(MAGIC_KINGDOM, None, None);
    assert_eq!(unfiltered["Space Mountain"].average, 60.0);
    assert_eq!(unfiltered["Space Mountain"].sample_count, 2);

    assert!(history.ride_averages(MAGIC_KINGDOM, Some(3), None).is_empty());
}

// ============================================================================
// Single-ride substring lookup
// ============================================================================

#[test]
fn single_ride_lookup_matches_by_substring() {
    let mut history = WaitHistory::new();
    history.push(observation(MAGIC_KINGDOM, "Space Mountain", Some(40), true));

    let stat = history
        .historical_average(MAGIC_KINGDOM, "space", None, None)
        .expect("substring should match");
    assert_eq!(stat.average, 40.0);

    assert!(history
        .historical_average(MAGIC_KINGDOM, "matterhorn", None, None)
        .is_none());
}

#[test]
fn substring_lookup_aggregates_across_matching_rides() {
    // The bulk query keys by exact name; this one deliberately does not
    let mut history = WaitHistory::new();
    history.push(observation(MAGIC_KINGDOM, "Space Mountain", Some(40), true));
    history.push(observation(
        MAGIC_KINGDOM,
        "Big Thunder Mountain Railroad",
        Some(20),
        true,
    ));

    let stat = history
        .historical_average(MAGIC_KINGDOM, "mountain", None, None)
        .expect("both rides match");

    assert_eq!(stat.sample_count, 2);
    assert_eq!(stat.average, 30.0);
    assert_eq!(stat.min, 20);
    assert_eq!(stat.max, 40);

    let exact = history.ride_averages(MAGIC_KINGDOM, None, None);
    assert_eq!(exact.len(), 2);
    assert!(exact.contains_key("Space Mountain"));
    assert!(exact.contains_key("Big Thunder Mountain Railroad"));
}

// ============================================================================
// Comparison thresholds
// ============================================================================

#[test]
fn comparison_boundaries_favour_the_lower_bucket() {
    let cases = [
        (80, -20.0, WaitLevel::MuchLower),
        (90, -10.0, WaitLevel::Lower),
        (100, 0.0, WaitLevel::Typical),
        (110, 10.0, WaitLevel::Typical),
        (111, 11.0, WaitLevel::Higher),
        (120, 20.0, WaitLevel::Higher),
        (121, 21.0, WaitLevel::MuchHigher),
    ];

    for (current, percent, status) in cases {
        let comparison = compare_to_average(current, 100.0);
        assert_eq!(
            comparison.percent_diff,
            Some(percent),
            "percent for wait {current}"
        );
        assert_eq!(comparison.status, status, "status for wait {current}");
    }
}

#[test]
fn zero_average_has_no_baseline() {
    let comparison = compare_to_average(50, 0.0);

    assert_eq!(comparison.status, WaitLevel::NoBaseline);
    assert_eq!(comparison.percent_diff, None);
    assert_eq!(comparison.difference, 50.0);
}

#[test]
fn difference_is_signed_and_rounded() {
    let comparison = compare_to_average(30, 45.5);
    assert_eq!(comparison.difference, -15.5);

    let comparison = compare_to_average(50, 45.5);
    assert_eq!(comparison.difference, 4.5);
    assert_eq!(comparison.status, WaitLevel::Typical);
}
