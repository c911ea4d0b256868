//! Historical wait-time aggregation and comparison.
//!
//! [`WaitHistory`] is an in-memory store of recorded samples implementing
//! the [`WaitHistoryProvider`] query contract. Durable storage lives with
//! an external collaborator; this is the reference implementation the
//! planner and the tests run against.
//!
//! Baselines only count samples where the ride was open with a positive
//! wait: a walk-on must not drag the average toward zero, and a closed
//! ride carries no wait signal.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::ride::Ride;
use crate::traits::{ParkId, WaitHistoryProvider};

/// One recorded wait-time sample.
#[derive(Debug, Clone, PartialEq)]
pub struct WaitObservation {
    pub park_id: ParkId,
    pub ride_id: u32,
    pub ride_name: String,
    pub land: Option<String>,
    pub wait_minutes: Option<u32>,
    pub is_open: bool,
    /// 0 = Monday .. 6 = Sunday.
    pub day_of_week: u8,
    pub hour_of_day: u8,
}

/// Aggregate statistics for a ride under a day/hour filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoricalStat {
    /// Mean wait in minutes, rounded to one decimal.
    pub average: f64,
    pub min: u32,
    pub max: u32,
    pub sample_count: usize,
}

/// How a live wait sits relative to its historical baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WaitLevel {
    NoBaseline,
    MuchLower,
    Lower,
    Typical,
    Higher,
    MuchHigher,
}

/// Result of [`compare_to_average`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    /// Minutes above (positive) or below (negative) the baseline.
    pub difference: f64,
    /// `None` when there is no baseline to divide by.
    pub percent_diff: Option<f64>,
    pub status: WaitLevel,
}

/// In-memory observation log with aggregate queries.
#[derive(Debug, Clone, Default)]
pub struct WaitHistory {
    observations: Vec<WaitObservation>,
}

impl WaitHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a snapshot of rides as observed at `day_of_week`/`hour_of_day`.
    ///
    /// Returns the number of samples recorded.
    pub fn record(
        &mut self,
        park_id: ParkId,
        rides: &[Ride],
        day_of_week: u8,
        hour_of_day: u8,
    ) -> usize {
        for ride in rides {
            self.observations.push(WaitObservation {
                park_id,
                ride_id: ride.id,
                ride_name: ride.name.clone(),
                land: Some(ride.land.clone()),
                wait_minutes: ride.wait_time,
                is_open: ride.is_open,
                day_of_week,
                hour_of_day,
            });
        }
        debug!(park_id, samples = rides.len(), "recorded wait times");
        rides.len()
    }

    pub fn push(&mut self, observation: WaitObservation) {
        self.observations.push(observation);
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Open, positive-wait samples matching the filters.
    fn samples(
        &self,
        park_id: ParkId,
        day_of_week: Option<u8>,
        hour_of_day: Option<u8>,
    ) -> impl Iterator<Item = (&WaitObservation, u32)> {
        self.observations
            .iter()
            .filter(move |obs| {
                obs.park_id == park_id
                    && obs.is_open
                    && day_of_week.is_none_or(|day| obs.day_of_week == day)
                    && hour_of_day.is_none_or(|hour| obs.hour_of_day == hour)
            })
            .filter_map(|obs| match obs.wait_minutes {
                Some(wait) if wait > 0 => Some((obs, wait)),
                _ => None,
            })
    }
}

#[derive(Debug, Clone, Copy)]
struct Accumulator {
    sum: u64,
    min: u32,
    max: u32,
    count: usize,
}

impl Accumulator {
    fn start(wait: u32) -> Self {
        Self {
            sum: u64::from(wait),
            min: wait,
            max: wait,
            count: 1,
        }
    }

    fn add(&mut self, wait: u32) {
        self.sum += u64::from(wait);
        self.min = self.min.min(wait);
        self.max = self.max.max(wait);
        self.count += 1;
    }

    fn stat(&self) -> HistoricalStat {
        HistoricalStat {
            average: round1(self.sum as f64 / self.count as f64),
            min: self.min,
            max: self.max,
            sample_count: self.count,
        }
    }
}

impl WaitHistoryProvider for WaitHistory {
    fn ride_averages(
        &self,
        park_id: ParkId,
        day_of_week: Option<u8>,
        hour_of_day: Option<u8>,
    ) -> HashMap<String, HistoricalStat> {
        let mut by_ride: HashMap<String, Accumulator> = HashMap::new();
        for (obs, wait) in self.samples(park_id, day_of_week, hour_of_day) {
            by_ride
                .entry(obs.ride_name.clone())
                .and_modify(|acc| acc.add(wait))
                .or_insert_with(|| Accumulator::start(wait));
        }
        by_ride
            .into_iter()
            .map(|(name, acc)| (name, acc.stat()))
            .collect()
    }

    fn historical_average(
        &self,
        park_id: ParkId,
        name: &str,
        day_of_week: Option<u8>,
        hour_of_day: Option<u8>,
    ) -> Option<HistoricalStat> {
        let needle = name.to_lowercase();
        let mut acc: Option<Accumulator> = None;
        for (obs, wait) in self.samples(park_id, day_of_week, hour_of_day) {
            if !obs.ride_name.to_lowercase().contains(&needle) {
                continue;
            }
            match acc {
                Some(ref mut current) => current.add(wait),
                None => acc = Some(Accumulator::start(wait)),
            }
        }
        acc.map(|acc| acc.stat())
    }
}

/// Compare a live wait to its historical average.
///
/// Thresholds are inclusive toward the lower bucket: exactly -10% is
/// `Lower`, exactly +10% is `Typical`.
pub fn compare_to_average(current_wait: u32, average: f64) -> Comparison {
    if average == 0.0 {
        return Comparison {
            difference: f64::from(current_wait),
            percent_diff: None,
            status: WaitLevel::NoBaseline,
        };
    }

    let difference = f64::from(current_wait) - average;
    let percent_diff = round1(difference / average * 100.0);

    let status = if percent_diff <= -20.0 {
        WaitLevel::MuchLower
    } else if percent_diff <= -10.0 {
        WaitLevel::Lower
    } else if percent_diff <= 10.0 {
        WaitLevel::Typical
    } else if percent_diff <= 20.0 {
        WaitLevel::Higher
    } else {
        WaitLevel::MuchHigher
    };

    Comparison {
        difference: round1(difference),
        percent_diff: Some(percent_diff),
        status,
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
