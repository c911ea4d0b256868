//! Queue-Times.com HTTP adapter for live wait times.
//!
//! Free API; attribution required: "Powered by Queue-Times.com".
//! The planner never calls this directly - it receives the parsed
//! snapshot and treats fetch failures as the caller's problem.

use serde::Deserialize;
use tracing::debug;

use crate::ride::Ride;
use crate::traits::ParkId;

/// Land bucket for rides the feed reports outside any land.
const LOOSE_RIDE_LAND: &str = "General";

#[derive(Debug, Clone)]
pub struct QueueTimesConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for QueueTimesConfig {
    fn default() -> Self {
        Self {
            base_url: "https://queue-times.com".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug)]
pub enum QueueTimesError {
    Http(reqwest::Error),
}

impl From<reqwest::Error> for QueueTimesError {
    fn from(err: reqwest::Error) -> Self {
        QueueTimesError::Http(err)
    }
}

#[derive(Debug, Clone)]
pub struct QueueTimesClient {
    config: QueueTimesConfig,
    client: reqwest::blocking::Client,
}

impl QueueTimesClient {
    pub fn new(config: QueueTimesConfig) -> Result<Self, QueueTimesError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    /// Fetch current wait times for a park as a flat ride list.
    pub fn park_wait_times(&self, park_id: ParkId) -> Result<Vec<Ride>, QueueTimesError> {
        let url = format!(
            "{}/parks/{}/queue_times.json",
            self.config.base_url, park_id
        );
        debug!(%url, "fetching live wait times");

        let body = self
            .client
            .get(url)
            .send()?
            .error_for_status()?
            .json::<WaitTimesResponse>()?;

        Ok(flatten(body))
    }
}

#[derive(Debug, Deserialize)]
struct WaitTimesResponse {
    #[serde(default)]
    lands: Vec<LandGroup>,
    #[serde(default)]
    rides: Vec<RideRecord>,
}

#[derive(Debug, Deserialize)]
struct LandGroup {
    name: String,
    #[serde(default)]
    rides: Vec<RideRecord>,
}

#[derive(Debug, Deserialize)]
struct RideRecord {
    id: u32,
    name: String,
    is_open: bool,
    wait_time: Option<u32>,
    #[serde(default)]
    last_updated: Option<String>,
}

fn flatten(body: WaitTimesResponse) -> Vec<Ride> {
    let mut rides = Vec::new();
    for land in body.lands {
        for ride in land.rides {
            rides.push(into_ride(ride, &land.name));
        }
    }
    // Some parks report rides outside any land
    for ride in body.rides {
        rides.push(into_ride(ride, LOOSE_RIDE_LAND));
    }
    rides
}

fn into_ride(record: RideRecord, land: &str) -> Ride {
    Ride {
        id: record.id,
        name: record.name,
        land: land.to_string(),
        is_open: record.is_open,
        wait_time: record.wait_time,
        last_updated: record.last_updated,
    }
}
