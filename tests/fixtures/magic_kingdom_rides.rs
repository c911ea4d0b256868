//! Real Magic Kingdom rides for realistic test fixtures.
//!
//! Names and lands match the Queue-Times feed for park id 6; the waits
//! are typical mid-morning postings, not live data.

use touring_planner::ride::Ride;

/// Queue-Times park id for Magic Kingdom.
pub const MAGIC_KINGDOM: u32 = 6;

/// An open ride with a posted wait.
pub fn open_ride(id: u32, name: &str, land: &str, wait: u32) -> Ride {
    Ride {
        id,
        name: name.to_string(),
        land: land.to_string(),
        is_open: true,
        wait_time: Some(wait),
        last_updated: None,
    }
}

/// A closed ride with no wait signal.
pub fn closed_ride(id: u32, name: &str, land: &str) -> Ride {
    Ride {
        id,
        name: name.to_string(),
        land: land.to_string(),
        is_open: false,
        wait_time: None,
        last_updated: None,
    }
}

/// A typical mid-morning Magic Kingdom snapshot: eleven open rides
/// across five lands plus one closed attraction on Main Street.
pub fn typical_morning() -> Vec<Ride> {
    vec![
        open_ride(1, "Space Mountain", "Tomorrowland", 45),
        open_ride(2, "Buzz Lightyear's Space Ranger Spin", "Tomorrowland", 25),
        open_ride(3, "Tomorrowland Speedway", "Tomorrowland", 20),
        open_ride(4, "Seven Dwarfs Mine Train", "Fantasyland", 70),
        open_ride(5, "Peter Pan's Flight", "Fantasyland", 50),
        open_ride(6, "\"it's a small world\"", "Fantasyland", 15),
        open_ride(7, "Haunted Mansion", "Liberty Square", 35),
        open_ride(8, "Big Thunder Mountain Railroad", "Frontierland", 40),
        open_ride(9, "Tiana's Bayou Adventure", "Frontierland", 55),
        open_ride(10, "Jungle Cruise", "Adventureland", 60),
        open_ride(11, "Pirates of the Caribbean", "Adventureland", 30),
        closed_ride(12, "Walt Disney World Railroad", "Main Street, U.S.A."),
    ]
}
