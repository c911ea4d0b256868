//! Park registry for Disney and Universal Florida.
//!
//! IDs correspond to the Queue-Times.com API.

use serde::Serialize;

use crate::traits::ParkId;

/// A supported theme park.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Park {
    pub slug: &'static str,
    pub id: ParkId,
    pub name: &'static str,
    pub resort: &'static str,
    pub timezone: &'static str,
}

impl Park {
    const fn new(
        slug: &'static str,
        id: ParkId,
        name: &'static str,
        resort: &'static str,
        timezone: &'static str,
    ) -> Self {
        Self {
            slug,
            id,
            name,
            resort,
            timezone,
        }
    }
}

/// All supported parks.
pub const PARKS: &[Park] = &[
    // Walt Disney World
    Park::new("magic-kingdom", 6, "Magic Kingdom", "Walt Disney World", "America/New_York"),
    Park::new("epcot", 5, "EPCOT", "Walt Disney World", "America/New_York"),
    Park::new(
        "hollywood-studios",
        7,
        "Hollywood Studios",
        "Walt Disney World",
        "America/New_York",
    ),
    Park::new(
        "animal-kingdom",
        8,
        "Animal Kingdom",
        "Walt Disney World",
        "America/New_York",
    ),
    // Universal Orlando
    Park::new(
        "universal-studios",
        64,
        "Universal Studios Florida",
        "Universal Orlando",
        "America/New_York",
    ),
    Park::new(
        "islands-of-adventure",
        65,
        "Islands of Adventure",
        "Universal Orlando",
        "America/New_York",
    ),
];

/// Look up a park by its slug, e.g. `"magic-kingdom"`. Case-insensitive.
pub fn by_slug(slug: &str) -> Option<&'static Park> {
    PARKS.iter().find(|park| park.slug.eq_ignore_ascii_case(slug))
}

/// Look up a park by its Queue-Times ID.
pub fn by_id(id: ParkId) -> Option<&'static Park> {
    PARKS.iter().find(|park| park.id == id)
}
