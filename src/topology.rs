//! Static park topologies: lands, adjacency, and walk-time estimates.
//!
//! Visiting nearby lands consecutively is what keeps walking down, so each
//! known park carries an unordered-pair walk table. The table is an
//! injected configuration object, not a module global, so tests can plug
//! synthetic layouts.

use std::collections::HashMap;

use crate::traits::{ParkId, WalkTimeProvider};

/// Flat estimate when the park itself has no topology entry.
const UNKNOWN_PARK_WALK_MIN: u32 = 5;

/// Flat estimate for a land pair missing from a known park's table.
const UNKNOWN_ROUTE_WALK_MIN: u32 = 7;

/// A themed area within a park.
///
/// Adjacency is documentary; routing uses the walk table directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandInfo {
    pub position: u32,
    pub adjacent: Vec<String>,
}

/// One park's layout: lands plus pairwise walk-time estimates in minutes.
#[derive(Debug, Clone)]
pub struct ParkTopology {
    pub name: String,
    lands: HashMap<String, LandInfo>,
    // Each edge is stored once; lookups try both orientations.
    walk_times: HashMap<(String, String), u32>,
    pub entry_land: String,
}

impl ParkTopology {
    pub fn new(name: &str, entry_land: &str) -> Self {
        Self {
            name: name.to_string(),
            lands: HashMap::new(),
            walk_times: HashMap::new(),
            entry_land: entry_land.to_string(),
        }
    }

    pub fn land(mut self, name: &str, position: u32, adjacent: &[&str]) -> Self {
        self.lands.insert(
            name.to_string(),
            LandInfo {
                position,
                adjacent: adjacent.iter().map(|a| (*a).to_string()).collect(),
            },
        );
        self
    }

    pub fn walk(mut self, from: &str, to: &str, minutes: u32) -> Self {
        self.walk_times
            .insert((from.to_string(), to.to_string()), minutes);
        self
    }

    /// Walk-time table entry for a land pair, tried in both orientations.
    pub fn walk_between(&self, from: &str, to: &str) -> Option<u32> {
        self.walk_times
            .get(&(from.to_string(), to.to_string()))
            .or_else(|| self.walk_times.get(&(to.to_string(), from.to_string())))
            .copied()
    }

    pub fn land_names(&self) -> impl Iterator<Item = &str> {
        self.lands.keys().map(String::as_str)
    }

    pub fn land_info(&self, name: &str) -> Option<&LandInfo> {
        self.lands.get(name)
    }
}

/// Immutable lookup table of park topologies.
#[derive(Debug, Clone, Default)]
pub struct ParkTopologyTable {
    parks: HashMap<ParkId, ParkTopology>,
}

impl ParkTopologyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_park(mut self, park_id: ParkId, topology: ParkTopology) -> Self {
        self.parks.insert(park_id, topology);
        self
    }

    pub fn get(&self, park_id: ParkId) -> Option<&ParkTopology> {
        self.parks.get(&park_id)
    }

    pub fn park_ids(&self) -> impl Iterator<Item = ParkId> + '_ {
        self.parks.keys().copied()
    }

    /// Layouts for the Disney World and Universal Orlando parks.
    ///
    /// Walk times are rough on-the-ground estimates between land hubs.
    pub fn disney_universal() -> Self {
        Self::new()
            .with_park(6, magic_kingdom())
            .with_park(5, epcot())
            .with_park(7, hollywood_studios())
            .with_park(8, animal_kingdom())
            .with_park(64, universal_studios())
            .with_park(65, islands_of_adventure())
    }
}

impl WalkTimeProvider for ParkTopologyTable {
    fn walk_time(&self, park_id: ParkId, from: &str, to: &str) -> u32 {
        if from == to {
            return 0;
        }
        let Some(park) = self.parks.get(&park_id) else {
            return UNKNOWN_PARK_WALK_MIN;
        };
        park.walk_between(from, to).unwrap_or(UNKNOWN_ROUTE_WALK_MIN)
    }

    fn entry_land(&self, park_id: ParkId) -> Option<&str> {
        self.parks.get(&park_id).map(|park| park.entry_land.as_str())
    }
}

fn magic_kingdom() -> ParkTopology {
    ParkTopology::new("Magic Kingdom", "Main Street, U.S.A.")
        .land("Main Street, U.S.A.", 0, &["Adventureland", "Tomorrowland"])
        .land("Adventureland", 1, &["Main Street, U.S.A.", "Frontierland"])
        .land("Frontierland", 2, &["Adventureland", "Liberty Square"])
        .land("Liberty Square", 3, &["Frontierland", "Fantasyland"])
        .land("Fantasyland", 4, &["Liberty Square", "Tomorrowland"])
        .land("Tomorrowland", 5, &["Fantasyland", "Main Street, U.S.A."])
        .walk("Main Street, U.S.A.", "Adventureland", 3)
        .walk("Main Street, U.S.A.", "Tomorrowland", 3)
        .walk("Adventureland", "Frontierland", 3)
        .walk("Frontierland", "Liberty Square", 2)
        .walk("Liberty Square", "Fantasyland", 3)
        .walk("Fantasyland", "Tomorrowland", 4)
        // Longer walks (non-adjacent)
        .walk("Main Street, U.S.A.", "Frontierland", 6)
        .walk("Main Street, U.S.A.", "Liberty Square", 7)
        .walk("Main Street, U.S.A.", "Fantasyland", 8)
        .walk("Adventureland", "Liberty Square", 5)
        .walk("Adventureland", "Fantasyland", 8)
        .walk("Adventureland", "Tomorrowland", 10)
        .walk("Frontierland", "Fantasyland", 5)
        .walk("Frontierland", "Tomorrowland", 9)
        .walk("Liberty Square", "Tomorrowland", 7)
}

fn epcot() -> ParkTopology {
    ParkTopology::new("EPCOT", "World Celebration")
        .land("World Celebration", 0, &["World Discovery", "World Nature"])
        .land("World Discovery", 1, &["World Celebration", "World Showcase"])
        .land("World Nature", 2, &["World Celebration", "World Showcase"])
        .land("World Showcase", 3, &["World Discovery", "World Nature"])
        .walk("World Celebration", "World Discovery", 5)
        .walk("World Celebration", "World Nature", 5)
        .walk("World Discovery", "World Showcase", 8)
        .walk("World Nature", "World Showcase", 8)
        .walk("World Celebration", "World Showcase", 12)
        .walk("World Discovery", "World Nature", 10)
}

fn hollywood_studios() -> ParkTopology {
    ParkTopology::new("Hollywood Studios", "Hollywood Boulevard")
        .land("Hollywood Boulevard", 0, &["Echo Lake", "Sunset Boulevard"])
        .land("Echo Lake", 1, &["Hollywood Boulevard", "Star Wars: Galaxy's Edge"])
        .land("Sunset Boulevard", 2, &["Hollywood Boulevard", "Toy Story Land"])
        .land(
            "Star Wars: Galaxy's Edge",
            3,
            &["Echo Lake", "Toy Story Land", "Grand Avenue"],
        )
        .land("Toy Story Land", 4, &["Sunset Boulevard", "Star Wars: Galaxy's Edge"])
        .land("Grand Avenue", 5, &["Star Wars: Galaxy's Edge", "Hollywood Boulevard"])
        .walk("Hollywood Boulevard", "Echo Lake", 3)
        .walk("Hollywood Boulevard", "Sunset Boulevard", 3)
        .walk("Echo Lake", "Star Wars: Galaxy's Edge", 5)
        .walk("Sunset Boulevard", "Toy Story Land", 6)
        .walk("Star Wars: Galaxy's Edge", "Toy Story Land", 5)
        .walk("Star Wars: Galaxy's Edge", "Grand Avenue", 3)
        .walk("Grand Avenue", "Hollywood Boulevard", 4)
        // Longer walks
        .walk("Hollywood Boulevard", "Star Wars: Galaxy's Edge", 8)
        .walk("Hollywood Boulevard", "Toy Story Land", 9)
        .walk("Echo Lake", "Toy Story Land", 10)
        .walk("Echo Lake", "Sunset Boulevard", 6)
        .walk("Sunset Boulevard", "Star Wars: Galaxy's Edge", 10)
        .walk("Sunset Boulevard", "Grand Avenue", 7)
        .walk("Echo Lake", "Grand Avenue", 6)
}

fn animal_kingdom() -> ParkTopology {
    ParkTopology::new("Animal Kingdom", "Oasis")
        .land("Oasis", 0, &["Discovery Island"])
        .land(
            "Discovery Island",
            1,
            &["Oasis", "Africa", "Asia", "Pandora", "DinoLand U.S.A."],
        )
        .land("Africa", 2, &["Discovery Island", "Asia"])
        .land("Asia", 3, &["Discovery Island", "Africa", "DinoLand U.S.A."])
        .land("Pandora - The World of Avatar", 4, &["Discovery Island"])
        .land("DinoLand U.S.A.", 5, &["Discovery Island", "Asia"])
        .walk("Oasis", "Discovery Island", 3)
        .walk("Discovery Island", "Africa", 4)
        .walk("Discovery Island", "Asia", 5)
        .walk("Discovery Island", "Pandora - The World of Avatar", 4)
        .walk("Discovery Island", "DinoLand U.S.A.", 5)
        .walk("Africa", "Asia", 6)
        .walk("Asia", "DinoLand U.S.A.", 4)
        // Longer walks
        .walk("Oasis", "Africa", 7)
        .walk("Oasis", "Asia", 8)
        .walk("Oasis", "Pandora - The World of Avatar", 7)
        .walk("Oasis", "DinoLand U.S.A.", 8)
        .walk("Africa", "Pandora - The World of Avatar", 8)
        .walk("Africa", "DinoLand U.S.A.", 9)
        .walk("Asia", "Pandora - The World of Avatar", 9)
        .walk("Pandora - The World of Avatar", "DinoLand U.S.A.", 9)
}

fn universal_studios() -> ParkTopology {
    ParkTopology::new("Universal Studios Florida", "Production Central")
        .land("Production Central", 0, &["New York", "Hollywood"])
        .land("New York", 1, &["Production Central", "San Francisco"])
        .land(
            "San Francisco",
            2,
            &["New York", "The Wizarding World of Harry Potter - Diagon Alley"],
        )
        .land(
            "The Wizarding World of Harry Potter - Diagon Alley",
            3,
            &["San Francisco", "World Expo"],
        )
        .land(
            "World Expo",
            4,
            &["The Wizarding World of Harry Potter - Diagon Alley", "Springfield"],
        )
        .land("Springfield", 5, &["World Expo", "Woody Woodpecker's KidZone"])
        .land("Woody Woodpecker's KidZone", 6, &["Springfield", "Hollywood"])
        .land("Hollywood", 7, &["Woody Woodpecker's KidZone", "Production Central"])
        .walk("Production Central", "New York", 3)
        .walk("Production Central", "Hollywood", 3)
        .walk("New York", "San Francisco", 4)
        .walk("San Francisco", "The Wizarding World of Harry Potter - Diagon Alley", 3)
        .walk("The Wizarding World of Harry Potter - Diagon Alley", "World Expo", 4)
        .walk("World Expo", "Springfield", 3)
        .walk("Springfield", "Woody Woodpecker's KidZone", 3)
        .walk("Woody Woodpecker's KidZone", "Hollywood", 4)
}

fn islands_of_adventure() -> ParkTopology {
    ParkTopology::new("Islands of Adventure", "Port of Entry")
        .land("Port of Entry", 0, &["Marvel Super Hero Island", "Seuss Landing"])
        .land("Marvel Super Hero Island", 1, &["Port of Entry", "Toon Lagoon"])
        .land("Toon Lagoon", 2, &["Marvel Super Hero Island", "Skull Island"])
        .land("Skull Island", 3, &["Toon Lagoon", "Jurassic Park"])
        .land(
            "Jurassic Park",
            4,
            &["Skull Island", "The Wizarding World of Harry Potter - Hogsmeade"],
        )
        .land(
            "The Wizarding World of Harry Potter - Hogsmeade",
            5,
            &["Jurassic Park", "The Lost Continent"],
        )
        .land(
            "The Lost Continent",
            6,
            &["The Wizarding World of Harry Potter - Hogsmeade", "Seuss Landing"],
        )
        .land("Seuss Landing", 7, &["The Lost Continent", "Port of Entry"])
        .walk("Port of Entry", "Marvel Super Hero Island", 3)
        .walk("Port of Entry", "Seuss Landing", 3)
        .walk("Marvel Super Hero Island", "Toon Lagoon", 4)
        .walk("Toon Lagoon", "Skull Island", 3)
        .walk("Skull Island", "Jurassic Park", 4)
        .walk("Jurassic Park", "The Wizarding World of Harry Potter - Hogsmeade", 4)
        .walk("The Wizarding World of Harry Potter - Hogsmeade", "The Lost Continent", 3)
        .walk("The Lost Continent", "Seuss Landing", 4)
}
