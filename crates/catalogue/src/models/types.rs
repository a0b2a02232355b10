//! Core data types and enums for catalogue data.

use geo::Point;

use crate::identifiers::*;

// ============================================================================
// Enums
// ============================================================================

/// How a route is traversed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RouteKind {
    /// Traversed once along the listed stops (a circular line)
    RoundTrip,
    /// Traversed forward, then backward over the same stops (a line with a terminus)
    OutAndBack,
}

impl RouteKind {
    pub fn from_round_trip(round_trip: bool) -> Self {
        if round_trip {
            Self::RoundTrip
        } else {
            Self::OutAndBack
        }
    }

    pub fn is_round_trip(self) -> bool {
        matches!(self, Self::RoundTrip)
    }

    /// Number of stops visited over a full traversal of `listed` stops.
    ///
    /// The turnaround stop of an out-and-back route is counted once.
    pub fn traversed_stop_count(self, listed: usize) -> usize {
        match self {
            Self::RoundTrip => listed,
            Self::OutAndBack => (listed * 2).saturating_sub(1),
        }
    }
}

// ============================================================================
// Data Structures
// ============================================================================

/// Geographic position in degrees
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// As a `geo` point (x = longitude, y = latitude)
    pub fn to_point(self) -> Point {
        Point::new(self.lng, self.lat)
    }
}

impl From<Coordinates> for Point {
    fn from(c: Coordinates) -> Self {
        c.to_point()
    }
}

/// A named stop. Immutable once added.
#[derive(Clone, Debug, PartialEq)]
pub struct Stop {
    pub name: StopName,
    pub coordinates: Coordinates,
}

/// Real and great-circle length of a full route traversal, in meters
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct RouteDistances {
    pub real: f64,
    pub ideal: f64,
}

impl RouteDistances {
    /// Real distance over ideal distance.
    ///
    /// NaN or infinite when every consecutive pair of stops coincides, which
    /// cannot happen with distinct geographic positions.
    pub fn curvature(&self) -> f64 {
        self.real / self.ideal
    }
}

/// A named route over stops of the same catalogue.
///
/// `distances` is computed once when the bus is added and never revisited.
#[derive(Clone, Debug, PartialEq)]
pub struct Bus {
    pub name: BusName,
    pub stops: Vec<StopId>,
    pub kind: RouteKind,
    pub distances: RouteDistances,
}

impl Bus {
    pub fn is_round_trip(&self) -> bool {
        self.kind.is_round_trip()
    }

    /// Distinct stops in the listed sequence, regardless of route kind
    pub fn unique_stop_count(&self) -> usize {
        let mut seen: Vec<StopId> = self.stops.clone();
        seen.sort_unstable();
        seen.dedup();
        seen.len()
    }

    pub fn statistics(&self) -> BusStatistics {
        BusStatistics {
            stop_count: self.kind.traversed_stop_count(self.stops.len()),
            unique_stop_count: self.unique_stop_count(),
            real_distance: self.distances.real,
            curvature: self.distances.curvature(),
            round_trip: self.is_round_trip(),
        }
    }
}

/// Aggregate answer to a bus query
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BusStatistics {
    pub stop_count: usize,
    pub unique_stop_count: usize,
    pub real_distance: f64,
    pub curvature: f64,
    pub round_trip: bool,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CatalogueError {
    #[error("Unknown stop: {0}")]
    UnknownStop(StopName),

    #[error("Duplicate stop: {0}")]
    DuplicateStop(StopName),

    #[error("Duplicate bus: {0}")]
    DuplicateBus(BusName),

    #[error("Bus {0} has no stops")]
    EmptyRoute(BusName),
}

pub type Result<T> = std::result::Result<T, CatalogueError>;
