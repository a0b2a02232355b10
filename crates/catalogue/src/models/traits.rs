//! Read contract of the catalogue.
//!
//! Collaborators (response formatting, map rendering, persistence) consume
//! the catalogue through this trait only, so they work the same against a
//! catalogue under construction and a frozen one.

use std::collections::{BTreeMap, BTreeSet};

use crate::identifiers::*;
use crate::models::types::*;

pub trait CatalogueReader: Send + Sync {
    // ---- Stops ----
    fn has_stop(&self, name: &str) -> bool;
    fn stop(&self, name: &str) -> Option<&Stop>;
    fn stop_count(&self) -> usize;
    fn all_stop_names(&self) -> BTreeSet<StopName>;

    /// Coordinates of a known stop.
    ///
    /// Unknown names are a caller error; check with [`Self::has_stop`] first.
    fn stop_coordinates(&self, name: &str) -> Result<Coordinates>;

    /// Coordinates of every stop served by at least one bus, in stop insertion order
    fn all_referenced_stop_coordinates(&self) -> Vec<Coordinates>;

    /// `None` for an unknown stop, an empty set for a stop no bus serves
    fn buses_through_stop(&self, name: &str) -> Option<&BTreeSet<BusName>>;

    // ---- Buses ----
    fn bus(&self, name: &str) -> Option<&Bus>;
    fn all_buses(&self) -> Vec<&Bus>;
    fn all_route_names(&self) -> BTreeSet<BusName>;
    fn is_round_trip(&self, bus: &str) -> Option<bool>;

    /// Stop names of a route in listed order; empty for an unknown bus
    fn route_stop_names(&self, bus: &str) -> Vec<StopName>;

    fn bus_statistics(&self, name: &str) -> Option<BusStatistics>;

    // ---- Distances ----

    /// Directed distance in meters with reverse and great-circle fallback
    fn stop_to_stop_distance(&self, from: &str, to: &str) -> Result<u32>;

    /// Explicitly recorded directed distances only
    fn all_stop_distances(&self) -> BTreeMap<(StopName, StopName), u32>;
}
