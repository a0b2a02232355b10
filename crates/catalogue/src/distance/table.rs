//! Directed table of recorded stop-to-stop distances.
//!
//! ## Resolution order
//!
//! A distance from `A` to `B` resolves to:
//! 1. the recorded `A -> B` entry, else
//! 2. the recorded `B -> A` entry, else
//! 3. the great-circle distance between the two stops.
//!
//! Resolution is therefore total. It cannot tell a caller whether anything
//! was recorded; use [`DistanceTable::get`] for that.

use std::collections::HashMap;

use tracing::trace;

use crate::identifiers::StopId;
use crate::spatial::great_circle_distance;
use crate::store::EntityStore;

/// Where a resolved distance came from
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DistanceSource {
    Recorded(u32),
    Reverse(u32),
    GreatCircle(f64),
}

impl DistanceSource {
    pub fn meters(self) -> f64 {
        match self {
            Self::Recorded(m) | Self::Reverse(m) => f64::from(m),
            Self::GreatCircle(m) => m,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct DistanceTable {
    entries: HashMap<(StopId, StopId), u32>,
}

impl DistanceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a directed distance, replacing any earlier value for the same pair.
    ///
    /// Returns the replaced value.
    pub fn set(&mut self, from: StopId, to: StopId, meters: u32) -> Option<u32> {
        self.entries.insert((from, to), meters)
    }

    /// The recorded `from -> to` entry, without any fallback
    pub fn get(&self, from: StopId, to: StopId) -> Option<u32> {
        self.entries.get(&(from, to)).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ((StopId, StopId), u32)> + '_ {
        self.entries.iter().map(|(&pair, &meters)| (pair, meters))
    }

    pub fn resolve_source(&self, store: &EntityStore, from: StopId, to: StopId) -> DistanceSource {
        if let Some(meters) = self.get(from, to) {
            return DistanceSource::Recorded(meters);
        }

        if let Some(meters) = self.get(to, from) {
            trace!(?from, ?to, meters, "using reverse distance");
            return DistanceSource::Reverse(meters);
        }

        let meters = great_circle_distance(store.stop(from).coordinates, store.stop(to).coordinates);
        trace!(?from, ?to, meters, "no recorded distance, using great circle");
        DistanceSource::GreatCircle(meters)
    }

    /// Directed distance in meters with reverse and great-circle fallback
    pub fn resolve(&self, store: &EntityStore, from: StopId, to: StopId) -> f64 {
        self.resolve_source(store, from, to).meters()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifiers::StopName;
    use crate::models::types::{Coordinates, Stop};

    fn store() -> (EntityStore, StopId, StopId, StopId) {
        let mut store = EntityStore::new();
        let mut add = |name: &str, lat: f64, lng: f64| {
            store.push_stop(Stop {
                name: StopName::new(name),
                coordinates: Coordinates::new(lat, lng),
            })
        };
        let a = add("Tolstopaltsevo", 55.611087, 37.20829);
        let b = add("Marushkino", 55.595884, 37.209755);
        let c = add("Rasskazovka", 55.632761, 37.333324);
        (store, a, b, c)
    }

    #[test]
    fn test_resolve_recorded() {
        let (store, a, b, _) = store();
        let mut table = DistanceTable::new();
        table.set(a, b, 3900);
        table.set(b, a, 4100);

        assert_eq!(table.resolve_source(&store, a, b), DistanceSource::Recorded(3900));
        assert_eq!(table.resolve_source(&store, b, a), DistanceSource::Recorded(4100));
    }

    #[test]
    fn test_resolve_falls_back_to_reverse() {
        let (store, a, b, _) = store();
        let mut table = DistanceTable::new();
        table.set(a, b, 3900);

        assert_eq!(table.resolve_source(&store, b, a), DistanceSource::Reverse(3900));
        assert_eq!(table.resolve(&store, b, a), table.resolve(&store, a, b));
        assert_eq!(table.get(b, a), None);
    }

    #[test]
    fn test_resolve_falls_back_to_great_circle() {
        let (store, a, _, c) = store();
        let table = DistanceTable::new();

        let expected = great_circle_distance(store.stop(a).coordinates, store.stop(c).coordinates);
        assert_eq!(table.resolve_source(&store, a, c), DistanceSource::GreatCircle(expected));
    }

    #[test]
    fn test_last_write_wins() {
        let (store, a, b, _) = store();
        let mut table = DistanceTable::new();

        assert_eq!(table.set(a, b, 3900), None);
        assert_eq!(table.set(a, b, 4000), Some(3900));
        assert_eq!(table.resolve(&store, a, b), 4000.0);
        assert_eq!(table.len(), 1);
    }
}
