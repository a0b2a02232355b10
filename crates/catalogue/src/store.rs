//! Arena owning every stop and bus of a catalogue.
//!
//! Other structures refer to entities by [`StopId`]/[`BusId`] only. Entities
//! are append-only, so an id stays valid for the lifetime of the store.

use crate::identifiers::{BusId, StopId};
use crate::models::types::{Bus, Stop};

#[derive(Clone, Debug, Default)]
pub struct EntityStore {
    stops: Vec<Stop>,
    buses: Vec<Bus>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_stop(&mut self, stop: Stop) -> StopId {
        self.stops.push(stop);
        StopId(self.stops.len() - 1)
    }

    pub fn push_bus(&mut self, bus: Bus) -> BusId {
        self.buses.push(bus);
        BusId(self.buses.len() - 1)
    }

    // Ids are only minted by this store, so indexing cannot go out of bounds.
    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id.0]
    }

    pub fn bus(&self, id: BusId) -> &Bus {
        &self.buses[id.0]
    }

    pub fn stops(&self) -> impl Iterator<Item = (StopId, &Stop)> {
        self.stops.iter().enumerate().map(|(i, s)| (StopId(i), s))
    }

    pub fn buses(&self) -> impl Iterator<Item = (BusId, &Bus)> {
        self.buses.iter().enumerate().map(|(i, b)| (BusId(i), b))
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifiers::{BusName, StopName};
    use crate::models::types::{Coordinates, RouteDistances, RouteKind};

    #[test]
    fn test_ids_are_stable() {
        let mut store = EntityStore::new();
        let a = store.push_stop(Stop {
            name: StopName::new("A"),
            coordinates: Coordinates::new(55.0, 37.0),
        });
        let b = store.push_stop(Stop {
            name: StopName::new("B"),
            coordinates: Coordinates::new(55.1, 37.1),
        });
        let bus = store.push_bus(Bus {
            name: BusName::new("1"),
            stops: vec![a, b, a],
            kind: RouteKind::RoundTrip,
            distances: RouteDistances::default(),
        });

        assert_eq!(store.stop(a).name.as_str(), "A");
        assert_eq!(store.stop(b).name.as_str(), "B");
        assert_eq!(store.bus(bus).stops, vec![a, b, a]);
        assert_eq!(store.stop_count(), 2);
        assert_eq!(store.bus_count(), 1);
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let mut store = EntityStore::new();
        for name in ["Z", "A", "M"] {
            store.push_stop(Stop {
                name: StopName::new(name),
                coordinates: Coordinates::default(),
            });
        }

        let names: Vec<&str> = store.stops().map(|(_, s)| s.name.as_str()).collect();
        assert_eq!(names, vec!["Z", "A", "M"]);
    }
}
