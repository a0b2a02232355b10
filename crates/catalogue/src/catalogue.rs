//! In-memory transport catalogue.
//!
//! Ties the entity store, the name index and the distance table together
//! behind the write operations and the [`CatalogueReader`] contract.
//!
//! ## Construction order
//!
//! Callers add every stop, then every recorded distance, then every bus. This
//! order is not enforced: a bus measures its length against the distances
//! recorded at the moment it is added, and keeps that measurement for good.
//! Distances recorded later only affect buses added later.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::distance::{measure_route, DistanceTable};
use crate::identifiers::*;
use crate::index::NameIndex;
use crate::models::{traits::*, types::*};
use crate::store::EntityStore;

// ============================================================================
// Catalogue
// ============================================================================

/// Catalogue of stops, buses and recorded distances
#[derive(Clone, Debug, Default)]
pub struct TransportCatalogue {
    store: EntityStore,
    index: NameIndex,
    distances: DistanceTable,
}

impl TransportCatalogue {
    /// Create a new empty catalogue
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stop. A name can only be added once.
    pub fn add_stop(&mut self, name: impl Into<StopName>, lat: f64, lng: f64) -> Result<StopId> {
        let name = name.into();
        if self.index.contains_stop(name.as_str()) {
            warn!(stop = %name, "rejecting duplicate stop");
            return Err(CatalogueError::DuplicateStop(name));
        }

        let coordinates = Coordinates::new(lat, lng);
        let id = self.store.push_stop(Stop {
            name: name.clone(),
            coordinates,
        });
        debug!(stop = %name, lat, lng, "added stop");
        self.index.insert_stop(name, id);
        Ok(id)
    }

    /// Record the distance from one known stop to another.
    ///
    /// Recording the same ordered pair again replaces the earlier value.
    pub fn add_stop_distance(&mut self, from: &str, to: &str, meters: u32) -> Result<()> {
        let from_id = self.index.require_stop(from)?;
        let to_id = self.index.require_stop(to)?;

        if let Some(previous) = self.distances.set(from_id, to_id, meters) {
            debug!(from, to, previous, meters, "replaced stop distance");
        } else {
            debug!(from, to, meters, "added stop distance");
        }
        Ok(())
    }

    /// Record several distances from the same stop.
    ///
    /// Nothing is recorded unless every stop is known.
    pub fn add_stop_distances<S: AsRef<str>>(
        &mut self,
        from: &str,
        distances: impl IntoIterator<Item = (S, u32)>,
    ) -> Result<()> {
        let from_id = self.index.require_stop(from)?;
        let resolved = distances
            .into_iter()
            .map(|(to, meters)| -> Result<(StopId, u32)> {
                Ok((self.index.require_stop(to.as_ref())?, meters))
            })
            .collect::<Result<Vec<_>>>()
            .inspect_err(|err| warn!(from, %err, "rejecting stop distances"))?;

        for (to_id, meters) in resolved {
            self.distances.set(from_id, to_id, meters);
        }
        debug!(from, "added stop distances");
        Ok(())
    }

    /// Add a bus over already added stops.
    ///
    /// The route is measured immediately and its statistics never change
    /// afterwards.
    pub fn add_bus<S: AsRef<str>>(
        &mut self,
        name: impl Into<BusName>,
        stops: &[S],
        round_trip: bool,
    ) -> Result<BusId> {
        let name = name.into();
        if self.index.contains_bus(name.as_str()) {
            warn!(bus = %name, "rejecting duplicate bus");
            return Err(CatalogueError::DuplicateBus(name));
        }
        if stops.is_empty() {
            warn!(bus = %name, "rejecting bus without stops");
            return Err(CatalogueError::EmptyRoute(name));
        }

        let stop_ids = stops
            .iter()
            .map(|stop| self.index.require_stop(stop.as_ref()))
            .collect::<Result<Vec<_>>>()
            .inspect_err(|err| warn!(bus = %name, %err, "rejecting bus"))?;

        let kind = RouteKind::from_round_trip(round_trip);
        let distances = measure_route(&self.store, &self.distances, &stop_ids, kind);

        let id = self.store.push_bus(Bus {
            name: name.clone(),
            stops: stop_ids,
            kind,
            distances,
        });
        let bus = self.store.bus(id);
        self.index.insert_bus(name, id, &bus.stops);

        debug!(
            bus = %bus.name,
            ?kind,
            stops = bus.stops.len(),
            real = distances.real,
            ideal = distances.ideal,
            "added bus"
        );
        Ok(id)
    }

    /// Stop accepting writes so the catalogue can be shared across threads
    pub fn freeze(self) -> FrozenCatalogue {
        debug!(
            stops = self.store.stop_count(),
            buses = self.store.bus_count(),
            distances = self.distances.len(),
            "froze catalogue"
        );
        FrozenCatalogue(Arc::new(self))
    }
}

impl CatalogueReader for TransportCatalogue {
    fn has_stop(&self, name: &str) -> bool {
        self.index.contains_stop(name)
    }

    fn stop(&self, name: &str) -> Option<&Stop> {
        self.index.stop_id(name).map(|id| self.store.stop(id))
    }

    fn stop_count(&self) -> usize {
        self.store.stop_count()
    }

    fn all_stop_names(&self) -> BTreeSet<StopName> {
        self.index.stop_names()
    }

    fn stop_coordinates(&self, name: &str) -> Result<Coordinates> {
        let id = self.index.require_stop(name)?;
        Ok(self.store.stop(id).coordinates)
    }

    fn all_referenced_stop_coordinates(&self) -> Vec<Coordinates> {
        self.store
            .stops()
            .filter(|(id, _)| self.index.is_served(*id))
            .map(|(_, stop)| stop.coordinates)
            .collect()
    }

    fn buses_through_stop(&self, name: &str) -> Option<&BTreeSet<BusName>> {
        self.index.stop_id(name).map(|id| self.index.buses_through(id))
    }

    fn bus(&self, name: &str) -> Option<&Bus> {
        self.index.bus_id(name).map(|id| self.store.bus(id))
    }

    fn all_buses(&self) -> Vec<&Bus> {
        self.store.buses().map(|(_, bus)| bus).collect()
    }

    fn all_route_names(&self) -> BTreeSet<BusName> {
        self.index.bus_names()
    }

    fn is_round_trip(&self, bus: &str) -> Option<bool> {
        self.bus(bus).map(Bus::is_round_trip)
    }

    fn route_stop_names(&self, bus: &str) -> Vec<StopName> {
        self.bus(bus)
            .map(|bus| {
                bus.stops
                    .iter()
                    .map(|&id| self.store.stop(id).name.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn bus_statistics(&self, name: &str) -> Option<BusStatistics> {
        self.bus(name).map(Bus::statistics)
    }

    fn stop_to_stop_distance(&self, from: &str, to: &str) -> Result<u32> {
        let from_id = self.index.require_stop(from)?;
        let to_id = self.index.require_stop(to)?;
        // Great-circle fallbacks truncate toward zero
        Ok(self.distances.resolve(&self.store, from_id, to_id) as u32)
    }

    fn all_stop_distances(&self) -> BTreeMap<(StopName, StopName), u32> {
        self.distances
            .iter()
            .map(|((from, to), meters)| {
                let from = self.store.stop(from).name.clone();
                let to = self.store.stop(to).name.clone();
                ((from, to), meters)
            })
            .collect()
    }
}

// ============================================================================
// Frozen Catalogue
// ============================================================================

/// Read-only catalogue that can be shared across threads
///
/// This type is cheap to clone since the catalogue is stored in an `Arc`.
#[derive(Clone, Debug)]
pub struct FrozenCatalogue(Arc<TransportCatalogue>);

impl CatalogueReader for FrozenCatalogue {
    fn has_stop(&self, name: &str) -> bool {
        self.0.has_stop(name)
    }

    fn stop(&self, name: &str) -> Option<&Stop> {
        self.0.stop(name)
    }

    fn stop_count(&self) -> usize {
        self.0.stop_count()
    }

    fn all_stop_names(&self) -> BTreeSet<StopName> {
        self.0.all_stop_names()
    }

    fn stop_coordinates(&self, name: &str) -> Result<Coordinates> {
        self.0.stop_coordinates(name)
    }

    fn all_referenced_stop_coordinates(&self) -> Vec<Coordinates> {
        self.0.all_referenced_stop_coordinates()
    }

    fn buses_through_stop(&self, name: &str) -> Option<&BTreeSet<BusName>> {
        self.0.buses_through_stop(name)
    }

    fn bus(&self, name: &str) -> Option<&Bus> {
        self.0.bus(name)
    }

    fn all_buses(&self) -> Vec<&Bus> {
        self.0.all_buses()
    }

    fn all_route_names(&self) -> BTreeSet<BusName> {
        self.0.all_route_names()
    }

    fn is_round_trip(&self, bus: &str) -> Option<bool> {
        self.0.is_round_trip(bus)
    }

    fn route_stop_names(&self, bus: &str) -> Vec<StopName> {
        self.0.route_stop_names(bus)
    }

    fn bus_statistics(&self, name: &str) -> Option<BusStatistics> {
        self.0.bus_statistics(name)
    }

    fn stop_to_stop_distance(&self, from: &str, to: &str) -> Result<u32> {
        self.0.stop_to_stop_distance(from, to)
    }

    fn all_stop_distances(&self) -> BTreeMap<(StopName, StopName), u32> {
        self.0.all_stop_distances()
    }
}
