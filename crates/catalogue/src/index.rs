//! Lookup structures over the entity store.
//!
//! Name to id maps for stops and buses, plus the set of bus names serving
//! each stop. Updated in the same call that appends to the store.

use std::collections::{BTreeSet, HashMap};

use crate::identifiers::*;
use crate::models::types::{CatalogueError, Result};

#[derive(Clone, Debug, Default)]
pub struct NameIndex {
    stops: HashMap<StopName, StopId>,
    buses: HashMap<BusName, BusId>,

    // Indexed by StopId. Every known stop has an entry, possibly empty.
    stop_buses: Vec<BTreeSet<BusName>>,
}

impl NameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stop freshly pushed to the store
    pub fn insert_stop(&mut self, name: StopName, id: StopId) {
        debug_assert_eq!(id.index(), self.stop_buses.len());
        self.stops.insert(name, id);
        self.stop_buses.push(BTreeSet::new());
    }

    /// Register a bus freshly pushed to the store along with every stop it serves
    pub fn insert_bus(&mut self, name: BusName, id: BusId, stops: &[StopId]) {
        for stop in stops {
            // Set semantics: a stop visited twice records the bus once
            self.stop_buses[stop.index()].insert(name.clone());
        }
        self.buses.insert(name, id);
    }

    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.stops.get(name).copied()
    }

    /// Like [`Self::stop_id`], but an unknown name is a caller error
    pub fn require_stop(&self, name: &str) -> Result<StopId> {
        self.stop_id(name)
            .ok_or_else(|| CatalogueError::UnknownStop(StopName::new(name)))
    }

    pub fn bus_id(&self, name: &str) -> Option<BusId> {
        self.buses.get(name).copied()
    }

    pub fn contains_stop(&self, name: &str) -> bool {
        self.stops.contains_key(name)
    }

    pub fn contains_bus(&self, name: &str) -> bool {
        self.buses.contains_key(name)
    }

    pub fn buses_through(&self, stop: StopId) -> &BTreeSet<BusName> {
        &self.stop_buses[stop.index()]
    }

    pub fn is_served(&self, stop: StopId) -> bool {
        !self.stop_buses[stop.index()].is_empty()
    }

    pub fn stop_names(&self) -> BTreeSet<StopName> {
        self.stops.keys().cloned().collect()
    }

    pub fn bus_names(&self) -> BTreeSet<BusName> {
        self.buses.keys().cloned().collect()
    }
}
