// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-memory reference implementations of the storage collaborators
//!
//! Lock-guarded maps behind the repository traits. These back the test
//! suites and small deployments; they make no durability promises. Writes
//! take the per-store write lock, which also serializes concurrent admission
//! per store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::aggregate::Cargo;
use crate::domain::{
    HandlingEvent, HandlingHistory, Location, TrackingId, UnLocode, Voyage, VoyageNumber,
};
use crate::errors::{Error, Result};
use crate::repository::{
    CargoRepository, HandlingEventRepository, LocationRepository, VoyageRepository,
};

/// Cargo store over a guarded map
#[derive(Debug, Default)]
pub struct InMemoryCargoRepository {
    cargos: RwLock<HashMap<TrackingId, Cargo>>,
}

impl InMemoryCargoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CargoRepository for InMemoryCargoRepository {
    async fn store(&self, cargo: Cargo) -> Result<()> {
        debug!(tracking_id = %cargo.tracking_id(), "storing cargo");
        self.cargos
            .write()
            .await
            .insert(cargo.tracking_id().clone(), cargo);
        Ok(())
    }

    async fn find(&self, tracking_id: &TrackingId) -> Result<Cargo> {
        self.cargos
            .read()
            .await
            .get(tracking_id)
            .cloned()
            .ok_or_else(|| Error::UnknownCargo(tracking_id.clone()))
    }

    async fn remove(&self, cargo: &Cargo) -> Result<()> {
        self.cargos
            .write()
            .await
            .remove(cargo.tracking_id())
            .map(|_| ())
            .ok_or_else(|| Error::UnknownCargo(cargo.tracking_id().clone()))
    }

    async fn find_all(&self) -> Result<Vec<Cargo>> {
        Ok(self.cargos.read().await.values().cloned().collect())
    }
}

/// Handling-event log over a guarded vector
#[derive(Debug, Default)]
pub struct InMemoryHandlingEventRepository {
    events: RwLock<Vec<HandlingEvent>>,
}

impl InMemoryHandlingEventRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HandlingEventRepository for InMemoryHandlingEventRepository {
    async fn store(&self, event: HandlingEvent) -> Result<()> {
        debug!(
            tracking_id = %event.tracking_id,
            event_type = %event.activity.event_type,
            "appending handling event"
        );
        self.events.write().await.push(event);
        Ok(())
    }

    async fn query_handling_history(&self, tracking_id: &TrackingId) -> Result<HandlingHistory> {
        let events = self
            .events
            .read()
            .await
            .iter()
            .filter(|event| &event.tracking_id == tracking_id)
            .cloned()
            .collect();
        // The history constructor restores replay order regardless of how
        // reports arrived.
        Ok(HandlingHistory::new(events))
    }
}

/// Location registry over a guarded map
#[derive(Debug, Default)]
pub struct InMemoryLocationRepository {
    locations: RwLock<HashMap<UnLocode, Location>>,
}

impl InMemoryLocationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the given locations
    pub fn with_locations(locations: impl IntoIterator<Item = Location>) -> Self {
        Self {
            locations: RwLock::new(
                locations
                    .into_iter()
                    .map(|location| (location.unlocode.clone(), location))
                    .collect(),
            ),
        }
    }
}

#[async_trait]
impl LocationRepository for InMemoryLocationRepository {
    async fn find(&self, unlocode: &UnLocode) -> Result<Location> {
        self.locations
            .read()
            .await
            .get(unlocode)
            .cloned()
            .ok_or_else(|| Error::UnknownLocation(unlocode.clone()))
    }

    async fn find_all(&self) -> Result<Vec<Location>> {
        Ok(self.locations.read().await.values().cloned().collect())
    }
}

/// Voyage registry over a guarded map
#[derive(Debug, Default)]
pub struct InMemoryVoyageRepository {
    voyages: RwLock<HashMap<VoyageNumber, Voyage>>,
}

impl InMemoryVoyageRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the given voyages
    pub fn with_voyages(voyages: impl IntoIterator<Item = Voyage>) -> Self {
        Self {
            voyages: RwLock::new(
                voyages
                    .into_iter()
                    .map(|voyage| (voyage.number.clone(), voyage))
                    .collect(),
            ),
        }
    }
}

#[async_trait]
impl VoyageRepository for InMemoryVoyageRepository {
    async fn find(&self, number: &VoyageNumber) -> Result<Voyage> {
        self.voyages
            .read()
            .await
            .get(number)
            .cloned()
            .ok_or_else(|| Error::UnknownVoyage(number.clone()))
    }
}
