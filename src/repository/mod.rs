// Copyright (c) 2025 - Cowboy AI, Inc.
//! Storage collaborator interfaces
//!
//! The tracking core never persists anything itself: durable storage of
//! cargos, handling events, and the location/voyage registries sits behind
//! these traits. Any concrete backend (in-memory, relational, document)
//! implements them; the core never inspects which one is in use.
//!
//! # Contracts
//!
//! 1. **Upsert**: `CargoRepository::store` is an idempotent upsert keyed by
//!    tracking id
//! 2. **Append-Only**: handling events are never updated or deleted
//! 3. **Ordered**: `query_handling_history` returns events in replay order
//!    (completion time, ties by registration time)
//! 4. **Serialized Writers**: concurrent admission for one tracking identity
//!    must be serialized by the backend (per-identity locking or atomic
//!    conditional update)

use async_trait::async_trait;

use crate::aggregate::Cargo;
use crate::domain::{
    HandlingEvent, HandlingHistory, Location, TrackingId, UnLocode, Voyage, VoyageNumber,
};
use crate::errors::Result;

pub mod memory;

pub use memory::{
    InMemoryCargoRepository, InMemoryHandlingEventRepository, InMemoryLocationRepository,
    InMemoryVoyageRepository,
};

/// Durable home of cargo aggregates, keyed by tracking id
#[async_trait]
pub trait CargoRepository: Send + Sync {
    /// Idempotent upsert by tracking id
    async fn store(&self, cargo: Cargo) -> Result<()>;

    /// Find a cargo, or `UnknownCargo` when nothing is booked under the id
    async fn find(&self, tracking_id: &TrackingId) -> Result<Cargo>;

    /// Remove a booked cargo
    async fn remove(&self, cargo: &Cargo) -> Result<()>;

    /// All booked cargos
    async fn find_all(&self) -> Result<Vec<Cargo>>;
}

/// Append-only log of handling events across all cargos
#[async_trait]
pub trait HandlingEventRepository: Send + Sync {
    /// Append one admitted event
    async fn store(&self, event: HandlingEvent) -> Result<()>;

    /// The cargo's full history, in replay order
    async fn query_handling_history(&self, tracking_id: &TrackingId) -> Result<HandlingHistory>;
}

/// Registry of known ports and terminals, for referential validation
#[async_trait]
pub trait LocationRepository: Send + Sync {
    async fn find(&self, unlocode: &UnLocode) -> Result<Location>;

    async fn find_all(&self) -> Result<Vec<Location>>;
}

/// Registry of known voyages, for referential validation
#[async_trait]
pub trait VoyageRepository: Send + Sync {
    async fn find(&self, number: &VoyageNumber) -> Result<Voyage>;
}
