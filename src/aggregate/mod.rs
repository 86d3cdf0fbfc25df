// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cargo aggregate root
//!
//! One aggregate instance per tracking identity. Mutations re-run the full
//! delivery derivation so the snapshot is never stale relative to the route
//! specification, itinerary, and handling history it summarizes.
//!
//! Concurrency note: serializing concurrent mutations of the same tracking
//! identity (single writer per identity) is the storage collaborator's
//! responsibility; the aggregate itself holds no locks. Operations on
//! different identities are fully independent.

pub mod cargo;

pub use cargo::Cargo;
