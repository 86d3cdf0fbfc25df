// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cargo Tracking Domain Model
//!
//! Value objects and the pure derivation engine for the shipping domain.
//! Everything here is immutable, validated on construction, and free of I/O.
//!
//! # Value Objects with Invariants
//!
//! - [`TrackingId`] - opaque cargo identity, assigned at booking
//! - [`UnLocode`] - five-character UN/LOCODE port keys
//! - [`VoyageNumber`] - carrier voyage keys
//! - [`RouteSpecification`] - origin, destination, arrival deadline
//! - [`Leg`] / [`Itinerary`] - the ordered travel plan, contiguity-checked
//! - [`HandlingEvent`] / [`HandlingHistory`] - the observed facts, in
//!   canonical replay order
//!
//! # Derived State
//!
//! - [`Delivery`] - the tracking snapshot, a pure function of the three
//!   inputs above; see [`delivery`] for the replay rules

pub mod delivery;
pub mod handling;
pub mod itinerary;
pub mod location;
pub mod route;
pub mod tracking;
pub mod voyage;

// Re-export value objects
pub use delivery::{Delivery, RoutingStatus, TransportStatus};
pub use handling::{HandlingActivity, HandlingEvent, HandlingEventType, HandlingHistory};
pub use itinerary::{Itinerary, Leg, LegCursor};
pub use location::{Location, UnLocode};
pub use route::RouteSpecification;
pub use tracking::TrackingId;
pub use voyage::{Voyage, VoyageNumber};
