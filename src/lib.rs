//! Cargo shipment tracking domain core
//!
//! Tracks cargo shipments through a network of ports and voyages. The heart
//! of the crate is the delivery derivation engine: given a cargo's route
//! specification, its assigned itinerary, and the ordered history of
//! real-world handling events, it deterministically computes where the cargo
//! is, whether it has deviated from plan, what should happen next, and
//! whether it will meet its deadline.
//!
//! Derivation is replay-based and pure: the snapshot is always recomputed
//! from the full event history, never patched in place. Storage, routing,
//! and transport concerns sit behind narrow collaborator traits.

pub mod aggregate;
pub mod domain;
pub mod errors;
pub mod repository;
pub mod routing;
pub mod service;

// Re-export commonly used types
pub use aggregate::Cargo;
pub use domain::{
    Delivery, HandlingActivity, HandlingEvent, HandlingEventType, HandlingHistory, Itinerary, Leg,
    Location, RouteSpecification, RoutingStatus, TrackingId, TransportStatus, UnLocode, Voyage,
    VoyageNumber,
};
pub use errors::{Error, Result};
pub use repository::{
    CargoRepository, HandlingEventRepository, LocationRepository, VoyageRepository,
};
pub use routing::RoutingService;
pub use service::{HandlingEventFactory, HandlingReport, HandlingReportService, HandlingService};
