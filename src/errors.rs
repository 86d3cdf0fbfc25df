//! Error types for cargo tracking operations

use thiserror::Error;

use crate::domain::{HandlingEventType, TrackingId, UnLocode, VoyageNumber};

/// Errors that can occur when booking, routing, or handling cargos
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// No cargo is booked under the tracking id
    #[error("unknown cargo: {0}")]
    UnknownCargo(TrackingId),

    /// Referenced location is not in the location registry
    #[error("unknown location: {0}")]
    UnknownLocation(UnLocode),

    /// Referenced voyage is not in the voyage registry
    #[error("unknown voyage: {0}")]
    UnknownVoyage(VoyageNumber),

    /// Load and Unload reports must name the carrier voyage
    #[error("{0} event reported without a voyage")]
    MissingVoyage(HandlingEventType),

    /// Malformed tracking id
    #[error("invalid tracking id: {0}")]
    InvalidTrackingId(String),

    /// Malformed UN/LOCODE
    #[error("invalid UN/LOCODE: {0}")]
    InvalidUnLocode(String),

    /// Malformed voyage number
    #[error("invalid voyage number: {0}")]
    InvalidVoyageNumber(String),

    /// Malformed route specification, e.g. origin equals destination
    #[error("invalid route specification: {0}")]
    InvalidRouteSpecification(String),

    /// Malformed leg, e.g. unload scheduled before load
    #[error("invalid leg: {0}")]
    InvalidLeg(String),

    /// Malformed itinerary, e.g. non-contiguous legs
    #[error("invalid itinerary: {0}")]
    InvalidItinerary(String),

    /// Storage collaborator failure
    #[error("store error: {0}")]
    Store(String),
}

/// Result type for cargo tracking operations
pub type Result<T> = std::result::Result<T, Error>;
