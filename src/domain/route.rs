// Copyright (c) 2025 - Cowboy AI, Inc.
//! Route specification: the shipper's requirement

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::UnLocode;
use crate::errors::{Error, Result};

/// Where a cargo must travel from and to, and by when
///
/// Replacing the specification on a booked cargo invalidates the current
/// itinerary's satisfaction status and forces re-derivation of the delivery
/// snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSpecification {
    pub origin: UnLocode,
    pub destination: UnLocode,
    /// Absent deadline means no arrival constraint. Deadline-in-future is
    /// enforced at booking time by the caller, not re-checked here.
    pub arrival_deadline: Option<DateTime<Utc>>,
}

impl RouteSpecification {
    pub fn new(
        origin: UnLocode,
        destination: UnLocode,
        arrival_deadline: Option<DateTime<Utc>>,
    ) -> Result<Self> {
        let spec = Self {
            origin,
            destination,
            arrival_deadline,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// A round trip is not a route: origin and destination must differ
    pub fn validate(&self) -> Result<()> {
        if self.origin == self.destination {
            return Err(Error::InvalidRouteSpecification(format!(
                "origin and destination are both {}",
                self.origin
            )));
        }
        Ok(())
    }
}
