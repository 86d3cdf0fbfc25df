// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cargo Aggregate
//!
//! The aggregate root for one tracked shipment. It owns the route
//! specification, the assigned itinerary, and the derived delivery snapshot,
//! and it enforces one invariant continuously: the snapshot is always the
//! output of the derivation engine applied to the aggregate's current route
//! specification, itinerary, and full handling history. No mutation leaves
//! the snapshot stale.
//!
//! The handling history itself lives with the handling-event store, so every
//! state-affecting operation takes the current history and re-derives from
//! scratch.

use serde::{Deserialize, Serialize};

use crate::domain::{Delivery, HandlingHistory, Itinerary, RouteSpecification, TrackingId};
use crate::errors::Result;

/// One tracked shipment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cargo {
    tracking_id: TrackingId,
    route_specification: RouteSpecification,
    itinerary: Itinerary,
    delivery: Delivery,
}

impl Cargo {
    /// Book a new cargo: unrouted, nothing received yet
    pub fn new(tracking_id: TrackingId, route_specification: RouteSpecification) -> Result<Self> {
        route_specification.validate()?;
        let itinerary = Itinerary::default();
        let delivery = Delivery::derived_from(
            &route_specification,
            &itinerary,
            &HandlingHistory::default(),
        );
        Ok(Self {
            tracking_id,
            route_specification,
            itinerary,
            delivery,
        })
    }

    pub fn tracking_id(&self) -> &TrackingId {
        &self.tracking_id
    }

    pub fn route_specification(&self) -> &RouteSpecification {
        &self.route_specification
    }

    pub fn itinerary(&self) -> &Itinerary {
        &self.itinerary
    }

    /// The current tracking snapshot
    pub fn delivery(&self) -> &Delivery {
        &self.delivery
    }

    /// Assign the cargo to a travel plan
    ///
    /// The replacement is unconditional: a plan that does not satisfy the
    /// route specification is accepted and surfaces as `Misrouted` in the
    /// re-derived snapshot rather than being rejected. Reassignment also
    /// resets how the existing history is interpreted, since the replay runs
    /// against the new plan.
    pub fn assign_to_route(&mut self, itinerary: Itinerary, history: &HandlingHistory) {
        self.itinerary = itinerary;
        self.derive_delivery_progress(history);
    }

    /// Replace the shipper's requirement
    ///
    /// The itinerary is left untouched; its satisfaction status may flip to
    /// `Misrouted` in the re-derived snapshot.
    pub fn specify_new_route(
        &mut self,
        route_specification: RouteSpecification,
        history: &HandlingHistory,
    ) -> Result<()> {
        route_specification.validate()?;
        self.route_specification = route_specification;
        self.derive_delivery_progress(history);
        Ok(())
    }

    /// Recompute the delivery snapshot from the full current history
    ///
    /// Invoked after every mutation and after each admitted handling event.
    /// Always a full replay, never an incremental patch.
    pub fn derive_delivery_progress(&mut self, history: &HandlingHistory) {
        self.delivery =
            Delivery::derived_from(&self.route_specification, &self.itinerary, history);
    }
}
