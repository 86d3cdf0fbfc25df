// Copyright (c) 2025 - Cowboy AI, Inc.
//! Delivery derivation: the replay engine at the heart of cargo tracking
//!
//! A [`Delivery`] snapshot is entirely a function of three inputs: the route
//! specification, the assigned itinerary, and the handling history. It is
//! always recomputed from the full history, never patched incrementally, so
//! the snapshot can never drift from the facts it summarizes.
//!
//! # Derivation
//!
//! ```text
//! (RouteSpecification, Itinerary, HandlingHistory) → Delivery
//! ```
//!
//! The engine replays the history in canonical order through a leg cursor
//! (see [`crate::domain::itinerary`]), accumulating misdirection and leg
//! consumption, then reads the remaining fields off the final event. It is a
//! total function: it performs no I/O, holds no state, and has no error
//! path; an incoherent plan simply surfaces as `Misrouted` and absent
//! fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::{
    HandlingActivity, HandlingEventType, HandlingHistory, Itinerary, LegCursor,
    RouteSpecification, UnLocode, VoyageNumber,
};

/// Where the cargo physically is, mapped from its latest handling event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportStatus {
    /// Nothing has been reported yet
    NotReceived,
    /// At a port between carrier movements
    InPort,
    /// Riding a voyage
    OnboardCarrier,
    /// Picked up by the consignee
    Claimed,
    /// No meaningful status can be stated
    Unknown,
}

impl Default for TransportStatus {
    fn default() -> Self {
        TransportStatus::Unknown
    }
}

impl fmt::Display for TransportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportStatus::NotReceived => write!(f, "not received"),
            TransportStatus::InPort => write!(f, "in port"),
            TransportStatus::OnboardCarrier => write!(f, "onboard carrier"),
            TransportStatus::Claimed => write!(f, "claimed"),
            TransportStatus::Unknown => write!(f, "unknown"),
        }
    }
}

/// Whether the assigned plan answers the shipper's requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingStatus {
    /// No itinerary assigned
    NotRouted,
    /// Itinerary satisfies the route specification
    Routed,
    /// Itinerary does not satisfy the route specification
    Misrouted,
}

impl fmt::Display for RoutingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutingStatus::NotRouted => write!(f, "not routed"),
            RoutingStatus::Routed => write!(f, "routed"),
            RoutingStatus::Misrouted => write!(f, "misrouted"),
        }
    }
}

/// Point-in-time summary of a cargo's tracking state
///
/// Never authored directly; obtained only through [`Delivery::derived_from`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    pub transport_status: TransportStatus,
    pub last_known_location: Option<UnLocode>,
    /// Set while the cargo is onboard a carrier
    pub current_voyage: Option<VoyageNumber>,
    /// Sticky: once the observed handling diverges from the plan, the cargo
    /// stays misdirected until the itinerary is reassigned
    pub is_misdirected: bool,
    /// Scheduled arrival at the destination; only stated for routed cargos
    pub eta: Option<DateTime<Utc>>,
    pub next_expected_activity: Option<HandlingActivity>,
    pub is_unloaded_at_destination: bool,
    pub routing_status: RoutingStatus,
    /// Registration time of the newest replayed event; `None` before the
    /// first report. Derived from the inputs so replays stay bit-identical.
    pub last_updated_at: Option<DateTime<Utc>>,
}

impl Delivery {
    /// Derive the current snapshot from the cargo's plan and observed history
    pub fn derived_from(
        spec: &RouteSpecification,
        itinerary: &Itinerary,
        history: &HandlingHistory,
    ) -> Self {
        let routing_status = if itinerary.is_empty() {
            RoutingStatus::NotRouted
        } else if itinerary.satisfies(spec) {
            RoutingStatus::Routed
        } else {
            RoutingStatus::Misrouted
        };

        let eta = match routing_status {
            RoutingStatus::Routed => itinerary.final_arrival_time(),
            _ => None,
        };

        let mut cursor = LegCursor::start();
        let mut is_misdirected = false;
        let mut is_unloaded_at_destination = false;
        for event in history.events() {
            let (advanced, expected) = itinerary.match_activity(cursor, &event.activity);
            cursor = advanced;
            is_misdirected |= !expected;
            if event.activity.event_type == HandlingEventType::Unload
                && itinerary.final_arrival_location() == Some(&event.activity.location)
            {
                is_unloaded_at_destination = true;
            }
        }

        let last_event = history.last_event();
        let transport_status = match last_event.map(|e| e.activity.event_type) {
            None => TransportStatus::NotReceived,
            Some(HandlingEventType::Load) => TransportStatus::OnboardCarrier,
            Some(HandlingEventType::Claim) => TransportStatus::Claimed,
            Some(
                HandlingEventType::Receive | HandlingEventType::Unload | HandlingEventType::Customs,
            ) => TransportStatus::InPort,
        };

        // While onboard, "in transit toward" reads as the load port plus the
        // voyage being ridden.
        let last_known_location = last_event.map(|e| e.activity.location.clone());
        let current_voyage = match last_event {
            Some(e) if e.activity.event_type == HandlingEventType::Load => {
                e.activity.voyage_number.clone()
            }
            _ => None,
        };

        let next_expected_activity = next_expected_activity(
            spec,
            itinerary,
            cursor,
            last_event.map(|e| e.activity.event_type),
        );

        let last_updated_at = history
            .events()
            .iter()
            .map(|e| e.registration_time)
            .max();

        Delivery {
            transport_status,
            last_known_location,
            current_voyage,
            is_misdirected,
            eta,
            next_expected_activity,
            is_unloaded_at_destination,
            routing_status,
            last_updated_at,
        }
    }
}

/// The first unconsumed leg boundary after the replay, per plan position
///
/// Receive at the origin before anything happened; Unload closes an
/// in-progress leg; Load opens the next unconsumed one; Claim ends an
/// exhausted plan. None once claimed or while unrouted.
fn next_expected_activity(
    spec: &RouteSpecification,
    itinerary: &Itinerary,
    cursor: LegCursor,
    last_event_type: Option<HandlingEventType>,
) -> Option<HandlingActivity> {
    match last_event_type {
        None => Some(HandlingActivity::new(
            HandlingEventType::Receive,
            spec.origin.clone(),
        )),
        Some(HandlingEventType::Claim) => None,
        Some(_) => {
            let legs = itinerary.legs();
            if legs.is_empty() {
                return None;
            }
            if cursor.is_onboard() {
                let leg = &legs[cursor.next_leg_index()];
                Some(HandlingActivity::with_voyage(
                    HandlingEventType::Unload,
                    leg.unload_location.clone(),
                    leg.voyage_number.clone(),
                ))
            } else if let Some(leg) = legs.get(cursor.next_leg_index()) {
                Some(HandlingActivity::with_voyage(
                    HandlingEventType::Load,
                    leg.load_location.clone(),
                    leg.voyage_number.clone(),
                ))
            } else {
                Some(HandlingActivity::new(
                    HandlingEventType::Claim,
                    legs[legs.len() - 1].unload_location.clone(),
                ))
            }
        }
    }
}
