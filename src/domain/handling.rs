// Copyright (c) 2025 - Cowboy AI, Inc.
//! Handling events: the observed facts a delivery snapshot is derived from
//!
//! Events are immutable records of things that happened in the world. They
//! carry two timestamps: `completion_time` is when the fact occurred,
//! `registration_time` is when it was reported to the system. The two may
//! differ, and reports may arrive out of order; [`HandlingHistory`] restores
//! the canonical replay order so late registration never corrupts replay.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{TrackingId, UnLocode, VoyageNumber};

/// Kind of handling fact reported about a cargo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandlingEventType {
    /// Cargo received at its origin port
    Receive,
    /// Cargo loaded onto a carrier voyage
    Load,
    /// Cargo unloaded from a carrier voyage
    Unload,
    /// Cargo cleared customs
    Customs,
    /// Cargo claimed by the consignee
    Claim,
}

impl HandlingEventType {
    /// Load and Unload are the only movements tied to a carrier voyage
    pub fn requires_voyage(&self) -> bool {
        matches!(self, HandlingEventType::Load | HandlingEventType::Unload)
    }
}

impl fmt::Display for HandlingEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlingEventType::Receive => write!(f, "receive"),
            HandlingEventType::Load => write!(f, "load"),
            HandlingEventType::Unload => write!(f, "unload"),
            HandlingEventType::Customs => write!(f, "customs"),
            HandlingEventType::Claim => write!(f, "claim"),
        }
    }
}

/// What happened, or is expected to happen, to a cargo: an event type at a
/// location, on a voyage when the movement involves a carrier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlingActivity {
    pub event_type: HandlingEventType,
    pub location: UnLocode,
    pub voyage_number: Option<VoyageNumber>,
}

impl HandlingActivity {
    /// Activity with no carrier involved (receive, customs, claim)
    pub fn new(event_type: HandlingEventType, location: UnLocode) -> Self {
        Self {
            event_type,
            location,
            voyage_number: None,
        }
    }

    /// Carrier movement (load, unload)
    pub fn with_voyage(
        event_type: HandlingEventType,
        location: UnLocode,
        voyage_number: VoyageNumber,
    ) -> Self {
        Self {
            event_type,
            location,
            voyage_number: Some(voyage_number),
        }
    }
}

/// One observed handling fact in a cargo's history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlingEvent {
    pub tracking_id: TrackingId,
    pub activity: HandlingActivity,
    /// When the fact occurred in the world
    pub completion_time: DateTime<Utc>,
    /// When the fact was recorded by the system
    pub registration_time: DateTime<Utc>,
}

/// Append-only log of handling events for one cargo, held in replay order
///
/// Replay order is completion time ascending, ties broken by registration
/// time ascending (oldest-recorded first), so derivation is reproducible no
/// matter in which order reports arrived.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlingHistory {
    events: Vec<HandlingEvent>,
}

impl HandlingHistory {
    pub fn new(mut events: Vec<HandlingEvent>) -> Self {
        events.sort_by(|a, b| {
            a.completion_time
                .cmp(&b.completion_time)
                .then(a.registration_time.cmp(&b.registration_time))
        });
        Self { events }
    }

    /// Events in replay order
    pub fn events(&self) -> &[HandlingEvent] {
        &self.events
    }

    /// The most recent event in replay order, the "current" fact about the
    /// cargo
    pub fn last_event(&self) -> Option<&HandlingEvent> {
        self.events.last()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}
