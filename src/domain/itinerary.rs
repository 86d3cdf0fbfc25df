// Copyright (c) 2025 - Cowboy AI, Inc.
//! Itineraries: the travel plan a cargo is assigned to
//!
//! An itinerary is an ordered sequence of legs; sequence order is physical
//! travel order. Expectation matching against a plan is positional: legs are
//! consumed strictly in order as matching events are replayed, so an event
//! that could match several legs (a voyage revisiting a port) always resolves
//! to the earliest unconsumed one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{HandlingActivity, HandlingEventType, RouteSpecification, UnLocode, VoyageNumber};
use crate::errors::{Error, Result};

/// One carrier movement of a plan: board a voyage at one port, leave it at
/// the next
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leg {
    pub voyage_number: VoyageNumber,
    pub load_location: UnLocode,
    pub unload_location: UnLocode,
    pub load_time: DateTime<Utc>,
    pub unload_time: DateTime<Utc>,
}

impl Leg {
    pub fn new(
        voyage_number: VoyageNumber,
        load_location: UnLocode,
        unload_location: UnLocode,
        load_time: DateTime<Utc>,
        unload_time: DateTime<Utc>,
    ) -> Result<Self> {
        if load_location == unload_location {
            return Err(Error::InvalidLeg(format!(
                "leg loads and unloads at {load_location}"
            )));
        }
        if load_time >= unload_time {
            return Err(Error::InvalidLeg(format!(
                "unload at {unload_time} is not after load at {load_time}"
            )));
        }
        Ok(Self {
            voyage_number,
            load_location,
            unload_location,
            load_time,
            unload_time,
        })
    }
}

/// Replay position within an itinerary
///
/// `next` is the index of the first unconsumed leg; `onboard` marks that leg
/// as in progress (loaded but not yet unloaded). A matched Load marks its leg
/// in progress, the matching Unload consumes it. Unexpected events never move
/// the cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LegCursor {
    next: usize,
    onboard: bool,
}

impl LegCursor {
    pub fn start() -> Self {
        Self::default()
    }

    pub fn next_leg_index(&self) -> usize {
        self.next
    }

    pub fn is_onboard(&self) -> bool {
        self.onboard
    }
}

/// Ordered travel plan assigned to a cargo
///
/// Immutable once constructed; reassigning a cargo replaces the whole value.
/// The empty itinerary means "unrouted".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Itinerary {
    legs: Vec<Leg>,
}

impl Itinerary {
    /// Validates contiguity: each leg must depart where the previous one
    /// arrived, and never earlier than the previous arrival
    pub fn new(legs: Vec<Leg>) -> Result<Self> {
        for pair in legs.windows(2) {
            if pair[0].unload_location != pair[1].load_location {
                return Err(Error::InvalidItinerary(format!(
                    "leg unloading at {} is followed by a leg loading at {}",
                    pair[0].unload_location, pair[1].load_location
                )));
            }
            if pair[0].unload_time > pair[1].load_time {
                return Err(Error::InvalidItinerary(format!(
                    "leg loading at {} departs before the previous leg arrives",
                    pair[1].load_location
                )));
            }
        }
        Ok(Self { legs })
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Where the plan starts, if there is a plan
    pub fn initial_departure_location(&self) -> Option<&UnLocode> {
        self.legs.first().map(|leg| &leg.load_location)
    }

    /// Where the plan ends, if there is a plan
    pub fn final_arrival_location(&self) -> Option<&UnLocode> {
        self.legs.last().map(|leg| &leg.unload_location)
    }

    /// Scheduled arrival at the final destination, if there is a plan
    pub fn final_arrival_time(&self) -> Option<DateTime<Utc>> {
        self.legs.last().map(|leg| leg.unload_time)
    }

    /// True iff this plan takes the cargo from the specified origin to the
    /// specified destination, arriving at or before the deadline when one is
    /// set. An empty itinerary satisfies nothing.
    pub fn satisfies(&self, spec: &RouteSpecification) -> bool {
        let (Some(first), Some(last)) = (self.legs.first(), self.legs.last()) else {
            return false;
        };
        first.load_location == spec.origin
            && last.unload_location == spec.destination
            && spec
                .arrival_deadline
                .map_or(true, |deadline| last.unload_time <= deadline)
    }

    /// Checks an observed activity against the plan at the cursor position
    ///
    /// Returns the advanced cursor and whether the activity was expected:
    /// - Receive is expected at the first leg's load location;
    /// - Load is expected on the earliest unconsumed leg boarding the event's
    ///   voyage at the event's location, and marks that leg in progress;
    /// - Unload is expected on the earliest unconsumed leg leaving the
    ///   event's voyage at the event's location, and consumes that leg;
    /// - Claim is expected at the last leg's unload location;
    /// - Customs carries no positional constraint.
    ///
    /// With an empty itinerary only Receive, at any location, is expected.
    pub fn match_activity(
        &self,
        cursor: LegCursor,
        activity: &HandlingActivity,
    ) -> (LegCursor, bool) {
        if self.legs.is_empty() {
            return (cursor, activity.event_type == HandlingEventType::Receive);
        }

        match activity.event_type {
            HandlingEventType::Receive => {
                (cursor, self.legs[0].load_location == activity.location)
            }
            HandlingEventType::Customs => (cursor, true),
            HandlingEventType::Claim => (
                cursor,
                self.legs[self.legs.len() - 1].unload_location == activity.location,
            ),
            HandlingEventType::Load => {
                let matched = self.legs[cursor.next..].iter().position(|leg| {
                    Some(&leg.voyage_number) == activity.voyage_number.as_ref()
                        && leg.load_location == activity.location
                });
                match matched {
                    Some(offset) => (
                        LegCursor {
                            next: cursor.next + offset,
                            onboard: true,
                        },
                        true,
                    ),
                    None => (cursor, false),
                }
            }
            HandlingEventType::Unload => {
                let matched = self.legs[cursor.next..].iter().position(|leg| {
                    Some(&leg.voyage_number) == activity.voyage_number.as_ref()
                        && leg.unload_location == activity.location
                });
                match matched {
                    Some(offset) => (
                        LegCursor {
                            next: cursor.next + offset + 1,
                            onboard: false,
                        },
                        true,
                    ),
                    None => (cursor, false),
                }
            }
        }
    }
}
