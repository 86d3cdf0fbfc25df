// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Delivery Derivation
//!
//! The derivation engine is a pure function over its three inputs. These
//! tests pin down the guarantees that make it safe to re-run anywhere:
//! determinism, indifference to registration noise, sticky misdirection,
//! and routing monotonicity.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use cargotracking::{
    Delivery, HandlingActivity, HandlingEvent, HandlingEventType, HandlingHistory, Itinerary,
    Leg, RouteSpecification, RoutingStatus, TrackingId, TransportStatus, UnLocode, VoyageNumber,
};

// ============================================================================
// Strategies
// ============================================================================

const LOCODES: [&str; 6] = ["CNSHA", "NLRTM", "DEHAM", "SEGOT", "CNHKG", "USNYC"];
const VOYAGES: [&str; 3] = ["V100", "V200", "V300"];

fn locode(code: &str) -> UnLocode {
    UnLocode::new(code).unwrap()
}

fn voyage(number: &str) -> VoyageNumber {
    VoyageNumber::new(number).unwrap()
}

fn minutes(m: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(m)
}

/// Origin and destination drawn from the pool, guaranteed distinct; deadline
/// optional and anywhere in the generated time range
fn route_spec() -> impl Strategy<Value = RouteSpecification> {
    (
        0..LOCODES.len(),
        1..LOCODES.len(),
        proptest::option::of(0i64..5_000),
    )
        .prop_map(|(origin, offset, deadline)| {
            RouteSpecification::new(
                locode(LOCODES[origin]),
                locode(LOCODES[(origin + offset) % LOCODES.len()]),
                deadline.map(minutes),
            )
            .unwrap()
        })
}

/// Contiguous chains of zero to three legs walking the location pool
fn itinerary() -> impl Strategy<Value = Itinerary> {
    (0..LOCODES.len(), 0usize..=3).prop_map(|(start, len)| {
        let legs = (0..len)
            .map(|i| {
                Leg::new(
                    voyage(VOYAGES[i % VOYAGES.len()]),
                    locode(LOCODES[(start + i) % LOCODES.len()]),
                    locode(LOCODES[(start + i + 1) % LOCODES.len()]),
                    minutes(i as i64 * 1_000 + 10),
                    minutes(i as i64 * 1_000 + 500),
                )
                .unwrap()
            })
            .collect();
        Itinerary::new(legs).unwrap()
    })
}

fn activity() -> impl Strategy<Value = HandlingActivity> {
    (
        prop_oneof![
            Just(HandlingEventType::Receive),
            Just(HandlingEventType::Load),
            Just(HandlingEventType::Unload),
            Just(HandlingEventType::Customs),
            Just(HandlingEventType::Claim),
        ],
        0..LOCODES.len(),
        0..VOYAGES.len(),
    )
        .prop_map(|(event_type, location, voyage_number)| {
            if event_type.requires_voyage() {
                HandlingActivity::with_voyage(
                    event_type,
                    locode(LOCODES[location]),
                    voyage(VOYAGES[voyage_number]),
                )
            } else {
                HandlingActivity::new(event_type, locode(LOCODES[location]))
            }
        })
}

fn tracking_id() -> TrackingId {
    TrackingId::new("PROPTST1").unwrap()
}

/// Arbitrary histories: activities with independent completion and
/// registration times, in arbitrary arrival order
fn history() -> impl Strategy<Value = HandlingHistory> {
    prop::collection::vec((activity(), 0i64..5_000, 0i64..5_000), 0..12).prop_map(|entries| {
        HandlingHistory::new(
            entries
                .into_iter()
                .map(|(activity, completed, registered)| HandlingEvent {
                    tracking_id: tracking_id(),
                    activity,
                    completion_time: minutes(completed),
                    registration_time: minutes(registered),
                })
                .collect(),
        )
    })
}

/// Activities plus registration offsets, with a shuffled assignment of the
/// same registration times, for the registration-noise property
fn reorder_case() -> impl Strategy<Value = (Vec<(HandlingActivity, i64)>, Vec<usize>)> {
    prop::collection::vec((activity(), 0i64..5_000), 1..10).prop_flat_map(|entries| {
        let permutation = (0..entries.len()).collect::<Vec<_>>();
        (Just(entries), Just(permutation).prop_shuffle())
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Re-running derivation on the same three inputs yields an identical
    /// snapshot. The engine holds no state and consults no clock.
    #[test]
    fn prop_derivation_is_deterministic(
        spec in route_spec(),
        plan in itinerary(),
        events in history(),
    ) {
        let first = Delivery::derived_from(&spec, &plan, &events);
        let second = Delivery::derived_from(&spec, &plan, &events);

        prop_assert_eq!(first, second);
    }

    /// With completion times fixed, it does not matter in which order the
    /// reports reached the system nor which registration timestamp each one
    /// received: the derived snapshot is the same.
    #[test]
    fn prop_registration_noise_never_changes_delivery(
        spec in route_spec(),
        plan in itinerary(),
        (entries, permutation) in reorder_case(),
    ) {
        // Distinct completion times, one per entry.
        let as_reported: Vec<HandlingEvent> = entries
            .iter()
            .enumerate()
            .map(|(i, (activity, registered))| HandlingEvent {
                tracking_id: tracking_id(),
                activity: activity.clone(),
                completion_time: minutes(i as i64 * 10),
                registration_time: minutes(10_000 + registered),
            })
            .collect();

        // Same facts, arriving in a different order and stamped with the
        // same set of registration times handed out differently.
        let reshuffled: Vec<HandlingEvent> = permutation
            .iter()
            .map(|&i| HandlingEvent {
                registration_time: minutes(10_000 + entries[permutation[i]].1),
                ..as_reported[i].clone()
            })
            .collect();

        let original = Delivery::derived_from(&spec, &plan, &HandlingHistory::new(as_reported));
        let noisy = Delivery::derived_from(&spec, &plan, &HandlingHistory::new(reshuffled));

        prop_assert_eq!(original, noisy);
    }

    /// Once any replayed event is off plan, every longer replay of the same
    /// history against the same itinerary is misdirected too.
    #[test]
    fn prop_misdirection_is_sticky(
        spec in route_spec(),
        plan in itinerary(),
        events in history(),
    ) {
        let mut seen_misdirection = false;
        for n in 0..=events.len() {
            let prefix = HandlingHistory::new(events.events()[..n].to_vec());
            let delivery = Delivery::derived_from(&spec, &plan, &prefix);
            if seen_misdirection {
                prop_assert!(
                    delivery.is_misdirected,
                    "misdirection vanished at prefix length {}",
                    n
                );
            }
            seen_misdirection = delivery.is_misdirected;
        }
    }

    /// An itinerary that does not satisfy the specification is never reported
    /// as Routed, whatever the history says.
    #[test]
    fn prop_unsatisfying_itinerary_is_never_routed(
        spec in route_spec(),
        plan in itinerary(),
        events in history(),
    ) {
        let delivery = Delivery::derived_from(&spec, &plan, &events);

        if !plan.satisfies(&spec) {
            prop_assert_ne!(delivery.routing_status, RoutingStatus::Routed);
        }
        if plan.is_empty() {
            prop_assert_eq!(delivery.routing_status, RoutingStatus::NotRouted);
        }
    }

    /// An empty history always reads as a cargo waiting at its origin.
    #[test]
    fn prop_empty_history_is_not_received(
        spec in route_spec(),
        plan in itinerary(),
    ) {
        let delivery = Delivery::derived_from(&spec, &plan, &HandlingHistory::default());

        prop_assert_eq!(delivery.transport_status, TransportStatus::NotReceived);
        prop_assert!(!delivery.is_misdirected);
        prop_assert_eq!(delivery.last_updated_at, None);
    }
}
