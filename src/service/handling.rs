// Copyright (c) 2025 - Cowboy AI, Inc.
//! Handling event admission
//!
//! Admission is the gate between raw reports from port and carrier systems
//! and the cargo's handling history. It checks referential legality only:
//! the cargo must be booked, the location and voyage must exist in their
//! registries, and carrier movements must name a voyage. Plan conformance is
//! deliberately not checked here: an unexpected event is still a fact, so
//! it is admitted, recorded, and surfaces as misdirection during derivation.
//!
//! # Admission Flow
//!
//! ```text
//! HandlingReport → Factory (referential validation) → HandlingEvent
//!                                                          ↓
//!                                              HandlingEventRepository
//!                                                          ↓
//!                             Cargo re-derives Delivery from full history
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{info, instrument, warn};

use crate::domain::{
    HandlingActivity, HandlingEvent, HandlingEventType, TrackingId, UnLocode, VoyageNumber,
};
use crate::errors::{Error, Result};
use crate::repository::{
    CargoRepository, HandlingEventRepository, LocationRepository, VoyageRepository,
};

/// A raw handling report, as submitted by port or carrier systems
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlingReport {
    pub tracking_id: TrackingId,
    pub event_type: HandlingEventType,
    pub unlocode: UnLocode,
    /// Required for load and unload reports
    pub voyage_number: Option<VoyageNumber>,
    /// When the handling occurred in the world
    pub completion_time: DateTime<Utc>,
}

/// Builds validated handling events from raw reports
///
/// Referential legality only; see the module docs for the conformance split.
pub struct HandlingEventFactory {
    cargos: Arc<dyn CargoRepository>,
    locations: Arc<dyn LocationRepository>,
    voyages: Arc<dyn VoyageRepository>,
}

impl HandlingEventFactory {
    pub fn new(
        cargos: Arc<dyn CargoRepository>,
        locations: Arc<dyn LocationRepository>,
        voyages: Arc<dyn VoyageRepository>,
    ) -> Self {
        Self {
            cargos,
            locations,
            voyages,
        }
    }

    /// Validate a report's references and build the event
    ///
    /// Fails with `UnknownCargo`, `UnknownLocation`, `UnknownVoyage`, or
    /// `MissingVoyage`; never with anything about plan conformance.
    pub async fn create_handling_event(
        &self,
        registration_time: DateTime<Utc>,
        report: HandlingReport,
    ) -> Result<HandlingEvent> {
        self.cargos.find(&report.tracking_id).await?;
        self.locations.find(&report.unlocode).await?;
        if let Some(ref number) = report.voyage_number {
            self.voyages.find(number).await?;
        }

        // Only carrier movements carry a voyage; a voyage given on e.g. a
        // customs report is validated above but not recorded.
        let activity = if report.event_type.requires_voyage() {
            let number = report
                .voyage_number
                .ok_or(Error::MissingVoyage(report.event_type))?;
            HandlingActivity::with_voyage(report.event_type, report.unlocode, number)
        } else {
            HandlingActivity::new(report.event_type, report.unlocode)
        };

        Ok(HandlingEvent {
            tracking_id: report.tracking_id,
            activity,
            completion_time: report.completion_time,
            registration_time,
        })
    }
}

/// Handling-event admission interface
#[async_trait]
pub trait HandlingService: Send + Sync {
    /// Validate and record a handling report, then bring the owning cargo's
    /// delivery snapshot up to date
    async fn register_handling_event(&self, report: HandlingReport) -> Result<()>;
}

/// Admission pipeline over the storage collaborators
pub struct HandlingReportService {
    factory: HandlingEventFactory,
    cargos: Arc<dyn CargoRepository>,
    handling_events: Arc<dyn HandlingEventRepository>,
}

impl HandlingReportService {
    pub fn new(
        cargos: Arc<dyn CargoRepository>,
        handling_events: Arc<dyn HandlingEventRepository>,
        locations: Arc<dyn LocationRepository>,
        voyages: Arc<dyn VoyageRepository>,
    ) -> Self {
        Self {
            factory: HandlingEventFactory::new(Arc::clone(&cargos), locations, voyages),
            cargos,
            handling_events,
        }
    }
}

#[async_trait]
impl HandlingService for HandlingReportService {
    #[instrument(
        skip(self, report),
        fields(tracking_id = %report.tracking_id, event_type = %report.event_type)
    )]
    async fn register_handling_event(&self, report: HandlingReport) -> Result<()> {
        let tracking_id = report.tracking_id.clone();
        let registration_time = Utc::now();

        let event = self
            .factory
            .create_handling_event(registration_time, report)
            .await?;
        self.handling_events.store(event).await?;

        // Full replay against the complete history; insertion position is
        // decided by the history's ordering rule, not by arrival order.
        let history = self
            .handling_events
            .query_handling_history(&tracking_id)
            .await?;
        let mut cargo = self.cargos.find(&tracking_id).await?;
        cargo.derive_delivery_progress(&history);

        if cargo.delivery().is_misdirected {
            warn!(%tracking_id, "cargo is off its itinerary");
        }
        info!(
            %tracking_id,
            transport_status = %cargo.delivery().transport_status,
            "handling event admitted"
        );

        self.cargos.store(cargo).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::Cargo;
    use crate::domain::{
        Itinerary, Leg, Location, RouteSpecification, TransportStatus, Voyage,
    };
    use crate::repository::{
        InMemoryCargoRepository, InMemoryHandlingEventRepository, InMemoryLocationRepository,
        InMemoryVoyageRepository,
    };
    use chrono::TimeZone;

    fn locode(code: &str) -> UnLocode {
        UnLocode::new(code).unwrap()
    }

    fn voyage_number(number: &str) -> VoyageNumber {
        VoyageNumber::new(number).unwrap()
    }

    fn ts(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, day, hour, 0, 0).unwrap()
    }

    struct Fixture {
        service: HandlingReportService,
        cargos: Arc<InMemoryCargoRepository>,
        tracking_id: TrackingId,
    }

    async fn fixture() -> Fixture {
        let cargos = Arc::new(InMemoryCargoRepository::new());
        let handling_events = Arc::new(InMemoryHandlingEventRepository::new());
        let locations = Arc::new(InMemoryLocationRepository::with_locations([
            Location::new(locode("CNSHA"), "Shanghai"),
            Location::new(locode("NLRTM"), "Rotterdam"),
            Location::new(locode("DEHAM"), "Hamburg"),
        ]));
        let voyages = Arc::new(InMemoryVoyageRepository::with_voyages([Voyage::new(
            voyage_number("V100"),
        )]));

        let spec =
            RouteSpecification::new(locode("CNSHA"), locode("NLRTM"), Some(ts(20, 0))).unwrap();
        let mut cargo = Cargo::new(TrackingId::random(), spec).unwrap();
        let itinerary = Itinerary::new(vec![Leg::new(
            voyage_number("V100"),
            locode("CNSHA"),
            locode("NLRTM"),
            ts(1, 8),
            ts(5, 8),
        )
        .unwrap()])
        .unwrap();
        cargo.assign_to_route(itinerary, &Default::default());
        let tracking_id = cargo.tracking_id().clone();
        cargos.store(cargo).await.unwrap();

        let service = HandlingReportService::new(
            Arc::clone(&cargos) as Arc<dyn CargoRepository>,
            handling_events,
            locations,
            voyages,
        );

        Fixture {
            service,
            cargos,
            tracking_id,
        }
    }

    fn report(
        fixture: &Fixture,
        event_type: HandlingEventType,
        code: &str,
        voyage: Option<&str>,
        completed: DateTime<Utc>,
    ) -> HandlingReport {
        HandlingReport {
            tracking_id: fixture.tracking_id.clone(),
            event_type,
            unlocode: locode(code),
            voyage_number: voyage.map(voyage_number),
            completion_time: completed,
        }
    }

    #[tokio::test]
    async fn test_admitted_event_rederives_delivery() {
        let f = fixture().await;

        f.service
            .register_handling_event(report(&f, HandlingEventType::Receive, "CNSHA", None, ts(1, 6)))
            .await
            .unwrap();
        f.service
            .register_handling_event(report(
                &f,
                HandlingEventType::Load,
                "CNSHA",
                Some("V100"),
                ts(1, 8),
            ))
            .await
            .unwrap();

        let cargo = f.cargos.find(&f.tracking_id).await.unwrap();
        assert_eq!(
            cargo.delivery().transport_status,
            TransportStatus::OnboardCarrier
        );
        assert_eq!(cargo.delivery().current_voyage, Some(voyage_number("V100")));
    }

    #[tokio::test]
    async fn test_unknown_cargo_is_rejected() {
        let f = fixture().await;
        let stray = TrackingId::random();
        let mut stray_report =
            report(&f, HandlingEventType::Receive, "CNSHA", None, ts(1, 6));
        stray_report.tracking_id = stray.clone();

        let result = f.service.register_handling_event(stray_report).await;

        assert_eq!(result, Err(Error::UnknownCargo(stray)));
    }

    #[tokio::test]
    async fn test_unknown_location_is_rejected() {
        let f = fixture().await;

        let result = f
            .service
            .register_handling_event(report(&f, HandlingEventType::Receive, "SEGOT", None, ts(1, 6)))
            .await;

        assert_eq!(result, Err(Error::UnknownLocation(locode("SEGOT"))));
    }

    #[tokio::test]
    async fn test_unknown_voyage_is_rejected() {
        let f = fixture().await;

        let result = f
            .service
            .register_handling_event(report(
                &f,
                HandlingEventType::Load,
                "CNSHA",
                Some("V999"),
                ts(1, 8),
            ))
            .await;

        assert_eq!(result, Err(Error::UnknownVoyage(voyage_number("V999"))));
    }

    #[tokio::test]
    async fn test_load_without_voyage_is_rejected() {
        let f = fixture().await;

        let result = f
            .service
            .register_handling_event(report(&f, HandlingEventType::Load, "CNSHA", None, ts(1, 8)))
            .await;

        assert_eq!(
            result,
            Err(Error::MissingVoyage(HandlingEventType::Load))
        );
    }

    #[tokio::test]
    async fn test_unexpected_event_is_admitted_and_marks_misdirection() {
        let f = fixture().await;

        // Hamburg is not on the plan: legal, admitted, misdirecting.
        f.service
            .register_handling_event(report(
                &f,
                HandlingEventType::Unload,
                "DEHAM",
                Some("V100"),
                ts(3, 8),
            ))
            .await
            .unwrap();

        let cargo = f.cargos.find(&f.tracking_id).await.unwrap();
        assert!(cargo.delivery().is_misdirected);
        assert_eq!(
            cargo.delivery().last_known_location,
            Some(locode("DEHAM"))
        );
    }

    #[tokio::test]
    async fn test_voyage_on_customs_report_is_validated_but_dropped() {
        let f = fixture().await;

        let rejected = f
            .service
            .register_handling_event(HandlingReport {
                voyage_number: Some(voyage_number("V999")),
                ..report(&f, HandlingEventType::Customs, "CNSHA", None, ts(2, 0))
            })
            .await;
        assert_eq!(rejected, Err(Error::UnknownVoyage(voyage_number("V999"))));

        f.service
            .register_handling_event(HandlingReport {
                voyage_number: Some(voyage_number("V100")),
                ..report(&f, HandlingEventType::Customs, "CNSHA", None, ts(2, 0))
            })
            .await
            .unwrap();

        let cargo = f.cargos.find(&f.tracking_id).await.unwrap();
        assert_eq!(cargo.delivery().current_voyage, None);
    }
}
