// Copyright (c) 2025 - Cowboy AI, Inc.
//! Application services
//!
//! Impure shell around the pure domain: services coordinate the storage
//! collaborators, stamp registration times, and trigger re-derivation.
//! Cross-cutting instrumentation (spans, timing) is applied here, at
//! composition level, rather than inside domain code.

pub mod handling;

pub use handling::{HandlingEventFactory, HandlingReport, HandlingReportService, HandlingService};
