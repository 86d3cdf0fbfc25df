// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! Properties of the delivery derivation engine that must hold for every
//! (route specification, itinerary, handling history) triple.

mod derivation;
