// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Entry Point
//!
//! This test suite uses proptest to verify the properties the derivation
//! engine guarantees for all inputs, not just the scenario fixtures.

mod property;
