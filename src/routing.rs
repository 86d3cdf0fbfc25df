// Copyright (c) 2025 - Cowboy AI, Inc.
//! Routing collaborator interface
//!
//! Pathfinding is external: a routing collaborator proposes candidate
//! itineraries for a route specification, and the core only ever evaluates
//! them through [`crate::domain::Itinerary::satisfies`]. The core never
//! generates routes.

use async_trait::async_trait;

use crate::domain::{Itinerary, RouteSpecification};
use crate::errors::Result;

/// External route-finding collaborator
#[async_trait]
pub trait RoutingService: Send + Sync {
    /// Candidate itineraries for the specification; may legitimately be empty
    async fn fetch_routes_for_specification(
        &self,
        route_specification: &RouteSpecification,
    ) -> Result<Vec<Itinerary>>;
}
