// Copyright (c) 2025 - Cowboy AI, Inc.
//! Tracking identity for cargo aggregates

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::Error;

/// Unique identifier for a cargo
///
/// Assigned once at booking and immutable afterwards; every collaborator keys
/// its records by this token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackingId(String);

impl TrackingId {
    /// Accepts any non-empty token. Storage collaborators rehydrate persisted
    /// ids through this constructor.
    pub fn new(id: impl Into<String>) -> Result<Self, Error> {
        let id = id.into();
        if id.is_empty() {
            return Err(Error::InvalidTrackingId(
                "tracking id cannot be empty".into(),
            ));
        }
        Ok(Self(id))
    }

    /// Generate a fresh identity for a newly booked cargo (UUID v7 for time
    /// ordering)
    pub fn random() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TrackingId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Self::new(s)
    }
}
