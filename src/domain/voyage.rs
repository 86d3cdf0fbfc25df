// Copyright (c) 2025 - Cowboy AI, Inc.
//! Voyages keyed by carrier voyage number

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Carrier-assigned voyage number, e.g. `V100` or `0301S`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoyageNumber(String);

impl VoyageNumber {
    pub fn new(number: impl Into<String>) -> Result<Self, Error> {
        let number = number.into();
        if number.is_empty() || !number.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::InvalidVoyageNumber(number));
        }
        Ok(Self(number))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VoyageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for VoyageNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Self::new(s)
    }
}

/// A registered voyage
///
/// Scheduling is a collaborator concern; the tracking core only needs the
/// number as a referential key for legs and load/unload events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voyage {
    pub number: VoyageNumber,
}

impl Voyage {
    pub fn new(number: VoyageNumber) -> Self {
        Self { number }
    }
}
