// Copyright (c) 2025 - Cowboy AI, Inc.
//! Locations keyed by UN/LOCODE

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// United Nations location code: two country letters followed by three
/// alphanumeric place characters, e.g. `CNHKG` or `NLRTM`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnLocode(String);

impl UnLocode {
    pub fn new(code: impl Into<String>) -> Result<Self, Error> {
        let code = code.into();
        let well_formed = code.is_ascii()
            && code.len() == 5
            && code[..2].chars().all(|c| c.is_ascii_uppercase())
            && code[2..]
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit());
        if !well_formed {
            return Err(Error::InvalidUnLocode(code));
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnLocode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UnLocode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Self::new(s)
    }
}

/// A known port or terminal
///
/// The tracking core treats locations as opaque registry entries; geography
/// belongs to the collaborator that populates the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub unlocode: UnLocode,
    pub name: String,
}

impl Location {
    pub fn new(unlocode: UnLocode, name: impl Into<String>) -> Self {
        Self {
            unlocode,
            name: name.into(),
        }
    }
}
