//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Player identifier - newtype for type safety.
///
/// The inner integer is private to ensure all construction goes through
/// the defined constructors. Matches the upstream API's numeric `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(u32);

impl PlayerId {
    /// Create a new PlayerId.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw numeric identifier.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PlayerId {
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}

/// Club identifier - newtype for type safety.
///
/// Clubs are only a grouping key for the per-club cap; no other attributes
/// are carried. Matches the upstream API's numeric `team`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClubId(u32);

impl ClubId {
    /// Create a new ClubId.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw numeric identifier.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ClubId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ClubId {
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}
