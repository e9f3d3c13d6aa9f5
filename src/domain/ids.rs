//! Domain identifier types
//!
//! Newtype wrappers for the two integer identifiers the system deals with,
//! so an OpenStreetMap node ID can never be passed where a POS ID is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// OpenStreetMap node identifier
///
/// Opaque to the import pipeline; it is only ever formatted into the
/// upstream URL and into error messages.
///
/// # Examples
///
/// ```
/// use campus_coffee::domain::ids::NodeId;
/// use std::str::FromStr;
///
/// let node_id = NodeId::from_str("5589879349").unwrap();
/// assert_eq!(node_id.value(), 5589879349);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(i64);

impl NodeId {
    /// Creates a new NodeId
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw node ID
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NodeId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<i64> for NodeId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// POS identifier assigned by the persistence layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PosId(i64);

impl PosId {
    /// Creates a new PosId
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw POS ID
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PosId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PosId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<i64> for PosId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}
