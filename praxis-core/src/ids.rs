use rand::RngExt;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A staff member identifier, e.g. "EMP-001".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaffId(String);

impl StaffId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StaffId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for StaffId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for StaffId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for StaffId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A client identifier, e.g. "CLT-505".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(String);

impl ClientId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh client id with a random numeric suffix.
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        Self(format!("CLT-{}", rng.random_range(0..1000)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for ClientId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ClientId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// An engagement identifier in the contract register format
/// "ENG-<year>-<seq>", e.g. "ENG-2024-001".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EngagementId(String);

impl EngagementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build an id from its year and sequence components. The sequence is
    /// zero-padded to three digits.
    pub fn from_parts(year: i32, seq: u32) -> Self {
        Self(format!("ENG-{}-{:03}", year, seq))
    }

    /// The sequence component, if the id carries the register format for the
    /// given year.
    pub fn seq_for_year(&self, year: i32) -> Option<u32> {
        self.0
            .strip_prefix(&format!("ENG-{}-", year))
            .and_then(|seq| seq.parse().ok())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EngagementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for EngagementId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for EngagementId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for EngagementId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A time entry identifier, e.g. "TE-1001".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh entry id with a random numeric suffix.
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        Self(format!("TE-{}", rng.random_range(0..10000)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for EntryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for EntryId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for EntryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}
