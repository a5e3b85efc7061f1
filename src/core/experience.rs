//! # Interview Experience Records
//!
//! The record type shared by every layer: the HTTP source deserializes it,
//! the core filters it, the TUI renders it.
//!
//! The backend is loose about its wire shape. Records may carry `id` or
//! Mongo's `_id`, identifiers may be strings or integers, and a verdict may
//! be a value we don't know about. All of that is absorbed here so the rest
//! of the crate only sees well-typed values.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque record identifier. Unique within one list response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ExperienceId(String);

impl ExperienceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for ExperienceId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for ExperienceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ExperienceId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => Self(s),
            RawId::Unsigned(n) => Self(n.to_string()),
            RawId::Signed(n) => Self(n.to_string()),
        })
    }
}

/// Outcome of an interview.
///
/// Unrecognized values are kept verbatim in `Other` so they can still be
/// displayed (with a neutral badge) instead of failing the whole response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Verdict {
    Selected,
    Rejected,
    Pending,
    Other(String),
}

impl Verdict {
    /// The verdicts offered by the Result filter, in display order.
    pub fn known() -> [Verdict; 3] {
        [Verdict::Selected, Verdict::Rejected, Verdict::Pending]
    }

    pub fn label(&self) -> &str {
        match self {
            Verdict::Selected => "Selected",
            Verdict::Rejected => "Rejected",
            Verdict::Pending => "Pending",
            Verdict::Other(s) => s,
        }
    }
}

impl From<String> for Verdict {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Selected" => Verdict::Selected,
            "Rejected" => Verdict::Rejected,
            "Pending" => Verdict::Pending,
            _ => Verdict::Other(value),
        }
    }
}

impl From<&str> for Verdict {
    fn from(value: &str) -> Self {
        Verdict::from(value.to_string())
    }
}

impl From<Verdict> for String {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Other(s) => s,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single shared interview experience.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewExperience {
    #[serde(alias = "_id")]
    pub id: ExperienceId,
    pub company: String,
    #[serde(default)]
    pub role: String,
    pub verdict: Verdict,
    #[serde(default)]
    pub candidate: String,
    #[serde(default)]
    pub content: String,
}
