//! Overlap classification result.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Relationship of a prefix to a reference prefix.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OverlapStatus {
    /// Same network address and prefix length.
    Same,
    /// Contained in the reference prefix.
    Subset,
    /// Contains the reference prefix.
    Superset,
    /// No containment either way.
    Different,
}

impl OverlapStatus {
    /// The lowercase token printed by the command-line tool.
    pub fn as_str(&self) -> &'static str {
        match self {
            OverlapStatus::Same => "same",
            OverlapStatus::Subset => "subset",
            OverlapStatus::Superset => "superset",
            OverlapStatus::Different => "different",
        }
    }
}

impl fmt::Display for OverlapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
