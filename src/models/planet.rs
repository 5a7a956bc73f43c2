//! Planet reference records.

use serde::{Deserialize, Serialize};

/// A habitable-planet reference record.
///
/// Planets are read-only from this core's perspective: scheduling validates
/// against them but never creates or mutates them. The Kepler name is the
/// unique identifier and the scheduling target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub kepler_name: String,
}

impl Planet {
    pub fn new(kepler_name: impl Into<String>) -> Self {
        Self {
            kepler_name: kepler_name.into(),
        }
    }
}
