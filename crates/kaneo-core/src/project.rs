//! Project type and its aggregate statistics.

use serde::{Deserialize, Serialize};

use crate::de::null_as_default;

/// Aggregate task counts reported by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStatistics {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_tasks: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub completion_percentage: f64,
}

/// A project inside a workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub statistics: ProjectStatistics,
}

impl Project {
    /// Completion percentage clamped to `[0, 100]`.
    pub fn completion(&self) -> f64 {
        let pct = self.statistics.completion_percentage;
        if pct.is_nan() { 0.0 } else { pct.clamp(0.0, 100.0) }
    }

    pub fn total_tasks(&self) -> u64 {
        self.statistics.total_tasks
    }
}
