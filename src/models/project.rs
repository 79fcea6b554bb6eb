use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::feature::Feature;

/// Name given to every generated project.
pub const PROJECT_NAME: &str = "ALPS Project";

/// The record written to the output file.
///
/// Built once per run by [`crate::planner::assemble_project`] and not
/// modified afterwards. Field order here is the serialized order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    /// Assembly time, truncated to whole seconds.
    pub created_at: DateTime<Utc>,
    pub total_features: usize,
    pub total_tasks: usize,
    /// Always `0.0` until estimates are derived from task hours.
    pub estimated_days: f64,
    pub features: Vec<Feature>,
}
