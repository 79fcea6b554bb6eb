use serde::{Deserialize, Serialize};

/// A placeholder work item derived from one feature.
///
/// Only `id`, `name` and `description` carry information from the source
/// document. The remaining fields hold fixed defaults so the output can be
/// filled in by hand or by later tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// `T<feature index>.1`, 1-based.
    pub id: String,
    pub name: String,
    pub description: String,
    pub acceptance_criteria: Vec<String>,
    pub estimated_hours: u32,
    pub difficulty: Difficulty,
    pub dependencies: Vec<String>,
    pub priority: u32,
    pub status: TaskStatus,
}

/// How hard a task is expected to be.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

/// Progress of a task.
///
/// Generated tasks always start as `NotStarted`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}
