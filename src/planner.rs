//! Task synthesis and project assembly.

use chrono::{DateTime, SubsecRound, Utc};

use crate::models::{Difficulty, Feature, Project, Task, TaskStatus, PROJECT_NAME};

/// Produce one placeholder task per feature, in the same order.
///
/// The task for the feature at position `i` (0-based) gets id `T{i+1}.1`.
pub fn synthesize_tasks(features: &[Feature]) -> Vec<Task> {
    features
        .iter()
        .enumerate()
        .map(|(i, feature)| Task {
            id: format!("T{}.1", i + 1),
            name: format!("Implement {}", feature.name),
            description: feature.raw.trim().to_string(),
            acceptance_criteria: Vec::new(),
            estimated_hours: 0,
            difficulty: Difficulty::Medium,
            dependencies: Vec::new(),
            priority: 1,
            status: TaskStatus::NotStarted,
        })
        .collect()
}

/// Build the project record, stamped with the current time.
pub fn assemble_project(features: Vec<Feature>, tasks: Vec<Task>) -> Project {
    assemble_project_at(features, tasks, Utc::now())
}

/// Build the project record with an explicit creation time.
///
/// `tasks[i]` becomes the only task of `features[i]`; any tasks already on a
/// feature are replaced.
///
/// # Panics
///
/// Panics if `features` and `tasks` differ in length. [`synthesize_tasks`]
/// always returns a list matching its input.
pub fn assemble_project_at(
    mut features: Vec<Feature>,
    tasks: Vec<Task>,
    created_at: DateTime<Utc>,
) -> Project {
    assert_eq!(
        features.len(),
        tasks.len(),
        "every feature needs exactly one task"
    );

    let total_features = features.len();
    let total_tasks = tasks.len();

    for (feature, task) in features.iter_mut().zip(tasks) {
        feature.tasks = vec![task];
    }

    tracing::info!(
        "Assembled project with {} features and {} tasks",
        total_features,
        total_tasks
    );

    Project {
        name: PROJECT_NAME.to_string(),
        created_at: created_at.trunc_subsecs(0),
        total_features,
        total_tasks,
        estimated_days: 0.0,
        features,
    }
}
