use chrono::SecondsFormat;

use crate::models::{Feature, Project, Task};

/// Escape a value for a double-quoted scalar.
///
/// Backslashes are escaped first so the result can be unescaped unambiguously.
pub fn escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

fn quoted(s: &str) -> String {
    format!("\"{}\"", escape(s))
}

/// Render a project as indented YAML-like text.
///
/// Example output:
/// ```text
/// project:
///   name: "ALPS Project"
///   created_at: "2026-10-16T09:30:00Z"
///   total_features: 1
///   total_tasks: 1
///   estimated_days: 0.0
///
/// features:
///   - id: "F1"
///     name: "Signup"
///     tasks:
///       - id: "T1.1"
///         ...
/// ```
///
/// Acceptance criteria and dependencies are always written as `[]`.
pub fn render_yaml(project: &Project) -> String {
    let mut output = String::new();

    output.push_str("project:\n");
    output.push_str(&format!("  name: {}\n", quoted(&project.name)));
    output.push_str(&format!(
        "  created_at: {}\n",
        quoted(&project.created_at.to_rfc3339_opts(SecondsFormat::Secs, true))
    ));
    output.push_str(&format!("  total_features: {}\n", project.total_features));
    output.push_str(&format!("  total_tasks: {}\n", project.total_tasks));
    output.push_str(&format!("  estimated_days: {:.1}\n", project.estimated_days));
    output.push('\n');

    output.push_str("features:\n");
    for feature in &project.features {
        render_feature(&mut output, feature);
    }
    output
}

fn render_feature(output: &mut String, feature: &Feature) {
    output.push_str(&format!("  - id: {}\n", quoted(&feature.id)));
    output.push_str(&format!("    name: {}\n", quoted(&feature.name)));
    output.push_str("    tasks:\n");
    for task in &feature.tasks {
        render_task(output, task);
    }
}

fn render_task(output: &mut String, task: &Task) {
    output.push_str(&format!("      - id: {}\n", quoted(&task.id)));
    output.push_str(&format!("        name: {}\n", quoted(&task.name)));
    output.push_str(&format!("        description: {}\n", quoted(&task.description)));
    output.push_str("        acceptance_criteria: []\n");
    output.push_str(&format!("        estimated_hours: {}\n", task.estimated_hours));
    output.push_str(&format!("        difficulty: {}\n", quoted(task.difficulty.as_str())));
    output.push_str("        dependencies: []\n");
    output.push_str(&format!("        priority: {}\n", task.priority));
    output.push_str(&format!("        status: {}\n", quoted(task.status.as_str())));
}
