use serde::{Deserialize, Serialize};

use super::task::Task;

/// A sub-section of the feature specification.
///
/// Features are created by the segmenter with an empty task list and gain
/// their single synthesized [`Task`] when the project is assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Local identifier, e.g. `F3` for `### 6.3` inside section 6.
    pub id: String,
    /// Sub-heading title text.
    pub name: String,
    pub tasks: Vec<Task>,
    /// Text between this sub-heading and the next, formatting preserved.
    /// Only used to derive the task description; never serialized.
    #[serde(skip)]
    pub raw: String,
}

impl Feature {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tasks: Vec::new(),
            raw: String::new(),
        }
    }
}
