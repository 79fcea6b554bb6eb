use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while turning a document into a task list.
///
/// Every variant is fatal for a run; callers report it once and stop.
#[derive(Debug, Error)]
pub enum BreakdownError {
    #[error("failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("section {section} not found")]
    SectionNotFound { section: u32 },

    #[error("failed to write output {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BreakdownError>;
