//! Domain models for the generated task list.
//!
//! - [`Project`]: Top-level record with summary counts, serialized as the output file.
//! - [`Feature`]: One `### N.M Title` block of the source section.
//! - [`Task`]: Placeholder work item synthesized for a feature. Every feature
//!   carries exactly one.

mod feature;
mod project;
mod task;

pub use feature::*;
pub use project::*;
pub use task::*;
