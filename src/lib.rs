//! Break the feature section of an ALPS planning document into a task list.
//!
//! The crate is a straight pipeline:
//!
//! 1. [`parser::read_document`] loads the source file.
//! 2. [`parser::locate_section`] isolates the target `## Section N` block.
//! 3. [`parser::segment_features`] splits it on `### N.M Title` headings.
//! 4. [`planner::synthesize_tasks`] and [`planner::assemble_project`] build the
//!    [`models::Project`] record.
//! 5. [`render::render`] turns the record into YAML-like text or JSON.
//!
//! [`pipeline::process`] runs all of the above and writes the output file.

pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod planner;
pub mod render;

pub use config::{OutputFormat, ProcessConfig};
pub use error::{BreakdownError, Result};

/// Program name used in version output.
pub const NAME: &str = "alps-breakdown";

/// Semantic version of this build.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
