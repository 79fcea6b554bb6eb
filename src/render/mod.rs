//! Output rendering for a [`Project`].

mod json;
mod yaml;

pub use json::render_json;
pub use yaml::{escape, render_yaml};

use crate::config::OutputFormat;
use crate::error::Result;
use crate::models::Project;

/// Render a project in the requested format.
pub fn render(project: &Project, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => Ok(render_yaml(project)),
        OutputFormat::Json => render_json(project),
    }
}
