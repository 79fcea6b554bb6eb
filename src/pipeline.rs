//! End-to-end processing of one document.

use std::path::{Path, PathBuf};

use crate::config::ProcessConfig;
use crate::error::{BreakdownError, Result};
use crate::models::Project;
use crate::parser::{
    locate_section, read_document, segment_features, validate_features, ValidationIssue,
};
use crate::planner::{assemble_project, synthesize_tasks};
use crate::render::render;

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutcome {
    pub output: PathBuf,
    pub total_features: usize,
    pub total_tasks: usize,
}

/// Result of checking a document's feature section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub total_features: usize,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Locate and segment the feature section of `input` and report structural issues.
pub fn validate(input: &Path, section: u32) -> Result<ValidationReport> {
    let content = read_document(input)?;
    let section_text = locate_section(&content, section)?;
    let features = segment_features(section_text, section);
    Ok(ValidationReport {
        total_features: features.len(),
        issues: validate_features(&features),
    })
}

/// Parse the document at `config.input` into a project record.
///
/// `report` receives the progress lines when `config.verbose` is set.
pub fn build_project(config: &ProcessConfig, report: &mut dyn FnMut(&str)) -> Result<Project> {
    if config.verbose {
        report(&format!("Processing: {}", config.input.display()));
        report(&format!("Extracting Section {}...", config.section));
    }

    let content = read_document(&config.input)?;
    let section_text = locate_section(&content, config.section)?;

    if config.verbose {
        report("Analyzing features...");
    }

    let features = segment_features(section_text, config.section);
    for issue in validate_features(&features) {
        tracing::warn!("Section {}: {}", config.section, issue);
    }

    let tasks = synthesize_tasks(&features);
    Ok(assemble_project(features, tasks))
}

/// Run the whole pipeline and write the rendered output.
///
/// Nothing is written unless every earlier stage succeeded. An existing file
/// at the output path is overwritten.
pub fn process(config: &ProcessConfig, report: &mut dyn FnMut(&str)) -> Result<ProcessOutcome> {
    let project = build_project(config, report)?;

    if config.verbose {
        report("Generating output...");
    }

    let rendered = render(&project, config.format)?;
    std::fs::write(&config.output, rendered).map_err(|source| BreakdownError::FileWrite {
        path: config.output.clone(),
        source,
    })?;

    tracing::info!(
        "Wrote {} output to {}",
        config.format.as_str(),
        config.output.display()
    );

    Ok(ProcessOutcome {
        output: config.output.clone(),
        total_features: project.total_features,
        total_tasks: project.total_tasks,
    })
}
