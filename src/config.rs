//! Run configuration for the processing pipeline.
//!
//! The CLI fills a [`ProcessConfig`] from its arguments. Two defaults can be
//! overridden from the environment:
//! - `ALPS_BREAKDOWN_OUTPUT` - output file path (default: `tasks.yaml`)
//! - `ALPS_BREAKDOWN_FORMAT` - output format, `yaml` or `json` (default: `yaml`)

use std::path::PathBuf;

use clap::ValueEnum;

/// Environment variable overriding the default output path.
pub const OUTPUT_ENV: &str = "ALPS_BREAKDOWN_OUTPUT";

/// Environment variable overriding the default output format.
pub const FORMAT_ENV: &str = "ALPS_BREAKDOWN_FORMAT";

pub const DEFAULT_OUTPUT: &str = "tasks.yaml";

/// The feature-level specification lives in section 6 of an ALPS document.
pub const DEFAULT_SECTION: u32 = 6;

/// Serialization format for the generated task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented YAML-like text
    #[default]
    Yaml,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
        }
    }
}

/// Everything one `process` run needs to know.
#[derive(Debug, Clone)]
pub struct ProcessConfig {
    /// Source document.
    pub input: PathBuf,
    /// Destination file, overwritten if it exists.
    pub output: PathBuf,
    pub format: OutputFormat,
    /// Emit progress lines while processing.
    pub verbose: bool,
    /// Number of the `##` section holding the features.
    pub section: u32,
}

impl ProcessConfig {
    /// Create a config for `input` with every other field at its default.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            format: OutputFormat::default(),
            verbose: false,
            section: DEFAULT_SECTION,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_section(mut self, section: u32) -> Self {
        self.section = section;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProcessConfig::new("doc.md");
        assert_eq!(config.input, PathBuf::from("doc.md"));
        assert_eq!(config.output, PathBuf::from("tasks.yaml"));
        assert_eq!(config.format, OutputFormat::Yaml);
        assert!(!config.verbose);
        assert_eq!(config.section, 6);
    }

    #[test]
    fn test_format_parses_case_insensitively() {
        assert_eq!(OutputFormat::from_str("JSON", true), Ok(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("Yaml", true), Ok(OutputFormat::Yaml));
        assert!(OutputFormat::from_str("toml", true).is_err());
    }
}
