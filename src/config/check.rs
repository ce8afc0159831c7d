//! Check command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;

/// Configuration for the check command
///
/// This struct contains all options for scanning a module's package tree
/// for import cycles.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Root module to scan
    pub module: String,
    /// Path to the import graph document
    pub graph_file: PathBuf,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether to dump the offending package subgraph on detection
    pub display: bool,
    /// Whether to include import edges annotated as suppressed
    pub include_suppressed: bool,
}

impl CheckConfig {
    pub fn builder() -> CheckConfigBuilder {
        CheckConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct CheckConfigBuilder {
    module: Option<String>,
    graph_file: Option<PathBuf>,
    format: Option<OutputFormat>,
    display: Option<bool>,
    include_suppressed: Option<bool>,
}

impl CheckConfigBuilder {
    pub fn new() -> Self {
        Self {
            module: None,
            graph_file: None,
            format: None,
            display: None,
            include_suppressed: None,
        }
    }

    pub fn with_module(mut self, module: String) -> Self {
        self.module = Some(module);
        self
    }

    pub fn with_graph_file(mut self, graph_file: PathBuf) -> Self {
        self.graph_file = Some(graph_file);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_display(mut self, display: bool) -> Self {
        self.display = Some(display);
        self
    }

    pub fn with_include_suppressed(mut self, include_suppressed: bool) -> Self {
        self.include_suppressed = Some(include_suppressed);
        self
    }
}

impl crate::common::ConfigBuilder for CheckConfigBuilder {
    type Config = CheckConfig;

    fn build(self) -> Result<Self::Config, crate::error::RoundaboutError> {
        Ok(CheckConfig {
            module: self.module.ok_or_else(|| {
                crate::error::RoundaboutError::ConfigurationError {
                    message: "Missing required field: module".to_string(),
                }
            })?,
            graph_file: self.graph_file.ok_or_else(|| {
                crate::error::RoundaboutError::ConfigurationError {
                    message: "Missing required field: graph_file".to_string(),
                }
            })?,
            format: self.format.ok_or_else(|| {
                crate::error::RoundaboutError::ConfigurationError {
                    message: "Missing required field: format".to_string(),
                }
            })?,
            display: self.display.ok_or_else(|| {
                crate::error::RoundaboutError::ConfigurationError {
                    message: "Missing required field: display".to_string(),
                }
            })?,
            include_suppressed: self.include_suppressed.ok_or_else(|| {
                crate::error::RoundaboutError::ConfigurationError {
                    message: "Missing required field: include_suppressed".to_string(),
                }
            })?,
        })
    }
}
