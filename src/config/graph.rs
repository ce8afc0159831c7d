//! Graph command configuration

use std::path::PathBuf;

use crate::cli::GraphFormat;

/// Configuration for the graph command
#[derive(Debug, Clone)]
pub struct GraphOptions {
    /// Package whose child subgraph to render
    pub package: String,
    /// Path to the import graph document
    pub graph_file: PathBuf,
    /// Graph output format
    pub format: GraphFormat,
    /// Output file (stdout if None)
    pub output: Option<PathBuf>,
}

impl GraphOptions {
    pub fn builder() -> GraphOptionsBuilder {
        GraphOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct GraphOptionsBuilder {
    package: Option<String>,
    graph_file: Option<PathBuf>,
    format: Option<GraphFormat>,
    output: Option<Option<PathBuf>>,
}

impl GraphOptionsBuilder {
    pub fn new() -> Self {
        Self {
            package: None,
            graph_file: None,
            format: None,
            output: None,
        }
    }

    pub fn with_package(mut self, package: String) -> Self {
        self.package = Some(package);
        self
    }

    pub fn with_graph_file(mut self, graph_file: PathBuf) -> Self {
        self.graph_file = Some(graph_file);
        self
    }

    pub fn with_format(mut self, format: GraphFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }
}

impl crate::common::ConfigBuilder for GraphOptionsBuilder {
    type Config = GraphOptions;

    fn build(self) -> Result<Self::Config, crate::error::RoundaboutError> {
        Ok(GraphOptions {
            package: self.package.ok_or_else(|| {
                crate::error::RoundaboutError::ConfigurationError {
                    message: "Missing required field: package".to_string(),
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
            output: self.output.ok_or_else(|| {
                crate::error::RoundaboutError::ConfigurationError {
                    message: "Missing required field: output".to_string(),
                }
            })?,
        })
    }
}
