use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid import graph document '{file}'")]
#[diagnostic(
    code(roundabout::graph_parse_error),
    help("Check the JSON syntax near the highlighted position")
)]
pub struct GraphParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: serde_json::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum RoundaboutError {
    #[error("Module '{module}' is not present in the import graph")]
    #[diagnostic(
        code(roundabout::unknown_module),
        help("Check the module name and that the graph document covers it")
    )]
    UnknownModule { module: String },

    #[error("Failed to read import graph file '{path}'")]
    #[diagnostic(
        code(roundabout::graph_read_error),
        help("Check if the file exists and you have read permissions")
    )]
    GraphReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    GraphParseError(Box<GraphParseError>),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(roundabout::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(roundabout::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(roundabout::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(roundabout::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}
