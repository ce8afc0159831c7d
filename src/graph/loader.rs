//! Loading the pre-computed import graph document

use std::path::Path;

use miette::NamedSource;
use serde::Deserialize;

use super::import_graph::{ImportGraph, ImportGraphBuilder};
use crate::constants::graph::SUPPRESS_ANNOTATION;
use crate::error::{GraphParseError, RoundaboutError};

/// Serialized form of the import graph
///
/// `modules` lists every module known to the graph; `imports` lists the
/// direct-import edges. Edge endpoints missing from `modules` are inserted
/// implicitly when the graph is built.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub modules: Vec<String>,
    #[serde(default)]
    pub imports: Vec<ImportRecord>,
}

/// One direct-import edge in the serialized graph
#[derive(Debug, Clone, Deserialize)]
pub struct ImportRecord {
    pub importer: String,
    pub imported: String,
    /// Source-level annotation carried over from the scanning step, if any
    #[serde(default)]
    pub annotation: Option<String>,
}

/// Predicate deciding whether an import record enters the graph
pub type EdgeFilter = Box<dyn Fn(&ImportRecord) -> bool>;

/// Loads [`ImportGraph`]s from serialized graph documents
///
/// The edge filter is fixed at construction time; the default drops records
/// annotated as suppressed.
pub struct GraphLoader {
    filter: EdgeFilter,
}

impl Default for GraphLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphLoader {
    /// Create a loader with the default suppression filter
    pub fn new() -> Self {
        Self::with_edge_filter(|record: &ImportRecord| {
            record.annotation.as_deref() != Some(SUPPRESS_ANNOTATION)
        })
    }

    /// Create a loader with a custom edge filter predicate
    pub fn with_edge_filter(filter: impl Fn(&ImportRecord) -> bool + 'static) -> Self {
        Self {
            filter: Box::new(filter),
        }
    }

    /// Read and parse a graph document, then build the import graph
    pub fn load(&self, path: &Path) -> Result<ImportGraph, RoundaboutError> {
        let content =
            std::fs::read_to_string(path).map_err(|source| RoundaboutError::GraphReadError {
                path: path.to_path_buf(),
                source,
            })?;

        let document: GraphDocument = serde_json::from_str(&content).map_err(|source| {
            let file = path.display().to_string();
            let span = span_for(&content, &source);
            RoundaboutError::GraphParseError(Box::new(GraphParseError {
                file: file.clone(),
                source_code: NamedSource::new(file, content.clone()),
                span,
                source,
            }))
        })?;

        Ok(self.build_graph(document))
    }

    /// Build an import graph from an already-parsed document
    pub fn build_graph(&self, document: GraphDocument) -> ImportGraph {
        let mut builder = ImportGraphBuilder::new();
        for module in &document.modules {
            builder = builder.add_module(module);
        }
        for record in &document.imports {
            if (self.filter)(record) {
                builder = builder.add_import(&record.importer, &record.imported);
            }
        }
        builder.build()
    }
}

/// Map a serde_json line/column position onto a byte span in the source
fn span_for(content: &str, error: &serde_json::Error) -> Option<miette::SourceSpan> {
    if error.line() == 0 {
        return None;
    }
    let offset: usize = content
        .lines()
        .take(error.line() - 1)
        .map(|line| line.len() + 1)
        .sum::<usize>()
        + error.column().saturating_sub(1);
    Some((offset.min(content.len()), 1).into())
}
