//! # Import Graph Module
//!
//! This module provides the import graph provider consumed by the scanner,
//! the loader that materializes it from a serialized graph document, and a
//! renderer for package-level subgraphs.
//!
//! ## Components
//!
//! ### Graph Queries
//! - **ImportGraph**: The module-level import graph with package queries
//!   (child enumeration, aggregated edge existence, module count)
//! - **ImportGraphBuilder**: Incremental construction
//!
//! ### Loading
//! - **GraphLoader**: Deserializes a pre-computed graph document and applies
//!   the constructor-time edge filter predicate
//!
//! ### Rendering
//! - **SubgraphRenderer**: DOT and Mermaid dumps of one package's subgraph
//!
//! ## Example
//!
//! ```
//! use import_roundabout::graph::ImportGraph;
//!
//! let graph = ImportGraph::builder()
//!     .add_module("app")
//!     .add_import("app.web", "app.core")
//!     .build();
//!
//! assert_eq!(graph.find_children("app").len(), 2);
//! assert!(graph.direct_import_exists("app.core", "app.web", false));
//! ```

mod import_graph;
mod loader;
mod renderer;

pub use import_graph::{ImportGraph, ImportGraphBuilder};
pub use loader::{EdgeFilter, GraphDocument, GraphLoader, ImportRecord};
pub use renderer::SubgraphRenderer;
