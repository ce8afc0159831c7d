//! # Package Cycle Scanning Module
//!
//! This module implements the core check: walking the package tree under a
//! root module and searching each package's child subgraph for import
//! cycles.
//!
//! ## Algorithm
//!
//! The scanner keeps a worklist of package names, seeded with the root
//! module. For each package it builds an ephemeral subgraph whose nodes are
//! the package's direct children and whose edges are the aggregated
//! ("as-packages") direct imports among them, then runs a depth-first
//! search with back-edge detection over that subgraph. An acyclic package
//! pushes its children (sorted) and the walk continues; the first cycle
//! found stops the whole scan.
//!
//! ## Key Components
//!
//! - **PackageScanner**: Runs the worklist traversal and cycle search
//! - **ScanOutcome**: Clean bill of health or the first cycle found
//! - **PackageCycle**: A detected cycle with its closed edge walk
//!
//! ## Example
//!
//! ```
//! use import_roundabout::graph::ImportGraph;
//! use import_roundabout::scanner::{PackageScanner, ScanOutcome};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let graph = ImportGraph::builder()
//!     .add_module("app")
//!     .add_import("app.web", "app.core")
//!     .add_import("app.core", "app.web")
//!     .build();
//!
//! let scanner = PackageScanner::new();
//! match scanner.scan(&graph, "app", None)? {
//!     ScanOutcome::CycleFound(cycle) => {
//!         assert_eq!(cycle.path(), "app.core -> app.web -> app.core");
//!     }
//!     ScanOutcome::Clean { .. } => unreachable!("the graph has a cycle"),
//! }
//! # Ok(())
//! # }
//! ```

mod scanner_impl;

pub use scanner_impl::{CycleEdge, PackageCycle, PackageScanner, ScanOutcome, package_subgraph};
pub(crate) use scanner_impl::find_cycle;
