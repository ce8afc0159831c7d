//! # Roundabout - Detect Circular Imports Among a Module's Packages
//!
//! Roundabout is a tool for finding circular imports in a module's package
//! tree. It consumes a pre-computed module-level import graph, checks every
//! package scope for cycles among its direct children, and reports the
//! first cycle found with a human-readable path.
//!
//! ## Main Components
//!
//! - **Graph**: The import graph provider, its loader, and a subgraph
//!   renderer
//! - **Scanner**: Walks the package tree and runs the cycle search
//! - **Reports**: Generates human-readable and machine-readable reports
//!
//! ## Usage
//!
//! ### Example: Scanning a Module for Import Cycles
//!
//! ```no_run
//! use std::path::Path;
//!
//! use import_roundabout::graph::GraphLoader;
//! use import_roundabout::reports::{HumanReportGenerator, ReportGenerator};
//! use import_roundabout::scanner::{PackageScanner, ScanOutcome};
//!
//! # fn main() -> miette::Result<()> {
//! // Step 1: Load the pre-computed import graph
//! let loader = GraphLoader::new();
//! let graph = loader
//!     .load(Path::new("imports.json"))
//!     .map_err(miette::Report::new)?;
//!
//! // Step 2: Scan every package scope under the root module
//! let scanner = PackageScanner::new();
//! let outcome = scanner
//!     .scan(&graph, "app", None)
//!     .map_err(miette::Report::new)?;
//!
//! // Step 3: Report the outcome
//! match &outcome {
//!     ScanOutcome::CycleFound(cycle) => {
//!         println!("⚠️  Cycle in {}: {}", cycle.package(), cycle.path());
//!     }
//!     ScanOutcome::Clean { module_count } => {
//!         println!("✅ {module_count} modules, no cycles!");
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Building a Graph in Memory
//!
//! ```
//! use import_roundabout::graph::ImportGraph;
//! use import_roundabout::scanner::PackageScanner;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let graph = ImportGraph::builder()
//!     .add_module("app")
//!     .add_import("app.web", "app.core")
//!     .build();
//!
//! let outcome = PackageScanner::new().scan(&graph, "app", None)?;
//! assert!(outcome.is_clean());
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod error;
pub mod executors;
pub mod graph;
pub mod progress;
pub mod reports;
pub mod scanner;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();

    execute_command(cli.command)
}
