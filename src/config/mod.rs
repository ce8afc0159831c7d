//! # Configuration Module
//!
//! This module provides configuration structures for the roundabout
//! commands. Each command has its own config module with builder patterns
//! for easy construction.
//!
//! ## Command Configurations
//!
//! - **CheckConfig**: Configuration for the `check` command to detect cycles
//! - **GraphOptions**: Configuration for the `graph` command to render a
//!   package subgraph
//!
//! ## Example
//!
//! ```
//! use import_roundabout::cli::OutputFormat;
//! use import_roundabout::common::ConfigBuilder;
//! use import_roundabout::config::CheckConfig;
//!
//! let config = CheckConfig::builder()
//!     .with_module("app".to_string())
//!     .with_graph_file("imports.json".into())
//!     .with_format(OutputFormat::Human)
//!     .with_display(false)
//!     .with_include_suppressed(false)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.module, "app");
//! ```

pub mod check;
pub mod graph;

pub use check::CheckConfig;
pub use graph::GraphOptions;
