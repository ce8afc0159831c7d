//! Command implementations for the roundabout CLI
//!
//! This module contains the implementations for each CLI command:
//! - check: Take a spin through the package tree looking for import cycles
//! - graph: Draw one package's import subgraph

pub mod check;
pub mod graph;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Check { .. } => check::execute_check_command(command),
        Commands::Graph { .. } => graph::execute_graph_command(command),
    }
}
