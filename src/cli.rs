use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{CommonArgs, FormatArgs};

#[derive(Parser)]
#[command(
    name = "roundabout",
    about = "🎠 Detect circular imports among a module's packages",
    long_about = "roundabout walks the package tree of a module and checks every package scope \
                  for circular imports among its direct children. It consumes a pre-computed \
                  module-level import graph and reports the first cycle found with a \
                  human-readable path.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Take a spin through the package tree looking for import cycles
    ///
    /// Scans every package scope under the given root module. Each package's
    /// direct children form a small dependency subgraph; the first cycle
    /// found in any of them stops the scan and is reported with its full
    /// path. A clean run reports the total module count.
    #[command(
        long_about = "Scan a module's package tree for circular imports. The import graph is \
                      read from a pre-computed graph document; for each package, the aggregated \
                      imports among its direct children are searched depth-first for a cycle. \
                      The scan stops at the first cycle found and exits non-zero; a clean scan \
                      exits zero with the total module count."
    )]
    Check {
        /// Root module to scan
        #[arg(value_name = "MODULE", env = "ROUNDABOUT_MODULE")]
        module: String,

        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        /// Write a DOT dump of the offending package subgraph on detection
        #[arg(long, env = "ROUNDABOUT_DISPLAY")]
        display: bool,

        /// Include import edges annotated as suppressed
        #[arg(long, env = "ROUNDABOUT_INCLUDE_SUPPRESSED")]
        include_suppressed: bool,
    },

    /// Draw one package's import subgraph
    ///
    /// Renders the dependency subgraph formed by a package's direct children
    /// in a text-based graph format. Useful for understanding why a cycle
    /// exists or documenting package structure.
    #[command(
        long_about = "Generate a text-based visualization of the import subgraph among one \
                      package's direct children, in Graphviz DOT or Mermaid format. Output goes \
                      to stdout unless --output is given."
    )]
    Graph {
        /// Package whose child subgraph to render
        #[arg(value_name = "PACKAGE", env = "ROUNDABOUT_PACKAGE")]
        package: String,

        #[command(flatten)]
        common: CommonArgs,

        /// Graph format
        #[arg(
            short,
            long,
            value_enum,
            default_value = "dot",
            env = "ROUNDABOUT_GRAPH_FORMAT"
        )]
        format: GraphFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "ROUNDABOUT_OUTPUT")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum GraphFormat {
    Dot,
    Mermaid,
}
