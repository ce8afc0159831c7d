//! Graph command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::GraphOptions;
use crate::error::RoundaboutError;

impl FromCommand for GraphOptions {
    fn from_command(command: Commands) -> Result<Self, RoundaboutError> {
        match command {
            Commands::Graph {
                package,
                common,
                format,
                output,
            } => GraphOptions::builder()
                .with_package(package)
                .with_graph_file(common.get_graph_file())
                .with_format(format)
                .with_output(output)
                .build(),
            _ => Err(RoundaboutError::ConfigurationError {
                message: "Invalid command type for GraphOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(GraphOptions);

/// Execute the graph command for rendering a package subgraph
pub fn execute_graph_command(command: Commands) -> Result<()> {
    let config = GraphOptions::from_command(command)
        .wrap_err("Failed to parse graph command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::graph::GraphExecutor;
    GraphExecutor::execute(config)
}
