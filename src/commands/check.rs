//! Check command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::CheckConfig;
use crate::error::RoundaboutError;

impl FromCommand for CheckConfig {
    fn from_command(command: Commands) -> Result<Self, RoundaboutError> {
        match command {
            Commands::Check {
                module,
                common,
                format,
                display,
                include_suppressed,
            } => CheckConfig::builder()
                .with_module(module)
                .with_graph_file(common.get_graph_file())
                .with_format(format.format)
                .with_display(display)
                .with_include_suppressed(include_suppressed)
                .build(),
            _ => Err(RoundaboutError::ConfigurationError {
                message: "Invalid command type for CheckConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(CheckConfig);

/// Execute the check command for detecting package import cycles
pub fn execute_check_command(command: Commands) -> Result<()> {
    let config = CheckConfig::from_command(command)
        .wrap_err("Failed to parse check command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::check::CheckExecutor;
    CheckExecutor::execute(config)
}
