//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

/// Common arguments shared by multiple commands
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Path to the import graph document (defaults to imports.json)
    #[arg(long, value_name = "PATH", env = "ROUNDABOUT_GRAPH_FILE")]
    pub graph_file: Option<PathBuf>,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "ROUNDABOUT_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

impl CommonArgs {
    /// Get the graph file path, using the default if none provided
    pub fn get_graph_file(&self) -> PathBuf {
        self.graph_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(crate::constants::graph::DEFAULT_GRAPH_FILE))
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::RoundaboutError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(
        command: crate::cli::Commands,
    ) -> Result<Self, crate::error::RoundaboutError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::RoundaboutError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_args_default_graph_file() {
        let args = CommonArgs { graph_file: None };

        assert_eq!(
            args.get_graph_file(),
            PathBuf::from(crate::constants::graph::DEFAULT_GRAPH_FILE)
        );
    }

    #[test]
    fn test_common_args_explicit_graph_file() {
        let args = CommonArgs {
            graph_file: Some(PathBuf::from("/tmp/custom.json")),
        };

        assert_eq!(args.get_graph_file(), PathBuf::from("/tmp/custom.json"));
    }
}
