//! Graph command executor

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::GraphFormat;
use crate::config::GraphOptions;
use crate::error::RoundaboutError;
use crate::executors::CommandExecutor;
use crate::graph::{GraphLoader, SubgraphRenderer};
use crate::scanner::{find_cycle, package_subgraph};

pub struct GraphExecutor;

impl CommandExecutor for GraphExecutor {
    type Config = GraphOptions;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Rendering package import subgraph...\n",
            style("🎠").cyan()
        );

        let graph = GraphLoader::new().load(&config.graph_file)?;

        if !graph.contains_module(&config.package) {
            return Err(RoundaboutError::UnknownModule {
                module: config.package,
            }
            .into());
        }

        let subgraph = package_subgraph(&graph, &config.package);
        let cycle = find_cycle(&subgraph).unwrap_or_default();
        let renderer = SubgraphRenderer::new(true);

        let mut rendered = Vec::new();
        match config.format {
            GraphFormat::Dot => {
                renderer.render_dot(&config.package, &subgraph, &cycle, &mut rendered)?;
            }
            GraphFormat::Mermaid => {
                renderer.render_mermaid(&config.package, &subgraph, &cycle, &mut rendered)?;
            }
        }

        match &config.output {
            Some(path) => {
                std::fs::write(path, &rendered).into_diagnostic()?;
                eprintln!(
                    "{} Wrote subgraph to {}",
                    style("✓").green(),
                    style(path.display()).bold()
                );
            }
            None => {
                let rendered = String::from_utf8(rendered).into_diagnostic()?;
                print!("{rendered}");
            }
        }

        Ok(())
    }
}
