//! Check command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::OutputFormat;
use crate::config::CheckConfig;
use crate::executors::CommandExecutor;
use crate::graph::{GraphLoader, ImportGraph, SubgraphRenderer};
use crate::progress::ProgressReporter;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};
use crate::scanner::{PackageCycle, PackageScanner, ScanOutcome, package_subgraph};

pub struct CheckExecutor;

impl CommandExecutor for CheckExecutor {
    type Config = CheckConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Checking for package import cycles...\n",
            style("🎠").cyan()
        );

        // Create progress reporter if we're in an interactive terminal
        let mut progress = if console::Term::stderr().is_term() {
            Some(ProgressReporter::new())
        } else {
            None
        };

        let loader = if config.include_suppressed {
            GraphLoader::with_edge_filter(|_| true)
        } else {
            GraphLoader::new()
        };

        if let Some(p) = progress.as_mut() {
            p.start_loading();
        }

        let graph = loader.load(&config.graph_file)?;

        if let Some(p) = progress.as_mut() {
            p.finish_loading(graph.module_count());
        }

        if let Some(p) = progress.as_mut() {
            p.start_scan();
        }

        let scanner = PackageScanner::new();
        let outcome = scanner.scan(&graph, &config.module, progress.as_ref())?;

        if let Some(p) = progress.as_ref() {
            p.finish_scan(!outcome.is_clean());
        }

        // Generate report based on format
        let report_result = match config.format {
            OutputFormat::Human => HumanReportGenerator::new().generate_report(&outcome),
            OutputFormat::Json => JsonReportGenerator::new().generate_report(&outcome),
        };

        match report_result {
            Ok(report) => print!("{report}"),
            Err(e) => {
                return Err(e)
                    .into_diagnostic()
                    .wrap_err("Failed to generate report");
            }
        }

        if let ScanOutcome::CycleFound(cycle) = &outcome {
            if config.display {
                dump_offending_subgraph(&graph, cycle);
            }
            std::process::exit(1);
        }

        Ok(())
    }
}

/// Write a DOT dump of the package subgraph containing the cycle
///
/// Best effort only: a failure here is reported on stderr and swallowed, so
/// the process exit status stays determined by the scan outcome.
fn dump_offending_subgraph(graph: &ImportGraph, cycle: &PackageCycle) {
    let path = format!("{}.dot", cycle.package());
    let subgraph = package_subgraph(graph, cycle.package());
    let renderer = SubgraphRenderer::new(true);

    let mut rendered = Vec::new();
    let result = renderer
        .render_dot(cycle.package(), &subgraph, cycle.edges(), &mut rendered)
        .and_then(|()| std::fs::write(&path, &rendered).into_diagnostic());

    match result {
        Ok(()) => eprintln!(
            "{} Wrote cycle subgraph to {}",
            style("🖼").cyan(),
            style(&path).bold()
        ),
        Err(e) => eprintln!(
            "{} Failed to write cycle subgraph: {e}",
            style("⚠").yellow()
        ),
    }
}
