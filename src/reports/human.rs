//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::error::RoundaboutError;
use crate::scanner::ScanOutcome;
use crate::utils::string::pluralize;

pub struct HumanReportGenerator;

impl Default for HumanReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, outcome: &ScanOutcome) -> Result<String, RoundaboutError> {
        let mut output = String::new();

        match outcome {
            ScanOutcome::Clean { module_count } => {
                write!(
                    output,
                    "\n{} Success: no package import cycles detected in {} {}\n",
                    style("✅").green().bold(),
                    style(module_count).green().bold(),
                    pluralize("module", *module_count)
                )?;
            }
            ScanOutcome::CycleFound(cycle) => {
                writeln!(
                    output,
                    "\n{} Package import cycle detected in {}:\n",
                    style("❌").red().bold(),
                    style(cycle.package()).bold()
                )?;
                writeln!(output, "  {}", style(cycle.path()).red())?;
                writeln!(
                    output,
                    "\n{} To break this cycle, remove at least one import along the path.",
                    style("💡").yellow()
                )?;
            }
        }

        Ok(output)
    }
}
