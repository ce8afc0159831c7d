//! Report generation modules for different output formats
//!
//! This module contains report generators for the scan outcome:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use

pub mod human;
pub mod json;

use crate::error::RoundaboutError;
use crate::scanner::ScanOutcome;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from a scan outcome
    fn generate_report(&self, outcome: &ScanOutcome) -> Result<String, RoundaboutError>;
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
