//! JSON format report generation

use serde_json::json;

use super::ReportGenerator;
use crate::error::RoundaboutError;
use crate::scanner::ScanOutcome;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, outcome: &ScanOutcome) -> Result<String, RoundaboutError> {
        let report = match outcome {
            ScanOutcome::Clean { module_count } => json!({
                "has_cycle": false,
                "module_count": module_count,
            }),
            ScanOutcome::CycleFound(cycle) => {
                let edges: Vec<_> = cycle
                    .edges()
                    .iter()
                    .map(|edge| {
                        json!({
                            "from": edge.from,
                            "to": edge.to,
                        })
                    })
                    .collect();

                json!({
                    "has_cycle": true,
                    "package": cycle.package(),
                    "path": cycle.path(),
                    "edges": edges,
                })
            }
        };

        serde_json::to_string_pretty(&report).map_err(RoundaboutError::Json)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::graph::ImportGraph;
    use crate::scanner::PackageScanner;

    #[test]
    fn test_json_report_clean() {
        let outcome = ScanOutcome::Clean { module_count: 7 };
        let report = JsonReportGenerator::new().generate_report(&outcome).unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["has_cycle"], false);
        assert_eq!(json["module_count"], 7);
    }

    #[test]
    fn test_json_report_with_cycle() {
        let graph = ImportGraph::builder()
            .add_module("p")
            .add_import("p.a", "p.b")
            .add_import("p.b", "p.a")
            .build();
        let outcome = PackageScanner::new().scan(&graph, "p", None).unwrap();

        let report = JsonReportGenerator::new().generate_report(&outcome).unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["has_cycle"], true);
        assert_eq!(json["package"], "p");
        assert_eq!(json["path"], "p.a -> p.b -> p.a");

        let edges = json["edges"].as_array().unwrap();
        assert_eq!(edges.len(), 2);
        assert!(edges[0].get("from").is_some());
        assert!(edges[0].get("to").is_some());
    }

    #[test]
    fn test_json_report_pretty_formatting() {
        let outcome = ScanOutcome::Clean { module_count: 0 };
        let report = JsonReportGenerator::new().generate_report(&outcome).unwrap();

        // Pretty formatted JSON should have newlines and indentation
        assert!(report.contains('\n'));
        assert!(report.contains("  "));
    }
}
