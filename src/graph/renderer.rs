use std::io::Write;

use miette::Result;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::error::RoundaboutError;
use crate::scanner::CycleEdge;

// Blue-Orange Accessible Palette - Soothing colors with excellent contrast
mod colors {
    pub const NORMAL_NODE_FILL: &str = "#E3F2FD"; // Light blue
    pub const NORMAL_NODE_STROKE: &str = "#1976D2"; // Medium blue
    pub const CYCLE_NODE_FILL: &str = "#FFF3E0"; // Light orange
    pub const CYCLE_NODE_STROKE: &str = "#F57C00"; // Vibrant orange
    pub const NORMAL_EDGE: &str = "#64B5F6"; // Soft blue
    pub const CYCLE_EDGE: &str = "#FF6500"; // Deep orange
}

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(RoundaboutError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(RoundaboutError::from)
    };
}

/// Renders one package-level subgraph as DOT or Mermaid text
pub struct SubgraphRenderer {
    highlight_cycles: bool,
}

impl SubgraphRenderer {
    pub fn new(highlight_cycles: bool) -> Self {
        Self { highlight_cycles }
    }

    pub fn render_dot(
        &self,
        package: &str,
        subgraph: &DiGraph<String, ()>,
        cycle: &[CycleEdge],
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "digraph imports {{")?;
        writeln_out!(output, "    label=\"{package}\";")?;
        writeln_out!(output, "    rankdir=LR;")?;
        writeln_out!(
            output,
            "    node [shape=box, style=\"rounded,filled\", fillcolor=\"{}\", color=\"{}\"];",
            colors::NORMAL_NODE_FILL,
            colors::NORMAL_NODE_STROKE
        )?;

        for node in self.sorted_nodes(subgraph) {
            let name = &subgraph[node];
            if self.highlight_cycles && self.node_in_cycle(name, cycle) {
                writeln_out!(
                    output,
                    "    \"{name}\" [fillcolor=\"{}\", color=\"{}\"];",
                    colors::CYCLE_NODE_FILL,
                    colors::CYCLE_NODE_STROKE
                )?;
            } else {
                writeln_out!(output, "    \"{name}\";")?;
            }
        }

        for (from, to) in self.sorted_edges(subgraph) {
            if self.highlight_cycles && self.edge_in_cycle(&from, &to, cycle) {
                writeln_out!(
                    output,
                    "    \"{from}\" -> \"{to}\" [color=\"{}\", penwidth=2.0];",
                    colors::CYCLE_EDGE
                )?;
            } else {
                writeln_out!(
                    output,
                    "    \"{from}\" -> \"{to}\" [color=\"{}\"];",
                    colors::NORMAL_EDGE
                )?;
            }
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    pub fn render_mermaid(
        &self,
        package: &str,
        subgraph: &DiGraph<String, ()>,
        cycle: &[CycleEdge],
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "graph TD")?;
        writeln_out!(output, "    %% {package}")?;

        for node in self.sorted_nodes(subgraph) {
            let name = &subgraph[node];
            let node_id = self.mermaid_id(name);
            writeln_out!(output, "    {node_id}[\"{name}\"]")?;
            if self.highlight_cycles && self.node_in_cycle(name, cycle) {
                writeln_out!(
                    output,
                    "    style {node_id} fill:{},stroke:{},stroke-width:3px",
                    colors::CYCLE_NODE_FILL,
                    colors::CYCLE_NODE_STROKE
                )?;
            } else {
                writeln_out!(
                    output,
                    "    style {node_id} fill:{},stroke:{},stroke-width:2px",
                    colors::NORMAL_NODE_FILL,
                    colors::NORMAL_NODE_STROKE
                )?;
            }
        }

        let mut cycle_links = Vec::new();
        for (index, (from, to)) in self.sorted_edges(subgraph).into_iter().enumerate() {
            writeln_out!(
                output,
                "    {} --> {}",
                self.mermaid_id(&from),
                self.mermaid_id(&to)
            )?;
            if self.highlight_cycles && self.edge_in_cycle(&from, &to, cycle) {
                cycle_links.push(index);
            }
        }

        for index in cycle_links {
            writeln_out!(
                output,
                "    linkStyle {index} stroke:{},stroke-width:3px",
                colors::CYCLE_EDGE
            )?;
        }

        Ok(())
    }

    fn sorted_nodes(&self, subgraph: &DiGraph<String, ()>) -> Vec<NodeIndex> {
        let mut nodes: Vec<NodeIndex> = subgraph.node_indices().collect();
        nodes.sort_by(|a, b| subgraph[*a].cmp(&subgraph[*b]));
        nodes
    }

    fn sorted_edges(&self, subgraph: &DiGraph<String, ()>) -> Vec<(String, String)> {
        let mut edges: Vec<(String, String)> = subgraph
            .edge_references()
            .map(|edge| {
                (
                    subgraph[edge.source()].clone(),
                    subgraph[edge.target()].clone(),
                )
            })
            .collect();
        edges.sort();
        edges
    }

    fn node_in_cycle(&self, name: &str, cycle: &[CycleEdge]) -> bool {
        cycle.iter().any(|edge| edge.from == name || edge.to == name)
    }

    fn edge_in_cycle(&self, from: &str, to: &str, cycle: &[CycleEdge]) -> bool {
        cycle.iter().any(|edge| edge.from == from && edge.to == to)
    }

    fn mermaid_id(&self, name: &str) -> String {
        name.replace(['.', '-'], "_")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ImportGraph;
    use crate::scanner::package_subgraph;

    fn cyclic_subgraph() -> (DiGraph<String, ()>, Vec<CycleEdge>) {
        let graph = ImportGraph::builder()
            .add_module("p")
            .add_import("p.a", "p.b")
            .add_import("p.b", "p.a")
            .add_import("p.c", "p.a")
            .build();
        let subgraph = package_subgraph(&graph, "p");
        let cycle = vec![
            CycleEdge {
                from: "p.a".to_string(),
                to: "p.b".to_string(),
            },
            CycleEdge {
                from: "p.b".to_string(),
                to: "p.a".to_string(),
            },
        ];
        (subgraph, cycle)
    }

    #[test]
    fn test_render_dot_structure() {
        let (subgraph, cycle) = cyclic_subgraph();
        let renderer = SubgraphRenderer::new(true);

        let mut output = Vec::new();
        renderer
            .render_dot("p", &subgraph, &cycle, &mut output)
            .unwrap();
        let dot = String::from_utf8(output).unwrap();

        assert!(dot.contains("digraph imports"));
        assert!(dot.contains("label=\"p\""));
        assert!(dot.contains("\"p.a\" -> \"p.b\""));
        // Cycle members get the highlight fill
        assert!(dot.contains(&format!("\"p.a\" [fillcolor=\"{}\"", colors::CYCLE_NODE_FILL)));
        // The bystander node does not
        assert!(dot.contains("\"p.c\";"));
    }

    #[test]
    fn test_render_dot_without_highlighting() {
        let (subgraph, cycle) = cyclic_subgraph();
        let renderer = SubgraphRenderer::new(false);

        let mut output = Vec::new();
        renderer
            .render_dot("p", &subgraph, &cycle, &mut output)
            .unwrap();
        let dot = String::from_utf8(output).unwrap();

        assert!(!dot.contains(colors::CYCLE_EDGE));
    }

    #[test]
    fn test_render_mermaid_structure() {
        let (subgraph, cycle) = cyclic_subgraph();
        let renderer = SubgraphRenderer::new(true);

        let mut output = Vec::new();
        renderer
            .render_mermaid("p", &subgraph, &cycle, &mut output)
            .unwrap();
        let mermaid = String::from_utf8(output).unwrap();

        assert!(mermaid.starts_with("graph TD"));
        assert!(mermaid.contains("p_a[\"p.a\"]"));
        assert!(mermaid.contains("p_a --> p_b"));
        assert!(mermaid.contains("linkStyle"));
    }

    #[test]
    fn test_render_empty_subgraph() {
        let subgraph: DiGraph<String, ()> = DiGraph::new();
        let renderer = SubgraphRenderer::new(true);

        let mut output = Vec::new();
        renderer
            .render_dot("empty", &subgraph, &[], &mut output)
            .unwrap();
        let dot = String::from_utf8(output).unwrap();

        assert!(dot.contains("digraph imports"));
        assert!(dot.trim_end().ends_with('}'));
    }
}
