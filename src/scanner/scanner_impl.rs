use std::collections::{BTreeMap, HashSet};

use petgraph::graph::{DiGraph, NodeIndex};

use crate::error::RoundaboutError;
use crate::graph::ImportGraph;
use crate::progress::ProgressReporter;

/// Scanner that walks a package tree looking for import cycles
///
/// Each package is checked independently: its direct children form the nodes
/// of an ephemeral subgraph, aggregated imports among them form the edges,
/// and a depth-first search looks for a back edge. The scan stops at the
/// first cycle found.
pub struct PackageScanner;

/// Result of scanning a package tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// No cycle anywhere under the root; carries the size of the full graph
    Clean { module_count: usize },
    /// The first cycle found; nothing past it was scanned
    CycleFound(PackageCycle),
}

impl ScanOutcome {
    pub fn is_clean(&self) -> bool {
        matches!(self, ScanOutcome::Clean { .. })
    }
}

/// A cycle among the direct children of one package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageCycle {
    package: String,
    edges: Vec<CycleEdge>,
}

/// One edge of a detected cycle, pointing from importer to imported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleEdge {
    pub from: String,
    pub to: String,
}

impl PackageCycle {
    /// The package whose children form the cycle
    pub fn package(&self) -> &str {
        &self.package
    }

    /// The closed edge walk, in traversal order
    pub fn edges(&self) -> &[CycleEdge] {
        &self.edges
    }

    /// Render the cycle as `a -> b -> a`
    pub fn path(&self) -> String {
        let mut nodes: Vec<&str> = self.edges.iter().map(|edge| edge.from.as_str()).collect();
        if let Some(first) = self.edges.first() {
            nodes.push(first.from.as_str());
        }
        nodes.join(" -> ")
    }
}

impl Default for PackageScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageScanner {
    /// Create a new package scanner
    pub fn new() -> Self {
        Self
    }

    /// Scan every package scope under `root_module` for import cycles
    ///
    /// Returns [`ScanOutcome::CycleFound`] for the first cycle discovered,
    /// or [`ScanOutcome::Clean`] with the total module count once the
    /// worklist drains. An unresolvable root module is a fatal input error.
    pub fn scan(
        &self,
        graph: &ImportGraph,
        root_module: &str,
        progress: Option<&ProgressReporter>,
    ) -> Result<ScanOutcome, RoundaboutError> {
        if !graph.contains_module(root_module) {
            return Err(RoundaboutError::UnknownModule {
                module: root_module.to_string(),
            });
        }

        let mut worklist = vec![root_module.to_string()];
        // Guards against a name reachable through two tree paths being
        // scanned twice; duplicate pushes are skipped, never an error.
        let mut queued: HashSet<String> = HashSet::from([root_module.to_string()]);

        while let Some(package) = worklist.pop() {
            if let Some(p) = progress {
                p.scanning_package(&package);
            }

            let subgraph = package_subgraph(graph, &package);
            if let Some(edges) = find_cycle(&subgraph) {
                return Ok(ScanOutcome::CycleFound(PackageCycle { package, edges }));
            }

            for child in graph.find_children(&package) {
                if queued.insert(child.clone()) {
                    worklist.push(child);
                }
            }
        }

        Ok(ScanOutcome::Clean {
            module_count: graph.module_count(),
        })
    }
}

/// Build the package-level subgraph for one package
///
/// Nodes are the package's direct children in sorted order; an edge
/// `importer -> imported` exists iff the provider reports an aggregated
/// direct import between the two child packages. Self-edges are excluded by
/// construction.
pub fn package_subgraph(graph: &ImportGraph, package: &str) -> DiGraph<String, ()> {
    let children = graph.find_children(package);

    let mut subgraph = DiGraph::new();
    let mut indices: BTreeMap<&str, NodeIndex> = BTreeMap::new();
    for child in &children {
        indices.insert(child.as_str(), subgraph.add_node(child.clone()));
    }

    for imported in &children {
        for importer in &children {
            if importer == imported {
                continue;
            }
            if graph.direct_import_exists(imported, importer, true) {
                subgraph.add_edge(indices[importer.as_str()], indices[imported.as_str()], ());
            }
        }
    }

    subgraph
}

/// Depth-first cycle search with back-edge detection
///
/// Roots and successors are visited in alphabetical order so the first
/// cycle discovered is the same on every run over the same graph. The
/// returned walk starts at the back edge's target and is closed by the back
/// edge itself.
pub(crate) fn find_cycle(subgraph: &DiGraph<String, ()>) -> Option<Vec<CycleEdge>> {
    let mut visited: HashSet<NodeIndex> = HashSet::new();
    let mut on_stack: HashSet<NodeIndex> = HashSet::new();
    let mut path: Vec<NodeIndex> = Vec::new();

    let mut roots: Vec<NodeIndex> = subgraph.node_indices().collect();
    roots.sort_by(|a, b| subgraph[*a].cmp(&subgraph[*b]));

    for root in roots {
        if visited.contains(&root) {
            continue;
        }
        if let Some(edges) = visit(subgraph, root, &mut visited, &mut on_stack, &mut path) {
            return Some(edges);
        }
    }

    None
}

fn visit(
    subgraph: &DiGraph<String, ()>,
    node: NodeIndex,
    visited: &mut HashSet<NodeIndex>,
    on_stack: &mut HashSet<NodeIndex>,
    path: &mut Vec<NodeIndex>,
) -> Option<Vec<CycleEdge>> {
    visited.insert(node);
    on_stack.insert(node);
    path.push(node);

    let mut successors: Vec<NodeIndex> = subgraph.neighbors(node).collect();
    successors.sort_by(|a, b| subgraph[*a].cmp(&subgraph[*b]));

    for next in successors {
        if on_stack.contains(&next) {
            // Back edge: the cycle runs from `next` forward along the
            // active path and closes with this edge.
            let start = path
                .iter()
                .position(|&n| n == next)
                .expect("back edge target must be on the active path");
            let mut edges: Vec<CycleEdge> = path[start..]
                .windows(2)
                .map(|pair| CycleEdge {
                    from: subgraph[pair[0]].clone(),
                    to: subgraph[pair[1]].clone(),
                })
                .collect();
            edges.push(CycleEdge {
                from: subgraph[node].clone(),
                to: subgraph[next].clone(),
            });
            return Some(edges);
        }
        if !visited.contains(&next) {
            if let Some(edges) = visit(subgraph, next, visited, on_stack, path) {
                return Some(edges);
            }
        }
    }

    on_stack.remove(&node);
    path.pop();
    None
}

#[cfg(test)]
mod tests {
    use petgraph::visit::EdgeRef;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::graph::ImportGraph;

    fn scan(graph: &ImportGraph, root: &str) -> Result<ScanOutcome, RoundaboutError> {
        PackageScanner::new().scan(graph, root, None)
    }

    #[test]
    fn test_single_edge_between_siblings_is_clean() {
        // Scenario A: p has children {a, b}; b imports a, no reverse edge
        let graph = ImportGraph::builder()
            .add_module("p")
            .add_import("p.b", "p.a")
            .build();

        let outcome = scan(&graph, "p").unwrap();
        assert_eq!(outcome, ScanOutcome::Clean { module_count: 3 });
    }

    #[test]
    fn test_mutual_imports_form_a_cycle() {
        // Scenario B: p has children {a, b} importing each other
        let graph = ImportGraph::builder()
            .add_module("p")
            .add_import("p.a", "p.b")
            .add_import("p.b", "p.a")
            .build();

        let outcome = scan(&graph, "p").unwrap();
        match outcome {
            ScanOutcome::CycleFound(cycle) => {
                assert_eq!(cycle.package(), "p");
                assert_eq!(cycle.path(), "p.a -> p.b -> p.a");
                assert_eq!(cycle.edges().len(), 2);
            }
            ScanOutcome::Clean { .. } => panic!("Expected a cycle"),
        }
    }

    #[test]
    fn test_unknown_root_module_is_fatal() {
        // Scenario C: root module not present in the graph
        let graph = ImportGraph::builder().add_module("p").build();

        let err = scan(&graph, "nonexistent").unwrap_err();
        match err {
            RoundaboutError::UnknownModule { module } => assert_eq!(module, "nonexistent"),
            other => panic!("Expected UnknownModule, got {other:?}"),
        }
    }

    #[test]
    fn test_single_child_recurses_without_cycle() {
        // Scenario D: a package with one child cannot cycle at that level
        let graph = ImportGraph::builder()
            .add_module("p")
            .add_module("p.c")
            .add_module("p.c.x")
            .add_module("p.c.y")
            .add_import("p.c.x", "p.c.y")
            .build();

        let outcome = scan(&graph, "p").unwrap();
        assert_eq!(outcome, ScanOutcome::Clean { module_count: 4 });
    }

    #[test]
    fn test_three_node_cycle_reports_all_edges() {
        let graph = ImportGraph::builder()
            .add_module("p")
            .add_import("p.a", "p.b")
            .add_import("p.b", "p.c")
            .add_import("p.c", "p.a")
            .build();

        let outcome = scan(&graph, "p").unwrap();
        match outcome {
            ScanOutcome::CycleFound(cycle) => {
                assert_eq!(cycle.edges().len(), 3);
                assert_eq!(cycle.path(), "p.a -> p.b -> p.c -> p.a");
                // Closed walk: each edge chains into the next
                for pair in cycle.edges().windows(2) {
                    assert_eq!(pair[0].to, pair[1].from);
                }
                let first = cycle.edges().first().unwrap();
                let last = cycle.edges().last().unwrap();
                assert_eq!(last.to, first.from);
            }
            ScanOutcome::Clean { .. } => panic!("Expected a cycle"),
        }
    }

    #[test]
    fn test_cycle_found_in_nested_package() {
        // Clean at the top level; the cycle lives among p.x's children
        let graph = ImportGraph::builder()
            .add_module("p")
            .add_module("p.y")
            .add_import("p.x.a", "p.x.b")
            .add_import("p.x.b", "p.x.a")
            .add_import("p.y", "p.x")
            .build();

        let outcome = scan(&graph, "p").unwrap();
        match outcome {
            ScanOutcome::CycleFound(cycle) => {
                assert_eq!(cycle.package(), "p.x");
                assert_eq!(cycle.path(), "p.x.a -> p.x.b -> p.x.a");
            }
            ScanOutcome::Clean { .. } => panic!("Expected a cycle"),
        }
    }

    #[test]
    fn test_descendant_imports_aggregate_to_package_edges() {
        // Imports between deep members count as edges between the siblings
        let graph = ImportGraph::builder()
            .add_module("p")
            .add_module("p.a")
            .add_module("p.b")
            .add_import("p.a.inner", "p.b.core")
            .add_import("p.b.core", "p.a")
            .build();

        let outcome = scan(&graph, "p").unwrap();
        match outcome {
            ScanOutcome::CycleFound(cycle) => {
                assert_eq!(cycle.package(), "p");
                assert_eq!(cycle.path(), "p.a -> p.b -> p.a");
            }
            ScanOutcome::Clean { .. } => panic!("Expected a cycle"),
        }
    }

    #[test]
    fn test_clean_tree_drains_worklist() {
        // Layered acyclic imports across two package levels
        let graph = ImportGraph::builder()
            .add_module("app")
            .add_import("app.web", "app.core")
            .add_import("app.web.views", "app.web.forms")
            .add_import("app.core.db", "app.core.models")
            .build();

        let outcome = scan(&graph, "app").unwrap();
        assert_eq!(
            outcome,
            ScanOutcome::Clean {
                module_count: graph.module_count()
            }
        );
    }

    #[test]
    fn test_scan_is_deterministic() {
        let graph = ImportGraph::builder()
            .add_module("p")
            .add_import("p.a", "p.b")
            .add_import("p.b", "p.c")
            .add_import("p.c", "p.a")
            .add_import("p.c", "p.b")
            .add_import("p.b", "p.a")
            .build();

        let first = scan(&graph, "p").unwrap();
        let second = scan(&graph, "p").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_subgraph_construction_is_idempotent() {
        let graph = ImportGraph::builder()
            .add_module("p")
            .add_import("p.a", "p.b")
            .add_import("p.c", "p.a")
            .build();

        let one = package_subgraph(&graph, "p");
        let two = package_subgraph(&graph, "p");

        let nodes = |g: &DiGraph<String, ()>| {
            g.node_indices().map(|i| g[i].clone()).collect::<Vec<_>>()
        };
        let edges = |g: &DiGraph<String, ()>| {
            g.edge_references()
                .map(|e| (g[e.source()].clone(), g[e.target()].clone()))
                .collect::<Vec<_>>()
        };

        assert_eq!(nodes(&one), nodes(&two));
        assert_eq!(edges(&one), edges(&two));
    }

    #[test]
    fn test_subgraph_nodes_match_child_set() {
        let graph = ImportGraph::builder()
            .add_module("p")
            .add_module("p.a")
            .add_module("p.b")
            .add_module("p.b.deep")
            .add_module("q")
            .build();

        let subgraph = package_subgraph(&graph, "p");
        let names: Vec<String> = subgraph
            .node_indices()
            .map(|i| subgraph[i].clone())
            .collect();
        assert_eq!(names, vec!["p.a".to_string(), "p.b".to_string()]);
    }

    #[test]
    fn test_empty_and_single_node_subgraphs_have_no_cycle() {
        let empty: DiGraph<String, ()> = DiGraph::new();
        assert_eq!(find_cycle(&empty), None);

        let mut single = DiGraph::new();
        single.add_node("p.only".to_string());
        assert_eq!(find_cycle(&single), None);
    }

    #[test]
    fn test_cycle_path_formatting() {
        let cycle = PackageCycle {
            package: "p".to_string(),
            edges: vec![
                CycleEdge {
                    from: "p.a".to_string(),
                    to: "p.b".to_string(),
                },
                CycleEdge {
                    from: "p.b".to_string(),
                    to: "p.a".to_string(),
                },
            ],
        };

        assert_eq!(cycle.path(), "p.a -> p.b -> p.a");
    }
}
