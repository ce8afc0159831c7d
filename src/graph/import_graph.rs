//! The module-level import graph and its package queries

use std::collections::{BTreeMap, BTreeSet};

/// A directed graph of modules and their direct-import edges
///
/// Modules are dot-delimited names (`a.b.c`); the package tree is implicit
/// in the names and reconstructed on demand via [`ImportGraph::find_children`].
/// The graph is immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportGraph {
    modules: BTreeSet<String>,
    imports: BTreeMap<String, BTreeSet<String>>,
}

impl ImportGraph {
    pub fn builder() -> ImportGraphBuilder {
        ImportGraphBuilder::new()
    }

    /// Whether the graph knows a module by this exact name
    pub fn contains_module(&self, name: &str) -> bool {
        self.modules.contains(name)
    }

    /// Total number of modules in the full import graph
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// All module names, in sorted order
    pub fn modules(&self) -> &BTreeSet<String> {
        &self.modules
    }

    /// Direct children of a package: modules exactly one dot segment below it
    pub fn find_children(&self, package: &str) -> BTreeSet<String> {
        self.modules
            .iter()
            .filter(|module| {
                module
                    .rsplit_once('.')
                    .is_some_and(|(parent, _)| parent == package)
            })
            .cloned()
            .collect()
    }

    /// Whether a direct import edge exists from `importer` to `imported`
    ///
    /// With `as_packages` set, the edge is considered present if any member
    /// of the importer's subtree (the package itself or any dotted
    /// descendant) imports any member of the imported package's subtree.
    pub fn direct_import_exists(&self, imported: &str, importer: &str, as_packages: bool) -> bool {
        if !as_packages {
            return self
                .imports
                .get(importer)
                .is_some_and(|targets| targets.contains(imported));
        }

        self.imports.iter().any(|(from, targets)| {
            Self::is_within(from, importer)
                && targets.iter().any(|to| Self::is_within(to, imported))
        })
    }

    /// Whether `module` is `package` itself or one of its dotted descendants
    fn is_within(module: &str, package: &str) -> bool {
        module == package
            || module
                .strip_prefix(package)
                .is_some_and(|rest| rest.starts_with('.'))
    }
}

/// Incremental builder for [`ImportGraph`]
///
/// Import endpoints are inserted into the module set implicitly, so the
/// finished graph always contains every name an edge refers to.
#[derive(Default)]
pub struct ImportGraphBuilder {
    modules: BTreeSet<String>,
    imports: BTreeMap<String, BTreeSet<String>>,
}

impl ImportGraphBuilder {
    pub fn new() -> Self {
        Self {
            modules: BTreeSet::new(),
            imports: BTreeMap::new(),
        }
    }

    pub fn add_module(mut self, name: &str) -> Self {
        self.modules.insert(name.to_string());
        self
    }

    pub fn add_import(mut self, importer: &str, imported: &str) -> Self {
        self.modules.insert(importer.to_string());
        self.modules.insert(imported.to_string());
        self.imports
            .entry(importer.to_string())
            .or_default()
            .insert(imported.to_string());
        self
    }

    pub fn build(self) -> ImportGraph {
        ImportGraph {
            modules: self.modules,
            imports: self.imports,
        }
    }
}
