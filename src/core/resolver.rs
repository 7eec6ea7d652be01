//! Dependency resolution
//!
//! The build sequence is written by hand; this module checks that it is a
//! valid topological order of the declared dependencies before anything runs.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::core::package::PackageSpec;
use crate::error::ResolverError;

/// Dependency graph for packages
#[derive(Debug, Default)]
pub struct DependencyGraph {
    /// Adjacency list: package -> dependencies
    edges: BTreeMap<String, Vec<String>>,
    /// All known packages
    nodes: BTreeSet<String>,
}

impl DependencyGraph {
    /// Create a new empty dependency graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a package list
    pub fn from_packages(packages: &[PackageSpec]) -> Self {
        let mut graph = Self::new();
        for pkg in packages {
            graph.add_package(&pkg.name, pkg.depends.clone());
        }
        graph
    }

    /// Add a package to the graph
    pub fn add_package(&mut self, name: &str, dependencies: Vec<String>) {
        self.nodes.insert(name.to_string());
        for dep in &dependencies {
            self.nodes.insert(dep.clone());
        }
        self.edges.insert(name.to_string(), dependencies);
    }

    /// Compute topological sort (build order)
    ///
    /// Returns packages in order such that dependencies come before dependents.
    /// Ties are broken by name, so the result is deterministic.
    pub fn topological_sort(&self) -> Result<Vec<String>, ResolverError> {
        let mut visited = BTreeSet::new();
        let mut temp_visited = BTreeSet::new();
        let mut result = Vec::new();
        let mut cycle_path = Vec::new();

        for node in &self.nodes {
            if !visited.contains(node) {
                self.visit(
                    node,
                    &mut visited,
                    &mut temp_visited,
                    &mut result,
                    &mut cycle_path,
                )?;
            }
        }

        Ok(result)
    }

    fn visit(
        &self,
        node: &str,
        visited: &mut BTreeSet<String>,
        temp_visited: &mut BTreeSet<String>,
        result: &mut Vec<String>,
        cycle_path: &mut Vec<String>,
    ) -> Result<(), ResolverError> {
        if temp_visited.contains(node) {
            // Found a cycle
            cycle_path.push(node.to_string());
            return Err(ResolverError::CircularDependency {
                cycle: cycle_path.clone(),
            });
        }

        if visited.contains(node) {
            return Ok(());
        }

        temp_visited.insert(node.to_string());
        cycle_path.push(node.to_string());

        if let Some(deps) = self.edges.get(node) {
            for dep in deps {
                self.visit(dep, visited, temp_visited, result, cycle_path)?;
            }
        }

        cycle_path.pop();
        temp_visited.remove(node);
        visited.insert(node.to_string());
        result.push(node.to_string());

        Ok(())
    }
}

/// Check that `packages` is buildable in the given order.
///
/// Names must be unique, the dependency graph acyclic, and every dependency
/// must be listed before the package that needs it.
pub fn validate_order(packages: &[PackageSpec]) -> Result<(), ResolverError> {
    let mut position = HashMap::new();
    for (index, pkg) in packages.iter().enumerate() {
        if position.insert(pkg.name.as_str(), index).is_some() {
            return Err(ResolverError::Duplicate {
                package: pkg.name.clone(),
            });
        }
    }

    DependencyGraph::from_packages(packages).topological_sort()?;

    for (index, pkg) in packages.iter().enumerate() {
        for dep in &pkg.depends {
            match position.get(dep.as_str()) {
                None => {
                    return Err(ResolverError::MissingDependency {
                        package: pkg.name.clone(),
                        dependency: dep.clone(),
                    })
                }
                Some(&dep_index) if dep_index >= index => {
                    return Err(ResolverError::OutOfOrder {
                        package: pkg.name.clone(),
                        dependency: dep.clone(),
                    })
                }
                Some(_) => {}
            }
        }
    }

    Ok(())
}
