use super::Dependency;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// DependencyGraph aggregate: an append-only, deduplicated record of
/// parent -> child discovery edges.
///
/// One node exists per distinct `(purl, version)` pair no matter how many
/// times it is reached; inserting the same edge twice is a no-op. The
/// graph performs no cycle detection of its own - unbounded growth is
/// prevented only by the collector's depth and size limits.
///
/// The graph is safe to read only after all writers have finished. In the
/// collector this holds by construction: every mutation happens inside the
/// single result-processing task.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    nodes: HashMap<String, Dependency>,
    edges: HashMap<String, BTreeSet<String>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a node for the dependency, without any edge.
    ///
    /// Used for parents that turned out to have no recordable children, so
    /// the entry package itself is still part of the graph.
    pub fn add_node(&mut self, dep: &Dependency) {
        self.nodes.entry(dep.key()).or_insert_with(|| dep.clone());
    }

    /// Get-or-creates nodes for both endpoints and records the edge
    /// `parent -> child`. Duplicate edges are a no-op.
    pub fn connect(&mut self, parent: &Dependency, child: &Dependency) {
        self.add_node(parent);
        self.add_node(child);
        self.edges
            .entry(parent.key())
            .or_default()
            .insert(child.key());
    }

    /// Whether a node for this dependency is already registered
    pub fn contains(&self, dep: &Dependency) -> bool {
        self.nodes.contains_key(&dep.key())
    }

    /// Number of distinct registered nodes
    pub fn dependency_count(&self) -> usize {
        self.nodes.len()
    }

    /// Every distinct dependency node; order is insertion-irrelevant
    pub fn flatten(&self) -> Vec<Dependency> {
        self.nodes.values().cloned().collect()
    }

    /// Direct children recorded for a dependency, sorted by key
    pub fn children_of(&self, parent: &Dependency) -> Vec<Dependency> {
        self.edges
            .get(&parent.key())
            .map(|children| {
                children
                    .iter()
                    .filter_map(|key| self.nodes.get(key).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Deterministic diagnostic dump: nodes sorted by key, one line per edge,
/// isolated nodes rendered with an explicit marker. Debugging only.
impl fmt::Display for DependencyGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&String> = self.nodes.keys().collect();
        keys.sort();

        for key in keys {
            match self.edges.get(key) {
                Some(children) if !children.is_empty() => {
                    for child in children {
                        writeln!(f, "{} --> {}", key, child)?;
                    }
                }
                _ => writeln!(f, "{} (no dependencies)", key)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dep(purl: &str, version: &str) -> Dependency {
        Dependency::new(purl.to_string(), version.to_string()).unwrap()
    }

    #[test]
    fn test_connect_registers_both_nodes() {
        let mut graph = DependencyGraph::new();
        let parent = dep("pkg:npm/scanoss", "0.15.7");
        let child = dep("pkg:npm/tar-stream", "2.2.0");

        graph.connect(&parent, &child);

        assert_eq!(graph.dependency_count(), 2);
        assert!(graph.contains(&parent));
        assert!(graph.contains(&child));
    }

    #[test]
    fn test_connect_is_idempotent() {
        let mut graph = DependencyGraph::new();
        let parent = dep("pkg:npm/a", "1.0.0");
        let child = dep("pkg:npm/b", "2.0.0");

        graph.connect(&parent, &child);
        graph.connect(&parent, &child);
        graph.connect(&parent, &child);

        assert_eq!(graph.dependency_count(), 2);
        assert_eq!(graph.children_of(&parent).len(), 1);
    }

    #[test]
    fn test_add_node_registers_only_one_node() {
        let mut graph = DependencyGraph::new();
        let parent = dep("pkg:npm/leaf-only", "1.0.0");

        graph.add_node(&parent);

        assert_eq!(graph.dependency_count(), 1);
        assert_eq!(graph.flatten().len(), 1);
        assert!(graph.children_of(&parent).is_empty());
    }

    #[test]
    fn test_diamond_dependencies_share_one_node() {
        let mut graph = DependencyGraph::new();
        let a = dep("pkg:npm/a", "1.0.0");
        let b = dep("pkg:npm/b", "1.0.0");
        let shared = dep("pkg:npm/shared", "3.1.4");

        graph.connect(&a, &shared);
        graph.connect(&b, &shared);

        assert_eq!(graph.dependency_count(), 3);
        assert_eq!(graph.children_of(&a), vec![shared.clone()]);
        assert_eq!(graph.children_of(&b), vec![shared]);
    }

    #[test]
    fn test_count_always_matches_flatten_length() {
        let mut graph = DependencyGraph::new();
        assert_eq!(graph.dependency_count(), graph.flatten().len());

        graph.add_node(&dep("pkg:npm/a", "1.0.0"));
        assert_eq!(graph.dependency_count(), graph.flatten().len());

        graph.connect(&dep("pkg:npm/a", "1.0.0"), &dep("pkg:npm/b", "2.0.0"));
        graph.connect(&dep("pkg:npm/b", "2.0.0"), &dep("pkg:npm/c", "3.0.0"));
        assert_eq!(graph.dependency_count(), graph.flatten().len());
        assert_eq!(graph.dependency_count(), 3);
    }

    #[test]
    fn test_display_is_deterministic_and_sorted() {
        let mut graph = DependencyGraph::new();
        let b = dep("pkg:npm/b", "1.0.0");
        let a = dep("pkg:npm/a", "1.0.0");
        let c = dep("pkg:npm/c", "1.0.0");

        graph.connect(&b, &c);
        graph.add_node(&a);

        let rendered = format!("{}", graph);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec![
                "pkg:npm/a@1.0.0 (no dependencies)",
                "pkg:npm/b@1.0.0 --> pkg:npm/c@1.0.0",
                "pkg:npm/c@1.0.0 (no dependencies)",
            ]
        );
    }

    #[test]
    fn test_node_may_be_child_of_many_parents() {
        let mut graph = DependencyGraph::new();
        let shared = dep("pkg:npm/shared", "1.0.0");
        for i in 0..5 {
            let parent = dep(&format!("pkg:npm/parent-{}", i), "1.0.0");
            graph.connect(&parent, &shared);
        }
        assert_eq!(graph.dependency_count(), 6);
    }
}
