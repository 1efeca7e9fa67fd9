use crate::resolution::domain::DependencyGraph;
use crate::resolution::engine::CollectorOutcome;

/// Response from transitive dependency resolution.
///
/// Always carries a graph: cancellation, timeout, and the size cap are
/// normal termination paths that yield whatever partial graph was built.
#[derive(Debug)]
pub struct ResolveResponse {
    pub graph: DependencyGraph,
    pub outcome: CollectorOutcome,
}

impl ResolveResponse {
    pub fn new(graph: DependencyGraph, outcome: CollectorOutcome) -> Self {
        Self { graph, outcome }
    }

    /// Number of distinct dependencies in the resolved graph
    pub fn dependency_count(&self) -> usize {
        self.graph.dependency_count()
    }
}
