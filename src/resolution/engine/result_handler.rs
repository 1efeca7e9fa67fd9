use crate::resolution::domain::{DependencyGraph, JobResult};
use crate::resolution::services::extract_dependency_from_job;
use tracing::{debug, warn};

/// Policy invoked by the collector's result-processing task for every
/// `JobResult`.
///
/// Returning `true` signals early stop: the collector cancels the shared
/// token and no further jobs are enqueued. The handler runs exclusively on
/// the single result-processing task, so implementations own their state
/// without locks.
pub trait ResultHandler {
    fn on_result(&mut self, result: &JobResult) -> bool;
}

/// Graph-wiring result handler closed over a dependency graph and a
/// maximum node-count threshold.
///
/// Converts the parent job and each transitive job to canonical
/// `Dependency` values, skipping (never failing on) any job that cannot be
/// converted, and connects the parent to every converted child. The
/// instant the graph reaches the threshold it returns `true`; remaining
/// children of the same result are not applied.
pub struct GraphResultHandler {
    graph: DependencyGraph,
    max_dependencies: usize,
}

impl GraphResultHandler {
    pub fn new(graph: DependencyGraph, max_dependencies: usize) -> Self {
        Self {
            graph,
            max_dependencies,
        }
    }

    /// Read access to the graph built so far
    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// Consumes the handler, releasing the graph to the caller
    pub fn into_graph(self) -> DependencyGraph {
        self.graph
    }

    fn threshold_reached(&self) -> bool {
        self.graph.dependency_count() >= self.max_dependencies
    }
}

impl ResultHandler for GraphResultHandler {
    fn on_result(&mut self, result: &JobResult) -> bool {
        let parent = match extract_dependency_from_job(&result.parent) {
            Ok(parent) => parent,
            Err(e) => {
                warn!(
                    purl = %result.parent.purl_name,
                    error = %e,
                    "skipping result whose parent cannot be canonicalized"
                );
                return false;
            }
        };

        // The parent registers even when there is no child to record, so
        // leaf packages still appear in the graph.
        self.graph.add_node(&parent);
        if self.threshold_reached() {
            return true;
        }

        for child_job in &result.transitive {
            match extract_dependency_from_job(child_job) {
                Ok(child) => {
                    self.graph.connect(&parent, &child);
                    if self.threshold_reached() {
                        return true;
                    }
                }
                Err(e) => {
                    debug!(
                        purl = %child_job.purl_name,
                        error = %e,
                        "skipping transitive dependency that cannot be canonicalized"
                    );
                }
            }
        }

        false
    }
}
