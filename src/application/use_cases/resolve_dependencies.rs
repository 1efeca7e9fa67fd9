use crate::application::dto::{ResolveRequest, ResolveResponse};
use crate::ports::outbound::DependencyLookup;
use crate::resolution::domain::{DependencyGraph, DependencyJob};
use crate::resolution::engine::{
    CollectorConfig, DependencyCollector, GraphResultHandler,
};
use crate::resolution::services::pick_first_version_from_range;
use crate::shared::Result;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// ResolveDependenciesUseCase - Core use case for transitive dependency
/// resolution
///
/// Orchestrates one resolution request: turns the entry packages into seed
/// jobs, runs the collector against the injected knowledge-base lookup,
/// and reads back the final graph. A fresh graph and collector are created
/// per request and discarded afterwards.
///
/// # Type Parameters
/// * `L` - DependencyLookup implementation (the knowledge-base query
///   collaborator)
pub struct ResolveDependenciesUseCase<L> {
    lookup: Arc<L>,
    collector_cfg: CollectorConfig,
    max_dependencies: usize,
}

impl<L> ResolveDependenciesUseCase<L>
where
    L: DependencyLookup + 'static,
{
    /// Creates a new use case with injected dependencies
    ///
    /// # Arguments
    /// * `lookup` - Knowledge-base lookup collaborator
    /// * `collector_cfg` - Per-request worker/queue/timeout limits
    /// * `max_dependencies` - Node-count cap for the resolved graph
    pub fn new(lookup: Arc<L>, collector_cfg: CollectorConfig, max_dependencies: usize) -> Self {
        Self {
            lookup,
            collector_cfg,
            max_dependencies,
        }
    }

    /// Executes the resolution use case
    ///
    /// # Arguments
    /// * `request` - Entry packages and expansion depth
    ///
    /// # Returns
    /// ResolveResponse carrying the (possibly partial) graph and the
    /// collector outcome
    pub async fn execute(&self, request: ResolveRequest) -> Result<ResolveResponse> {
        self.execute_with_token(request, CancellationToken::new())
            .await
    }

    /// Executes the resolution use case under a caller-supplied
    /// cancellation token, so the surrounding service can abort the whole
    /// request (for example when the client disconnects).
    pub async fn execute_with_token(
        &self,
        request: ResolveRequest,
        token: CancellationToken,
    ) -> Result<ResolveResponse> {
        let seeds = self.seed_jobs(&request);
        info!(
            entries = request.entries.len(),
            seeds = seeds.len(),
            depth = request.depth,
            "starting transitive dependency resolution"
        );

        let handler = GraphResultHandler::new(DependencyGraph::new(), self.max_dependencies);
        let mut collector = DependencyCollector::new(
            self.collector_cfg.clone(),
            Arc::clone(&self.lookup),
            handler,
        );
        collector.init_jobs(seeds);

        let collector_token = collector.cancellation_token();
        if token.is_cancelled() {
            collector_token.cancel();
        }
        let forward = tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => collector_token.cancel(),
                _ = collector_token.cancelled() => {}
            }
        });

        let (handler, outcome) = collector.start().await;
        let _ = forward.await;
        let graph = handler.into_graph();

        info!(
            dependencies = graph.dependency_count(),
            outcome = %outcome,
            "resolution finished"
        );

        Ok(ResolveResponse::new(graph, outcome))
    }

    /// Converts entry packages into seed jobs, resolving each requirement
    /// to a concrete version. Entries whose requirement cannot collapse to
    /// a single version are logged and skipped, never failing the request.
    fn seed_jobs(&self, request: &ResolveRequest) -> Vec<DependencyJob> {
        request
            .entries
            .iter()
            .filter_map(|entry| match pick_first_version_from_range(&entry.requirement) {
                Ok(version) => Some(DependencyJob::new(
                    entry.purl_name.clone(),
                    version,
                    entry.ecosystem.clone(),
                    request.depth,
                )),
                Err(e) => {
                    warn!(
                        purl = %entry.purl_name,
                        requirement = %entry.requirement,
                        error = %e,
                        "skipping entry with unresolvable requirement"
                    );
                    None
                }
            })
            .collect()
    }
}
