use crate::ports::outbound::{DeclaredDependency, DependencyLookup};
use crate::resolution::domain::{DependencyJob, JobResult};
use crate::resolution::engine::ResultHandler;
use crate::resolution::services::pick_first_version_from_range;
use futures::future::join_all;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Immutable per-request collector configuration
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// Fixed number of concurrent worker tasks (bounds concurrent
    /// knowledge-base calls)
    pub max_workers: usize,
    /// Capacity of the bounded job queue (bounds queued + in-flight work;
    /// a full queue is the backpressure path that throttles fan-out)
    pub max_queue_limit: usize,
    /// Wall-clock budget for the whole request
    pub timeout: Duration,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            max_workers: 10,
            max_queue_limit: 1000,
            timeout: Duration::from_secs(30),
        }
    }
}

/// How a collection run terminated.
///
/// None of these is an error: cancellation and timeout are normal
/// termination paths that leave a readable partial graph behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectorOutcome {
    /// Every seeded job and all discovered work drained to completion
    Completed,
    /// The result handler signalled early stop (graph size cap reached)
    Stopped,
    /// The caller cancelled the shared token
    Cancelled,
    /// The configured wall-clock timeout expired
    TimedOut,
}

impl CollectorOutcome {
    /// Whether the resulting graph may be missing reachable dependencies
    pub fn is_truncated(&self) -> bool {
        !matches!(self, CollectorOutcome::Completed)
    }
}

impl std::fmt::Display for CollectorOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CollectorOutcome::Completed => "completed",
            CollectorOutcome::Stopped => "stopped",
            CollectorOutcome::Cancelled => "cancelled",
            CollectorOutcome::TimedOut => "timed_out",
        };
        write!(f, "{}", label)
    }
}

/// DependencyCollector - the worker-pool scheduler at the heart of
/// transitive resolution.
///
/// A fixed pool of `max_workers` tasks consumes jobs from a bounded queue,
/// queries the `DependencyLookup` collaborator, and emits exactly one
/// `JobResult` per job. A single result-processing loop (running on the
/// caller's task inside `start`) feeds each result to the `ResultHandler`,
/// enqueues newly discovered child jobs, and tracks the pending-work
/// counter. Because the counter, the seen-set, and all handler state are
/// touched only by that one loop, the collector needs no locks around any
/// of them.
///
/// Lifecycle: `new` -> `init_jobs` -> `start` -> read the handler.
pub struct DependencyCollector<L, H> {
    cfg: CollectorConfig,
    lookup: Arc<L>,
    handler: H,
    cancel: CancellationToken,
    seeds: Vec<DependencyJob>,
}

impl<L, H> DependencyCollector<L, H>
where
    L: DependencyLookup + 'static,
    H: ResultHandler,
{
    pub fn new(cfg: CollectorConfig, lookup: Arc<L>, handler: H) -> Self {
        Self {
            cfg,
            lookup,
            handler,
            cancel: CancellationToken::new(),
            seeds: Vec::new(),
        }
    }

    /// Token governing the whole request. Cancelling it (from any task)
    /// makes `start` return promptly with whatever partial graph exists.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Seeds the collector with the initial job list.
    ///
    /// An empty list is accepted. Seeds whose depth budget is already
    /// exhausted are dropped when the run starts, so no zero-depth job is
    /// ever enqueued.
    pub fn init_jobs(&mut self, jobs: Vec<DependencyJob>) {
        self.seeds.extend(jobs);
    }

    /// Drives the collection to completion, cancellation, early stop, or
    /// timeout, then waits for all workers to exit before returning the
    /// handler (and with it the graph) together with the outcome.
    pub async fn start(mut self) -> (H, CollectorOutcome) {
        let seeds = std::mem::take(&mut self.seeds);
        if seeds.iter().all(|job| job.depth == 0) {
            return (self.handler, CollectorOutcome::Completed);
        }

        let queue_limit = self.cfg.max_queue_limit.max(1);
        let (job_tx, job_rx) = mpsc::channel::<DependencyJob>(queue_limit);
        let (result_tx, mut result_rx) = mpsc::channel::<JobResult>(queue_limit);
        let job_rx = Arc::new(Mutex::new(job_rx));

        let mut workers = Vec::with_capacity(self.cfg.max_workers);
        for _ in 0..self.cfg.max_workers.max(1) {
            workers.push(tokio::spawn(worker_loop(
                Arc::clone(&job_rx),
                result_tx.clone(),
                Arc::clone(&self.lookup),
                self.cancel.clone(),
            )));
        }
        // Workers hold the only senders; the result stream closes when the
        // pool drains.
        drop(result_tx);

        let timed_out = Arc::new(AtomicBool::new(false));
        let timer = {
            let flag = Arc::clone(&timed_out);
            let token = self.cancel.clone();
            let timeout = self.cfg.timeout;
            tokio::spawn(async move {
                tokio::select! {
                    _ = tokio::time::sleep(timeout) => {
                        flag.store(true, Ordering::SeqCst);
                        token.cancel();
                    }
                    _ = token.cancelled() => {}
                }
            })
        };

        let outcome = self
            .process_results(seeds, job_tx, &mut result_rx, &timed_out)
            .await;

        // Release workers blocked on either queue or mid-lookup, then wait
        // for the pool; results still in the channels are discarded.
        self.cancel.cancel();
        join_all(workers).await;
        let _ = timer.await;

        (self.handler, outcome)
    }

    /// The single consumer of the result queue. Owns the pending-work
    /// counter and the canonical-key seen-set as plain task-local state.
    async fn process_results(
        &mut self,
        seeds: Vec<DependencyJob>,
        job_tx: mpsc::Sender<DependencyJob>,
        result_rx: &mut mpsc::Receiver<JobResult>,
        timed_out: &AtomicBool,
    ) -> CollectorOutcome {
        let mut pending: usize = 0;
        let mut seen: HashSet<String> = HashSet::new();

        for job in seeds {
            if job.depth == 0 {
                debug!(purl = %job.purl_name, "dropping seed with exhausted depth budget");
                continue;
            }
            if !seen.insert(job.seen_key()) {
                continue;
            }
            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => return self.cancelled_outcome(timed_out),
                sent = job_tx.send(job) => {
                    if sent.is_err() {
                        return self.cancelled_outcome(timed_out);
                    }
                    pending += 1;
                }
            }
        }
        if pending == 0 {
            return CollectorOutcome::Completed;
        }

        loop {
            let result = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => return self.cancelled_outcome(timed_out),
                received = result_rx.recv() => match received {
                    Some(result) => result,
                    None => return self.cancelled_outcome(timed_out),
                },
            };

            if self.handler.on_result(&result) {
                debug!("result handler requested early stop");
                return CollectorOutcome::Stopped;
            }

            for child in &result.transitive {
                // Children that exhausted the depth budget are recorded in
                // the graph by the handler but never become jobs.
                if child.depth == 0 {
                    continue;
                }
                if !seen.insert(child.seen_key()) {
                    debug!(key = %child.seen_key(), "skipping already-seen dependency");
                    continue;
                }
                // This send blocks when the job queue is full: the
                // backpressure path that stops fan-out from outrunning the
                // worker pool.
                tokio::select! {
                    biased;
                    _ = self.cancel.cancelled() => return self.cancelled_outcome(timed_out),
                    sent = job_tx.send(child.clone()) => {
                        if sent.is_err() {
                            return self.cancelled_outcome(timed_out);
                        }
                        pending += 1;
                    }
                }
            }

            pending -= 1;
            if pending == 0 {
                return CollectorOutcome::Completed;
            }
        }
    }

    fn cancelled_outcome(&self, timed_out: &AtomicBool) -> CollectorOutcome {
        if timed_out.load(Ordering::SeqCst) {
            CollectorOutcome::TimedOut
        } else {
            CollectorOutcome::Cancelled
        }
    }
}

/// One worker: receive a job, query the knowledge base, emit exactly one
/// result. Exits on cancellation at any blocking point or when the job
/// queue closes.
async fn worker_loop<L: DependencyLookup>(
    jobs: Arc<Mutex<mpsc::Receiver<DependencyJob>>>,
    results: mpsc::Sender<JobResult>,
    lookup: Arc<L>,
    cancel: CancellationToken,
) {
    loop {
        let job = {
            let mut rx = tokio::select! {
                _ = cancel.cancelled() => return,
                guard = jobs.lock() => guard,
            };
            tokio::select! {
                _ = cancel.cancelled() => return,
                received = rx.recv() => match received {
                    Some(job) => job,
                    None => return,
                },
            }
        };

        let result = tokio::select! {
            _ = cancel.cancelled() => return,
            result = process_job(job, lookup.as_ref()) => result,
        };

        tokio::select! {
            _ = cancel.cancelled() => return,
            sent = results.send(result) => {
                if sent.is_err() {
                    return;
                }
            }
        }
    }
}

/// Resolves one job into its result. A failed lookup is logged and treated
/// as zero children - a single job's failure never aborts the batch.
async fn process_job<L: DependencyLookup>(job: DependencyJob, lookup: &L) -> JobResult {
    let declared = match lookup
        .get_dependencies(&job.purl_name, &job.version, &job.ecosystem)
        .await
    {
        Ok(declared) => declared,
        Err(e) => {
            warn!(
                purl = %job.purl_name,
                version = %job.version,
                error = %e,
                "knowledge base lookup failed; treating job as a leaf"
            );
            Vec::new()
        }
    };

    let child_depth = job.depth.saturating_sub(1);
    let transitive = declared
        .into_iter()
        .filter_map(|dep| to_child_job(dep, &job.ecosystem, child_depth))
        .collect();

    JobResult::new(job, transitive)
}

/// Normalizes one declared dependency into a concrete child job, or skips
/// it when the requirement cannot collapse to a single version.
fn to_child_job(
    declared: DeclaredDependency,
    ecosystem: &str,
    depth: u32,
) -> Option<DependencyJob> {
    match pick_first_version_from_range(&declared.requirement) {
        Ok(version) => Some(DependencyJob::new(
            declared.name,
            version,
            ecosystem.to_string(),
            depth,
        )),
        Err(e) => {
            debug!(
                name = %declared.name,
                requirement = %declared.requirement,
                error = %e,
                "skipping dependency with unresolvable requirement"
            );
            None
        }
    }
}
