mod adapters;
mod application;
mod cli;
mod config;
mod ports;
mod resolution;
mod shared;

use adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use adapters::outbound::knowledge_base::{
    CachingDependencyLookup, HttpKnowledgeBase, JsonKnowledgeBase,
};
use application::dto::{EntryDependency, ResolveRequest};
use application::use_cases::ResolveDependenciesUseCase;
use cli::{Args, OutputFormat};
use config::ConfigFile;
use ports::outbound::{DependencyLookup, OutputPresenter};
use resolution::domain::Ecosystem;
use resolution::engine::CollectorConfig;
use shared::error::{ExitCode, ResolveError};
use shared::Result;
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_DEPTH: u32 = 3;
const DEFAULT_MAX_DEPENDENCIES: usize = 1000;

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        eprintln!("\nAn error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(exit_code_for(&e).as_i32());
    }
}

/// Routes structured logs to stderr so stdout stays reserved for the
/// formatted graph. Controlled via RUST_LOG (off unless set).
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Maps argument-level validation failures to a distinct exit code so
/// callers can tell bad input apart from runtime failures.
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<ResolveError>() {
        Some(ResolveError::InvalidEcosystem(_)) => ExitCode::InvalidArguments,
        _ => ExitCode::ApplicationError,
    }
}

async fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate the ecosystem early, before any I/O
    let ecosystem = Ecosystem::from_str(&args.ecosystem)?;

    // Load config file (explicit path, or auto-discovered in the cwd)
    let file_config = match args.config.as_deref() {
        Some(path) => config::load_config_from_path(Path::new(path))?,
        None => config::discover_config(Path::new("."))?.unwrap_or_default(),
    };

    let collector_cfg = build_collector_config(&args, &file_config)?;
    let max_dependencies = args
        .max_dependencies
        .or(file_config.max_dependencies)
        .unwrap_or(DEFAULT_MAX_DEPENDENCIES);
    let depth = args
        .depth
        .or(file_config.default_depth)
        .unwrap_or(DEFAULT_DEPTH);
    let format = resolve_format(&args, &file_config)?;

    let entry = EntryDependency::new(
        args.name.clone(),
        args.requirement.clone(),
        ecosystem.as_str(),
    );
    let request = ResolveRequest::new(vec![entry], depth);

    // Create the knowledge-base adapter (Dependency Injection)
    let output = match (&args.kb_file, &args.kb_url) {
        (Some(path), _) => {
            let knowledge_base = JsonKnowledgeBase::from_file(Path::new(path))?;
            resolve(knowledge_base, collector_cfg, max_dependencies, request, format).await?
        }
        (None, Some(url)) => {
            let knowledge_base = HttpKnowledgeBase::new(url.clone())?;
            resolve(knowledge_base, collector_cfg, max_dependencies, request, format).await?
        }
        (None, None) => {
            anyhow::bail!(
                "No knowledge base configured. Pass --kb <file> for a local \
                 JSON snapshot or --kb-url <url> for a remote service."
            );
        }
    };

    // Present output
    let presenter: Box<dyn OutputPresenter> = if let Some(output_path) = args.output {
        Box::new(FileSystemWriter::new(PathBuf::from(output_path)))
    } else {
        Box::new(StdoutPresenter::new())
    };

    presenter.present(&output)?;

    Ok(())
}

/// Runs the use case against a concrete lookup and renders the graph
async fn resolve<L>(
    knowledge_base: L,
    collector_cfg: CollectorConfig,
    max_dependencies: usize,
    request: ResolveRequest,
    format: OutputFormat,
) -> Result<String>
where
    L: DependencyLookup + 'static,
{
    let lookup = Arc::new(CachingDependencyLookup::new(knowledge_base));
    let use_case = ResolveDependenciesUseCase::new(lookup, collector_cfg, max_dependencies);

    let response = use_case.execute(request).await?;

    let formatter = format.create_formatter();
    formatter.format(&response.graph, response.outcome)
}

/// Merges CLI flags over config-file values over built-in defaults
fn build_collector_config(args: &Args, file_config: &ConfigFile) -> Result<CollectorConfig> {
    let defaults = CollectorConfig::default();

    let max_workers = args
        .max_workers
        .or(file_config.max_workers)
        .unwrap_or(defaults.max_workers);
    let max_queue_limit = args
        .max_queue_limit
        .or(file_config.max_queue_limit)
        .unwrap_or(defaults.max_queue_limit);
    let timeout = args
        .timeout
        .or(file_config.timeout_seconds)
        .map(Duration::from_secs)
        .unwrap_or(defaults.timeout);

    if max_workers == 0 {
        anyhow::bail!("--max-workers must be at least 1");
    }
    if max_queue_limit == 0 {
        anyhow::bail!("--max-queue-limit must be at least 1");
    }

    Ok(CollectorConfig {
        max_workers,
        max_queue_limit,
        timeout,
    })
}

fn resolve_format(args: &Args, file_config: &ConfigFile) -> Result<OutputFormat> {
    if let Some(format) = args.format {
        return Ok(format);
    }
    match file_config.format.as_deref() {
        Some(name) => OutputFormat::from_str(name).map_err(|e| anyhow::anyhow!(e)),
        None => Ok(OutputFormat::Json),
    }
}
