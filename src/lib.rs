//! deptree - transitive dependency graph resolution
//!
//! This library resolves the transitive dependency graph of a package by
//! repeatedly asking a knowledge base for declared dependencies, picking a
//! concrete version for each requirement range, and wiring the results into
//! a deduplicated graph. It follows hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`resolution`): Pure business logic, the dependency
//!   graph, the version-range services and the concurrent collector engine
//! - **Application Layer** (`application`): Use cases and application DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use deptree::prelude::*;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Create adapters
//! let knowledge_base = JsonKnowledgeBase::from_file(Path::new("deps.json"))?;
//! let lookup = Arc::new(CachingDependencyLookup::new(knowledge_base));
//!
//! // Create use case
//! let use_case = ResolveDependenciesUseCase::new(lookup, CollectorConfig::default(), 1000);
//!
//! // Execute
//! let entry = EntryDependency::new("lodash", "^4.17.0", "npm");
//! let request = ResolveRequest::new(vec![entry], 3);
//! let response = use_case.execute(request).await?;
//!
//! // Format output
//! let formatter = JsonFormatter::new();
//! let output = formatter.format(&response.graph, response.outcome)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod resolution;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::adapters::outbound::knowledge_base::{
        CachingDependencyLookup, HttpKnowledgeBase, JsonKnowledgeBase,
    };
    pub use crate::application::dto::{EntryDependency, ResolveRequest, ResolveResponse};
    pub use crate::application::use_cases::ResolveDependenciesUseCase;
    pub use crate::ports::outbound::{
        DeclaredDependency, DependencyLookup, GraphFormatter, OutputPresenter,
    };
    pub use crate::resolution::domain::{
        Dependency, DependencyGraph, DependencyJob, Ecosystem, JobResult,
    };
    pub use crate::resolution::engine::{
        CollectorConfig, CollectorOutcome, DependencyCollector, GraphResultHandler, ResultHandler,
    };
    pub use crate::resolution::services::pick_first_version_from_range;
    pub use crate::shared::Result;
}
