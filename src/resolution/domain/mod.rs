/// Domain model for dependency resolution
pub mod dependency;
pub mod dependency_graph;
pub mod ecosystem;

pub use dependency::{Dependency, DependencyJob, JobResult};
pub use dependency_graph::DependencyGraph;
pub use ecosystem::Ecosystem;
