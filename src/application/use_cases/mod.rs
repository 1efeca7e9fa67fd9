/// Application use cases
pub mod resolve_dependencies;

pub use resolve_dependencies::ResolveDependenciesUseCase;
