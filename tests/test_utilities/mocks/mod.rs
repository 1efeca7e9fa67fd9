/// Mock implementations for testing
mod mock_dependency_lookup;

pub use mock_dependency_lookup::MockDependencyLookup;
