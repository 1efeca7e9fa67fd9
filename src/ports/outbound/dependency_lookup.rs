use crate::shared::Result;
use async_trait::async_trait;

/// One dependency as declared in the knowledge base: a child package name
/// and the (possibly ranged) version requirement the parent declared on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredDependency {
    pub name: String,
    pub requirement: String,
}

impl DeclaredDependency {
    pub fn new(name: impl Into<String>, requirement: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requirement: requirement.into(),
        }
    }
}

/// DependencyLookup port for querying the dependency knowledge base
///
/// This port abstracts the external store of known packages and their
/// declared dependencies. The collector's workers call it once per job;
/// it is the only I/O the resolution core performs.
///
/// # Async Support
/// Implementations must be `Send + Sync`: the collector calls this port
/// concurrently from a fixed pool of worker tasks.
#[async_trait]
pub trait DependencyLookup: Send + Sync {
    /// Fetches the declared dependencies of one concrete package version
    ///
    /// # Arguments
    /// * `purl_name` - Package name within the ecosystem
    /// * `version` - Concrete version to look up
    /// * `ecosystem` - Ecosystem the package belongs to
    ///
    /// # Returns
    /// The list of declared child dependencies; an unknown package is not
    /// an error and yields an empty list.
    ///
    /// # Errors
    /// Returns an error if the knowledge base query itself fails. The
    /// collector recovers by treating the job as a leaf.
    async fn get_dependencies(
        &self,
        purl_name: &str,
        version: &str,
        ecosystem: &str,
    ) -> Result<Vec<DeclaredDependency>>;
}
