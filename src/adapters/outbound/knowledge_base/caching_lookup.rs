use crate::ports::outbound::{DeclaredDependency, DependencyLookup};
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// Cache key for one concrete package version within an ecosystem
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct CacheKey {
    ecosystem: String,
    purl_name: String,
    version: String,
}

impl CacheKey {
    fn new(purl_name: &str, version: &str, ecosystem: &str) -> Self {
        Self {
            ecosystem: ecosystem.to_string(),
            purl_name: purl_name.to_string(),
            version: version.to_string(),
        }
    }
}

/// CachingDependencyLookup wraps a DependencyLookup and adds in-memory
/// caching.
///
/// This adapter implements the decorator pattern to add caching to any
/// DependencyLookup implementation. The cache is an explicitly injected
/// object scoped to this decorator instance, never module-level state, and
/// is thread-safe for the collector's concurrent worker pool.
pub struct CachingDependencyLookup<L: DependencyLookup> {
    inner: L,
    cache: Arc<DashMap<CacheKey, Vec<DeclaredDependency>>>,
}

impl<L: DependencyLookup> CachingDependencyLookup<L> {
    /// Creates a new caching lookup wrapping the given inner lookup
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Drops all cached entries
    pub fn invalidate(&self) {
        self.cache.clear();
    }

    /// Returns the current cache size (for testing/monitoring)
    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<L: DependencyLookup> DependencyLookup for CachingDependencyLookup<L> {
    async fn get_dependencies(
        &self,
        purl_name: &str,
        version: &str,
        ecosystem: &str,
    ) -> Result<Vec<DeclaredDependency>> {
        let key = CacheKey::new(purl_name, version, ecosystem);

        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached.clone());
        }

        // Cache miss: only successful lookups are cached, so a transient
        // knowledge-base failure can be retried on a later request
        let deps = self
            .inner
            .get_dependencies(purl_name, version, ecosystem)
            .await?;
        self.cache.insert(key, deps.clone());

        Ok(deps)
    }
}
