use async_trait::async_trait;
use deptree::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock DependencyLookup for testing
///
/// Declared dependencies are registered per `name@version` key with a
/// builder-style API. Unregistered packages resolve to an empty list,
/// mirroring how the real knowledge base treats unknown packages.
pub struct MockDependencyLookup {
    deps: HashMap<String, Vec<DeclaredDependency>>,
    failing: HashSet<String>,
    calls: AtomicUsize,
}

impl MockDependencyLookup {
    pub fn new() -> Self {
        Self {
            deps: HashMap::new(),
            failing: HashSet::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_deps(mut self, name: &str, version: &str, deps: Vec<(&str, &str)>) -> Self {
        self.deps.insert(
            format!("{}@{}", name, version),
            deps.into_iter()
                .map(|(n, r)| DeclaredDependency::new(n, r))
                .collect(),
        );
        self
    }

    pub fn with_failure(mut self, name: &str, version: &str) -> Self {
        self.failing.insert(format!("{}@{}", name, version));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockDependencyLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DependencyLookup for MockDependencyLookup {
    async fn get_dependencies(
        &self,
        purl_name: &str,
        version: &str,
        _ecosystem: &str,
    ) -> Result<Vec<DeclaredDependency>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let key = format!("{}@{}", purl_name, version);
        if self.failing.contains(&key) {
            anyhow::bail!("Mock knowledge base failure for {}", key);
        }
        Ok(self.deps.get(&key).cloned().unwrap_or_default())
    }
}
