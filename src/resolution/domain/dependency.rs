use crate::shared::Result;

/// Maximum length for purl strings (security limit)
const MAX_PURL_LENGTH: usize = 512;

/// Maximum length for version strings (security limit)
const MAX_VERSION_LENGTH: usize = 100;

/// Dependency value object: the canonical identity of one resolved
/// package version.
///
/// Two dependencies are the same node in the graph exactly when their
/// `key()` values match, regardless of how many discovery paths reached
/// them (diamond dependencies collapse to one node).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Dependency {
    purl: String,
    version: String,
}

impl Dependency {
    /// Creates a dependency from a bare (unversioned) purl and a concrete version
    pub fn new(purl: String, version: String) -> Result<Self> {
        if purl.is_empty() {
            anyhow::bail!("Dependency purl cannot be empty");
        }
        if purl.len() > MAX_PURL_LENGTH {
            anyhow::bail!(
                "Dependency purl is too long ({} bytes). Maximum allowed: {} bytes",
                purl.len(),
                MAX_PURL_LENGTH
            );
        }
        if version.is_empty() {
            anyhow::bail!("Dependency version cannot be empty");
        }
        if version.len() > MAX_VERSION_LENGTH {
            anyhow::bail!(
                "Dependency version is too long ({} bytes). Maximum allowed: {} bytes",
                version.len(),
                MAX_VERSION_LENGTH
            );
        }

        Ok(Self { purl, version })
    }

    /// Bare purl without the version suffix, e.g. `pkg:npm/tar-stream`
    pub fn purl(&self) -> &str {
        &self.purl
    }

    /// Concrete resolved version, e.g. `2.2.0`
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Canonical equality key used by the graph node set
    pub fn key(&self) -> String {
        format!("{}@{}", self.purl, self.version)
    }
}

impl std::fmt::Display for Dependency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.purl, self.version)
    }
}

/// One unit of pending work: "resolve the children of this package".
///
/// `depth` is the remaining expansion budget. Every child job generated
/// from this one carries `depth - 1`; jobs that reach zero are reported
/// in their parent's result but never enqueued again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyJob {
    pub purl_name: String,
    pub version: String,
    pub ecosystem: String,
    pub depth: u32,
}

impl DependencyJob {
    pub fn new(purl_name: String, version: String, ecosystem: String, depth: u32) -> Self {
        Self {
            purl_name,
            version,
            ecosystem,
            depth,
        }
    }

    /// Cheap canonical key for the collector's seen-set, matching the
    /// graph key produced by job conversion for valid jobs
    pub fn seen_key(&self) -> String {
        format!(
            "pkg:{}/{}@{}",
            self.ecosystem, self.purl_name, self.version
        )
    }
}

/// The output of processing exactly one job.
///
/// Emitted exactly once per job, even when the knowledge-base lookup
/// failed (the job is then treated as a leaf with no children).
#[derive(Debug, Clone)]
pub struct JobResult {
    pub parent: DependencyJob,
    pub transitive: Vec<DependencyJob>,
}

impl JobResult {
    pub fn new(parent: DependencyJob, transitive: Vec<DependencyJob>) -> Self {
        Self { parent, transitive }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependency_new_valid() {
        let dep = Dependency::new("pkg:npm/tar-stream".to_string(), "2.2.0".to_string()).unwrap();
        assert_eq!(dep.purl(), "pkg:npm/tar-stream");
        assert_eq!(dep.version(), "2.2.0");
        assert_eq!(dep.key(), "pkg:npm/tar-stream@2.2.0");
    }

    #[test]
    fn test_dependency_empty_purl_rejected() {
        let result = Dependency::new(String::new(), "1.0.0".to_string());
        assert!(result.is_err());
    }

    #[test]
    fn test_dependency_empty_version_rejected() {
        let result = Dependency::new("pkg:npm/left-pad".to_string(), String::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_dependency_too_long_purl_rejected() {
        let long_purl = format!("pkg:npm/{}", "a".repeat(600));
        let result = Dependency::new(long_purl, "1.0.0".to_string());
        assert!(result.is_err());
    }

    #[test]
    fn test_dependency_equality_is_key_based() {
        let a = Dependency::new("pkg:npm/scanoss".to_string(), "0.15.7".to_string()).unwrap();
        let b = Dependency::new("pkg:npm/scanoss".to_string(), "0.15.7".to_string()).unwrap();
        let c = Dependency::new("pkg:npm/scanoss".to_string(), "0.16.0".to_string()).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_dependency_display() {
        let dep = Dependency::new("pkg:npm/scanoss".to_string(), "0.15.7".to_string()).unwrap();
        assert_eq!(format!("{}", dep), "pkg:npm/scanoss@0.15.7");
    }

    #[test]
    fn test_job_seen_key_matches_canonical_form() {
        let job = DependencyJob::new(
            "tar-stream".to_string(),
            "2.2.0".to_string(),
            "npm".to_string(),
            3,
        );
        assert_eq!(job.seen_key(), "pkg:npm/tar-stream@2.2.0");
    }

    #[test]
    fn test_job_result_holds_parent_and_children() {
        let parent = DependencyJob::new(
            "scanoss".to_string(),
            "0.15.7".to_string(),
            "npm".to_string(),
            2,
        );
        let child = DependencyJob::new(
            "tar-stream".to_string(),
            "2.2.0".to_string(),
            "npm".to_string(),
            1,
        );
        let result = JobResult::new(parent.clone(), vec![child]);
        assert_eq!(result.parent, parent);
        assert_eq!(result.transitive.len(), 1);
    }
}
