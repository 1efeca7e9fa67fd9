use crate::ports::outbound::{DeclaredDependency, DependencyLookup};
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct DeclaredDependencyRecord {
    name: String,
    requirement: String,
}

/// File schema: ecosystem -> "name@version" -> declared dependencies
type KnowledgeBaseFile = HashMap<String, HashMap<String, Vec<DeclaredDependencyRecord>>>;

/// JsonKnowledgeBase adapter backed by a local JSON snapshot of the
/// dependency knowledge base.
///
/// Intended for offline use and testing; the whole snapshot is loaded
/// into memory once at construction. A package missing from the snapshot
/// is not an error - it simply has no known dependencies.
pub struct JsonKnowledgeBase {
    entries: HashMap<String, Vec<DeclaredDependency>>,
}

impl JsonKnowledgeBase {
    /// Loads a knowledge-base snapshot from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read knowledge base file: {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse knowledge base file: {}", path.display()))
    }

    /// Parses a knowledge-base snapshot from a JSON string
    pub fn from_json(content: &str) -> Result<Self> {
        let parsed: KnowledgeBaseFile = serde_json::from_str(content)?;

        let mut entries = HashMap::new();
        for (ecosystem, packages) in parsed {
            for (key, records) in packages {
                let deps = records
                    .into_iter()
                    .map(|r| DeclaredDependency::new(r.name, r.requirement))
                    .collect();
                entries.insert(format!("{}:{}", ecosystem, key), deps);
            }
        }

        Ok(Self { entries })
    }

    /// Number of distinct package versions in the snapshot
    pub fn package_count(&self) -> usize {
        self.entries.len()
    }
}

#[async_trait]
impl DependencyLookup for JsonKnowledgeBase {
    async fn get_dependencies(
        &self,
        purl_name: &str,
        version: &str,
        ecosystem: &str,
    ) -> Result<Vec<DeclaredDependency>> {
        let key = format!("{}:{}@{}", ecosystem.to_lowercase(), purl_name, version);
        Ok(self.entries.get(&key).cloned().unwrap_or_default())
    }
}
