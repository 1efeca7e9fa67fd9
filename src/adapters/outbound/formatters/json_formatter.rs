use crate::ports::outbound::GraphFormatter;
use crate::resolution::domain::DependencyGraph;
use crate::resolution::engine::CollectorOutcome;
use crate::shared::Result;
use serde::Serialize;

#[derive(Serialize)]
struct JsonOutput {
    outcome: String,
    truncated: bool,
    dependency_count: usize,
    dependencies: Vec<JsonDependency>,
}

#[derive(Serialize)]
struct JsonDependency {
    purl: String,
    version: String,
}

/// JsonFormatter renders the resolved graph as a machine-readable JSON
/// document: the flattened dependency list plus outcome metadata.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for JsonFormatter {
    fn format(&self, graph: &DependencyGraph, outcome: CollectorOutcome) -> Result<String> {
        let mut dependencies: Vec<JsonDependency> = graph
            .flatten()
            .into_iter()
            .map(|dep| JsonDependency {
                purl: dep.purl().to_string(),
                version: dep.version().to_string(),
            })
            .collect();
        // Flatten order is insertion-irrelevant; sort for stable output
        dependencies.sort_by(|a, b| (&a.purl, &a.version).cmp(&(&b.purl, &b.version)));

        let output = JsonOutput {
            outcome: outcome.to_string(),
            truncated: outcome.is_truncated(),
            dependency_count: dependencies.len(),
            dependencies,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}
