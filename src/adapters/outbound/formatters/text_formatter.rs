use crate::ports::outbound::GraphFormatter;
use crate::resolution::domain::DependencyGraph;
use crate::resolution::engine::CollectorOutcome;
use crate::shared::Result;

/// TextFormatter renders the resolved graph as the deterministic
/// human-readable edge dump, with a summary header.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for TextFormatter {
    fn format(&self, graph: &DependencyGraph, outcome: CollectorOutcome) -> Result<String> {
        let mut output = format!(
            "# {} dependencies ({})\n",
            graph.dependency_count(),
            outcome
        );
        output.push_str(&graph.to_string());
        Ok(output)
    }
}
