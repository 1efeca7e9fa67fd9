use crate::resolution::domain::DependencyGraph;
use crate::resolution::engine::CollectorOutcome;
use crate::shared::Result;

/// GraphFormatter port for rendering a resolved dependency graph
///
/// Formatters receive the final graph and the collector outcome so they
/// can surface truncation (size cap or timeout) alongside the data.
pub trait GraphFormatter {
    /// Formats the graph into the target output representation
    fn format(&self, graph: &DependencyGraph, outcome: CollectorOutcome) -> Result<String>;
}
