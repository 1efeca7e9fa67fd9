/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the resolution core uses to
/// interact with external systems (knowledge base, console, file system).
pub mod dependency_lookup;
pub mod graph_formatter;
pub mod output_presenter;

pub use dependency_lookup::{DeclaredDependency, DependencyLookup};
pub use graph_formatter::GraphFormatter;
pub use output_presenter::OutputPresenter;
