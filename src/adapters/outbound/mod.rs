/// Outbound adapters - Infrastructure implementations
pub mod filesystem;
pub mod formatters;
pub mod knowledge_base;
