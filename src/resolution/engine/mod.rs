/// Concurrent resolution engine: worker-pool collector and result handling
pub mod collector;
pub mod result_handler;

pub use collector::{CollectorConfig, CollectorOutcome, DependencyCollector};
pub use result_handler::{GraphResultHandler, ResultHandler};
