/// Knowledge-base adapters implementing the DependencyLookup port
pub mod caching_lookup;
pub mod http_knowledge_base;
pub mod json_knowledge_base;

pub use caching_lookup::CachingDependencyLookup;
pub use http_knowledge_base::HttpKnowledgeBase;
pub use json_knowledge_base::JsonKnowledgeBase;
