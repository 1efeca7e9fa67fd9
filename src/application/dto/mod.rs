/// Data transfer objects for the application layer
pub mod resolve_request;
pub mod resolve_response;

pub use resolve_request::{EntryDependency, ResolveRequest};
pub use resolve_response::ResolveResponse;
