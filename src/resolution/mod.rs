/// Resolution core: domain model, pure services, and the concurrent engine
///
/// This layer contains all resolution business logic. It depends on the
/// outbound ports for knowledge-base access but never on concrete adapters.
pub mod domain;
pub mod engine;
pub mod services;
