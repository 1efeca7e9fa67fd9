/// Ports (interfaces) following hexagonal architecture
pub mod outbound;
