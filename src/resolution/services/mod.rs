/// Pure resolution services with no I/O dependencies
pub mod version_range;

pub use version_range::{extract_dependency_from_job, pick_first_version_from_range};
