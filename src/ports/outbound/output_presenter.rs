use crate::shared::Result;

/// OutputPresenter port for delivering formatted output
///
/// Implementations decide where the formatted graph ends up
/// (stdout, a file, ...).
pub trait OutputPresenter {
    /// Presents the formatted content to its destination
    fn present(&self, content: &str) -> Result<()>;
}
