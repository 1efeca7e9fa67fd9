use crate::ports::outbound::OutputPresenter;
use crate::shared::Result;

/// StdoutPresenter prints formatted output to standard output
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        println!("{}", content);
        Ok(())
    }
}
