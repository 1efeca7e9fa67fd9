use crate::ports::outbound::OutputPresenter;
use crate::shared::Result;
use anyhow::Context;
use std::path::PathBuf;

/// FileSystemWriter presents formatted output by writing it to a file
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        std::fs::write(&self.output_path, content).with_context(|| {
            format!(
                "Failed to write output to file: {}",
                self.output_path.display()
            )
        })
    }
}
