/// Filesystem and console adapters
pub mod file_writer;
pub mod stdout_presenter;

pub use file_writer::FileSystemWriter;
pub use stdout_presenter::StdoutPresenter;
