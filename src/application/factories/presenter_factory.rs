use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Factory for creating output presenters
///
/// Selects the output destination: a file when a path is given,
/// stdout otherwise.
pub struct PresenterFactory;

impl PresenterFactory {
    pub fn create(output_path: Option<PathBuf>) -> Box<dyn OutputPresenter> {
        match output_path {
            Some(path) => Box::new(FileSystemWriter::new(path)),
            None => Box::new(StdoutPresenter::new()),
        }
    }
}
