pub mod catalog_reader;
pub mod file_writer;

pub use catalog_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
