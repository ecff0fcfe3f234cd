use crate::shared::Result;
use std::path::Path;

/// CatalogReader port for reading catalog file contents
///
/// This port abstracts the file system operations needed to read
/// the vendor/industry catalog file.
pub trait CatalogReader {
    /// Reads the catalog file at the specified path
    ///
    /// # Arguments
    /// * `catalog_path` - Path to the catalog file
    ///
    /// # Returns
    /// The raw content of the catalog file as a string
    ///
    /// # Errors
    /// Returns an error if:
    /// - The catalog file does not exist
    /// - The file cannot be read due to permissions or I/O errors
    fn read_catalog(&self, catalog_path: &Path) -> Result<String>;
}
