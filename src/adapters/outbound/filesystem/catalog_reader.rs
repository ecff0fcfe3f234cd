use crate::ports::outbound::CatalogReader;
use crate::shared::error::TcoError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum file size for security (10 MB); catalogs are small
const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// FileSystemReader adapter for reading the catalog from the file system
///
/// Implements the CatalogReader port with the usual file-system hygiene:
/// symlinks are rejected and oversized files refused before reading.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        let metadata = fs::symlink_metadata(path)
            .map_err(|e| anyhow::anyhow!("Failed to read catalog metadata: {}", e))?;

        if metadata.is_symlink() {
            return Err(TcoError::SecurityError {
                path: path.to_path_buf(),
                reason: "Catalog path is a symbolic link".to_string(),
                hint: "Point --catalog at the regular file directly".to_string(),
            }
            .into());
        }

        if !metadata.is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }

        let file_size = metadata.len();
        if file_size > MAX_FILE_SIZE {
            return Err(TcoError::SecurityError {
                path: path.to_path_buf(),
                reason: format!(
                    "Catalog file is too large ({} bytes, maximum {} bytes)",
                    file_size, MAX_FILE_SIZE
                ),
                hint: "Split the catalog or remove unused records".to_string(),
            }
            .into());
        }

        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read catalog: {}", e))
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogReader for FileSystemReader {
    fn read_catalog(&self, catalog_path: &Path) -> Result<String> {
        if !catalog_path.exists() {
            return Err(TcoError::CatalogNotFound {
                path: catalog_path.to_path_buf(),
                suggestion: format!(
                    "Catalog file \"{}\" does not exist.\n   \
                     Create a nac-catalog.toml, or point --catalog at an existing one.",
                    catalog_path.display()
                ),
            }
            .into());
        }

        self.safe_read_file(catalog_path).map_err(|e| {
            TcoError::FileReadError {
                path: catalog_path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
