use nac_tco::prelude::*;
use std::path::Path;

/// Mock CatalogReader for testing that serves in-memory content
pub struct MockCatalogReader {
    content: Option<String>,
}

impl MockCatalogReader {
    pub fn new(content: String) -> Self {
        Self {
            content: Some(content),
        }
    }

    pub fn with_failure() -> Self {
        Self { content: None }
    }
}

impl CatalogReader for MockCatalogReader {
    fn read_catalog(&self, _catalog_path: &Path) -> Result<String> {
        match &self.content {
            Some(content) => Ok(content.clone()),
            None => anyhow::bail!("Simulated catalog read failure"),
        }
    }
}
