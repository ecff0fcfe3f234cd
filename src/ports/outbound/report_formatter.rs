use crate::application::read_models::ComparisonReadModel;
use crate::shared::Result;

/// ReportFormatter port for formatting comparison output
///
/// This port abstracts the formatting logic for different report formats
/// (JSON, Markdown, etc.).
pub trait ReportFormatter {
    /// Formats the comparison report from the unified read model
    ///
    /// # Arguments
    /// * `model` - The unified comparison read model containing metadata,
    ///   deployment parameters, and per-vendor result rows
    ///
    /// # Returns
    /// Formatted report content as a string
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format(&self, model: &ComparisonReadModel) -> Result<String>;
}
