use crate::application::read_models::ComparisonReadModel;
use crate::ports::outbound::ReportFormatter;
use crate::shared::error::TcoError;
use crate::shared::Result;

/// JsonFormatter adapter for machine-readable comparison output
///
/// Serializes the read model directly; the JSON shape is the read model's
/// serde representation.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, model: &ComparisonReadModel) -> Result<String> {
        serde_json::to_string_pretty(model).map_err(|e| {
            TcoError::OutputGenerationError {
                format: "JSON".to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
