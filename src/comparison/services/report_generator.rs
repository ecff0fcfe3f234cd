use crate::comparison::domain::ReportMetadata;
use chrono::Utc;
use uuid::Uuid;

/// ReportGenerator service for generating comparison report metadata
///
/// Stamps each report with a generation timestamp and a unique serial
/// number so downstream systems can distinguish report revisions.
pub struct ReportGenerator;

impl ReportGenerator {
    /// Generates report metadata with current timestamp and unique serial number
    ///
    /// # Arguments
    /// * `tool_name` - Name of the tool generating the report
    /// * `tool_version` - Version of the tool
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> ReportMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let serial_number = format!("urn:uuid:{}", Uuid::new_v4());

        ReportMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            serial_number,
        )
    }

    /// Generates report metadata with default tool information (nac-tco)
    ///
    /// This uses the compile-time version from Cargo.toml
    pub fn generate_default_metadata() -> ReportMetadata {
        Self::generate_metadata("nac-tco", env!("CARGO_PKG_VERSION"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_metadata() {
        let metadata = ReportGenerator::generate_metadata("test-tool", "1.0.0");

        assert_eq!(metadata.tool_name(), "test-tool");
        assert_eq!(metadata.tool_version(), "1.0.0");
        assert!(metadata.serial_number().starts_with("urn:uuid:"));
        assert!(!metadata.timestamp().is_empty());
    }

    #[test]
    fn test_generate_default_metadata() {
        let metadata = ReportGenerator::generate_default_metadata();

        assert_eq!(metadata.tool_name(), "nac-tco");
        assert_eq!(metadata.tool_version(), env!("CARGO_PKG_VERSION"));
        assert!(metadata.serial_number().starts_with("urn:uuid:"));
    }

    #[test]
    fn test_generate_metadata_timestamp_format() {
        let metadata = ReportGenerator::generate_metadata("test-tool", "1.0.0");
        let timestamp = metadata.timestamp();

        // RFC3339 format should contain 'T' and timezone info
        assert!(timestamp.contains('T'));
        assert!(timestamp.contains('+') || timestamp.contains('Z'));
    }

    #[test]
    fn test_generate_metadata_unique_serial_numbers() {
        let metadata1 = ReportGenerator::generate_metadata("test-tool", "1.0.0");
        let metadata2 = ReportGenerator::generate_metadata("test-tool", "1.0.0");

        assert_ne!(metadata1.serial_number(), metadata2.serial_number());
    }
}
