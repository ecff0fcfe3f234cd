use crate::comparison::domain::{
    DeploymentConfig, IndustryId, IndustryRiskRecord, ReportMetadata,
};
use crate::comparison::services::VendorComparison;

/// ComparisonResponse - Internal response DTO from the comparison use case
///
/// Contains the rich domain results, which adapters then format into the
/// appropriate output format.
#[derive(Debug, Clone)]
pub struct ComparisonResponse {
    /// Per-vendor results, sorted ascending by total cost
    pub rows: Vec<VendorComparison>,
    /// Industry the comparison was evaluated against
    pub industry_id: IndustryId,
    pub industry: IndustryRiskRecord,
    /// Validated deployment configuration the results were computed with
    pub config: DeploymentConfig,
    /// Report metadata (timestamp, tool info, serial number)
    pub metadata: ReportMetadata,
}

impl ComparisonResponse {
    pub fn new(
        rows: Vec<VendorComparison>,
        industry_id: IndustryId,
        industry: IndustryRiskRecord,
        config: DeploymentConfig,
        metadata: ReportMetadata,
    ) -> Self {
        Self {
            rows,
            industry_id,
            industry,
            config,
            metadata,
        }
    }
}
