use std::path::PathBuf;

/// ComparisonRequest - Internal request DTO for the comparison use case
///
/// Carries raw, caller-supplied values; the use case validates them into
/// domain types before any computation runs.
#[derive(Debug, Clone)]
pub struct ComparisonRequest {
    /// Path to the catalog file
    pub catalog_path: PathBuf,
    /// Industry to evaluate against
    pub industry_id: String,
    /// Vendors to compare; empty means every vendor in the catalog
    pub vendor_ids: Vec<String>,
    /// Vendors to exclude from the comparison
    pub exclude_vendor_ids: Vec<String>,
    /// Number of managed devices
    pub devices: u32,
    /// Analysis period in years
    pub years: u32,
    /// Fully-loaded annual cost of one FTE
    pub fte_annual_cost: f64,
    /// Optional override for the industry-average breach cost
    pub breach_cost_override: Option<f64>,
    /// Optional vendor excluded from the peer average
    pub baseline_vendor_id: Option<String>,
    /// Optional generic profile substituted for unknown vendor ids
    pub fallback_profile_id: Option<String>,
}

impl ComparisonRequest {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        catalog_path: PathBuf,
        industry_id: String,
        vendor_ids: Vec<String>,
        exclude_vendor_ids: Vec<String>,
        devices: u32,
        years: u32,
        fte_annual_cost: f64,
        breach_cost_override: Option<f64>,
        baseline_vendor_id: Option<String>,
        fallback_profile_id: Option<String>,
    ) -> Self {
        Self {
            catalog_path,
            industry_id,
            vendor_ids,
            exclude_vendor_ids,
            devices,
            years,
            fte_annual_cost,
            breach_cost_override,
            baseline_vendor_id,
            fallback_profile_id,
        }
    }
}
