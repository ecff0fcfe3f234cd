use crate::application::dto::{ComparisonRequest, ComparisonResponse};
use crate::catalog;
use crate::comparison::domain::catalog::Catalog;
use crate::comparison::domain::{DeploymentConfig, IndustryId, VendorId};
use crate::comparison::policies::FallbackPolicy;
use crate::comparison::services::{ComparisonDriver, ReportGenerator};
use crate::ports::outbound::{CatalogReader, ProgressReporter};
use crate::shared::error::TcoError;
use crate::shared::Result;
use indicatif::{ProgressBar, ProgressStyle};

/// RunComparisonUseCase - Core use case for vendor comparison
///
/// Orchestrates the comparison workflow using generic dependency
/// injection for all infrastructure dependencies: read the catalog,
/// validate the request into domain types, run the comparison driver,
/// and stamp the response with report metadata.
///
/// # Type Parameters
/// * `CR` - CatalogReader implementation
/// * `PR` - ProgressReporter implementation
pub struct RunComparisonUseCase<CR, PR> {
    catalog_reader: CR,
    progress_reporter: PR,
}

impl<CR, PR> RunComparisonUseCase<CR, PR>
where
    CR: CatalogReader,
    PR: ProgressReporter,
{
    /// Creates a new RunComparisonUseCase with injected dependencies
    pub fn new(catalog_reader: CR, progress_reporter: PR) -> Self {
        Self {
            catalog_reader,
            progress_reporter,
        }
    }

    /// Executes the comparison use case
    ///
    /// # Arguments
    /// * `request` - Comparison request with catalog path, industry,
    ///   vendor selection, and deployment parameters
    ///
    /// # Returns
    /// ComparisonResponse with ranked per-vendor results and metadata
    pub fn execute(&self, request: ComparisonRequest) -> Result<ComparisonResponse> {
        let catalog = self.load_catalog(&request)?;
        let config = Self::build_deployment_config(&request)?;
        let industry_id = IndustryId::new(request.industry_id.clone())?;

        let industry = catalog
            .industry(&industry_id)
            .ok_or_else(|| TcoError::IndustryNotFound {
                industry_id: industry_id.to_string(),
            })?
            .clone();

        let fallback = Self::build_fallback_policy(&request)?;
        let vendor_ids = self.select_vendors(&catalog, &request, &fallback)?;

        let baseline = request
            .baseline_vendor_id
            .as_ref()
            .map(|id| VendorId::new(id.clone()))
            .transpose()?;

        self.progress_reporter.report(&format!(
            "🧮 Comparing {} vendor(s) against the \"{}\" industry profile",
            vendor_ids.len(),
            industry_id
        ));

        let rows = ComparisonDriver::compare(
            &catalog,
            &vendor_ids,
            &industry_id,
            &config,
            &fallback,
            baseline.as_ref(),
        )?;

        let metadata = ReportGenerator::generate_default_metadata();

        self.progress_reporter
            .report_completion(&format!("Ranked {} vendor(s) by total cost", rows.len()));

        Ok(ComparisonResponse::new(
            rows,
            industry_id,
            industry,
            config,
            metadata,
        ))
    }

    /// Reads and parses the catalog file, reporting progress
    fn load_catalog(&self, request: &ComparisonRequest) -> Result<Catalog> {
        self.progress_reporter.report(&format!(
            "📖 Loading catalog from: {}",
            request.catalog_path.display()
        ));

        let content = self.catalog_reader.read_catalog(&request.catalog_path)?;

        let parsed = catalog::parse_catalog(&content).map_err(|e| TcoError::CatalogParseError {
            path: request.catalog_path.clone(),
            details: format!("{:#}", e),
        })?;

        self.progress_reporter.report(&format!(
            "✅ Loaded {} vendor(s) and {} industry profile(s)",
            parsed.vendor_count(),
            parsed.industry_count()
        ));

        Ok(parsed)
    }

    fn build_deployment_config(request: &ComparisonRequest) -> Result<DeploymentConfig> {
        let config = DeploymentConfig::new(request.devices, request.years, request.fte_annual_cost)
            .map_err(|e| TcoError::InvalidInput {
                message: e.to_string(),
                hint: "Pass positive --devices and --years values".to_string(),
            })?;

        match request.breach_cost_override {
            Some(breach_cost) => {
                config
                    .with_breach_cost_override(breach_cost)
                    .map_err(|e| TcoError::InvalidInput {
                        message: e.to_string(),
                        hint: "Pass a non-negative --breach-cost value".to_string(),
                    }.into())
            }
            None => Ok(config),
        }
    }

    fn build_fallback_policy(request: &ComparisonRequest) -> Result<FallbackPolicy> {
        match &request.fallback_profile_id {
            Some(profile_id) => Ok(FallbackPolicy::SubstituteProfile(VendorId::new(
                profile_id.clone(),
            )?)),
            None => Ok(FallbackPolicy::Strict),
        }
    }

    /// Resolves the vendor selection and pre-validates every id against
    /// the fallback policy, warning about substitutions.
    ///
    /// # Errors
    /// Returns an error if the selection ends up empty after exclusions.
    fn select_vendors(
        &self,
        catalog: &Catalog,
        request: &ComparisonRequest,
        fallback: &FallbackPolicy,
    ) -> Result<Vec<VendorId>> {
        let mut selected: Vec<VendorId> = if request.vendor_ids.is_empty() {
            catalog.vendor_ids().cloned().collect()
        } else {
            request
                .vendor_ids
                .iter()
                .map(|id| VendorId::new(id.clone()))
                .collect::<Result<Vec<_>>>()?
        };

        if !request.exclude_vendor_ids.is_empty() {
            let excluded: Vec<VendorId> = request
                .exclude_vendor_ids
                .iter()
                .map(|id| VendorId::new(id.clone()))
                .collect::<Result<Vec<_>>>()?;

            let original_count = selected.len();
            selected.retain(|id| !excluded.contains(id));

            let removed = original_count - selected.len();
            if removed > 0 {
                self.progress_reporter
                    .report(&format!("🚫 Excluded {} vendor(s)", removed));
            }
        }

        if selected.is_empty() {
            anyhow::bail!(
                "No vendors left to compare. The catalog contains {} vendor(s); \
                 please adjust your --vendor/--exclude selection.",
                catalog.vendor_count()
            );
        }

        let bar = ProgressBar::new(selected.len() as u64);
        if let Ok(style) = ProgressStyle::with_template("{bar:30} {pos}/{len} {msg}") {
            bar.set_style(style);
        }
        for id in &selected {
            bar.set_message(id.to_string());
            let resolved = fallback.resolve(catalog, id)?;
            if resolved.substituted {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: vendor \"{}\" is not in the catalog; using the fallback profile.",
                    id
                ));
            }
            bar.inc(1);
        }
        bar.finish_and_clear();

        Ok(selected)
    }
}
