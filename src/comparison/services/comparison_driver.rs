use crate::comparison::domain::catalog::Catalog;
use crate::comparison::domain::{
    CostBreakdown, DeploymentConfig, IndustryId, PeerSavings, RoiResult, VendorCapabilityRecord,
    VendorId,
};
use crate::comparison::policies::FallbackPolicy;
use crate::comparison::services::{CostAggregator, RiskEstimator};
use crate::shared::error::TcoError;
use crate::shared::Result;

/// One vendor's fully computed comparison row.
#[derive(Debug, Clone, PartialEq)]
pub struct VendorComparison {
    pub vendor_id: VendorId,
    pub vendor_name: String,
    pub cost: CostBreakdown,
    pub per_device_per_month: f64,
    pub roi: RoiResult,
    pub capabilities: VendorCapabilityRecord,
    /// 1-based rank by ascending total cost
    pub rank: usize,
    pub savings_vs_peer_average: PeerSavings,
    pub deployment_days: u32,
    /// True when the row was computed from a substituted fallback profile
    pub fallback_applied: bool,
}

/// ComparisonDriver service for running the full vendor comparison
///
/// Runs the cost aggregator and risk estimator for every requested vendor,
/// then ranks the rows and annotates each with savings relative to the
/// peer-average total cost. Stateless; every invocation is independent.
pub struct ComparisonDriver;

impl ComparisonDriver {
    /// Compares the given vendors within one industry.
    ///
    /// # Arguments
    /// * `catalog` - Immutable vendor/industry catalog
    /// * `vendor_ids` - Vendors to compare (duplicates are collapsed)
    /// * `industry_id` - Industry risk profile to evaluate against
    /// * `config` - Validated deployment configuration
    /// * `fallback` - Policy for unknown vendor ids
    /// * `baseline` - Optional vendor excluded from the peer average
    ///
    /// # Returns
    /// Rows sorted ascending by total cost, ties broken by vendor id.
    ///
    /// # Errors
    /// `IndustryNotFound` for an unknown industry; `VendorNotFound` per the
    /// fallback policy; estimator errors propagate unchanged.
    pub fn compare(
        catalog: &Catalog,
        vendor_ids: &[VendorId],
        industry_id: &IndustryId,
        config: &DeploymentConfig,
        fallback: &FallbackPolicy,
        baseline: Option<&VendorId>,
    ) -> Result<Vec<VendorComparison>> {
        let industry = catalog.industry(industry_id).ok_or_else(|| {
            TcoError::IndustryNotFound {
                industry_id: industry_id.to_string(),
            }
        })?;

        let mut ids: Vec<VendorId> = vendor_ids.to_vec();
        ids.sort();
        ids.dedup();

        let mut rows = Vec::with_capacity(ids.len());
        for id in &ids {
            let resolved = fallback.resolve(catalog, id)?;
            let cost = CostAggregator::compute_tco(&resolved.entry.cost, config);
            let roi = RiskEstimator::compute_roi(
                &resolved.entry.capabilities,
                industry,
                cost.total,
                config,
            )?;
            let per_device_per_month = cost.per_device_per_month(config.device_months());

            rows.push(VendorComparison {
                vendor_id: id.clone(),
                vendor_name: resolved.entry.cost.name().as_str().to_string(),
                cost,
                per_device_per_month,
                roi,
                capabilities: resolved.entry.capabilities.clone(),
                rank: 0,
                savings_vs_peer_average: PeerSavings::NotApplicable,
                deployment_days: resolved.entry.cost.deployment_days(),
                fallback_applied: resolved.substituted,
            });
        }

        Self::annotate_peer_savings(&mut rows, baseline);

        // Deterministic presentation order: cheapest first, id breaks ties
        rows.sort_by(|a, b| {
            a.cost
                .total
                .partial_cmp(&b.cost.total)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.vendor_id.cmp(&b.vendor_id))
        });
        for (index, row) in rows.iter_mut().enumerate() {
            row.rank = index + 1;
        }

        Ok(rows)
    }

    /// Annotates each row with its savings relative to the peer average.
    ///
    /// The peer average excludes the designated baseline vendor. With
    /// fewer than two compared vendors, or an empty or zero-cost peer
    /// set, savings stay NotApplicable for every row.
    fn annotate_peer_savings(rows: &mut [VendorComparison], baseline: Option<&VendorId>) {
        if rows.len() < 2 {
            return;
        }

        let peers: Vec<&VendorComparison> = rows
            .iter()
            .filter(|row| Some(&row.vendor_id) != baseline)
            .collect();
        if peers.is_empty() {
            return;
        }

        let peer_average =
            peers.iter().map(|row| row.cost.total).sum::<f64>() / peers.len() as f64;
        if peer_average <= 0.0 {
            return;
        }

        for row in rows.iter_mut() {
            row.savings_vs_peer_average =
                PeerSavings::Percent((1.0 - row.cost.total / peer_average) * 100.0);
        }
    }
}
