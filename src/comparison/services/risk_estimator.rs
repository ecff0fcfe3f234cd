use crate::comparison::domain::{
    DeploymentConfig, IndustryRiskRecord, InsuranceTier, Payback, RoiResult,
    VendorCapabilityRecord,
};
use crate::shared::Result;

/// Payback is never reported below one month
const MIN_PAYBACK_MONTHS: f64 = 1.0;

/// RiskEstimator service for computing avoided-risk value and ROI
///
/// Pure business logic: given a vendor's capability record, an industry
/// risk profile, and a previously computed TCO total, it produces the
/// annual value stream and the derived ROI/payback figures. Deterministic
/// for identical inputs; no clock, no randomness.
pub struct RiskEstimator;

impl RiskEstimator {
    /// Computes the benefit/risk estimate for one vendor.
    ///
    /// # Arguments
    /// * `capabilities` - The vendor's capability/risk-reduction record
    /// * `industry` - The industry risk profile
    /// * `tco_total` - Previously computed total cost; must be finite.
    ///   Negative totals are accepted and reported as immediate payback.
    /// * `config` - Validated deployment configuration
    ///
    /// # Errors
    /// Returns an error if `tco_total` is NaN or infinite.
    pub fn compute_roi(
        capabilities: &VendorCapabilityRecord,
        industry: &IndustryRiskRecord,
        tco_total: f64,
        config: &DeploymentConfig,
    ) -> Result<RoiResult> {
        if !tco_total.is_finite() {
            anyhow::bail!("TCO total must be finite, got {}", tco_total);
        }

        let breach_cost = config
            .breach_cost_override()
            .unwrap_or_else(|| industry.average_breach_cost());

        let avoided_breach_value = breach_cost
            * industry.annual_breach_probability()
            * capabilities.breach_probability_reduction();

        // Negative when the vendor needs more staff than the industry
        // baseline; kept as-is so a bad fit shows up as negative ROI.
        let operational_savings = (industry.baseline_fte_requirement()
            - capabilities.fte_requirement())
            * config.fte_annual_cost();

        let downtime_savings = industry.downtime_cost_per_hour()
            * Self::downtime_hours_avoided(capabilities, industry);

        let insurance_savings = industry.insurance_premium_baseline()
            * industry
                .premium_discounts()
                .for_tier(InsuranceTier::from_overall_score(capabilities.overall_score()));

        let annual_value = avoided_breach_value + operational_savings + downtime_savings;

        let years = f64::from(config.years());
        let roi_percent = if tco_total > 0.0 {
            Some((annual_value * years - tco_total) / tco_total * 100.0)
        } else {
            None
        };

        let payback = Self::payback(tco_total, annual_value);

        Ok(RoiResult {
            avoided_breach_value,
            operational_savings,
            downtime_savings,
            insurance_savings,
            annual_value,
            roi_percent,
            payback,
        })
    }

    /// Annual downtime hours removed by the vendor.
    ///
    /// Deterministic scoring rule: ransomware incidents dominate outage
    /// time in this product category, so the vendor's ransomware
    /// protection factor scales the industry's expected annual downtime.
    fn downtime_hours_avoided(
        capabilities: &VendorCapabilityRecord,
        industry: &IndustryRiskRecord,
    ) -> f64 {
        industry.annual_downtime_hours() * capabilities.ransomware_protection()
    }

    fn payback(tco_total: f64, annual_value: f64) -> Payback {
        if tco_total <= 0.0 {
            return Payback::Immediate;
        }
        if annual_value <= 0.0 {
            return Payback::NotApplicable;
        }
        let months = tco_total / (annual_value / 12.0);
        Payback::Months(months.max(MIN_PAYBACK_MONTHS))
    }
}
