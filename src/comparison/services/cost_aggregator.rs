use crate::comparison::domain::{CostBreakdown, DeploymentConfig, VendorCostRecord};

/// CostAggregator service for computing total cost of ownership
///
/// This service contains pure business logic for the TCO calculation.
/// It has no I/O dependencies, works only with domain objects, and never
/// mutates the vendor record it reads from.
pub struct CostAggregator;

impl CostAggregator {
    /// Computes the full cost breakdown for one vendor over the analysis
    /// period.
    ///
    /// # Arguments
    /// * `vendor` - The vendor's immutable pricing record
    /// * `config` - Validated deployment configuration (devices and years
    ///   are non-zero by construction)
    ///
    /// # Returns
    /// A CostBreakdown whose total is exactly the sum of its components.
    /// All components are non-negative given a validated record and config.
    pub fn compute_tco(vendor: &VendorCostRecord, config: &DeploymentConfig) -> CostBreakdown {
        let devices = f64::from(config.devices());
        let years = f64::from(config.years());

        // Subscription: discounted per-device monthly rate over the full term
        let base_rate = vendor.monthly_rate_for_term(config.years());
        let discount = vendor.volume_discount(config.devices());
        let license = base_rate * (1.0 - discount) * devices * 12.0 * years;

        // One-time costs, not scaled by the analysis period
        let implementation = vendor.implementation_cost();
        let training = vendor.training_cost();
        let hardware = vendor.hardware_cost();

        // Recurring costs
        let support = vendor.annual_support_cost() * years;
        let maintenance = hardware * vendor.hardware_maintenance_rate() * years;
        let operational = vendor.fte_headcount() * config.fte_annual_cost() * years;

        CostBreakdown::from_components(
            license,
            implementation,
            training,
            support,
            hardware,
            maintenance,
            operational,
        )
    }
}
