use serde::Serialize;

/// Total-cost-of-ownership breakdown for one vendor over the analysis
/// period.
///
/// The total is derived from the components at construction, so
/// `total == sum(components)` holds by definition and cannot drift.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub license: f64,
    pub implementation: f64,
    pub training: f64,
    pub support: f64,
    pub hardware: f64,
    pub maintenance: f64,
    pub operational: f64,
    pub total: f64,
}

impl CostBreakdown {
    #[allow(clippy::too_many_arguments)]
    pub fn from_components(
        license: f64,
        implementation: f64,
        training: f64,
        support: f64,
        hardware: f64,
        maintenance: f64,
        operational: f64,
    ) -> Self {
        let total =
            license + implementation + training + support + hardware + maintenance + operational;
        Self {
            license,
            implementation,
            training,
            support,
            hardware,
            maintenance,
            operational,
            total,
        }
    }

    /// Sum of the named components, computed fresh.
    ///
    /// Always equals `total`; exposed so callers and tests can assert the
    /// invariant without reimplementing the component list.
    pub fn component_sum(&self) -> f64 {
        self.license
            + self.implementation
            + self.training
            + self.support
            + self.hardware
            + self.maintenance
            + self.operational
    }

    /// Effective cost per device per month over the analysis period.
    ///
    /// `device_months` comes from a validated DeploymentConfig and is
    /// therefore always positive.
    pub fn per_device_per_month(&self, device_months: f64) -> f64 {
        self.total / device_months
    }
}
