use crate::shared::Result;
use std::num::NonZeroU32;

/// Upper bound on the analysis period. Projections beyond a decade are
/// meaningless for this product category.
const MAX_ANALYSIS_YEARS: u32 = 10;

/// Caller-supplied deployment configuration.
///
/// Device count and analysis period are non-zero by construction, so the
/// per-device-per-month divisor can never be zero downstream. Passed by
/// reference into the pure calculation services and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct DeploymentConfig {
    devices: NonZeroU32,
    years: NonZeroU32,
    fte_annual_cost: f64,
    breach_cost_override: Option<f64>,
}

impl DeploymentConfig {
    pub fn new(devices: u32, years: u32, fte_annual_cost: f64) -> Result<Self> {
        let devices = NonZeroU32::new(devices)
            .ok_or_else(|| anyhow::anyhow!("Device count must be greater than zero"))?;
        let years = NonZeroU32::new(years)
            .ok_or_else(|| anyhow::anyhow!("Analysis period must be at least 1 year"))?;
        if years.get() > MAX_ANALYSIS_YEARS {
            anyhow::bail!(
                "Analysis period must be at most {} years, got {}",
                MAX_ANALYSIS_YEARS,
                years
            );
        }
        if !fte_annual_cost.is_finite() || fte_annual_cost < 0.0 {
            anyhow::bail!(
                "FTE annual cost must be non-negative and finite, got {}",
                fte_annual_cost
            );
        }

        Ok(Self {
            devices,
            years,
            fte_annual_cost,
            breach_cost_override: None,
        })
    }

    /// Replaces the industry-average breach cost with an explicit figure.
    pub fn with_breach_cost_override(mut self, breach_cost: f64) -> Result<Self> {
        if !breach_cost.is_finite() || breach_cost < 0.0 {
            anyhow::bail!(
                "Breach cost override must be non-negative and finite, got {}",
                breach_cost
            );
        }
        self.breach_cost_override = Some(breach_cost);
        Ok(self)
    }

    pub fn devices(&self) -> u32 {
        self.devices.get()
    }

    pub fn years(&self) -> u32 {
        self.years.get()
    }

    pub fn fte_annual_cost(&self) -> f64 {
        self.fte_annual_cost
    }

    pub fn breach_cost_override(&self) -> Option<f64> {
        self.breach_cost_override
    }

    /// Total device-months in the analysis period.
    pub fn device_months(&self) -> f64 {
        f64::from(self.devices.get()) * 12.0 * f64::from(self.years.get())
    }
}
