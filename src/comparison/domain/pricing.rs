use crate::comparison::domain::vendor::VendorName;
use crate::shared::Result;

/// A per-device monthly rate that applies from a minimum contract length.
///
/// Vendors quote lower monthly rates for longer commitments; the tier with
/// the highest `min_term_years` not exceeding the analysis period wins.
#[derive(Debug, Clone, PartialEq)]
pub struct TermRate {
    min_term_years: u32,
    monthly_rate: f64,
}

impl TermRate {
    pub fn new(min_term_years: u32, monthly_rate: f64) -> Result<Self> {
        if min_term_years == 0 {
            anyhow::bail!("Term rate minimum term must be at least 1 year");
        }
        validate_money(monthly_rate, "monthly rate")?;
        Ok(Self {
            min_term_years,
            monthly_rate,
        })
    }

    pub fn min_term_years(&self) -> u32 {
        self.min_term_years
    }

    pub fn monthly_rate(&self) -> f64 {
        self.monthly_rate
    }
}

/// A volume-discount bracket: at or above `min_devices`, the listed
/// percentage comes off the per-device rate.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountBracket {
    min_devices: u32,
    percent: f64,
}

impl DiscountBracket {
    pub fn new(min_devices: u32, percent: f64) -> Result<Self> {
        if min_devices == 0 {
            anyhow::bail!("Discount bracket threshold must be at least 1 device");
        }
        if !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
            anyhow::bail!(
                "Discount percent must be between 0 and 100, got {}",
                percent
            );
        }
        Ok(Self {
            min_devices,
            percent,
        })
    }

    pub fn min_devices(&self) -> u32 {
        self.min_devices
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }
}

/// Static description of one vendor's pricing and operational profile.
///
/// Immutable reference data: created once at catalog load, never mutated
/// by calculations. All accessors return copies or shared references.
#[derive(Debug, Clone, PartialEq)]
pub struct VendorCostRecord {
    name: VendorName,
    term_rates: Vec<TermRate>,
    discount_brackets: Vec<DiscountBracket>,
    implementation_cost: f64,
    training_cost: f64,
    annual_support_cost: f64,
    hardware_cost: f64,
    hardware_maintenance_rate: f64,
    fte_headcount: f64,
    deployment_days: u32,
}

impl VendorCostRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: VendorName,
        term_rates: Vec<TermRate>,
        discount_brackets: Vec<DiscountBracket>,
        implementation_cost: f64,
        training_cost: f64,
        annual_support_cost: f64,
        hardware_cost: f64,
        hardware_maintenance_rate: f64,
        fte_headcount: f64,
        deployment_days: u32,
    ) -> Result<Self> {
        if term_rates.is_empty() {
            anyhow::bail!("Vendor \"{}\" must declare at least one term rate", name);
        }
        if !term_rates.iter().any(|t| t.min_term_years == 1) {
            anyhow::bail!(
                "Vendor \"{}\" must declare a base term rate starting at 1 year",
                name
            );
        }
        validate_money(implementation_cost, "implementation cost")?;
        validate_money(training_cost, "training cost")?;
        validate_money(annual_support_cost, "annual support cost")?;
        validate_money(hardware_cost, "hardware cost")?;
        if !hardware_maintenance_rate.is_finite() || !(0.0..=1.0).contains(&hardware_maintenance_rate)
        {
            anyhow::bail!(
                "Hardware maintenance rate must be between 0.0 and 1.0, got {}",
                hardware_maintenance_rate
            );
        }
        if !fte_headcount.is_finite() || fte_headcount < 0.0 {
            anyhow::bail!("FTE headcount must be non-negative, got {}", fte_headcount);
        }

        let mut term_rates = term_rates;
        term_rates.sort_by_key(|t| t.min_term_years);

        let mut discount_brackets = discount_brackets;
        discount_brackets.sort_by_key(|b| b.min_devices);

        Ok(Self {
            name,
            term_rates,
            discount_brackets,
            implementation_cost,
            training_cost,
            annual_support_cost,
            hardware_cost,
            hardware_maintenance_rate,
            fte_headcount,
            deployment_days,
        })
    }

    pub fn name(&self) -> &VendorName {
        &self.name
    }

    /// Base monthly per-device rate for the given contract length.
    ///
    /// Picks the tier with the highest minimum term not exceeding `years`.
    /// A base tier at 1 year always exists (enforced by the constructor),
    /// so this never fails for `years >= 1`.
    pub fn monthly_rate_for_term(&self, years: u32) -> f64 {
        self.term_rates
            .iter()
            .filter(|t| t.min_term_years <= years)
            .last()
            .map(|t| t.monthly_rate)
            .unwrap_or_else(|| self.term_rates[0].monthly_rate)
    }

    /// Volume discount fraction (0.0-1.0) for the given device count.
    ///
    /// Step function: the bracket with the highest threshold at or below
    /// the device count applies; below all thresholds there is no discount.
    pub fn volume_discount(&self, devices: u32) -> f64 {
        self.discount_brackets
            .iter()
            .filter(|b| b.min_devices <= devices)
            .last()
            .map(|b| b.percent / 100.0)
            .unwrap_or(0.0)
    }

    pub fn implementation_cost(&self) -> f64 {
        self.implementation_cost
    }

    pub fn training_cost(&self) -> f64 {
        self.training_cost
    }

    pub fn annual_support_cost(&self) -> f64 {
        self.annual_support_cost
    }

    pub fn hardware_cost(&self) -> f64 {
        self.hardware_cost
    }

    pub fn hardware_maintenance_rate(&self) -> f64 {
        self.hardware_maintenance_rate
    }

    pub fn fte_headcount(&self) -> f64 {
        self.fte_headcount
    }

    pub fn deployment_days(&self) -> u32 {
        self.deployment_days
    }
}

fn validate_money(value: f64, field: &str) -> Result<()> {
    if !value.is_finite() {
        anyhow::bail!("Cost field {} must be finite, got {}", field, value);
    }
    if value < 0.0 {
        anyhow::bail!("Cost field {} must be non-negative, got {}", field, value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_brackets(brackets: Vec<DiscountBracket>) -> VendorCostRecord {
        VendorCostRecord::new(
            VendorName::new("Test Vendor".to_string()).unwrap(),
            vec![TermRate::new(1, 5.0).unwrap(), TermRate::new(3, 4.0).unwrap()],
            brackets,
            10000.0,
            2000.0,
            0.0,
            0.0,
            0.0,
            0.5,
            30,
        )
        .unwrap()
    }

    #[test]
    fn test_term_rate_picks_longest_applicable_tier() {
        let record = record_with_brackets(vec![]);
        assert_eq!(record.monthly_rate_for_term(1), 5.0);
        assert_eq!(record.monthly_rate_for_term(2), 5.0);
        assert_eq!(record.monthly_rate_for_term(3), 4.0);
        assert_eq!(record.monthly_rate_for_term(5), 4.0);
    }

    #[test]
    fn test_volume_discount_step_function() {
        let record = record_with_brackets(vec![
            DiscountBracket::new(1000, 10.0).unwrap(),
            DiscountBracket::new(5000, 20.0).unwrap(),
        ]);
        assert_eq!(record.volume_discount(999), 0.0);
        assert_eq!(record.volume_discount(1000), 0.10);
        assert_eq!(record.volume_discount(4999), 0.10);
        assert_eq!(record.volume_discount(5000), 0.20);
        assert_eq!(record.volume_discount(50000), 0.20);
    }

    #[test]
    fn test_volume_discount_unsorted_brackets_are_sorted() {
        let record = record_with_brackets(vec![
            DiscountBracket::new(5000, 20.0).unwrap(),
            DiscountBracket::new(1000, 10.0).unwrap(),
        ]);
        assert_eq!(record.volume_discount(1500), 0.10);
        assert_eq!(record.volume_discount(6000), 0.20);
    }

    #[test]
    fn test_term_rate_zero_years_rejected() {
        let result = TermRate::new(0, 5.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_term_rate_negative_rate_rejected() {
        let result = TermRate::new(1, -5.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_term_rate_nan_rejected() {
        let result = TermRate::new(1, f64::NAN);
        assert!(result.is_err());
    }

    #[test]
    fn test_discount_bracket_over_100_percent_rejected() {
        let result = DiscountBracket::new(1000, 101.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_record_requires_base_term_rate() {
        let result = VendorCostRecord::new(
            VendorName::new("Test Vendor".to_string()).unwrap(),
            vec![TermRate::new(3, 4.0).unwrap()],
            vec![],
            0.0,
            0.0,
            0.0,
            0.0,
            0.0,
            0.0,
            0,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_record_requires_some_term_rate() {
        let result = VendorCostRecord::new(
            VendorName::new("Test Vendor".to_string()).unwrap(),
            vec![],
            vec![],
            0.0,
            0.0,
            0.0,
            0.0,
            0.0,
            0.0,
            0,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_record_negative_implementation_cost_rejected() {
        let result = VendorCostRecord::new(
            VendorName::new("Test Vendor".to_string()).unwrap(),
            vec![TermRate::new(1, 5.0).unwrap()],
            vec![],
            -1.0,
            0.0,
            0.0,
            0.0,
            0.0,
            0.0,
            0,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_record_maintenance_rate_over_one_rejected() {
        let result = VendorCostRecord::new(
            VendorName::new("Test Vendor".to_string()).unwrap(),
            vec![TermRate::new(1, 5.0).unwrap()],
            vec![],
            0.0,
            0.0,
            0.0,
            10000.0,
            1.5,
            0.0,
            0,
        );
        assert!(result.is_err());
    }
}
