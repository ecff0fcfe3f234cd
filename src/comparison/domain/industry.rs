use crate::shared::Result;

/// Cyber-insurance discount tier, selected from a vendor's overall
/// capability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsuranceTier {
    Strong,
    Moderate,
    Weak,
}

impl InsuranceTier {
    /// Overall score at or above which a vendor qualifies for the strong tier
    pub const STRONG_THRESHOLD: f64 = 85.0;
    /// Overall score at or above which a vendor qualifies for the moderate tier
    pub const MODERATE_THRESHOLD: f64 = 65.0;

    /// Maps an overall capability score (0-100) to a tier.
    pub fn from_overall_score(score: f64) -> Self {
        if score >= Self::STRONG_THRESHOLD {
            InsuranceTier::Strong
        } else if score >= Self::MODERATE_THRESHOLD {
            InsuranceTier::Moderate
        } else {
            InsuranceTier::Weak
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InsuranceTier::Strong => "strong",
            InsuranceTier::Moderate => "moderate",
            InsuranceTier::Weak => "weak",
        }
    }
}

impl std::fmt::Display for InsuranceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Premium discount factors per insurance tier.
///
/// Invariant: discounts are monotone non-increasing from strong to weak;
/// a weaker control posture never earns a larger premium reduction.
#[derive(Debug, Clone, PartialEq)]
pub struct PremiumDiscounts {
    strong: f64,
    moderate: f64,
    weak: f64,
}

impl PremiumDiscounts {
    pub fn new(strong: f64, moderate: f64, weak: f64) -> Result<Self> {
        for (value, tier) in [(strong, "strong"), (moderate, "moderate"), (weak, "weak")] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                anyhow::bail!(
                    "Premium discount for tier {} must be between 0.0 and 1.0, got {}",
                    tier,
                    value
                );
            }
        }
        if strong < moderate || moderate < weak {
            anyhow::bail!(
                "Premium discounts must not increase from strong to weak (got {} / {} / {})",
                strong,
                moderate,
                weak
            );
        }
        Ok(Self {
            strong,
            moderate,
            weak,
        })
    }

    pub fn for_tier(&self, tier: InsuranceTier) -> f64 {
        match tier {
            InsuranceTier::Strong => self.strong,
            InsuranceTier::Moderate => self.moderate,
            InsuranceTier::Weak => self.weak,
        }
    }
}

/// Static per-industry risk figures.
///
/// Immutable reference data loaded once from the catalog. Breach cost and
/// downtime figures are annualized averages for the industry; the baseline
/// FTE requirement is the staffing a typical NAC deployment consumes
/// without vendor-side automation.
#[derive(Debug, Clone, PartialEq)]
pub struct IndustryRiskRecord {
    name: String,
    average_breach_cost: f64,
    annual_breach_probability: f64,
    downtime_cost_per_hour: f64,
    annual_downtime_hours: f64,
    baseline_fte_requirement: f64,
    insurance_premium_baseline: f64,
    premium_discounts: PremiumDiscounts,
}

impl IndustryRiskRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        average_breach_cost: f64,
        annual_breach_probability: f64,
        downtime_cost_per_hour: f64,
        annual_downtime_hours: f64,
        baseline_fte_requirement: f64,
        insurance_premium_baseline: f64,
        premium_discounts: PremiumDiscounts,
    ) -> Result<Self> {
        if name.trim().is_empty() {
            anyhow::bail!("Industry name cannot be empty");
        }
        for (value, field) in [
            (average_breach_cost, "average breach cost"),
            (downtime_cost_per_hour, "downtime cost per hour"),
            (annual_downtime_hours, "annual downtime hours"),
            (baseline_fte_requirement, "baseline FTE requirement"),
            (insurance_premium_baseline, "insurance premium baseline"),
        ] {
            if !value.is_finite() || value < 0.0 {
                anyhow::bail!(
                    "Industry field {} must be non-negative and finite, got {}",
                    field,
                    value
                );
            }
        }
        if !annual_breach_probability.is_finite()
            || !(0.0..=1.0).contains(&annual_breach_probability)
        {
            anyhow::bail!(
                "Annual breach probability must be between 0.0 and 1.0, got {}",
                annual_breach_probability
            );
        }

        Ok(Self {
            name,
            average_breach_cost,
            annual_breach_probability,
            downtime_cost_per_hour,
            annual_downtime_hours,
            baseline_fte_requirement,
            insurance_premium_baseline,
            premium_discounts,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn average_breach_cost(&self) -> f64 {
        self.average_breach_cost
    }

    pub fn annual_breach_probability(&self) -> f64 {
        self.annual_breach_probability
    }

    pub fn downtime_cost_per_hour(&self) -> f64 {
        self.downtime_cost_per_hour
    }

    pub fn annual_downtime_hours(&self) -> f64 {
        self.annual_downtime_hours
    }

    pub fn baseline_fte_requirement(&self) -> f64 {
        self.baseline_fte_requirement
    }

    pub fn insurance_premium_baseline(&self) -> f64 {
        self.insurance_premium_baseline
    }

    pub fn premium_discounts(&self) -> &PremiumDiscounts {
        &self.premium_discounts
    }
}
