use crate::shared::Result;

/// Weight of the security maturity score in the overall capability score
const SECURITY_WEIGHT: f64 = 0.4;
/// Weight of the automation score in the overall capability score
const AUTOMATION_WEIGHT: f64 = 0.3;
/// Weight of the compliance coverage score in the overall capability score
const COMPLIANCE_WEIGHT: f64 = 0.3;

/// Static capability scores for one vendor.
///
/// Scores are 0-100; risk-reduction factors are fractions of risk removed
/// (0.0 = no reduction, 1.0 = eliminates the risk). Immutable reference
/// data, validated once at catalog load.
#[derive(Debug, Clone, PartialEq)]
pub struct VendorCapabilityRecord {
    security_maturity: u8,
    automation_level: u8,
    compliance_coverage: u8,
    breach_probability_reduction: f64,
    ransomware_protection: f64,
    fte_requirement: f64,
}

impl VendorCapabilityRecord {
    pub fn new(
        security_maturity: u8,
        automation_level: u8,
        compliance_coverage: u8,
        breach_probability_reduction: f64,
        ransomware_protection: f64,
        fte_requirement: f64,
    ) -> Result<Self> {
        validate_score(security_maturity, "security maturity")?;
        validate_score(automation_level, "automation level")?;
        validate_score(compliance_coverage, "compliance coverage")?;
        validate_factor(breach_probability_reduction, "breach probability reduction")?;
        validate_factor(ransomware_protection, "ransomware protection")?;
        if !fte_requirement.is_finite() || fte_requirement < 0.0 {
            anyhow::bail!(
                "FTE requirement must be non-negative, got {}",
                fte_requirement
            );
        }

        Ok(Self {
            security_maturity,
            automation_level,
            compliance_coverage,
            breach_probability_reduction,
            ransomware_protection,
            fte_requirement,
        })
    }

    pub fn security_maturity(&self) -> u8 {
        self.security_maturity
    }

    pub fn automation_level(&self) -> u8 {
        self.automation_level
    }

    pub fn compliance_coverage(&self) -> u8 {
        self.compliance_coverage
    }

    pub fn breach_probability_reduction(&self) -> f64 {
        self.breach_probability_reduction
    }

    pub fn ransomware_protection(&self) -> f64 {
        self.ransomware_protection
    }

    pub fn fte_requirement(&self) -> f64 {
        self.fte_requirement
    }

    /// Weighted overall capability score (0-100).
    ///
    /// Deterministic by construction: identical records always score the
    /// same. Used to select the cyber-insurance discount tier.
    pub fn overall_score(&self) -> f64 {
        f64::from(self.security_maturity) * SECURITY_WEIGHT
            + f64::from(self.automation_level) * AUTOMATION_WEIGHT
            + f64::from(self.compliance_coverage) * COMPLIANCE_WEIGHT
    }
}

fn validate_score(score: u8, field: &str) -> Result<()> {
    if score > 100 {
        anyhow::bail!("Score {} must be between 0 and 100, got {}", field, score);
    }
    Ok(())
}

fn validate_factor(factor: f64, field: &str) -> Result<()> {
    if !factor.is_finite() || !(0.0..=1.0).contains(&factor) {
        anyhow::bail!(
            "Factor {} must be between 0.0 and 1.0, got {}",
            field,
            factor
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_record_valid() {
        let record = VendorCapabilityRecord::new(92, 95, 93, 0.85, 0.9, 0.25).unwrap();
        assert_eq!(record.security_maturity(), 92);
        assert_eq!(record.automation_level(), 95);
        assert_eq!(record.compliance_coverage(), 93);
        assert_eq!(record.breach_probability_reduction(), 0.85);
        assert_eq!(record.ransomware_protection(), 0.9);
        assert_eq!(record.fte_requirement(), 0.25);
    }

    #[test]
    fn test_score_over_100_rejected() {
        let result = VendorCapabilityRecord::new(101, 50, 50, 0.5, 0.5, 1.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_factor_over_one_rejected() {
        let result = VendorCapabilityRecord::new(50, 50, 50, 1.5, 0.5, 1.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_factor_negative_rejected() {
        let result = VendorCapabilityRecord::new(50, 50, 50, 0.5, -0.1, 1.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_factor_nan_rejected() {
        let result = VendorCapabilityRecord::new(50, 50, 50, f64::NAN, 0.5, 1.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_fte_requirement_rejected() {
        let result = VendorCapabilityRecord::new(50, 50, 50, 0.5, 0.5, -0.25);
        assert!(result.is_err());
    }

    #[test]
    fn test_overall_score_weighted_sum() {
        let record = VendorCapabilityRecord::new(90, 80, 70, 0.5, 0.5, 1.0).unwrap();
        // 90*0.4 + 80*0.3 + 70*0.3 = 36 + 24 + 21 = 81
        assert!((record.overall_score() - 81.0).abs() < 1e-9);
    }

    #[test]
    fn test_overall_score_deterministic() {
        let a = VendorCapabilityRecord::new(92, 95, 93, 0.85, 0.9, 0.25).unwrap();
        let b = VendorCapabilityRecord::new(92, 95, 93, 0.85, 0.9, 0.25).unwrap();
        assert_eq!(a.overall_score(), b.overall_score());
    }

    #[test]
    fn test_overall_score_bounds() {
        let min = VendorCapabilityRecord::new(0, 0, 0, 0.0, 0.0, 0.0).unwrap();
        let max = VendorCapabilityRecord::new(100, 100, 100, 1.0, 1.0, 0.0).unwrap();
        assert_eq!(min.overall_score(), 0.0);
        assert!((max.overall_score() - 100.0).abs() < 1e-9);
    }
}
