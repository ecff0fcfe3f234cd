use serde::Serialize;

/// Payback horizon for a vendor's TCO.
///
/// A sentinel enum rather than a raw float so that non-positive divisors
/// never leak Infinity or NaN into reports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "months", rename_all = "kebab-case")]
pub enum Payback {
    /// Total cost is zero or negative; the investment pays for itself at once.
    Immediate,
    /// Months until the annual value stream covers the total cost, clamped
    /// to a minimum of one month.
    Months(f64),
    /// Annual value is zero or negative; the cost is never recovered.
    NotApplicable,
}

impl std::fmt::Display for Payback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Payback::Immediate => write!(f, "immediate"),
            Payback::Months(months) => write!(f, "{:.1} months", months),
            Payback::NotApplicable => write!(f, "not applicable"),
        }
    }
}

/// Savings relative to the peer-average total cost.
///
/// Undefined when fewer than two vendors are compared; represented
/// explicitly instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "percent", rename_all = "kebab-case")]
pub enum PeerSavings {
    Percent(f64),
    NotApplicable,
}

impl std::fmt::Display for PeerSavings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PeerSavings::Percent(percent) => write!(f, "{:.1}%", percent),
            PeerSavings::NotApplicable => write!(f, "not applicable"),
        }
    }
}

/// Benefit/risk estimate for one vendor relative to its computed TCO.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoiResult {
    /// Avoided breach losses per year (breach cost x probability x reduction factor)
    pub avoided_breach_value: f64,
    /// Staffing savings per year versus the industry baseline; negative when
    /// the vendor needs more staff than the baseline
    pub operational_savings: f64,
    /// Downtime losses avoided per year
    pub downtime_savings: f64,
    /// Cyber-insurance premium reduction per year
    pub insurance_savings: f64,
    /// Sum of avoided breach value, operational savings, and downtime savings
    pub annual_value: f64,
    /// Percentage ROI over the analysis period; None when the total cost is
    /// not positive, where the ratio is undefined
    pub roi_percent: Option<f64>,
    pub payback: Payback,
}
