use crate::comparison::domain::{
    CostBreakdown, DeploymentConfig, IndustryId, IndustryRiskRecord, InsuranceTier, PeerSavings,
    ReportMetadata, RoiResult, VendorCapabilityRecord,
};
use crate::comparison::services::VendorComparison;
use serde::Serialize;

/// Deployment parameters as presented in reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeploymentView {
    pub devices: u32,
    pub years: u32,
    pub fte_annual_cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breach_cost_override: Option<f64>,
}

impl DeploymentView {
    pub fn from_config(config: &DeploymentConfig) -> Self {
        Self {
            devices: config.devices(),
            years: config.years(),
            fte_annual_cost: config.fte_annual_cost(),
            breach_cost_override: config.breach_cost_override(),
        }
    }
}

/// Industry risk profile as presented in reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndustryView {
    pub id: String,
    pub name: String,
    pub average_breach_cost: f64,
    pub annual_breach_probability: f64,
}

impl IndustryView {
    pub fn from_record(id: &IndustryId, record: &IndustryRiskRecord) -> Self {
        Self {
            id: id.to_string(),
            name: record.name().to_string(),
            average_breach_cost: record.average_breach_cost(),
            annual_breach_probability: record.annual_breach_probability(),
        }
    }
}

/// Vendor capability scores as presented in reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapabilityView {
    pub security_maturity: u8,
    pub automation_level: u8,
    pub compliance_coverage: u8,
    pub overall_score: f64,
    pub insurance_tier: String,
}

impl CapabilityView {
    pub fn from_record(record: &VendorCapabilityRecord) -> Self {
        let overall_score = record.overall_score();
        Self {
            security_maturity: record.security_maturity(),
            automation_level: record.automation_level(),
            compliance_coverage: record.compliance_coverage(),
            overall_score,
            insurance_tier: InsuranceTier::from_overall_score(overall_score)
                .as_str()
                .to_string(),
        }
    }
}

/// One vendor's comparison result as presented in reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VendorRowView {
    pub id: String,
    pub name: String,
    pub rank: usize,
    pub cost: CostBreakdown,
    pub per_device_per_month: f64,
    pub roi: RoiResult,
    pub capability: CapabilityView,
    pub savings_vs_peer_average: PeerSavings,
    pub deployment_days: u32,
    pub fallback_applied: bool,
}

impl VendorRowView {
    pub fn from_comparison(row: &VendorComparison) -> Self {
        Self {
            id: row.vendor_id.to_string(),
            name: row.vendor_name.clone(),
            rank: row.rank,
            cost: row.cost.clone(),
            per_device_per_month: row.per_device_per_month,
            roi: row.roi.clone(),
            capability: CapabilityView::from_record(&row.capabilities),
            savings_vs_peer_average: row.savings_vs_peer_average,
            deployment_days: row.deployment_days,
            fallback_applied: row.fallback_applied,
        }
    }
}

/// Unified read model for comparison reports.
///
/// Formatters consume this model exclusively; they never reach back into
/// the domain layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReadModel {
    pub metadata: ReportMetadata,
    pub deployment: DeploymentView,
    pub industry: IndustryView,
    pub rows: Vec<VendorRowView>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::domain::{Payback, PremiumDiscounts, VendorId};

    fn sample_row() -> VendorComparison {
        VendorComparison {
            vendor_id: VendorId::new("portnox".to_string()).unwrap(),
            vendor_name: "Portnox Cloud".to_string(),
            cost: CostBreakdown::from_components(
                129_600.0, 15_000.0, 5_000.0, 0.0, 0.0, 0.0, 75_000.0,
            ),
            per_device_per_month: 224_600.0 / 36_000.0,
            roi: RoiResult {
                avoided_breach_value: 850_000.0,
                operational_savings: 125_000.0,
                downtime_savings: 0.0,
                insurance_savings: 18_000.0,
                annual_value: 975_000.0,
                roi_percent: Some(1202.4),
                payback: Payback::Months(2.8),
            },
            capabilities: VendorCapabilityRecord::new(92, 95, 93, 0.85, 0.9, 0.25).unwrap(),
            rank: 1,
            savings_vs_peer_average: PeerSavings::Percent(35.2),
            deployment_days: 14,
            fallback_applied: false,
        }
    }

    #[test]
    fn test_vendor_row_view_from_comparison() {
        let row = sample_row();
        let view = VendorRowView::from_comparison(&row);
        assert_eq!(view.id, "portnox");
        assert_eq!(view.name, "Portnox Cloud");
        assert_eq!(view.rank, 1);
        assert_eq!(view.cost.total, row.cost.total);
        assert_eq!(view.deployment_days, 14);
        assert!(!view.fallback_applied);
    }

    #[test]
    fn test_capability_view_from_record() {
        let record = VendorCapabilityRecord::new(92, 95, 93, 0.85, 0.9, 0.25).unwrap();
        let view = CapabilityView::from_record(&record);
        assert_eq!(view.security_maturity, 92);
        assert_eq!(view.automation_level, 95);
        assert_eq!(view.compliance_coverage, 93);
        // 92*0.4 + 95*0.3 + 93*0.3 = 93.2, strong tier
        assert!((view.overall_score - 93.2).abs() < 1e-9);
        assert_eq!(view.insurance_tier, "strong");
    }

    #[test]
    fn test_capability_view_weak_tier() {
        let record = VendorCapabilityRecord::new(40, 30, 45, 0.2, 0.3, 2.0).unwrap();
        let view = CapabilityView::from_record(&record);
        assert_eq!(view.insurance_tier, "weak");
    }

    #[test]
    fn test_deployment_view_from_config() {
        let config = DeploymentConfig::new(1000, 3, 100_000.0).unwrap();
        let view = DeploymentView::from_config(&config);
        assert_eq!(view.devices, 1000);
        assert_eq!(view.years, 3);
        assert!(view.breach_cost_override.is_none());
    }

    #[test]
    fn test_industry_view_from_record() {
        let id = IndustryId::new("finance".to_string()).unwrap();
        let record = IndustryRiskRecord::new(
            "Finance".to_string(),
            12_800_000.0,
            0.31,
            18_000.0,
            18.0,
            1.6,
            140_000.0,
            PremiumDiscounts::new(0.18, 0.09, 0.0).unwrap(),
        )
        .unwrap();
        let view = IndustryView::from_record(&id, &record);
        assert_eq!(view.id, "finance");
        assert_eq!(view.name, "Finance");
        assert_eq!(view.average_breach_cost, 12_800_000.0);
    }

    #[test]
    fn test_read_model_serializes() {
        let config = DeploymentConfig::new(1000, 3, 100_000.0).unwrap();
        let model = ComparisonReadModel {
            metadata: ReportMetadata::new(
                "2026-01-01T00:00:00Z".to_string(),
                "nac-tco".to_string(),
                "1.2.0".to_string(),
                "urn:uuid:test".to_string(),
            ),
            deployment: DeploymentView::from_config(&config),
            industry: IndustryView {
                id: "finance".to_string(),
                name: "Finance".to_string(),
                average_breach_cost: 12_800_000.0,
                annual_breach_probability: 0.31,
            },
            rows: vec![VendorRowView::from_comparison(&sample_row())],
        };

        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["deployment"]["devices"], 1000);
        assert_eq!(json["rows"][0]["id"], "portnox");
        assert_eq!(json["rows"][0]["roi"]["payback"]["kind"], "months");
    }
}
