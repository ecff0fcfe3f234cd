//! TOML catalog parsing.
//!
//! The catalog file (`nac-catalog.toml`) is the single source of vendor
//! and industry reference data. Every record is validated against the
//! canonical domain schema here; malformed records are rejected at load
//! time instead of producing NaN totals later.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::comparison::domain::catalog::{Catalog, VendorEntry};
use crate::comparison::domain::{
    DiscountBracket, IndustryId, IndustryRiskRecord, PremiumDiscounts, TermRate,
    VendorCapabilityRecord, VendorCostRecord, VendorId, VendorName,
};

/// Catalog schema revision this build understands
const SUPPORTED_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct CatalogFile {
    schema_version: u32,
    #[serde(default, rename = "vendor")]
    vendors: Vec<VendorTable>,
    #[serde(default, rename = "industry")]
    industries: Vec<IndustryTable>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct VendorTable {
    id: String,
    name: String,
    pricing: PricingTable,
    capabilities: CapabilitiesTable,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct PricingTable {
    #[serde(default, rename = "term-rate")]
    term_rates: Vec<TermRateTable>,
    #[serde(default, rename = "discount-bracket")]
    discount_brackets: Vec<DiscountBracketTable>,
    #[serde(default)]
    implementation_cost: f64,
    #[serde(default)]
    training_cost: f64,
    #[serde(default)]
    annual_support_cost: f64,
    #[serde(default)]
    hardware_cost: f64,
    #[serde(default)]
    hardware_maintenance_rate: f64,
    #[serde(default)]
    fte_headcount: f64,
    #[serde(default)]
    deployment_days: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct TermRateTable {
    min_term_years: u32,
    monthly_rate: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct DiscountBracketTable {
    min_devices: u32,
    percent: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct CapabilitiesTable {
    security_maturity: u8,
    automation_level: u8,
    compliance_coverage: u8,
    breach_probability_reduction: f64,
    ransomware_protection: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct IndustryTable {
    id: String,
    name: String,
    average_breach_cost: f64,
    annual_breach_probability: f64,
    downtime_cost_per_hour: f64,
    #[serde(default)]
    annual_downtime_hours: f64,
    baseline_fte_requirement: f64,
    #[serde(default)]
    insurance_premium_baseline: f64,
    premium_discounts: PremiumDiscountsTable,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct PremiumDiscountsTable {
    strong: f64,
    moderate: f64,
    weak: f64,
}

/// Parses and validates a catalog file.
///
/// Every vendor and industry record passes through the domain
/// constructors, so a successfully parsed catalog contains only records
/// the calculation services can safely consume.
pub fn parse_catalog(content: &str) -> Result<Catalog> {
    let file: CatalogFile = toml::from_str(content).context("Failed to parse catalog TOML")?;

    if file.schema_version != SUPPORTED_SCHEMA_VERSION {
        anyhow::bail!(
            "Unsupported catalog schema version {} (this build understands version {})",
            file.schema_version,
            SUPPORTED_SCHEMA_VERSION
        );
    }

    let mut vendors = BTreeMap::new();
    for table in file.vendors {
        let id = VendorId::new(table.id.clone())
            .with_context(|| format!("Invalid vendor id \"{}\"", table.id))?;
        let entry = convert_vendor(table)
            .with_context(|| format!("Invalid vendor record \"{}\"", id))?;
        if vendors.insert(id.clone(), entry).is_some() {
            anyhow::bail!("Duplicate vendor id \"{}\" in catalog", id);
        }
    }

    let mut industries = BTreeMap::new();
    for table in file.industries {
        let id = IndustryId::new(table.id.clone())
            .with_context(|| format!("Invalid industry id \"{}\"", table.id))?;
        let record = convert_industry(table)
            .with_context(|| format!("Invalid industry record \"{}\"", id))?;
        if industries.insert(id.clone(), record).is_some() {
            anyhow::bail!("Duplicate industry id \"{}\" in catalog", id);
        }
    }

    Ok(Catalog::new(vendors, industries))
}

fn convert_vendor(table: VendorTable) -> Result<VendorEntry> {
    let name = VendorName::new(table.name)?;

    let term_rates = table
        .pricing
        .term_rates
        .iter()
        .map(|t| TermRate::new(t.min_term_years, t.monthly_rate))
        .collect::<Result<Vec<_>>>()?;

    let discount_brackets = table
        .pricing
        .discount_brackets
        .iter()
        .map(|b| DiscountBracket::new(b.min_devices, b.percent))
        .collect::<Result<Vec<_>>>()?;

    let cost = VendorCostRecord::new(
        name,
        term_rates,
        discount_brackets,
        table.pricing.implementation_cost,
        table.pricing.training_cost,
        table.pricing.annual_support_cost,
        table.pricing.hardware_cost,
        table.pricing.hardware_maintenance_rate,
        table.pricing.fte_headcount,
        table.pricing.deployment_days,
    )?;

    // The pricing table's FTE headcount doubles as the capability-side
    // staffing requirement; one field in the file, no chance of drift.
    let capabilities = VendorCapabilityRecord::new(
        table.capabilities.security_maturity,
        table.capabilities.automation_level,
        table.capabilities.compliance_coverage,
        table.capabilities.breach_probability_reduction,
        table.capabilities.ransomware_protection,
        table.pricing.fte_headcount,
    )?;

    Ok(VendorEntry { cost, capabilities })
}

fn convert_industry(table: IndustryTable) -> Result<IndustryRiskRecord> {
    let discounts = PremiumDiscounts::new(
        table.premium_discounts.strong,
        table.premium_discounts.moderate,
        table.premium_discounts.weak,
    )?;

    IndustryRiskRecord::new(
        table.name,
        table.average_breach_cost,
        table.annual_breach_probability,
        table.downtime_cost_per_hour,
        table.annual_downtime_hours,
        table.baseline_fte_requirement,
        table.insurance_premium_baseline,
        discounts,
    )
}
