pub mod breakdown;
pub mod capability;
pub mod catalog;
pub mod deployment;
pub mod industry;
pub mod pricing;
pub mod report_metadata;
pub mod roi;
pub mod vendor;

pub use breakdown::CostBreakdown;
pub use capability::VendorCapabilityRecord;
pub use catalog::{Catalog, VendorEntry};
pub use deployment::DeploymentConfig;
pub use industry::{IndustryRiskRecord, InsuranceTier, PremiumDiscounts};
pub use pricing::{DiscountBracket, TermRate, VendorCostRecord};
pub use report_metadata::ReportMetadata;
pub use roi::{Payback, PeerSavings, RoiResult};
pub use vendor::{IndustryId, VendorId, VendorName};
