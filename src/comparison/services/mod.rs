pub mod comparison_driver;
pub mod cost_aggregator;
pub mod report_generator;
pub mod risk_estimator;

pub use comparison_driver::{ComparisonDriver, VendorComparison};
pub use cost_aggregator::CostAggregator;
pub use report_generator::ReportGenerator;
pub use risk_estimator::RiskEstimator;
