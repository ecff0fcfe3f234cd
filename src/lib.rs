//! nac-tco - TCO and risk comparison tool for NAC vendors
//!
//! This library compares Network Access Control vendors by total cost of
//! ownership, avoided-risk value, and ROI, following hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`comparison`): Pure calculation logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use nac_tco::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let catalog_reader = FileSystemReader::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = RunComparisonUseCase::new(catalog_reader, progress_reporter);
//!
//! // Execute
//! let request = ComparisonRequest::new(
//!     PathBuf::from("nac-catalog.toml"),
//!     "healthcare".to_string(),
//!     vec![],
//!     vec![],
//!     1000,
//!     3,
//!     100_000.0,
//!     None,
//!     None,
//!     None,
//! );
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let model = ComparisonReadModelBuilder::new()
//!     .metadata(response.metadata.clone())
//!     .deployment(DeploymentView::from_config(&response.config))
//!     .industry(IndustryView::from_record(&response.industry_id, &response.industry))
//!     .rows(response.rows.iter().map(VendorRowView::from_comparison).collect())
//!     .build()?;
//! let formatter = JsonFormatter::new();
//! println!("{}", formatter.format(&model)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod catalog;
pub mod comparison;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{ComparisonRequest, ComparisonResponse, OutputFormat};
    pub use crate::application::read_models::{
        CapabilityView, ComparisonReadModel, ComparisonReadModelBuilder, DeploymentView,
        IndustryView, VendorRowView,
    };
    pub use crate::application::use_cases::RunComparisonUseCase;
    pub use crate::catalog::parse_catalog;
    pub use crate::comparison::domain::{
        Catalog, CostBreakdown, DeploymentConfig, IndustryId, IndustryRiskRecord, Payback,
        PeerSavings, RoiResult, VendorCapabilityRecord, VendorCostRecord, VendorEntry, VendorId,
    };
    pub use crate::comparison::policies::FallbackPolicy;
    pub use crate::comparison::services::{
        ComparisonDriver, CostAggregator, ReportGenerator, RiskEstimator, VendorComparison,
    };
    pub use crate::ports::outbound::{
        CatalogReader, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::Result;
}
