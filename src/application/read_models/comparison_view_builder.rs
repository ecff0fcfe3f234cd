use crate::application::read_models::{
    ComparisonReadModel, DeploymentView, IndustryView, VendorRowView,
};
use crate::comparison::domain::ReportMetadata;
use crate::shared::error::TcoError;
use crate::shared::Result;

/// Builder for ComparisonReadModel.
///
/// Metadata, deployment, and industry sections are required; a report
/// with zero rows is rejected at build time rather than rendering an
/// empty table.
#[derive(Debug, Default)]
pub struct ComparisonReadModelBuilder {
    metadata: Option<ReportMetadata>,
    deployment: Option<DeploymentView>,
    industry: Option<IndustryView>,
    rows: Vec<VendorRowView>,
}

impl ComparisonReadModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn metadata(mut self, metadata: ReportMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn deployment(mut self, deployment: DeploymentView) -> Self {
        self.deployment = Some(deployment);
        self
    }

    pub fn industry(mut self, industry: IndustryView) -> Self {
        self.industry = Some(industry);
        self
    }

    pub fn rows(mut self, rows: Vec<VendorRowView>) -> Self {
        self.rows = rows;
        self
    }

    pub fn build(self) -> Result<ComparisonReadModel> {
        let metadata = self.metadata.ok_or_else(|| TcoError::Validation {
            message: "Report metadata is required".to_string(),
        })?;
        let deployment = self.deployment.ok_or_else(|| TcoError::Validation {
            message: "Deployment parameters are required".to_string(),
        })?;
        let industry = self.industry.ok_or_else(|| TcoError::Validation {
            message: "Industry profile is required".to_string(),
        })?;
        if self.rows.is_empty() {
            return Err(TcoError::Validation {
                message: "At least one vendor row is required".to_string(),
            }
            .into());
        }

        Ok(ComparisonReadModel {
            metadata,
            deployment,
            industry,
            rows: self.rows,
        })
    }
}
