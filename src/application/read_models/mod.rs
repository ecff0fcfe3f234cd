pub mod comparison_view;
pub mod comparison_view_builder;

pub use comparison_view::{
    CapabilityView, ComparisonReadModel, DeploymentView, IndustryView, VendorRowView,
};
pub use comparison_view_builder::ComparisonReadModelBuilder;
