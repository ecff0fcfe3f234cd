mod adapters;
mod application;
mod catalog;
mod cli;
mod comparison;
mod config;
mod ports;
mod shared;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::FileSystemReader;
use application::dto::{ComparisonRequest, OutputFormat};
use application::factories::{FormatterFactory, PresenterFactory};
use application::read_models::{
    ComparisonReadModelBuilder, DeploymentView, IndustryView, VendorRowView,
};
use application::use_cases::RunComparisonUseCase;
use cli::Args;
use config::ConfigFile;
use shared::error::{ExitCode, TcoError};
use shared::Result;
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

/// Default catalog file name when neither CLI nor config names one
const DEFAULT_CATALOG: &str = "nac-catalog.toml";
/// Default device count
const DEFAULT_DEVICES: u32 = 500;
/// Default analysis period in years
const DEFAULT_YEARS: u32 = 3;
/// Default fully-loaded annual FTE cost in dollars
const DEFAULT_FTE_COST: f64 = 100_000.0;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Load config file: explicit path must exist, discovery is silent
    let file_config = match &args.config_path {
        Some(path) => config::load_config_from_path(Path::new(path))?,
        None => config::discover_config(Path::new("."))?.unwrap_or_default(),
    };

    let format = resolve_format(&args, &file_config)?;

    let catalog_path = PathBuf::from(
        args.catalog
            .clone()
            .or_else(|| file_config.catalog.clone())
            .unwrap_or_else(|| DEFAULT_CATALOG.to_string()),
    );
    validate_catalog_path(&catalog_path)?;

    let industry = args
        .industry
        .clone()
        .or_else(|| file_config.industry.clone())
        .ok_or_else(|| TcoError::InvalidInput {
            message: "No industry specified".to_string(),
            hint: "Pass -i/--industry, or set 'industry' in nac-tco.config.yml".to_string(),
        })?;

    let vendors = if args.vendors.is_empty() {
        file_config.vendors.clone().unwrap_or_default()
    } else {
        args.vendors.clone()
    };
    let exclude = if args.exclude.is_empty() {
        file_config.exclude_vendors.clone().unwrap_or_default()
    } else {
        args.exclude.clone()
    };

    // Create request
    let request = ComparisonRequest::new(
        catalog_path,
        industry,
        vendors,
        exclude,
        args.devices.or(file_config.devices).unwrap_or(DEFAULT_DEVICES),
        args.years.or(file_config.years).unwrap_or(DEFAULT_YEARS),
        args.fte_cost.or(file_config.fte_cost).unwrap_or(DEFAULT_FTE_COST),
        args.breach_cost.or(file_config.breach_cost),
        args.baseline.clone().or_else(|| file_config.baseline.clone()),
        args.fallback_profile
            .clone()
            .or_else(|| file_config.fallback_profile.clone()),
    );

    // Create adapters (Dependency Injection)
    let catalog_reader = FileSystemReader::new();
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = RunComparisonUseCase::new(catalog_reader, progress_reporter);

    // Execute use case
    let response = use_case.execute(request)?;

    // Build the read model the formatters consume
    let model = ComparisonReadModelBuilder::new()
        .metadata(response.metadata.clone())
        .deployment(DeploymentView::from_config(&response.config))
        .industry(IndustryView::from_record(
            &response.industry_id,
            &response.industry,
        ))
        .rows(
            response
                .rows
                .iter()
                .map(VendorRowView::from_comparison)
                .collect(),
        )
        .build()?;

    // Display progress message
    eprintln!("{}", FormatterFactory::progress_message(format));

    // Create formatter using factory
    let formatter = FormatterFactory::create(format);
    let formatted_output = formatter.format(&model)?;

    // Present output
    let presenter = PresenterFactory::create(args.output.map(PathBuf::from));
    presenter.present(&formatted_output)?;

    Ok(())
}

/// Resolves the output format from CLI and config, CLI winning.
fn resolve_format(args: &Args, file_config: &ConfigFile) -> Result<OutputFormat> {
    let cli_format = args.format.map(|f| match f {
        cli::OutputFormat::Json => OutputFormat::Json,
        cli::OutputFormat::Markdown => OutputFormat::Markdown,
    });

    if let Some(format) = cli_format {
        return Ok(format);
    }

    match &file_config.format {
        Some(raw) => {
            let parsed = cli::OutputFormat::from_str(raw).map_err(|e| TcoError::InvalidInput {
                message: e,
                hint: "Set 'format' to 'json' or 'markdown' in the config file".to_string(),
            })?;
            Ok(match parsed {
                cli::OutputFormat::Json => OutputFormat::Json,
                cli::OutputFormat::Markdown => OutputFormat::Markdown,
            })
        }
        None => Ok(OutputFormat::Json),
    }
}

fn validate_catalog_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(TcoError::CatalogNotFound {
            path: path.to_path_buf(),
            suggestion: format!(
                "Catalog file \"{}\" does not exist.\n   \
                 Create a nac-catalog.toml, or specify the correct path with the --catalog option.",
                path.display()
            ),
        }
        .into());
    }

    // Security check: Reject symbolic links for catalog paths
    let metadata = std::fs::symlink_metadata(path).map_err(|e| TcoError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(TcoError::SecurityError {
            path: path.to_path_buf(),
            reason: "Catalog path is a symbolic link".to_string(),
            hint: "Point --catalog at the regular file directly".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(TcoError::InvalidInput {
            message: format!("Catalog path is not a regular file: {}", path.display()),
            hint: "Point --catalog at a catalog TOML file".to_string(),
        }
        .into());
    }

    Ok(())
}
