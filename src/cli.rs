use clap::Parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'json' or 'markdown'",
                s
            )),
        }
    }
}

/// Compare NAC vendors by total cost of ownership and risk posture
#[derive(Parser, Debug)]
#[command(name = "nac-tco")]
#[command(version)]
#[command(about = "Compare NAC vendors by total cost of ownership and risk posture", long_about = None)]
pub struct Args {
    /// Output format: json or markdown
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Path to the catalog file (defaults to ./nac-catalog.toml)
    #[arg(short, long)]
    pub catalog: Option<String>,

    /// Industry profile to evaluate against (e.g. healthcare, finance)
    #[arg(short, long)]
    pub industry: Option<String>,

    /// Number of managed devices
    #[arg(short, long)]
    pub devices: Option<u32>,

    /// Analysis period in years
    #[arg(short, long)]
    pub years: Option<u32>,

    /// Fully-loaded annual cost of one FTE in dollars
    #[arg(long = "fte-cost")]
    pub fte_cost: Option<f64>,

    /// Override the industry-average breach cost in dollars
    #[arg(long = "breach-cost")]
    pub breach_cost: Option<f64>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Compare only these vendors (repeatable); defaults to every vendor
    /// in the catalog
    #[arg(short = 'v', long = "vendor", value_name = "VENDOR")]
    pub vendors: Vec<String>,

    /// Exclude vendors from the comparison (repeatable)
    #[arg(short = 'e', long = "exclude", value_name = "VENDOR")]
    pub exclude: Vec<String>,

    /// Vendor excluded from the peer-average calculation
    #[arg(long)]
    pub baseline: Option<String>,

    /// Generic vendor profile substituted for unknown vendor ids
    #[arg(long = "fallback-profile")]
    pub fallback_profile: Option<String>,

    /// Explicit config file path (defaults to discovering
    /// nac-tco.config.yml in the working directory)
    #[arg(long = "config")]
    pub config_path: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
