use anyhow::{Context, Result};
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use auction_notices::filter::{FilterConfig, FilterEngine, split_list};
use auction_notices::geoportal::LocationLookup;
use auction_notices::logging::init_logging;
use auction_notices::models::RawRow;
use auction_notices::processor::{RecordBatchProcessor, parse_raw_batch};
use auction_notices::settings::{AppConfig, DEFAULT_CONFIG_PATH};
use auction_notices::stats::QueryReport;
use auction_notices::storage::{BatchOrigin, ExportPlan, LocalStorage};

#[derive(Parser)]
#[command(name = "auction-notices")]
#[command(about = "Filter and summarize land auction notices")]
#[command(version)]
struct Cli {
    /// Settings file (missing file means built-in defaults)
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter a batch of raw notice rows (JSON array of rows)
    Filter {
        input: PathBuf,
        #[command(flatten)]
        options: FilterArgs,
        #[command(flatten)]
        export: ExportArgs,
    },
    /// Apply the "best offers" preset to a batch
    BestOffers {
        input: PathBuf,
        #[command(flatten)]
        export: ExportArgs,
    },
    /// Filter the most recent raw batch stored for a source
    Replay {
        source: String,
        #[command(flatten)]
        options: FilterArgs,
        #[command(flatten)]
        export: ExportArgs,
    },
    /// Resolve a location path to its plot address and map portal
    Locate { location_path: String },
}

#[derive(Args, Default)]
struct FilterArgs {
    /// Substring of the venue name or location path (case-sensitive)
    #[arg(long)]
    location: Option<String>,
    /// Counties, comma-separated
    #[arg(long)]
    regions: Option<String>,
    /// Sale form (default: sprzedaż)
    #[arg(long)]
    form: Option<String>,
    #[arg(long)]
    min_area: Option<f64>,
    /// Only used together with --min-area
    #[arg(long)]
    max_area: Option<f64>,
    #[arg(long)]
    min_price: Option<f64>,
    #[arg(long)]
    max_price: Option<f64>,
    /// Earliest auction date, in days from today (default: 7)
    #[arg(long, allow_hyphen_values = true)]
    min_days: Option<i64>,
    #[arg(long, allow_hyphen_values = true)]
    max_days: Option<i64>,
    /// Property types, comma-separated
    #[arg(long)]
    property_types: Option<String>,
    /// Minimum discount in percent
    #[arg(long)]
    min_discount: Option<u32>,
    /// Replace location, counties, form, area, price and date options with the preset
    #[arg(long)]
    best_offers: bool,
    /// TOML file with filter options (command line options win)
    #[arg(long)]
    filters: Option<String>,
}

impl FilterArgs {
    fn to_filter_config(&self) -> FilterConfig {
        FilterConfig {
            location: self.location.clone(),
            regions: self.regions.as_deref().map(split_list).unwrap_or_default(),
            form: self.form.clone(),
            min_area: self.min_area,
            max_area: self.max_area,
            min_price: self.min_price,
            max_price: self.max_price,
            min_days_from_now: self.min_days,
            max_days_from_now: self.max_days,
            property_types: self
                .property_types
                .as_deref()
                .map(split_list)
                .unwrap_or_default(),
            min_discount: self.min_discount,
            best_offers_only: self.best_offers,
        }
    }
}

#[derive(Args)]
struct ExportArgs {
    /// Store the report (and raw batch, Parquet if enabled) under this directory
    #[arg(long)]
    output_dir: Option<String>,
    /// Also export the matching records as Parquet
    #[arg(long)]
    parquet: bool,
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let settings = AppConfig::load(&cli.config)?;
    init_logging(&settings.log_level);

    match cli.command {
        Commands::Filter {
            input,
            options,
            export,
        } => {
            let config = query_config(&settings, &options)?;
            let source = source_name(&input);
            let rows = read_rows(&input)?;
            run_query(&source, &rows, BatchOrigin::Input, &config, &settings, &export)
        }
        Commands::BestOffers { input, export } => {
            let source = source_name(&input);
            let rows = read_rows(&input)?;
            let config = FilterConfig::best_offers();
            run_query(&source, &rows, BatchOrigin::Input, &config, &settings, &export)
        }
        Commands::Replay {
            source,
            options,
            export,
        } => {
            let config = query_config(&settings, &options)?;
            let storage = LocalStorage::new(&settings.output_dir);
            let rows = storage
                .load_latest_raw_rows(&source)
                .with_context(|| format!("Failed to load stored batch for {}", source))?;
            run_query(&source, &rows, BatchOrigin::Stored, &config, &settings, &export)
        }
        Commands::Locate { location_path } => {
            let lookup = LocationLookup::resolve(&location_path);
            if lookup.address.county.is_none() {
                warn!("No county found in location path: {}", location_path);
            }
            println!("{}", serde_json::to_string_pretty(&lookup)?);
            Ok(())
        }
    }
}

/// Settings filters, then the filter file, then command line options.
fn query_config(settings: &AppConfig, options: &FilterArgs) -> Result<FilterConfig> {
    let mut config = settings.filters.clone();
    if let Some(path) = &options.filters {
        let from_file = FilterConfig::from_file(path)
            .with_context(|| format!("Failed to load filter file: {}", path))?;
        config = config.merged_with(&from_file);
    }
    Ok(config.merged_with(&options.to_filter_config()))
}

fn source_name(input: &Path) -> String {
    input
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| "notices".to_string())
}

fn read_rows(input: &Path) -> Result<Vec<RawRow>> {
    let json = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;
    let rows = parse_raw_batch(&json)
        .with_context(|| format!("Invalid notice batch: {}", input.display()))?;
    info!("Loaded {} rows from {}", rows.len(), input.display());
    Ok(rows)
}

fn run_query(
    source: &str,
    rows: &[RawRow],
    origin: BatchOrigin,
    config: &FilterConfig,
    settings: &AppConfig,
    export: &ExportArgs,
) -> Result<()> {
    let batch = RecordBatchProcessor::new().process(rows);
    let total_records = batch.records.len();

    let outcome =
        FilterEngine::new().apply_traced(&batch.records, config, Local::now().date_naive());
    let report = QueryReport::build(source, total_records, outcome, config);

    info!(
        "Query on {}: {} of {} records matched ({:.1}%)",
        source, report.filtered_records, report.total_records, report.filtered_percent
    );

    let plan = ExportPlan::new(
        settings.store_raw,
        export.parquet || settings.write_parquet,
        origin,
    );
    if export.output_dir.is_some() || plan.raw || plan.parquet {
        let root = export.output_dir.as_deref().unwrap_or(&settings.output_dir);
        let keys = LocalStorage::new(root).export(source, rows, &report, plan)?;
        info!("Exported {} objects under {}", keys.len(), root);
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
