mod cli;

use cli::Args;
use pc_builder::adapters::outbound::console::StderrProgressReporter;
use pc_builder::adapters::outbound::filesystem::{JsonCartWriter, JsonFileCatalog};
use pc_builder::application::dto::{CommitOutcome, OutputFormat};
use pc_builder::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use pc_builder::application::use_cases::{ConfigureBuildUseCase, LoadCandidatesUseCase};
use pc_builder::build_configuration::services::{CompatibilityEngine, FilterCriteria};
use pc_builder::config::{self, ConfigFile};
use pc_builder::ports::inbound::BuildConfiguratorPort;
use pc_builder::shared::error::{ConfiguratorError, ExitCode};
use pc_builder::shared::Result;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::process;

/// Cart file used when the build is evaluated without `--commit`
const DEFAULT_CART_FILE: &str = "cart.json";

fn main() {
    match run() {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(exit_code_for(&e).as_i32());
        }
    }
}

fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<ConfiguratorError>() {
        Some(ConfiguratorError::InvalidSelection { .. } | ConfiguratorError::Validation { .. }) => {
            ExitCode::InvalidArguments
        }
        _ => ExitCode::ApplicationError,
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse_args();

    let config = load_config(&args)?;
    let format = resolve_format(&args, &config)?;

    // Create adapters (Dependency Injection)
    let catalog = JsonFileCatalog::open(&args.catalog)?;
    let mut candidates = LoadCandidatesUseCase::new(
        catalog,
        StderrProgressReporter::new(),
        config.category_labels(),
    );
    candidates.load_all()?;

    let formatter = FormatterFactory::create(format);
    let presenter = PresenterFactory::create(PresenterType::from(args.output.clone()));

    if let Some(slot) = args.list {
        let criteria = build_criteria(&args, &config)?;
        let listed = candidates.candidates(slot, &criteria);

        eprintln!("{}", FormatterFactory::progress_message(format));
        presenter.present(&formatter.format_candidates(slot, &listed)?)?;
        return Ok(ExitCode::Success);
    }

    if args.has_list_filters() {
        eprintln!("⚠️  Warning: Listing filters only apply together with --list and will be ignored.");
    }

    let cart_path = args
        .commit
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CART_FILE));
    let mut session = ConfigureBuildUseCase::new(
        CompatibilityEngine::new(config.power_policy()),
        JsonCartWriter::new(cart_path),
        StderrProgressReporter::new(),
    );

    for request in &args.select {
        let record = candidates.resolve(request)?;
        session.set_slot(request.slot, Some(record));
    }

    // The report describes the build as evaluated, before a commit resets it
    let model = session.read_model().clone();

    eprintln!("{}", FormatterFactory::progress_message(format));
    presenter.present(&formatter.format_build(&model)?)?;

    if let Some(cart_path) = &args.commit {
        match session.commit()? {
            CommitOutcome::Committed { .. } => {
                eprintln!("✅ Cart written: {}", cart_path.display());
            }
            CommitOutcome::Refused { .. } => return Ok(ExitCode::IncompatibleBuild),
        }
    }

    if model.has_issues() {
        Ok(ExitCode::IncompatibleBuild)
    } else {
        Ok(ExitCode::Success)
    }
}

/// Loads the explicit config file, or the one discovered in the working directory
fn load_config(args: &Args) -> Result<ConfigFile> {
    if let Some(path) = &args.config {
        return config::load_config_from_path(path);
    }

    let cwd = std::env::current_dir()?;
    match config::discover_config(&cwd)? {
        Some(found) => {
            eprintln!(
                "📋 Auto-discovered config file: {}",
                cwd.join(config::CONFIG_FILENAME).display()
            );
            Ok(found)
        }
        None => Ok(ConfigFile::default()),
    }
}

/// CLI flag first, then config file, then Markdown
fn resolve_format(args: &Args, config: &ConfigFile) -> Result<OutputFormat> {
    if let Some(format) = args.format {
        return Ok(format);
    }

    match config.format.as_deref() {
        Some(value) => {
            let format = value.parse::<OutputFormat>().map_err(|e| ConfiguratorError::Validation {
                message: format!("config field 'format': {}", e),
            })?;
            Ok(format)
        }
        None => Ok(OutputFormat::default()),
    }
}

/// Combines listing flags with the config file's candidate defaults
fn build_criteria(args: &Args, config: &ConfigFile) -> Result<FilterCriteria> {
    let mut criteria = FilterCriteria::new()
        .with_sort(args.sort.or(config.sort()).unwrap_or_default())
        .in_stock_only(args.in_stock || config.in_stock_only().unwrap_or(false));

    if let Some(query) = &args.query {
        criteria = criteria.with_query(query.as_str());
    }
    for brand in &args.brands {
        criteria = criteria.with_brand(brand.as_str());
    }

    if args.min_price.is_some() || args.max_price.is_some() {
        let min = args.min_price.unwrap_or(Decimal::ZERO);
        let max = args.max_price.unwrap_or(Decimal::MAX);
        if min > max {
            return Err(ConfiguratorError::Validation {
                message: format!("--min-price ({}) is greater than --max-price ({})", min, max),
            }
            .into());
        }
        criteria = criteria.with_price_bounds(min, max);
    }

    Ok(criteria)
}
