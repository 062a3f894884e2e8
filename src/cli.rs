use clap::Parser;
use rust_decimal::Decimal;
use std::path::PathBuf;

use pc_builder::application::dto::{OutputFormat, SelectionRequest};
use pc_builder::build_configuration::domain::Slot;
use pc_builder::build_configuration::services::SortKey;

/// Assemble a PC build from a component catalog and check its compatibility
#[derive(Parser, Debug)]
#[command(name = "pc-builder")]
#[command(version)]
#[command(
    about = "Assemble a PC build from a component catalog and check its compatibility",
    long_about = None
)]
pub struct Args {
    /// Path to the JSON component catalog
    #[arg(long, value_name = "FILE")]
    pub catalog: PathBuf,

    /// Select a component for a slot
    /// Can be specified multiple times: -s processor=cpu-1 -s memory=ram-2
    #[arg(short, long = "select", value_name = "SLOT=ID")]
    pub select: Vec<SelectionRequest>,

    /// List the candidates of a slot instead of evaluating a build
    #[arg(long, value_name = "SLOT")]
    pub list: Option<Slot>,

    /// Case-insensitive name filter for --list
    #[arg(short, long)]
    pub query: Option<String>,

    /// Sort order for --list: price_asc, price_desc, name_asc, name_desc or default
    #[arg(long, value_name = "KEY")]
    pub sort: Option<SortKey>,

    /// Only list components that are in stock
    #[arg(long)]
    pub in_stock: bool,

    /// Only list components of this brand (repeatable)
    #[arg(long = "brand", value_name = "BRAND")]
    pub brands: Vec<String>,

    /// Lowest price to list (inclusive)
    #[arg(long, value_name = "PRICE")]
    pub min_price: Option<Decimal>,

    /// Highest price to list (inclusive)
    #[arg(long, value_name = "PRICE")]
    pub max_price: Option<Decimal>,

    /// Output format: markdown or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Add the build to the cart file if it is complete and compatible
    #[arg(long, value_name = "CART_FILE")]
    pub commit: Option<PathBuf>,

    /// Path to the config file (defaults to ./pc-builder.config.yml if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Whether any listing filter was given on the command line
    pub fn has_list_filters(&self) -> bool {
        self.query.is_some()
            || self.sort.is_some()
            || self.in_stock
            || !self.brands.is_empty()
            || self.min_price.is_some()
            || self.max_price.is_some()
    }
}
