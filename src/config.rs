//! Configuration file support for pc-builder.
//!
//! A `pc-builder.config.yml` in the working directory (or a file passed with
//! `--config`) sets the report format, the power heuristic, candidate list
//! defaults and catalog category labels. CLI flags always win.

use anyhow::{bail, Context};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::build_configuration::domain::Slot;
use crate::build_configuration::policies::{
    PowerBudgetPolicy, DEFAULT_GRAPHICS_CARD_WATTS, DEFAULT_HEADROOM_RATIO,
    DEFAULT_PROCESSOR_WATTS, MAX_COMPONENT_WATTS,
};
use crate::build_configuration::services::SortKey;
use crate::ports::outbound::CategoryLabels;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "pc-builder.config.yml";

/// Everything a config file may contain. All sections are optional.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub power: Option<PowerConfig>,
    pub candidates: Option<CandidatesConfig>,
    /// Slot name to catalog category label.
    pub category_labels: Option<HashMap<String, String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Power estimate constants.
#[derive(Debug, Deserialize, Default)]
pub struct PowerConfig {
    pub processor_watts: Option<u32>,
    pub graphics_card_watts: Option<u32>,
    pub headroom_ratio: Option<Decimal>,
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Defaults applied to candidate listings.
#[derive(Debug, Deserialize, Default)]
pub struct CandidatesConfig {
    pub sort: Option<String>,
    pub in_stock_only: Option<bool>,
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Power budget policy with unset values taken from the built-in defaults.
    pub fn power_policy(&self) -> PowerBudgetPolicy {
        let power = self.power.as_ref();
        PowerBudgetPolicy::new(
            power
                .and_then(|p| p.processor_watts)
                .unwrap_or(DEFAULT_PROCESSOR_WATTS),
            power
                .and_then(|p| p.graphics_card_watts)
                .unwrap_or(DEFAULT_GRAPHICS_CARD_WATTS),
            power
                .and_then(|p| p.headroom_ratio)
                .unwrap_or(DEFAULT_HEADROOM_RATIO),
        )
    }

    /// Category labels with configured overrides applied.
    ///
    /// Keys are validated on load, so unparsable ones cannot occur here.
    pub fn category_labels(&self) -> CategoryLabels {
        let mut labels = CategoryLabels::default();
        if let Some(map) = &self.category_labels {
            for (key, label) in map {
                if let Ok(slot) = key.parse::<Slot>() {
                    labels = labels.with_label(slot, label.trim());
                }
            }
        }
        labels
    }

    pub fn sort(&self) -> Option<SortKey> {
        self.candidates
            .as_ref()
            .and_then(|c| c.sort.as_deref())
            .map(SortKey::from)
    }

    pub fn in_stock_only(&self) -> Option<bool> {
        self.candidates.as_ref().and_then(|c| c.in_stock_only)
    }
}

/// Reads, parses and validates the file at `path`. A missing file is an error.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Looks for `pc-builder.config.yml` in `dir`; absence is not an error.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let candidate = dir.join(CONFIG_FILENAME);
    if !candidate.is_file() {
        return Ok(None);
    }
    load_config_from_path(&candidate).map(Some)
}

/// Rejects values the build core cannot use.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(power) = config.power.as_ref() {
        for (key, watts) in [
            ("processor_watts", power.processor_watts),
            ("graphics_card_watts", power.graphics_card_watts),
        ] {
            if let Some(watts) = watts.filter(|w| *w > MAX_COMPONENT_WATTS) {
                bail!(
                    "Invalid config: power.{} must be at most {} (got {}).\n\n\
                     💡 Hint: Use the typical draw of a single component in watts.",
                    key,
                    MAX_COMPONENT_WATTS,
                    watts
                );
            }
        }
    }

    if let Some(ratio) = config.power.as_ref().and_then(|p| p.headroom_ratio) {
        if ratio <= Decimal::ZERO || ratio > Decimal::ONE {
            bail!(
                "Invalid config: power.headroom_ratio must be greater than 0 and at most 1 (got {}).\n\n\
                 💡 Hint: Use a fraction of the power supply rating, e.g. 0.8 for 80%.",
                ratio
            );
        }
    }

    if let Some(ref labels) = config.category_labels {
        for (key, label) in labels {
            if let Err(e) = key.parse::<Slot>() {
                bail!(
                    "Invalid config: category_labels has an unknown slot '{}'.\n\n💡 Hint: {}",
                    key,
                    e
                );
            }
            if label.trim().is_empty() {
                bail!(
                    "Invalid config: category_labels.{} must not be empty.\n\n\
                     💡 Hint: Set it to the category name used in the catalog.",
                    key
                );
            }
        }
    }
    Ok(())
}

// Typos should not pass silently, but they should not abort the run either.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in unknown_field_paths(config) {
        eprintln!("⚠️  Warning: Unknown config field '{key}' will be ignored.");
    }
}

/// Unknown keys, section-qualified (`power.<key>`) and sorted.
fn unknown_field_paths(config: &ConfigFile) -> Vec<String> {
    let nested = [
        ("power", config.power.as_ref().map(|p| &p.unknown_fields)),
        ("candidates", config.candidates.as_ref().map(|c| &c.unknown_fields)),
    ];

    let mut paths: Vec<String> = config.unknown_fields.keys().cloned().collect();
    for (section, fields) in nested {
        if let Some(fields) = fields {
            paths.extend(fields.keys().map(|key| format!("{section}.{key}")));
        }
    }
    paths.sort();
    paths
}
