use crate::build_configuration::domain::Slot;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish a build with compatibility
/// problems from invalid input and from outright failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the evaluated build has no compatibility issues
    Success = 0,
    /// The evaluated build has at least one compatibility issue
    IncompatibleBuild = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (catalog, config or cart I/O, unknown component, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::IncompatibleBuild => write!(f, "Incompatible Build (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors raised at the adapter boundary.
///
/// The build core itself is infallible; these cover catalog loading,
/// selection by id, cart hand-off and configuration.
#[derive(Debug, Error)]
pub enum ConfiguratorError {
    #[error("Catalog file not found: {path}\n\n💡 Hint: Pass an existing catalog with --catalog <FILE>")]
    CatalogNotFound { path: PathBuf },

    #[error("Failed to parse catalog file: {path}\nDetails: {details}\n\n💡 Hint: The catalog must be a JSON object mapping category labels to lists of components")]
    CatalogParseError { path: PathBuf, details: String },

    #[error("Unknown component '{id}' for slot {slot}\n\n💡 Hint: List the available candidates with --list {slot}")]
    UnknownComponent { slot: Slot, id: String },

    #[error("Invalid selection: {selection}\nReason: {reason}\n\n💡 Hint: Use the form <slot>=<component id>, e.g. processor=cpu-1")]
    InvalidSelection { selection: String, reason: String },

    #[error("Failed to write cart file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    CartWriteError { path: PathBuf, details: String },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
