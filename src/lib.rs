//! pc-builder - PC build configurator core
//!
//! This library assembles a PC build from six component slots, checks the
//! selection for socket, memory and power compatibility, and narrows and
//! ranks catalog candidates. It follows hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`build_configuration`): Build state, compatibility rules and candidate ranking
//! - **Application Layer** (`application`): Use cases, read models and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pc_builder::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let catalog = JsonFileCatalog::open("catalog.json")?;
//! let mut candidates =
//!     LoadCandidatesUseCase::new(catalog, StderrProgressReporter::new(), CategoryLabels::default());
//! candidates.load_all()?;
//!
//! // Create the build session
//! let mut session = ConfigureBuildUseCase::new(
//!     CompatibilityEngine::default(),
//!     JsonCartWriter::new("cart.json"),
//!     StderrProgressReporter::new(),
//! );
//!
//! let processor = candidates.find(Slot::Processor, "cpu-1")?;
//! let model = session.set_slot(Slot::Processor, Some(processor));
//! println!("{}", MarkdownReportFormatter::new().format_build(model)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod build_configuration;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        JsonCartWriter, JsonFileCatalog, ReportFileWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonReportFormatter, MarkdownReportFormatter};
    pub use crate::application::dto::{CommitOutcome, OutputFormat, SelectionRequest};
    pub use crate::application::read_models::BuildReadModel;
    pub use crate::application::use_cases::{ConfigureBuildUseCase, LoadCandidatesUseCase};
    pub use crate::build_configuration::domain::{
        BuildConfiguration, BuildSnapshot, BuildState, CompatibilityIssue, CompatibilityRule,
        ComponentRecord, Slot, Specifications,
    };
    pub use crate::build_configuration::policies::PowerBudgetPolicy;
    pub use crate::build_configuration::services::{
        CandidateFilter, CompatibilityEngine, FilterCriteria, SortKey,
    };
    pub use crate::ports::inbound::BuildConfiguratorPort;
    pub use crate::ports::outbound::{
        BuildReportFormatter, CartGateway, CartLine, CatalogRepository, CategoryLabels,
        OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::Result;
}
