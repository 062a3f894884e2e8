use crate::application::read_models::BuildReadModel;
use crate::build_configuration::domain::{ComponentRecord, Slot};
use crate::shared::Result;
use std::sync::Arc;

/// BuildReportFormatter port for rendering the configurator's read model
pub trait BuildReportFormatter {
    /// Renders the current build: selections, issues, totals and state
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_build(&self, model: &BuildReadModel) -> Result<String>;

    /// Renders a filtered candidate list for one slot
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_candidates(&self, slot: Slot, candidates: &[Arc<ComponentRecord>]) -> Result<String>;
}
