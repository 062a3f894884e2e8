use crate::application::read_models::BuildReadModel;
use crate::build_configuration::domain::{ComponentRecord, Slot};
use crate::ports::outbound::BuildReportFormatter;
use crate::shared::Result;
use serde::Serialize;
use std::sync::Arc;

/// JSON document for a candidate listing
#[derive(Debug, Serialize)]
struct CandidateListing<'a> {
    slot: Slot,
    count: usize,
    candidates: &'a [Arc<ComponentRecord>],
}

/// JsonReportFormatter adapter for machine readable reports
pub struct JsonReportFormatter;

impl JsonReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildReportFormatter for JsonReportFormatter {
    fn format_build(&self, model: &BuildReadModel) -> Result<String> {
        Ok(serde_json::to_string_pretty(model)?)
    }

    fn format_candidates(&self, slot: Slot, candidates: &[Arc<ComponentRecord>]) -> Result<String> {
        let listing = CandidateListing {
            slot,
            count: candidates.len(),
            candidates,
        };
        Ok(serde_json::to_string_pretty(&listing)?)
    }
}
