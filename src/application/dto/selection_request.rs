use crate::build_configuration::domain::Slot;
use crate::shared::error::ConfiguratorError;
use std::str::FromStr;

/// Request to put the catalog component `component_id` into `slot`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRequest {
    pub slot: Slot,
    pub component_id: String,
}

impl SelectionRequest {
    pub fn new(slot: Slot, component_id: impl Into<String>) -> Self {
        Self {
            slot,
            component_id: component_id.into(),
        }
    }
}

impl FromStr for SelectionRequest {
    type Err = ConfiguratorError;

    /// Parses `<slot>=<component id>`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ConfiguratorError::InvalidSelection {
            selection: s.to_string(),
            reason: reason.to_string(),
        };

        let (slot, id) = s.split_once('=').ok_or_else(|| invalid("missing '='"))?;
        let slot = Slot::from_str(slot.trim()).map_err(|e| invalid(&e))?;
        let id = id.trim();
        if id.is_empty() {
            return Err(invalid("component id is empty"));
        }

        Ok(Self::new(slot, id))
    }
}
