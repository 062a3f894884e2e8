use crate::build_configuration::domain::{ComponentRecord, Slot};
use crate::shared::Result;

/// CatalogRepository port for retrieving candidate components
///
/// This port abstracts the catalog backend. The returned list is treated
/// as the complete candidate set for a slot until the caller refreshes it.
pub trait CatalogRepository {
    /// Fetches every component filed under a catalog category
    ///
    /// # Arguments
    /// * `category_label` - Catalog category the slot maps to (e.g. "processor")
    ///
    /// # Returns
    /// The candidate records in catalog order; an unknown category yields
    /// an empty list
    ///
    /// # Errors
    /// Returns an error if the catalog backend cannot be read
    fn fetch_candidates(&self, category_label: &str) -> Result<Vec<ComponentRecord>>;
}

/// Mapping from build slot to the catalog category it is fetched from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLabels {
    labels: [String; Slot::COUNT],
}

impl CategoryLabels {
    /// Overrides the category label of one slot
    pub fn with_label(mut self, slot: Slot, label: impl Into<String>) -> Self {
        self.labels[slot.index()] = label.into();
        self
    }

    pub fn label(&self, slot: Slot) -> &str {
        &self.labels[slot.index()]
    }
}

impl Default for CategoryLabels {
    /// Every slot maps to its canonical name
    fn default() -> Self {
        Self {
            labels: Slot::ALL.map(|slot| slot.as_str().to_string()),
        }
    }
}
