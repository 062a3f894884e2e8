use pc_builder::prelude::*;
use std::cell::Cell;
use std::collections::HashMap;

/// Mock CatalogRepository for testing
pub struct MockCatalogRepository {
    pub categories: HashMap<String, Vec<ComponentRecord>>,
    pub fetches: Cell<usize>,
    pub should_fail: bool,
}

impl MockCatalogRepository {
    pub fn new() -> Self {
        Self {
            categories: HashMap::new(),
            fetches: Cell::new(0),
            should_fail: false,
        }
    }

    pub fn with_records(mut self, category_label: &str, records: Vec<ComponentRecord>) -> Self {
        self.categories
            .entry(category_label.to_string())
            .or_default()
            .extend(records);
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.get()
    }
}

impl Default for MockCatalogRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogRepository for MockCatalogRepository {
    fn fetch_candidates(&self, category_label: &str) -> Result<Vec<ComponentRecord>> {
        self.fetches.set(self.fetches.get() + 1);
        if self.should_fail {
            anyhow::bail!("Mock catalog repository failure");
        }
        Ok(self
            .categories
            .get(category_label)
            .cloned()
            .unwrap_or_default())
    }
}
