use crate::build_configuration::domain::ComponentRecord;
use crate::ports::outbound::CatalogRepository;
use crate::shared::error::ConfiguratorError;
use crate::shared::security::validate_catalog_file;
use crate::shared::Result;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// JsonFileCatalog adapter serving candidates from a JSON catalog file
///
/// The file is a JSON object mapping category labels to component lists:
///
/// ```json
/// { "processor": [ { "id": "cpu-1", "name": "Ryzen 5 7600", "price": 999.0,
///                    "stock": 4, "brand": "AMD",
///                    "specifications": { "Socket": "AM5" } } ] }
/// ```
///
/// The whole file is read and validated once, when the adapter is opened.
#[derive(Debug)]
pub struct JsonFileCatalog {
    path: PathBuf,
    categories: HashMap<String, Vec<ComponentRecord>>,
}

impl JsonFileCatalog {
    /// Reads and parses the catalog at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist, is a symlink, or is too large
    /// - The content is not a valid catalog document
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        validate_catalog_file(&path)?;

        let content = fs::read_to_string(&path).map_err(|e| ConfiguratorError::CatalogParseError {
            path: path.clone(),
            details: e.to_string(),
        })?;

        let categories = Self::parse(&path, &content)?;
        Ok(Self { path, categories })
    }

    /// Parses catalog content; records without a category get their label
    fn parse(path: &Path, content: &str) -> Result<HashMap<String, Vec<ComponentRecord>>> {
        let raw: HashMap<String, Vec<ComponentRecord>> =
            serde_json::from_str(content).map_err(|e| ConfiguratorError::CatalogParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        Ok(raw
            .into_iter()
            .map(|(label, records)| {
                let records = records
                    .into_iter()
                    .map(|record| {
                        if record.category().is_empty() {
                            record.with_category(label.clone())
                        } else {
                            record
                        }
                    })
                    .collect();
                (label, records)
            })
            .collect())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Category labels present in the file, sorted
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.categories.keys().map(String::as_str).collect();
        labels.sort_unstable();
        labels
    }
}

impl CatalogRepository for JsonFileCatalog {
    fn fetch_candidates(&self, category_label: &str) -> Result<Vec<ComponentRecord>> {
        Ok(self
            .categories
            .get(category_label)
            .cloned()
            .unwrap_or_default())
    }
}
