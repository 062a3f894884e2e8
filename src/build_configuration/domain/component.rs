use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Free-form specification attributes of a catalog item
///
/// The catalog supplies these as an untyped string map, possibly partial
/// or absent. The accessors degrade missing or malformed values instead
/// of failing, so compatibility rules never have to type-check call sites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Specifications(HashMap<String, String>);

impl Specifications {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Adds or replaces an attribute, builder style
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Returns the attribute value, treating blank values as missing
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    /// Parses the leading numeric part of an attribute ("650", "650W", "650 W")
    ///
    /// Returns `default` when the attribute is missing or does not start
    /// with a number.
    pub fn get_number_or_default(&self, key: &str, default: Decimal) -> Decimal {
        self.get_string(key)
            .and_then(parse_leading_decimal)
            .unwrap_or(default)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Attributes sorted by name
    pub fn sorted(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .0
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Specifications {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Extracts a decimal number from the start of `raw`, ignoring leading whitespace
fn parse_leading_decimal(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    for (i, ch) in trimmed.char_indices() {
        match ch {
            '0'..='9' => seen_digit = true,
            '.' | ',' if seen_digit && !seen_dot => seen_dot = true,
            '-' | '+' if i == 0 => {}
            _ => break,
        }
        end = i + ch.len_utf8();
    }

    if !seen_digit {
        return None;
    }

    let number = trimmed[..end]
        .trim_end_matches(['.', ','])
        .replace(',', ".");
    Decimal::from_str(&number).ok()
}

fn non_negative_price<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    <Decimal as Deserialize>::deserialize(deserializer).map(|price| price.max(Decimal::ZERO))
}

/// Catalog item that can be placed into a build slot
///
/// Records are immutable catalog data. A build shares them by reference
/// and never copies or mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRecord {
    id: String,
    name: String,
    #[serde(deserialize_with = "non_negative_price")]
    price: Decimal,
    #[serde(default)]
    stock: u32,
    #[serde(default)]
    category: String,
    #[serde(default)]
    brand: Option<String>,
    #[serde(default, alias = "attributes")]
    specifications: Specifications,
}

impl ComponentRecord {
    /// Creates a record; negative prices are clamped to zero
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: price.max(Decimal::ZERO),
            stock: 0,
            category: String::new(),
            brand: None,
            specifications: Specifications::new(),
        }
    }

    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn with_specifications(mut self, specifications: Specifications) -> Self {
        self.specifications = specifications;
        self
    }

    /// Adds a single specification attribute
    pub fn with_spec(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.specifications = self.specifications.with(key, value);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    pub fn specifications(&self) -> &Specifications {
        &self.specifications
    }
}
