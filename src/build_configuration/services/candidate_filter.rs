use crate::build_configuration::domain::ComponentRecord;
use deunicode::deunicode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Ordering applied to candidates after filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
    /// Keep the order the records were received in
    #[default]
    #[serde(other)]
    Unsorted,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
            SortKey::NameAsc => "name_asc",
            SortKey::NameDesc => "name_desc",
            SortKey::Unsorted => "default",
        }
    }
}

impl From<&str> for SortKey {
    /// Unknown keys fall back to [`SortKey::Unsorted`]
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "price_asc" => SortKey::PriceAsc,
            "price_desc" => SortKey::PriceDesc,
            "name_asc" => SortKey::NameAsc,
            "name_desc" => SortKey::NameDesc,
            _ => SortKey::Unsorted,
        }
    }
}

impl FromStr for SortKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SortKey::from(s))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inclusive price bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    min: Decimal,
    max: Decimal,
}

impl PriceRange {
    /// Builds a range from raw bounds
    ///
    /// `(0, 0)` is the "no range" sentinel and yields `None`.
    pub fn from_bounds(min: Decimal, max: Decimal) -> Option<Self> {
        if min.is_zero() && max.is_zero() {
            None
        } else {
            Some(Self { min, max })
        }
    }

    pub fn min(&self) -> Decimal {
        self.min
    }

    pub fn max(&self) -> Decimal {
        self.max
    }

    pub fn contains(&self, price: Decimal) -> bool {
        price >= self.min && price <= self.max
    }
}

/// Criteria for narrowing and ordering a candidate list
///
/// All active criteria are combined with AND. The brand set and price
/// range are only used by the generic result list; slot pickers leave
/// them empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against the name
    pub query: String,
    pub sort: SortKey,
    pub in_stock_only: bool,
    /// Allowed brands; empty means any brand
    pub brands: BTreeSet<String>,
    pub price_range: Option<PriceRange>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn in_stock_only(mut self, in_stock_only: bool) -> Self {
        self.in_stock_only = in_stock_only;
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brands.insert(brand.into());
        self
    }

    /// Sets the price bounds; `(0, 0)` clears them
    pub fn with_price_bounds(mut self, min: Decimal, max: Decimal) -> Self {
        self.price_range = PriceRange::from_bounds(min, max);
        self
    }
}

/// CandidateFilter - Narrows and ranks catalog records
///
/// Filtering always runs before sorting. Sorting is stable: records that
/// compare equal keep the order they had in the input.
#[derive(Debug)]
pub struct CandidateFilter {
    criteria: FilterCriteria,
    query: String,
}

impl CandidateFilter {
    pub fn new(criteria: FilterCriteria) -> Self {
        let query = criteria.query.to_lowercase();
        Self { criteria, query }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Filters then sorts `records` into a fresh list
    ///
    /// The input is left untouched; the output shares the records.
    pub fn apply(&self, records: &[Arc<ComponentRecord>]) -> Vec<Arc<ComponentRecord>> {
        let mut selected: Vec<Arc<ComponentRecord>> = records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect();

        self.sort(&mut selected);
        selected
    }

    /// Whether a record satisfies every active criterion
    pub fn matches(&self, record: &ComponentRecord) -> bool {
        self.matches_query(record)
            && (!self.criteria.in_stock_only || record.in_stock())
            && self.matches_brand(record)
            && self
                .criteria
                .price_range
                .map_or(true, |range| range.contains(record.price()))
    }

    fn matches_query(&self, record: &ComponentRecord) -> bool {
        self.query.is_empty() || record.name().to_lowercase().contains(&self.query)
    }

    fn matches_brand(&self, record: &ComponentRecord) -> bool {
        self.criteria.brands.is_empty()
            || record
                .brand()
                .is_some_and(|brand| self.criteria.brands.contains(brand))
    }

    fn sort(&self, records: &mut [Arc<ComponentRecord>]) {
        match self.criteria.sort {
            SortKey::PriceAsc => records.sort_by(|a, b| a.price().cmp(&b.price())),
            SortKey::PriceDesc => records.sort_by(|a, b| b.price().cmp(&a.price())),
            SortKey::NameAsc => {
                records.sort_by_cached_key(|r| CollationKey::new(r.name()));
            }
            SortKey::NameDesc => {
                records.sort_by_cached_key(|r| std::cmp::Reverse(CollationKey::new(r.name())));
            }
            SortKey::Unsorted => {}
        }
    }
}

/// Convenience wrapper: filter and sort in one call
pub fn filter_and_sort(
    records: &[Arc<ComponentRecord>],
    criteria: &FilterCriteria,
) -> Vec<Arc<ComponentRecord>> {
    CandidateFilter::new(criteria.clone()).apply(records)
}

/// Sort key approximating natural alphabetical order
///
/// The primary level compares transliterated, lowercased text so that
/// letters with diacritics sort next to their base letter ("ăa" near "aa",
/// not after "z"). The secondary level compares the lowercased original,
/// placing the accented variant after the plain one. The tertiary level
/// breaks case ties with lowercase first ("casa" before "Casa").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct CollationKey {
    primary: String,
    secondary: String,
    tertiary: String,
}

impl CollationKey {
    fn new(name: &str) -> Self {
        let secondary = name.to_lowercase();
        Self {
            primary: deunicode(&secondary).to_lowercase(),
            secondary,
            tertiary: name.chars().map(swap_case).collect(),
        }
    }
}

// Code point order puts uppercase first; swapping flips that.
fn swap_case(ch: char) -> String {
    if ch.is_lowercase() {
        ch.to_uppercase().collect()
    } else {
        ch.to_lowercase().collect()
    }
}

/// Compares two names with the same ordering used for name sorting
pub fn compare_names(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}
