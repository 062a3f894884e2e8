pub mod candidate_filter;
pub mod compatibility_engine;

pub use candidate_filter::{
    compare_names, filter_and_sort, CandidateFilter, FilterCriteria, PriceRange, SortKey,
};
pub use compatibility_engine::CompatibilityEngine;
