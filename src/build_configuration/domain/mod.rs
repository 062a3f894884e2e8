pub mod build_configuration;
pub mod build_state;
pub mod compatibility_issue;
pub mod component;
pub mod slot;

pub use build_configuration::{BuildConfiguration, BuildSnapshot};
pub use build_state::BuildState;
pub use compatibility_issue::{CompatibilityIssue, CompatibilityRule};
pub use component::{ComponentRecord, Specifications};
pub use slot::Slot;
