//! Builder for constructing BuildReadModel from domain objects

use super::build_read_model::{BuildReadModel, ComponentView, SlotView};
use crate::build_configuration::domain::{
    BuildConfiguration, BuildState, CompatibilityIssue, ComponentRecord,
};

/// Builder for constructing BuildReadModel from domain objects
pub struct BuildReadModelBuilder;

impl BuildReadModelBuilder {
    /// Builds the read model for a configuration and its latest evaluation
    ///
    /// # Arguments
    /// * `configuration` - Current build selection
    /// * `issues` - Result of evaluating that same selection
    pub fn build(
        configuration: &BuildConfiguration,
        issues: Vec<CompatibilityIssue>,
    ) -> BuildReadModel {
        let snapshot = configuration.snapshot();
        let state = BuildState::from_evaluation(configuration.is_complete(), issues.len());

        let slots = snapshot
            .iter()
            .map(|(slot, record)| SlotView {
                slot,
                label: slot.display_name().to_string(),
                component: record.map(Self::build_component),
            })
            .collect();

        BuildReadModel {
            slots,
            issues,
            total_price: configuration.total_price(),
            completion_fraction: configuration.completion_fraction(),
            completion_percent: configuration.completion_percent(),
            state,
            can_commit: state.can_commit(),
            snapshot,
        }
    }

    fn build_component(record: &ComponentRecord) -> ComponentView {
        ComponentView {
            id: record.id().to_string(),
            name: record.name().to_string(),
            brand: record.brand().map(str::to_string),
            price: record.price(),
            stock: record.stock(),
        }
    }
}
