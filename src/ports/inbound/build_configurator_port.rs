use crate::application::dto::CommitOutcome;
use crate::application::read_models::BuildReadModel;
use crate::build_configuration::domain::{BuildState, ComponentRecord, Slot};
use crate::shared::Result;
use std::sync::Arc;

/// BuildConfiguratorPort - Inbound port for a build session
///
/// This is the contract presentation layers drive. Every mutation
/// re-evaluates the build synchronously before returning, so the read
/// model handed back always reflects the latest selection.
pub trait BuildConfiguratorPort {
    /// Places a component into a slot, or clears it with `None`
    ///
    /// Never fails: incompatible selections are allowed and reported
    /// through the read model's issues.
    fn set_slot(&mut self, slot: Slot, component: Option<Arc<ComponentRecord>>) -> &BuildReadModel;

    /// The last computed read model
    fn read_model(&self) -> &BuildReadModel;

    /// Current session state
    fn state(&self) -> BuildState;

    /// Hands the selection to the cart if the build is complete and compatible
    ///
    /// # Returns
    /// `CommitOutcome::Refused` with the current state when committing is
    /// not allowed; the selection is then left untouched
    ///
    /// # Errors
    /// Returns an error only if the cart collaborator fails
    fn commit(&mut self) -> Result<CommitOutcome>;
}
