use crate::build_configuration::domain::{ComponentRecord, Slot};
use crate::shared::Result;
use serde::Serialize;
use std::sync::Arc;

/// One cart entry handed over when a build is committed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    pub slot: Slot,
    pub component: Arc<ComponentRecord>,
    pub quantity: u32,
}

impl CartLine {
    /// A line for a single unit, which is what a committed build always adds
    pub fn single(slot: Slot, component: Arc<ComponentRecord>) -> Self {
        Self {
            slot,
            component,
            quantity: 1,
        }
    }
}

/// CartGateway port for handing a finished build to the cart
///
/// The configurator's responsibility ends once `commit` returns.
pub trait CartGateway {
    /// Adds the build's components to the cart
    ///
    /// # Arguments
    /// * `lines` - One line per occupied slot, in slot order
    ///
    /// # Errors
    /// Returns an error if the cart backend rejects or fails to store the lines
    fn commit(&self, lines: &[CartLine]) -> Result<()>;
}
