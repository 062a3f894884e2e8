use crate::build_configuration::domain::BuildState;
use rust_decimal::Decimal;

/// Result of asking the orchestrator to commit the current build
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The lines were handed to the cart and the session was reset
    Committed { line_count: usize, total_price: Decimal },
    /// Committing is not allowed in the current state; nothing changed
    Refused { state: BuildState },
}

impl CommitOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, CommitOutcome::Committed { .. })
    }
}
