use crate::build_configuration::domain::{
    BuildSnapshot, CompatibilityIssue, CompatibilityRule, Slot,
};
use crate::build_configuration::policies::PowerBudgetPolicy;
use rust_decimal::Decimal;

/// Specification key holding the CPU / motherboard socket
pub const SOCKET_KEY: &str = "Socket";

/// Specification key holding the memory module type
pub const MEMORY_TYPE_KEY: &str = "Tip memorie";

/// Specification key holding the memory types a motherboard supports
pub const SUPPORTED_MEMORY_KEY: &str = "Memorie suportată";

/// Specification key holding the PSU rating in watts
pub const PSU_POWER_KEY: &str = "Putere";

/// CompatibilityEngine - Checks a build snapshot for conflicting parts
///
/// Evaluation is a pure function of the snapshot. Rules run in a fixed
/// order (socket, memory, power) and every rule runs regardless of the
/// others, so the output is deterministic for a given build.
///
/// Missing or malformed specifications never produce an error; the
/// affected rule is simply not applicable.
#[derive(Debug, Clone, Default)]
pub struct CompatibilityEngine {
    power_policy: PowerBudgetPolicy,
}

impl CompatibilityEngine {
    pub fn new(power_policy: PowerBudgetPolicy) -> Self {
        Self { power_policy }
    }

    pub fn power_policy(&self) -> &PowerBudgetPolicy {
        &self.power_policy
    }

    /// Evaluates every rule against the snapshot
    ///
    /// # Returns
    /// Issues in rule order; empty when nothing conflicts
    pub fn evaluate(&self, snapshot: &BuildSnapshot) -> Vec<CompatibilityIssue> {
        [
            Self::check_socket(snapshot),
            Self::check_memory(snapshot),
            self.check_power(snapshot),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Processor and motherboard must report the same socket
    fn check_socket(snapshot: &BuildSnapshot) -> Option<CompatibilityIssue> {
        let processor = snapshot.get(Slot::Processor)?;
        let motherboard = snapshot.get(Slot::Motherboard)?;

        let cpu_socket = processor.specifications().get_string(SOCKET_KEY)?;
        let board_socket = motherboard.specifications().get_string(SOCKET_KEY)?;

        (cpu_socket != board_socket).then(|| {
            CompatibilityIssue::new(
                CompatibilityRule::Socket,
                format!(
                    "Processor socket {} is not compatible with motherboard socket {}",
                    cpu_socket, board_socket
                ),
            )
        })
    }

    /// Memory type must appear in the motherboard's supported-memory text
    ///
    /// Containment is a plain substring test since the motherboard field
    /// may list several types ("DDR4, DDR5").
    fn check_memory(snapshot: &BuildSnapshot) -> Option<CompatibilityIssue> {
        let memory = snapshot.get(Slot::Memory)?;
        let motherboard = snapshot.get(Slot::Motherboard)?;

        let memory_type = memory.specifications().get_string(MEMORY_TYPE_KEY)?;
        let supported = motherboard
            .specifications()
            .get_string(SUPPORTED_MEMORY_KEY)?;

        (!supported.contains(memory_type)).then(|| {
            CompatibilityIssue::new(
                CompatibilityRule::Memory,
                format!(
                    "Memory type {} is not supported by the motherboard (supported: {})",
                    memory_type, supported
                ),
            )
        })
    }

    /// Estimated draw must stay within the PSU headroom
    fn check_power(&self, snapshot: &BuildSnapshot) -> Option<CompatibilityIssue> {
        let power_supply = snapshot.get(Slot::PowerSupply)?;
        let draw = self.power_policy.estimated_draw(snapshot);
        if draw == 0 {
            return None;
        }

        let rating = power_supply
            .specifications()
            .get_number_or_default(PSU_POWER_KEY, Decimal::ZERO);

        self.power_policy
            .exceeds_headroom(draw, rating)
            .then(|| {
                CompatibilityIssue::new(
                    CompatibilityRule::Power,
                    format!(
                        "Power supply rated {}W may be insufficient for an estimated draw of {}W",
                        rating.normalize(),
                        draw
                    ),
                )
            })
    }
}
