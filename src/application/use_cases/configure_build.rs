use crate::application::dto::CommitOutcome;
use crate::application::read_models::{BuildReadModel, BuildReadModelBuilder};
use crate::build_configuration::domain::{BuildConfiguration, BuildState, ComponentRecord, Slot};
use crate::build_configuration::services::CompatibilityEngine;
use crate::ports::inbound::BuildConfiguratorPort;
use crate::ports::outbound::{CartGateway, CartLine, ProgressReporter};
use crate::shared::Result;
use std::sync::Arc;

/// ConfigureBuildUseCase - Orchestrates a single build session
///
/// Owns the build selection as its only writer. Every mutation re-runs
/// the compatibility engine and rebuilds the read model before returning,
/// so readers never observe a stale evaluation.
///
/// # Type Parameters
/// * `CG` - CartGateway implementation receiving committed builds
/// * `PR` - ProgressReporter implementation
pub struct ConfigureBuildUseCase<CG, PR> {
    configuration: BuildConfiguration,
    engine: CompatibilityEngine,
    read_model: BuildReadModel,
    cart_gateway: CG,
    progress_reporter: PR,
}

impl<CG, PR> ConfigureBuildUseCase<CG, PR>
where
    CG: CartGateway,
    PR: ProgressReporter,
{
    /// Starts a session with an empty build
    pub fn new(engine: CompatibilityEngine, cart_gateway: CG, progress_reporter: PR) -> Self {
        let configuration = BuildConfiguration::new();
        let read_model = BuildReadModelBuilder::build(&configuration, Vec::new());
        Self {
            configuration,
            engine,
            read_model,
            cart_gateway,
            progress_reporter,
        }
    }

    pub fn configuration(&self) -> &BuildConfiguration {
        &self.configuration
    }

    pub fn engine(&self) -> &CompatibilityEngine {
        &self.engine
    }

    pub fn cart_gateway(&self) -> &CG {
        &self.cart_gateway
    }

    /// Empties a slot
    pub fn clear_slot(&mut self, slot: Slot) -> &BuildReadModel {
        self.set_slot(slot, None)
    }

    /// Re-evaluates the current selection from scratch
    fn refresh(&mut self) {
        let issues = self.engine.evaluate(&self.configuration.snapshot());
        self.read_model = BuildReadModelBuilder::build(&self.configuration, issues);
    }

    /// Cart lines for every occupied slot, in slot order
    fn cart_lines(&self) -> Vec<CartLine> {
        self.read_model
            .snapshot
            .selected()
            .map(|(slot, record)| CartLine::single(slot, Arc::clone(record)))
            .collect()
    }
}

impl<CG, PR> BuildConfiguratorPort for ConfigureBuildUseCase<CG, PR>
where
    CG: CartGateway,
    PR: ProgressReporter,
{
    fn set_slot(&mut self, slot: Slot, component: Option<Arc<ComponentRecord>>) -> &BuildReadModel {
        self.configuration.set_slot(slot, component);
        self.refresh();
        &self.read_model
    }

    fn read_model(&self) -> &BuildReadModel {
        &self.read_model
    }

    fn state(&self) -> BuildState {
        self.read_model.state
    }

    fn commit(&mut self) -> Result<CommitOutcome> {
        let state = self.state();
        if !state.can_commit() {
            self.progress_reporter.report_warning(&format!(
                "🚫 Cannot add build to cart: {}",
                state.describe()
            ));
            return Ok(CommitOutcome::Refused { state });
        }

        let lines = self.cart_lines();
        let total_price = self.read_model.total_price;
        self.cart_gateway.commit(&lines)?;

        self.progress_reporter.report_completion(&format!(
            "🛒 Added {} component(s) to the cart (total {})",
            lines.len(),
            total_price
        ));

        self.configuration.reset();
        self.refresh();

        Ok(CommitOutcome::Committed {
            line_count: lines.len(),
            total_price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingCart {
        committed: RefCell<Vec<Vec<CartLine>>>,
        fail: bool,
    }

    impl CartGateway for RecordingCart {
        fn commit(&self, lines: &[CartLine]) -> Result<()> {
            if self.fail {
                anyhow::bail!("cart unavailable");
            }
            self.committed.borrow_mut().push(lines.to_vec());
            Ok(())
        }
    }

    #[derive(Default)]
    struct SilentReporter {
        warnings: RefCell<Vec<String>>,
    }

    impl ProgressReporter for SilentReporter {
        fn report(&self, _message: &str) {}
        fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
        fn report_warning(&self, message: &str) {
            self.warnings.borrow_mut().push(message.to_string());
        }
        fn report_completion(&self, _message: &str) {}
    }

    fn part(id: &str, specs: &[(&str, &str)]) -> Option<Arc<ComponentRecord>> {
        let record = specs
            .iter()
            .fold(ComponentRecord::new(id, id, dec!(100)), |r, (k, v)| {
                r.with_spec(*k, *v)
            });
        Some(Arc::new(record))
    }

    fn use_case(cart: RecordingCart) -> ConfigureBuildUseCase<RecordingCart, SilentReporter> {
        ConfigureBuildUseCase::new(
            CompatibilityEngine::default(),
            cart,
            SilentReporter::default(),
        )
    }

    fn fill_compatible(uc: &mut ConfigureBuildUseCase<RecordingCart, SilentReporter>) {
        uc.set_slot(
            Slot::Motherboard,
            part("mb", &[("Socket", "AM5"), ("Memorie suportată", "DDR5")]),
        );
        uc.set_slot(Slot::Processor, part("cpu", &[("Socket", "AM5")]));
        uc.set_slot(Slot::GraphicsCard, part("gpu", &[]));
        uc.set_slot(Slot::Memory, part("ram", &[("Tip memorie", "DDR5")]));
        uc.set_slot(Slot::Storage, part("ssd", &[]));
        uc.set_slot(Slot::PowerSupply, part("psu", &[("Putere", "750")]));
    }

    #[test]
    fn test_new_session_is_incomplete() {
        let uc = use_case(RecordingCart::default());
        assert_eq!(uc.state(), BuildState::Incomplete);
        assert!(uc.read_model().issues.is_empty());
    }

    #[test]
    fn test_set_slot_re_evaluates_immediately() {
        let mut uc = use_case(RecordingCart::default());
        uc.set_slot(Slot::Processor, part("cpu", &[("Socket", "AM4")]));
        let model = uc.set_slot(Slot::Motherboard, part("mb", &[("Socket", "AM5")]));
        assert_eq!(model.issues.len(), 1);

        let model = uc.set_slot(Slot::Motherboard, part("mb2", &[("Socket", "AM4")]));
        assert!(model.issues.is_empty());
    }

    #[test]
    fn test_state_transitions() {
        let mut uc = use_case(RecordingCart::default());
        fill_compatible(&mut uc);
        assert_eq!(uc.state(), BuildState::CompleteCompatible);

        uc.set_slot(Slot::PowerSupply, part("psu", &[("Putere", "400")]));
        assert_eq!(uc.state(), BuildState::CompleteWithIssues);

        uc.clear_slot(Slot::PowerSupply);
        assert_eq!(uc.state(), BuildState::Incomplete);
    }

    #[test]
    fn test_commit_refused_when_incomplete() {
        let mut uc = use_case(RecordingCart::default());
        uc.set_slot(Slot::Processor, part("cpu", &[]));

        let outcome = uc.commit().unwrap();
        assert_eq!(
            outcome,
            CommitOutcome::Refused {
                state: BuildState::Incomplete
            }
        );
        assert!(uc.cart_gateway().committed.borrow().is_empty());
        assert_eq!(uc.configuration().selected_count(), 1);
        assert_eq!(uc.progress_reporter.warnings.borrow().len(), 1);
    }

    #[test]
    fn test_commit_refused_with_issues() {
        let mut uc = use_case(RecordingCart::default());
        fill_compatible(&mut uc);
        uc.set_slot(Slot::Processor, part("cpu", &[("Socket", "LGA1700")]));

        let outcome = uc.commit().unwrap();
        assert_eq!(
            outcome,
            CommitOutcome::Refused {
                state: BuildState::CompleteWithIssues
            }
        );
        assert!(uc.cart_gateway().committed.borrow().is_empty());
    }

    #[test]
    fn test_commit_hands_lines_in_slot_order_and_resets() {
        let mut uc = use_case(RecordingCart::default());
        fill_compatible(&mut uc);

        let outcome = uc.commit().unwrap();
        assert_eq!(
            outcome,
            CommitOutcome::Committed {
                line_count: 6,
                total_price: dec!(600)
            }
        );

        let committed = uc.cart_gateway().committed.borrow();
        assert_eq!(committed.len(), 1);
        let slots: Vec<Slot> = committed[0].iter().map(|line| line.slot).collect();
        assert_eq!(slots, Slot::ALL.to_vec());
        assert!(committed[0].iter().all(|line| line.quantity == 1));
        drop(committed);

        assert_eq!(uc.configuration().selected_count(), 0);
        assert_eq!(uc.state(), BuildState::Incomplete);
    }

    #[test]
    fn test_commit_failure_keeps_selection() {
        let mut uc = use_case(RecordingCart {
            fail: true,
            ..Default::default()
        });
        fill_compatible(&mut uc);

        assert!(uc.commit().is_err());
        assert_eq!(uc.state(), BuildState::CompleteCompatible);
        assert_eq!(uc.configuration().selected_count(), 6);
    }

    #[test]
    fn test_second_set_slot_supersedes_first() {
        let mut uc = use_case(RecordingCart::default());
        uc.set_slot(Slot::Storage, part("ssd-1", &[]));
        uc.set_slot(Slot::Storage, part("ssd-2", &[]));

        let model = uc.read_model();
        let storage = model.slot(Slot::Storage).unwrap();
        assert_eq!(storage.component.as_ref().unwrap().id, "ssd-2");
        assert_eq!(model.total_price, dec!(100));
    }
}
