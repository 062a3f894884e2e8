use crate::build_configuration::domain::{BuildSnapshot, Slot};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Default wattage assumed for any selected processor
pub const DEFAULT_PROCESSOR_WATTS: u32 = 120;

/// Default wattage assumed for any selected graphics card
pub const DEFAULT_GRAPHICS_CARD_WATTS: u32 = 250;

/// Largest per-component wattage a configuration may assign
pub const MAX_COMPONENT_WATTS: u32 = 10_000;

/// Default share of the PSU rating the estimated draw may use
pub const DEFAULT_HEADROOM_RATIO: Decimal = dec!(0.8);

/// PowerBudget policy for estimating draw and judging PSU headroom
///
/// The draw estimate is a fixed heuristic: each occupied processor or
/// graphics card slot adds a constant wattage. Component wattage is never
/// read from specifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerBudgetPolicy {
    processor_watts: u32,
    graphics_card_watts: u32,
    headroom_ratio: Decimal,
}

impl PowerBudgetPolicy {
    pub fn new(processor_watts: u32, graphics_card_watts: u32, headroom_ratio: Decimal) -> Self {
        Self {
            processor_watts,
            graphics_card_watts,
            headroom_ratio,
        }
    }

    pub fn processor_watts(&self) -> u32 {
        self.processor_watts
    }

    pub fn graphics_card_watts(&self) -> u32 {
        self.graphics_card_watts
    }

    pub fn headroom_ratio(&self) -> Decimal {
        self.headroom_ratio
    }

    /// Estimated total draw in watts for the occupied slots
    ///
    /// Saturates at `u32::MAX` rather than overflowing.
    pub fn estimated_draw(&self, snapshot: &BuildSnapshot) -> u32 {
        let mut draw: u32 = 0;
        if snapshot.is_occupied(Slot::Processor) {
            draw = draw.saturating_add(self.processor_watts);
        }
        if snapshot.is_occupied(Slot::GraphicsCard) {
            draw = draw.saturating_add(self.graphics_card_watts);
        }
        draw
    }

    /// Whether `draw` exceeds the usable share of a PSU rated `rating` watts
    ///
    /// A non-positive rating means the rating is unknown, which never
    /// counts as exceeded.
    pub fn exceeds_headroom(&self, draw: u32, rating: Decimal) -> bool {
        rating > Decimal::ZERO && Decimal::from(draw) > rating * self.headroom_ratio
    }
}

impl Default for PowerBudgetPolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_PROCESSOR_WATTS,
            DEFAULT_GRAPHICS_CARD_WATTS,
            DEFAULT_HEADROOM_RATIO,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_configuration::domain::{BuildConfiguration, ComponentRecord};
    use std::sync::Arc;

    fn part(id: &str) -> Option<Arc<ComponentRecord>> {
        Some(Arc::new(ComponentRecord::new(id, id, dec!(1))))
    }

    #[test]
    fn test_estimated_draw_empty_build() {
        let policy = PowerBudgetPolicy::default();
        assert_eq!(policy.estimated_draw(&BuildConfiguration::new().snapshot()), 0);
    }

    #[test]
    fn test_estimated_draw_adds_constants() {
        let policy = PowerBudgetPolicy::default();
        let mut build = BuildConfiguration::new();

        build.set_slot(Slot::Processor, part("cpu"));
        assert_eq!(policy.estimated_draw(&build.snapshot()), 120);

        build.set_slot(Slot::GraphicsCard, part("gpu"));
        assert_eq!(policy.estimated_draw(&build.snapshot()), 370);

        build.clear_slot(Slot::Processor);
        assert_eq!(policy.estimated_draw(&build.snapshot()), 250);
    }

    #[test]
    fn test_estimated_draw_ignores_other_slots() {
        let policy = PowerBudgetPolicy::default();
        let mut build = BuildConfiguration::new();
        build.set_slot(Slot::Motherboard, part("mb"));
        build.set_slot(Slot::Storage, part("ssd"));
        build.set_slot(Slot::PowerSupply, part("psu"));
        assert_eq!(policy.estimated_draw(&build.snapshot()), 0);
    }

    #[test]
    fn test_exceeds_headroom() {
        let policy = PowerBudgetPolicy::default();
        assert!(policy.exceeds_headroom(370, dec!(400)));
        assert!(!policy.exceeds_headroom(370, dec!(600)));
        // 0.8 * 462.5 == 370 exactly, not exceeded
        assert!(!policy.exceeds_headroom(370, dec!(462.5)));
    }

    #[test]
    fn test_unknown_rating_never_exceeded() {
        let policy = PowerBudgetPolicy::default();
        assert!(!policy.exceeds_headroom(370, Decimal::ZERO));
        assert!(!policy.exceeds_headroom(370, dec!(-100)));
    }

    #[test]
    fn test_estimated_draw_saturates_on_huge_constants() {
        let policy = PowerBudgetPolicy::new(u32::MAX, 250, dec!(0.8));
        let mut build = BuildConfiguration::new();
        build.set_slot(Slot::Processor, part("cpu"));
        build.set_slot(Slot::GraphicsCard, part("gpu"));

        let draw = policy.estimated_draw(&build.snapshot());
        assert_eq!(draw, u32::MAX);
        assert!(policy.exceeds_headroom(draw, dec!(1000)));
    }

    #[test]
    fn test_custom_policy() {
        let policy = PowerBudgetPolicy::new(65, 320, dec!(0.9));
        let mut build = BuildConfiguration::new();
        build.set_slot(Slot::Processor, part("cpu"));
        build.set_slot(Slot::GraphicsCard, part("gpu"));

        assert_eq!(policy.estimated_draw(&build.snapshot()), 385);
        assert!(policy.exceeds_headroom(385, dec!(420)));
        assert!(!policy.exceeds_headroom(385, dec!(450)));
    }
}
