pub mod power_budget;

pub use power_budget::{
    PowerBudgetPolicy, DEFAULT_GRAPHICS_CARD_WATTS, DEFAULT_HEADROOM_RATIO,
    DEFAULT_PROCESSOR_WATTS, MAX_COMPONENT_WATTS,
};
