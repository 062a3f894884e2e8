use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Functional position in a build that holds at most one component
///
/// The set is closed: a build always has exactly these six slots,
/// in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Slot {
    Motherboard,
    Processor,
    GraphicsCard,
    Memory,
    Storage,
    PowerSupply,
}

impl Slot {
    /// All slots in their fixed order
    pub const ALL: [Slot; 6] = [
        Slot::Motherboard,
        Slot::Processor,
        Slot::GraphicsCard,
        Slot::Memory,
        Slot::Storage,
        Slot::PowerSupply,
    ];

    /// Number of slots in a build
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this slot within [`Slot::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Canonical camelCase name, also the default catalog category label
    pub fn as_str(self) -> &'static str {
        match self {
            Slot::Motherboard => "motherboard",
            Slot::Processor => "processor",
            Slot::GraphicsCard => "graphicsCard",
            Slot::Memory => "memory",
            Slot::Storage => "storage",
            Slot::PowerSupply => "powerSupply",
        }
    }

    /// Human readable label for reports
    pub fn display_name(self) -> &'static str {
        match self {
            Slot::Motherboard => "Motherboard",
            Slot::Processor => "Processor",
            Slot::GraphicsCard => "Graphics card",
            Slot::Memory => "Memory",
            Slot::Storage => "Storage",
            Slot::PowerSupply => "Power supply",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Slot {
    type Err = String;

    /// Accepts the canonical name as well as snake_case and kebab-case spellings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-' && !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "motherboard" | "mb" => Ok(Slot::Motherboard),
            "processor" | "cpu" => Ok(Slot::Processor),
            "graphicscard" | "gpu" => Ok(Slot::GraphicsCard),
            "memory" | "ram" => Ok(Slot::Memory),
            "storage" => Ok(Slot::Storage),
            "powersupply" | "psu" => Ok(Slot::PowerSupply),
            _ => Err(format!(
                "Invalid slot: {}. Expected one of: {}",
                s,
                Slot::ALL.map(Slot::as_str).join(", ")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_order_matches_index() {
        for (i, slot) in Slot::ALL.iter().enumerate() {
            assert_eq!(slot.index(), i);
        }
        assert_eq!(Slot::COUNT, 6);
    }

    #[test]
    fn test_slot_from_str_canonical() {
        assert_eq!(Slot::from_str("graphicsCard").unwrap(), Slot::GraphicsCard);
        assert_eq!(Slot::from_str("powerSupply").unwrap(), Slot::PowerSupply);
    }

    #[test]
    fn test_slot_from_str_alternate_spellings() {
        assert_eq!(Slot::from_str("graphics_card").unwrap(), Slot::GraphicsCard);
        assert_eq!(Slot::from_str("power-supply").unwrap(), Slot::PowerSupply);
        assert_eq!(Slot::from_str("CPU").unwrap(), Slot::Processor);
    }

    #[test]
    fn test_slot_from_str_invalid() {
        let err = Slot::from_str("monitor").unwrap_err();
        assert!(err.contains("Invalid slot"));
        assert!(err.contains("motherboard"));
    }

    #[test]
    fn test_slot_display_round_trips() {
        for slot in Slot::ALL {
            assert_eq!(Slot::from_str(&slot.to_string()).unwrap(), slot);
        }
    }

    #[test]
    fn test_slot_serde_uses_camel_case() {
        let json = serde_json::to_string(&Slot::GraphicsCard).unwrap();
        assert_eq!(json, "\"graphicsCard\"");
    }
}
