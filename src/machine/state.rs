//! The vending machine's operational states.

use crate::core::State;
use serde::{Deserialize, Serialize};
use std::fmt;

/// State of the coin-operated dispenser.
///
/// Exactly one state is active at a time. `SoldOut` and `NoCoin` are
/// mutually exclusive and are never chosen directly by a caller; they
/// are reached only through dispensing, restocking, or construction.
/// `Maintenance` is entered and exited only explicitly.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum MachineState {
    /// Ready for a coin; stock is available.
    NoCoin,
    /// A coin is held; pressing dispense will release a product.
    HasCoin,
    /// No stock left. A coin may still be stuck from an earlier insert.
    SoldOut,
    /// Service mode; every vending action is refused until finished.
    Maintenance,
}

impl State for MachineState {
    fn name(&self) -> &str {
        match self {
            Self::NoCoin => "NoCoin",
            Self::HasCoin => "HasCoin",
            Self::SoldOut => "SoldOut",
            Self::Maintenance => "Maintenance",
        }
    }

    fn is_operational(&self) -> bool {
        !matches!(self, Self::Maintenance)
    }
}

impl fmt::Display for MachineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
