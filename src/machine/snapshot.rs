//! The machine's data as one plain value.
//!
//! Transitions read and write `state`, `stock`, and `has_coin` together
//! as one unit; no partial update is ever valid. Modeling the whole
//! machine as a single copyable snapshot makes the transition function
//! a pure function from snapshot to snapshot.

use super::state::MachineState;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Complete observable state of a vending machine at one instant.
///
/// # Example
///
/// ```rust
/// use vendstate::machine::{MachineSnapshot, MachineState};
///
/// let fresh = MachineSnapshot::with_stock(3);
/// assert_eq!(fresh.state, MachineState::NoCoin);
///
/// let empty = MachineSnapshot::with_stock(0);
/// assert_eq!(empty.state, MachineState::SoldOut);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MachineSnapshot {
    /// The active state.
    pub state: MachineState,
    /// Number of dispensable units remaining.
    pub stock: u32,
    /// Whether a coin is currently held by the machine.
    pub has_coin: bool,
}

/// A snapshot that contradicts the machine's structural invariants.
///
/// Snapshots produced by the transition function always satisfy the
/// invariants; violations can only arrive from outside, e.g. a
/// hand-edited checkpoint.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("coin held in state '{state}', which cannot hold a coin")]
    CoinHeld { state: String },

    #[error("machine is sold out but stock is {stock}")]
    SoldOutWithStock { stock: u32 },

    #[error("coin accepted with no stock to dispense")]
    CoinWithoutStock,
}

impl MachineSnapshot {
    /// Snapshot of a freshly constructed machine.
    ///
    /// Starts in `SoldOut` when `stock` is zero, otherwise `NoCoin`.
    /// No coin is held.
    pub fn with_stock(stock: u32) -> Self {
        let state = if stock > 0 {
            MachineState::NoCoin
        } else {
            MachineState::SoldOut
        };
        Self {
            state,
            stock,
            has_coin: false,
        }
    }

    /// Check the structural invariants.
    ///
    /// - a coin is held only in `HasCoin` or `SoldOut` (a coin may be
    ///   stuck during sold-out after an insert race),
    /// - `SoldOut` implies zero stock,
    /// - `HasCoin` implies positive stock.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if self.has_coin
            && !matches!(self.state, MachineState::HasCoin | MachineState::SoldOut)
        {
            return Err(InvariantViolation::CoinHeld {
                state: self.state.to_string(),
            });
        }
        if self.state == MachineState::SoldOut && self.stock > 0 {
            return Err(InvariantViolation::SoldOutWithStock { stock: self.stock });
        }
        if self.state == MachineState::HasCoin && self.stock == 0 {
            return Err(InvariantViolation::CoinWithoutStock);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_with_stock_starts_no_coin() {
        let snapshot = MachineSnapshot::with_stock(5);
        assert_eq!(snapshot.state, MachineState::NoCoin);
        assert_eq!(snapshot.stock, 5);
        assert!(!snapshot.has_coin);
    }

    #[test]
    fn construction_without_stock_starts_sold_out() {
        let snapshot = MachineSnapshot::with_stock(0);
        assert_eq!(snapshot.state, MachineState::SoldOut);
        assert_eq!(snapshot.stock, 0);
        assert!(!snapshot.has_coin);
    }

    #[test]
    fn fresh_snapshots_satisfy_invariants() {
        assert!(MachineSnapshot::with_stock(0).check_invariants().is_ok());
        assert!(MachineSnapshot::with_stock(3).check_invariants().is_ok());
    }

    #[test]
    fn coin_in_no_coin_state_violates_invariants() {
        let snapshot = MachineSnapshot {
            state: MachineState::NoCoin,
            stock: 2,
            has_coin: true,
        };
        assert_eq!(
            snapshot.check_invariants(),
            Err(InvariantViolation::CoinHeld {
                state: "NoCoin".to_string()
            })
        );
    }

    #[test]
    fn stuck_coin_during_sold_out_is_allowed() {
        let snapshot = MachineSnapshot {
            state: MachineState::SoldOut,
            stock: 0,
            has_coin: true,
        };
        assert!(snapshot.check_invariants().is_ok());
    }

    #[test]
    fn sold_out_with_stock_violates_invariants() {
        let snapshot = MachineSnapshot {
            state: MachineState::SoldOut,
            stock: 1,
            has_coin: false,
        };
        assert_eq!(
            snapshot.check_invariants(),
            Err(InvariantViolation::SoldOutWithStock { stock: 1 })
        );
    }

    #[test]
    fn coin_without_stock_violates_invariants() {
        let snapshot = MachineSnapshot {
            state: MachineState::HasCoin,
            stock: 0,
            has_coin: true,
        };
        assert_eq!(
            snapshot.check_invariants(),
            Err(InvariantViolation::CoinWithoutStock)
        );
    }
}
