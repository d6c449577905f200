//! The pure transition function.
//!
//! One total function keyed on `(state, operation)` replaces per-state
//! dispatch: it takes the machine's snapshot as a value and returns the
//! next snapshot plus an outcome. No side effects, no back-references.

use super::error::RestockError;
use super::outcome::{Outcome, RejectReason};
use super::snapshot::MachineSnapshot;
use super::state::MachineState;
use crate::core::State;
use serde::{Deserialize, Serialize};

/// A state-dispatched operation on the machine.
///
/// Restocking is deliberately not an `Op`: it is a machine-level
/// administrative action with its own guards, handled by [`restock`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Op {
    InsertCoin,
    EjectCoin,
    PressDispense,
    StartMaintenance,
    FinishMaintenance,
}

impl Op {
    /// Operation name, used as a history trigger and metadata key.
    pub fn name(&self) -> &'static str {
        match self {
            Self::InsertCoin => "insert_coin",
            Self::EjectCoin => "eject_coin",
            Self::PressDispense => "press_dispense",
            Self::StartMaintenance => "start_maintenance",
            Self::FinishMaintenance => "finish_maintenance",
        }
    }
}

/// Apply one operation to a snapshot.
///
/// Pure and total: every `(state, operation)` pair yields a next
/// snapshot and an outcome. Rejected operations return the snapshot
/// unchanged (except a stuck coin being returned during sold-out,
/// which clears `has_coin` while the state stays `SoldOut`).
///
/// # Example
///
/// ```rust
/// use vendstate::machine::{step, MachineSnapshot, MachineState, Op, Outcome};
///
/// let snapshot = MachineSnapshot::with_stock(1);
/// let (snapshot, outcome) = step(snapshot, Op::InsertCoin);
/// assert_eq!(outcome, Outcome::CoinAccepted);
///
/// let (snapshot, outcome) = step(snapshot, Op::PressDispense);
/// assert_eq!(outcome, Outcome::Dispensed { remaining: 0 });
/// assert_eq!(snapshot.state, MachineState::SoldOut);
/// ```
pub fn step(snapshot: MachineSnapshot, op: Op) -> (MachineSnapshot, Outcome) {
    let mut next = snapshot;
    let outcome = match (snapshot.state, op) {
        // Maintenance refuses every vending action.
        (
            MachineState::Maintenance,
            Op::InsertCoin | Op::EjectCoin | Op::PressDispense,
        ) => Outcome::Rejected(RejectReason::UnderMaintenance),

        (MachineState::NoCoin, Op::InsertCoin) => {
            next.state = MachineState::HasCoin;
            next.has_coin = true;
            Outcome::CoinAccepted
        }
        (MachineState::HasCoin, Op::InsertCoin) => {
            Outcome::Rejected(RejectReason::CoinAlreadyInserted)
        }
        (MachineState::SoldOut, Op::InsertCoin) => Outcome::Rejected(RejectReason::SoldOut),

        (MachineState::NoCoin, Op::EjectCoin) => Outcome::Rejected(RejectReason::NoCoinToReturn),
        (MachineState::HasCoin, Op::EjectCoin) => {
            next.state = MachineState::NoCoin;
            next.has_coin = false;
            Outcome::CoinReturned
        }
        (MachineState::SoldOut, Op::EjectCoin) if snapshot.has_coin => {
            next.has_coin = false;
            Outcome::CoinReturned
        }
        (MachineState::SoldOut, Op::EjectCoin) => Outcome::Rejected(RejectReason::NoCoinToReturn),

        (MachineState::NoCoin, Op::PressDispense) => Outcome::Rejected(RejectReason::CoinRequired),
        (MachineState::HasCoin, Op::PressDispense) => {
            // The coin is consumed regardless of the stock guard's
            // outcome; no refund-on-failure policy exists.
            if next.stock > 0 {
                next.stock -= 1;
            }
            next.has_coin = false;
            next.state = if next.stock > 0 {
                MachineState::NoCoin
            } else {
                MachineState::SoldOut
            };
            Outcome::Dispensed {
                remaining: next.stock,
            }
        }
        (MachineState::SoldOut, Op::PressDispense) if snapshot.has_coin => {
            next.has_coin = false;
            Outcome::SoldOutCoinReturned
        }
        (MachineState::SoldOut, Op::PressDispense) => Outcome::Rejected(RejectReason::SoldOut),

        // Unconditional override from any state. A held coin is
        // discarded with no refund.
        (_, Op::StartMaintenance) => {
            next.state = MachineState::Maintenance;
            next.has_coin = false;
            Outcome::MaintenanceStarted
        }

        (MachineState::Maintenance, Op::FinishMaintenance) => {
            next.state = if next.stock > 0 {
                MachineState::NoCoin
            } else {
                MachineState::SoldOut
            };
            Outcome::MaintenanceFinished
        }
        (_, Op::FinishMaintenance) => Outcome::Rejected(RejectReason::NotUnderMaintenance),
    };
    (next, outcome)
}

/// Add stock to the machine.
///
/// Fails with [`RestockError::InvalidQuantity`] for non-positive
/// quantities and [`RestockError::UnderMaintenance`] while the machine
/// is in maintenance mode; both leave the snapshot untouched. On
/// success the stock grows and a sold-out machine returns to service.
pub fn restock(
    snapshot: MachineSnapshot,
    quantity: i32,
) -> Result<(MachineSnapshot, Outcome), RestockError> {
    if quantity <= 0 {
        return Err(RestockError::InvalidQuantity(quantity));
    }
    if !snapshot.state.is_operational() {
        return Err(RestockError::UnderMaintenance);
    }

    let mut next = snapshot;
    next.stock = next.stock.saturating_add(quantity as u32);
    if next.state == MachineState::SoldOut {
        next.state = MachineState::NoCoin;
    }
    Ok((next, Outcome::Restocked { stock: next.stock }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(state: MachineState, stock: u32, has_coin: bool) -> MachineSnapshot {
        MachineSnapshot {
            state,
            stock,
            has_coin,
        }
    }

    #[test]
    fn insert_coin_from_no_coin_is_accepted() {
        let (next, outcome) = step(MachineSnapshot::with_stock(3), Op::InsertCoin);
        assert_eq!(outcome, Outcome::CoinAccepted);
        assert_eq!(next.state, MachineState::HasCoin);
        assert!(next.has_coin);
    }

    #[test]
    fn second_insert_is_rejected_without_change() {
        let held = snapshot(MachineState::HasCoin, 3, true);
        let (next, outcome) = step(held, Op::InsertCoin);
        assert_eq!(
            outcome,
            Outcome::Rejected(RejectReason::CoinAlreadyInserted)
        );
        assert_eq!(next, held);
    }

    #[test]
    fn insert_while_sold_out_is_rejected() {
        let empty = MachineSnapshot::with_stock(0);
        let (next, outcome) = step(empty, Op::InsertCoin);
        assert_eq!(outcome, Outcome::Rejected(RejectReason::SoldOut));
        assert_eq!(next, empty);
    }

    #[test]
    fn eject_without_coin_reports_nothing_to_return() {
        let idle = MachineSnapshot::with_stock(2);
        let (next, outcome) = step(idle, Op::EjectCoin);
        assert_eq!(outcome, Outcome::Rejected(RejectReason::NoCoinToReturn));
        assert_eq!(next, idle);
    }

    #[test]
    fn eject_returns_held_coin() {
        let held = snapshot(MachineState::HasCoin, 2, true);
        let (next, outcome) = step(held, Op::EjectCoin);
        assert_eq!(outcome, Outcome::CoinReturned);
        assert_eq!(next.state, MachineState::NoCoin);
        assert!(!next.has_coin);
    }

    #[test]
    fn eject_frees_coin_stuck_during_sold_out() {
        let stuck = snapshot(MachineState::SoldOut, 0, true);
        let (next, outcome) = step(stuck, Op::EjectCoin);
        assert_eq!(outcome, Outcome::CoinReturned);
        assert_eq!(next.state, MachineState::SoldOut);
        assert!(!next.has_coin);
    }

    #[test]
    fn dispense_without_coin_is_rejected() {
        let idle = MachineSnapshot::with_stock(2);
        let (next, outcome) = step(idle, Op::PressDispense);
        assert_eq!(outcome, Outcome::Rejected(RejectReason::CoinRequired));
        assert_eq!(next, idle);
    }

    #[test]
    fn dispense_last_unit_goes_sold_out() {
        let held = snapshot(MachineState::HasCoin, 1, true);
        let (next, outcome) = step(held, Op::PressDispense);
        assert_eq!(outcome, Outcome::Dispensed { remaining: 0 });
        assert_eq!(next.state, MachineState::SoldOut);
        assert_eq!(next.stock, 0);
        assert!(!next.has_coin);
    }

    #[test]
    fn dispense_with_stock_left_returns_to_no_coin() {
        let held = snapshot(MachineState::HasCoin, 3, true);
        let (next, outcome) = step(held, Op::PressDispense);
        assert_eq!(outcome, Outcome::Dispensed { remaining: 2 });
        assert_eq!(next.state, MachineState::NoCoin);
        assert!(!next.has_coin);
    }

    #[test]
    fn dispense_while_sold_out_returns_stuck_coin() {
        let stuck = snapshot(MachineState::SoldOut, 0, true);
        let (next, outcome) = step(stuck, Op::PressDispense);
        assert_eq!(outcome, Outcome::SoldOutCoinReturned);
        assert_eq!(next.state, MachineState::SoldOut);
        assert!(!next.has_coin);
    }

    #[test]
    fn dispense_while_sold_out_without_coin_is_rejected() {
        let empty = MachineSnapshot::with_stock(0);
        let (next, outcome) = step(empty, Op::PressDispense);
        assert_eq!(outcome, Outcome::Rejected(RejectReason::SoldOut));
        assert_eq!(next, empty);
    }

    #[test]
    fn maintenance_refuses_vending_actions() {
        let servicing = snapshot(MachineState::Maintenance, 2, false);
        for op in [Op::InsertCoin, Op::EjectCoin, Op::PressDispense] {
            let (next, outcome) = step(servicing, op);
            assert_eq!(outcome, Outcome::Rejected(RejectReason::UnderMaintenance));
            assert_eq!(next, servicing);
        }
    }

    #[test]
    fn start_maintenance_overrides_any_state_and_discards_coin() {
        let held = snapshot(MachineState::HasCoin, 2, true);
        let (next, outcome) = step(held, Op::StartMaintenance);
        assert_eq!(outcome, Outcome::MaintenanceStarted);
        assert_eq!(next.state, MachineState::Maintenance);
        assert!(!next.has_coin);
        assert_eq!(next.stock, 2);
    }

    #[test]
    fn finish_maintenance_resumes_by_stock_level() {
        let stocked = snapshot(MachineState::Maintenance, 2, false);
        let (next, outcome) = step(stocked, Op::FinishMaintenance);
        assert_eq!(outcome, Outcome::MaintenanceFinished);
        assert_eq!(next.state, MachineState::NoCoin);

        let empty = snapshot(MachineState::Maintenance, 0, false);
        let (next, _) = step(empty, Op::FinishMaintenance);
        assert_eq!(next.state, MachineState::SoldOut);
    }

    #[test]
    fn finish_maintenance_outside_maintenance_is_rejected() {
        let idle = MachineSnapshot::with_stock(1);
        let (next, outcome) = step(idle, Op::FinishMaintenance);
        assert_eq!(
            outcome,
            Outcome::Rejected(RejectReason::NotUnderMaintenance)
        );
        assert_eq!(next, idle);
    }

    #[test]
    fn restock_rejects_non_positive_quantities() {
        let idle = MachineSnapshot::with_stock(2);
        assert_eq!(
            restock(idle, 0),
            Err(RestockError::InvalidQuantity(0))
        );
        assert_eq!(
            restock(idle, -1),
            Err(RestockError::InvalidQuantity(-1))
        );
    }

    #[test]
    fn restock_rejected_during_maintenance() {
        let servicing = snapshot(MachineState::Maintenance, 0, false);
        assert_eq!(restock(servicing, 5), Err(RestockError::UnderMaintenance));
    }

    #[test]
    fn restock_revives_sold_out_machine() {
        let empty = MachineSnapshot::with_stock(0);
        let (next, outcome) = restock(empty, 5).unwrap();
        assert_eq!(outcome, Outcome::Restocked { stock: 5 });
        assert_eq!(next.state, MachineState::NoCoin);
        assert_eq!(next.stock, 5);
    }

    #[test]
    fn restock_adds_to_existing_stock() {
        let idle = MachineSnapshot::with_stock(2);
        let (next, outcome) = restock(idle, 3).unwrap();
        assert_eq!(outcome, Outcome::Restocked { stock: 5 });
        assert_eq!(next.state, MachineState::NoCoin);
    }

    #[test]
    fn every_step_preserves_invariants() {
        let starts = [
            MachineSnapshot::with_stock(0),
            MachineSnapshot::with_stock(1),
            snapshot(MachineState::HasCoin, 2, true),
            snapshot(MachineState::SoldOut, 0, true),
            snapshot(MachineState::Maintenance, 3, false),
        ];
        let ops = [
            Op::InsertCoin,
            Op::EjectCoin,
            Op::PressDispense,
            Op::StartMaintenance,
            Op::FinishMaintenance,
        ];
        for start in starts {
            for op in ops {
                let (next, _) = step(start, op);
                assert!(
                    next.check_invariants().is_ok(),
                    "invariants broken by {op:?} from {start:?}"
                );
            }
        }
    }
}
