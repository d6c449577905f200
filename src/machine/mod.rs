//! The vending machine domain.
//!
//! A coin-operated dispenser with stock tracking and a maintenance
//! mode, modeled as an explicit finite-state machine. The pure
//! transition logic lives in [`transition`]; [`VendingMachine`] is the
//! imperative shell that owns a snapshot, records history, and keeps
//! operation metadata.

mod error;
mod metadata;
mod outcome;
mod snapshot;
mod state;
mod transition;

pub use error::RestockError;
pub use metadata::MachineMetadata;
pub use outcome::{Outcome, RejectReason};
pub use snapshot::{InvariantViolation, MachineSnapshot};
pub use state::MachineState;
pub use transition::{restock, step, Op};

use crate::core::{StateHistory, StateTransition};
use chrono::Utc;

/// A coin-operated dispenser with stock tracking and maintenance mode.
///
/// Every operation applies the pure transition function to the current
/// snapshot and commits the result. Operations are synchronous and
/// atomic with respect to the machine's own state; for concurrent use,
/// wrap the whole machine in a single mutual-exclusion guard, since
/// `state`, `stock`, and `has_coin` always change together.
///
/// # Example
///
/// ```rust
/// use vendstate::machine::{MachineState, Outcome, RejectReason, VendingMachine};
///
/// let mut machine = VendingMachine::new(1);
/// assert_eq!(machine.state(), MachineState::NoCoin);
///
/// assert_eq!(machine.insert_coin(), Outcome::CoinAccepted);
/// assert_eq!(machine.press_dispense(), Outcome::Dispensed { remaining: 0 });
/// assert_eq!(machine.state(), MachineState::SoldOut);
///
/// // Sold out: coins are refused until someone restocks.
/// assert_eq!(
///     machine.insert_coin(),
///     Outcome::Rejected(RejectReason::SoldOut)
/// );
/// let outcome = machine.restock(5).unwrap();
/// assert_eq!(outcome, Outcome::Restocked { stock: 5 });
/// assert_eq!(machine.state(), MachineState::NoCoin);
/// ```
#[derive(Clone, Debug)]
pub struct VendingMachine {
    snapshot: MachineSnapshot,
    history: StateHistory<MachineState>,
    metadata: MachineMetadata,
}

impl VendingMachine {
    /// Create a machine with an initial stock.
    ///
    /// Starts in `SoldOut` when `stock` is zero, otherwise `NoCoin`.
    pub fn new(stock: u32) -> Self {
        Self {
            snapshot: MachineSnapshot::with_stock(stock),
            history: StateHistory::new(),
            metadata: MachineMetadata::default(),
        }
    }

    /// Rebuild a machine from checkpointed parts.
    pub(crate) fn from_parts(
        snapshot: MachineSnapshot,
        history: StateHistory<MachineState>,
        metadata: MachineMetadata,
    ) -> Self {
        Self {
            snapshot,
            history,
            metadata,
        }
    }

    /// Insert a coin.
    pub fn insert_coin(&mut self) -> Outcome {
        self.apply(Op::InsertCoin)
    }

    /// Ask for the held coin back.
    pub fn eject_coin(&mut self) -> Outcome {
        self.apply(Op::EjectCoin)
    }

    /// Press the dispense button.
    pub fn press_dispense(&mut self) -> Outcome {
        self.apply(Op::PressDispense)
    }

    /// Switch into maintenance mode from any state.
    ///
    /// A held coin is discarded with no refund.
    pub fn start_maintenance(&mut self) -> Outcome {
        self.apply(Op::StartMaintenance)
    }

    /// Leave maintenance mode and resume service.
    pub fn finish_maintenance(&mut self) -> Outcome {
        self.apply(Op::FinishMaintenance)
    }

    /// Add stock.
    ///
    /// # Errors
    ///
    /// [`RestockError::InvalidQuantity`] when `quantity <= 0`,
    /// [`RestockError::UnderMaintenance`] while in maintenance mode.
    /// Both leave the machine unchanged.
    pub fn restock(&mut self, quantity: i32) -> Result<Outcome, RestockError> {
        let (next, outcome) = transition::restock(self.snapshot, quantity)?;
        self.commit(next, "restock");
        Ok(outcome)
    }

    /// Current state (pure).
    pub fn state(&self) -> MachineState {
        self.snapshot.state
    }

    /// Units left to dispense (pure).
    pub fn stock(&self) -> u32 {
        self.snapshot.stock
    }

    /// Whether a coin is currently held (pure).
    pub fn has_coin(&self) -> bool {
        self.snapshot.has_coin
    }

    /// Current snapshot (pure).
    pub fn snapshot(&self) -> MachineSnapshot {
        self.snapshot
    }

    /// History of state changes (pure).
    pub fn history(&self) -> &StateHistory<MachineState> {
        &self.history
    }

    /// Operation metadata (pure).
    pub fn metadata(&self) -> &MachineMetadata {
        &self.metadata
    }

    fn apply(&mut self, op: Op) -> Outcome {
        let (next, outcome) = step(self.snapshot, op);
        self.commit(next, op.name());
        outcome
    }

    /// Record the change and swap in the next snapshot. Only actual
    /// state changes enter the history; every attempt is counted in
    /// the metadata.
    fn commit(&mut self, next: MachineSnapshot, trigger: &str) {
        if next.state != self.snapshot.state {
            self.history = self.history.record(StateTransition {
                from: self.snapshot.state,
                to: next.state,
                timestamp: Utc::now(),
                trigger: trigger.to_string(),
            });
        }
        self.snapshot = next;
        self.metadata.note_operation(trigger);
    }
}
