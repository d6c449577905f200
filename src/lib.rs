//! Vendstate: a pure functional vending machine state machine
//!
//! Vendstate models a coin-operated dispenser as an explicit finite-state
//! machine built on a "pure core, imperative shell" design. The transition
//! logic is a single pure function over a plain snapshot value; the
//! [`machine::VendingMachine`] shell owns the snapshot, records history,
//! and tracks metadata. Checkpoints make the whole machine serializable.
//!
//! # Core Concepts
//!
//! - **State**: one of `NoCoin`, `HasCoin`, `SoldOut`, `Maintenance`
//! - **Transition**: the pure `(snapshot, operation) -> (snapshot, outcome)`
//!   mapping in [`machine::step`]
//! - **Rejected operation**: a refusal reported as an [`machine::Outcome`]
//!   value, distinct from an error
//! - **History**: immutable tracking of state changes over time
//! - **Checkpoint**: serializable capture of snapshot + history + metadata
//!
//! # Example
//!
//! ```rust
//! use vendstate::machine::{MachineState, Outcome, RejectReason, VendingMachine};
//!
//! let mut machine = VendingMachine::new(3);
//!
//! assert_eq!(machine.insert_coin(), Outcome::CoinAccepted);
//! assert_eq!(machine.press_dispense(), Outcome::Dispensed { remaining: 2 });
//!
//! // No coin held: dispensing is refused, not an error.
//! assert_eq!(
//!     machine.press_dispense(),
//!     Outcome::Rejected(RejectReason::CoinRequired)
//! );
//!
//! machine.start_maintenance();
//! assert_eq!(machine.state(), MachineState::Maintenance);
//! assert!(machine.restock(5).is_err()); // finish maintenance first
//! machine.finish_maintenance();
//! assert_eq!(machine.restock(5).unwrap(), Outcome::Restocked { stock: 7 });
//! ```

pub mod checkpoint;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use checkpoint::{Checkpoint, CheckpointError};
pub use core::{State, StateHistory, StateTransition};
pub use machine::{
    MachineState, Outcome, RejectReason, RestockError, VendingMachine,
};
