//! Errors for machine-level operations.
//!
//! Ordinary vending refusals are [`Outcome::Rejected`](super::Outcome)
//! values. Errors are reserved for programmer-error inputs.

use thiserror::Error;

/// Errors that can occur when restocking.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RestockError {
    /// The quantity must be greater than zero.
    #[error("Invalid restock quantity {0}. Must be greater than zero")]
    InvalidQuantity(i32),

    /// Stock cannot change during maintenance; finish maintenance first.
    #[error("Machine is under maintenance. Finish maintenance before restocking")]
    UnderMaintenance,
}
