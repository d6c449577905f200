//! Core state machine types and logic.
//!
//! This module contains the pure functional core of the state machine:
//! - State definitions via the `State` trait
//! - Immutable history tracking
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy. Nothing in here knows
//! about coins or stock; the vending domain lives in [`crate::machine`].

mod history;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::State;
