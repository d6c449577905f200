//! State transition history tracking.
//!
//! Provides immutable tracking of state machine transitions over time,
//! following functional programming principles.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state transition.
///
/// Transitions are immutable values representing a move from one state
/// to another at a specific point in time, triggered by a named operation.
///
/// # Example
///
/// ```rust
/// use vendstate::core::StateTransition;
/// use vendstate::machine::MachineState;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: MachineState::NoCoin,
///     to: MachineState::HasCoin,
///     timestamp: Utc::now(),
///     trigger: "insert_coin".to_string(),
/// };
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// Name of the operation that caused the transition
    pub trigger: String,
}

/// Ordered history of state transitions.
///
/// History is immutable - the `record` method returns a new history
/// with the transition added, following functional programming principles.
///
/// # Example
///
/// ```rust
/// use vendstate::core::{StateHistory, StateTransition};
/// use vendstate::machine::MachineState;
/// use chrono::Utc;
///
/// let history = StateHistory::new();
///
/// let history = history.record(StateTransition {
///     from: MachineState::NoCoin,
///     to: MachineState::HasCoin,
///     timestamp: Utc::now(),
///     trigger: "insert_coin".to_string(),
/// });
///
/// let history = history.record(StateTransition {
///     from: MachineState::HasCoin,
///     to: MachineState::NoCoin,
///     timestamp: Utc::now(),
///     trigger: "press_dispense".to_string(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // NoCoin -> HasCoin -> NoCoin
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the transition added.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vendstate::core::{StateHistory, StateTransition};
    /// use vendstate::machine::MachineState;
    /// use chrono::Utc;
    ///
    /// let history = StateHistory::new();
    /// let new_history = history.record(StateTransition {
    ///     from: MachineState::NoCoin,
    ///     to: MachineState::Maintenance,
    ///     timestamp: Utc::now(),
    ///     trigger: "start_maintenance".to_string(),
    /// });
    ///
    /// assert_eq!(new_history.transitions().len(), 1);
    /// assert_eq!(history.transitions().len(), 0); // Original unchanged
    /// ```
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: initial state, then
    /// the `to` state of each transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions. Otherwise returns
    /// the duration between the first and last transition timestamps.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions.
    ///
    /// Returns a slice of all recorded transitions in order.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}
