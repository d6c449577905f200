//! Core State trait for state machine states.
//!
//! All state machine states must implement this trait, which provides
//! pure methods for inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure - no side effects. States represent immutable
/// values that describe the current position in a state machine.
///
/// # Required Traits
///
/// - `Clone`: States must be cloneable for history tracking
/// - `PartialEq`: States must be comparable for transition logic
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States must be serializable for checkpoints
///
/// # Example
///
/// ```rust
/// use vendstate::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum TurnstileState {
///     Locked,
///     Unlocked,
///     OutOfService,
/// }
///
/// impl State for TurnstileState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Locked => "Locked",
///             Self::Unlocked => "Unlocked",
///             Self::OutOfService => "OutOfService",
///         }
///     }
///
///     fn is_operational(&self) -> bool {
///         !matches!(self, Self::OutOfService)
///     }
/// }
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    ///
    /// Returns a static string reference for zero-cost naming.
    fn name(&self) -> &str;

    /// Check if this state is part of normal service.
    ///
    /// Non-operational states (service modes, lockouts) refuse
    /// administrative changes such as restocking until exited.
    ///
    /// Default implementation returns `true`.
    fn is_operational(&self) -> bool {
        true
    }
}
