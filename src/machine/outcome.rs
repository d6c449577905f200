//! Operation outcomes and their human-readable rendering.
//!
//! The core returns outcome values; rendering them is a presentation
//! concern for the caller. `Display` provides the conventional status
//! strings so drivers can simply print what happened.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of applying one operation to the machine.
///
/// Rejected operations are ordinary values, not errors: the machine
/// refused to act, said why, and its state is unchanged.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Outcome {
    /// Coin accepted; the machine now holds it.
    CoinAccepted,
    /// Held coin returned to the caller.
    CoinReturned,
    /// Product released; `remaining` units are left.
    Dispensed { remaining: u32 },
    /// Dispense pressed while sold out with a stuck coin; the coin was
    /// returned but nothing was released.
    SoldOutCoinReturned,
    /// Machine switched into maintenance mode.
    MaintenanceStarted,
    /// Maintenance finished; machine is back in service.
    MaintenanceFinished,
    /// Stock increased to `stock` units.
    Restocked { stock: u32 },
    /// Operation refused; nothing changed.
    Rejected(RejectReason),
}

/// Why an operation was refused.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum RejectReason {
    /// A coin is already held; it must be spent or ejected first.
    CoinAlreadyInserted,
    /// No stock to sell.
    SoldOut,
    /// Machine is in maintenance mode.
    UnderMaintenance,
    /// Eject pressed with no coin held.
    NoCoinToReturn,
    /// Dispense pressed with no coin held.
    CoinRequired,
    /// Finish-maintenance pressed outside maintenance mode.
    NotUnderMaintenance,
}

impl Outcome {
    /// Whether the machine refused to act.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// The rejection reason, if the operation was refused.
    pub fn reject_reason(&self) -> Option<RejectReason> {
        match self {
            Self::Rejected(reason) => Some(*reason),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoinAccepted => write!(f, "Coin inserted."),
            Self::CoinReturned => write!(f, "Coin has been returned."),
            Self::Dispensed { remaining } => {
                write!(f, "Product released. Products left: {remaining}.")
            }
            Self::SoldOutCoinReturned => {
                write!(f, "Sold out. Cannot release product. Coin returned.")
            }
            Self::MaintenanceStarted => write!(f, "Machine is now in maintenance mode."),
            Self::MaintenanceFinished => {
                write!(f, "Maintenance completed. Machine is back in service.")
            }
            Self::Restocked { stock } => write!(f, "Restocked. Products left: {stock}."),
            Self::Rejected(reason) => write!(f, "{reason}"),
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoinAlreadyInserted => {
                write!(f, "Coin already inserted. You cannot insert more.")
            }
            Self::SoldOut => write!(f, "Sold out."),
            Self::UnderMaintenance => write!(f, "Machine is under maintenance."),
            Self::NoCoinToReturn => write!(f, "No coin to return."),
            Self::CoinRequired => write!(f, "Insert coin before buying."),
            Self::NotUnderMaintenance => write!(f, "Machine is not under maintenance."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_outcomes_expose_their_reason() {
        let outcome = Outcome::Rejected(RejectReason::SoldOut);
        assert!(outcome.is_rejected());
        assert_eq!(outcome.reject_reason(), Some(RejectReason::SoldOut));
    }

    #[test]
    fn accepted_outcomes_have_no_reason() {
        let outcome = Outcome::CoinAccepted;
        assert!(!outcome.is_rejected());
        assert_eq!(outcome.reject_reason(), None);
    }

    #[test]
    fn outcomes_render_status_strings() {
        assert_eq!(Outcome::CoinAccepted.to_string(), "Coin inserted.");
        assert_eq!(
            Outcome::Dispensed { remaining: 2 }.to_string(),
            "Product released. Products left: 2."
        );
        assert_eq!(
            Outcome::Rejected(RejectReason::CoinRequired).to_string(),
            "Insert coin before buying."
        );
        assert_eq!(
            Outcome::Rejected(RejectReason::UnderMaintenance).to_string(),
            "Machine is under maintenance."
        );
    }
}
