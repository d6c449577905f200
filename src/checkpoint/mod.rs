//! Checkpoint and resume functionality for vending machines.
//!
//! This module provides serialization and deserialization capabilities for
//! machines, so a dispenser's state, history, and metadata survive process
//! restarts. Checkpoints are validated before a machine is rebuilt from
//! them: the format version must match and the snapshot must satisfy the
//! machine's structural invariants.

use crate::core::StateHistory;
use crate::machine::{MachineMetadata, MachineSnapshot, MachineState, VendingMachine};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable checkpoint of a vending machine.
///
/// # Example
///
/// ```rust
/// use vendstate::checkpoint::Checkpoint;
/// use vendstate::machine::{MachineState, VendingMachine};
///
/// let mut machine = VendingMachine::new(2);
/// machine.insert_coin();
/// machine.press_dispense();
///
/// let checkpoint = Checkpoint::capture(&machine);
/// let json = checkpoint.to_json().unwrap();
///
/// let restored = Checkpoint::from_json(&json).unwrap().restore().unwrap();
/// assert_eq!(restored.state(), MachineState::NoCoin);
/// assert_eq!(restored.stock(), 1);
/// assert_eq!(restored.history().transitions().len(), 2);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Machine state, stock, and held-coin flag at capture time
    pub snapshot: MachineSnapshot,

    /// Complete state-change history
    pub history: StateHistory<MachineState>,

    /// Machine metadata
    pub metadata: MachineMetadata,
}

impl Checkpoint {
    /// Capture the machine's current state into a checkpoint.
    pub fn capture(machine: &VendingMachine) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            snapshot: machine.snapshot(),
            history: machine.history().clone(),
            metadata: machine.metadata().clone(),
        }
    }

    /// Validate the checkpoint before restoring from it.
    ///
    /// # Errors
    ///
    /// [`CheckpointError::UnsupportedVersion`] when the format version
    /// differs, [`CheckpointError::ValidationFailed`] when the snapshot
    /// breaks a machine invariant.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        self.snapshot.check_invariants()?;
        Ok(())
    }

    /// Rebuild a machine from this checkpoint.
    ///
    /// Validates first; a corrupt or foreign-versioned checkpoint never
    /// produces a machine.
    pub fn restore(&self) -> Result<VendingMachine, CheckpointError> {
        self.validate()?;
        Ok(VendingMachine::from_parts(
            self.snapshot,
            self.history.clone(),
            self.metadata.clone(),
        ))
    }

    /// Serialize to a human-readable JSON string.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    /// Serialize to a compact binary format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from the binary format.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }
}
