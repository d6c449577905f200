//! Bookkeeping tracked alongside the machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata tracked by the machine across its lifetime.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MachineMetadata {
    /// When the machine was created
    pub created_at: DateTime<Utc>,

    /// Last operation time
    pub updated_at: DateTime<Utc>,

    /// Number of times each operation was attempted (operation name -> count),
    /// including rejected attempts
    pub operation_counts: HashMap<String, usize>,
}

impl Default for MachineMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            operation_counts: HashMap::new(),
        }
    }
}

impl MachineMetadata {
    /// Count one attempt of the named operation and bump the update time.
    pub(crate) fn note_operation(&mut self, name: &str) {
        *self.operation_counts.entry(name.to_string()).or_insert(0) += 1;
        self.updated_at = Utc::now();
    }

    /// How many times the named operation was attempted.
    pub fn count(&self, name: &str) -> usize {
        self.operation_counts.get(name).copied().unwrap_or(0)
    }
}
