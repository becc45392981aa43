//! Live Buffer - rolling window of recent observations
//!
//! Holds the last `capacity` snapshots and their assessments, oldest first.
//! Interior locking lets one buffer be shared by reference between the
//! producer tick and readers.

use std::collections::VecDeque;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::logic::risk::RiskAssessment;
use crate::logic::vitals::VitalSnapshot;

// ============================================================================
// ENTRY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorEntry {
    pub snapshot: VitalSnapshot,
    pub assessment: RiskAssessment,
}

// ============================================================================
// BUFFER
// ============================================================================

#[derive(Debug)]
pub struct LiveBuffer {
    capacity: usize,
    entries: RwLock<VecDeque<MonitorEntry>>,
}

impl LiveBuffer {
    /// Capacity is floored at 1
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: RwLock::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Append, dropping the oldest entries beyond capacity
    pub fn push(&self, entry: MonitorEntry) {
        let mut entries = self.entries.write();
        entries.push_back(entry);

        while entries.len() > self.capacity {
            entries.pop_front();
        }
    }

    pub fn latest(&self) -> Option<MonitorEntry> {
        self.entries.read().back().cloned()
    }

    /// Copy of the window, oldest first
    pub fn entries(&self) -> Vec<MonitorEntry> {
        self.entries.read().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn status(&self) -> BufferStatus {
        let current_size = self.len();
        BufferStatus {
            current_size,
            capacity: self.capacity,
            is_full: current_size >= self.capacity,
            fill_percent: (current_size as f32 / self.capacity as f32 * 100.0).min(100.0),
        }
    }
}

/// Buffer status information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BufferStatus {
    pub current_size: usize,
    pub capacity: usize,
    pub is_full: bool,
    pub fill_percent: f32,
}
