//! Memory information types

use serde::{Deserialize, Serialize};

const BYTES_PER_GIB: f64 = (1u64 << 30) as f64;

/// Total physical memory as read from the host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemorySnapshot {
    /// Total physical memory in bytes (0 if unavailable)
    pub total_memory: u64,
}

impl MemorySnapshot {
    /// Total memory in GiB
    pub fn total_gib(&self) -> f64 {
        self.total_memory as f64 / BYTES_PER_GIB
    }

    /// Whether total memory could not be determined
    pub fn is_degraded(&self) -> bool {
        self.total_memory == 0
    }
}
