//! CPU information types

use serde::{Deserialize, Serialize};

use super::ModelName;

/// CPU identity and topology as read from the host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuSnapshot {
    /// CPU brand/model name (empty if unavailable)
    pub model: ModelName,
    /// Number of physical CPU cores (0 if unavailable)
    pub core_count: u32,
    /// Number of logical CPUs, including SMT siblings (0 if unavailable)
    pub thread_count: u32,
}

impl CpuSnapshot {
    /// Whether logical threads cover physical cores
    ///
    /// Expected on symmetric hardware but not enforced. Only `false` when both
    /// counts are known and threads < cores.
    pub fn topology_consistent(&self) -> bool {
        self.core_count == 0 || self.thread_count == 0 || self.thread_count >= self.core_count
    }

    /// Whether any field could not be determined
    pub fn is_degraded(&self) -> bool {
        self.model.is_empty() || self.core_count == 0 || self.thread_count == 0
    }
}
