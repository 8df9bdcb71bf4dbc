//! Memory information collection

use crate::probe::{HostProbe, SysinfoProbe};
use crate::types::MemorySnapshot;

use super::or_default;

/// Build a memory snapshot from a probe
pub fn memory_snapshot(probe: &dyn HostProbe) -> MemorySnapshot {
    MemorySnapshot {
        total_memory: or_default("total_memory", probe.read_total_memory()),
    }
}

/// Query the current host's total physical memory
pub fn query_memory() -> MemorySnapshot {
    memory_snapshot(&SysinfoProbe::new())
}
