//! CPU information collection

use crate::probe::{HostProbe, SysinfoProbe};
use crate::types::{CpuSnapshot, ModelName};

use super::{or_default, saturate_u32};

/// Build a CPU snapshot from a probe
///
/// Missing values become zero or an empty model name. A topology anomaly
/// (fewer threads than cores) is logged but returned unchanged.
pub fn cpu_snapshot(probe: &dyn HostProbe) -> CpuSnapshot {
    let reading = probe.read_cpu();

    let model = ModelName::new(&or_default("model", reading.brand));
    if model.is_truncated() {
        tracing::debug!(
            capacity = ModelName::CAPACITY,
            "cpu model name truncated to fit descriptor"
        );
    }

    let snapshot = CpuSnapshot {
        model,
        core_count: saturate_u32(or_default("core_count", reading.physical_cores)),
        thread_count: saturate_u32(or_default("thread_count", reading.logical_threads)),
    };

    if !snapshot.topology_consistent() {
        tracing::warn!(
            core_count = snapshot.core_count,
            thread_count = snapshot.thread_count,
            "logical thread count below physical core count"
        );
    }

    snapshot
}

/// Query the current host's CPU
pub fn query_cpu() -> CpuSnapshot {
    cpu_snapshot(&SysinfoProbe::new())
}
