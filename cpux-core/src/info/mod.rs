//! Snapshot assembly from probe readings

pub mod cpu;
pub mod memory;

pub use cpu::{cpu_snapshot, query_cpu};
pub use memory::{memory_snapshot, query_memory};

use crate::error::ProbeResult;

/// Fold a probe result into its value, or the zero value if unavailable
fn or_default<T: Default>(field: &'static str, result: ProbeResult<T>) -> T {
    result.unwrap_or_else(|error| {
        tracing::debug!(field, %error, "host value unavailable, reporting zero");
        T::default()
    })
}

/// Narrow a host count into the 32-bit descriptor field
fn saturate_u32(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}
