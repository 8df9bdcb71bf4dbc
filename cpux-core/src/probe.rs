//! Host probes
//!
//! A [`HostProbe`] supplies the raw values behind the snapshots. Each field is
//! read independently so one missing value never hides the others.
//!
//! [`SysinfoProbe`] is the real implementation. [`StaticProbe`] returns fixed
//! values and backs tests and demos.

use sysinfo::System;

use crate::error::{ProbeError, ProbeResult};

/// Raw CPU values from one OS read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CpuReading {
    /// Brand string of the first logical CPU
    pub brand: ProbeResult<String>,
    /// Physical core count
    pub physical_cores: ProbeResult<usize>,
    /// Logical CPU count
    pub logical_threads: ProbeResult<usize>,
}

/// Source of raw host values
///
/// Implementations must be safe to call from many threads at once and must
/// not cache between calls.
pub trait HostProbe: Send + Sync {
    /// Read the CPU model and topology in a single attempt
    fn read_cpu(&self) -> CpuReading;

    /// Read total physical memory in bytes
    fn read_total_memory(&self) -> ProbeResult<u64>;
}

/// Probe backed by the `sysinfo` crate
///
/// Builds a fresh [`System`] per read, refreshed only for what that read needs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SysinfoProbe;

impl SysinfoProbe {
    pub fn new() -> Self {
        Self
    }
}

impl HostProbe for SysinfoProbe {
    fn read_cpu(&self) -> CpuReading {
        let mut sys = System::new();
        sys.refresh_cpu_all();

        let cpus = sys.cpus();
        let brand = match cpus.first() {
            None => Err(ProbeError::CpuListEmpty),
            Some(cpu) if cpu.brand().trim().is_empty() => Err(ProbeError::BrandUnavailable),
            Some(cpu) => Ok(cpu.brand().to_string()),
        };
        let logical_threads = match cpus.len() {
            0 => Err(ProbeError::CpuListEmpty),
            n => Ok(n),
        };
        let physical_cores = sys
            .physical_core_count()
            .filter(|&n| n > 0)
            .ok_or(ProbeError::PhysicalCoresUnavailable);

        CpuReading {
            brand,
            physical_cores,
            logical_threads,
        }
    }

    fn read_total_memory(&self) -> ProbeResult<u64> {
        let mut sys = System::new();
        sys.refresh_memory();

        match sys.total_memory() {
            0 => Err(ProbeError::MemoryUnavailable),
            total => Ok(total),
        }
    }
}

/// Probe returning fixed values
///
/// `None` fields behave like values the host could not supply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticProbe {
    pub model: Option<String>,
    pub physical_cores: Option<usize>,
    pub logical_threads: Option<usize>,
    pub total_memory: Option<u64>,
}

impl StaticProbe {
    pub fn new(
        model: impl Into<String>,
        physical_cores: usize,
        logical_threads: usize,
        total_memory: u64,
    ) -> Self {
        Self {
            model: Some(model.into()),
            physical_cores: Some(physical_cores),
            logical_threads: Some(logical_threads),
            total_memory: Some(total_memory),
        }
    }

    /// A probe on a host that reports nothing
    pub fn unavailable() -> Self {
        Self::default()
    }
}

impl HostProbe for StaticProbe {
    fn read_cpu(&self) -> CpuReading {
        CpuReading {
            brand: self.model.clone().ok_or(ProbeError::BrandUnavailable),
            physical_cores: self
                .physical_cores
                .ok_or(ProbeError::PhysicalCoresUnavailable),
            logical_threads: self.logical_threads.ok_or(ProbeError::CpuListEmpty),
        }
    }

    fn read_total_memory(&self) -> ProbeResult<u64> {
        self.total_memory.ok_or(ProbeError::MemoryUnavailable)
    }
}
