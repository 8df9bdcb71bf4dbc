//! Host information probing
//!
//! Reads the CPU model name, physical core count, logical thread count, and
//! total physical memory of the current host.
//!
//! Every query is self-contained: a fresh [`sysinfo::System`] is built per call
//! and nothing is cached between calls. Values the host cannot supply come back
//! as zero (numeric fields) or an empty [`ModelName`], never as an error.
//!
//! # Usage
//!
//! ```rust,no_run
//! let cpu = cpux_core::query_cpu();
//! println!("{} ({} cores / {} threads)", cpu.model, cpu.core_count, cpu.thread_count);
//!
//! let memory = cpux_core::query_memory();
//! println!("{} bytes", memory.total_memory);
//! ```
//!
//! # Custom probes
//!
//! The snapshot builders accept any [`HostProbe`], which keeps the folding of
//! missing values testable without a particular machine:
//!
//! ```rust
//! use cpux_core::{cpu_snapshot, StaticProbe};
//!
//! let probe = StaticProbe::new("Test CPU", 4, 8, 16 << 30);
//! let cpu = cpu_snapshot(&probe);
//! assert_eq!(cpu.thread_count, 8);
//! ```

pub mod error;
pub mod info;
pub mod probe;
pub mod types;

pub use error::{ProbeError, ProbeResult};
pub use info::{cpu_snapshot, memory_snapshot, query_cpu, query_memory};
pub use probe::{CpuReading, HostProbe, StaticProbe, SysinfoProbe};
pub use types::{CpuSnapshot, MemorySnapshot, ModelName};
