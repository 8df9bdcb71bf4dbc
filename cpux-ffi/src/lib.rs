//! C/FFI bindings for host CPU and memory information
//!
//! Provides the C-compatible surface declared in `include/cpux_lib.h`:
//! two query functions returning freshly allocated descriptors and two
//! release functions taking them back.
//!
//! # Example (C)
//!
//! ```c
//! #include "cpux_lib.h"
//!
//! int main() {
//!     CPUInfo* cpu = getCPUInfo();
//!     if (cpu == NULL) {
//!         return 1;
//!     }
//!     printf("%s: %u cores / %u threads\n", cpu->model, cpu->coreCount, cpu->threadCount);
//!     freeCPUInfo(cpu);
//!
//!     MemoryInfo* mem = getMemoryInfo();
//!     if (mem != NULL) {
//!         printf("%llu bytes\n", (unsigned long long)mem->totalMemory);
//!     }
//!     freeMemoryInfo(mem); // NULL is fine
//!     return 0;
//! }
//! ```
//!
//! # Example (Rust)
//!
//! Rust callers should prefer the owning handles, which release on drop:
//!
//! ```rust,no_run
//! use cpux::CpuInfoHandle;
//!
//! if let Some(cpu) = CpuInfoHandle::query() {
//!     println!("{} threads", cpu.thread_count);
//! }
//! ```

mod cpu;
mod error;
mod handle;
mod heap;
mod memory;
mod version;

pub use cpu::*;
pub use error::{DescriptorError, DescriptorResult};
pub use handle::{CpuInfoHandle, Descriptor, DescriptorHandle, MemoryInfoHandle};
pub use memory::*;
pub use version::*;

#[cfg(feature = "fault-injection")]
pub use heap::cpux_inject_alloc_failures;
