//! FFI functions for memory information

use std::mem;

use cpux_core::MemorySnapshot;

use crate::heap;

/// C layout of `MemoryInfo`
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryInfo {
    /// Total physical memory in bytes, 0 when unknown
    pub total_memory: u64,
}

const _: () = {
    assert!(mem::size_of::<MemoryInfo>() == 8);
    assert!(mem::align_of::<MemoryInfo>() == 8);
};

impl MemoryInfo {
    pub fn to_snapshot(&self) -> MemorySnapshot {
        MemorySnapshot {
            total_memory: self.total_memory,
        }
    }
}

impl From<&MemorySnapshot> for MemoryInfo {
    fn from(snapshot: &MemorySnapshot) -> Self {
        Self {
            total_memory: snapshot.total_memory,
        }
    }
}

/// Query total physical memory
///
/// Returns a new descriptor owned by the caller, or NULL if it could not be
/// allocated. `totalMemory` is 0 when the host cannot report it.
///
/// The returned pointer must be freed with `freeMemoryInfo`.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn getMemoryInfo() -> *mut MemoryInfo {
    let snapshot = cpux_core::query_memory();
    heap::into_raw_or_null(MemoryInfo::from(&snapshot), "getMemoryInfo")
}

/// Free a memory descriptor
///
/// # Safety
///
/// `info` must be a pointer from `getMemoryInfo` that has not been freed, or
/// NULL.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn freeMemoryInfo(info: *mut MemoryInfo) {
    heap::release(info);
}
