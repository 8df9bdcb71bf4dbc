//! FFI functions for CPU information
//!
//! Mirrors the `CPUInfo` struct and the `getCPUInfo` / `freeCPUInfo` pair
//! from `cpux_lib.h`.

use std::ffi::c_char;
use std::fmt;
use std::mem;

use cpux_core::{CpuSnapshot, ModelName};

use crate::heap;

/// Capacity of [`CpuInfo::model`], terminator included
pub const MODEL_CAPACITY: usize = ModelName::CAPACITY;

/// C layout of `CPUInfo`
///
/// `model` is always NUL-terminated and zero-padded; it is all zeros when the
/// host has no model string. Counts are 0 when unknown.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct CpuInfo {
    pub model: [c_char; MODEL_CAPACITY],
    pub core_count: u32,
    pub thread_count: u32,
}

const _: () = {
    assert!(mem::size_of::<CpuInfo>() == 264);
    assert!(mem::align_of::<CpuInfo>() == 4);
    assert!(mem::offset_of!(CpuInfo, model) == 0);
    assert!(mem::offset_of!(CpuInfo, core_count) == 256);
    assert!(mem::offset_of!(CpuInfo, thread_count) == 260);
};

impl CpuInfo {
    /// The model field as a bounded label
    pub fn model_name(&self) -> ModelName {
        ModelName::from_c_chars(&self.model)
    }

    pub fn to_snapshot(&self) -> CpuSnapshot {
        CpuSnapshot {
            model: self.model_name(),
            core_count: self.core_count,
            thread_count: self.thread_count,
        }
    }
}

impl From<&CpuSnapshot> for CpuInfo {
    fn from(snapshot: &CpuSnapshot) -> Self {
        Self {
            model: snapshot.model.to_c_chars(),
            core_count: snapshot.core_count,
            thread_count: snapshot.thread_count,
        }
    }
}

impl fmt::Debug for CpuInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CpuInfo")
            .field("model", &self.model_name().as_str())
            .field("core_count", &self.core_count)
            .field("thread_count", &self.thread_count)
            .finish()
    }
}

/// Query CPU model, physical core count, and logical thread count
///
/// Returns a new descriptor owned by the caller, or NULL if it could not be
/// allocated. Values the host cannot supply are zero/empty.
///
/// The returned pointer must be freed with `freeCPUInfo`.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn getCPUInfo() -> *mut CpuInfo {
    let snapshot = cpux_core::query_cpu();
    heap::into_raw_or_null(CpuInfo::from(&snapshot), "getCPUInfo")
}

/// Free a CPU descriptor
///
/// # Safety
///
/// `info` must be a pointer from `getCPUInfo` that has not been freed, or NULL.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn freeCPUInfo(info: *mut CpuInfo) {
    heap::release(info);
}
