//! Owning handles for descriptors
//!
//! Wraps a raw descriptor pointer so the matching release function runs
//! exactly once, on drop. The raw functions remain available for callers that
//! need manual control via [`DescriptorHandle::into_raw`].

use std::fmt;
use std::mem;
use std::ops::Deref;
use std::ptr::NonNull;

use cpux_core::{CpuSnapshot, MemorySnapshot};

use crate::cpu::{freeCPUInfo, getCPUInfo, CpuInfo};
use crate::memory::{freeMemoryInfo, getMemoryInfo, MemoryInfo};

mod sealed {
    pub trait Sealed {}
    impl Sealed for crate::cpu::CpuInfo {}
    impl Sealed for crate::memory::MemoryInfo {}
}

/// A descriptor type with a paired query and release function
pub trait Descriptor: Copy + sealed::Sealed {
    /// Safe value type the descriptor converts into
    type Snapshot;

    /// Call the C query function
    fn query_raw() -> *mut Self;

    /// Call the C release function
    ///
    /// # Safety
    ///
    /// `ptr` must be NULL or come from [`Descriptor::query_raw`] and not have
    /// been released yet.
    unsafe fn release_raw(ptr: *mut Self);

    fn snapshot(&self) -> Self::Snapshot;
}

impl Descriptor for CpuInfo {
    type Snapshot = CpuSnapshot;

    fn query_raw() -> *mut Self {
        getCPUInfo()
    }

    unsafe fn release_raw(ptr: *mut Self) {
        freeCPUInfo(ptr)
    }

    fn snapshot(&self) -> CpuSnapshot {
        self.to_snapshot()
    }
}

impl Descriptor for MemoryInfo {
    type Snapshot = MemorySnapshot;

    fn query_raw() -> *mut Self {
        getMemoryInfo()
    }

    unsafe fn release_raw(ptr: *mut Self) {
        freeMemoryInfo(ptr)
    }

    fn snapshot(&self) -> MemorySnapshot {
        self.to_snapshot()
    }
}

/// Exclusive owner of one descriptor
///
/// May be moved to another thread for release, but not shared.
pub struct DescriptorHandle<D: Descriptor> {
    ptr: NonNull<D>,
}

/// Owning handle for a CPU descriptor
pub type CpuInfoHandle = DescriptorHandle<CpuInfo>;

/// Owning handle for a memory descriptor
pub type MemoryInfoHandle = DescriptorHandle<MemoryInfo>;

// SAFETY: the handle is the sole owner of plain data on the C heap
unsafe impl<D: Descriptor> Send for DescriptorHandle<D> {}

impl<D: Descriptor> DescriptorHandle<D> {
    /// Query the host, or `None` if the descriptor could not be allocated
    pub fn query() -> Option<Self> {
        NonNull::new(D::query_raw()).map(|ptr| Self { ptr })
    }

    /// Take ownership of a raw descriptor; `None` for NULL
    ///
    /// # Safety
    ///
    /// `ptr` must be NULL or come from the matching query function, must not
    /// have been released, and must not be owned by anything else.
    pub unsafe fn from_raw(ptr: *mut D) -> Option<Self> {
        NonNull::new(ptr).map(|ptr| Self { ptr })
    }

    /// Give up ownership without releasing
    ///
    /// The caller becomes responsible for the matching release function.
    pub fn into_raw(self) -> *mut D {
        let ptr = self.ptr.as_ptr();
        mem::forget(self);
        ptr
    }

    /// Copy the descriptor into its safe value type
    pub fn to_snapshot(&self) -> D::Snapshot {
        self.deref().snapshot()
    }
}

impl<D: Descriptor> Deref for DescriptorHandle<D> {
    type Target = D;

    fn deref(&self) -> &D {
        // SAFETY: non-null, initialized by the query, alive until drop
        unsafe { self.ptr.as_ref() }
    }
}

impl<D: Descriptor> Drop for DescriptorHandle<D> {
    fn drop(&mut self) {
        // SAFETY: owned exclusively and released only here
        unsafe { D::release_raw(self.ptr.as_ptr()) }
    }
}

impl<D: Descriptor + fmt::Debug> fmt::Debug for DescriptorHandle<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DescriptorHandle").field(self.deref()).finish()
    }
}
