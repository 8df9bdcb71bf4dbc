//! Descriptor heap management
//!
//! Descriptors live in `malloc`ed memory so that allocation failure surfaces
//! as NULL instead of aborting the host process, and so C callers that
//! release with plain `free()` stay correct.

use std::mem;
use std::ptr::{self, NonNull};

use crate::error::{DescriptorError, DescriptorResult};

/// Move a descriptor onto the C heap
pub(crate) fn allocate<T: Copy>(value: T) -> DescriptorResult<NonNull<T>> {
    let size = mem::size_of::<T>();
    // malloc only guarantees alignment for fundamental types
    debug_assert!(mem::align_of::<T>() <= 8);

    if fault::take_injected_failure() {
        return Err(DescriptorError::AllocationFailed { size });
    }

    let raw = unsafe { libc::malloc(size) }.cast::<T>();
    let ptr = NonNull::new(raw).ok_or(DescriptorError::AllocationFailed { size })?;

    // SAFETY: freshly allocated, sized and aligned for T
    unsafe { ptr.as_ptr().write(value) };

    #[cfg(test)]
    tests::ALLOCATIONS.with(|count| count.set(count.get() + 1));

    Ok(ptr)
}

/// Hand a descriptor to the caller, or NULL if it could not be allocated
pub(crate) fn into_raw_or_null<T: Copy>(value: T, operation: &'static str) -> *mut T {
    match allocate(value) {
        Ok(ptr) => ptr.as_ptr(),
        Err(error) => {
            tracing::error!(operation, %error, "returning NULL descriptor");
            ptr::null_mut()
        }
    }
}

/// Return a descriptor's memory to the C heap
///
/// # Safety
///
/// `ptr` must be NULL, or a pointer from [`allocate`] that has not been
/// released yet.
pub(crate) unsafe fn release<T: Copy>(ptr: *mut T) {
    if ptr.is_null() {
        return;
    }

    #[cfg(test)]
    tests::RELEASES.with(|count| count.set(count.get() + 1));

    libc::free(ptr.cast());
}

/// Make the next `count` descriptor allocations on the calling thread fail
///
/// Other threads are unaffected. Passing 0 clears any pending failures.
#[cfg(any(test, feature = "fault-injection"))]
#[no_mangle]
pub extern "C" fn cpux_inject_alloc_failures(count: u32) {
    fault::inject(count);
}

#[cfg(any(test, feature = "fault-injection"))]
mod fault {
    use std::cell::Cell;

    thread_local! {
        static PENDING_FAILURES: Cell<u32> = const { Cell::new(0) };
    }

    pub(super) fn inject(count: u32) {
        PENDING_FAILURES.with(|pending| pending.set(count));
    }

    pub(super) fn take_injected_failure() -> bool {
        PENDING_FAILURES.with(|pending| match pending.get() {
            0 => false,
            n => {
                pending.set(n - 1);
                true
            }
        })
    }
}

#[cfg(not(any(test, feature = "fault-injection")))]
mod fault {
    #[inline(always)]
    pub(super) fn take_injected_failure() -> bool {
        false
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::Cell;

    thread_local! {
        pub(crate) static ALLOCATIONS: Cell<usize> = const { Cell::new(0) };
        pub(crate) static RELEASES: Cell<usize> = const { Cell::new(0) };
    }

    /// Number of successful allocations performed on the calling thread
    pub(crate) fn allocations_on_this_thread() -> usize {
        ALLOCATIONS.with(Cell::get)
    }

    /// Number of non-NULL releases performed on the calling thread
    pub(crate) fn releases_on_this_thread() -> usize {
        RELEASES.with(Cell::get)
    }

    #[test]
    fn test_allocate_and_release() {
        let ptr = allocate(0xdead_beef_u64).unwrap();
        assert_eq!(unsafe { *ptr.as_ptr() }, 0xdead_beef);

        let before = releases_on_this_thread();
        unsafe { release(ptr.as_ptr()) };
        assert_eq!(releases_on_this_thread(), before + 1);
    }

    #[test]
    fn test_failed_allocation_not_counted() {
        let before = allocations_on_this_thread();
        cpux_inject_alloc_failures(1);
        assert!(allocate(1u64).is_err());
        assert_eq!(allocations_on_this_thread(), before);
    }

    #[test]
    fn test_release_null_is_noop() {
        let before = releases_on_this_thread();
        unsafe { release::<u64>(ptr::null_mut()) };
        assert_eq!(releases_on_this_thread(), before);
    }

    #[test]
    fn test_injected_failures_count_down() {
        cpux_inject_alloc_failures(2);

        assert_eq!(
            allocate(1u32),
            Err(DescriptorError::AllocationFailed { size: 4 })
        );
        assert!(allocate(2u32).is_err());

        let ptr = allocate(3u32).unwrap();
        unsafe { release(ptr.as_ptr()) };
    }

    #[test]
    fn test_injected_failure_cleared_with_zero() {
        cpux_inject_alloc_failures(5);
        cpux_inject_alloc_failures(0);

        let ptr = allocate(7u8).unwrap();
        unsafe { release(ptr.as_ptr()) };
    }

    #[test]
    fn test_injected_failure_is_thread_local() {
        cpux_inject_alloc_failures(1);

        let other = std::thread::spawn(|| {
            let ptr = allocate(9u16).unwrap();
            unsafe { release(ptr.as_ptr()) };
        });
        other.join().unwrap();

        assert!(allocate(9u16).is_err());
    }

    #[test]
    fn test_into_raw_or_null_on_failure() {
        cpux_inject_alloc_failures(1);
        assert!(into_raw_or_null(1u64, "test").is_null());
    }
}
