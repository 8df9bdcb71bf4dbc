//! Query/release lifecycle tests for the C surface
//!
//! Run under a leak checker to cover the heap properties as well:
//!
//! ```bash
//! cargo test -p cpux-ffi --test lifecycle --no-run
//! valgrind --leak-check=full target/debug/deps/lifecycle-*
//! ```

use std::ptr;
use std::sync::Arc;
use std::sync::Barrier;
use std::thread;

use cpux::{
    freeCPUInfo, freeMemoryInfo, getCPUInfo, getMemoryInfo, CpuInfoHandle, MemoryInfoHandle,
    MODEL_CAPACITY,
};

const CYCLES: usize = 1000;
const THREADS: usize = 8;
const CYCLES_PER_THREAD: usize = 100;

#[test]
fn cpu_descriptor_fields_are_sane() {
    let info = getCPUInfo();
    assert!(!info.is_null());

    let cpu = unsafe { *info };
    unsafe { freeCPUInfo(info) };

    assert_eq!(cpu.model[MODEL_CAPACITY - 1], 0);
    assert!(cpu.thread_count > 0);
    if cpu.core_count > 0 && cpu.thread_count < cpu.core_count {
        eprintln!(
            "topology anomaly: {} cores / {} threads",
            cpu.core_count, cpu.thread_count
        );
    }
}

#[test]
fn memory_descriptor_is_positive() {
    let info = getMemoryInfo();
    assert!(!info.is_null());

    let total = unsafe { (*info).total_memory };
    unsafe { freeMemoryInfo(info) };

    assert!(total > 0);
}

#[test]
fn release_null_for_both_kinds() {
    unsafe {
        freeCPUInfo(ptr::null_mut());
        freeMemoryInfo(ptr::null_mut());
    }
}

#[test]
fn each_query_returns_a_fresh_descriptor() {
    let first = getCPUInfo();
    let second = getCPUInfo();
    assert!(!first.is_null() && !second.is_null());
    assert_ne!(first, second);

    unsafe {
        freeCPUInfo(first);
        freeCPUInfo(second);
    }
}

#[test]
fn repeated_query_release_cycles() {
    for _ in 0..CYCLES {
        let cpu = getCPUInfo();
        assert!(!cpu.is_null());
        unsafe { freeCPUInfo(cpu) };

        let memory = getMemoryInfo();
        assert!(!memory.is_null());
        unsafe { freeMemoryInfo(memory) };
    }
}

#[test]
fn concurrent_query_release_cycles() {
    let barrier = Arc::new(Barrier::new(THREADS));

    let workers: Vec<_> = (0..THREADS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..CYCLES_PER_THREAD {
                    let cpu = CpuInfoHandle::query().expect("cpu descriptor");
                    let memory = MemoryInfoHandle::query().expect("memory descriptor");
                    assert!(cpu.thread_count > 0);
                    assert!(memory.total_memory > 0);
                }
            })
        })
        .collect();

    for worker in workers {
        worker.join().expect("worker panicked");
    }
}

#[test]
fn descriptor_released_on_another_thread() {
    let raw = getMemoryInfo() as usize;
    thread::spawn(move || unsafe { freeMemoryInfo(raw as *mut _) })
        .join()
        .unwrap();
}
