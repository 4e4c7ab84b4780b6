//! Allocation tracking for hot-path tests.
//!
//! Install [`TrackingAllocator`] as the global allocator of a test binary,
//! then wrap the code under test in a [`track`] guard. Counting is per
//! thread, so allocations made by the test harness or other threads are not
//! attributed to the guarded section.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

thread_local! {
    static COUNT: Cell<usize> = const { Cell::new(0) };
    static BYTES: Cell<usize> = const { Cell::new(0) };
    static ENABLED: Cell<bool> = const { Cell::new(false) };
}

fn record(bytes: usize) {
    if ENABLED.with(Cell::get) {
        COUNT.with(|c| c.set(c.get().saturating_add(1)));
        BYTES.with(|b| b.set(b.get().saturating_add(bytes)));
    }
}

/// Global allocator that counts allocations on threads with an active guard.
pub struct TrackingAllocator;

// SAFETY: every call forwards to `System` with the caller's arguments.
unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        // SAFETY: caller upholds the `GlobalAlloc::alloc` contract.
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            record(layout.size());
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        // SAFETY: caller upholds the `GlobalAlloc::alloc_zeroed` contract.
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() {
            record(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        // SAFETY: `ptr` was allocated by `System` with `layout`.
        unsafe { System.dealloc(ptr, layout) };
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        // SAFETY: caller upholds the `GlobalAlloc::realloc` contract.
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() && new_size > layout.size() {
            record(new_size - layout.size());
        }
        new_ptr
    }
}

/// Counts allocations on the current thread while alive.
#[derive(Debug)]
pub struct AllocationGuard {
    start_count: usize,
    start_bytes: usize,
    was_enabled: bool,
}

impl AllocationGuard {
    pub fn new() -> Self {
        let was_enabled = ENABLED.with(|e| e.replace(true));
        Self {
            start_count: COUNT.with(Cell::get),
            start_bytes: BYTES.with(Cell::get),
            was_enabled,
        }
    }

    /// Allocations since the guard was created.
    pub fn allocations(&self) -> usize {
        COUNT.with(Cell::get).saturating_sub(self.start_count)
    }

    /// Bytes requested since the guard was created.
    pub fn bytes(&self) -> usize {
        BYTES.with(Cell::get).saturating_sub(self.start_bytes)
    }

    pub fn has_allocations(&self) -> bool {
        self.allocations() > 0
    }
}

impl Default for AllocationGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AllocationGuard {
    fn drop(&mut self) {
        let was_enabled = self.was_enabled;
        ENABLED.with(|e| e.set(was_enabled));
    }
}

/// Start counting allocations on this thread.
pub fn track() -> AllocationGuard {
    AllocationGuard::new()
}

/// Panic if the guard saw any allocation.
#[macro_export]
macro_rules! assert_no_alloc {
    ($guard:expr) => {
        $crate::assert_no_alloc!($guard, "guarded section")
    };
    ($guard:expr, $context:expr) => {{
        let guard = &$guard;
        let allocs = guard.allocations();
        if allocs > 0 {
            panic!(
                "hot path allocated in '{}': {} allocations ({} bytes) at {}:{}",
                $context,
                allocs,
                guard.bytes(),
                file!(),
                line!()
            );
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hint::black_box;

    #[test]
    fn test_no_allocations() {
        let guard = track();
        let x = black_box(41u64);
        let _y = black_box(x + 1);
        assert_no_alloc!(guard);
    }

    #[test]
    #[should_panic(expected = "hot path allocated")]
    fn test_detects_allocation() {
        let guard = track();
        let v: Vec<u8> = black_box(vec![1, 2, 3]);
        drop(v);
        assert_no_alloc!(guard, "vec");
    }

    #[test]
    fn test_counts_bytes() {
        let guard = track();
        let v: Vec<u64> = black_box(Vec::with_capacity(16));
        assert!(guard.has_allocations());
        assert!(guard.bytes() >= 128);
        drop(v);
    }

    #[test]
    fn test_nested_guards_restore_state() {
        let outer = track();
        {
            let inner = track();
            assert_no_alloc!(inner);
        }
        let s: String = black_box(String::from("still tracked"));
        assert!(outer.has_allocations());
        drop(s);
    }
}
