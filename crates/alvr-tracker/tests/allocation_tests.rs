//! The pose hot paths must not touch the heap.
//!
//! Runs in its own test binary so that the tracking allocator is global here
//! and nowhere else. No tracing subscriber is installed.

use std::hint::black_box;
use std::sync::Arc;

use alvr_test_helpers::assert_no_alloc;
use alvr_test_helpers::prelude::*;
use alvr_test_helpers::tracking::TrackingAllocator;
use alvr_tracker::prelude::*;

#[global_allocator]
static GLOBAL: TrackingAllocator = TrackingAllocator;

#[test]
fn test_get_pose_does_not_allocate() {
    let tracker = FakeViveTracker::new("waist");
    tracker.on_pose_updated(1, tracked_sample([0.0, 1.0, 0.0]));
    black_box(tracker.get_pose());

    let guard = track();
    for _ in 0..1_000 {
        black_box(tracker.get_pose());
    }
    assert_no_alloc!(guard, "get_pose");
}

#[test]
fn test_update_without_push_does_not_allocate() {
    let tracker = FakeViveTracker::new("waist");
    tracker.on_pose_updated(1, tracked_sample([0.0; 3]));

    let guard = track();
    for marker in 1..=1_000 {
        tracker.on_pose_updated(marker_timestamp_ns(marker), black_box(marker_sample(marker)));
    }
    assert_no_alloc!(guard, "on_pose_updated while inactive");
}

#[test]
fn test_update_with_null_host_push_does_not_allocate() -> TestResult {
    let tracker = FakeViveTracker::new("waist");
    tracker.activate(TrackedDeviceIndex::new(1))?;
    tracker.on_pose_updated(1, tracked_sample([0.0; 3]));

    let guard = track();
    for marker in 1..=1_000 {
        tracker.on_pose_updated(marker_timestamp_ns(marker), black_box(marker_sample(marker)));
    }
    assert_no_alloc!(guard, "on_pose_updated while active");
    Ok(())
}

#[test]
fn test_out_of_order_and_stale_paths_do_not_allocate() -> TestResult {
    let clock = Arc::new(ManualClock::new(1_000_000_000));
    let config = TrackerConfig::builder().stale_pose_timeout_ms(1).build()?;
    let tracker = FakeViveTracker::builder("waist")
        .config(config)
        .clock(clock.clone())
        .build()?;
    tracker.on_pose_updated(900_000_000, tracked_sample([0.0; 3]));
    tracker.on_pose_updated(800_000_000, tracked_sample([0.0; 3]));
    black_box(tracker.get_pose());

    let guard = track();
    for step in 0..1_000u64 {
        tracker.on_pose_updated(800_000_000 - step, tracked_sample([0.0; 3]));
        black_box(tracker.get_pose());
        clock.advance_ns(1);
    }
    assert_no_alloc!(guard, "out-of-order update and stale read");

    assert!(tracker.stats().out_of_order_updates >= 1_000);
    assert!(tracker.stats().stale_reads >= 1_000);
    Ok(())
}
