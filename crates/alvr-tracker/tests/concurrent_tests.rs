//! Concurrency tests: one pipeline writer, host readers, lifecycle churn.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use alvr_test_helpers::prelude::*;
use alvr_tracker::prelude::*;
use parking_lot::Mutex;

const WRITES: u32 = 20_000;
const WAIT: Duration = Duration::from_secs(5);
const SETTLE: Duration = Duration::from_millis(200);

/// One-shot rendezvous: the first caller after arming reports that it
/// arrived, then waits until released.
#[derive(Debug, Default)]
struct Gate {
    armed: Mutex<Option<(Sender<()>, Receiver<()>)>>,
}

impl Gate {
    /// Returns (arrived, release).
    fn arm(&self) -> (Receiver<()>, Sender<()>) {
        let (arrived_tx, arrived_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel();
        *self.armed.lock() = Some((arrived_tx, release_rx));
        (arrived_rx, release_tx)
    }

    fn pass(&self) {
        let armed = self.armed.lock().take();
        if let Some((arrived, release)) = armed
            && arrived.send(()).is_ok()
        {
            assert!(release.recv_timeout(WAIT).is_ok(), "gate was never released");
        }
    }
}

/// Host whose first property write after arming blocks on the gate.
#[derive(Debug, Default)]
struct GatedHost {
    gate: Gate,
    inner: RecordingHost,
}

impl DriverHost for GatedHost {
    fn set_property(
        &self,
        device: TrackedDeviceIndex,
        property: &DeviceProperty,
    ) -> Result<(), PropertyError> {
        self.gate.pass();
        self.inner.set_property(device, property)
    }

    fn tracked_device_pose_updated(&self, device: TrackedDeviceIndex, pose: &DriverPose) {
        self.inner.tracked_device_pose_updated(device, pose);
    }
}

/// Clock whose first reading after arming blocks on the gate.
#[derive(Debug)]
struct GatedClock {
    gate: Gate,
    now_ns: u64,
}

impl Clock for GatedClock {
    fn now_ns(&self) -> u64 {
        self.gate.pass();
        self.now_ns
    }
}

#[test]
fn test_reader_never_sees_torn_pose() {
    let tracker = Arc::new(FakeViveTracker::new("waist"));
    let done = Arc::new(AtomicBool::new(false));

    let writer = {
        let tracker = tracker.clone();
        let done = done.clone();
        thread::spawn(move || {
            for marker in 1..=WRITES {
                tracker.on_pose_updated(marker_timestamp_ns(marker), marker_sample(marker));
            }
            done.store(true, Ordering::Release);
        })
    };

    let mut readers = vec![];
    for _ in 0..3 {
        let tracker = tracker.clone();
        let done = done.clone();
        readers.push(thread::spawn(move || {
            let mut last_seen = 0u32;
            let mut reads = 0u64;
            loop {
                let finished = done.load(Ordering::Acquire);
                let pose = tracker.get_pose();
                if pose.timestamp_ns != 0 {
                    match marker_of(&pose) {
                        Some(marker) => {
                            assert!(marker >= last_seen, "marker went backwards");
                            last_seen = marker;
                        }
                        None => panic!("torn pose observed: {pose:?}"),
                    }
                }
                reads += 1;
                if finished {
                    break;
                }
            }
            (last_seen, reads)
        }));
    }

    assert!(writer.join().is_ok(), "Writer thread should not panic");
    for reader in readers {
        let joined = reader.join();
        assert!(joined.is_ok(), "Reader thread should not panic");
        if let Ok((last_seen, reads)) = joined {
            assert_eq!(last_seen, WRITES);
            assert!(reads > 0);
        }
    }

    assert_eq!(marker_of(&tracker.get_pose()), Some(WRITES));
    assert_eq!(tracker.stats().updates_accepted, u64::from(WRITES));
    assert_eq!(tracker.stats().out_of_order_updates, 0);
}

#[test]
fn test_pose_consistent_during_activation_churn() {
    let host = Arc::new(RecordingHost::new());
    let tracker = Arc::new(
        must(FakeViveTracker::builder("chest").host(host.clone()).build()),
    );
    let done = Arc::new(AtomicBool::new(false));

    let lifecycle = {
        let tracker = tracker.clone();
        let done = done.clone();
        thread::spawn(move || {
            let mut id = 0u32;
            while !done.load(Ordering::Acquire) {
                must(tracker.activate(TrackedDeviceIndex::new(id)));
                tracker.enter_standby();
                tracker.deactivate();
                id = id.wrapping_add(1) % 1_000;
            }
        })
    };

    let writer = {
        let tracker = tracker.clone();
        thread::spawn(move || {
            for marker in 1..=5_000 {
                tracker.on_pose_updated(marker_timestamp_ns(marker), marker_sample(marker));
                let pose = tracker.get_pose();
                assert!(marker_of(&pose).is_some(), "torn pose observed: {pose:?}");
            }
        })
    };

    assert!(writer.join().is_ok(), "Writer thread should not panic");
    done.store(true, Ordering::Release);
    assert!(lifecycle.join().is_ok(), "Lifecycle thread should not panic");

    assert!(!tracker.is_active());
    for push in host.pushes() {
        assert!(push.device.is_valid(), "pushed with invalid device index");
        assert!(marker_of(&push.pose).is_some(), "pushed torn pose");
    }
    assert_eq!(tracker.stats().host_pushes, host.push_count() as u64);
}

#[test]
fn test_concurrent_trackers_are_independent() {
    let mut handles = vec![];

    for (i, name) in BODY_POINT_NAMES.iter().enumerate() {
        let name = (*name).to_string();
        handles.push(thread::spawn(move || {
            let tracker = FakeViveTracker::new(name.clone());
            must(tracker.activate(TrackedDeviceIndex::new(i as u32)));
            for marker in 1..=500 {
                tracker.on_pose_updated(marker_timestamp_ns(marker), marker_sample(marker));
            }
            assert_eq!(tracker.serial_number(), format!("ALVR Tracker {name}"));
            assert_eq!(marker_of(&tracker.get_pose()), Some(500));
        }));
    }

    for handle in handles {
        assert!(handle.join().is_ok(), "Thread should not panic");
    }
}

#[test]
fn test_concurrent_queries_are_all_counted() {
    let tracker = Arc::new(FakeViveTracker::new("waist"));
    let mut handles = vec![];

    for _ in 0..4 {
        let tracker = tracker.clone();
        handles.push(thread::spawn(move || {
            for _ in 0..1_000 {
                let _pose = tracker.get_pose();
            }
        }));
    }

    for handle in handles {
        assert!(handle.join().is_ok(), "Thread should not panic");
    }

    assert_eq!(tracker.stats().pose_queries, 4_000);
}

#[test]
fn test_update_completes_while_activation_blocked_in_host() -> TestResult {
    let host = Arc::new(GatedHost::default());
    let tracker = Arc::new(FakeViveTracker::builder("waist").host(host.clone()).build()?);
    let (arrived, release) = host.gate.arm();

    let activation = {
        let tracker = tracker.clone();
        thread::spawn(move || tracker.activate(TrackedDeviceIndex::new(4)))
    };
    arrived.recv_timeout(WAIT)?;

    let (done_tx, done_rx) = mpsc::channel();
    let updater = {
        let tracker = tracker.clone();
        thread::spawn(move || {
            tracker.on_pose_updated(marker_timestamp_ns(1), marker_sample(1));
            assert!(done_tx.send(tracker.get_pose()).is_ok());
        })
    };
    let updated = done_rx.recv_timeout(WAIT);
    assert!(release.send(()).is_ok(), "gated call gave up waiting");

    let pose = must_with(updated, "update stalled behind host registration");
    assert_eq!(marker_of(&pose), Some(1));
    assert!(updater.join().is_ok(), "Updater thread should not panic");
    let activated = activation.join();
    assert!(matches!(activated, Ok(Ok(()))), "activation should succeed");

    assert_eq!(tracker.object_id(), TrackedDeviceIndex::new(4));
    assert_eq!(host.inner.push_count(), 0, "update ran before the index was published");
    Ok(())
}

#[test]
fn test_no_push_after_deactivate_returns() -> TestResult {
    let host = Arc::new(RecordingHost::new());
    let clock = Arc::new(GatedClock {
        gate: Gate::default(),
        now_ns: marker_timestamp_ns(1),
    });
    let tracker = Arc::new(
        FakeViveTracker::builder("waist")
            .host(host.clone())
            .clock(clock.clone())
            .build()?,
    );
    tracker.activate(TrackedDeviceIndex::new(7))?;
    let (arrived, release) = clock.gate.arm();

    let updater = {
        let tracker = tracker.clone();
        thread::spawn(move || {
            tracker.on_pose_updated(marker_timestamp_ns(1), marker_sample(1));
        })
    };
    arrived.recv_timeout(WAIT)?;

    let (done_tx, done_rx) = mpsc::channel();
    let deactivator = {
        let tracker = tracker.clone();
        let host = host.clone();
        thread::spawn(move || {
            tracker.deactivate();
            assert!(done_tx.send(host.push_count()).is_ok());
        })
    };
    let returned_during_push = done_rx.recv_timeout(SETTLE).is_ok();
    assert!(release.send(()).is_ok(), "gated call gave up waiting");

    assert!(updater.join().is_ok(), "Updater thread should not panic");
    assert!(deactivator.join().is_ok(), "Deactivator thread should not panic");
    assert!(!returned_during_push, "deactivate returned while a push was in flight");

    let pushes_at_deactivate = must_with(done_rx.recv_timeout(WAIT), "deactivate never returned");
    assert_eq!(pushes_at_deactivate, 1);
    assert_eq!(host.push_count(), pushes_at_deactivate);
    assert!(!tracker.is_active());

    tracker.on_pose_updated(marker_timestamp_ns(2), marker_sample(2));
    assert_eq!(host.push_count(), 1);
    Ok(())
}
