//! The simulated Vive tracker.
//!
//! [`FakeViveTracker`] presents one body point to the host as a generic
//! tracker. The host drives its lifecycle and polls [`FakeViveTracker::get_pose`];
//! the body-tracking pipeline feeds it through
//! [`FakeViveTracker::on_pose_updated`]. Both sides call through `&self` from
//! their own threads.
//!
//! # Locking
//!
//! - Pose record: one `Mutex`, held only to copy a record in or out.
//! - Activation: one `Mutex<()>` serializing activate and deactivate. Host
//!   registration runs under it, never under the index lock.
//! - Device index: one `RwLock`. Activate and deactivate take the write lock
//!   only to publish the new index. An update holds the read lock from the
//!   moment it reads the index until its host push returns, so no push for an
//!   index happens after `deactivate` returns.
//! - Counters: relaxed atomics.
//!
//! Host callbacks and logging happen outside the pose lock.
//!
//! # Time
//!
//! Without a [`Clock`] the tracker cannot relate pipeline timestamps to
//! "now": every stamped pose carries only the configured
//! `pose_time_offset_s` and staleness cannot be enabled. Pass a clock in the
//! pipeline's timestamp domain through [`FakeViveTracker::builder`] to derive
//! offsets.

use std::fmt;
use std::sync::Arc;

use alvr_driver_abi::{
    BodyTrackerSample, BodyTrackerSink, ComponentHandle, DriverHost, DriverPose, HostInitError,
    HostInitResult, NullHost, TrackedDeviceDriver, TrackedDeviceIndex, write_empty_response,
};
use parking_lot::{Mutex, RwLock};
use tracing::{debug, info, trace, warn};

use crate::clock::Clock;
use crate::config::TrackerConfig;
use crate::error::{TrackerError, TrackerResult};
use crate::naming::TrackerNames;
use crate::pose_state::{PoseCell, degrade_stale, is_stale, pose_from_sample, time_offset_s};
use crate::properties::activation_properties;
use crate::stats::{TrackerCounters, TrackerStatsSnapshot};

/// A body tracker presented to the host as a Vive Tracker.
///
/// # Example
///
/// ```rust
/// use alvr_tracker::prelude::*;
///
/// let tracker = FakeViveTracker::new("waist");
/// assert_eq!(tracker.serial_number(), "ALVR Tracker waist");
///
/// tracker.activate(TrackedDeviceIndex::new(3))?;
/// tracker.on_pose_updated(1_000, BodyTrackerSample::new(0, [0.0, 1.0, 0.0], SampleQuat::IDENTITY, true));
///
/// let pose = tracker.get_pose();
/// assert_eq!(pose.result, TrackingResult::RunningOk);
/// assert_eq!(pose.timestamp_ns, 1_000);
/// # Ok::<(), HostInitError>(())
/// ```
pub struct FakeViveTracker {
    names: TrackerNames,
    config: TrackerConfig,
    activation: Mutex<()>,
    object_id: RwLock<TrackedDeviceIndex>,
    pose: PoseCell,
    host: Arc<dyn DriverHost>,
    clock: Option<Arc<dyn Clock>>,
    counters: TrackerCounters,
}

impl fmt::Debug for FakeViveTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FakeViveTracker")
            .field("name", &self.names.name())
            .field("object_id", &self.object_id())
            .field("config", &self.config)
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}

impl FakeViveTracker {
    /// Tracker for body point `name` with the default configuration and no
    /// host callbacks.
    ///
    /// No clock is attached, so poses report a time offset of 0. Use
    /// [`FakeViveTracker::builder`] with a clock in the pipeline's timestamp
    /// domain to derive real offsets.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_parts(
            TrackerNames::new(name),
            TrackerConfig::default(),
            Arc::new(NullHost),
            None,
        )
    }

    /// Builder for a tracker with a custom configuration, host or clock.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> FakeViveTrackerBuilder {
        FakeViveTrackerBuilder {
            name: name.into(),
            config: TrackerConfig::default(),
            host: None,
            clock: None,
        }
    }

    fn from_parts(
        names: TrackerNames,
        config: TrackerConfig,
        host: Arc<dyn DriverHost>,
        clock: Option<Arc<dyn Clock>>,
    ) -> Self {
        Self {
            names,
            config,
            activation: Mutex::new(()),
            object_id: RwLock::new(TrackedDeviceIndex::INVALID),
            pose: PoseCell::new(),
            host,
            clock,
            counters: TrackerCounters::default(),
        }
    }

    /// Label given at construction.
    #[must_use]
    pub fn name(&self) -> &str {
        self.names.name()
    }

    /// `"ALVR Tracker " + name`. Same allocation on every call.
    #[must_use]
    pub fn serial_number(&self) -> &str {
        self.names.serial_number()
    }

    /// `"ALVR/tracker/" + name`. Same allocation on every call.
    #[must_use]
    pub fn device_path(&self) -> &str {
        self.names.device_path()
    }

    /// Host-assigned index, or [`TrackedDeviceIndex::INVALID`] while inactive.
    #[must_use]
    pub fn object_id(&self) -> TrackedDeviceIndex {
        // Recursive so a host may query the index from inside a pose push.
        *self.object_id.read_recursive()
    }

    /// Whether the host has activated this tracker.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.object_id().is_valid()
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Current counter values.
    #[must_use]
    pub fn stats(&self) -> TrackerStatsSnapshot {
        self.counters.snapshot()
    }

    /// Accept `device` from the host and register this tracker's properties.
    ///
    /// Re-activating an active tracker replaces its index.
    ///
    /// # Errors
    ///
    /// - [`HostInitError::InvalidDeviceIndex`] if `device` is the invalid index.
    /// - [`HostInitError::PropertyRejected`] if the host refuses a property.
    ///
    /// On error the tracker keeps the index it had before the call.
    pub fn activate(&self, device: TrackedDeviceIndex) -> HostInitResult<()> {
        if !device.is_valid() {
            self.counters.record_activation(false);
            warn!(tracker = %self.serial_number(), "activation requested with invalid device index");
            return Err(HostInitError::InvalidDeviceIndex(device.raw()));
        }

        let _serialized = self.activation.lock();
        let previous = self.object_id();
        if previous.is_valid() {
            warn!(
                tracker = %self.serial_number(),
                %previous,
                object_id = %device,
                "tracker re-activated, replacing device index"
            );
        }

        for property in activation_properties(&self.names, &self.config.profile) {
            if let Err(error) = self.host.set_property(device, &property) {
                self.counters.record_activation(false);
                warn!(
                    tracker = %self.serial_number(),
                    object_id = %device,
                    property = %property.key,
                    %error,
                    "host rejected tracker property"
                );
                return Err(HostInitError::property_rejected(property.key, error));
            }
        }

        *self.object_id.write() = device;
        self.counters.record_activation(true);
        info!(tracker = %self.serial_number(), object_id = %device, "tracker activated");
        Ok(())
    }

    /// Release the host index. Repeated calls are no-ops.
    ///
    /// Waits for a pose push already in flight to the old index; none starts
    /// after this returns. The pose survives unless
    /// `reset_pose_on_deactivate` is set.
    pub fn deactivate(&self) {
        let _serialized = self.activation.lock();
        let previous = std::mem::replace(&mut *self.object_id.write(), TrackedDeviceIndex::INVALID);
        if self.config.reset_pose_on_deactivate {
            self.pose.reset();
        }
        self.counters.record_deactivation();
        if previous.is_valid() {
            info!(tracker = %self.serial_number(), object_id = %previous, "tracker deactivated");
        }
    }

    /// Nothing to power down.
    pub fn enter_standby(&self) {
        trace!(tracker = %self.serial_number(), "standby requested");
    }

    /// Trackers expose no components.
    #[must_use]
    pub fn get_component(&self, component_name: &str) -> Option<ComponentHandle> {
        trace!(tracker = %self.serial_number(), component = component_name, "component requested");
        None
    }

    /// Reply to any debug request with an empty string.
    pub fn debug_request(&self, request: &str, response: &mut [u8]) {
        trace!(tracker = %self.serial_number(), request, capacity = response.len(), "debug request");
        write_empty_response(response);
    }

    /// Copy of the latest pose, with its time offset derived against the
    /// clock and stale records degraded to out of range.
    #[must_use]
    pub fn get_pose(&self) -> DriverPose {
        let mut pose = self.pose.load();
        let now_ns = self.now_ns();
        pose.pose_time_offset_s = self.offset_for(pose.timestamp_ns, now_ns);

        let stale = now_ns
            .zip(self.config.stale_pose_timeout_ns())
            .is_some_and(|(now_ns, timeout_ns)| is_stale(pose.timestamp_ns, now_ns, timeout_ns));
        if stale {
            degrade_stale(&mut pose);
        }
        self.counters.record_query(stale);
        pose
    }

    /// Record a pipeline sample produced at `target_timestamp_ns`.
    ///
    /// The sample replaces the pose record as is; nothing is validated and
    /// older timestamps are accepted. While active, the new pose is also
    /// pushed to the host. Never waits on host registration.
    pub fn on_pose_updated(&self, target_timestamp_ns: u64, sample: BodyTrackerSample) {
        let object_id = self.object_id.read();
        let device = *object_id;
        if !device.is_valid() && !self.config.accept_updates_while_inactive {
            drop(object_id);
            self.counters.record_dropped();
            debug!(
                tracker = %self.serial_number(),
                timestamp_ns = target_timestamp_ns,
                "dropping update for inactive tracker"
            );
            return;
        }

        let pose = pose_from_sample(target_timestamp_ns, &sample);
        let previous_ns = self.pose.store(pose);
        let out_of_order = target_timestamp_ns < previous_ns;
        self.counters.record_update(out_of_order);
        if out_of_order {
            debug!(
                tracker = %self.serial_number(),
                timestamp_ns = target_timestamp_ns,
                previous_ns,
                "out-of-order pose update"
            );
        }

        if device.is_valid() && self.config.push_updates_to_host {
            let pushed =
                pose.with_time_offset(self.offset_for(target_timestamp_ns, self.now_ns()));
            self.host.tracked_device_pose_updated(device, &pushed);
            self.counters.record_push();
        }
        drop(object_id);
    }

    fn now_ns(&self) -> Option<u64> {
        self.clock.as_ref().map(|clock| clock.now_ns())
    }

    /// Offset for a record stamped `timestamp_ns`. Without a clock the record
    /// is taken as current.
    fn offset_for(&self, timestamp_ns: u64, now_ns: Option<u64>) -> f64 {
        time_offset_s(
            timestamp_ns,
            now_ns.unwrap_or(timestamp_ns),
            self.config.pose_time_offset_s,
        )
    }
}

impl TrackedDeviceDriver for FakeViveTracker {
    fn activate(&self, device: TrackedDeviceIndex) -> HostInitResult<()> {
        Self::activate(self, device)
    }

    fn deactivate(&self) {
        Self::deactivate(self);
    }

    fn enter_standby(&self) {
        Self::enter_standby(self);
    }

    fn get_component(&self, component_name: &str) -> Option<ComponentHandle> {
        Self::get_component(self, component_name)
    }

    fn debug_request(&self, request: &str, response: &mut [u8]) {
        Self::debug_request(self, request, response);
    }

    fn get_pose(&self) -> DriverPose {
        Self::get_pose(self)
    }
}

impl BodyTrackerSink for FakeViveTracker {
    fn on_pose_updated(&self, target_timestamp_ns: u64, sample: BodyTrackerSample) {
        Self::on_pose_updated(self, target_timestamp_ns, sample);
    }
}

/// Builder for [`FakeViveTracker`].
pub struct FakeViveTrackerBuilder {
    name: String,
    config: TrackerConfig,
    host: Option<Arc<dyn DriverHost>>,
    clock: Option<Arc<dyn Clock>>,
}

impl fmt::Debug for FakeViveTrackerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FakeViveTrackerBuilder")
            .field("name", &self.name)
            .field("config", &self.config)
            .field("custom_host", &self.host.is_some())
            .field("clock", &self.clock)
            .finish()
    }
}

impl FakeViveTrackerBuilder {
    /// Use `config` instead of the default.
    #[must_use]
    pub fn config(mut self, config: TrackerConfig) -> Self {
        self.config = config;
        self
    }

    /// Register properties with and push poses to `host`.
    #[must_use]
    pub fn host(mut self, host: Arc<dyn DriverHost>) -> Self {
        self.host = Some(host);
        self
    }

    /// Derive time offsets and staleness from `clock`, which must tick in the
    /// pipeline's timestamp domain.
    #[must_use]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the tracker.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, or if it enables
    /// staleness without a clock.
    pub fn build(self) -> TrackerResult<FakeViveTracker> {
        self.config.validate()?;
        if self.config.stale_pose_timeout_ms.is_some() && self.clock.is_none() {
            return Err(TrackerError::invalid_configuration(
                "stale_pose_timeout_ms requires a clock",
            ));
        }
        let host: Arc<dyn DriverHost> = match self.host {
            Some(host) => host,
            None => Arc::new(NullHost),
        };
        Ok(FakeViveTracker::from_parts(
            TrackerNames::new(self.name),
            self.config,
            host,
            self.clock,
        ))
    }
}
