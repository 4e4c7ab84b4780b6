//! Tracker configuration.
//!
//! [`TrackerConfig`] carries the hardware profile advertised to the host and
//! the lifecycle policy knobs. Every field has a default, so a partial JSON
//! document is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{TrackerError, TrackerResult};

/// Hardware identity the tracker presents to the host.
///
/// The defaults make the host treat the device as a Vive Tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerProfile {
    /// Tracking system the device claims to belong to.
    pub tracking_system_name: String,
    /// Hardware model number.
    pub model_number: String,
    /// Manufacturer name.
    pub manufacturer_name: String,
    /// Render model shown by the host.
    pub render_model_name: String,
    /// Controller type used for input bindings.
    pub controller_type: String,
    /// Input profile resource path.
    pub input_profile_path: String,
}

impl Default for TrackerProfile {
    fn default() -> Self {
        Self {
            tracking_system_name: "lighthouse".to_string(),
            model_number: "Vive Tracker Pro MV".to_string(),
            manufacturer_name: "HTC".to_string(),
            render_model_name: "{htc}vr_tracker_vive_1_0".to_string(),
            controller_type: "vive_tracker".to_string(),
            input_profile_path: "{htc}/input/vive_tracker_profile.json".to_string(),
        }
    }
}

impl TrackerProfile {
    fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("tracking_system_name", &self.tracking_system_name),
            ("model_number", &self.model_number),
            ("manufacturer_name", &self.manufacturer_name),
            ("render_model_name", &self.render_model_name),
            ("controller_type", &self.controller_type),
            ("input_profile_path", &self.input_profile_path),
        ]
    }
}

/// Tracker configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Hardware identity registered on activation.
    pub profile: TrackerProfile,
    /// Extra seconds added to every derived pose time offset.
    pub pose_time_offset_s: f64,
    /// Age after which a pose is reported as out of range. `None` disables.
    pub stale_pose_timeout_ms: Option<u64>,
    /// Reset the pose to its default on deactivation.
    pub reset_pose_on_deactivate: bool,
    /// Store updates that arrive while the tracker is not active.
    pub accept_updates_while_inactive: bool,
    /// Push each accepted update to the host while active.
    pub push_updates_to_host: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            profile: TrackerProfile::default(),
            pose_time_offset_s: 0.0,
            stale_pose_timeout_ms: None,
            reset_pose_on_deactivate: false,
            accept_updates_while_inactive: true,
            push_updates_to_host: true,
        }
    }
}

impl TrackerConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the time offset is not finite, the stale timeout
    /// is zero, or a profile string is empty.
    pub fn validate(&self) -> TrackerResult<()> {
        if !self.pose_time_offset_s.is_finite() {
            return Err(TrackerError::invalid_configuration(
                "pose_time_offset_s must be finite",
            ));
        }
        if self.stale_pose_timeout_ms == Some(0) {
            return Err(TrackerError::invalid_configuration(
                "stale_pose_timeout_ms must be greater than 0",
            ));
        }
        for (field, value) in self.profile.fields() {
            if value.is_empty() {
                return Err(TrackerError::invalid_configuration(format!(
                    "profile.{field} must not be empty"
                )));
            }
        }
        Ok(())
    }

    /// Stale timeout in nanoseconds, if enabled.
    #[must_use]
    pub fn stale_pose_timeout_ns(&self) -> Option<u64> {
        self.stale_pose_timeout_ms
            .map(|ms| ms.saturating_mul(1_000_000))
    }

    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the result is invalid.
    pub fn from_json_str(json: &str) -> TrackerResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its content is invalid.
    pub fn from_json_file(path: impl AsRef<Path>) -> TrackerResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|source| TrackerError::config_io(path.display().to_string(), source))?;
        Self::from_json_str(&content)
    }

    /// Create a configuration builder.
    #[must_use]
    pub fn builder() -> TrackerConfigBuilder {
        TrackerConfigBuilder::default()
    }
}

/// Builder for [`TrackerConfig`].
#[derive(Debug, Default)]
pub struct TrackerConfigBuilder {
    config: TrackerConfig,
}

impl TrackerConfigBuilder {
    /// Set the hardware profile.
    #[must_use]
    pub fn profile(mut self, profile: TrackerProfile) -> Self {
        self.config.profile = profile;
        self
    }

    /// Set the extra pose time offset in seconds.
    #[must_use]
    pub fn pose_time_offset_s(mut self, seconds: f64) -> Self {
        self.config.pose_time_offset_s = seconds;
        self
    }

    /// Report poses older than `ms` milliseconds as out of range.
    #[must_use]
    pub fn stale_pose_timeout_ms(mut self, ms: u64) -> Self {
        self.config.stale_pose_timeout_ms = Some(ms);
        self
    }

    /// Never report poses as stale.
    #[must_use]
    pub fn no_stale_timeout(mut self) -> Self {
        self.config.stale_pose_timeout_ms = None;
        self
    }

    /// Reset the pose on deactivation.
    #[must_use]
    pub fn reset_pose_on_deactivate(mut self, reset: bool) -> Self {
        self.config.reset_pose_on_deactivate = reset;
        self
    }

    /// Store updates received while inactive.
    #[must_use]
    pub fn accept_updates_while_inactive(mut self, accept: bool) -> Self {
        self.config.accept_updates_while_inactive = accept;
        self
    }

    /// Push accepted updates to the host while active.
    #[must_use]
    pub fn push_updates_to_host(mut self, push: bool) -> Self {
        self.config.push_updates_to_host = push;
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> TrackerResult<TrackerConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
