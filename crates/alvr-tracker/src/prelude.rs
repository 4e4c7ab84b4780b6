//! Prelude for tracker users.
//!
//! ```rust
//! use alvr_tracker::prelude::*;
//! ```

pub use crate::clock::{Clock, ManualClock, MonotonicClock};
pub use crate::config::{TrackerConfig, TrackerConfigBuilder, TrackerProfile};
pub use crate::error::{TrackerError, TrackerResult};
pub use crate::stats::TrackerStatsSnapshot;
pub use crate::tracker::{FakeViveTracker, FakeViveTrackerBuilder};

pub use alvr_driver_abi::prelude::*;
