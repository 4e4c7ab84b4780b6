//! Shared test utilities for the ALVR tracker driver crates.
//!
//! # Modules
//!
//! - [`mod@must`] - Unwrap helpers with `#[track_caller]` panic locations
//! - [`assertions`] - Float and pose assertions
//! - [`tracking`] - Allocation tracking for hot-path tests
//! - [`mock`] - Recording and failing [`DriverHost`](alvr_driver_abi::DriverHost) mocks
//! - [`fixtures`] - Marker samples and tracker names
//! - [`prelude`] - Convenience re-exports
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! alvr-test-helpers = { workspace = true }
//! ```
//!
//! ```rust,ignore
//! use alvr_test_helpers::prelude::*;
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![allow(clippy::unwrap_used, clippy::panic)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod assertions;
pub mod must;
pub mod prelude;

#[cfg(feature = "tracking")]
#[cfg_attr(docsrs, doc(cfg(feature = "tracking")))]
pub mod tracking;

#[cfg(all(test, feature = "tracking"))]
#[global_allocator]
static GLOBAL_TEST: tracking::TrackingAllocator = tracking::TrackingAllocator;

#[cfg(feature = "mock")]
#[cfg_attr(docsrs, doc(cfg(feature = "mock")))]
pub mod mock;

#[cfg(feature = "fixtures")]
#[cfg_attr(docsrs, doc(cfg(feature = "fixtures")))]
pub mod fixtures;

pub use must::*;

#[cfg(feature = "tracking")]
pub use tracking::track;
