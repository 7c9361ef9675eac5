//! Common test utilities for grib-nearest.
//!
//! This module provides shared utilities for the integration tests.

// Not every test binary uses every helper
#![allow(dead_code)]

pub mod log_capture;
pub mod test_data;
