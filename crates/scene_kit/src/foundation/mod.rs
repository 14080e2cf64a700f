//! Foundation module - Core utilities and types
//!
//! This module provides small building blocks used throughout the crate:
//! - Math types and planar (ground-plane) helpers
//! - Slice and vector helpers
//! - Duration formatting and ordinal suffixes
//! - Delayed callbacks
//! - Logging utilities

pub mod math;
pub mod collections;
pub mod time;
pub mod delay;
pub mod logging;
