//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - Math types and axis helpers
//! - Fixed-step time management
//! - Logging utilities

pub mod math;
pub mod time;
pub mod logging;
