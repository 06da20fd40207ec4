//! Backend test support utilities
//!
//! This crate provides utilities specifically for backend testing: unified
//! logging initialization, problem-details assertions and unique test data
//! helpers.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;
