//! Display models for CLI output
//!
//! Converts control-plane records into rows ready for table or JSON output.

pub mod display;

pub use display::{AppRow, Directory};
