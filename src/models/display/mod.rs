//! Display model implementations for table and JSON output

mod app;

pub use app::{AppRow, Directory};
