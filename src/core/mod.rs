//! Core utilities for the weekly projection CLI
//!
//! - `files`: schedule/snapshot file reading and report writing

pub mod files;

pub use files::{default_schedule_path, read_to_string, write_string};
