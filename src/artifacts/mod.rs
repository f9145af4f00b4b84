//! Data structures and helpers
//!
//! - `changes`: change lists parsed from rsync output
//! - `config`: run configuration
//! - `core`: shell quoting and program lookup
//! - `diff`: per-file diff data and rendering
//! - `process`: composing and running external commands

pub mod changes;
pub mod config;
pub mod core;
pub mod diff;
pub mod process;
