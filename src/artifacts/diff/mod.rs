//! Per-file difference data and rendering
//!
//! - `diff_info`: both sides of a changed path as line sequences
//! - `diff_target`: file pairs handed to the interactive editor
//! - `format`: unified and context diff output

pub mod diff_info;
pub mod diff_target;
pub mod format;
