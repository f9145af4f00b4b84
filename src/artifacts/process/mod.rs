//! External process plumbing
//!
//! - `tool`: composing shell command lines for rsync, the display pipeline and vimdiff
//! - `runner`: executing those command lines and reporting exit codes

pub mod runner;
pub mod tool;
