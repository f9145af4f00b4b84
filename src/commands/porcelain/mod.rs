//! Porcelain operations
//!
//! - `diff`: present every changed path in the configured mode

pub mod diff;
