//! Plumbing operations
//!
//! - `changes`: dry-run rsync and parse its change list

pub mod changes;
