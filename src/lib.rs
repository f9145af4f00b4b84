//! Difference verification for rsync
//!
//! `rsyncdiff` runs rsync in dry-run mode between two trees, parses the
//! itemized change list and shows what would change, either as unified or
//! context diffs or one file pair at a time in vimdiff.
//!
//! - `areas`: the two compared trees and the comparison session
//! - `artifacts`: configuration, change lists, diff data and external processes
//! - `commands`: the operations exposed by the binary

pub mod areas;
pub mod artifacts;
pub mod commands;
