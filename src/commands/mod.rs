//! rsyncdiff operations
//!
//! - `plumbing`: running rsync and listing the changed paths
//! - `porcelain`: showing the differences (unified, context or vimdiff)

pub mod plumbing;
pub mod porcelain;
