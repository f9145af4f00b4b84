//! The compared trees
//!
//! - `comparison`: one run over a pair of trees
//! - `tree`: path resolution and file classification inside one tree

pub mod comparison;
pub mod tree;
