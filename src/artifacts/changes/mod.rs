//! Change lists reported by rsync
//!
//! - `change_list`: parsing itemized dry-run output into relative paths

pub mod change_list;
