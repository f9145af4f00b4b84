//! Core utilities and shared helpers
//!
//! Shell quoting and program lookup used when composing external command
//! lines.

use is_executable::IsExecutable;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Quote a string as a single shell word.
///
/// Wraps the string in single quotes and escapes embedded single quotes
/// using the `'\''` technique (end quote, escaped quote, start quote).
pub fn shell_escape(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}

/// Resolve a program the way the shell would, using the current `PATH`.
///
/// Programs given with a path separator are checked directly.
pub fn find_program(program: &str) -> Option<PathBuf> {
    find_program_in(program, std::env::var_os("PATH").as_deref())
}

pub fn find_program_in(program: &str, search_path: Option<&OsStr>) -> Option<PathBuf> {
    if program.is_empty() {
        return None;
    }

    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return is_runnable(candidate).then(|| candidate.to_path_buf());
    }

    std::env::split_paths(search_path?)
        .map(|dir| dir.join(program))
        .find(|path| is_runnable(path))
}

fn is_runnable(path: &Path) -> bool {
    path.is_file() && path.is_executable()
}
