use anyhow::Context;
use derive_new::new;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Number of zero bytes after which a file is treated as binary
pub const BINARY_ZERO_BYTES: usize = 4;

/// One side of the comparison, rooted at the path given to rsync.
#[derive(Debug, Clone, new)]
pub struct Tree {
    root: PathBuf,
}

impl Tree {
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Lines of a diffable file, or nothing when the file is absent,
    /// a directory or binary.
    pub fn read_lines(&self, relative: &str) -> anyhow::Result<Vec<String>> {
        let path = self.resolve(relative);
        if !is_diffable(&path) {
            return Ok(Vec::new());
        }

        let bytes = std::fs::read(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        Ok(split_lines(&String::from_utf8_lossy(&bytes)))
    }
}

/// Whether anything lives at `path`; any stat error counts as absent.
pub fn exists(path: &Path) -> bool {
    std::fs::metadata(path).is_ok()
}

/// Regular content that can be shown as text.
pub fn is_diffable(path: &Path) -> bool {
    match std::fs::metadata(path) {
        Ok(metadata) => !(metadata.is_dir() || is_binary(path)),
        Err(_) => false,
    }
}

/// Unreadable files are not considered binary.
pub fn is_binary(path: &Path) -> bool {
    match std::fs::read(path) {
        Ok(bytes) => {
            let binary = is_binary_content(&bytes);
            if binary {
                debug!(path = %path.display(), "skipping binary file");
            }
            binary
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "cannot inspect file content");
            false
        }
    }
}

pub fn is_binary_content(bytes: &[u8]) -> bool {
    bytes
        .iter()
        .filter(|&&byte| byte == 0)
        .take(BINARY_ZERO_BYTES)
        .count()
        >= BINARY_ZERO_BYTES
}

/// Split text into lines, keeping each line's terminator.
pub fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(str::to_string).collect()
}
