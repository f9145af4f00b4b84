use crate::areas::tree::{Tree, exists, is_diffable};
use derive_new::new;
use std::path::Path;

/// Absent side of a pair
pub const NO_FILE: &str = "";

/// Files handed to vimdiff for one changed path.
///
/// A side holding [`NO_FILE`] is missing or not diffable; at least one
/// side is always a real file.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DiffTargetPair {
    pub from: String,
    pub to: String,
}

impl DiffTargetPair {
    pub fn resolve(relative: &str, from: &Tree, to: &Tree) -> Option<Self> {
        let from_path = from.resolve(relative);
        let to_path = to.resolve(relative);
        let from_ok = exists(&from_path) && is_diffable(&from_path);
        let to_ok = exists(&to_path) && is_diffable(&to_path);

        let side = |ok: bool, path: &Path| {
            if ok {
                path.to_string_lossy().into_owned()
            } else {
                NO_FILE.to_string()
            }
        };

        (from_ok || to_ok).then(|| {
            Self::new(
                side(from_ok, from_path.as_path()),
                side(to_ok, to_path.as_path()),
            )
        })
    }

    pub fn collect(paths: &[String], from: &Tree, to: &Tree) -> Vec<Self> {
        paths
            .iter()
            .filter_map(|relative| Self::resolve(relative, from, to))
            .collect()
    }

    /// Editor arguments; the missing side is left out so the editor opens
    /// the present file on its own.
    pub fn editor_args(&self) -> Vec<&str> {
        [self.from.as_str(), self.to.as_str()]
            .into_iter()
            .filter(|path| *path != NO_FILE)
            .collect()
    }
}
