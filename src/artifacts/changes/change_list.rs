use std::collections::HashSet;
use std::ops::Deref;
use tracing::debug;

/// Itemized status in front of each path rsync reports.
///
/// Matches up to the first run of `+`, run of `.` or the word `deleting`,
/// followed by the padding spaces before the file name.
const STATUS_PREFIX_REGEX: &str = r"^.*?(?:\++|\.+|deleting) +";

/// Relative paths rsync would touch, in the order rsync reported them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeList {
    paths: Vec<String>,
}

impl ChangeList {
    /// Parse dry-run output, keeping only `targets` when it is not empty.
    pub fn parse(output: &str, targets: &[String]) -> anyhow::Result<Self> {
        let status_prefix = regex::Regex::new(STATUS_PREFIX_REGEX)?;
        let mut seen = HashSet::new();

        let paths = output
            .lines()
            .map(|line| line.trim_end_matches(['\n', '\r']))
            .map(|line| status_prefix.replace(line, "").into_owned())
            .filter(|path| !path.is_empty())
            .filter(|path| targets.is_empty() || targets.contains(path))
            .filter(|path| seen.insert(path.clone()))
            .collect::<Vec<_>>();

        debug!(count = paths.len(), "parsed change list");

        Ok(Self { paths })
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }
}

impl Deref for ChangeList {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.paths
    }
}
