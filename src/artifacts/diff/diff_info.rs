use crate::areas::tree::Tree;
use crate::artifacts::diff::format::{DiffFormat, render};
use derive_new::new;
use std::path::PathBuf;

pub type LineSet = Vec<String>;

/// Both sides of one changed path, ready to be rendered.
///
/// rsync's destination holds what is currently there, so the `to` tree is
/// the old side and the `from` tree the new one. Headers still name the
/// `from` path first.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DiffInfo {
    pub content_old: LineSet,
    pub content_new: LineSet,
    pub from_label: PathBuf,
    pub to_label: PathBuf,
}

impl DiffInfo {
    pub fn build(relative: &str, from: &Tree, to: &Tree) -> anyhow::Result<Self> {
        Ok(Self {
            content_old: to.read_lines(relative)?,
            content_new: from.read_lines(relative)?,
            from_label: from.resolve(relative),
            to_label: to.resolve(relative),
        })
    }

    pub fn render(&self, format: DiffFormat, context_lines: usize) -> String {
        render(
            format,
            &self.content_old,
            &self.content_new,
            &self.from_label.to_string_lossy(),
            &self.to_label.to_string_lossy(),
            context_lines,
        )
    }
}
