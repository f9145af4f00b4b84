//! Run configuration
//!
//! Everything the comparison needs is collected once at startup into a
//! [`RunConfig`] and never mutated afterwards.

use crate::artifacts::core::find_program;
use derive_new::new;
use std::path::PathBuf;

pub const DEFAULT_SHELL: &str = "/bin/sh";
/// Hunks show only the changed lines unless more context is asked for
pub const DEFAULT_CONTEXT_LINES: usize = 0;

/// How the changed files are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffMode {
    Unified,
    Context,
    Interactive,
}

impl DiffMode {
    /// Interactive wins over context, which wins over the unified default.
    pub fn select(interactive: bool, context: bool) -> Self {
        if interactive {
            DiffMode::Interactive
        } else if context {
            DiffMode::Context
        } else {
            DiffMode::Unified
        }
    }
}

/// Programs used for each external tool.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Tools {
    pub rsync: String,
    pub cat: String,
    pub colordiff: String,
    pub less: String,
    pub vimdiff: String,
}

impl Default for Tools {
    fn default() -> Self {
        Self {
            rsync: "rsync".to_string(),
            cat: "cat".to_string(),
            colordiff: "colordiff".to_string(),
            less: "less".to_string(),
            vimdiff: "vimdiff".to_string(),
        }
    }
}

#[derive(Debug, Clone, new)]
pub struct RunConfig {
    pub from: String,
    pub to: String,
    pub target_files: Vec<String>,
    pub excludes: Vec<String>,
    pub exclude_from: Option<PathBuf>,
    pub mode: DiffMode,
    pub colorize: bool,
    pub page: bool,
    pub context_lines: usize,
    pub tools: Tools,
    pub shell: String,
}

impl RunConfig {
    /// Shell from the `SHELL` environment variable, falling back to `/bin/sh`.
    pub fn shell_from_env() -> String {
        std::env::var("SHELL")
            .ok()
            .filter(|shell| !shell.is_empty())
            .unwrap_or_else(|| DEFAULT_SHELL.to_string())
    }

    /// Verify option combinations and that every needed program is installed.
    pub fn check_dependencies(&self) -> anyhow::Result<()> {
        if self.mode == DiffMode::Interactive && self.target_files.is_empty() {
            anyhow::bail!("vimdiff mode needs at least one --target-file");
        }

        let mut required = vec![&self.tools.rsync, &self.tools.cat];
        if self.colorize {
            required.push(&self.tools.colordiff);
        }
        if self.page {
            required.push(&self.tools.less);
        }
        if self.mode == DiffMode::Interactive {
            required.push(&self.tools.vimdiff);
        }

        for program in required {
            if find_program(program).is_none() {
                anyhow::bail!("install of {program} is necessary");
            }
        }

        Ok(())
    }
}
