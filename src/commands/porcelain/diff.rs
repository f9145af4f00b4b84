use crate::areas::comparison::Comparison;
use crate::artifacts::changes::change_list::ChangeList;
use crate::artifacts::config::DiffMode;
use crate::artifacts::diff::diff_info::DiffInfo;
use crate::artifacts::diff::diff_target::DiffTargetPair;
use crate::artifacts::diff::format::DiffFormat;
use crate::artifacts::process::tool::{ShellCommand, Tool};
use anyhow::Context;
use std::io::Write;
use tracing::{debug, info};

const SPOOL_PREFIX: &str = "rsyncdiff";

impl Comparison {
    /// Show every changed path in the configured mode and return the exit
    /// code of the last external program.
    pub fn diff(&self, changes: &ChangeList) -> anyhow::Result<i32> {
        match self.config().mode {
            DiffMode::Unified => self.text_diff(changes, DiffFormat::Unified),
            DiffMode::Context => self.text_diff(changes, DiffFormat::Context),
            DiffMode::Interactive => self.interactive_diff(changes),
        }
    }

    fn text_diff(&self, changes: &ChangeList, format: DiffFormat) -> anyhow::Result<i32> {
        let config = self.config();
        let mut spool = tempfile::Builder::new()
            .prefix(SPOOL_PREFIX)
            .tempfile()
            .context("failed to create spool file")?;

        for path in changes.iter() {
            let info = DiffInfo::build(path, self.from_tree(), self.to_tree())?;
            let rendered = info.render(format, config.context_lines);
            debug!(path = %path, bytes = rendered.len(), "rendered diff");

            spool
                .write_all(rendered.as_bytes())
                .with_context(|| format!("failed to write diff of {path} to spool file"))?;
        }
        spool.flush().context("failed to flush spool file")?;

        let spool_path = spool.path().to_string_lossy().into_owned();
        let command = ShellCommand::build(Tool::Cat, &[spool_path.as_str()], config);

        command.run(&config.shell)
    }

    fn interactive_diff(&self, changes: &ChangeList) -> anyhow::Result<i32> {
        let config = self.config();
        let pairs = DiffTargetPair::collect(changes, self.from_tree(), self.to_tree());
        info!(pairs = pairs.len(), "opening vimdiff");

        for pair in &pairs {
            let command = ShellCommand::build(Tool::Vimdiff, &pair.editor_args(), config);
            let code = command.run(&config.shell)?;
            if code != 0 {
                debug!(code, from = %pair.from, to = %pair.to, "vimdiff failed, stopping");
                return Ok(code);
            }
        }

        Ok(0)
    }
}
