use crate::areas::comparison::Comparison;
use crate::artifacts::changes::change_list::ChangeList;
use crate::artifacts::process::tool::{ShellCommand, Tool};
use std::io::Write;
use tracing::info;

impl Comparison {
    /// Dry-run rsync between the two trees and parse what it would change.
    pub fn changes(&self) -> anyhow::Result<ChangeList> {
        let config = self.config();
        let command = ShellCommand::build(
            Tool::Rsync,
            &[config.from.as_str(), config.to.as_str()],
            config,
        );

        let output = command.output(&config.shell)?;
        let changes = ChangeList::parse(&String::from_utf8_lossy(&output), &config.target_files)?;

        info!(
            from = %config.from,
            to = %config.to,
            changed = changes.len(),
            "rsync dry run finished"
        );

        Ok(changes)
    }

    /// Print one changed path per line.
    pub fn name_only(&self, changes: &ChangeList) -> anyhow::Result<i32> {
        for path in changes.iter() {
            writeln!(self.writer(), "{path}")?;
        }
        self.writer().flush()?;

        Ok(0)
    }
}
