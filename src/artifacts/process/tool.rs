use crate::artifacts::config::RunConfig;
use crate::artifacts::core::shell_escape;
use std::fmt::Display;

/// Options passed to every rsync run: recursive, compress, itemize, links,
/// checksum, perms, owner, group and `-n` (dry run), plus deletion reporting.
pub const RSYNC_OPTIONS: [&str; 2] = ["-rzilcpogn", "--delete"];
pub const VIMDIFF_OPTIONS: [&str; 1] = ["-R"];
pub const LESS_OPTIONS: &str = "-Rr";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Rsync,
    Cat,
    Vimdiff,
}

impl Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Tool::Rsync => "rsync",
            Tool::Cat => "cat",
            Tool::Vimdiff => "vimdiff",
        };
        write!(f, "{name}")
    }
}

/// A single command line ready to be handed to the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    tool: Tool,
    line: String,
}

impl ShellCommand {
    pub fn build(tool: Tool, args: &[&str], config: &RunConfig) -> Self {
        let tools = &config.tools;
        let mut words = Vec::new();

        let line = match tool {
            Tool::Rsync => {
                words.push(shell_escape(&tools.rsync));
                words.extend(RSYNC_OPTIONS.iter().map(|opt| opt.to_string()));
                for pattern in &config.excludes {
                    words.push("--exclude".to_string());
                    words.push(shell_escape(pattern));
                }
                if let Some(path) = &config.exclude_from {
                    words.push(format!(
                        "--exclude-from={}",
                        shell_escape(&path.to_string_lossy())
                    ));
                }
                words.extend(args.iter().map(|arg| shell_escape(arg)));
                words.join(" ")
            }
            Tool::Vimdiff => {
                words.push(shell_escape(&tools.vimdiff));
                words.extend(VIMDIFF_OPTIONS.iter().map(|opt| opt.to_string()));
                words.extend(args.iter().map(|arg| shell_escape(arg)));
                words.join(" ")
            }
            Tool::Cat => {
                words.push(shell_escape(&tools.cat));
                words.extend(args.iter().map(|arg| shell_escape(arg)));
                let mut line = words.join(" ");
                if config.colorize {
                    line.push_str(&format!(" | {}", shell_escape(&tools.colordiff)));
                }
                if config.page {
                    line.push_str(&format!(" | {} {LESS_OPTIONS}", shell_escape(&tools.less)));
                }
                line
            }
        };

        Self { tool, line }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn line(&self) -> &str {
        &self.line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::config::{DEFAULT_CONTEXT_LINES, DiffMode, Tools};
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};
    use std::path::PathBuf;

    #[fixture]
    fn config() -> RunConfig {
        RunConfig::new(
            "src/".to_string(),
            "dst/".to_string(),
            Vec::new(),
            Vec::new(),
            None,
            DiffMode::Unified,
            false,
            false,
            DEFAULT_CONTEXT_LINES,
            Tools::default(),
            "/bin/sh".to_string(),
        )
    }

    #[rstest]
    fn rsync_command_is_always_a_dry_run(config: RunConfig) {
        let command = ShellCommand::build(Tool::Rsync, &["src/", "dst/"], &config);

        assert_eq!(command.tool(), Tool::Rsync);
        assert_eq!(
            command.line(),
            "'rsync' -rzilcpogn --delete 'src/' 'dst/'"
        );
        let flags = command.line().split(' ').nth(1).unwrap_or_default();
        assert!(flags.starts_with('-') && flags.contains('n'));
    }

    #[rstest]
    fn rsync_command_appends_excludes_before_trees(mut config: RunConfig) {
        config.excludes = vec!["*.log".to_string(), "tmp/".to_string()];
        config.exclude_from = Some(PathBuf::from("/etc/excludes list"));

        let command = ShellCommand::build(Tool::Rsync, &["src/", "dst/"], &config);

        assert_eq!(
            command.line(),
            "'rsync' -rzilcpogn --delete --exclude '*.log' --exclude 'tmp/' \
             --exclude-from='/etc/excludes list' 'src/' 'dst/'"
        );
    }

    #[rstest]
    fn vimdiff_command_is_read_only(config: RunConfig) {
        let command = ShellCommand::build(Tool::Vimdiff, &["/a/x.txt", "/b/x.txt"], &config);

        assert_eq!(command.line(), "'vimdiff' -R '/a/x.txt' '/b/x.txt'");
    }

    #[rstest]
    #[case(false, false, "'cat' '/tmp/spool'")]
    #[case(true, false, "'cat' '/tmp/spool' | 'colordiff'")]
    #[case(false, true, "'cat' '/tmp/spool' | 'less' -Rr")]
    #[case(true, true, "'cat' '/tmp/spool' | 'colordiff' | 'less' -Rr")]
    fn display_pipeline_stages_follow_flags(
        mut config: RunConfig,
        #[case] colorize: bool,
        #[case] page: bool,
        #[case] expected: &str,
    ) {
        config.colorize = colorize;
        config.page = page;

        let command = ShellCommand::build(Tool::Cat, &["/tmp/spool"], &config);

        assert_eq!(command.line(), expected);
    }
}
