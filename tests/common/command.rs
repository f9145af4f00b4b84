use crate::common::file::{write_script, write_text};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::{Path, PathBuf};

pub const RSYNC_ARGS_LOG: &str = "rsync.args";
pub const VIMDIFF_LOG: &str = "vimdiff.log";

/// Two trees to compare plus a directory holding fake external tools.
pub struct Workspace {
    pub dir: TempDir,
    pub from: PathBuf,
    pub to: PathBuf,
    pub bin: PathBuf,
}

#[fixture]
pub fn workspace() -> Workspace {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let from = dir.path().join("from");
    let to = dir.path().join("to");
    let bin = dir.path().join("bin");
    for path in [&from, &to, &bin] {
        std::fs::create_dir_all(path).expect("Failed to create directory");
    }

    Workspace { dir, from, to, bin }
}

impl Workspace {
    pub fn write_from(&self, relative: &str, content: &str) {
        write_text(self.from.join(relative), content);
    }

    pub fn write_to(&self, relative: &str, content: &str) {
        write_text(self.to.join(relative), content);
    }

    pub fn from_path(&self, relative: &str) -> String {
        self.from.join(relative).display().to_string()
    }

    pub fn to_path(&self, relative: &str) -> String {
        self.to.join(relative).display().to_string()
    }

    /// rsync stand-in printing `lines` as its itemized change list.
    pub fn fake_rsync(&self, lines: &[&str]) -> PathBuf {
        let body = format!(
            "printf '%s\\n' \"$@\" > '{}'\ncat <<'EOF'\n{}\nEOF",
            self.bin.join(RSYNC_ARGS_LOG).display(),
            lines.join("\n")
        );
        write_script(&self.bin, "rsync", &body)
    }

    pub fn failing_rsync(&self, code: i32) -> PathBuf {
        write_script(
            &self.bin,
            "rsync",
            &format!("echo 'rsync: change_dir failed' >&2\nexit {code}"),
        )
    }

    /// vimdiff stand-in logging its arguments, one invocation per line.
    pub fn fake_vimdiff(&self, code: i32) -> PathBuf {
        let body = format!(
            "echo \"$*\" >> '{}'\nexit {code}",
            self.bin.join(VIMDIFF_LOG).display()
        );
        write_script(&self.bin, "vimdiff", &body)
    }

    pub fn filter_script(&self, name: &str, body: &str) -> PathBuf {
        write_script(&self.bin, name, body)
    }

    pub fn read_log(&self, name: &str) -> String {
        std::fs::read_to_string(self.bin.join(name)).unwrap_or_default()
    }

    /// rsyncdiff with the given options, followed by both trees.
    pub fn rsyncdiff(&self, rsync: &Path, args: &[&str]) -> Command {
        let mut cmd = run_rsyncdiff(args);
        cmd.env("RSYNCDIFF_RSYNC", rsync);
        cmd.arg(&self.from).arg(&self.to);
        cmd
    }
}

pub fn run_rsyncdiff(args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("rsyncdiff").expect("Failed to find rsyncdiff binary");
    cmd.env("SHELL", "/bin/sh");
    cmd.env_remove("RSYNCDIFF_LOG");
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}
