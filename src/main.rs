use clap::{ArgAction, CommandFactory, Parser};
use colored::Colorize;
use is_terminal::IsTerminal;
use rsyncdiff::areas::comparison::Comparison;
use rsyncdiff::artifacts::config::{DEFAULT_CONTEXT_LINES, DiffMode, RunConfig, Tools};
use rsyncdiff::artifacts::process::runner::ToolFailed;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const SETUP_ERROR_CODE: i32 = 1;
const LOG_ENV: &str = "RSYNCDIFF_LOG";

#[derive(Parser)]
#[command(
    name = "rsyncdiff",
    version,
    about = "Difference verification tool of rsync command",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, value_name = "RSYNC-FROM", help = "Source tree passed to rsync")]
    from: String,
    #[arg(index = 2, value_name = "RSYNC-TO", help = "Destination tree passed to rsync")]
    to: String,
    #[arg(
        short = 't',
        long = "target-file",
        value_name = "PATH",
        help = "Difference acquisition object file (repeatable)"
    )]
    target_files: Vec<String>,
    #[arg(short = 'e', long = "exclude", value_name = "PATTERN", help = "rsync exclude option")]
    excludes: Vec<String>,
    #[arg(long = "exclude-from", value_name = "FILE", help = "rsync exclude-from option")]
    exclude_from: Option<PathBuf>,
    #[arg(short = 'v', long, help = "Produce a vimdiff. Specify also the -t option")]
    vimdiff: bool,
    #[arg(short = 'l', long, help = "Use less for output")]
    less: bool,
    #[arg(short = 'r', long, help = "Use colordiff for output")]
    colordiff: bool,
    #[arg(short = 'c', long = "context-diff", help = "Produce a context format diff")]
    context_diff: bool,
    // Unified is already the fallback when neither -v nor -c is given, so
    // the value never changes the mode.
    #[arg(
        long = "unified-diff",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = true,
        default_missing_value = "true",
        value_name = "BOOL",
        help = "Produce a unified format diff (default)"
    )]
    unified_diff: bool,
    #[arg(
        short = 'U',
        long = "context-lines",
        value_name = "N",
        default_value_t = DEFAULT_CONTEXT_LINES,
        help = "Lines of context around each change"
    )]
    context_lines: usize,
    #[arg(long = "name-only", help = "Only list the paths rsync would change")]
    name_only: bool,
    #[arg(long, help = "Log debug information to stderr")]
    debug: bool,
    #[arg(long, env = "RSYNCDIFF_RSYNC", default_value = "rsync", hide = true)]
    rsync_program: String,
    #[arg(long, env = "RSYNCDIFF_CAT", default_value = "cat", hide = true)]
    cat_program: String,
    #[arg(long, env = "RSYNCDIFF_COLORDIFF", default_value = "colordiff", hide = true)]
    colordiff_program: String,
    #[arg(long, env = "RSYNCDIFF_LESS", default_value = "less", hide = true)]
    less_program: String,
    #[arg(long, env = "RSYNCDIFF_VIMDIFF", default_value = "vimdiff", hide = true)]
    vimdiff_program: String,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        RunConfig::new(
            cli.from,
            cli.to,
            cli.target_files,
            cli.excludes,
            cli.exclude_from,
            DiffMode::select(cli.vimdiff, cli.context_diff),
            cli.colordiff,
            cli.less,
            cli.context_lines,
            Tools::new(
                cli.rsync_program,
                cli.cat_program,
                cli.colordiff_program,
                cli.less_program,
                cli.vimdiff_program,
            ),
            RunConfig::shell_from_env(),
        )
    }
}

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    if !std::io::stderr().is_terminal() {
        colored::control::set_override(false);
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            return SETUP_ERROR_CODE;
        }
        Err(err) => {
            let _ = err.print();
            return 0;
        }
    };

    init_logging(cli.debug);
    debug!(unified = cli.unified_diff, name_only = cli.name_only, "parsed options");

    let name_only = cli.name_only;
    let config = RunConfig::from(cli);
    if let Err(err) = config.check_dependencies() {
        eprintln!("{}", Cli::command().render_help());
        report(&err);
        return SETUP_ERROR_CODE;
    }

    let comparison = Comparison::new(config, Box::new(std::io::stdout()));
    let result = comparison.changes().and_then(|changes| {
        if name_only {
            comparison.name_only(&changes)
        } else {
            comparison.diff(&changes)
        }
    });

    match result {
        Ok(code) => code,
        Err(err) => {
            report(&err);
            match err.downcast_ref::<ToolFailed>() {
                Some(failed) => failed.code,
                None => SETUP_ERROR_CODE,
            }
        }
    }
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn report(err: &anyhow::Error) {
    eprintln!("{} {err:#}", "error:".red().bold());
}
