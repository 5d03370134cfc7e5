//! symbol-dsl: convert HTML to the symbol DSL from the command line.
//!
//! Reads markup from a file or stdin, converts the children of `<body>` and
//! writes the result (plus a trailing newline) to stdout or a file. With
//! `--watch` the input file is polled and the output rewritten after every
//! change; conversion errors are shown as an `// error:` line and the watch
//! keeps running.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use symbol_dsl::{
    LiveConverter, Options, SiblingIndent, SymbolDslError, SymbolDslService, UnsupportedNodePolicy,
};
use tracing_subscriber::EnvFilter;

/// CLI flags
#[derive(Parser, Debug)]
#[command(name = "symbol-dsl", author, version, about)]
struct Cli {
    /// Input HTML file (`-` or omitted: stdin)
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Indentation of the separator line between sibling children
    #[arg(long, value_enum, default_value_t = SiblingIndentArg::Parent)]
    sibling_indent: SiblingIndentArg,

    /// Fail on node kinds other than element, text and comment
    #[arg(long)]
    strict: bool,

    /// Re-run the conversion whenever the input file changes
    #[arg(long)]
    watch: bool,

    /// Polling interval for --watch, in milliseconds
    #[arg(long, default_value_t = 500)]
    interval_ms: u64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SiblingIndentArg {
    /// Separator line at the parent's indentation
    Parent,
    /// Separator line aligned with the children
    Child,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            sibling_indent: match self.sibling_indent {
                SiblingIndentArg::Parent => SiblingIndent::Parent,
                SiblingIndentArg::Child => SiblingIndent::Child,
            },
            unsupported_nodes: if self.strict {
                UnsupportedNodePolicy::Error
            } else {
                UnsupportedNodePolicy::Skip
            },
        }
    }

    /// `None` means stdin
    fn input_path(&self) -> Option<&Path> {
        self.input.as_deref().filter(|path| *path != Path::new("-"))
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to read stdin: {0}")]
    Stdin(io::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to write stdout: {0}")]
    Stdout(io::Error),

    #[error("--watch requires an input file")]
    WatchNeedsFile,

    #[error(transparent)]
    Convert(#[from] SymbolDslError),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let service = SymbolDslService::with_options(cli.options());

    if cli.watch {
        return watch(cli, service);
    }

    let html = read_input(cli.input_path())?;
    let dsl = service.convert_html(&html)?;
    write_output(cli.output.as_deref(), &dsl)
}

fn watch(cli: &Cli, service: SymbolDslService) -> Result<(), CliError> {
    let path = cli.input_path().ok_or(CliError::WatchNeedsFile)?;
    let interval = Duration::from_millis(cli.interval_ms.max(1));

    let mut live = LiveConverter::new(service, read_input(Some(path))?);
    write_output(cli.output.as_deref(), live.output())?;
    tracing::info!(path = %path.display(), "watching for changes");

    loop {
        thread::sleep(interval);

        match refresh(&mut live, path) {
            Ok(true) => {
                if let Err(err) = write_output(cli.output.as_deref(), live.output()) {
                    tracing::warn!(error = %err, "could not write output");
                }
            }
            Ok(false) => {}
            Err(err) => tracing::warn!(error = %err, "could not read input, retrying"),
        }
    }
}

/// Re-read `path` and recompute when its content changed.
/// Returns whether the output changed.
fn refresh(live: &mut LiveConverter, path: &Path) -> Result<bool, CliError> {
    let html = read_input(Some(path))?;
    if html == live.input() {
        return Ok(false);
    }
    tracing::debug!(path = %path.display(), "input changed");
    Ok(live.update(&html))
}

fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut html = String::new();
            io::stdin().read_to_string(&mut html).map_err(CliError::Stdin)?;
            Ok(html)
        }
    }
}

fn write_output(path: Option<&Path>, dsl: &str) -> Result<(), CliError> {
    match path {
        Some(path) => fs::write(path, format!("{dsl}\n")).map_err(|source| CliError::Write {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{dsl}").map_err(CliError::Stdout)?;
            stdout.flush().map_err(CliError::Stdout)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_options_from_flags() {
        let cli = Cli::parse_from(["symbol-dsl", "--sibling-indent", "child", "--strict"]);
        let options = cli.options();
        assert_eq!(options.sibling_indent, SiblingIndent::Child);
        assert_eq!(options.unsupported_nodes, UnsupportedNodePolicy::Error);

        let defaults = Cli::parse_from(["symbol-dsl"]).options();
        assert_eq!(defaults.sibling_indent, SiblingIndent::Parent);
        assert_eq!(defaults.unsupported_nodes, UnsupportedNodePolicy::Skip);
    }

    #[test]
    fn test_dash_means_stdin() {
        assert_eq!(Cli::parse_from(["symbol-dsl", "-"]).input_path(), None);
        assert_eq!(Cli::parse_from(["symbol-dsl"]).input_path(), None);
        assert_eq!(
            Cli::parse_from(["symbol-dsl", "page.html"]).input_path(),
            Some(Path::new("page.html"))
        );
    }

    #[test]
    fn test_refresh_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        fs::write(&path, "<b>x</b>").unwrap();

        let mut live = LiveConverter::new(SymbolDslService::new(), read_input(Some(&path)).unwrap());
        assert!(!refresh(&mut live, &path).unwrap());

        fs::write(&path, "<i>y</i>").unwrap();
        assert!(refresh(&mut live, &path).unwrap());
        assert_eq!(live.output(), "'i(\n  \"y\"\n)");
    }

    #[test]
    fn test_refresh_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone.html");
        let mut live = LiveConverter::new(SymbolDslService::new(), "");
        assert!(matches!(refresh(&mut live, &path), Err(CliError::Read { .. })));
    }
}
