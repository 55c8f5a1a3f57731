mod explain;

use jobscreen::{Vocabulary, analyze_verbose_with, logging, report};
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("Error: input file not found. Provide a valid .txt file path.")]
    NotFound,

    #[error("Error: input must be a .txt file.")]
    NotText,

    #[error("Error: unable to read file ({0}).")]
    Read(#[from] io::Error),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Usage(_) => 2,
            CliError::NotFound | CliError::NotText | CliError::Read(_) => 1,
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run() -> Result<(), CliError> {
    let config = match parse_args(std::env::args().skip(1))? {
        Command::Run(config) => config,
        Command::Help => {
            println!("{}", help_text());
            return Ok(());
        }
        Command::Version => {
            println!("jobscreen {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
    };

    logging::init_logging(io::stderr().is_terminal());

    let text = load_posting(&config.path)?;
    tracing::debug!(path = %config.path.display(), bytes = text.len(), "loaded posting");

    let run = analyze_verbose_with(&text, Vocabulary::builtin());
    println!("{}", report::format_report(&run.signals, &run.verdict));
    if config.explain {
        println!("{}", explain::render(&run, config.color));
    }
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Run(CliConfig),
    Help,
    Version,
}

#[derive(Debug, PartialEq, Eq)]
struct CliConfig {
    path: PathBuf,
    explain: bool,
    color: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Command, CliError> {
    let mut path: Option<PathBuf> = None;
    let mut explain = false;
    let mut color = io::stdout().is_terminal();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--explain" => explain = true,
            "--color" => color = true,
            "--no-color" => color = false,
            "--" => {
                if let Some(rest) = args.next() {
                    set_path(&mut path, rest)?;
                }
                if args.next().is_some() {
                    return Err(CliError::Usage("error: expected a single input path".to_string()));
                }
                break;
            }
            _ if arg.starts_with('-') => {
                return Err(CliError::Usage(format!("error: unknown option '{arg}'")));
            }
            _ => set_path(&mut path, arg)?,
        }
    }

    let path = path.ok_or_else(|| CliError::Usage(format!("error: no input file provided\n\n{}", help_text())))?;
    Ok(Command::Run(CliConfig { path, explain, color }))
}

fn set_path(slot: &mut Option<PathBuf>, value: String) -> Result<(), CliError> {
    if slot.is_some() {
        return Err(CliError::Usage("error: expected a single input path".to_string()));
    }
    *slot = Some(PathBuf::from(value));
    Ok(())
}

/// Read a `.txt` posting, replacing invalid UTF-8 with U+FFFD.
fn load_posting(path: &Path) -> Result<String, CliError> {
    if !path.is_file() {
        return Err(CliError::NotFound);
    }
    let is_txt =
        path.file_name().is_some_and(|name| name.to_string_lossy().to_ascii_lowercase().ends_with(".txt"));
    if !is_txt {
        return Err(CliError::NotText);
    }

    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn help_text() -> String {
    format!(
        "jobscreen {version}

Screens a plain-text job posting for entry-level friendliness.

Usage:
  jobscreen [OPTIONS] [--] <posting.txt>

Options:
  --explain                  Print signals, rule evaluation and timing after the report.
  --color                    Force ANSI color in the explain trace.
  --no-color                 Disable ANSI color in the explain trace.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  {log_env}=<filter>       Log filter (tracing EnvFilter syntax). Default: {default_filter}

Exit codes:
  0  Success.
  1  Missing, non-.txt or unreadable input file.
  2  Invalid arguments.
",
        version = env!("CARGO_PKG_VERSION"),
        log_env = logging::LOG_ENV,
        default_filter = logging::DEFAULT_FILTER,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_path_and_flags() {
        let cmd = parse_args(args(&["--explain", "--no-color", "posting.txt"])).unwrap();
        assert_eq!(cmd, Command::Run(CliConfig { path: "posting.txt".into(), explain: true, color: false }));

        let cmd = parse_args(args(&["--color", "--", "-odd.txt"])).unwrap();
        assert_eq!(cmd, Command::Run(CliConfig { path: "-odd.txt".into(), explain: false, color: true }));
    }

    #[test]
    fn help_and_version_short_circuit() {
        assert_eq!(parse_args(args(&["a.txt", "--help"])).unwrap(), Command::Help);
        assert_eq!(parse_args(args(&["-V"])).unwrap(), Command::Version);
    }

    #[test]
    fn usage_errors_exit_2() {
        let cases: [&[&str]; 3] = [&["--bogus"], &[], &["a.txt", "b.txt"]];
        for bad in cases {
            let err = parse_args(args(bad)).unwrap_err();
            assert!(matches!(err, CliError::Usage(_)), "{bad:?}");
            assert_eq!(err.exit_code(), 2);
        }
    }

    #[test]
    fn missing_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_posting(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, CliError::NotFound));
        assert_eq!(err.to_string(), "Error: input file not found. Provide a valid .txt file path.");
        assert_eq!(err.exit_code(), 1);

        assert!(matches!(load_posting(dir.path()), Err(CliError::NotFound)));
    }

    #[test]
    fn non_txt_extension_is_rejected() {
        let file = tempfile::Builder::new().suffix(".md").tempfile().unwrap();
        let err = load_posting(file.path()).unwrap_err();
        assert!(matches!(err, CliError::NotText));
        assert_eq!(err.to_string(), "Error: input must be a .txt file.");
    }

    #[test]
    fn bare_dot_txt_name_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".txt");
        std::fs::write(&path, "Junior developer").unwrap();
        assert_eq!(load_posting(&path).unwrap(), "Junior developer");

        let path = dir.path().join("notes.txt.bak");
        std::fs::write(&path, "Junior developer").unwrap();
        assert!(matches!(load_posting(&path), Err(CliError::NotText)));
    }

    #[test]
    fn reads_txt_lossily_in_any_case() {
        let mut file = tempfile::Builder::new().suffix(".TXT").tempfile().unwrap();
        file.write_all(b"Junior \xff Rust developer").unwrap();

        let text = load_posting(file.path()).unwrap();
        assert_eq!(text, "Junior \u{FFFD} Rust developer");
    }

    #[test]
    fn read_error_mentions_cause() {
        let err = CliError::from(io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"));
        assert_eq!(err.to_string(), "Error: unable to read file (permission denied).");
        assert_eq!(err.exit_code(), 1);
    }
}
