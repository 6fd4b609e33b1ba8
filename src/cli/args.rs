//! Command-line argument parsing for HealthHub.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

use std::path::PathBuf;

/// Options for a TUI session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Initial view as given: `--view <name>` or a bare `#name`
    pub view: Option<String>,
    /// Overrides the data directory from the environment
    pub data_dir: Option<PathBuf>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    Run(RunOptions),
}

/// Parse command-line arguments and return the appropriate command.
///
/// Unknown flags are ignored. The view name is not checked here; an
/// unknown name falls back to the home view at startup.
///
/// # Examples
///
/// ```
/// use healthhub::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["healthhub".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    // Skip the program name
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--view" => options.view = args.next(),
            "--data-dir" => options.data_dir = args.next().map(PathBuf::from),
            other => {
                if let Some(view) = other.strip_prefix("--view=") {
                    options.view = Some(view.to_string());
                } else if let Some(dir) = other.strip_prefix("--data-dir=") {
                    options.data_dir = Some(PathBuf::from(dir));
                } else if other.starts_with('#') {
                    options.view = Some(other.to_string());
                }
            }
        }
    }
    CliCommand::Run(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let argv: Vec<String> = std::iter::once("healthhub")
            .chain(args.iter().copied())
            .map(String::from)
            .collect();
        parse_args(argv.into_iter())
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flags() {
        assert_eq!(parse(&["--help"]), CliCommand::Help);
        assert_eq!(parse(&["--view", "fitness", "-h"]), CliCommand::Help);
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), CliCommand::Run(RunOptions::default()));
    }

    #[test]
    fn test_parse_view_forms() {
        let expected = |view: &str| {
            CliCommand::Run(RunOptions {
                view: Some(view.to_string()),
                data_dir: None,
            })
        };
        assert_eq!(parse(&["--view", "fitness"]), expected("fitness"));
        assert_eq!(parse(&["--view=mental"]), expected("mental"));
        assert_eq!(parse(&["#contact"]), expected("#contact"));
    }

    #[test]
    fn test_parse_data_dir() {
        assert_eq!(
            parse(&["--data-dir", "/tmp/hub", "#nutrition"]),
            CliCommand::Run(RunOptions {
                view: Some("#nutrition".to_string()),
                data_dir: Some(PathBuf::from("/tmp/hub")),
            })
        );
    }

    #[test]
    fn test_parse_unknown_flag_and_missing_value() {
        assert_eq!(parse(&["--unknown"]), CliCommand::Run(RunOptions::default()));
        assert_eq!(parse(&["--view"]), CliCommand::Run(RunOptions::default()));
    }
}
