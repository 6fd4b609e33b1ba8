//! CLI module for HealthHub.
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing
//! - Version and usage display
//!
//! # Usage
//!
//! The CLI dispatcher should be called early in main() to handle
//! informational flags before initializing the TUI:
//!
//! ```ignore
//! use healthhub::cli::{parse_args, run_cli_command};
//!
//! let options = run_cli_command(parse_args(std::env::args()));
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, RunOptions};
pub use version::{handle_help_command, handle_version_command, USAGE, VERSION};

/// Run a CLI command if applicable.
///
/// Returns the options for the TUI session. `Version` and `Help` print
/// and exit.
pub fn run_cli_command(command: CliCommand) -> RunOptions {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => handle_help_command(),
        CliCommand::Run(options) => options,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_returns_options() {
        let options = RunOptions {
            view: Some("#mental".to_string()),
            data_dir: None,
        };
        assert_eq!(run_cli_command(CliCommand::Run(options.clone())), options);
    }
}
