//! Version and usage output for the HealthHub CLI.

/// The current version of HealthHub, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const USAGE: &str = "\
Usage: healthhub [--view <name> | #<name>] [--data-dir <path>]

Views: home, nutrition, fitness, mental, contact

Options:
  --view <name>      Open on this view (default: home)
  --data-dir <path>  Where preferences, submissions and logs are kept
  -V, --version      Print version
  -h, --help         Print this help

Environment:
  HEALTHHUB_DATA_DIR  Data directory (default: ~/.healthhub)
  HEALTHHUB_VIEW      Initial view
  HEALTHHUB_LOG       Log filter (default: info)";

/// `healthhub <version>`
pub fn version_line() -> String {
    format!("healthhub {}", VERSION)
}

/// Handle the --version command.
///
/// Prints the version string and exits successfully.
pub fn handle_version_command() -> ! {
    println!("{}", version_line());
    std::process::exit(0)
}

/// Handle the --help command.
pub fn handle_help_command() -> ! {
    println!("{}\n\n{}", version_line(), USAGE);
    std::process::exit(0)
}
