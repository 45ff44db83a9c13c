use std::fmt::Write;
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use jobsieve::app_dirs;

/// Produce the full version banner including config and data directories.
fn long_version() -> &'static str {
    let config_dir = match app_dirs::get_config_dir() {
        Ok(path) => path.display().to_string(),
        Err(err) => format!("unavailable ({err})"),
    };
    let data_dir = match app_dirs::get_data_dir() {
        Ok(path) => path.display().to_string(),
        Err(err) => format!("unavailable ({err})"),
    };

    let mut details = format!("jobsieve {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(details);
    let _ = writeln!(details, "config directory: {config_dir}");
    let _ = writeln!(details, "data directory: {data_dir}");

    Box::leak(details.into_boxed_str())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
    CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
    name = "jobsieve",
    version,
    long_version = long_version(),
    about = "Filter, score and rank collected job listings"
)]
/// Command-line arguments accepted by the `jobsieve` binary.
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "JOBSIEVE_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'd',
        long = "data",
        value_name = "FILE",
        env = "JOBSIEVE_DATA",
        help = "JSON export of collected listings to rank (default: from configuration)"
    )]
    pub(crate) data: Option<PathBuf>,
    #[arg(
        short = 'p',
        long = "profile",
        value_name = "NAME",
        help = "Named filter/sort profile to apply (default: built-in pass-through)"
    )]
    pub(crate) profile: Option<String>,
    #[arg(
        long = "profile-dir",
        value_name = "PATH",
        help = "Directory holding saved profiles (default: the data directory)"
    )]
    pub(crate) profile_dir: Option<PathBuf>,
    #[arg(
        short = 'l',
        long = "limit",
        value_name = "NUM",
        help = "Print at most this many ranked listings (default: all)"
    )]
    pub(crate) limit: Option<usize>,
    #[arg(
        long = "log-level",
        value_name = "FILTER",
        help = "Tracing filter directive (default: JOBSIEVE_LOG or 'info')"
    )]
    pub(crate) log_level: Option<String>,
    #[arg(long = "list-profiles", help = "List saved profiles and exit")]
    pub(crate) list_profiles: bool,
    #[arg(
        long = "print-config",
        help = "Print the resolved settings before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(short = 'o', long = "output", value_enum, help = "Choose how to print the result")]
    pub(crate) output: Option<OutputFormat>,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
/// Output formats supported by the CLI utility.
pub(crate) enum OutputFormat {
    #[default]
    Plain,
    Json,
}

impl OutputFormat {
    /// Parse the string form used in configuration files.
    pub(crate) fn from_label(label: &str) -> Option<Self> {
        match label {
            "plain" => Some(Self::Plain),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}
