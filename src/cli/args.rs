//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Privilege-separating launcher for the munin-influxdb migration tools
///
/// `import` and `fetch` are forwarded to the external munin-influxdb tools
/// under the configured service account; everything after the subcommand
/// reaches them untouched.
#[derive(Parser, Debug)]
#[command(name = "muninflux")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Increase verbosity (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Settings file overriding the default lookup
    #[arg(short, long, value_hint = ValueHint::FilePath, env = "MUNINFLUX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Generate shell completions
    #[arg(long = "completions", value_enum, value_name = "SHELL")]
    pub generator: Option<clap_complete::Shell>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Migrate historical Munin data into InfluxDB (runs as the service user)
    #[command(disable_help_flag = true)]
    Import {
        /// Options forwarded verbatim to the import tool
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "OPTS")]
        args: Vec<String>,
    },

    /// Push fresh Munin values to InfluxDB (runs as the service user);
    /// `--install-cron` registers the periodic job instead
    #[command(disable_help_flag = true)]
    Fetch {
        /// Options forwarded verbatim to the fetch tool
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "OPTS")]
        args: Vec<String>,
    },

    /// Print usage information
    #[command(disable_help_flag = true)]
    Help {
        /// Ignored
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        args: Vec<String>,
    },
}
