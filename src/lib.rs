//! muninflux: privilege-separating launcher for the munin-influxdb toolchain
//!
//! Routes the `import` and `fetch` subcommands to the external
//! munin-influxdb tools, running them under a dedicated service account,
//! and registers the periodic fetch as a cron job after a successful
//! import. All of the actual migration work (RRD parsing, InfluxDB writes,
//! dashboard generation) happens in the delegated tools; this crate only
//! dispatches, switches identity, and propagates exit codes.

pub mod application;
pub mod cli;
pub mod config;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
