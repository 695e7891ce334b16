//! Delegation to the external munin-influxdb tools

use std::sync::Arc;

use tracing::debug;

use crate::config::Settings;
use crate::infrastructure::traits::{CommandRunner, PrivilegedExecutor};
use crate::infrastructure::{InfraError, InfraResult};

/// Flag the external fetch tool understands for registering its own cron job.
pub const CRON_FLAG: &str = "--install-cron";

/// An external action invoked with caller-supplied arguments.
///
/// The argument list is forwarded verbatim; the exit code is the only
/// success/failure signal.
pub trait ActionRunner: Send + Sync {
    fn run(&self, args: &[String]) -> InfraResult<i32>;
}

/// Registers the periodic fetch with the host scheduler.
pub trait CronInstaller: Send + Sync {
    fn install(&self) -> InfraResult<i32>;
}

/// Runs one subcommand of the external tool under the service identity.
pub struct DelegatedAction {
    subcommand: &'static str,
    executor: Arc<dyn PrivilegedExecutor>,
    settings: Arc<Settings>,
}

impl DelegatedAction {
    pub fn new(
        subcommand: &'static str,
        executor: Arc<dyn PrivilegedExecutor>,
        settings: Arc<Settings>,
    ) -> Self {
        Self {
            subcommand,
            executor,
            settings,
        }
    }
}

impl ActionRunner for DelegatedAction {
    fn run(&self, args: &[String]) -> InfraResult<i32> {
        let mut argv = Vec::with_capacity(args.len() + 1);
        argv.push(self.subcommand.to_string());
        argv.extend_from_slice(args);
        debug!(
            "running {} {:?} as user {}",
            self.settings.program, argv, self.settings.service_user
        );
        self.executor
            .run_as(&self.settings.service_user, &self.settings.program, &argv)
            .map_err(|e| {
                InfraError::io(
                    format!(
                        "run {} {} as {}",
                        self.settings.program, self.subcommand, self.settings.service_user
                    ),
                    e,
                )
            })
    }
}

/// Asks the external fetch tool to register the scheduled invocation.
///
/// Runs in the invoking user's context (the tool itself demands root for
/// crontab writes). The crontab entry is built by the fetch tool; we only
/// hand it the command string to schedule.
pub struct FetchCronInstaller {
    runner: Arc<dyn CommandRunner>,
    settings: Arc<Settings>,
    schedule_command: String,
}

impl FetchCronInstaller {
    /// `self_command` is the invocation of this very binary; the scheduled
    /// command becomes `<self_command> fetch` unless overridden in settings.
    pub fn new(runner: Arc<dyn CommandRunner>, settings: Arc<Settings>, self_command: String) -> Self {
        let schedule_command = settings
            .schedule_command
            .clone()
            .unwrap_or_else(|| format!("{} fetch", self_command));
        Self {
            runner,
            settings,
            schedule_command,
        }
    }
}

impl CronInstaller for FetchCronInstaller {
    fn install(&self) -> InfraResult<i32> {
        let argv = vec![
            "fetch".to_string(),
            CRON_FLAG.to_string(),
            self.schedule_command.clone(),
        ];
        debug!("running {} {:?}", self.settings.program, argv);
        self.runner
            .run(&self.settings.program, &argv)
            .map_err(|e| InfraError::io(format!("run {} fetch {}", self.settings.program, CRON_FLAG), e))
    }
}
