//! Subcommand dispatch with success-gated cron installation

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::application::actions::{ActionRunner, CronInstaller, CRON_FLAG};
use crate::exitcode;
use crate::infrastructure::InfraResult;

/// Routes `import` and `fetch` to their delegated actions and propagates
/// exit codes unchanged. Stateless; one dispatch per process invocation.
pub struct Router {
    import: Arc<dyn ActionRunner>,
    fetch: Arc<dyn ActionRunner>,
    cron: Arc<dyn CronInstaller>,
}

impl Router {
    pub fn new(
        import: Arc<dyn ActionRunner>,
        fetch: Arc<dyn ActionRunner>,
        cron: Arc<dyn CronInstaller>,
    ) -> Self {
        Self {
            import,
            fetch,
            cron,
        }
    }

    /// Run the import action; on success, additionally install the cron job.
    ///
    /// The combined exit code is the import code when nonzero, otherwise
    /// the installer's code. The installer never runs after a failed import.
    #[instrument(skip(self))]
    pub fn import(&self, args: &[String]) -> InfraResult<i32> {
        let code = self.import.run(args)?;
        if code != exitcode::OK {
            warn!("import exited with {}, skipping cron installation", code);
            return Ok(code);
        }
        info!("import succeeded, registering periodic fetch");
        self.cron.install()
    }

    /// Run the fetch action, unless `--install-cron` leads the argument
    /// list, in which case only the installer runs and everything after
    /// the flag is ignored.
    #[instrument(skip(self))]
    pub fn fetch(&self, args: &[String]) -> InfraResult<i32> {
        if args.first().map(String::as_str) == Some(CRON_FLAG) {
            debug!("cron installation requested directly");
            return self.cron.install();
        }
        self.fetch.run(args)
    }
}
