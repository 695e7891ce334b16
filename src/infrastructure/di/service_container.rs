//! Service container for dependency injection
//!
//! Wires the router to real process-spawning implementations, or to
//! custom ones in tests.

use std::sync::Arc;

use crate::application::actions::{DelegatedAction, FetchCronInstaller};
use crate::application::router::Router;
use crate::config::Settings;
use crate::infrastructure::traits::{
    CommandRunner, PrivilegedExecutor, RealCommandRunner, SudoExecutor,
};

/// Container holding the wired dispatch pipeline.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Subcommand dispatcher
    pub router: Router,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(
            settings,
            Arc::new(SudoExecutor),
            Arc::new(RealCommandRunner),
        )
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        executor: Arc<dyn PrivilegedExecutor>,
        runner: Arc<dyn CommandRunner>,
    ) -> Self {
        let settings = Arc::new(settings);

        let import = Arc::new(DelegatedAction::new(
            "import",
            executor.clone(),
            settings.clone(),
        ));
        let fetch = Arc::new(DelegatedAction::new("fetch", executor, settings.clone()));
        let cron = Arc::new(FetchCronInstaller::new(
            runner,
            settings.clone(),
            self_command(),
        ));
        let router = Router::new(import, fetch, cron);

        Self { settings, router }
    }
}

/// Invocation string for this binary, used inside the scheduled command.
/// Falls back to the bare program name when the executable path cannot be
/// resolved as UTF-8.
fn self_command() -> String {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.to_str().map(str::to_string))
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}
