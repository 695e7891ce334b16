//! Process boundary traits for testability
//!
//! These traits abstract the two ways a delegate process is spawned,
//! allowing the dispatch logic to be tested with mock implementations.

use std::io;
use std::process::Command;

/// Runs a program under another user identity and reports its exit code.
///
/// The identity switch is the only privileged operation in the crate.
/// Implementations must spawn synchronously and block until the child
/// exits; the caller never interprets the child's output, only its code.
pub trait PrivilegedExecutor: Send + Sync {
    fn run_as(&self, identity: &str, program: &str, args: &[String]) -> io::Result<i32>;
}

/// Runs a program in the invoking user's own context.
pub trait CommandRunner: Send + Sync {
    fn run(&self, program: &str, args: &[String]) -> io::Result<i32>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Identity switch via `sudo -u <identity> -- <program> <args...>`.
///
/// No shell is involved, so forwarded arguments reach the delegate
/// verbatim. Stdio is inherited: the delegate's progress output goes
/// straight to the operator's terminal.
#[derive(Debug, Default)]
pub struct SudoExecutor;

impl PrivilegedExecutor for SudoExecutor {
    fn run_as(&self, identity: &str, program: &str, args: &[String]) -> io::Result<i32> {
        let status = Command::new("sudo")
            .arg("-u")
            .arg(identity)
            .arg("--")
            .arg(program)
            .args(args)
            .status()?;
        // Death by signal has no code; report a generic failure.
        Ok(status.code().unwrap_or(1))
    }
}

/// Plain process spawn, inherited stdio.
#[derive(Debug, Default)]
pub struct RealCommandRunner;

impl CommandRunner for RealCommandRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<i32> {
        let status = Command::new(program).args(args).status()?;
        Ok(status.code().unwrap_or(1))
    }
}
