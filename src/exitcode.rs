//! Process exit codes

/// Successful termination
pub const OK: i32 = 0;

/// Missing or unrecognized command (usage is printed)
pub const USAGE: i32 = 1;

/// Cannot spawn a delegate process
pub const OSERR: i32 = 71;

/// Configuration error
pub const CONFIG: i32 = 78;
