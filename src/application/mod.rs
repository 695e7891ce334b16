//! Application layer: dispatch logic and delegation to the external tools

pub mod actions;
pub mod error;
pub mod router;

pub use error::{ApplicationError, ApplicationResult};
