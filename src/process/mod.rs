//! Subprocess execution.
//!
//! Commands are spawned directly from an argument vector (no intermediate
//! shell), so package and module names are never subject to shell parsing.

pub mod command;
pub mod platform;

pub use command::{display_command, execute, execute_check, CommandOptions, CommandResult};
pub use platform::is_ci;
