//! Command interpreter and terminal subsystem for HomeOS.
//!
//! The terminal is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered by name; the interpreter splits input
//! lines on whitespace, resolves the command name, and dispatches
//! `execute()`. History recall and tab completion are driven directly by
//! the input surface on key events, independent of dispatch.

mod app_commands;
mod commands;
mod completion;
mod fs_commands;
mod history;
mod interpreter;
mod network_commands;
mod session;
mod system_commands;

/// Register all built-in commands into a registry.
pub use commands::register_builtins;
/// Tab completion over command names and namespace entries.
pub use completion::{Completion, complete};
/// Append-only command history with up/down recall.
pub use history::HistoryLog;
/// A single executable command trait.
pub use interpreter::Command;
/// Output produced by a command (text, UI signals).
pub use interpreter::CommandOutput;
/// Registry of available commands with dispatch.
pub use interpreter::CommandRegistry;
/// Mutable state passed to every command.
pub use interpreter::Environment;
/// Per-terminal identity and current-location state.
pub use session::Session;
