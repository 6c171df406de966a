//! Command trait, registry, and dispatch logic.
//!
//! A command line is split on whitespace: the first token is the command
//! name, the rest are passed verbatim as positional arguments. There is no
//! quoting, escaping, piping, or chaining -- a deliberate simplification
//! of the simulated shell, not an omission.

use std::collections::BTreeMap;

use homeos_platform::{AppLauncher, TimeService};
use homeos_types::error::Result;
use homeos_vfs::Namespace;

use crate::session::Session;

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Plain text lines for the transcript.
    Text(String),
    /// Command produced no visible output.
    None,
    /// Signal to the UI to clear the transcript.
    Clear,
    /// Signal to the UI to close the terminal session.
    Exit,
}

/// Mutable state passed to every command.
pub struct Environment<'a> {
    /// The per-terminal session (user, host, current directory).
    pub session: &'a mut Session,
    /// The namespace the session operates on.
    pub ns: &'a mut Namespace,
    /// Clock service for `date` and `sysinfo`.
    pub time: Option<&'a dyn TimeService>,
    /// Launcher capability for `pydocs` and `snake`.
    pub launcher: Option<&'a dyn AppLauncher>,
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types). Case-sensitive.
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "cd \[dir\]").
    fn usage(&self) -> &str;

    /// Execute the command with the given arguments.
    ///
    /// Handlers classify their own expected failures into diagnostic
    /// [`CommandOutput::Text`] lines; a residual `Err` is absorbed by the
    /// dispatcher, never propagated past it.
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput>;
}

/// Registry of available commands with dispatch.
///
/// Built once at terminal-open time and immutable afterwards. Command
/// names are case-sensitive; the sorted map gives deterministic `help`
/// and completion listings.
pub struct CommandRegistry {
    commands: BTreeMap<String, Box<dyn Command>>,
    shell: String,
}

impl CommandRegistry {
    /// Create an empty registry. `shell` is the name used in the
    /// "command not found" diagnostic.
    pub fn new(shell: &str) -> Self {
        Self {
            commands: BTreeMap::new(),
            shell: shell.to_string(),
        }
    }

    /// Register a command. Replaces any existing command with the same name.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    /// Parse and execute one command line.
    ///
    /// Dispatch itself cannot fail: an unknown command name is a normal,
    /// handled outcome, and handler errors become diagnostic lines. Every
    /// command is a single synchronous attempt; there is no retry logic.
    pub fn execute(&self, line: &str, env: &mut Environment<'_>) -> CommandOutput {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return CommandOutput::None;
        };
        let args: Vec<&str> = tokens.collect();
        log::debug!("dispatching '{name}' with {} arg(s)", args.len());

        // `help` needs the registry itself to enumerate commands.
        if name == "help" {
            return self.execute_help(&args);
        }

        match self.commands.get(name) {
            Some(cmd) => match cmd.execute(&args, env) {
                Ok(output) => output,
                Err(e) => CommandOutput::Text(format!("{e}")),
            },
            None => CommandOutput::Text(format!("{}: {name}: command not found", self.shell)),
        }
    }

    /// Registry-side `help`: the full sorted listing, or usage for one topic.
    fn execute_help(&self, args: &[&str]) -> CommandOutput {
        if let Some(&topic) = args.first() {
            return match self.commands.get(topic) {
                Some(cmd) => {
                    CommandOutput::Text(format!("Usage: {}\n{}", cmd.usage(), cmd.description()))
                },
                None => CommandOutput::Text(format!("No help topic for '{topic}'")),
            };
        }
        let mut out = String::from("Available commands:");
        for cmd in self.commands.values() {
            out.push_str(&format!("\n  - {:<16} {}", cmd.usage(), cmd.description()));
        }
        CommandOutput::Text(out)
    }

    /// Sorted (name, description) pairs.
    pub fn list_commands(&self) -> Vec<(&str, &str)> {
        self.commands
            .values()
            .map(|c| (c.name(), c.description()))
            .collect()
    }

    /// Sorted command names starting with `partial` (case-sensitive).
    pub fn completions(&self, partial: &str) -> Vec<String> {
        self.commands
            .keys()
            .filter(|name| name.starts_with(partial))
            .cloned()
            .collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new("bash")
    }
}
