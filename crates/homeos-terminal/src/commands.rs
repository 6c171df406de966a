//! Core built-in commands for the HomeOS terminal.

use homeos_types::error::Result;

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};

/// Register all built-in commands into a registry.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(Box::new(HelpCmd));
    reg.register(Box::new(EchoCmd));
    reg.register(Box::new(ClearCmd));
    reg.register(Box::new(ExitCmd));
    crate::fs_commands::register_fs_commands(reg);
    crate::system_commands::register_system_commands(reg);
    crate::network_commands::register_network_commands(reg);
    crate::app_commands::register_app_commands(reg);
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "Shows specific help for a command"
    }
    fn usage(&self) -> &str {
        "help [command]"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        // Never reached: the registry intercepts `help` because only it can
        // enumerate the command table. Registered anyway so `help` shows up
        // in its own listing and in completion.
        Ok(CommandOutput::Text(
            "Type 'help' for a list of commands.".to_string(),
        ))
    }
}

// ---------------------------------------------------------------------------
// echo
// ---------------------------------------------------------------------------

struct EchoCmd;
impl Command for EchoCmd {
    fn name(&self) -> &str {
        "echo"
    }
    fn description(&self) -> &str {
        "Prints the text back to the terminal"
    }
    fn usage(&self) -> &str {
        "echo [text]"
    }
    fn execute(&self, args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(args.join(" ")))
    }
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clears the terminal screen"
    }
    fn usage(&self) -> &str {
        "clear"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Clear)
    }
}

// ---------------------------------------------------------------------------
// exit
// ---------------------------------------------------------------------------

struct ExitCmd;
impl Command for ExitCmd {
    fn name(&self) -> &str {
        "exit"
    }
    fn description(&self) -> &str {
        "Closes the terminal application"
    }
    fn usage(&self) -> &str {
        "exit"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Exit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use homeos_vfs::Namespace;

    fn setup() -> (CommandRegistry, Namespace, Session) {
        let mut reg = CommandRegistry::new("bash");
        register_builtins(&mut reg);
        let mut ns = Namespace::new();
        let home = ns.create_dir(ns.root(), "home").unwrap();
        let session = Session::new("user", "homeos", home);
        (reg, ns, session)
    }

    fn exec(
        reg: &CommandRegistry,
        ns: &mut Namespace,
        session: &mut Session,
        line: &str,
    ) -> CommandOutput {
        let mut env = Environment {
            session,
            ns,
            time: None,
            launcher: None,
        };
        reg.execute(line, &mut env)
    }

    #[test]
    fn echo_joins_args_with_single_space() {
        let (reg, mut ns, mut session) = setup();
        assert_eq!(
            exec(&reg, &mut ns, &mut session, "echo Hello   HomeOS  world"),
            CommandOutput::Text("Hello HomeOS world".to_string())
        );
    }

    #[test]
    fn echo_without_args_prints_empty_line() {
        let (reg, mut ns, mut session) = setup();
        assert_eq!(
            exec(&reg, &mut ns, &mut session, "echo"),
            CommandOutput::Text(String::new())
        );
    }

    #[test]
    fn clear_emits_signal() {
        let (reg, mut ns, mut session) = setup();
        assert_eq!(
            exec(&reg, &mut ns, &mut session, "clear"),
            CommandOutput::Clear
        );
    }

    #[test]
    fn exit_emits_signal() {
        let (reg, mut ns, mut session) = setup();
        assert_eq!(
            exec(&reg, &mut ns, &mut session, "exit"),
            CommandOutput::Exit
        );
    }

    #[test]
    fn help_lists_every_builtin() {
        let (reg, mut ns, mut session) = setup();
        match exec(&reg, &mut ns, &mut session, "help") {
            CommandOutput::Text(s) => {
                assert!(s.starts_with("Available commands:"));
                for name in [
                    "help", "echo", "clear", "exit", "ls", "cd", "mkdir", "touch", "rm",
                    "rmdir", "whoami", "date", "sysinfo", "ping", "ifconfig", "pydocs",
                    "snake",
                ] {
                    assert!(s.contains(name), "help output missing '{name}': {s}");
                }
            },
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn help_topic_for_cd() {
        let (reg, mut ns, mut session) = setup();
        match exec(&reg, &mut ns, &mut session, "help cd") {
            CommandOutput::Text(s) => {
                assert!(s.starts_with("Usage: cd [dir]"));
                assert!(s.contains("Changes the current directory"));
            },
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn help_unknown_topic() {
        let (reg, mut ns, mut session) = setup();
        assert_eq!(
            exec(&reg, &mut ns, &mut session, "help teleport"),
            CommandOutput::Text("No help topic for 'teleport'".to_string())
        );
    }

    #[test]
    fn unknown_command_keeps_session_alive() {
        let (reg, mut ns, mut session) = setup();
        assert_eq!(
            exec(&reg, &mut ns, &mut session, "vim"),
            CommandOutput::Text("bash: vim: command not found".to_string())
        );
        // The session continues: the next command still works.
        assert_eq!(
            exec(&reg, &mut ns, &mut session, "echo ok"),
            CommandOutput::Text("ok".to_string())
        );
    }
}
