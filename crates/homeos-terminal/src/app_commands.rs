//! Commands that open other applications of the simulated desktop.
//!
//! Each one hands a fixed identifier to the injected `AppLauncher`
//! capability and never looks at anything beyond success/failure.

use homeos_types::error::Result;

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};

/// Register application-launching commands.
pub fn register_app_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(PydocsCmd));
    reg.register(Box::new(SnakeCmd));
}

// ---------------------------------------------------------------------------
// pydocs
// ---------------------------------------------------------------------------

struct PydocsCmd;
impl Command for PydocsCmd {
    fn name(&self) -> &str {
        "pydocs"
    }
    fn description(&self) -> &str {
        "Launches the Pydocs application"
    }
    fn usage(&self) -> &str {
        "pydocs"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        match env.launcher {
            Some(launcher) => {
                launcher.launch("pydocs")?;
                Ok(CommandOutput::None)
            },
            None => Ok(CommandOutput::Text(
                "pydocs: no application launcher available".to_string(),
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// snake
// ---------------------------------------------------------------------------

struct SnakeCmd;
impl Command for SnakeCmd {
    fn name(&self) -> &str {
        "snake"
    }
    fn description(&self) -> &str {
        "Launches the classic Snake game"
    }
    fn usage(&self) -> &str {
        "snake"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        match env.launcher {
            Some(launcher) => {
                launcher.launch("snake")?;
                Ok(CommandOutput::None)
            },
            None => Ok(CommandOutput::Text(
                "snake: no application launcher available".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use homeos_platform::AppLauncher;
    use homeos_vfs::Namespace;
    use std::cell::RefCell;

    /// Launcher that records every requested identifier.
    struct RecordingLauncher {
        requests: RefCell<Vec<String>>,
    }
    impl RecordingLauncher {
        fn new() -> Self {
            Self {
                requests: RefCell::new(Vec::new()),
            }
        }
    }
    impl AppLauncher for RecordingLauncher {
        fn launch(&self, app_id: &str) -> homeos_types::error::Result<()> {
            self.requests.borrow_mut().push(app_id.to_string());
            Ok(())
        }
    }

    fn setup() -> (CommandRegistry, Namespace, Session) {
        let mut reg = CommandRegistry::new("bash");
        register_app_commands(&mut reg);
        let mut ns = Namespace::new();
        let home = ns.create_dir(ns.root(), "home").unwrap();
        let session = Session::new("user", "homeos", home);
        (reg, ns, session)
    }

    #[test]
    fn pydocs_passes_fixed_identifier() {
        let (reg, mut ns, mut session) = setup();
        let launcher = RecordingLauncher::new();
        let mut env = Environment {
            session: &mut session,
            ns: &mut ns,
            time: None,
            launcher: Some(&launcher),
        };
        assert_eq!(reg.execute("pydocs", &mut env), CommandOutput::None);
        assert_eq!(*launcher.requests.borrow(), ["pydocs"]);
    }

    #[test]
    fn snake_passes_fixed_identifier() {
        let (reg, mut ns, mut session) = setup();
        let launcher = RecordingLauncher::new();
        let mut env = Environment {
            session: &mut session,
            ns: &mut ns,
            time: None,
            launcher: Some(&launcher),
        };
        assert_eq!(reg.execute("snake", &mut env), CommandOutput::None);
        assert_eq!(*launcher.requests.borrow(), ["snake"]);
    }

    #[test]
    fn launch_without_launcher_is_diagnostic() {
        let (reg, mut ns, mut session) = setup();
        let mut env = Environment {
            session: &mut session,
            ns: &mut ns,
            time: None,
            launcher: None,
        };
        assert_eq!(
            reg.execute("snake", &mut env),
            CommandOutput::Text("snake: no application launcher available".to_string())
        );
    }

    #[test]
    fn arguments_are_ignored() {
        let (reg, mut ns, mut session) = setup();
        let launcher = RecordingLauncher::new();
        let mut env = Environment {
            session: &mut session,
            ns: &mut ns,
            time: None,
            launcher: Some(&launcher),
        };
        reg.execute("pydocs --fullscreen now", &mut env);
        assert_eq!(*launcher.requests.borrow(), ["pydocs"]);
    }
}
