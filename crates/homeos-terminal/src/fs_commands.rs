//! Filesystem commands: ls, cd, mkdir, touch, rm, rmdir.
//!
//! All of them operate on the session's current directory; names are plain
//! components, never paths. Expected failures (missing names, collisions,
//! non-empty directories) are classified here and emitted as diagnostic
//! lines -- nothing propagates past the dispatcher.

use homeos_types::error::{HomeOsError, Result};
use homeos_vfs::Resolved;

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};

/// Register filesystem commands.
pub fn register_fs_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(LsCmd));
    reg.register(Box::new(CdCmd));
    reg.register(Box::new(MkdirCmd));
    reg.register(Box::new(TouchCmd));
    reg.register(Box::new(RmCmd));
    reg.register(Box::new(RmdirCmd));
}

// ---------------------------------------------------------------------------
// ls
// ---------------------------------------------------------------------------

struct LsCmd;
impl Command for LsCmd {
    fn name(&self) -> &str {
        "ls"
    }
    fn description(&self) -> &str {
        "Lists the contents of the current directory"
    }
    fn usage(&self) -> &str {
        "ls"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let (dirs, files) = env.ns.list(env.session.current_dir());
        // Sorted directories first, then sorted files, one line. An empty
        // directory still prints one (empty) line.
        let entries: Vec<String> = dirs.into_iter().chain(files).collect();
        Ok(CommandOutput::Text(entries.join(" ")))
    }
}

// ---------------------------------------------------------------------------
// cd
// ---------------------------------------------------------------------------

struct CdCmd;
impl Command for CdCmd {
    fn name(&self) -> &str {
        "cd"
    }
    fn description(&self) -> &str {
        "Changes the current directory"
    }
    fn usage(&self) -> &str {
        "cd [dir]"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        match change_dir(args, env) {
            Ok(()) => Ok(CommandOutput::None),
            Err(HomeOsError::Unresolvable(_)) => Ok(CommandOutput::Text(
                "Error: Could not find parent directory".to_string(),
            )),
            Err(HomeOsError::NotFound(name)) => Ok(CommandOutput::Text(format!(
                "Directory not found '{name}'"
            ))),
            Err(e) => Err(e),
        }
    }
}

/// Resolve a `cd` target and move the session there.
fn change_dir(args: &[&str], env: &mut Environment<'_>) -> Result<()> {
    let target = match args.first() {
        None | Some(&"~") => {
            env.session.set_current_dir(env.session.home_dir());
            return Ok(());
        },
        Some(&name) => name,
    };

    let cwd = env.session.current_dir();
    // An exact child-directory match wins over the `..` special case.
    if let Resolved::Directory(id) = env.ns.resolve_child(cwd, target) {
        env.session.set_current_dir(id);
        return Ok(());
    }
    if target == ".." {
        let parent = env
            .ns
            .parent_of(cwd)
            .ok_or_else(|| HomeOsError::Unresolvable(env.ns.name(cwd).to_string()))?;
        env.session.set_current_dir(parent);
        return Ok(());
    }
    Err(HomeOsError::NotFound(target.to_string()))
}

// ---------------------------------------------------------------------------
// mkdir
// ---------------------------------------------------------------------------

struct MkdirCmd;
impl Command for MkdirCmd {
    fn name(&self) -> &str {
        "mkdir"
    }
    fn description(&self) -> &str {
        "Creates a new directory"
    }
    fn usage(&self) -> &str {
        "mkdir [dir]"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let Some(&name) = args.first() else {
            return Ok(CommandOutput::Text(
                "Error: Please specify a directory name.".to_string(),
            ));
        };
        match env.ns.create_dir(env.session.current_dir(), name) {
            Ok(_) => Ok(CommandOutput::Text(format!("Directory '{name}' created."))),
            Err(HomeOsError::AlreadyExists(_)) => Ok(CommandOutput::Text(format!(
                "Error: Directory or file '{name}' already exists."
            ))),
            Err(e) => Err(e),
        }
    }
}

// ---------------------------------------------------------------------------
// touch
// ---------------------------------------------------------------------------

struct TouchCmd;
impl Command for TouchCmd {
    fn name(&self) -> &str {
        "touch"
    }
    fn description(&self) -> &str {
        "Creates a new file"
    }
    fn usage(&self) -> &str {
        "touch [file]"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let Some(&name) = args.first() else {
            return Ok(CommandOutput::Text(
                "Error: Please specify a file name.".to_string(),
            ));
        };
        match env.ns.create_file(env.session.current_dir(), name) {
            Ok(()) => Ok(CommandOutput::Text(format!("File '{name}' created."))),
            Err(HomeOsError::AlreadyExists(_)) => Ok(CommandOutput::Text(format!(
                "Error: File or directory '{name}' already exists."
            ))),
            Err(e) => Err(e),
        }
    }
}

// ---------------------------------------------------------------------------
// rm
// ---------------------------------------------------------------------------

struct RmCmd;
impl Command for RmCmd {
    fn name(&self) -> &str {
        "rm"
    }
    fn description(&self) -> &str {
        "Removes a file"
    }
    fn usage(&self) -> &str {
        "rm [file]"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let Some(&name) = args.first() else {
            return Ok(CommandOutput::Text(
                "Error: Please specify a file name.".to_string(),
            ));
        };
        // File-only by contract: a directory of the same name is NotFound.
        match env.ns.remove_file(env.session.current_dir(), name) {
            Ok(()) => Ok(CommandOutput::Text(format!("File '{name}' removed."))),
            Err(HomeOsError::NotFound(_)) => Ok(CommandOutput::Text(format!(
                "Error: File '{name}' not found or is a directory."
            ))),
            Err(e) => Err(e),
        }
    }
}

// ---------------------------------------------------------------------------
// rmdir
// ---------------------------------------------------------------------------

struct RmdirCmd;
impl Command for RmdirCmd {
    fn name(&self) -> &str {
        "rmdir"
    }
    fn description(&self) -> &str {
        "Removes an empty directory"
    }
    fn usage(&self) -> &str {
        "rmdir [dir]"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let Some(&name) = args.first() else {
            return Ok(CommandOutput::Text(
                "Error: Please specify a directory name.".to_string(),
            ));
        };
        match env.ns.remove_dir(env.session.current_dir(), name) {
            Ok(()) => Ok(CommandOutput::Text(format!("Directory '{name}' removed."))),
            Err(HomeOsError::NotFound(_)) => Ok(CommandOutput::Text(format!(
                "Error: Directory '{name}' not found or is a file."
            ))),
            Err(HomeOsError::NotEmpty(_)) => Ok(CommandOutput::Text(format!(
                "Error: Directory '{name}' is not empty."
            ))),
            Err(e) => Err(e),
        }
    }
}
