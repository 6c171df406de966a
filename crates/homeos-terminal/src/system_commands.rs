//! System commands: whoami, date, sysinfo.

use homeos_types::error::Result;

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};

/// Register system commands.
pub fn register_system_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(WhoamiCmd));
    reg.register(Box::new(DateCmd));
    reg.register(Box::new(SysinfoCmd));
}

// ---------------------------------------------------------------------------
// whoami
// ---------------------------------------------------------------------------

struct WhoamiCmd;
impl Command for WhoamiCmd {
    fn name(&self) -> &str {
        "whoami"
    }
    fn description(&self) -> &str {
        "Displays the current username"
    }
    fn usage(&self) -> &str {
        "whoami"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(env.session.user().to_string()))
    }
}

// ---------------------------------------------------------------------------
// date
// ---------------------------------------------------------------------------

struct DateCmd;
impl Command for DateCmd {
    fn name(&self) -> &str {
        "date"
    }
    fn description(&self) -> &str {
        "Displays the current date and time"
    }
    fn usage(&self) -> &str {
        "date"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        if let Some(time) = env.time {
            let now = time.now()?;
            Ok(CommandOutput::Text(now.to_string()))
        } else {
            Ok(CommandOutput::Text(
                "date: no time service available".to_string(),
            ))
        }
    }
}

// ---------------------------------------------------------------------------
// sysinfo
// ---------------------------------------------------------------------------

struct SysinfoCmd;
impl Command for SysinfoCmd {
    fn name(&self) -> &str {
        "sysinfo"
    }
    fn description(&self) -> &str {
        "Displays mock system information"
    }
    fn usage(&self) -> &str {
        "sysinfo"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let mut lines = vec![
            "HomeOS Terminal v0.1.0".to_string(),
            "OS Name: HomeOS Simulated Environment".to_string(),
            "Kernel: 5.15.0-76-generic (simulated)".to_string(),
        ];
        if let Some(time) = env.time {
            let secs = time.uptime_secs()?;
            let hours = secs / 3600;
            let mins = (secs % 3600) / 60;
            let s = secs % 60;
            lines.push(format!("Uptime: {hours:02}:{mins:02}:{s:02}"));
        }
        Ok(CommandOutput::Text(lines.join("\n")))
    }
}
