//! HomeOS terminal entry point.
//!
//! Headless shell: reads lines from stdin, translates them into input
//! events, and renders the transcript to stdout. A windowed front end
//! would deliver the same events (plus arrow-key and tab events) to
//! `input::handle_event` and render `TerminalState::pending` itself.

mod input;
mod seed;

use std::io::{BufRead, Write};

use anyhow::Result;

use homeos_platform::{DesktopPlatform, LoggingLauncher};
use homeos_terminal::{CommandRegistry, Session, register_builtins};
use homeos_types::config::HomeConfig;
use homeos_types::input::InputEvent;
use homeos_vfs::Namespace;

use input::{InputResult, TerminalState, handle_event};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::fs::read_to_string("homeos.toml") {
        Ok(text) => HomeConfig::from_toml(&text)?,
        Err(_) => HomeConfig::default(),
    };
    log::info!("Starting HomeOS terminal for '{}'", config.username);

    let mut ns = Namespace::new();
    let home = seed::populate_namespace(&mut ns);
    let mut session = Session::new(&config.username, &config.hostname, home);

    let mut reg = CommandRegistry::new(&config.shell_name);
    register_builtins(&mut reg);

    let platform = DesktopPlatform::new();
    let launcher = LoggingLauncher;

    let mut state = TerminalState::new();
    // The console already shows what the user typed after the prompt.
    state.echo_input = false;

    println!("{}", config.welcome);
    println!();

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    loop {
        print!("{}", session.prompt(&ns));
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF closes the terminal like `exit`.
        }

        for ch in line.trim_end_matches(['\r', '\n']).chars() {
            handle_event(
                &InputEvent::TextInput(ch),
                &mut state,
                &mut session,
                &mut ns,
                &reg,
                Some(&platform),
                Some(&launcher),
            );
        }
        let result = handle_event(
            &InputEvent::Submit,
            &mut state,
            &mut session,
            &mut ns,
            &reg,
            Some(&platform),
            Some(&launcher),
        );

        render(&mut state, &mut stdout)?;
        if result == InputResult::Quit {
            break;
        }
    }

    log::info!("HomeOS terminal closed");
    Ok(())
}

/// Flush pending transcript lines to the console.
fn render(state: &mut TerminalState, out: &mut impl Write) -> Result<()> {
    if state.clear_requested {
        // ANSI clear-screen; cosmetic only.
        write!(out, "\x1b[2J\x1b[H")?;
        state.clear_requested = false;
    }
    for line in state.pending.drain(..) {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}
