//! Input event routing for the terminal surface.
//!
//! Submit goes to the dispatcher; history-up/down go to the history log;
//! completion requests go to the completion engine. The routing is the
//! same for every front end -- the stdin loop in `main` only ever emits
//! text and submit events, a windowed terminal delivers the full set.

use homeos_platform::{AppLauncher, TimeService};
use homeos_terminal::{
    CommandOutput, CommandRegistry, Completion, Environment, HistoryLog, Session, complete,
};
use homeos_types::input::InputEvent;
use homeos_vfs::Namespace;

/// Result of handling a single input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// Mutable state of one terminal surface.
pub struct TerminalState {
    /// The line being edited.
    pub input_buf: String,
    /// Submitted command lines for up/down recall.
    pub history: HistoryLog,
    /// Transcript lines produced since the last render.
    pub pending: Vec<String>,
    /// Set when `clear` ran; the renderer resets the visible transcript.
    pub clear_requested: bool,
    /// Echo the prompt and submitted line into the transcript. Console
    /// front ends turn this off because the typed line is already visible.
    pub echo_input: bool,
}

impl TerminalState {
    pub fn new() -> Self {
        Self {
            input_buf: String::new(),
            history: HistoryLog::new(),
            pending: Vec::new(),
            clear_requested: false,
            echo_input: true,
        }
    }
}

impl Default for TerminalState {
    fn default() -> Self {
        Self::new()
    }
}

/// Route one input event.
pub fn handle_event(
    event: &InputEvent,
    state: &mut TerminalState,
    session: &mut Session,
    ns: &mut Namespace,
    reg: &CommandRegistry,
    time: Option<&dyn TimeService>,
    launcher: Option<&dyn AppLauncher>,
) -> InputResult {
    match event {
        InputEvent::Quit => return InputResult::Quit,
        InputEvent::TextInput(ch) => state.input_buf.push(*ch),
        InputEvent::Backspace => {
            state.input_buf.pop();
        },
        InputEvent::HistoryUp => {
            if let Some(prev) = state.history.recall_previous() {
                state.input_buf = prev.to_string();
            }
        },
        InputEvent::HistoryDown => {
            if let Some(next) = state.history.recall_next() {
                state.input_buf = next.to_string();
            }
        },
        InputEvent::Complete => {
            match complete(&state.input_buf, reg, ns, session.current_dir()) {
                Completion::Unique(filled) => state.input_buf = filled,
                Completion::Ambiguous(candidates) => state.pending.push(candidates.join(" ")),
                Completion::None => {},
            }
        },
        InputEvent::Submit => {
            let line = std::mem::take(&mut state.input_buf).trim().to_string();
            state.history.append(&line);
            if line.is_empty() {
                return InputResult::Continue;
            }
            if state.echo_input {
                state.pending.push(format!("{}{line}", session.prompt(ns)));
            }
            let output = {
                let mut env = Environment {
                    session,
                    ns,
                    time,
                    launcher,
                };
                reg.execute(&line, &mut env)
            };
            match output {
                CommandOutput::Text(text) => state.pending.push(text),
                CommandOutput::None => {},
                CommandOutput::Clear => {
                    state.pending.clear();
                    state.clear_requested = true;
                },
                CommandOutput::Exit => return InputResult::Quit,
            }
            // Fixed formatting rule: one blank line after every command.
            state.pending.push(String::new());
        },
    }
    InputResult::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use homeos_terminal::register_builtins;

    struct Fixture {
        state: TerminalState,
        session: Session,
        ns: Namespace,
        reg: CommandRegistry,
    }

    impl Fixture {
        fn new() -> Self {
            let mut reg = CommandRegistry::new("bash");
            register_builtins(&mut reg);
            let mut ns = Namespace::new();
            let home = crate::seed::populate_namespace(&mut ns);
            Self {
                state: TerminalState::new(),
                session: Session::new("user", "homeos", home),
                ns,
                reg,
            }
        }

        fn feed(&mut self, event: InputEvent) -> InputResult {
            handle_event(
                &event,
                &mut self.state,
                &mut self.session,
                &mut self.ns,
                &self.reg,
                None,
                None,
            )
        }

        fn type_line(&mut self, line: &str) -> InputResult {
            for ch in line.chars() {
                self.feed(InputEvent::TextInput(ch));
            }
            self.feed(InputEvent::Submit)
        }
    }

    #[test]
    fn typing_builds_the_input_buffer() {
        let mut fx = Fixture::new();
        fx.feed(InputEvent::TextInput('l'));
        fx.feed(InputEvent::TextInput('s'));
        assert_eq!(fx.state.input_buf, "ls");
        fx.feed(InputEvent::Backspace);
        assert_eq!(fx.state.input_buf, "l");
    }

    #[test]
    fn submit_echoes_prompt_output_and_blank_line() {
        let mut fx = Fixture::new();
        fx.type_line("echo hi");
        assert_eq!(
            fx.state.pending,
            ["user@homeos:~$ echo hi", "hi", ""]
        );
        assert!(fx.state.input_buf.is_empty());
    }

    #[test]
    fn submit_without_echo_skips_prompt_line() {
        let mut fx = Fixture::new();
        fx.state.echo_input = false;
        fx.type_line("echo hi");
        assert_eq!(fx.state.pending, ["hi", ""]);
    }

    #[test]
    fn empty_submit_produces_nothing() {
        let mut fx = Fixture::new();
        assert_eq!(fx.feed(InputEvent::Submit), InputResult::Continue);
        assert!(fx.state.pending.is_empty());
        assert!(fx.state.history.is_empty());
    }

    #[test]
    fn unknown_command_line_still_gets_blank_line() {
        let mut fx = Fixture::new();
        fx.state.echo_input = false;
        fx.type_line("vim");
        assert_eq!(
            fx.state.pending,
            ["bash: vim: command not found", ""]
        );
    }

    #[test]
    fn history_up_restores_previous_line() {
        let mut fx = Fixture::new();
        fx.type_line("echo one");
        fx.type_line("echo two");
        fx.feed(InputEvent::HistoryUp);
        assert_eq!(fx.state.input_buf, "echo two");
        fx.feed(InputEvent::HistoryUp);
        assert_eq!(fx.state.input_buf, "echo one");
        // Clamped at the oldest entry.
        fx.feed(InputEvent::HistoryUp);
        assert_eq!(fx.state.input_buf, "echo one");
    }

    #[test]
    fn history_down_walks_back_to_blank() {
        let mut fx = Fixture::new();
        fx.type_line("echo one");
        fx.type_line("echo two");
        fx.feed(InputEvent::HistoryUp);
        fx.feed(InputEvent::HistoryUp);
        fx.feed(InputEvent::HistoryDown);
        assert_eq!(fx.state.input_buf, "echo two");
        fx.feed(InputEvent::HistoryDown);
        assert_eq!(fx.state.input_buf, "");
    }

    #[test]
    fn history_keys_on_fresh_terminal_are_noops() {
        let mut fx = Fixture::new();
        fx.feed(InputEvent::TextInput('x'));
        fx.feed(InputEvent::HistoryUp);
        fx.feed(InputEvent::HistoryDown);
        assert_eq!(fx.state.input_buf, "x");
    }

    #[test]
    fn completion_fills_unique_command() {
        let mut fx = Fixture::new();
        for ch in "wh".chars() {
            fx.feed(InputEvent::TextInput(ch));
        }
        fx.feed(InputEvent::Complete);
        assert_eq!(fx.state.input_buf, "whoami ");
    }

    #[test]
    fn completion_lists_ambiguous_candidates() {
        let mut fx = Fixture::new();
        fx.feed(InputEvent::TextInput('e'));
        fx.feed(InputEvent::Complete);
        // Input untouched, candidates in the transcript.
        assert_eq!(fx.state.input_buf, "e");
        assert_eq!(fx.state.pending, ["echo exit"]);
    }

    #[test]
    fn completion_fills_namespace_entry() {
        let mut fx = Fixture::new();
        for ch in "cd gu".chars() {
            fx.feed(InputEvent::TextInput(ch));
        }
        fx.feed(InputEvent::Complete);
        assert_eq!(fx.state.input_buf, "cd guest");
    }

    #[test]
    fn clear_empties_pending_and_raises_flag() {
        let mut fx = Fixture::new();
        fx.type_line("echo noise");
        fx.type_line("clear");
        assert!(fx.state.clear_requested);
        // Only the post-command blank line survives the reset.
        assert_eq!(fx.state.pending, [""]);
    }

    #[test]
    fn exit_quits_the_loop() {
        let mut fx = Fixture::new();
        assert_eq!(fx.type_line("exit"), InputResult::Quit);
    }

    #[test]
    fn quit_event_quits_the_loop() {
        let mut fx = Fixture::new();
        assert_eq!(fx.feed(InputEvent::Quit), InputResult::Quit);
    }

    #[test]
    fn cd_changes_prompt_in_next_echo() {
        let mut fx = Fixture::new();
        fx.type_line("mkdir docs");
        fx.type_line("cd docs");
        fx.state.pending.clear();
        fx.type_line("ls");
        assert_eq!(fx.state.pending[0], "user@homeos:/~docs$ ls");
    }
}
