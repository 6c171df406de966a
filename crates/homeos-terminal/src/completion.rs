//! Tab completion for command names and namespace entries.
//!
//! A single-token input completes against registered command names; once
//! the input contains whitespace, the last partial token completes against
//! the entries of the current directory. Lookup only: completion never
//! mutates the namespace, the registry, or the history.

use homeos_vfs::{DirId, Namespace};

use crate::interpreter::CommandRegistry;

/// Result of a completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Exactly one candidate: the full replacement input line.
    Unique(String),
    /// Several candidates to display; the input is left unchanged.
    Ambiguous(Vec<String>),
    /// Nothing matched (or the input was empty); no visible effect.
    None,
}

/// Complete the current input text.
pub fn complete(
    input: &str,
    registry: &CommandRegistry,
    ns: &Namespace,
    cwd: DirId,
) -> Completion {
    if input.is_empty() {
        return Completion::None;
    }
    let last_ws = input
        .char_indices()
        .rev()
        .find(|(_, ch)| ch.is_whitespace());
    match last_ws {
        None => complete_command(input, registry),
        Some((pos, ch)) => complete_entry(input, &input[pos + ch.len_utf8()..], ns, cwd),
    }
}

/// Complete a command name. A unique match also gets a trailing separator
/// space so the user can type the first argument immediately.
fn complete_command(partial: &str, registry: &CommandRegistry) -> Completion {
    let matches = registry.completions(partial);
    match matches.len() {
        0 => Completion::None,
        1 => Completion::Unique(format!("{} ", matches[0])),
        _ => Completion::Ambiguous(matches),
    }
}

/// Complete the trailing partial token against the directory and file
/// names of the current directory. An empty partial (input ends with
/// whitespace) matches every entry.
fn complete_entry(input: &str, partial: &str, ns: &Namespace, cwd: DirId) -> Completion {
    let (dirs, files) = ns.list(cwd);
    let mut matches: Vec<String> = dirs
        .into_iter()
        .chain(files)
        .filter(|name| name.starts_with(partial))
        .collect();
    matches.sort();
    match matches.len() {
        0 => Completion::None,
        1 => {
            let stem = &input[..input.len() - partial.len()];
            Completion::Unique(format!("{stem}{}", matches[0]))
        },
        _ => Completion::Ambiguous(matches),
    }
}
