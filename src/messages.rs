//! Input classification
//!
//! Every raw line typed at the editor becomes exactly one [`Input`].

use crate::commands::{Command, CommandRegistry};

/// Prefix that moves the cursor: `:12`
pub const JUMP_PREFIX: char = ':';
/// Prefix that forces a line to be literal text: `.print`
pub const LITERAL_PREFIX: char = '.';

#[derive(Debug, Clone)]
pub enum Input {
    /// `:N` with a valid line number
    Jump(usize),
    /// `:` followed by something that is not a line number
    BadJump(String),
    /// A registered command name, matched verbatim
    Command { name: String, command: Command },
    /// Text for the pending buffer, dot-escape already stripped
    Text(String),
}

impl Input {
    /// Classify one line (terminator already stripped)
    ///
    /// Lookup uses the line as typed, so `.print` never matches `print`; the
    /// leading dot is then stripped from the buffered text.
    pub fn classify(registry: &CommandRegistry, line: &str) -> Self {
        if let Some(target) = line.strip_prefix(JUMP_PREFIX) {
            return match target.trim().parse() {
                Ok(n) => Input::Jump(n),
                Err(_) => Input::BadJump(target.to_string()),
            };
        }

        if let Some(command) = registry.get(line) {
            return Input::Command {
                name: line.to_string(),
                command,
            };
        }

        let text = line.strip_prefix(LITERAL_PREFIX).unwrap_or(line);
        Input::Text(text.to_string())
    }
}
