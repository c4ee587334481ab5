//! Command registry
//!
//! Maps exact command names to handlers. Built-in handlers come from the
//! static [`BUILTIN_COMMANDS`] table; scripts can add more at runtime.

use std::collections::BTreeMap;

use crate::error::EditError;
use crate::model::EditorSession;
use crate::ops;
use crate::scripting::CallbackId;

// ============================================================================
// Handlers
// ============================================================================

/// What a successful command tells the read loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ack {
    /// Done, keep reading
    Done,
    /// Stop the read loop
    Quit,
}

pub type BuiltinFn = fn(&mut EditorSession, &[String]) -> Result<Ack, EditError>;

/// The capability behind a command name
#[derive(Clone, Copy)]
pub enum Handler {
    Builtin(BuiltinFn),
    /// Callback registered by a script
    Script(CallbackId),
}

impl Handler {
    pub fn execute(self, session: &mut EditorSession, args: &[String]) -> Result<Ack, EditError> {
        match self {
            Handler::Builtin(f) => f(session, args),
            Handler::Script(callback) => ops::script::call_callback(session, callback, args),
        }
    }
}

impl std::fmt::Debug for Handler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Handler::Builtin(_) => f.write_str("Builtin"),
            Handler::Script(id) => f.debug_tuple("Script").field(id).finish(),
        }
    }
}

/// What happens to the pending buffer once a dispatched command returns
///
/// Applied whether the handler succeeded or failed. `Keep` commands may
/// still edit the buffer themselves (`oops`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferPolicy {
    Clear,
    Keep,
}

impl BufferPolicy {
    pub fn apply(self, pending: &mut Vec<String>) {
        if self == BufferPolicy::Clear {
            pending.clear();
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Command {
    pub handler: Handler,
    pub policy: BufferPolicy,
}

impl Command {
    /// A command backed by a script callback; clears the buffer like any
    /// other consuming command
    pub fn script(callback: CallbackId) -> Self {
        Self {
            handler: Handler::Script(callback),
            policy: BufferPolicy::Clear,
        }
    }
}

// ============================================================================
// Built-in table
// ============================================================================

/// A built-in command definition
#[derive(Clone, Copy)]
pub struct CommandDef {
    pub name: &'static str,
    pub handler: BuiltinFn,
    pub policy: BufferPolicy,
    pub summary: &'static str,
}

impl std::fmt::Debug for CommandDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandDef")
            .field("name", &self.name)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

/// Static table of all built-in commands
pub static BUILTIN_COMMANDS: &[CommandDef] = &[
    CommandDef {
        name: "quit",
        handler: ops::session::quit,
        policy: BufferPolicy::Clear,
        summary: "Exit the editor",
    },
    CommandDef {
        name: "runjs",
        handler: ops::script::run_script,
        policy: BufferPolicy::Clear,
        summary: "Evaluate the pending lines as a script",
    },
    CommandDef {
        name: "oops!",
        handler: ops::session::discard_pending,
        policy: BufferPolicy::Clear,
        summary: "Discard all pending lines",
    },
    CommandDef {
        name: "oops",
        handler: ops::session::drop_last_pending,
        policy: BufferPolicy::Keep,
        summary: "Discard the last pending line",
    },
    CommandDef {
        name: "cb",
        handler: ops::session::show_pending,
        policy: BufferPolicy::Keep,
        summary: "Show the pending lines",
    },
    CommandDef {
        name: "log on",
        handler: ops::session::log_on,
        policy: BufferPolicy::Keep,
        summary: "Send diagnostics to stderr",
    },
    CommandDef {
        name: "log off",
        handler: ops::session::log_off,
        policy: BufferPolicy::Keep,
        summary: "Discard diagnostics",
    },
    CommandDef {
        name: "commands",
        handler: ops::session::list_commands,
        policy: BufferPolicy::Keep,
        summary: "List every registered command",
    },
    CommandDef {
        name: "open",
        handler: ops::file::open,
        policy: BufferPolicy::Clear,
        summary: "Open the file named by the pending lines",
    },
    CommandDef {
        name: "save",
        handler: ops::file::save,
        policy: BufferPolicy::Clear,
        summary: "Save to the pending path or the current filename",
    },
    CommandDef {
        name: "print",
        handler: ops::view::print,
        policy: BufferPolicy::Clear,
        summary: "Print all lines, one line, or an inclusive range",
    },
    CommandDef {
        name: "page",
        handler: ops::view::page,
        policy: BufferPolicy::Clear,
        summary: "Print from a line to the end, pausing every page",
    },
    CommandDef {
        name: "r",
        handler: ops::edit::replace,
        policy: BufferPolicy::Clear,
        summary: "Replace the current line with the pending lines",
    },
    CommandDef {
        name: "i",
        handler: ops::edit::insert,
        policy: BufferPolicy::Clear,
        summary: "Insert the pending lines before the current line",
    },
    CommandDef {
        name: "a",
        handler: ops::edit::append,
        policy: BufferPolicy::Clear,
        summary: "Insert the pending lines after the current line",
    },
    CommandDef {
        name: "d",
        handler: ops::edit::delete,
        policy: BufferPolicy::Clear,
        summary: "Delete the current line",
    },
    CommandDef {
        name: "search",
        handler: ops::search::search,
        policy: BufferPolicy::Clear,
        summary: "Find lines containing a keyword",
    },
];

// ============================================================================
// Registry
// ============================================================================

/// Name-to-command mapping; names are exact and case-sensitive
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: BTreeMap<String, Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with [`BUILTIN_COMMANDS`]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for def in BUILTIN_COMMANDS {
            registry.register(
                def.name,
                Command {
                    handler: Handler::Builtin(def.handler),
                    policy: def.policy,
                },
            );
        }
        registry
    }

    /// Add or replace a command, returning the one it displaced
    pub fn register(&mut self, name: impl Into<String>, command: Command) -> Option<Command> {
        let name = name.into();
        let previous = self.commands.insert(name.clone(), command);
        if previous.is_some() {
            tracing::debug!("Command {:?} replaced", name);
        }
        previous
    }

    pub fn get(&self, name: &str) -> Option<Command> {
        self.commands.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// All names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Summary line for a built-in, `None` for script commands
pub fn summary_for(name: &str) -> Option<&'static str> {
    BUILTIN_COMMANDS
        .iter()
        .find(|def| def.name == name)
        .map(|def| def.summary)
}
