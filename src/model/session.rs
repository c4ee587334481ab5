//! Editor session - all mutable editing state in one place

use crate::commands::{Ack, CommandRegistry};
use crate::console::Console;
use crate::error::EditError;
use crate::model::Document;
use crate::scripting::ScriptEngine;
use crate::tracing::LogSwitch;

/// Default acknowledgement printed after a successful command
pub const DEFAULT_SUCCESS_MARKER: &str = "!";

/// One editing session: document, cursor, pending input and command set
///
/// Sessions are independent; nothing here is process-wide.
pub struct EditorSession {
    pub document: Document,
    /// 0-based index into the document, never clamped on its own
    pub cursor: usize,
    /// Lines typed since the buffer was last cleared
    pub pending: Vec<String>,
    pub registry: CommandRegistry,
    pub console: Console,
    pub scripts: Box<dyn ScriptEngine>,
    log_switch: Option<Box<dyn LogSwitch>>,
    log_enabled: bool,
    success_marker: String,
}

impl EditorSession {
    /// Create a session with an empty document and the built-in commands
    pub fn new(console: Console, scripts: Box<dyn ScriptEngine>) -> Self {
        Self {
            document: Document::new(),
            cursor: 0,
            pending: Vec::new(),
            registry: CommandRegistry::with_builtins(),
            console,
            scripts,
            log_switch: None,
            log_enabled: false,
            success_marker: DEFAULT_SUCCESS_MARKER.to_string(),
        }
    }

    pub fn with_log_switch(mut self, switch: Box<dyn LogSwitch>, enabled: bool) -> Self {
        self.log_switch = Some(switch);
        self.log_enabled = enabled;
        self
    }

    pub fn with_success_marker(mut self, marker: impl Into<String>) -> Self {
        self.success_marker = marker.into();
        self
    }

    pub fn success_marker(&self) -> &str {
        &self.success_marker
    }

    pub fn log_enabled(&self) -> bool {
        self.log_enabled
    }

    /// Route diagnostics to stderr or discard them
    pub fn set_logging(&mut self, enabled: bool) -> Result<(), EditError> {
        if let Some(switch) = &self.log_switch {
            switch.set_enabled(enabled).map_err(EditError::Logging)?;
        }
        self.log_enabled = enabled;
        Ok(())
    }

    /// Run a registered command with explicit arguments
    ///
    /// Bypasses accumulation: the pending buffer is neither passed nor
    /// touched.
    pub fn invoke(&mut self, name: &str, args: &[String]) -> Result<Ack, EditError> {
        let command = self
            .registry
            .get(name)
            .ok_or_else(|| EditError::UnknownCommand(name.to_string()))?;
        tracing::debug!("Invoking {:?} with {} args", name, args.len());
        command.handler.execute(self, args)
    }

    /// Print a line to the session's output
    pub fn print(&mut self, text: &str) -> Result<(), EditError> {
        self.console.print(text)?;
        Ok(())
    }

    /// Write an acknowledgement or diagnostic to the session's error stream
    pub fn report(&mut self, text: &str) {
        self.console.report(text);
    }
}

impl std::fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorSession")
            .field("document", &self.document)
            .field("cursor", &self.cursor)
            .field("pending", &self.pending)
            .field("registry", &self.registry)
            .field("scripts", &self.scripts.name())
            .field("log_enabled", &self.log_enabled)
            .finish_non_exhaustive()
    }
}
