//! Scripting seam
//!
//! The interpreter is an external collaborator. The editor only talks to it
//! through [`ScriptEngine`], and scripts only talk back through the
//! [`ScriptRequest`]s they queue while running:
//!
//! - `register(name, fn)` adds a command backed by a script callback
//! - `invoke(name, args...)` runs an existing command with explicit args
//! - `print(...)` writes to the session's output
//!
//! Requests are applied in order after the chunk or callback returns, so a
//! script never holds a reference into session state.

#[cfg(feature = "lua")]
mod lua;

#[cfg(feature = "lua")]
pub use lua::LuaEngine;

use thiserror::Error;

/// Global through which scripts read the current cursor
pub const LINE_GLOBAL: &str = "line";

/// Handle to a callback held by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallbackId(pub usize);

/// Something a script asked the editor to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptRequest {
    Register { name: String, callback: CallbackId },
    Invoke { name: String, args: Vec<String> },
    Print(String),
}

/// Result of running a chunk or callback
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptOutcome {
    /// Rendered value of the chunk, `None` for nil
    pub value: Option<String>,
    pub requests: Vec<ScriptRequest>,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ScriptError(pub String);

impl ScriptError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

pub trait ScriptEngine {
    /// Short name for diagnostics
    fn name(&self) -> &'static str;

    /// Evaluate a chunk of source
    fn eval(&mut self, source: &str) -> Result<ScriptOutcome, ScriptError>;

    /// Call a registered callback with the joined pending buffer
    ///
    /// A callback that raises, or returns `false`, fails.
    fn call(&mut self, callback: CallbackId, input: &str) -> Result<ScriptOutcome, ScriptError>;

    /// Make the cursor visible to scripts before the next input cycle
    fn publish_line(&mut self, line: usize);
}

/// Engine used when no interpreter is compiled in
#[derive(Debug, Default)]
pub struct NullEngine;

impl ScriptEngine for NullEngine {
    fn name(&self) -> &'static str {
        "none"
    }

    fn eval(&mut self, _source: &str) -> Result<ScriptOutcome, ScriptError> {
        Err(ScriptError::new("no scripting engine available"))
    }

    fn call(&mut self, callback: CallbackId, _input: &str) -> Result<ScriptOutcome, ScriptError> {
        Err(ScriptError::new(format!(
            "no scripting engine available for callback {}",
            callback.0
        )))
    }

    fn publish_line(&mut self, _line: usize) {}
}

/// The interpreter selected at build time
pub fn default_engine() -> Result<Box<dyn ScriptEngine>, ScriptError> {
    #[cfg(feature = "lua")]
    {
        Ok(Box::new(LuaEngine::new()?))
    }

    #[cfg(not(feature = "lua"))]
    {
        Ok(Box::new(NullEngine))
    }
}
