//! lined - a line-oriented text editor extensible by scripts
//!
//! This crate provides the editing engine: the line-addressed document,
//! the dispatcher that decides whether a typed line is text or a command,
//! and the built-in editing commands. Scripts reach the engine only through
//! the [`scripting`] seam.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod console;
pub mod dispatch;
pub mod error;
pub mod messages;
pub mod model;
pub mod ops;
pub mod scripting;
pub mod tracing;

// Re-export commonly used types
pub use commands::{Ack, CommandRegistry};
pub use config::EditorConfig;
pub use console::Console;
pub use error::EditError;
pub use messages::Input;
pub use model::{Document, EditorSession};
