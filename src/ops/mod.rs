//! Editing operations - the built-in command handlers
//!
//! Every handler receives the pending buffer as its argument list, one
//! token per buffered line. Buffer clearing is handled by the dispatcher
//! from each command's [`BufferPolicy`](crate::commands::BufferPolicy).

pub mod edit;
pub mod file;
pub mod script;
pub mod search;
pub mod session;
pub mod view;

/// Parse a line index argument; anything unparsable or negative is 0
pub(crate) fn parse_index(arg: &str) -> usize {
    usize::try_from(parse_count(arg)).unwrap_or(0)
}

/// Parse a signed count argument; anything unparsable is 0
pub(crate) fn parse_count(arg: &str) -> i64 {
    arg.trim().parse().unwrap_or(0)
}
