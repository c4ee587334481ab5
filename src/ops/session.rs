//! Session-level commands: quit, buffer inspection, logging, listing

use crate::commands::Ack;
use crate::error::EditError;
use crate::model::EditorSession;

pub fn quit(_session: &mut EditorSession, _args: &[String]) -> Result<Ack, EditError> {
    tracing::info!("Quit requested");
    Ok(Ack::Quit)
}

/// `oops!`: discard the whole pending buffer
pub fn discard_pending(session: &mut EditorSession, _args: &[String]) -> Result<Ack, EditError> {
    session.pending.clear();
    Ok(Ack::Done)
}

/// `oops`: keep the given lines minus the last one as the pending buffer
///
/// Typed, `args` is the buffer itself; invoked from a script, the explicit
/// arguments replace it.
pub fn drop_last_pending(session: &mut EditorSession, args: &[String]) -> Result<Ack, EditError> {
    let kept = args.len().saturating_sub(1);
    session.pending = args[..kept].to_vec();
    Ok(Ack::Done)
}

/// `cb`: print the pending lines
pub fn show_pending(session: &mut EditorSession, args: &[String]) -> Result<Ack, EditError> {
    if !args.is_empty() {
        session.print(&args.join("\n"))?;
    }
    Ok(Ack::Done)
}

pub fn log_on(session: &mut EditorSession, _args: &[String]) -> Result<Ack, EditError> {
    session.set_logging(true)?;
    tracing::debug!("Diagnostics on");
    Ok(Ack::Done)
}

pub fn log_off(session: &mut EditorSession, _args: &[String]) -> Result<Ack, EditError> {
    tracing::debug!("Diagnostics off");
    session.set_logging(false)?;
    Ok(Ack::Done)
}

/// `commands`: list every registered name, sorted
pub fn list_commands(session: &mut EditorSession, _args: &[String]) -> Result<Ack, EditError> {
    let names: Vec<&str> = session.registry.names().collect();
    let listing = format!("Available commands: {}", names.join(", "));
    session.print(&listing)?;
    Ok(Ack::Done)
}
