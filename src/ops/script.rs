//! Scripting bridges: `runjs`, script-registered commands, init scripts

use std::path::Path;

use crate::commands::{Ack, Command};
use crate::error::EditError;
use crate::model::EditorSession;
use crate::scripting::{CallbackId, ScriptOutcome, ScriptRequest};

/// `runjs`: evaluate the pending lines as one chunk and print its value
pub fn run_script(session: &mut EditorSession, args: &[String]) -> Result<Ack, EditError> {
    let source = args.join("\n");
    let outcome = session.scripts.eval(&source)?;
    tracing::debug!("Script value: {:?}", outcome.value);

    let value = outcome.value.clone();
    let ack = apply_outcome(session, outcome)?;
    if let Some(value) = value {
        session.print(&value)?;
    }
    Ok(ack)
}

/// Run a command registered by a script with the joined arguments
pub fn call_callback(
    session: &mut EditorSession,
    callback: CallbackId,
    args: &[String],
) -> Result<Ack, EditError> {
    let outcome = session.scripts.call(callback, &args.join("\n"))?;
    apply_outcome(session, outcome)
}

/// Evaluate a script file, e.g. the startup init script
pub fn run_script_file(session: &mut EditorSession, path: &Path) -> Result<Ack, EditError> {
    let source = std::fs::read_to_string(path).map_err(|e| EditError::io(path, e))?;
    tracing::info!("Running script {}", path.display());
    let outcome = session.scripts.eval(&source)?;
    apply_outcome(session, outcome)
}

/// Apply what a script queued, in order
///
/// Stops at the first failing invocation. A `quit` invoked from a script is
/// passed up once the remaining requests are skipped.
pub fn apply_outcome(session: &mut EditorSession, outcome: ScriptOutcome) -> Result<Ack, EditError> {
    for request in outcome.requests {
        match request {
            ScriptRequest::Register { name, callback } => {
                tracing::info!("Registered script command {:?}", name);
                session.registry.register(name, Command::script(callback));
            }
            ScriptRequest::Invoke { name, args } => {
                if session.invoke(&name, &args)? == Ack::Quit {
                    return Ok(Ack::Quit);
                }
            }
            ScriptRequest::Print(text) => session.print(&text)?,
        }
    }
    Ok(Ack::Done)
}
