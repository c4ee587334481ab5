//! Line mutations at the cursor: `r`, `i`, `a`, `d`
//!
//! A cursor at or past the end of the document falls back to appending.
//! None of these move the cursor.

use crate::commands::Ack;
use crate::error::EditError;
use crate::model::EditorSession;

/// `r`: replace the line at the cursor with the pending lines
///
/// An empty buffer replaces the line with an empty one.
pub fn replace(session: &mut EditorSession, args: &[String]) -> Result<Ack, EditError> {
    let blank = [String::new()];
    let lines = if args.is_empty() { &blank[..] } else { args };

    let doc = &mut session.document;
    doc.normalize();
    if session.cursor < doc.line_count() {
        doc.replace_at(session.cursor, lines);
    } else {
        doc.append(lines);
    }
    doc.normalize();
    Ok(Ack::Done)
}

/// `i`: insert the pending lines before the cursor
pub fn insert(session: &mut EditorSession, args: &[String]) -> Result<Ack, EditError> {
    let doc = &mut session.document;
    doc.normalize();
    if session.cursor < doc.line_count() {
        doc.insert_at(session.cursor, args);
    } else {
        doc.append(args);
    }
    doc.normalize();
    Ok(Ack::Done)
}

/// `a`: insert the pending lines after the cursor
pub fn append(session: &mut EditorSession, args: &[String]) -> Result<Ack, EditError> {
    let doc = &mut session.document;
    doc.normalize();
    let after = session.cursor.saturating_add(1);
    if after < doc.line_count() {
        doc.insert_at(after, args);
    } else {
        doc.append(args);
    }
    doc.normalize();
    Ok(Ack::Done)
}

/// `d`: delete the line at the cursor
///
/// When the line after the cursor does not exist, the last line of the
/// document goes instead, wherever the cursor is.
pub fn delete(session: &mut EditorSession, _args: &[String]) -> Result<Ack, EditError> {
    let doc = &mut session.document;
    doc.normalize();
    if session.cursor.saturating_add(1) < doc.line_count() {
        let removed = doc.remove_at(session.cursor);
        tracing::debug!("Deleted line {}: {:?}", session.cursor, removed);
    } else if let Some(removed) = doc.remove_last() {
        tracing::debug!("Deleted last line: {:?}", removed);
    }
    Ok(Ack::Done)
}
