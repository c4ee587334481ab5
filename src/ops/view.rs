//! `print` and `page`

use crate::commands::Ack;
use crate::error::EditError;
use crate::model::EditorSession;

use super::parse_index;

fn too_many_args(command: &str, count: usize) -> EditError {
    tracing::warn!("{} given {} arguments, pending buffer too full", command, count);
    EditError::Usage(format!("{} takes at most 2 arguments, got {}", command, count))
}

/// `print`: whole document, line `n`, or the inclusive range `from..=to`
pub fn print(session: &mut EditorSession, args: &[String]) -> Result<Ack, EditError> {
    let (from, end) = match args {
        [] => (0, usize::MAX),
        [n] => {
            let n = parse_index(n);
            (n, n.saturating_add(1))
        }
        [from, to] => (parse_index(from), parse_index(to).saturating_add(1)),
        _ => return Err(too_many_args("print", args.len())),
    };

    session.document.normalize();
    print_lines(session, from, end, 0)?;
    Ok(Ack::Done)
}

/// `page`: from a start line to the end, pausing after every `pagesize` lines
///
/// No args pages one line at a time from the top.
pub fn page(session: &mut EditorSession, args: &[String]) -> Result<Ack, EditError> {
    let (from, page_size) = match args {
        [] => (0, 1),
        [size] => (0, parse_index(size)),
        [from, size] => (parse_index(from), parse_index(size)),
        _ => return Err(too_many_args("page", args.len())),
    };

    session.document.normalize();
    print_lines(session, from, usize::MAX, page_size)?;
    Ok(Ack::Done)
}

/// Print `[from, end)` clamped to the document, pausing after every
/// `page_size`-th line
///
/// A `page_size` of 0 never pauses. The cursor lands on the last line shown.
fn print_lines(
    session: &mut EditorSession,
    from: usize,
    end: usize,
    page_size: usize,
) -> Result<(), EditError> {
    let end = end.min(session.document.line_count());
    if from >= end {
        tracing::debug!("Nothing to print in {}..{}", from, end);
        return Ok(());
    }

    for index in from..end {
        let line = session.document.line(index).unwrap_or_default().to_string();
        session.print(&line)?;
        session.cursor = index;

        let shown = index - from + 1;
        if page_size > 0 && shown % page_size == 0 && !session.console.confirm_continue()? {
            tracing::debug!("Paging stopped after {} lines", shown);
            break;
        }
    }
    Ok(())
}
