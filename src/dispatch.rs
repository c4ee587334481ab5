//! Dispatcher - the read loop and the accumulation protocol
//!
//! Each input line is either a cursor jump, a command that consumes the
//! pending buffer, or text appended to it.

use crate::commands::{Ack, Command};
use crate::error::EditError;
use crate::messages::Input;
use crate::model::EditorSession;

/// Whether the read loop keeps going after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Read and dispatch lines until `quit` or end of input
pub fn run(session: &mut EditorSession) -> Result<(), EditError> {
    loop {
        session.scripts.publish_line(session.cursor);
        let Some(line) = session.console.read_line()? else {
            tracing::debug!("End of input");
            return Ok(());
        };
        if feed_line(session, &line) == Flow::Quit {
            return Ok(());
        }
    }
}

/// Dispatch a single raw line
pub fn feed_line(session: &mut EditorSession, line: &str) -> Flow {
    match Input::classify(&session.registry, line) {
        Input::Jump(target) => {
            tracing::debug!("Cursor {} -> {}", session.cursor, target);
            session.cursor = target;
            Flow::Continue
        }
        Input::BadJump(target) => {
            tracing::warn!("Not a line number: {:?}", target);
            session.report(&format!("? not a line number: {}", target));
            Flow::Continue
        }
        Input::Command { name, command } => execute(session, &name, command),
        Input::Text(text) => {
            session.pending.push(text);
            Flow::Continue
        }
    }
}

/// Run a command against the pending buffer, then apply its buffer policy
fn execute(session: &mut EditorSession, name: &str, command: Command) -> Flow {
    let args = session.pending.clone();
    tracing::debug!("Dispatching {:?} with {} pending lines", name, args.len());

    let result = command.handler.execute(session, &args);
    command.policy.apply(&mut session.pending);

    match result {
        Ok(Ack::Quit) => Flow::Quit,
        Ok(Ack::Done) => {
            let marker = session.success_marker().to_string();
            session.report(&marker);
            Flow::Continue
        }
        Err(e) => {
            tracing::warn!("{} failed: {}", name, e);
            session.report(&e.to_string());
            Flow::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{Capture, Console};
    use crate::scripting::NullEngine;

    fn session(input: &str) -> (EditorSession, Capture, Capture) {
        let out = Capture::new();
        let err = Capture::new();
        let console = Console::new(
            Box::new(out.clone()),
            Box::new(err.clone()),
            Box::new(std::io::Cursor::new(input.as_bytes().to_vec())),
        );
        (
            EditorSession::new(console, Box::new(NullEngine)),
            out,
            err,
        )
    }

    #[test]
    fn test_text_accumulates_silently() {
        let (mut s, out, err) = session("");
        assert_eq!(feed_line(&mut s, "one"), Flow::Continue);
        assert_eq!(feed_line(&mut s, "two"), Flow::Continue);
        assert_eq!(s.pending, vec!["one", "two"]);
        assert!(out.contents().is_empty());
        assert!(err.contents().is_empty());
    }

    #[test]
    fn test_jump_leaves_buffer_alone() {
        let (mut s, _, _) = session("");
        feed_line(&mut s, "kept");
        feed_line(&mut s, ":5");
        assert_eq!(s.cursor, 5);
        assert_eq!(s.pending, vec!["kept"]);
    }

    #[test]
    fn test_bad_jump_reports() {
        let (mut s, _, err) = session("");
        s.cursor = 2;
        feed_line(&mut s, ":abc");
        assert_eq!(s.cursor, 2);
        assert!(err.contents().starts_with('?'));
        assert!(s.pending.is_empty());
    }

    #[test]
    fn test_success_is_acknowledged() {
        let (mut s, _, err) = session("");
        feed_line(&mut s, "x");
        feed_line(&mut s, "i");
        assert_eq!(err.contents(), "!\n");
        assert!(s.pending.is_empty());
    }

    #[test]
    fn test_error_is_reported_and_buffer_still_cleared() {
        let (mut s, _, err) = session("");
        feed_line(&mut s, "search");
        assert_eq!(err.contents(), "keyword missing\n");

        feed_line(&mut s, "x");
        feed_line(&mut s, "y");
        feed_line(&mut s, "z");
        feed_line(&mut s, "print");
        assert!(s.pending.is_empty());
    }

    #[test]
    fn test_quit_stops_loop() {
        let (mut s, _, _) = session("hello\nquit\nnever\n");
        run(&mut s).unwrap();
        assert!(s.pending.is_empty());
        assert_eq!(s.console.read_line().unwrap().as_deref(), Some("never"));
    }

    #[test]
    fn test_invalid_utf8_line_does_not_end_loop() {
        let console = Console::new(
            Box::new(Capture::new()),
            Box::new(Capture::new()),
            Box::new(std::io::Cursor::new(b"\xff\xfe\nhello\nquit\nnever\n".to_vec())),
        );
        let mut s = EditorSession::new(console, Box::new(NullEngine));
        run(&mut s).unwrap();
        // both lines were buffered, then `quit` consumed them
        assert!(s.pending.is_empty());
        assert_eq!(s.console.read_line().unwrap().as_deref(), Some("never"));
    }

    #[test]
    fn test_end_of_input_ends_loop() {
        let (mut s, _, _) = session("a\nb\n");
        run(&mut s).unwrap();
        assert_eq!(s.pending, vec!["a", "b"]);
    }
}
