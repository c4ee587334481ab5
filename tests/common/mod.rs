//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::io::Cursor;

use lined::console::{Capture, Console};
use lined::dispatch::{feed_line, Flow};
use lined::model::{Document, EditorSession};
use lined::scripting::{NullEngine, ScriptEngine};

/// A session over in-memory streams
///
/// `input` is what paging/search confirmations (and `dispatch::run`) read.
pub struct Harness {
    pub session: EditorSession,
    pub out: Capture,
    pub err: Capture,
}

impl Harness {
    pub fn new(input: &str) -> Self {
        Self::with_engine(input, Box::new(NullEngine))
    }

    pub fn with_engine(input: &str, engine: Box<dyn ScriptEngine>) -> Self {
        Self::build(input, engine, |session| session)
    }

    /// Harness whose session goes through `configure` (builder methods)
    pub fn build(
        input: &str,
        engine: Box<dyn ScriptEngine>,
        configure: impl FnOnce(EditorSession) -> EditorSession,
    ) -> Self {
        let out = Capture::new();
        let err = Capture::new();
        let console = Console::new(
            Box::new(out.clone()),
            Box::new(err.clone()),
            Box::new(Cursor::new(input.as_bytes().to_vec())),
        );
        Self {
            session: configure(EditorSession::new(console, engine)),
            out,
            err,
        }
    }

    /// Harness with a document already loaded and the cursor placed
    pub fn with_document(lines: &[&str], cursor: usize, input: &str) -> Self {
        let mut harness = Self::new(input);
        harness.session.document = Document::from_lines(lines.iter().copied());
        harness.session.cursor = cursor;
        harness
    }

    /// Feed typed lines through the dispatcher, returning the last flow
    pub fn feed(&mut self, lines: &[&str]) -> Flow {
        let mut flow = Flow::Continue;
        for line in lines {
            flow = feed_line(&mut self.session, line);
        }
        flow
    }

    pub fn lines(&self) -> Vec<String> {
        self.session.document.lines().to_vec()
    }

    pub fn out(&self) -> String {
        self.out.contents()
    }

    pub fn err(&self) -> String {
        self.err.contents()
    }

    /// Next unread input line, e.g. to see what a pause left behind
    pub fn next_input(&mut self) -> Option<String> {
        self.session.console.read_line().unwrap()
    }

    pub fn clear_output(&self) {
        self.out.clear();
        self.err.clear();
    }
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
