//! Console I/O for a session
//!
//! Document lines and listings go to `out`; acknowledgements, `?` and error
//! messages go to `err`. Command lines and paging confirmations are read
//! from the same `input`, so a pause consumes the next typed line.

use std::cell::RefCell;
use std::io::{self, BufRead, BufReader, Write};
use std::rc::Rc;

pub struct Console {
    out: Box<dyn Write>,
    err: Box<dyn Write>,
    input: Box<dyn BufRead>,
}

impl Console {
    pub fn new(out: Box<dyn Write>, err: Box<dyn Write>, input: Box<dyn BufRead>) -> Self {
        Self { out, err, input }
    }

    /// Console bound to the process' standard streams
    pub fn stdio() -> Self {
        Self::new(
            Box::new(io::stdout()),
            Box::new(io::stderr()),
            Box::new(BufReader::new(io::stdin())),
        )
    }

    /// Read one line with its terminator stripped, `None` at end of input
    ///
    /// Invalid UTF-8 is replaced with U+FFFD rather than failing the read.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        self.out.flush()?;
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        if raw.last() == Some(&b'\n') {
            raw.pop();
            if raw.last() == Some(&b'\r') {
                raw.pop();
            }
        }
        let line = match String::from_utf8(raw) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!("Input line is not valid UTF-8, decoding lossily");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        Ok(Some(line))
    }

    /// Block for a paging confirmation; `false` means stop
    ///
    /// A response starting with `q`, or end of input, stops.
    pub fn confirm_continue(&mut self) -> io::Result<bool> {
        match self.read_line()? {
            Some(answer) => Ok(!answer.starts_with('q')),
            None => Ok(false),
        }
    }

    pub fn print(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    /// Write to stderr, ignoring failures (there is nowhere left to report them)
    pub fn report(&mut self, text: &str) {
        let _ = writeln!(self.err, "{}", text);
        let _ = self.err.flush();
    }
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}

/// In-memory writer whose contents stay readable after being boxed
///
/// Used to drive sessions without a terminal (tests, embedding).
#[derive(Debug, Clone, Default)]
pub struct Capture(Rc<RefCell<Vec<u8>>>);

impl Capture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
