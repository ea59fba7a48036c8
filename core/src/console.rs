//! Where the probe prints its report.

use std::io::{self, Stderr, Stdout, Write};

/// A pair of writers: progress and results go to `out`, error lines to `err`.
///
/// Printing is best-effort; a closed pipe must not change the probe's result.
pub struct Console<O: Write, E: Write> {
    out: O,
    err: E,
}

impl Console<Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Console<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    pub fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{text}");
    }

    pub fn error(&mut self, text: &str) {
        let _ = writeln!(self.err, "{text}");
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}
