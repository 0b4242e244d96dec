//! Operator console command source.
//!
//! Implements [`CommandSource`] over any buffered reader.  In production
//! that is the process's standard input, which ESP-IDF routes to the
//! UART/USB-CDC console.  One call blocks for one line; the terminator
//! is stripped and input beyond the fixed command capacity is truncated.
//!
//! A read error or end-of-input yields an empty line, which the command
//! parser resolves to all-heaters-off.

use std::io::{self, BufRead};

use log::warn;

use crate::app::ports::{CommandLine, CommandSource};

pub struct ConsoleCommandSource<R: BufRead> {
    reader: R,
    /// Scratch line buffer, reused between reads.
    line: std::string::String,
}

impl ConsoleCommandSource<io::StdinLock<'static>> {
    /// Command source over the process's standard input.
    pub fn stdin() -> Self {
        Self::from_reader(io::stdin().lock())
    }
}

impl<R: BufRead> ConsoleCommandSource<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            line: std::string::String::new(),
        }
    }
}

impl<R: BufRead> CommandSource for ConsoleCommandSource<R> {
    fn next_line(&mut self) -> CommandLine {
        self.line.clear();
        if let Err(e) = self.reader.read_line(&mut self.line) {
            warn!("console read failed: {e}");
            return CommandLine::new();
        }

        let mut out = CommandLine::new();
        for ch in self.line.trim_end_matches(['\r', '\n']).chars() {
            if out.push(ch).is_err() {
                // Capacity reached — truncate.
                break;
            }
        }
        out
    }
}
