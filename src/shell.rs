//! Line-oriented search session over a loaded index.
//!
//! ```text
//! sa fox dog      documents containing both words
//! so fox dog      documents containing either word
//! q               quit
//! ```

use crate::error::QueryError;
use crate::index::Index;
use crate::output::print_results;
use crate::query::{parse_command, Command, QueryExecutor};
use crate::utils::fold_case;
use std::io::{self, BufRead, Write};
use termcolor::WriteColor;
use tracing::debug;

/// Message printed for an unrecognized verb
pub const INVALID_COMMAND: &str = "Error: Invalid command.";

#[derive(Debug, Clone, Copy)]
pub struct ShellOptions {
    /// Lowercase query lines before parsing, matching how documents are
    /// folded at build time
    pub fold_case: bool,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self { fold_case: true }
    }
}

/// Counters for a finished session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub queries: usize,
    pub invalid: usize,
}

pub struct Shell<'a> {
    executor: QueryExecutor<'a>,
    options: ShellOptions,
}

impl<'a> Shell<'a> {
    pub fn new(index: &'a Index, options: ShellOptions) -> Self {
        Self {
            executor: QueryExecutor::new(index),
            options,
        }
    }

    /// Answer commands from `input` until `q` or end of input.
    ///
    /// Results go to `out`, one line per command. Invalid commands are
    /// reported on `err`, answered with an empty result line, and the
    /// session carries on. Lines need not be valid UTF-8.
    pub fn run<R, W, E>(&self, mut input: R, out: &mut W, err: &mut E) -> io::Result<SessionStats>
    where
        R: BufRead,
        W: WriteColor,
        E: Write,
    {
        let mut stats = SessionStats::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = if self.options.fold_case {
                String::from_utf8_lossy(&fold_case(&buf)).into_owned()
            } else {
                String::from_utf8_lossy(&buf).into_owned()
            };

            match parse_command(&line) {
                Ok(None) => continue,
                Ok(Some(Command::Quit)) => break,
                Ok(Some(Command::Search(query))) => {
                    let results = self.executor.execute(&query);
                    print_results(out, &results)?;
                    stats.queries += 1;
                }
                Err(QueryError::UnknownCommand(verb)) => {
                    debug!(verb = %verb, "rejected command");
                    writeln!(err, "{INVALID_COMMAND}")?;
                    err.flush()?;
                    print_results::<_, &str>(out, &[])?;
                    stats.invalid += 1;
                }
            }
        }

        Ok(stats)
    }
}
