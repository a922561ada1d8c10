use crate::error::{IndexError, Result};
use crate::index::types::Index;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Pairs per data line unless configured otherwise
pub const DEFAULT_RECORDS_PER_LINE: usize = 5;

/// What to do with an index file that already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Overwrite,
    Append,
}

/// Write `index` in the line-oriented text format:
///
/// ```text
/// <list> TOKEN
/// PATH COUNT PATH COUNT ...
/// </list>
/// ```
///
/// Records wrap onto a new line after every `records_per_line` pairs. Paths
/// are written verbatim; a path containing a space does not survive a
/// round trip.
pub fn write_index<W: Write>(index: &Index, out: &mut W, records_per_line: usize) -> io::Result<()> {
    let per_line = records_per_line.max(1);

    for entry in index.entries() {
        writeln!(out, "<list> {}", entry.token())?;

        let mut on_line = 0;
        for record in entry.records() {
            if on_line == per_line {
                writeln!(out)?;
                on_line = 0;
            }
            if on_line > 0 {
                write!(out, " ")?;
            }
            write!(out, "{} {}", record.path, record.count)?;
            on_line += 1;
        }
        if on_line > 0 {
            writeln!(out)?;
        }

        writeln!(out, "</list>")?;
    }

    Ok(())
}

/// Serialize `index` to a string.
pub fn serialize(index: &Index, records_per_line: usize) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_index(index, &mut buf, records_per_line);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Write `index` to the file at `path`, truncating or appending.
pub fn write_index_file(
    path: &Path,
    index: &Index,
    mode: WriteMode,
    records_per_line: usize,
) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(mode == WriteMode::Overwrite)
        .append(mode == WriteMode::Append)
        .open(path)
        .map_err(|e| IndexError::io(path, e))?;

    let mut out = BufWriter::new(file);
    write_index(index, &mut out, records_per_line)
        .and_then(|()| out.flush())
        .map_err(|e| IndexError::io(path, e))?;

    info!(
        path = %path.display(),
        entries = index.len(),
        records = index.record_count(),
        ?mode,
        "wrote index"
    );
    Ok(())
}
