use crate::error::{IndexError, ParseError, Result};
use crate::index::types::Index;
use crate::utils::{split, SplitPolicy};
use std::fs;
use std::path::Path;
use tracing::info;

const LIST_OPEN: &str = "<list> ";
const LIST_CLOSE: &str = "</list>";

/// Parse persisted index text back into an [`Index`].
///
/// Entries and records keep the order they appear in; nothing is re-sorted.
/// A `<list>` line for a token seen before reopens that entry. A data line
/// assigns each `PATH COUNT` pair to the open entry, overwriting any count
/// already loaded for that path.
pub fn parse_index(text: &str) -> Result<Index, ParseError> {
    let mut index = Index::in_text_order();
    let mut open: Option<String> = None;

    for (i, raw) in split(text, b'\n', SplitPolicy::Preserve).iter().enumerate() {
        let line_no = i + 1;
        let line = raw.strip_suffix('\r').unwrap_or(raw);

        if let Some(token) = line.strip_prefix(LIST_OPEN) {
            if token.is_empty() {
                return Err(ParseError::EmptyToken { line: line_no });
            }
            index.entry_or_insert(token);
            open = Some(token.to_string());
            continue;
        }

        if line == LIST_CLOSE {
            open = None;
            continue;
        }

        let fields: Vec<&str> = line.split_ascii_whitespace().collect();
        if fields.is_empty() {
            continue;
        }

        let Some(token) = open.as_deref() else {
            return Err(ParseError::OrphanRecord { line: line_no });
        };
        let entry = index.entry_or_insert(token);

        for pair in fields.chunks(2) {
            let [path, count] = pair else {
                return Err(ParseError::MissingCount {
                    line: line_no,
                    path: pair[0].to_string(),
                });
            };
            let count: u32 = count.parse().map_err(|_| ParseError::InvalidCount {
                line: line_no,
                value: count.to_string(),
            })?;
            entry.set_count(path, count);
        }
    }

    Ok(index)
}

/// Read and parse the index file at `path`.
pub fn read_index_file(path: &Path) -> Result<Index> {
    let bytes = fs::read(path).map_err(|e| IndexError::io(path, e))?;
    let text = String::from_utf8_lossy(&bytes);
    let index = parse_index(&text).map_err(|source| IndexError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        path = %path.display(),
        entries = index.len(),
        records = index.record_count(),
        "loaded index"
    );
    Ok(index)
}
