use crate::utils::OrderedList;

/// How [`split`] places the pieces it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitPolicy {
    /// Pieces keep the order they appear in (index file lines, record fields).
    Preserve,
    /// Duplicate pieces are pulled forward next to their first occurrence
    /// (query words).
    Group,
}

/// Fold ASCII uppercase letters to lowercase. Other bytes are untouched.
///
/// This is the only normalization documents receive before tokenizing; the
/// search shell applies the same step to query lines.
pub fn fold_case(bytes: &[u8]) -> Vec<u8> {
    bytes.to_ascii_lowercase()
}

#[inline]
fn is_token_byte(byte: u8) -> bool {
    byte.is_ascii_lowercase() || byte.is_ascii_digit()
}

/// Extract maximal runs of `a-z` / `0-9` from already folded text.
///
/// Any other byte, including uppercase letters that were not folded, ends
/// the current run. Tokens come back in the order they occur, duplicates
/// included.
pub fn tokenize_words(text: &[u8]) -> OrderedList<String> {
    let mut tokens = OrderedList::appending();
    let mut start: Option<usize> = None;

    for (i, &byte) in text.iter().enumerate() {
        if is_token_byte(byte) {
            if start.is_none() {
                start = Some(i);
            }
        } else if let Some(s) = start.take() {
            tokens.insert(ascii_token(&text[s..i]));
        }
    }

    // Run touching end of input
    if let Some(s) = start {
        tokens.insert(ascii_token(&text[s..]));
    }

    tokens
}

fn ascii_token(run: &[u8]) -> String {
    // Runs only ever contain ASCII alphanumerics
    run.iter().map(|&b| b as char).collect()
}

/// Split `text` on a single delimiter byte.
///
/// Every delimiter ends a piece, so adjacent delimiters yield empty pieces.
/// The piece after the last delimiter is kept only if it is non-empty. No
/// trimming happens beyond the split points.
pub fn split(text: &str, delimiter: u8, policy: SplitPolicy) -> OrderedList<String> {
    let mut pieces = match policy {
        SplitPolicy::Preserve => OrderedList::appending(),
        SplitPolicy::Group => OrderedList::grouping(),
    };

    let bytes = text.as_bytes();
    let mut last = 0;
    for position in memchr::memchr_iter(delimiter, bytes) {
        pieces.insert(String::from_utf8_lossy(&bytes[last..position]).into_owned());
        last = position + 1;
    }
    if last < bytes.len() {
        pieces.insert(String::from_utf8_lossy(&bytes[last..]).into_owned());
    }

    pieces
}
