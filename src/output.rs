//! Rendering of search results

use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};

/// Render results as `[path], [path]`. No results renders as an empty string.
pub fn format_results<S: AsRef<str>>(results: &[S]) -> String {
    results
        .iter()
        .map(|path| format!("[{}]", path.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Print results on one line, highlighting paths when `out` supports color.
pub fn print_results<W: WriteColor, S: AsRef<str>>(out: &mut W, results: &[S]) -> io::Result<()> {
    for (i, path) in results.iter().enumerate() {
        if i > 0 {
            write!(out, ", ")?;
        }
        write!(out, "[")?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
        write!(out, "{}", path.as_ref())?;
        out.reset()?;
        write!(out, "]")?;
    }
    writeln!(out)?;
    out.flush()
}
