//! Text rendering for values echoed back by the fixtures.
//!
//! Strings are quoted the way the Python launcher's own scripts print them, so
//! harnesses that compare output against the scripts' output keep matching.

use std::{ffi::OsStr, fmt::Write as _};

/// Renders a single value as a quoted string literal, e.g. `'value'`.
///
/// Single quotes are preferred; double quotes are used when the value holds a
/// `'` but no `"`. Values that are not valid UTF-8 are rendered lossily.
pub fn quoted(value: impl AsRef<OsStr>) -> String {
    let value = value.as_ref().to_string_lossy();
    let quote = if value.contains('\'') && !value.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(value.len() + 2);
    out.push(quote);
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_ascii_control() => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Renders a sequence as a bracketed list of quoted items, e.g. `['a', 'b']`.
pub fn quoted_list<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<OsStr>,
{
    let items: Vec<String> = items.into_iter().map(quoted).collect();
    format!("[{}]", items.join(", "))
}
