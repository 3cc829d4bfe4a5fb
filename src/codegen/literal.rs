//! Python literal rendering for user-supplied text.
//!
//! Only string and list-of-string literals live here. Identifiers never pass
//! through this module; they are validated upstream and emitted verbatim.

use std::fmt::Write;

/// Render `s` as a double-quoted Python string literal that tokenizes back to `s`
pub fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // C0/C1 controls and DEL
            c if (c as u32) < 0x20 || (0x7f..=0x9f).contains(&(c as u32)) => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            '\u{2028}' | '\u{2029}' => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// `["a", "b"]`, or `[]` when empty
pub fn string_list(items: &[String]) -> String {
    let parts: Vec<String> = items.iter().map(|s| string_literal(s)).collect();
    format!("[{}]", parts.join(", "))
}

pub fn bool_literal(b: bool) -> &'static str {
    if b {
        "True"
    } else {
        "False"
    }
}
