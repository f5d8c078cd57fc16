//! Property-text records: `key=value` lines consumed by the runtime binder.

use std::collections::BTreeMap;

/// A key→value record rendered as property text.
///
/// Keys are kept sorted so a record's bytes only depend on its contents,
/// never on insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySet {
    entries: BTreeMap<String, String>,
}

impl PropertySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Render the record, one `key=value` line per entry, keys sorted.
    ///
    /// No comment or timestamp header is written.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.entries {
            out.push_str(&escape(key));
            out.push('=');
            out.push_str(&escape(value));
            out.push('\n');
        }
        out
    }
}

/// Escape a key or value for property text.
///
/// Space becomes `\ `, tab `\t`, newline `\n`, and each of `=` `:` `#` `!`
/// gets a leading backslash. Every other character - including backslash
/// itself and all non-ASCII text - passes through unchanged; consumers rely
/// on that identity passthrough.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            ' ' => out.push_str("\\ "),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}
