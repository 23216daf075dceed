//! Template directives registered on the application root.

use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Transforms the text content of an element it is attached to.
pub trait Directive: Send + Sync {
    fn apply(&self, input: &str) -> String;
}

const SQL_KEYWORDS: &[&str] = &[
    "ADD", "ALTER", "AND", "AS", "ASC", "BEGIN", "BY", "COLUMN", "COMMIT", "CREATE", "DATABASE",
    "DEFAULT", "DELETE", "DESC", "DISTINCT", "DROP", "EXISTS", "FROM", "GROUP", "HAVING", "IF",
    "IN", "INDEX", "INSERT", "INTO", "IS", "JOIN", "KEY", "LEFT", "LIMIT", "NOT", "NULL", "ON",
    "OR", "ORDER", "PRIMARY", "REFERENCES", "RIGHT", "ROLLBACK", "SELECT", "SET", "TABLE",
    "UNIQUE", "UPDATE", "VALUES", "VIEW", "WHERE",
];

fn keyword_re() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| {
        let pattern = format!(r"(?i)\b({})\b", SQL_KEYWORDS.join("|"));
        Regex::new(&pattern).ok()
    })
    .as_ref()
}

fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Marks SQL keywords for syntax highlighting. Text is HTML-escaped first.
pub struct Highlight;

impl Directive for Highlight {
    fn apply(&self, input: &str) -> String {
        let escaped = escape_html(input);
        match keyword_re() {
            Some(re) => re
                .replace_all(&escaped, |caps: &Captures| {
                    format!(r#"<span class="hljs-keyword">{}</span>"#, &caps[1])
                })
                .into_owned(),
            None => escaped,
        }
    }
}

/// Renders a data source type code as its display label.
pub struct DataSourceTypeLabel;

impl Directive for DataSourceTypeLabel {
    fn apply(&self, input: &str) -> String {
        match input.trim() {
            "ADMIN" => "Admin".to_string(),
            "RW" => "Read & Write".to_string(),
            "RO" => "Read only".to_string(),
            other => other.to_string(),
        }
    }
}
