// crates/objdictgen/src/builder/utils.rs

//! Helpers for turning dictionary names into C identifiers.

use regex::Regex;
use std::sync::LazyLock;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z0-9_]+").expect("word pattern is valid"));

/// Joins the identifier-safe runs of `name` with underscores.
///
/// `"Producer Heartbeat Time"` becomes `"Producer_Heartbeat_Time"`.
pub fn format_name(name: &str) -> String {
    WORD.find_iter(name)
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join("_")
}

/// Prefixes an underscore to names starting with a digit.
pub fn undigit_name(name: &str) -> String {
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{}", name)
    } else {
        name.to_string()
    }
}

/// Replaces every non-ASCII character of `name` with `?`.
pub fn ascii_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii() { c } else { '?' })
        .collect()
}

/// `format_name` followed by `undigit_name`.
pub fn c_identifier(name: &str) -> String {
    undigit_name(&format_name(name))
}
