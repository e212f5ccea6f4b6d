//! Markup escaping and element serialization rules shared by the live DOM
//! and the string writer

use std::borrow::Cow;

/// Elements that never have a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

pub fn is_void_element(tag_name: &str) -> bool {
    VOID_ELEMENTS.contains(&tag_name)
}

/// Escape a double-quoted attribute value (`&`, `<`, `"`).
pub fn escape_attribute_value(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '"']) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Escape text content (`&`, `<`, `>`).
pub fn escape_text(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Append ` name="value"`, or a bare ` name` when the value is empty.
///
/// Both forms parse to the same empty attribute value.
pub(crate) fn push_attribute(out: &mut String, name: &str, value: &str) {
    if value.is_empty() {
        push_flag(out, name);
        return;
    }
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attribute_value(value));
    out.push('"');
}

/// Append a bare ` name`
pub(crate) fn push_flag(out: &mut String, name: &str) {
    out.push(' ');
    out.push_str(name);
}
