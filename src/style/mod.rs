//! Style codec
//!
//! Converts a [`StyleMap`] either into assignments on a live element's style
//! declaration or into canonical CSS text (`kebab-name:value;`). Both paths
//! share [`normalize_value`], so a style applied on the client serializes to
//! exactly what the server would have emitted.

mod parse;

pub use parse::parse_style_text;

use crate::props::{StyleMap, StyleValue, format_number};
use crate::renderer::ElementData;
use std::borrow::Cow;

/// Properties whose numeric values take no unit
const UNITLESS_PROPERTIES: &[&str] = &[
    "animationIterationCount",
    "aspectRatio",
    "borderImageOutset",
    "borderImageSlice",
    "borderImageWidth",
    "boxFlex",
    "boxFlexGroup",
    "boxOrdinalGroup",
    "columnCount",
    "columns",
    "fillOpacity",
    "flex",
    "flexGrow",
    "flexNegative",
    "flexOrder",
    "flexPositive",
    "flexShrink",
    "floodOpacity",
    "fontWeight",
    "gridArea",
    "gridColumn",
    "gridColumnEnd",
    "gridColumnSpan",
    "gridColumnStart",
    "gridRow",
    "gridRowEnd",
    "gridRowSpan",
    "gridRowStart",
    "lineClamp",
    "lineHeight",
    "opacity",
    "order",
    "orphans",
    "scale",
    "stopOpacity",
    "strokeDasharray",
    "strokeDashoffset",
    "strokeMiterlimit",
    "strokeOpacity",
    "strokeWidth",
    "tabSize",
    "widows",
    "zIndex",
    "zoom",
];

/// Whether numeric values of `name` are written without `px`
pub fn is_unitless(name: &str) -> bool {
    is_custom_property(name) || UNITLESS_PROPERTIES.contains(&name)
}

fn is_custom_property(name: &str) -> bool {
    name.starts_with("--")
}

/// Normalize a style value for `name`.
///
/// Returns `None` for `Null`/`Undefined`.
pub fn normalize_value(name: &str, value: &StyleValue) -> Option<String> {
    match value {
        StyleValue::Undefined | StyleValue::Null => None,
        StyleValue::Number(n) if is_unitless(name) => Some(format_number(*n)),
        StyleValue::Number(n) => Some(format!("{}px", format_number(*n))),
        StyleValue::Str(s) => Some(s.clone()),
    }
}

/// `backgroundColor` to `background-color`, `WebkitTransition` to
/// `-webkit-transition`, `msTransform` to `-ms-transform`.
pub fn camel_to_kebab(name: &str) -> Cow<'_, str> {
    if is_custom_property(name) || !name.chars().any(|c| c.is_ascii_uppercase()) {
        return Cow::Borrowed(name);
    }

    let mut kebab = String::with_capacity(name.len() + 4);
    if name.starts_with("ms") {
        kebab.push('-');
    }
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            kebab.push('-');
            kebab.push(c.to_ascii_lowercase());
        } else {
            kebab.push(c);
        }
    }
    Cow::Owned(kebab)
}

/// Inverse of [`camel_to_kebab`], used when reading CSS text back into a
/// style declaration.
pub fn kebab_to_camel(name: &str) -> Cow<'_, str> {
    if is_custom_property(name) || !name.contains('-') {
        return Cow::Borrowed(name);
    }

    let (stem, capitalize_first) = match name.strip_prefix("-ms-") {
        Some(rest) => (Cow::Owned(format!("ms-{rest}")), false),
        None => match name.strip_prefix('-') {
            Some(rest) => (Cow::Borrowed(rest), true),
            None => (Cow::Borrowed(name), false),
        },
    };

    let mut camel = String::with_capacity(stem.len());
    let mut upper_next = capitalize_first;
    for c in stem.chars() {
        if c == '-' {
            upper_next = true;
        } else if upper_next {
            camel.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            camel.push(c);
        }
    }
    Cow::Owned(camel)
}

/// Append one `name:value;` declaration
pub(crate) fn push_declaration(out: &mut String, name: &str, value: &str) {
    out.push_str(&camel_to_kebab(name));
    out.push(':');
    out.push_str(value);
    out.push(';');
}

/// Render a style map as CSS text.
///
/// Entries that are absent or normalize to an empty string are skipped; an
/// empty declaration would not survive on a live element either.
pub fn to_style_text(styles: &StyleMap) -> String {
    let mut text = String::new();
    for (name, value) in styles.iter() {
        if let Some(normalized) = normalize_value(name, value) {
            if !normalized.is_empty() {
                push_declaration(&mut text, name, &normalized);
            }
        }
    }
    text
}

/// Assign every entry to the element's live style declaration.
///
/// Absent entries clear the property to `""` so a style left off a new map
/// does not linger.
pub fn apply_styles(element: &mut ElementData, styles: &StyleMap) {
    for (name, value) in styles.iter() {
        match normalize_value(name, value) {
            Some(normalized) => element.set_style(name, &normalized),
            None => element.set_style(name, ""),
        }
    }
}
