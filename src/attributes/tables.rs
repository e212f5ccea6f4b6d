//! Static classification tables

/// Content attributes whose presence alone means `true`
pub(crate) const BOOLEAN_ATTRIBUTES: &[&str] = &[
    "allowfullscreen",
    "async",
    "autofocus",
    "autoplay",
    "checked",
    "controls",
    "default",
    "defer",
    "disabled",
    "formnovalidate",
    "hidden",
    "inert",
    "ismap",
    "itemscope",
    "loop",
    "multiple",
    "muted",
    "nomodule",
    "novalidate",
    "playsinline",
    "readonly",
    "required",
    "reversed",
    "scoped",
    "seamless",
    "selected",
];

/// Boolean attributes that also have a same-named live property
pub(super) const MIRRORED_BOOLEANS: &[&str] =
    &["checked", "multiple", "muted", "required", "scoped", "selected"];

pub(super) const BOOLEANISH: &[&str] = &["download"];

pub(super) const NUMERIC_PROPERTIES: &[&str] = &["start", "tabIndex", "rowSpan", "colSpan"];

pub(super) const NUMERIC_ATTRIBUTES: &[&str] = &["size", "cols", "rows", "span"];

pub(super) const PROPERTY_DIRECT: &[&str] = &[
    "className",
    "defaultChecked",
    "defaultValue",
    "htmlFor",
    "id",
    "indeterminate",
    "name",
    "open",
    "selectedIndex",
    "value",
];

/// Markup names that address a differently-named live property
pub(super) const PROPERTY_ALIASES: &[(&str, &str)] = &[("class", "className"), ("for", "htmlFor")];

/// Live properties that reflect into a content attribute
pub(super) const REFLECTED_PROPERTIES: &[(&str, &str)] = &[
    ("className", "class"),
    ("colSpan", "colspan"),
    ("htmlFor", "for"),
    ("id", "id"),
    ("name", "name"),
    ("rowSpan", "rowspan"),
    ("start", "start"),
    ("tabIndex", "tabindex"),
];
