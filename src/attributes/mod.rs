//! Attribute classification
//!
//! Decides, per property name, how a value reaches the element: as a content
//! attribute, as a live property, or both. Everything here is a pure lookup
//! over immutable tables, so it is safe to call from independent render
//! passes on different threads.

mod tables;

pub(crate) use tables::BOOLEAN_ATTRIBUTES;
use tables::{
    BOOLEANISH, MIRRORED_BOOLEANS, NUMERIC_ATTRIBUTES, NUMERIC_PROPERTIES, PROPERTY_ALIASES,
    PROPERTY_DIRECT, REFLECTED_PROPERTIES,
};

/// How a property name must be written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Present-or-absent content attribute.
    ///
    /// `mirrored` names also exist as a live property that receives the
    /// input value verbatim.
    Boolean { mirrored: bool },
    /// Live property accepting both booleans and strings, never coerced
    Booleanish,
    /// Number-valued; see [`NumericTarget`]
    Numeric(NumericTarget),
    /// Live property only
    PropertyDirect,
    /// Content attribute set to the value's string form
    AttributePassThrough,
}

/// Where a numeric value is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericTarget {
    /// Assigned to the live property as a number
    Property,
    /// Written as a decimal string attribute
    Attribute,
}

/// Classify a property name.
///
/// Unknown names fall back to [`Classification::AttributePassThrough`].
pub fn classify(name: &str) -> Classification {
    if name.starts_with("data-") || name.starts_with("aria-") {
        return Classification::AttributePassThrough;
    }
    if BOOLEAN_ATTRIBUTES.contains(&name) {
        return Classification::Boolean {
            mirrored: MIRRORED_BOOLEANS.contains(&name),
        };
    }
    if BOOLEANISH.contains(&name) {
        return Classification::Booleanish;
    }
    if NUMERIC_PROPERTIES.contains(&name) {
        return Classification::Numeric(NumericTarget::Property);
    }
    if NUMERIC_ATTRIBUTES.contains(&name) {
        return Classification::Numeric(NumericTarget::Attribute);
    }
    if PROPERTY_DIRECT.contains(&name)
        || PROPERTY_ALIASES.iter().any(|(alias, _)| *alias == name)
        || is_event_handler(name)
    {
        return Classification::PropertyDirect;
    }
    Classification::AttributePassThrough
}

/// Live property targeted by a markup name (`class` is `className`).
pub fn property_name(name: &str) -> &str {
    PROPERTY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, property)| *property)
        .unwrap_or(name)
}

/// Content attribute a live property reflects into, if any.
///
/// Properties without one (`value`, `selectedIndex`, handlers) have no
/// static markup equivalent and never appear in serialized output.
pub fn reflected_attribute(property: &str) -> Option<&'static str> {
    REFLECTED_PROPERTIES
        .iter()
        .find(|(name, _)| *name == property)
        .map(|(_, attribute)| *attribute)
}

/// Whether `name` can appear as an attribute name in serialized markup.
///
/// Mirrors the characters a DOM `setAttribute` would refuse plus the ones
/// that would break out of an attribute in a tag.
pub fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace()
                || c.is_control()
                || matches!(c, '"' | '\'' | '>' | '<' | '/' | '=')
        })
}

/// `onClick`-style handler names
fn is_event_handler(name: &str) -> bool {
    name.strip_prefix("on")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_attributes() {
        assert_eq!(classify("disabled"), Classification::Boolean { mirrored: false });
        assert_eq!(classify("autofocus"), Classification::Boolean { mirrored: false });
        assert_eq!(classify("checked"), Classification::Boolean { mirrored: true });
        assert_eq!(classify("selected"), Classification::Boolean { mirrored: true });
        assert_eq!(classify("required"), Classification::Boolean { mirrored: true });
        assert_eq!(classify("multiple"), Classification::Boolean { mirrored: true });
    }

    #[test]
    fn test_booleanish() {
        assert_eq!(classify("download"), Classification::Booleanish);
    }

    #[test]
    fn test_numeric() {
        assert_eq!(classify("start"), Classification::Numeric(NumericTarget::Property));
        assert_eq!(classify("size"), Classification::Numeric(NumericTarget::Attribute));
    }

    #[test]
    fn test_property_direct() {
        for name in ["value", "selectedIndex", "open", "name", "id", "className", "class"] {
            assert_eq!(classify(name), Classification::PropertyDirect, "{name}");
        }
        assert_eq!(classify("onClick"), Classification::PropertyDirect);
    }

    #[test]
    fn test_pass_through() {
        for name in ["title", "maxlength", "contenteditable", "custom-attr", "type", "display"] {
            assert_eq!(classify(name), Classification::AttributePassThrough, "{name}");
        }
        // lowercase `on` prefix is a plain attribute
        assert_eq!(classify("online"), Classification::AttributePassThrough);
    }

    #[test]
    fn test_prefixes_win_over_tables() {
        assert_eq!(classify("aria-disabled"), Classification::AttributePassThrough);
        assert_eq!(classify("aria-checked"), Classification::AttributePassThrough);
        assert_eq!(classify("data-value"), Classification::AttributePassThrough);
    }

    #[test]
    fn test_aliases() {
        assert_eq!(property_name("class"), "className");
        assert_eq!(property_name("for"), "htmlFor");
        assert_eq!(property_name("value"), "value");
    }

    #[test]
    fn test_reflection() {
        assert_eq!(reflected_attribute("className"), Some("class"));
        assert_eq!(reflected_attribute("id"), Some("id"));
        assert_eq!(reflected_attribute("tabIndex"), Some("tabindex"));
        assert_eq!(reflected_attribute("value"), None);
        assert_eq!(reflected_attribute("selectedIndex"), None);
    }

    #[test]
    fn test_attribute_name_validation() {
        assert!(is_valid_attribute_name("data-foo"));
        assert!(is_valid_attribute_name("aria-label"));
        assert!(!is_valid_attribute_name(""));
        assert!(!is_valid_attribute_name("a b"));
        assert!(!is_valid_attribute_name("x\"onload"));
        assert!(!is_valid_attribute_name("a>"));
    }
}
