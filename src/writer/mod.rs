//! Property writers
//!
//! One dispatcher, [`write_property`], turns a classified property into
//! calls on a [`PropertySink`]. The live DOM (`dom`) and the SSR attribute
//! buffer (`string`) are the two sinks, so client and server output are
//! decided by the same code.

pub mod dom;
pub mod string;

pub use dom::{apply_properties, apply_property, apply_styles};
pub use string::{
    AttributeBuffer, render_element, render_open_tag, serialize_properties, serialize_property,
};

use crate::attributes::{
    Classification, NumericTarget, classify, is_valid_attribute_name, property_name,
};
use crate::props::{PropValue, PropertyMap, StyleMap};
use crate::utils::Result;

/// Render-target capabilities used by the dispatcher
#[cfg_attr(test, mockall::automock)]
pub trait PropertySink {
    /// Set a content attribute to a string value
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<()>;

    /// Remove a content attribute
    fn remove_attribute(&mut self, name: &str) -> Result<()>;

    /// Add or remove a presence-only attribute
    fn toggle_attribute(&mut self, name: &str, present: bool) -> Result<()>;

    /// Assign a live property
    fn set_property(&mut self, name: &str, value: &PropValue) -> Result<()>;

    /// Unset a live property
    fn remove_property(&mut self, name: &str) -> Result<()>;

    /// Apply a style map
    fn write_styles(&mut self, styles: &StyleMap) -> Result<()>;
}

/// Write one property to `sink` according to its classification.
pub fn write_property<S: PropertySink + ?Sized>(
    sink: &mut S,
    name: &str,
    value: &PropValue,
) -> Result<()> {
    if name == "style" {
        return write_style(sink, value);
    }
    if !is_valid_attribute_name(name) {
        log::warn!("Skipping property with invalid name {:?}", name);
        return Ok(());
    }

    let classification = classify(name);
    log::trace!("{} classified as {:?}", name, classification);

    match classification {
        Classification::Boolean { mirrored } => {
            let present = !value.is_absent() && *value != PropValue::Bool(false);
            sink.toggle_attribute(name, present)?;
            if mirrored {
                if value.is_absent() {
                    sink.remove_property(name)?;
                } else {
                    sink.set_property(name, value)?;
                }
            }
        }
        Classification::Booleanish | Classification::Numeric(NumericTarget::Property) => {
            write_live_property(sink, name, value)?;
        }
        Classification::PropertyDirect => {
            let property = property_name(name);
            if property == "className" && *value == PropValue::Null {
                sink.set_property(property, &PropValue::Str(String::new()))?;
            } else {
                write_live_property(sink, property, value)?;
            }
        }
        Classification::Numeric(NumericTarget::Attribute)
        | Classification::AttributePassThrough => {
            if value.is_absent() {
                sink.remove_attribute(name)?;
            } else {
                sink.set_attribute(name, &value.to_attribute_string())?;
            }
        }
    }
    Ok(())
}

/// Write every property of `props` in insertion order.
pub fn write_properties<S: PropertySink + ?Sized>(
    sink: &mut S,
    props: &PropertyMap,
) -> Result<()> {
    for (name, value) in props.iter() {
        write_property(sink, name, value)?;
    }
    Ok(())
}

fn write_live_property<S: PropertySink + ?Sized>(
    sink: &mut S,
    property: &str,
    value: &PropValue,
) -> Result<()> {
    if value.is_absent() {
        sink.remove_property(property)
    } else {
        sink.set_property(property, value)
    }
}

/// Style maps merge into the declaration; style text replaces it, as
/// assigning the `style` attribute does.
fn write_style<S: PropertySink + ?Sized>(sink: &mut S, value: &PropValue) -> Result<()> {
    match value {
        PropValue::Style(styles) => sink.write_styles(styles),
        PropValue::Undefined | PropValue::Null => sink.remove_attribute("style"),
        other => sink.set_attribute("style", &other.to_attribute_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::StyleValue;
    use mockall::predicate::eq;

    #[test]
    fn test_empty_map_touches_nothing() {
        // any call on a mock without expectations panics
        let mut sink = MockPropertySink::new();
        write_properties(&mut sink, &PropertyMap::new()).unwrap();
    }

    #[test]
    fn test_mirrored_boolean_sets_attribute_and_property() {
        let mut sink = MockPropertySink::new();
        sink.expect_toggle_attribute()
            .with(eq("selected"), eq(true))
            .times(1)
            .returning(|_, _| Ok(()));
        sink.expect_set_property()
            .with(eq("selected"), eq(PropValue::Str("selected".into())))
            .times(1)
            .returning(|_, _| Ok(()));

        write_property(&mut sink, "selected", &PropValue::Str("selected".into())).unwrap();
    }

    #[test]
    fn test_mirrored_boolean_false_keeps_property() {
        let mut sink = MockPropertySink::new();
        sink.expect_toggle_attribute()
            .with(eq("required"), eq(false))
            .times(1)
            .returning(|_, _| Ok(()));
        sink.expect_set_property()
            .with(eq("required"), eq(PropValue::Bool(false)))
            .times(1)
            .returning(|_, _| Ok(()));

        write_property(&mut sink, "required", &PropValue::Bool(false)).unwrap();
    }

    #[test]
    fn test_unmirrored_boolean_only_toggles() {
        let mut sink = MockPropertySink::new();
        sink.expect_toggle_attribute()
            .with(eq("disabled"), eq(true))
            .times(1)
            .returning(|_, _| Ok(()));

        write_property(&mut sink, "disabled", &PropValue::Str("disabled".into())).unwrap();
    }

    #[test]
    fn test_zero_and_empty_string_are_present() {
        let mut sink = MockPropertySink::new();
        sink.expect_toggle_attribute()
            .with(eq("checked"), eq(true))
            .times(2)
            .returning(|_, _| Ok(()));
        sink.expect_set_property()
            .with(eq("checked"), eq(PropValue::Number(0.0)))
            .times(1)
            .returning(|_, _| Ok(()));
        sink.expect_set_property()
            .with(eq("checked"), eq(PropValue::Str(String::new())))
            .times(1)
            .returning(|_, _| Ok(()));

        write_property(&mut sink, "checked", &PropValue::Number(0.0)).unwrap();
        write_property(&mut sink, "checked", &PropValue::Str(String::new())).unwrap();
    }

    #[test]
    fn test_class_null_becomes_empty_class_name() {
        let mut sink = MockPropertySink::new();
        sink.expect_set_property()
            .with(eq("className"), eq(PropValue::Str(String::new())))
            .times(1)
            .returning(|_, _| Ok(()));

        write_property(&mut sink, "class", &PropValue::Null).unwrap();
    }

    #[test]
    fn test_pass_through_false_is_stringified() {
        let mut sink = MockPropertySink::new();
        sink.expect_set_attribute()
            .with(eq("aria-disabled"), eq("false"))
            .times(1)
            .returning(|_, _| Ok(()));

        write_property(&mut sink, "aria-disabled", &PropValue::Bool(false)).unwrap();
    }

    #[test]
    fn test_numeric_attribute_zero_is_present() {
        let mut sink = MockPropertySink::new();
        sink.expect_set_attribute()
            .with(eq("size"), eq("0"))
            .times(1)
            .returning(|_, _| Ok(()));

        write_property(&mut sink, "size", &PropValue::Number(0.0)).unwrap();
    }

    #[test]
    fn test_style_text_replaces_style_attribute() {
        let mut sink = MockPropertySink::new();
        sink.expect_set_attribute()
            .with(eq("style"), eq("color: red"))
            .times(1)
            .returning(|_, _| Ok(()));

        write_property(&mut sink, "style", &PropValue::Str("color: red".into())).unwrap();
    }

    #[test]
    fn test_style_map_goes_to_declaration() {
        let mut sink = MockPropertySink::new();
        let expected = StyleMap::new().with("color", StyleValue::Str("red".into()));
        sink.expect_write_styles()
            .with(eq(expected.clone()))
            .times(1)
            .returning(|_| Ok(()));

        write_property(&mut sink, "style", &PropValue::Style(expected)).unwrap();
    }

    #[test]
    fn test_invalid_name_is_skipped() {
        let mut sink = MockPropertySink::new();
        write_property(&mut sink, "x\"onload", &PropValue::Str("alert(1)".into())).unwrap();
    }

    #[test]
    fn test_sink_errors_propagate() {
        use crate::utils::{TargetError, VdomError};

        let mut sink = MockPropertySink::new();
        sink.expect_set_attribute().returning(|_, _| {
            Err(TargetError::Unsupported {
                operation: "setAttribute",
                target: "text",
            }
            .into())
        });

        let err = write_property(&mut sink, "title", &PropValue::Str("x".into())).unwrap_err();
        assert!(matches!(err, VdomError::Target(_)));
    }
}
