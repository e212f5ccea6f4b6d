//! Loading property maps from JSON
//!
//! JSON has no `undefined`, so loaded maps only ever carry `Null` for
//! absence. Object order is preserved (`serde_json/preserve_order`).

use super::{PropValue, PropertyMap, StyleMap, StyleValue};
use crate::utils::{Result, VdomError};
use serde_json::Value;

impl PropertyMap {
    /// Parse a JSON object into a property map
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| VdomError::InvalidProps(e.to_string()))?;
        Self::try_from(value)
    }
}

impl TryFrom<Value> for PropertyMap {
    type Error = VdomError;

    fn try_from(value: Value) -> Result<Self> {
        let Value::Object(object) = value else {
            return Err(VdomError::InvalidProps(format!(
                "expected an object, found {}",
                json_kind(&value)
            )));
        };

        let mut props = PropertyMap::new();
        for (name, value) in object {
            let prop = match value {
                Value::Object(styles) if name == "style" => PropValue::Style(
                    styles
                        .into_iter()
                        .map(|(style_name, v)| (style_name, style_value(v)))
                        .collect::<StyleMap>(),
                ),
                other => scalar_value(other),
            };
            props.insert(name, prop);
        }
        Ok(props)
    }
}

fn scalar_value(value: Value) -> PropValue {
    match value {
        Value::Null => PropValue::Null,
        Value::Bool(b) => PropValue::Bool(b),
        Value::Number(n) => n
            .as_f64()
            .map(PropValue::Number)
            .unwrap_or_else(|| PropValue::Str(n.to_string())),
        Value::String(s) => PropValue::Str(s),
        // Not validated here; coerced to text like any other stray value
        other => PropValue::Str(other.to_string()),
    }
}

fn style_value(value: Value) -> StyleValue {
    match value {
        Value::Null => StyleValue::Null,
        Value::Number(n) => n
            .as_f64()
            .map(StyleValue::Number)
            .unwrap_or_else(|| StyleValue::Str(n.to_string())),
        Value::String(s) => StyleValue::Str(s),
        other => StyleValue::Str(other.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
