//! Server-side writer: renders properties as attribute markup
//!
//! Properties are first collected into an [`AttributeBuffer`] that resolves
//! writes the way a live element would (aliases, later removals, style
//! re-synchronization), then flushed once per tag. The flushed text is what
//! the live node's `outer_html` produces for the same map.

use super::{PropertySink, write_properties, write_property};
use crate::attributes::reflected_attribute;
use crate::props::{PropValue, PropertyMap, StyleMap};
use crate::renderer::serialize::push_attribute;
use crate::renderer::is_void_element;
use crate::style::{parse_style_text, to_style_text};
use crate::utils::Result;
use indexmap::IndexMap;

/// Ordered attribute collector for one start tag
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeBuffer {
    attributes: IndexMap<String, String>,
}

impl AttributeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(name.to_ascii_lowercase().as_str())
            .map(String::as_str)
    }

    /// Append every collected attribute as ` name="value"` or a bare ` name`.
    pub fn write_to(&self, out: &mut String) {
        for (name, value) in &self.attributes {
            push_attribute(out, name, value);
        }
    }

    fn set_style_text(&mut self, text: String) {
        if text.is_empty() {
            self.attributes.shift_remove("style");
        } else {
            self.attributes.insert("style".to_string(), text);
        }
    }
}

impl PropertySink for AttributeBuffer {
    // Names are ASCII-lowercased like on a live HTML element
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<()> {
        let name = name.to_ascii_lowercase();
        if name == "style" {
            self.set_style_text(to_style_text(&parse_style_text(value)));
        } else {
            self.attributes.insert(name, value.to_string());
        }
        Ok(())
    }

    fn remove_attribute(&mut self, name: &str) -> Result<()> {
        self.attributes.shift_remove(&name.to_ascii_lowercase());
        Ok(())
    }

    fn toggle_attribute(&mut self, name: &str, present: bool) -> Result<()> {
        let name = name.to_ascii_lowercase();
        if !present {
            self.attributes.shift_remove(&name);
        } else if !self.attributes.contains_key(&name) {
            self.attributes.insert(name, String::new());
        }
        Ok(())
    }

    /// Only reflected properties leave a trace in markup.
    fn set_property(&mut self, name: &str, value: &PropValue) -> Result<()> {
        match reflected_attribute(name) {
            Some(attribute) => self.set_attribute(attribute, &value.to_attribute_string()),
            None => Ok(()),
        }
    }

    fn remove_property(&mut self, name: &str) -> Result<()> {
        match reflected_attribute(name) {
            Some(attribute) => self.remove_attribute(attribute),
            None => Ok(()),
        }
    }

    fn write_styles(&mut self, styles: &StyleMap) -> Result<()> {
        self.set_style_text(to_style_text(styles));
        Ok(())
    }
}

/// Append the markup for a single property to `buffer`.
///
/// Writes zero or one attribute fragment with a leading space.
pub fn serialize_property(buffer: &mut String, name: &str, value: &PropValue) -> Result<()> {
    let mut attributes = AttributeBuffer::new();
    write_property(&mut attributes, name, value)?;
    attributes.write_to(buffer);
    Ok(())
}

/// Append the markup for a whole property map to `buffer`.
pub fn serialize_properties(buffer: &mut String, props: &PropertyMap) -> Result<()> {
    let mut attributes = AttributeBuffer::new();
    write_properties(&mut attributes, props)?;
    attributes.write_to(buffer);
    Ok(())
}

/// Append `<tag ...>` to `buffer`
pub fn render_open_tag(buffer: &mut String, tag_name: &str, props: &PropertyMap) -> Result<()> {
    buffer.push('<');
    buffer.push_str(tag_name);
    serialize_properties(buffer, props)?;
    buffer.push('>');
    Ok(())
}

/// Render a complete element around already-rendered `inner_html`.
///
/// Void elements get no closing tag and drop `inner_html`.
pub fn render_element(tag_name: &str, props: &PropertyMap, inner_html: &str) -> Result<String> {
    let mut buffer = String::new();
    render_open_tag(&mut buffer, tag_name, props)?;
    if is_void_element(tag_name) {
        if !inner_html.is_empty() {
            log::debug!("Dropping children of void element <{}>", tag_name);
        }
        return Ok(buffer);
    }
    buffer.push_str(inner_html);
    buffer.push_str("</");
    buffer.push_str(tag_name);
    buffer.push('>');
    Ok(buffer)
}
