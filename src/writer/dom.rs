//! Client-side writer: applies properties to a live node

use super::{PropertySink, write_properties, write_property};
use crate::props::{PropValue, PropertyMap, StyleMap};
use crate::renderer::{ElementData, Node};
use crate::style;
use crate::utils::{Result, TargetError};

/// Apply one property to a live node.
///
/// Fails with [`TargetError::Unsupported`] when `node` is not an element.
pub fn apply_property(node: &mut Node, name: &str, value: &PropValue) -> Result<()> {
    write_property(node, name, value)
}

/// Apply a whole property map in insertion order.
pub fn apply_properties(node: &mut Node, props: &PropertyMap) -> Result<()> {
    write_properties(node, props)
}

/// Apply a style map to a live node's style declaration.
pub fn apply_styles(node: &mut Node, styles: &StyleMap) -> Result<()> {
    style::apply_styles(require_element(node, "style")?, styles);
    Ok(())
}

fn require_element<'a>(node: &'a mut Node, operation: &'static str) -> Result<&'a mut ElementData> {
    let target = node.kind();
    match node.as_element_mut() {
        Some(element) => Ok(element),
        None => {
            log::warn!("Cannot {} on a {} node", operation, target);
            Err(TargetError::Unsupported { operation, target }.into())
        }
    }
}

impl PropertySink for ElementData {
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<()> {
        ElementData::set_attribute(self, name, value);
        Ok(())
    }

    fn remove_attribute(&mut self, name: &str) -> Result<()> {
        ElementData::remove_attribute(self, name);
        Ok(())
    }

    fn toggle_attribute(&mut self, name: &str, present: bool) -> Result<()> {
        ElementData::toggle_attribute(self, name, present);
        Ok(())
    }

    fn set_property(&mut self, name: &str, value: &PropValue) -> Result<()> {
        ElementData::set_property(self, name, value.clone());
        Ok(())
    }

    fn remove_property(&mut self, name: &str) -> Result<()> {
        ElementData::remove_property(self, name);
        Ok(())
    }

    fn write_styles(&mut self, styles: &StyleMap) -> Result<()> {
        style::apply_styles(self, styles);
        Ok(())
    }
}

impl PropertySink for Node {
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<()> {
        require_element(self, "setAttribute")?.set_attribute(name, value);
        Ok(())
    }

    fn remove_attribute(&mut self, name: &str) -> Result<()> {
        require_element(self, "removeAttribute")?.remove_attribute(name);
        Ok(())
    }

    fn toggle_attribute(&mut self, name: &str, present: bool) -> Result<()> {
        require_element(self, "toggleAttribute")?.toggle_attribute(name, present);
        Ok(())
    }

    fn set_property(&mut self, name: &str, value: &PropValue) -> Result<()> {
        require_element(self, "setProperty")?.set_property(name, value.clone());
        Ok(())
    }

    fn remove_property(&mut self, name: &str) -> Result<()> {
        require_element(self, "removeProperty")?.remove_property(name);
        Ok(())
    }

    fn write_styles(&mut self, styles: &StyleMap) -> Result<()> {
        apply_styles(self, styles)
    }
}
