//! # vdom-attrs - Attribute reconciliation for virtual DOM rendering
//!
//! Decides, per declared property, whether a virtual node writes a DOM
//! property, a content attribute, both or neither, and applies that decision
//! either to a live element (client mount) or to an HTML string (server-side
//! rendering). Both paths share one dispatcher, so their output agrees.
//!
//! ## Architecture
//!
//! - **attributes**: name classification over static tables
//! - **props**: property and style value model, JSON loading
//! - **style**: style map normalization, CSS text rendering and parsing
//! - **writer**: the shared dispatcher plus the DOM and string writers
//! - **renderer**: the live DOM model, html5ever parsing and markup escaping
//! - **utils**: shared error types
//!
//! ```
//! use vdom_attrs::{PropertyMap, render_element};
//!
//! let props = PropertyMap::new().with("class", "foo").with("disabled", true);
//! let html = render_element("button", &props, "Save").unwrap();
//! assert_eq!(html, r#"<button class="foo" disabled>Save</button>"#);
//! ```

pub mod attributes;
pub mod props;
pub mod renderer;
pub mod style;
pub mod utils;
pub mod writer;

// Re-export main types for convenience
pub use attributes::{Classification, NumericTarget, classify};
pub use props::{PropValue, PropertyMap, StyleMap, StyleValue};
pub use renderer::{ElementData, HtmlParser, Node};
pub use style::{parse_style_text, to_style_text};
pub use utils::error::{Result, VdomError};
pub use writer::{
    AttributeBuffer, PropertySink, apply_properties, apply_property, apply_styles, render_element,
    render_open_tag, serialize_properties, serialize_property, write_properties, write_property,
};

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = "vdom-attrs";
