//! Live DOM model and markup handling
//!
//! `dom` is the client-side render target, `html` parses serialized markup
//! back into it, and `serialize` holds the escaping and void-element rules
//! both sides share.

mod dom;
pub mod html;
pub mod serialize;

pub use dom::{Document, ElementData, Node, NodeType};
pub use html::HtmlParser;
pub use serialize::{escape_attribute_value, escape_text, is_void_element};
