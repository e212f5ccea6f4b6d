//! Error types for vdom-attrs

use thiserror::Error;

/// Main error type for attribute reconciliation
#[derive(Debug, Error)]
pub enum VdomError {
    /// The render target cannot perform a required operation
    #[error("Render target error: {0}")]
    Target(#[from] TargetError),
    /// Markup parsing errors
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
    /// A property map document that is not a JSON object
    #[error("Invalid property map: {0}")]
    InvalidProps(String),
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Render-target capability errors
///
/// These indicate a caller contract violation, not bad user data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    /// The target does not support the requested operation
    #[error("`{operation}` is not supported on {target} nodes")]
    Unsupported {
        operation: &'static str,
        target: &'static str,
    },
}

/// Rendering-specific errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// HTML parsing error
    #[error("HTML parse error: {0}")]
    HtmlParse(String),
}

/// Convenience Result type for vdom-attrs operations
pub type Result<T> = std::result::Result<T, VdomError>;
