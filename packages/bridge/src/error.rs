//! Error types for the bridge layer.

use std::any::TypeId;

/// A value or type tag that has no counterpart in the other hierarchy.
///
/// These are programming errors on the caller's side (asking for a view
/// type that does not exist). Retrying will not help.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The requested view type is not one of the known view traits.
    #[error("unsupported attribute view type: {type_id:?}")]
    UnsupportedView { type_id: TypeId },

    /// The view cannot be narrowed to the requested view trait.
    #[error("cannot convert a {found} view to a {expected} view")]
    ViewMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// The requested attributes type is not one of the known attribute
    /// value traits.
    #[error("unsupported file attributes type: {type_id:?}")]
    UnsupportedAttributes { type_id: TypeId },

    #[error("cannot convert {found} attributes to {expected} attributes")]
    AttributesMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

/// Result type alias for dispatch operations.
pub type Result<T> = std::result::Result<T, ConversionError>;
