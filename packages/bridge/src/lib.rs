//! Adapter layer between the `fsattr-native` and `fsattr-shadow` hierarchies.
//!
//! The two hierarchies describe the same file attribute APIs with distinct
//! types. This crate lets a value of either be used where the other is
//! expected:
//! - `encode` turns a native value into a shadow value, `decode` the reverse
//! - Trait objects are wrapped ([`Encoded`], [`Decoded`]) and every call on
//!   the wrapper is forwarded, converting arguments, results and I/O errors
//! - Wrapping then unwrapping returns the original `Arc`
//! - [`dispatch`] picks the right conversion when only the view's type tag
//!   is known
//!
//! # Usage
//!
//! ```rust,ignore
//! use fsattr_bridge::{Conversion, PosixFileAttributeViewConversion};
//!
//! // Hand a native POSIX view to code written against the shadow traits
//! let view: Arc<dyn fsattr_native::PosixFileAttributeView> = filesystem.posix_view(path);
//! let shadow_view = PosixFileAttributeViewConversion::encode(view);
//! let perms = shadow_view.read_posix_attributes()?.permissions();
//!
//! // Coming back, the original view is returned
//! let native_view = PosixFileAttributeViewConversion::decode(shadow_view);
//! ```

mod conversion;
pub mod conversions;
pub mod dispatch;
mod error;
pub mod exceptions;
mod wrapper;

pub use conversion::Conversion;
pub use conversions::*;
pub use error::{ConversionError, Result};
pub use exceptions::{decode_checked, encode_checked};
pub use wrapper::{Decoded, Encoded};

// Re-export the hierarchies for convenience
pub use fsattr_native as native;
pub use fsattr_shadow as shadow;
