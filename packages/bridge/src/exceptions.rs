//! Translation of I/O failures between the hierarchies.
//!
//! Every fallible delegate call made by a wrapper goes through one of these,
//! so callers only ever see their own hierarchy's [`IoError`] type. The
//! original failure stays reachable through `source()`.
//!
//! [`IoError`]: fsattr_native::IoError

use fsattr_native as native;
use fsattr_shadow as shadow;

use crate::conversion::Conversion;
use crate::conversions::enums::ErrorKindConversion;

/// Translate a native failure into a shadow failure.
pub fn encode_checked(e: native::IoError) -> shadow::IoError {
    let translated = shadow::IoError::from_parts(
        ErrorKindConversion::encode(e.kind()),
        e.file().map(str::to_owned),
        e.other_file().map(str::to_owned),
        e.reason().map(str::to_owned),
    );
    tracing::trace!(kind = %translated.kind(), "translated native i/o error");
    translated.with_source(e)
}

/// Translate a shadow failure into a native failure.
pub fn decode_checked(e: shadow::IoError) -> native::IoError {
    let translated = native::IoError::from_parts(
        ErrorKindConversion::decode(e.kind()),
        e.file().map(str::to_owned),
        e.other_file().map(str::to_owned),
        e.reason().map(str::to_owned),
    );
    tracing::trace!(kind = %translated.kind(), "translated shadow i/o error");
    translated.with_source(e)
}
