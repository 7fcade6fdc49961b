//! Runtime dispatch over the view and attribute value families.
//!
//! Callers that only know a value as "some attribute view" name the trait
//! they want by its type tag, `TypeId::of::<dyn PosixFileAttributeView>()`.
//! The tables below map tags between the hierarchies and to [`ViewKind`]s,
//! which select the converter for the requested trait.
//!
//! Tag-only mapping is lenient: an unknown view tag maps to the root view
//! tag. Converting a value is strict: an unknown tag, or a value that is not
//! a view of the requested trait, is a [`ConversionError`].
//!
//! [`ViewKind`]: fsattr_native::ViewKind

use std::any::TypeId;
use std::collections::HashMap;

use fsattr_native as native;
use fsattr_shadow as shadow;

use crate::conversion::Conversion;
use crate::conversions::{
    AclFileAttributeViewConversion, AttributeViewConversion, AttributesKindConversion,
    BasicFileAttributeViewConversion, BasicFileAttributesConversion,
    DosFileAttributeViewConversion, DosFileAttributesConversion, FileAttributeViewConversion,
    FileOwnerAttributeViewConversion, FileStoreAttributeViewConversion,
    PosixFileAttributeViewConversion, PosixFileAttributesConversion,
    UserDefinedFileAttributeViewConversion, ViewKindConversion,
};
use crate::error::{ConversionError, Result};

lazy_static::lazy_static! {
    static ref ENCODED_VIEW_TYPES: HashMap<TypeId, TypeId> = native::ViewKind::ALL
        .iter()
        .map(|kind| (kind.type_id(), ViewKindConversion::encode(*kind).type_id()))
        .collect();

    static ref DECODED_VIEW_TYPES: HashMap<TypeId, TypeId> = shadow::ViewKind::ALL
        .iter()
        .map(|kind| (kind.type_id(), ViewKindConversion::decode(*kind).type_id()))
        .collect();

    static ref NATIVE_VIEW_KINDS: HashMap<TypeId, native::ViewKind> = native::ViewKind::ALL
        .iter()
        .map(|kind| (kind.type_id(), *kind))
        .collect();

    static ref SHADOW_VIEW_KINDS: HashMap<TypeId, shadow::ViewKind> = shadow::ViewKind::ALL
        .iter()
        .map(|kind| (kind.type_id(), *kind))
        .collect();

    static ref ENCODED_ATTRIBUTES_TYPES: HashMap<TypeId, TypeId> = native::AttributesKind::ALL
        .iter()
        .map(|kind| (kind.type_id(), AttributesKindConversion::encode(*kind).type_id()))
        .collect();

    static ref DECODED_ATTRIBUTES_TYPES: HashMap<TypeId, TypeId> = shadow::AttributesKind::ALL
        .iter()
        .map(|kind| (kind.type_id(), AttributesKindConversion::decode(*kind).type_id()))
        .collect();
}

/// Map a native view tag to the matching shadow view tag.
///
/// Unknown tags map to the shadow root view tag, in both directions. Older
/// bridges mapped unknown native tags to the file view tag instead.
pub fn encode_view_type(view_type: TypeId) -> TypeId {
    match ENCODED_VIEW_TYPES.get(&view_type) {
        Some(encoded) => *encoded,
        None => {
            tracing::debug!(?view_type, "unknown native view type, using the root view");
            TypeId::of::<dyn shadow::AttributeView>()
        }
    }
}

/// Map a shadow view tag to the matching native view tag.
///
/// Unknown tags map to the native root view tag.
pub fn decode_view_type(view_type: TypeId) -> TypeId {
    match DECODED_VIEW_TYPES.get(&view_type) {
        Some(decoded) => *decoded,
        None => {
            tracing::debug!(?view_type, "unknown shadow view type, using the root view");
            TypeId::of::<dyn native::AttributeView>()
        }
    }
}

/// The native view kind with the given tag, if any.
pub fn native_view_kind(view_type: TypeId) -> Option<native::ViewKind> {
    NATIVE_VIEW_KINDS.get(&view_type).copied()
}

/// The shadow view kind with the given tag, if any.
pub fn shadow_view_kind(view_type: TypeId) -> Option<shadow::ViewKind> {
    SHADOW_VIEW_KINDS.get(&view_type).copied()
}

/// Convert a native view, keeping its kind.
pub fn encode_view(value: native::AnyAttributeView) -> shadow::AnyAttributeView {
    use native::AnyAttributeView as N;
    use shadow::AnyAttributeView as S;

    match value {
        N::Attribute(v) => S::Attribute(AttributeViewConversion::encode(v)),
        N::File(v) => S::File(FileAttributeViewConversion::encode(v)),
        N::FileStore(v) => S::FileStore(FileStoreAttributeViewConversion::encode(v)),
        N::Basic(v) => S::Basic(BasicFileAttributeViewConversion::encode(v)),
        N::FileOwner(v) => S::FileOwner(FileOwnerAttributeViewConversion::encode(v)),
        N::Posix(v) => S::Posix(PosixFileAttributeViewConversion::encode(v)),
        N::Dos(v) => S::Dos(DosFileAttributeViewConversion::encode(v)),
        N::Acl(v) => S::Acl(AclFileAttributeViewConversion::encode(v)),
        N::UserDefined(v) => S::UserDefined(UserDefinedFileAttributeViewConversion::encode(v)),
    }
}

/// Convert a shadow view, keeping its kind.
pub fn decode_view(value: shadow::AnyAttributeView) -> native::AnyAttributeView {
    use native::AnyAttributeView as N;
    use shadow::AnyAttributeView as S;

    match value {
        S::Attribute(v) => N::Attribute(AttributeViewConversion::decode(v)),
        S::File(v) => N::File(FileAttributeViewConversion::decode(v)),
        S::FileStore(v) => N::FileStore(FileStoreAttributeViewConversion::decode(v)),
        S::Basic(v) => N::Basic(BasicFileAttributeViewConversion::decode(v)),
        S::FileOwner(v) => N::FileOwner(FileOwnerAttributeViewConversion::decode(v)),
        S::Posix(v) => N::Posix(PosixFileAttributeViewConversion::decode(v)),
        S::Dos(v) => N::Dos(DosFileAttributeViewConversion::decode(v)),
        S::Acl(v) => N::Acl(AclFileAttributeViewConversion::decode(v)),
        S::UserDefined(v) => N::UserDefined(UserDefinedFileAttributeViewConversion::decode(v)),
    }
}

/// Convert a native view to the shadow view trait with tag `encoded_type`.
///
/// The value is re-typed as its most specific trait, then narrowed to the
/// requested one. A POSIX view held only as the root may be requested as a
/// POSIX or basic view, but a DOS view may not be requested as a POSIX view.
pub fn encode_view_as(
    value: native::AnyAttributeView,
    encoded_type: TypeId,
) -> Result<shadow::AnyAttributeView> {
    use shadow::AnyAttributeView as S;

    let Some(kind) = shadow_view_kind(encoded_type) else {
        tracing::error!(?encoded_type, "cannot encode to an unsupported view type");
        return Err(ConversionError::UnsupportedView {
            type_id: encoded_type,
        });
    };

    let value = value.into_most_specific();
    let found = value.kind();
    let encoded = match kind {
        shadow::ViewKind::Attribute => Some(S::Attribute(AttributeViewConversion::encode(
            value.into_attribute_view(),
        ))),
        shadow::ViewKind::File => value
            .into_file_view()
            .map(|v| S::File(FileAttributeViewConversion::encode(v))),
        shadow::ViewKind::FileStore => value
            .into_file_store_view()
            .map(|v| S::FileStore(FileStoreAttributeViewConversion::encode(v))),
        shadow::ViewKind::Basic => value
            .into_basic()
            .map(|v| S::Basic(BasicFileAttributeViewConversion::encode(v))),
        shadow::ViewKind::FileOwner => value
            .into_file_owner()
            .map(|v| S::FileOwner(FileOwnerAttributeViewConversion::encode(v))),
        shadow::ViewKind::Posix => value
            .into_posix()
            .map(|v| S::Posix(PosixFileAttributeViewConversion::encode(v))),
        shadow::ViewKind::Dos => value
            .into_dos()
            .map(|v| S::Dos(DosFileAttributeViewConversion::encode(v))),
        shadow::ViewKind::Acl => value
            .into_acl()
            .map(|v| S::Acl(AclFileAttributeViewConversion::encode(v))),
        shadow::ViewKind::UserDefined => value
            .into_user_defined()
            .map(|v| S::UserDefined(UserDefinedFileAttributeViewConversion::encode(v))),
    };

    encoded.ok_or_else(|| {
        tracing::error!(expected = kind.name(), found = found.name(), "view kind mismatch");
        ConversionError::ViewMismatch {
            expected: kind.name(),
            found: found.name(),
        }
    })
}

/// Convert a shadow view to the native view trait with tag `decoded_type`.
pub fn decode_view_as(
    value: shadow::AnyAttributeView,
    decoded_type: TypeId,
) -> Result<native::AnyAttributeView> {
    use native::AnyAttributeView as N;

    let Some(kind) = native_view_kind(decoded_type) else {
        tracing::error!(?decoded_type, "cannot decode to an unsupported view type");
        return Err(ConversionError::UnsupportedView {
            type_id: decoded_type,
        });
    };

    let value = value.into_most_specific();
    let found = value.kind();
    let decoded = match kind {
        native::ViewKind::Attribute => Some(N::Attribute(AttributeViewConversion::decode(
            value.into_attribute_view(),
        ))),
        native::ViewKind::File => value
            .into_file_view()
            .map(|v| N::File(FileAttributeViewConversion::decode(v))),
        native::ViewKind::FileStore => value
            .into_file_store_view()
            .map(|v| N::FileStore(FileStoreAttributeViewConversion::decode(v))),
        native::ViewKind::Basic => value
            .into_basic()
            .map(|v| N::Basic(BasicFileAttributeViewConversion::decode(v))),
        native::ViewKind::FileOwner => value
            .into_file_owner()
            .map(|v| N::FileOwner(FileOwnerAttributeViewConversion::decode(v))),
        native::ViewKind::Posix => value
            .into_posix()
            .map(|v| N::Posix(PosixFileAttributeViewConversion::decode(v))),
        native::ViewKind::Dos => value
            .into_dos()
            .map(|v| N::Dos(DosFileAttributeViewConversion::decode(v))),
        native::ViewKind::Acl => value
            .into_acl()
            .map(|v| N::Acl(AclFileAttributeViewConversion::decode(v))),
        native::ViewKind::UserDefined => value
            .into_user_defined()
            .map(|v| N::UserDefined(UserDefinedFileAttributeViewConversion::decode(v))),
    };

    decoded.ok_or_else(|| {
        tracing::error!(expected = kind.name(), found = found.name(), "view kind mismatch");
        ConversionError::ViewMismatch {
            expected: kind.name(),
            found: found.name(),
        }
    })
}

/// Map a native attributes tag to the matching shadow tag.
pub fn encode_attributes_type(attributes_type: TypeId) -> Result<TypeId> {
    ENCODED_ATTRIBUTES_TYPES
        .get(&attributes_type)
        .copied()
        .ok_or_else(|| {
            tracing::error!(?attributes_type, "unsupported native attributes type");
            ConversionError::UnsupportedAttributes {
                type_id: attributes_type,
            }
        })
}

/// Map a shadow attributes tag to the matching native tag.
pub fn decode_attributes_type(attributes_type: TypeId) -> Result<TypeId> {
    DECODED_ATTRIBUTES_TYPES
        .get(&attributes_type)
        .copied()
        .ok_or_else(|| {
            tracing::error!(?attributes_type, "unsupported shadow attributes type");
            ConversionError::UnsupportedAttributes {
                type_id: attributes_type,
            }
        })
}

/// Convert native attributes, keeping their kind.
pub fn encode_attributes(value: native::AnyFileAttributes) -> shadow::AnyFileAttributes {
    match value {
        native::AnyFileAttributes::Basic(a) => {
            shadow::AnyFileAttributes::Basic(BasicFileAttributesConversion::encode(a))
        }
        native::AnyFileAttributes::Posix(a) => {
            shadow::AnyFileAttributes::Posix(PosixFileAttributesConversion::encode(a))
        }
        native::AnyFileAttributes::Dos(a) => {
            shadow::AnyFileAttributes::Dos(DosFileAttributesConversion::encode(a))
        }
    }
}

/// Convert shadow attributes, keeping their kind.
pub fn decode_attributes(value: shadow::AnyFileAttributes) -> native::AnyFileAttributes {
    match value {
        shadow::AnyFileAttributes::Basic(a) => {
            native::AnyFileAttributes::Basic(BasicFileAttributesConversion::decode(a))
        }
        shadow::AnyFileAttributes::Posix(a) => {
            native::AnyFileAttributes::Posix(PosixFileAttributesConversion::decode(a))
        }
        shadow::AnyFileAttributes::Dos(a) => {
            native::AnyFileAttributes::Dos(DosFileAttributesConversion::decode(a))
        }
    }
}

/// Convert native attributes to the shadow attributes trait `kind`.
pub fn encode_attributes_as(
    value: native::AnyFileAttributes,
    kind: shadow::AttributesKind,
) -> Result<shadow::AnyFileAttributes> {
    let found = value.kind();
    let encoded = match kind {
        shadow::AttributesKind::Basic => Some(shadow::AnyFileAttributes::Basic(
            BasicFileAttributesConversion::encode(value.into_basic()),
        )),
        shadow::AttributesKind::Posix => value
            .into_posix()
            .map(|a| shadow::AnyFileAttributes::Posix(PosixFileAttributesConversion::encode(a))),
        shadow::AttributesKind::Dos => value
            .into_dos()
            .map(|a| shadow::AnyFileAttributes::Dos(DosFileAttributesConversion::encode(a))),
    };

    encoded.ok_or_else(|| {
        tracing::error!(expected = kind.name(), found = found.name(), "attributes kind mismatch");
        ConversionError::AttributesMismatch {
            expected: kind.name(),
            found: found.name(),
        }
    })
}

/// Convert shadow attributes to the native attributes trait `kind`.
pub fn decode_attributes_as(
    value: shadow::AnyFileAttributes,
    kind: native::AttributesKind,
) -> Result<native::AnyFileAttributes> {
    let found = value.kind();
    let decoded = match kind {
        native::AttributesKind::Basic => Some(native::AnyFileAttributes::Basic(
            BasicFileAttributesConversion::decode(value.into_basic()),
        )),
        native::AttributesKind::Posix => value
            .into_posix()
            .map(|a| native::AnyFileAttributes::Posix(PosixFileAttributesConversion::decode(a))),
        native::AttributesKind::Dos => value
            .into_dos()
            .map(|a| native::AnyFileAttributes::Dos(DosFileAttributesConversion::decode(a))),
    };

    decoded.ok_or_else(|| {
        tracing::error!(expected = kind.name(), found = found.name(), "attributes kind mismatch");
        ConversionError::AttributesMismatch {
            expected: kind.name(),
            found: found.name(),
        }
    })
}
