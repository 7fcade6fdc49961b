//! One [`Conversion`](crate::Conversion) per type pair.
//!
//! Enumerations, timestamps and opaque values are converted by value. Trait
//! objects are converted by wrapping them, and unwrapped again on the way
//! back.

pub mod enums;

mod acl_entry;
mod acl_view;
mod attribute_view;
mod attributes;
mod basic_view;
mod dos_view;
mod file_attribute;
mod file_store;
mod lookup;
mod owner_view;
mod posix_view;
mod principal;
mod time;
mod user_defined_view;
mod value;

pub use acl_entry::AclEntryConversion;
pub use acl_view::AclFileAttributeViewConversion;
pub use attribute_view::{
    AttributeViewConversion, FileAttributeViewConversion, FileStoreAttributeViewConversion,
};
pub use attributes::{
    BasicFileAttributesConversion, DosFileAttributesConversion, PosixFileAttributesConversion,
};
pub use basic_view::BasicFileAttributeViewConversion;
pub use dos_view::DosFileAttributeViewConversion;
pub use enums::{
    AclEntryFlagConversion, AclEntryPermissionConversion, AclEntryTypeConversion,
    AttributesKindConversion, ErrorKindConversion, PosixFilePermissionConversion,
    ViewKindConversion,
};
pub use file_attribute::FileAttributeConversion;
pub use file_store::FileStoreConversion;
pub use lookup::UserPrincipalLookupServiceConversion;
pub use owner_view::FileOwnerAttributeViewConversion;
pub use posix_view::PosixFileAttributeViewConversion;
pub use principal::{GroupPrincipalConversion, UserPrincipalConversion};
pub use time::FileTimeConversion;
pub use user_defined_view::UserDefinedFileAttributeViewConversion;
pub use value::AttributeValueConversion;
