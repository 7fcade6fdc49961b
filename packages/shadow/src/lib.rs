//! Shadow filesystem attribute hierarchy.
//!
//! Same surface as `fsattr-native`, with distinct types: a value of one
//! hierarchy cannot be passed where the other is expected without going
//! through `fsattr-bridge`.
//!
//! ```rust
//! use fsattr_shadow::{AclEntryFlag, ViewKind};
//!
//! assert_eq!(AclEntryFlag::ALL.len(), 4);
//! assert_eq!(ViewKind::from_name("posix"), Some(ViewKind::Posix));
//! ```

pub use bytes::{Bytes, BytesMut};
pub use indexmap::IndexSet;

mod acl;
mod attributes;
mod error;
mod file_attribute;
mod file_store;
mod object;
mod permission;
mod principal;
mod time;
mod view;

pub use acl::AclEntry;
pub use attributes::{
    AnyFileAttributes, AsBasicFileAttributes, AttributesKind, BasicFileAttributes,
    DosFileAttributes, PosixFileAttributes,
};
pub use error::{ErrorKind, IoError, Result};
pub use file_attribute::{AttributeValue, FileAttribute, SimpleFileAttribute};
pub use file_store::FileStore;
pub use object::{value_eq, value_hash, AsObject, Object};
pub use permission::{
    posix_permissions_from_string, posix_permissions_to_string, AclEntryFlag,
    AclEntryPermission, AclEntryType, PosixFilePermission,
};
pub use principal::{AsUserPrincipal, GroupPrincipal, UserPrincipal, UserPrincipalLookupService};
pub use time::FileTime;
pub use view::{
    AclFileAttributeView, AnyAttributeView, AsAttributeView, AsBasicFileAttributeView,
    AsFileAttributeView, AsFileOwnerAttributeView, AttributeView, BasicFileAttributeView,
    DosFileAttributeView, FileAttributeView, FileOwnerAttributeView, FileStoreAttributeView,
    PosixFileAttributeView, UserDefinedFileAttributeView, ViewKind,
};
