//! Native filesystem attribute hierarchy.
//!
//! This crate declares the traits and value types describing file metadata:
//! - Attribute views (`BasicFileAttributeView`, `PosixFileAttributeView`, ...):
//!   live handles that read and update attributes, failing with [`IoError`]
//! - Attribute values (`BasicFileAttributes`, ...): immutable snapshots
//! - Principals and the service that looks them up by name
//! - File stores and single named file attributes
//!
//! It does no I/O itself. Implementations live with the file systems that
//! provide them.
//!
//! # Example
//!
//! ```rust
//! use fsattr_native::{posix_permissions_from_string, posix_permissions_to_string};
//!
//! let perms = posix_permissions_from_string("rw-r-----").unwrap();
//! assert_eq!(posix_permissions_to_string(&perms), "rw-r-----");
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
