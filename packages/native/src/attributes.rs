//! Bulk attribute values read from a file.
//!
//! These are plain data carriers: reading them never fails and never touches
//! the file again.

use std::any::TypeId;
use std::sync::Arc;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::file_attribute::AttributeValue;
use crate::object::Object;
use crate::permission::PosixFilePermission;
use crate::principal::{GroupPrincipal, UserPrincipal};
use crate::time::FileTime;

/// Widens an `Arc` of any attribute value to `Arc<dyn BasicFileAttributes>`.
pub trait AsBasicFileAttributes {
    fn into_basic_file_attributes(self: Arc<Self>) -> Arc<dyn BasicFileAttributes>;
}

impl<T: BasicFileAttributes> AsBasicFileAttributes for T {
    fn into_basic_file_attributes(self: Arc<Self>) -> Arc<dyn BasicFileAttributes> {
        self
    }
}

/// Attributes every file system supports.
pub trait BasicFileAttributes: Object + AsBasicFileAttributes {
    fn last_modified_time(&self) -> FileTime;
    fn last_access_time(&self) -> FileTime;
    fn creation_time(&self) -> FileTime;
    fn is_regular_file(&self) -> bool;
    fn is_directory(&self) -> bool;
    fn is_symbolic_link(&self) -> bool;
    fn is_other(&self) -> bool;
    fn size(&self) -> u64;
    /// An opaque value identifying the file, if the file system has one.
    fn file_key(&self) -> Option<AttributeValue>;
}

/// Attributes of files on POSIX file systems.
pub trait PosixFileAttributes: BasicFileAttributes {
    fn owner(&self) -> Arc<dyn UserPrincipal>;
    fn group(&self) -> Arc<dyn GroupPrincipal>;
    fn permissions(&self) -> IndexSet<PosixFilePermission>;
}

/// Attributes of files on FAT-style file systems.
pub trait DosFileAttributes: BasicFileAttributes {
    fn is_read_only(&self) -> bool;
    fn is_hidden(&self) -> bool;
    fn is_archive(&self) -> bool;
    fn is_system(&self) -> bool;
}

/// The attribute value traits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributesKind {
    Basic,
    Posix,
    Dos,
}

impl AttributesKind {
    pub const ALL: [AttributesKind; 3] = [
        AttributesKind::Basic,
        AttributesKind::Posix,
        AttributesKind::Dos,
    ];

    /// The type tag of the matching trait object type.
    pub fn type_id(&self) -> TypeId {
        match self {
            AttributesKind::Basic => TypeId::of::<dyn BasicFileAttributes>(),
            AttributesKind::Posix => TypeId::of::<dyn PosixFileAttributes>(),
            AttributesKind::Dos => TypeId::of::<dyn DosFileAttributes>(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AttributesKind::Basic => "basic",
            AttributesKind::Posix => "posix",
            AttributesKind::Dos => "dos",
        }
    }
}

/// An attribute value whose most specific trait is known at runtime.
#[derive(Clone, Debug)]
pub enum AnyFileAttributes {
    Basic(Arc<dyn BasicFileAttributes>),
    Posix(Arc<dyn PosixFileAttributes>),
    Dos(Arc<dyn DosFileAttributes>),
}

impl AnyFileAttributes {
    pub fn kind(&self) -> AttributesKind {
        match self {
            AnyFileAttributes::Basic(_) => AttributesKind::Basic,
            AnyFileAttributes::Posix(_) => AttributesKind::Posix,
            AnyFileAttributes::Dos(_) => AttributesKind::Dos,
        }
    }

    /// Every variant widens to the basic trait.
    pub fn into_basic(self) -> Arc<dyn BasicFileAttributes> {
        match self {
            AnyFileAttributes::Basic(a) => a,
            AnyFileAttributes::Posix(a) => a.into_basic_file_attributes(),
            AnyFileAttributes::Dos(a) => a.into_basic_file_attributes(),
        }
    }

    pub fn into_posix(self) -> Option<Arc<dyn PosixFileAttributes>> {
        match self {
            AnyFileAttributes::Posix(a) => Some(a),
            _ => None,
        }
    }

    pub fn into_dos(self) -> Option<Arc<dyn DosFileAttributes>> {
        match self {
            AnyFileAttributes::Dos(a) => Some(a),
            _ => None,
        }
    }
}

impl From<Arc<dyn BasicFileAttributes>> for AnyFileAttributes {
    fn from(a: Arc<dyn BasicFileAttributes>) -> Self {
        AnyFileAttributes::Basic(a)
    }
}

impl From<Arc<dyn PosixFileAttributes>> for AnyFileAttributes {
    fn from(a: Arc<dyn PosixFileAttributes>) -> Self {
        AnyFileAttributes::Posix(a)
    }
}

impl From<Arc<dyn DosFileAttributes>> for AnyFileAttributes {
    fn from(a: Arc<dyn DosFileAttributes>) -> Self {
        AnyFileAttributes::Dos(a)
    }
}
