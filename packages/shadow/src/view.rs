//! Attribute views. See `fsattr_native` for the specialization chain.

use std::any::TypeId;
use std::sync::Arc;

use bytes::BytesMut;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::acl::AclEntry;
use crate::attributes::{BasicFileAttributes, DosFileAttributes, PosixFileAttributes};
use crate::error::Result;
use crate::object::Object;
use crate::permission::PosixFilePermission;
use crate::principal::{GroupPrincipal, UserPrincipal};
use crate::time::FileTime;

pub trait AsAttributeView {
    fn as_attribute_view(&self) -> &dyn AttributeView;
    fn into_attribute_view(self: Arc<Self>) -> Arc<dyn AttributeView>;
}

impl<T: AttributeView> AsAttributeView for T {
    fn as_attribute_view(&self) -> &dyn AttributeView {
        self
    }

    fn into_attribute_view(self: Arc<Self>) -> Arc<dyn AttributeView> {
        self
    }
}

pub trait AsFileAttributeView {
    fn into_file_attribute_view(self: Arc<Self>) -> Arc<dyn FileAttributeView>;
}

impl<T: FileAttributeView> AsFileAttributeView for T {
    fn into_file_attribute_view(self: Arc<Self>) -> Arc<dyn FileAttributeView> {
        self
    }
}

pub trait AsBasicFileAttributeView {
    fn into_basic_file_attribute_view(self: Arc<Self>) -> Arc<dyn BasicFileAttributeView>;
}

impl<T: BasicFileAttributeView> AsBasicFileAttributeView for T {
    fn into_basic_file_attribute_view(self: Arc<Self>) -> Arc<dyn BasicFileAttributeView> {
        self
    }
}

pub trait AsFileOwnerAttributeView {
    fn into_file_owner_attribute_view(self: Arc<Self>) -> Arc<dyn FileOwnerAttributeView>;
}

impl<T: FileOwnerAttributeView> AsFileOwnerAttributeView for T {
    fn into_file_owner_attribute_view(self: Arc<Self>) -> Arc<dyn FileOwnerAttributeView> {
        self
    }
}

/// Root of the view hierarchy.
pub trait AttributeView: Object + AsAttributeView {
    /// The view's name, e.g. `"basic"` or `"posix"`.
    fn name(&self) -> String;

    /// This view as its most specific view trait.
    fn into_any_view(self: Arc<Self>) -> AnyAttributeView;
}

/// A view of the attributes of a file.
pub trait FileAttributeView: AttributeView + AsFileAttributeView {}

/// A view of the attributes of a file store.
pub trait FileStoreAttributeView: AttributeView {}

/// Timestamps and type of a file.
pub trait BasicFileAttributeView: FileAttributeView + AsBasicFileAttributeView {
    fn read_attributes(&self) -> Result<Arc<dyn BasicFileAttributes>>;

    /// Update any of the three timestamps. `None` leaves that timestamp
    /// unchanged.
    fn set_times(
        &self,
        last_modified_time: Option<FileTime>,
        last_access_time: Option<FileTime>,
        create_time: Option<FileTime>,
    ) -> Result<()>;
}

/// The owner of a file.
pub trait FileOwnerAttributeView: FileAttributeView + AsFileOwnerAttributeView {
    fn owner(&self) -> Result<Arc<dyn UserPrincipal>>;
    fn set_owner(&self, owner: Arc<dyn UserPrincipal>) -> Result<()>;
}

/// POSIX permissions, owner and group.
pub trait PosixFileAttributeView: BasicFileAttributeView + FileOwnerAttributeView {
    fn read_posix_attributes(&self) -> Result<Arc<dyn PosixFileAttributes>>;
    fn set_permissions(&self, perms: IndexSet<PosixFilePermission>) -> Result<()>;
    fn set_group(&self, group: Arc<dyn GroupPrincipal>) -> Result<()>;
}

/// The DOS attribute flags.
pub trait DosFileAttributeView: BasicFileAttributeView {
    fn read_dos_attributes(&self) -> Result<Arc<dyn DosFileAttributes>>;
    fn set_read_only(&self, value: bool) -> Result<()>;
    fn set_hidden(&self, value: bool) -> Result<()>;
    fn set_system(&self, value: bool) -> Result<()>;
    fn set_archive(&self, value: bool) -> Result<()>;
}

/// The access control list of a file.
pub trait AclFileAttributeView: FileOwnerAttributeView {
    fn acl(&self) -> Result<Vec<AclEntry>>;
    fn set_acl(&self, acl: Vec<AclEntry>) -> Result<()>;
}

/// Named, user-defined attributes stored with a file.
pub trait UserDefinedFileAttributeView: FileAttributeView {
    fn list(&self) -> Result<Vec<String>>;
    fn size(&self, name: &str) -> Result<usize>;

    /// Append the value of `name` to `dst`, returning the number of bytes
    /// read.
    fn read(&self, name: &str, dst: &mut BytesMut) -> Result<usize>;

    /// Replace the value of `name`, returning the number of bytes written.
    fn write(&self, name: &str, src: &[u8]) -> Result<usize>;
    fn delete(&self, name: &str) -> Result<()>;
}

/// The view traits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    Attribute,
    File,
    FileStore,
    Basic,
    FileOwner,
    Posix,
    Dos,
    Acl,
    UserDefined,
}

impl ViewKind {
    pub const ALL: [ViewKind; 9] = [
        ViewKind::Attribute,
        ViewKind::File,
        ViewKind::FileStore,
        ViewKind::Basic,
        ViewKind::FileOwner,
        ViewKind::Posix,
        ViewKind::Dos,
        ViewKind::Acl,
        ViewKind::UserDefined,
    ];

    /// The type tag of the matching trait object type.
    pub fn type_id(&self) -> TypeId {
        match self {
            ViewKind::Attribute => TypeId::of::<dyn AttributeView>(),
            ViewKind::File => TypeId::of::<dyn FileAttributeView>(),
            ViewKind::FileStore => TypeId::of::<dyn FileStoreAttributeView>(),
            ViewKind::Basic => TypeId::of::<dyn BasicFileAttributeView>(),
            ViewKind::FileOwner => TypeId::of::<dyn FileOwnerAttributeView>(),
            ViewKind::Posix => TypeId::of::<dyn PosixFileAttributeView>(),
            ViewKind::Dos => TypeId::of::<dyn DosFileAttributeView>(),
            ViewKind::Acl => TypeId::of::<dyn AclFileAttributeView>(),
            ViewKind::UserDefined => TypeId::of::<dyn UserDefinedFileAttributeView>(),
        }
    }

    /// The conventional view name, as used in `"posix:permissions"`.
    pub fn name(&self) -> &'static str {
        match self {
            ViewKind::Attribute => "attribute",
            ViewKind::File => "file",
            ViewKind::FileStore => "file_store",
            ViewKind::Basic => "basic",
            ViewKind::FileOwner => "owner",
            ViewKind::Posix => "posix",
            ViewKind::Dos => "dos",
            ViewKind::Acl => "acl",
            ViewKind::UserDefined => "user",
        }
    }

    pub fn from_name(name: &str) -> Option<ViewKind> {
        ViewKind::ALL.into_iter().find(|k| k.name() == name)
    }
}

/// An attribute view whose most specific trait is known at runtime.
#[derive(Clone, Debug)]
pub enum AnyAttributeView {
    Attribute(Arc<dyn AttributeView>),
    File(Arc<dyn FileAttributeView>),
    FileStore(Arc<dyn FileStoreAttributeView>),
    Basic(Arc<dyn BasicFileAttributeView>),
    FileOwner(Arc<dyn FileOwnerAttributeView>),
    Posix(Arc<dyn PosixFileAttributeView>),
    Dos(Arc<dyn DosFileAttributeView>),
    Acl(Arc<dyn AclFileAttributeView>),
    UserDefined(Arc<dyn UserDefinedFileAttributeView>),
}

impl AnyAttributeView {
    pub fn kind(&self) -> ViewKind {
        match self {
            AnyAttributeView::Attribute(_) => ViewKind::Attribute,
            AnyAttributeView::File(_) => ViewKind::File,
            AnyAttributeView::FileStore(_) => ViewKind::FileStore,
            AnyAttributeView::Basic(_) => ViewKind::Basic,
            AnyAttributeView::FileOwner(_) => ViewKind::FileOwner,
            AnyAttributeView::Posix(_) => ViewKind::Posix,
            AnyAttributeView::Dos(_) => ViewKind::Dos,
            AnyAttributeView::Acl(_) => ViewKind::Acl,
            AnyAttributeView::UserDefined(_) => ViewKind::UserDefined,
        }
    }

    /// The view's own name, as reported by the view.
    pub fn name(&self) -> String {
        self.as_attribute_view().name()
    }

    /// Borrow the view as the root trait.
    pub fn as_attribute_view(&self) -> &dyn AttributeView {
        match self {
            AnyAttributeView::Attribute(v) => v.as_attribute_view(),
            AnyAttributeView::File(v) => v.as_attribute_view(),
            AnyAttributeView::FileStore(v) => v.as_attribute_view(),
            AnyAttributeView::Basic(v) => v.as_attribute_view(),
            AnyAttributeView::FileOwner(v) => v.as_attribute_view(),
            AnyAttributeView::Posix(v) => v.as_attribute_view(),
            AnyAttributeView::Dos(v) => v.as_attribute_view(),
            AnyAttributeView::Acl(v) => v.as_attribute_view(),
            AnyAttributeView::UserDefined(v) => v.as_attribute_view(),
        }
    }

    /// The same view, re-typed as its most specific trait.
    pub fn into_most_specific(self) -> AnyAttributeView {
        self.into_attribute_view().into_any_view()
    }

    /// Every variant widens to the root trait.
    pub fn into_attribute_view(self) -> Arc<dyn AttributeView> {
        match self {
            AnyAttributeView::Attribute(v) => v,
            AnyAttributeView::File(v) => v.into_attribute_view(),
            AnyAttributeView::FileStore(v) => v.into_attribute_view(),
            AnyAttributeView::Basic(v) => v.into_attribute_view(),
            AnyAttributeView::FileOwner(v) => v.into_attribute_view(),
            AnyAttributeView::Posix(v) => v.into_attribute_view(),
            AnyAttributeView::Dos(v) => v.into_attribute_view(),
            AnyAttributeView::Acl(v) => v.into_attribute_view(),
            AnyAttributeView::UserDefined(v) => v.into_attribute_view(),
        }
    }

    pub fn into_file_view(self) -> Option<Arc<dyn FileAttributeView>> {
        match self {
            AnyAttributeView::File(v) => Some(v),
            AnyAttributeView::Basic(v) => Some(v.into_file_attribute_view()),
            AnyAttributeView::FileOwner(v) => Some(v.into_file_attribute_view()),
            AnyAttributeView::Posix(v) => Some(v.into_file_attribute_view()),
            AnyAttributeView::Dos(v) => Some(v.into_file_attribute_view()),
            AnyAttributeView::Acl(v) => Some(v.into_file_attribute_view()),
            AnyAttributeView::UserDefined(v) => Some(v.into_file_attribute_view()),
            AnyAttributeView::Attribute(_) | AnyAttributeView::FileStore(_) => None,
        }
    }

    pub fn into_file_store_view(self) -> Option<Arc<dyn FileStoreAttributeView>> {
        match self {
            AnyAttributeView::FileStore(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_basic(self) -> Option<Arc<dyn BasicFileAttributeView>> {
        match self {
            AnyAttributeView::Basic(v) => Some(v),
            AnyAttributeView::Posix(v) => Some(v.into_basic_file_attribute_view()),
            AnyAttributeView::Dos(v) => Some(v.into_basic_file_attribute_view()),
            _ => None,
        }
    }

    pub fn into_file_owner(self) -> Option<Arc<dyn FileOwnerAttributeView>> {
        match self {
            AnyAttributeView::FileOwner(v) => Some(v),
            AnyAttributeView::Posix(v) => Some(v.into_file_owner_attribute_view()),
            AnyAttributeView::Acl(v) => Some(v.into_file_owner_attribute_view()),
            _ => None,
        }
    }

    pub fn into_posix(self) -> Option<Arc<dyn PosixFileAttributeView>> {
        match self {
            AnyAttributeView::Posix(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_dos(self) -> Option<Arc<dyn DosFileAttributeView>> {
        match self {
            AnyAttributeView::Dos(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_acl(self) -> Option<Arc<dyn AclFileAttributeView>> {
        match self {
            AnyAttributeView::Acl(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_user_defined(self) -> Option<Arc<dyn UserDefinedFileAttributeView>> {
        match self {
            AnyAttributeView::UserDefined(v) => Some(v),
            _ => None,
        }
    }
}

macro_rules! any_view_from {
    ($($variant:ident => $trait:ident),* $(,)?) => {
        $(
            impl From<Arc<dyn $trait>> for AnyAttributeView {
                fn from(v: Arc<dyn $trait>) -> Self {
                    AnyAttributeView::$variant(v)
                }
            }
        )*
    };
}

any_view_from! {
    Attribute => AttributeView,
    File => FileAttributeView,
    FileStore => FileStoreAttributeView,
    Basic => BasicFileAttributeView,
    FileOwner => FileOwnerAttributeView,
    Posix => PosixFileAttributeView,
    Dos => DosFileAttributeView,
    Acl => AclFileAttributeView,
    UserDefined => UserDefinedFileAttributeView,
}
