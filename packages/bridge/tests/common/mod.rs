//! In-memory fakes for both hierarchies.

#![allow(dead_code)]

use std::any::TypeId;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use fsattr_bridge::native;
use fsattr_bridge::shadow;
use native::{
    AclEntry, AttributeValue, ErrorKind, FileTime, IndexSet, IoError, PosixFilePermission,
};

// ============================================================================
// Native principals
// ============================================================================

#[derive(Debug, PartialEq, Hash)]
pub struct FakeUser {
    pub name: String,
}

impl FakeUser {
    pub fn new(name: &str) -> Arc<dyn native::UserPrincipal> {
        Arc::new(Self {
            name: name.to_string(),
        })
    }
}

impl native::Object for FakeUser {
    fn dyn_eq(&self, other: &dyn native::Object) -> bool {
        native::value_eq(self, other)
    }

    fn dyn_hash(&self) -> u64 {
        native::value_hash(self)
    }
}

impl native::UserPrincipal for FakeUser {
    fn name(&self) -> String {
        self.name.clone()
    }
}

#[derive(Debug, PartialEq, Hash)]
pub struct FakeGroup {
    pub name: String,
}

impl FakeGroup {
    pub fn new(name: &str) -> Arc<dyn native::GroupPrincipal> {
        Arc::new(Self {
            name: name.to_string(),
        })
    }
}

impl native::Object for FakeGroup {
    fn dyn_eq(&self, other: &dyn native::Object) -> bool {
        native::value_eq(self, other)
    }

    fn dyn_hash(&self) -> u64 {
        native::value_hash(self)
    }
}

impl native::UserPrincipal for FakeGroup {
    fn name(&self) -> String {
        self.name.clone()
    }
}

impl native::GroupPrincipal for FakeGroup {}

/// Knows a fixed set of users and groups.
#[derive(Debug)]
pub struct FakeLookup {
    pub users: Vec<String>,
    pub groups: Vec<String>,
}

impl native::Object for FakeLookup {}

impl native::UserPrincipalLookupService for FakeLookup {
    fn lookup_principal_by_name(&self, name: &str) -> native::Result<Arc<dyn native::UserPrincipal>> {
        if self.users.iter().any(|u| u == name) {
            Ok(FakeUser::new(name))
        } else {
            Err(IoError::new(ErrorKind::Other, format!("user not found: {}", name)))
        }
    }

    fn lookup_principal_by_group_name(
        &self,
        group: &str,
    ) -> native::Result<Arc<dyn native::GroupPrincipal>> {
        if self.groups.iter().any(|g| g == group) {
            Ok(FakeGroup::new(group))
        } else {
            Err(IoError::new(ErrorKind::Other, format!("group not found: {}", group)))
        }
    }
}

// ============================================================================
// Native attribute values
// ============================================================================

#[derive(Debug)]
pub struct FakePosixAttributes {
    pub owner: Arc<dyn native::UserPrincipal>,
    pub group: Arc<dyn native::GroupPrincipal>,
    pub permissions: IndexSet<PosixFilePermission>,
    pub modified: FileTime,
    pub size: u64,
}

impl native::Object for FakePosixAttributes {}

impl native::BasicFileAttributes for FakePosixAttributes {
    fn last_modified_time(&self) -> FileTime {
        self.modified
    }

    fn last_access_time(&self) -> FileTime {
        self.modified
    }

    fn creation_time(&self) -> FileTime {
        FileTime::UNIX_EPOCH
    }

    fn is_regular_file(&self) -> bool {
        true
    }

    fn is_directory(&self) -> bool {
        false
    }

    fn is_symbolic_link(&self) -> bool {
        false
    }

    fn is_other(&self) -> bool {
        false
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn file_key(&self) -> Option<AttributeValue> {
        None
    }
}

impl native::PosixFileAttributes for FakePosixAttributes {
    fn owner(&self) -> Arc<dyn native::UserPrincipal> {
        self.owner.clone()
    }

    fn group(&self) -> Arc<dyn native::GroupPrincipal> {
        self.group.clone()
    }

    fn permissions(&self) -> IndexSet<PosixFilePermission> {
        self.permissions.clone()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DosFlags {
    pub read_only: bool,
    pub hidden: bool,
    pub system: bool,
    pub archive: bool,
}

#[derive(Debug)]
pub struct FakeDosAttributes {
    pub flags: DosFlags,
}

impl native::Object for FakeDosAttributes {}

impl native::BasicFileAttributes for FakeDosAttributes {
    fn last_modified_time(&self) -> FileTime {
        FileTime::UNIX_EPOCH
    }

    fn last_access_time(&self) -> FileTime {
        FileTime::UNIX_EPOCH
    }

    fn creation_time(&self) -> FileTime {
        FileTime::UNIX_EPOCH
    }

    fn is_regular_file(&self) -> bool {
        true
    }

    fn is_directory(&self) -> bool {
        false
    }

    fn is_symbolic_link(&self) -> bool {
        false
    }

    fn is_other(&self) -> bool {
        false
    }

    fn size(&self) -> u64 {
        0
    }

    fn file_key(&self) -> Option<AttributeValue> {
        Some(Arc::new(7u64))
    }
}

impl native::DosFileAttributes for FakeDosAttributes {
    fn is_read_only(&self) -> bool {
        self.flags.read_only
    }

    fn is_hidden(&self) -> bool {
        self.flags.hidden
    }

    fn is_archive(&self) -> bool {
        self.flags.archive
    }

    fn is_system(&self) -> bool {
        self.flags.system
    }
}

// ============================================================================
// Native views
// ============================================================================

#[derive(Debug)]
pub struct PosixState {
    pub owner: Arc<dyn native::UserPrincipal>,
    pub group: Arc<dyn native::GroupPrincipal>,
    pub permissions: IndexSet<PosixFilePermission>,
    pub modified: FileTime,
    pub accessed: FileTime,
    pub created: FileTime,
}

/// A POSIX view over an in-memory file.
#[derive(Debug)]
pub struct FakePosixView {
    pub state: Mutex<PosixState>,
}

impl FakePosixView {
    pub fn new(owner: &str, group: &str) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(PosixState {
                owner: FakeUser::new(owner),
                group: FakeGroup::new(group),
                permissions: IndexSet::new(),
                modified: FileTime::from_millis(1_000),
                accessed: FileTime::from_millis(2_000),
                created: FileTime::from_millis(500),
            }),
        })
    }
}

impl native::Object for FakePosixView {}

impl native::AttributeView for FakePosixView {
    fn name(&self) -> String {
        "posix".to_string()
    }

    fn into_any_view(self: Arc<Self>) -> native::AnyAttributeView {
        native::AnyAttributeView::Posix(self)
    }
}

impl native::FileAttributeView for FakePosixView {}

impl native::BasicFileAttributeView for FakePosixView {
    fn read_attributes(&self) -> native::Result<Arc<dyn native::BasicFileAttributes>> {
        let attrs = native::PosixFileAttributeView::read_posix_attributes(self)?;
        Ok(native::AsBasicFileAttributes::into_basic_file_attributes(attrs))
    }

    fn set_times(
        &self,
        last_modified_time: Option<FileTime>,
        last_access_time: Option<FileTime>,
        create_time: Option<FileTime>,
    ) -> native::Result<()> {
        let mut state = self.state.lock().unwrap();
        if let Some(t) = last_modified_time {
            state.modified = t;
        }
        if let Some(t) = last_access_time {
            state.accessed = t;
        }
        if let Some(t) = create_time {
            state.created = t;
        }
        Ok(())
    }
}

impl native::FileOwnerAttributeView for FakePosixView {
    fn owner(&self) -> native::Result<Arc<dyn native::UserPrincipal>> {
        Ok(self.state.lock().unwrap().owner.clone())
    }

    fn set_owner(&self, owner: Arc<dyn native::UserPrincipal>) -> native::Result<()> {
        self.state.lock().unwrap().owner = owner;
        Ok(())
    }
}

impl native::PosixFileAttributeView for FakePosixView {
    fn read_posix_attributes(&self) -> native::Result<Arc<dyn native::PosixFileAttributes>> {
        let state = self.state.lock().unwrap();
        Ok(Arc::new(FakePosixAttributes {
            owner: state.owner.clone(),
            group: state.group.clone(),
            permissions: state.permissions.clone(),
            modified: state.modified,
            size: 42,
        }))
    }

    fn set_permissions(&self, perms: IndexSet<PosixFilePermission>) -> native::Result<()> {
        self.state.lock().unwrap().permissions = perms;
        Ok(())
    }

    fn set_group(&self, group: Arc<dyn native::GroupPrincipal>) -> native::Result<()> {
        self.state.lock().unwrap().group = group;
        Ok(())
    }
}

/// A DOS view over an in-memory file.
#[derive(Debug, Default)]
pub struct FakeDosView {
    pub flags: Mutex<DosFlags>,
}

impl native::Object for FakeDosView {}

impl native::AttributeView for FakeDosView {
    fn name(&self) -> String {
        "dos".to_string()
    }

    fn into_any_view(self: Arc<Self>) -> native::AnyAttributeView {
        native::AnyAttributeView::Dos(self)
    }
}

impl native::FileAttributeView for FakeDosView {}

impl native::BasicFileAttributeView for FakeDosView {
    fn read_attributes(&self) -> native::Result<Arc<dyn native::BasicFileAttributes>> {
        let attrs = native::DosFileAttributeView::read_dos_attributes(self)?;
        Ok(native::AsBasicFileAttributes::into_basic_file_attributes(attrs))
    }

    fn set_times(
        &self,
        _last_modified_time: Option<FileTime>,
        _last_access_time: Option<FileTime>,
        _create_time: Option<FileTime>,
    ) -> native::Result<()> {
        Ok(())
    }
}

impl native::DosFileAttributeView for FakeDosView {
    fn read_dos_attributes(&self) -> native::Result<Arc<dyn native::DosFileAttributes>> {
        Ok(Arc::new(FakeDosAttributes {
            flags: *self.flags.lock().unwrap(),
        }))
    }

    fn set_read_only(&self, value: bool) -> native::Result<()> {
        self.flags.lock().unwrap().read_only = value;
        Ok(())
    }

    fn set_hidden(&self, value: bool) -> native::Result<()> {
        self.flags.lock().unwrap().hidden = value;
        Ok(())
    }

    fn set_system(&self, value: bool) -> native::Result<()> {
        self.flags.lock().unwrap().system = value;
        Ok(())
    }

    fn set_archive(&self, value: bool) -> native::Result<()> {
        self.flags.lock().unwrap().archive = value;
        Ok(())
    }
}

/// An ACL view over an in-memory file.
#[derive(Debug)]
pub struct FakeAclView {
    pub owner: Mutex<Arc<dyn native::UserPrincipal>>,
    pub acl: Mutex<Vec<AclEntry>>,
}

impl FakeAclView {
    pub fn new(owner: &str) -> Arc<Self> {
        Arc::new(Self {
            owner: Mutex::new(FakeUser::new(owner)),
            acl: Mutex::new(Vec::new()),
        })
    }
}

impl native::Object for FakeAclView {}

impl native::AttributeView for FakeAclView {
    fn name(&self) -> String {
        "acl".to_string()
    }

    fn into_any_view(self: Arc<Self>) -> native::AnyAttributeView {
        native::AnyAttributeView::Acl(self)
    }
}

impl native::FileAttributeView for FakeAclView {}

impl native::FileOwnerAttributeView for FakeAclView {
    fn owner(&self) -> native::Result<Arc<dyn native::UserPrincipal>> {
        Ok(self.owner.lock().unwrap().clone())
    }

    fn set_owner(&self, owner: Arc<dyn native::UserPrincipal>) -> native::Result<()> {
        *self.owner.lock().unwrap() = owner;
        Ok(())
    }
}

impl native::AclFileAttributeView for FakeAclView {
    fn acl(&self) -> native::Result<Vec<AclEntry>> {
        Ok(self.acl.lock().unwrap().clone())
    }

    fn set_acl(&self, acl: Vec<AclEntry>) -> native::Result<()> {
        *self.acl.lock().unwrap() = acl;
        Ok(())
    }
}

/// Named attributes kept in a map.
#[derive(Debug, Default)]
pub struct FakeUserDefinedView {
    pub attrs: Mutex<BTreeMap<String, Vec<u8>>>,
}

impl FakeUserDefinedView {
    fn missing(name: &str) -> IoError {
        IoError::for_file(ErrorKind::NoSuchFile, "/data/file").with_reason(format!("no attribute {}", name))
    }
}

impl native::Object for FakeUserDefinedView {}

impl native::AttributeView for FakeUserDefinedView {
    fn name(&self) -> String {
        "user".to_string()
    }

    fn into_any_view(self: Arc<Self>) -> native::AnyAttributeView {
        native::AnyAttributeView::UserDefined(self)
    }
}

impl native::FileAttributeView for FakeUserDefinedView {}

impl native::UserDefinedFileAttributeView for FakeUserDefinedView {
    fn list(&self) -> native::Result<Vec<String>> {
        Ok(self.attrs.lock().unwrap().keys().cloned().collect())
    }

    fn size(&self, name: &str) -> native::Result<usize> {
        self.attrs
            .lock()
            .unwrap()
            .get(name)
            .map(Vec::len)
            .ok_or_else(|| Self::missing(name))
    }

    fn read(&self, name: &str, dst: &mut native::BytesMut) -> native::Result<usize> {
        let attrs = self.attrs.lock().unwrap();
        let value = attrs.get(name).ok_or_else(|| Self::missing(name))?;
        dst.extend_from_slice(value);
        Ok(value.len())
    }

    fn write(&self, name: &str, src: &[u8]) -> native::Result<usize> {
        self.attrs
            .lock()
            .unwrap()
            .insert(name.to_string(), src.to_vec());
        Ok(src.len())
    }

    fn delete(&self, name: &str) -> native::Result<()> {
        self.attrs
            .lock()
            .unwrap()
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| Self::missing(name))
    }
}

/// A basic view whose every call is denied.
#[derive(Debug)]
pub struct DeniedView;

impl DeniedView {
    pub fn error() -> IoError {
        IoError::for_file(ErrorKind::AccessDenied, "/secret").with_reason("not permitted")
    }
}

impl native::Object for DeniedView {}

impl native::AttributeView for DeniedView {
    fn name(&self) -> String {
        "basic".to_string()
    }

    fn into_any_view(self: Arc<Self>) -> native::AnyAttributeView {
        native::AnyAttributeView::Basic(self)
    }
}

impl native::FileAttributeView for DeniedView {}

impl native::BasicFileAttributeView for DeniedView {
    fn read_attributes(&self) -> native::Result<Arc<dyn native::BasicFileAttributes>> {
        Err(Self::error())
    }

    fn set_times(
        &self,
        _last_modified_time: Option<FileTime>,
        _last_access_time: Option<FileTime>,
        _create_time: Option<FileTime>,
    ) -> native::Result<()> {
        Err(Self::error())
    }
}

/// A file store's own view.
#[derive(Debug)]
pub struct FakeStoreView;

impl native::Object for FakeStoreView {}

impl native::AttributeView for FakeStoreView {
    fn name(&self) -> String {
        "quota".to_string()
    }

    fn into_any_view(self: Arc<Self>) -> native::AnyAttributeView {
        native::AnyAttributeView::FileStore(self)
    }
}

impl native::FileStoreAttributeView for FakeStoreView {}

// ============================================================================
// Native file store
// ============================================================================

/// A store supporting the basic and POSIX views, with one store view.
#[derive(Debug)]
pub struct FakeFileStore {
    pub store_view: Arc<FakeStoreView>,
}

impl FakeFileStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            store_view: Arc::new(FakeStoreView),
        })
    }
}

impl native::Object for FakeFileStore {}

impl native::FileStore for FakeFileStore {
    fn name(&self) -> String {
        "/dev/sda1".to_string()
    }

    fn store_type(&self) -> String {
        "ext4".to_string()
    }

    fn is_read_only(&self) -> bool {
        false
    }

    fn total_space(&self) -> native::Result<u64> {
        Ok(1 << 30)
    }

    fn usable_space(&self) -> native::Result<u64> {
        Ok(1 << 29)
    }

    fn unallocated_space(&self) -> native::Result<u64> {
        Ok(1 << 29)
    }

    fn block_size(&self) -> native::Result<u64> {
        Err(IoError::new(ErrorKind::Other, "block size unknown"))
    }

    fn supports_file_attribute_view(&self, view_type: TypeId) -> bool {
        view_type == TypeId::of::<dyn native::BasicFileAttributeView>()
            || view_type == TypeId::of::<dyn native::PosixFileAttributeView>()
    }

    fn supports_file_attribute_view_named(&self, name: &str) -> bool {
        matches!(name, "basic" | "posix")
    }

    fn file_store_attribute_view(&self, view_type: TypeId) -> Option<native::AnyAttributeView> {
        if view_type == TypeId::of::<dyn native::FileStoreAttributeView>() {
            let view: Arc<dyn native::FileStoreAttributeView> = self.store_view.clone();
            Some(view.into())
        } else {
            None
        }
    }

    fn attribute(&self, attribute: &str) -> native::Result<AttributeValue> {
        match attribute {
            "quota:limit" => Ok(Arc::new(100u64)),
            _ => Err(IoError::new(ErrorKind::Other, format!("unknown attribute {}", attribute))),
        }
    }
}

// ============================================================================
// Shadow fakes
// ============================================================================

#[derive(Debug, PartialEq, Hash)]
pub struct ShadowUser {
    pub name: String,
}

impl ShadowUser {
    pub fn new(name: &str) -> Arc<dyn shadow::UserPrincipal> {
        Arc::new(Self {
            name: name.to_string(),
        })
    }
}

impl shadow::Object for ShadowUser {
    fn dyn_eq(&self, other: &dyn shadow::Object) -> bool {
        shadow::value_eq(self, other)
    }

    fn dyn_hash(&self) -> u64 {
        shadow::value_hash(self)
    }
}

impl shadow::UserPrincipal for ShadowUser {
    fn name(&self) -> String {
        self.name.clone()
    }
}

/// A shadow ACL view.
#[derive(Debug)]
pub struct ShadowAclView {
    pub owner: Mutex<Arc<dyn shadow::UserPrincipal>>,
    pub acl: Mutex<Vec<shadow::AclEntry>>,
}

impl ShadowAclView {
    pub fn new(owner: &str) -> Arc<Self> {
        Arc::new(Self {
            owner: Mutex::new(ShadowUser::new(owner)),
            acl: Mutex::new(Vec::new()),
        })
    }
}

impl shadow::Object for ShadowAclView {}

impl shadow::AttributeView for ShadowAclView {
    fn name(&self) -> String {
        "acl".to_string()
    }

    fn into_any_view(self: Arc<Self>) -> shadow::AnyAttributeView {
        shadow::AnyAttributeView::Acl(self)
    }
}

impl shadow::FileAttributeView for ShadowAclView {}

impl shadow::FileOwnerAttributeView for ShadowAclView {
    fn owner(&self) -> shadow::Result<Arc<dyn shadow::UserPrincipal>> {
        Ok(self.owner.lock().unwrap().clone())
    }

    fn set_owner(&self, owner: Arc<dyn shadow::UserPrincipal>) -> shadow::Result<()> {
        *self.owner.lock().unwrap() = owner;
        Ok(())
    }
}

impl shadow::AclFileAttributeView for ShadowAclView {
    fn acl(&self) -> shadow::Result<Vec<shadow::AclEntry>> {
        Ok(self.acl.lock().unwrap().clone())
    }

    fn set_acl(&self, acl: Vec<shadow::AclEntry>) -> shadow::Result<()> {
        if acl.is_empty() {
            return Err(shadow::IoError::for_file(shadow::ErrorKind::FileSystem, "/acl")
                .with_reason("empty acl"));
        }
        *self.acl.lock().unwrap() = acl;
        Ok(())
    }
}

/// A shadow DOS view that remembers its flags.
#[derive(Debug, Default)]
pub struct ShadowDosView {
    pub hidden: Mutex<bool>,
}

impl shadow::Object for ShadowDosView {}

impl shadow::AttributeView for ShadowDosView {
    fn name(&self) -> String {
        "dos".to_string()
    }

    fn into_any_view(self: Arc<Self>) -> shadow::AnyAttributeView {
        shadow::AnyAttributeView::Dos(self)
    }
}

impl shadow::FileAttributeView for ShadowDosView {}

impl shadow::BasicFileAttributeView for ShadowDosView {
    fn read_attributes(&self) -> shadow::Result<Arc<dyn shadow::BasicFileAttributes>> {
        Err(shadow::IoError::new(shadow::ErrorKind::Other, "not readable"))
    }

    fn set_times(
        &self,
        _last_modified_time: Option<shadow::FileTime>,
        _last_access_time: Option<shadow::FileTime>,
        _create_time: Option<shadow::FileTime>,
    ) -> shadow::Result<()> {
        Ok(())
    }
}

impl shadow::DosFileAttributeView for ShadowDosView {
    fn read_dos_attributes(&self) -> shadow::Result<Arc<dyn shadow::DosFileAttributes>> {
        Err(shadow::IoError::new(shadow::ErrorKind::Other, "not readable"))
    }

    fn set_read_only(&self, _value: bool) -> shadow::Result<()> {
        Ok(())
    }

    fn set_hidden(&self, value: bool) -> shadow::Result<()> {
        *self.hidden.lock().unwrap() = value;
        Ok(())
    }

    fn set_system(&self, _value: bool) -> shadow::Result<()> {
        Ok(())
    }

    fn set_archive(&self, _value: bool) -> shadow::Result<()> {
        Ok(())
    }
}

pub fn perms(list: &[PosixFilePermission]) -> IndexSet<PosixFilePermission> {
    list.iter().copied().collect()
}

/// A shadow POSIX view keeping owner and permissions in memory.
#[derive(Debug)]
pub struct ShadowPosixView {
    pub owner: Mutex<Arc<dyn shadow::UserPrincipal>>,
    pub permissions: Mutex<IndexSet<shadow::PosixFilePermission>>,
}

impl ShadowPosixView {
    pub fn new(owner: &str) -> Arc<Self> {
        Arc::new(Self {
            owner: Mutex::new(ShadowUser::new(owner)),
            permissions: Mutex::new(IndexSet::new()),
        })
    }
}

impl shadow::Object for ShadowPosixView {}

impl shadow::AttributeView for ShadowPosixView {
    fn name(&self) -> String {
        "posix".to_string()
    }

    fn into_any_view(self: Arc<Self>) -> shadow::AnyAttributeView {
        shadow::AnyAttributeView::Posix(self)
    }
}

impl shadow::FileAttributeView for ShadowPosixView {}

impl shadow::BasicFileAttributeView for ShadowPosixView {
    fn read_attributes(&self) -> shadow::Result<Arc<dyn shadow::BasicFileAttributes>> {
        Err(shadow::IoError::new(shadow::ErrorKind::Other, "not readable"))
    }

    fn set_times(
        &self,
        _last_modified_time: Option<shadow::FileTime>,
        _last_access_time: Option<shadow::FileTime>,
        _create_time: Option<shadow::FileTime>,
    ) -> shadow::Result<()> {
        Ok(())
    }
}

impl shadow::FileOwnerAttributeView for ShadowPosixView {
    fn owner(&self) -> shadow::Result<Arc<dyn shadow::UserPrincipal>> {
        Ok(self.owner.lock().unwrap().clone())
    }

    fn set_owner(&self, owner: Arc<dyn shadow::UserPrincipal>) -> shadow::Result<()> {
        *self.owner.lock().unwrap() = owner;
        Ok(())
    }
}

impl shadow::PosixFileAttributeView for ShadowPosixView {
    fn read_posix_attributes(&self) -> shadow::Result<Arc<dyn shadow::PosixFileAttributes>> {
        Err(shadow::IoError::new(shadow::ErrorKind::Other, "not readable"))
    }

    fn set_permissions(&self, perms: IndexSet<shadow::PosixFilePermission>) -> shadow::Result<()> {
        *self.permissions.lock().unwrap() = perms;
        Ok(())
    }

    fn set_group(&self, _group: Arc<dyn shadow::GroupPrincipal>) -> shadow::Result<()> {
        Ok(())
    }
}
