//! End-to-end use of wrapped values from the other hierarchy.

mod common;

use std::any::TypeId;
use std::collections::HashSet;
use std::error::Error as _;
use std::sync::Arc;

use common::*;
use fsattr_bridge::{native, shadow};
use fsattr_bridge::{
    AclEntryConversion, AclFileAttributeViewConversion, BasicFileAttributeViewConversion,
    Conversion, DosFileAttributeViewConversion, FileStoreConversion,
    PosixFileAttributeViewConversion, PosixFilePermissionConversion,
    UserDefinedFileAttributeViewConversion, UserPrincipalConversion,
    UserPrincipalLookupServiceConversion,
};
use native::PosixFilePermission as P;

#[test]
fn test_posix_view_through_shadow_api() {
    let fake = FakePosixView::new("alice", "staff");
    native::PosixFileAttributeView::set_permissions(&*fake, perms(&[P::OwnerRead, P::OwnerWrite]))
        .unwrap();
    let view: Arc<dyn native::PosixFileAttributeView> = fake.clone();

    let encoded = PosixFileAttributeViewConversion::encode(view.clone());
    let attrs = encoded.read_posix_attributes().unwrap();
    assert_eq!(attrs.owner().name(), "alice");
    assert_eq!(attrs.group().name(), "staff");
    assert_eq!(attrs.size(), 42);
    assert_eq!(attrs.last_modified_time(), shadow::FileTime::from_millis(1_000));
    assert_eq!(
        attrs.permissions().into_iter().collect::<Vec<_>>(),
        vec![shadow::PosixFilePermission::OwnerRead, shadow::PosixFilePermission::OwnerWrite]
    );

    // The same wrapper is a basic and a file-owner view.
    let basic = shadow::AsBasicFileAttributeView::into_basic_file_attribute_view(encoded.clone());
    assert!(basic.read_attributes().unwrap().is_regular_file());
    assert_eq!(encoded.owner().unwrap().name(), "alice");

    assert!(Arc::ptr_eq(&PosixFileAttributeViewConversion::decode(encoded), &view));
}

#[test]
fn test_posix_setters_reach_delegate() {
    let fake = FakePosixView::new("alice", "staff");
    let view: Arc<dyn native::PosixFileAttributeView> = fake.clone();
    let encoded = PosixFileAttributeViewConversion::encode(view);

    let new_perms: shadow::IndexSet<_> = [
        shadow::PosixFilePermission::OthersRead,
        shadow::PosixFilePermission::OwnerExecute,
    ]
    .into_iter()
    .collect();
    encoded.set_permissions(new_perms).unwrap();
    assert_eq!(
        fake.state.lock().unwrap().permissions,
        perms(&[P::OthersRead, P::OwnerExecute])
    );

    // A principal that came from the native side unwraps to the original.
    let bob = FakeUser::new("bob");
    encoded
        .set_owner(UserPrincipalConversion::encode(bob.clone()))
        .unwrap();
    assert!(Arc::ptr_eq(&fake.state.lock().unwrap().owner, &bob));

    let wheel = fsattr_bridge::GroupPrincipalConversion::encode(FakeGroup::new("wheel"));
    encoded.set_group(wheel).unwrap();
    assert_eq!(fake.state.lock().unwrap().group.name(), "wheel");
}

#[test]
fn test_set_times_keeps_absent_times() {
    let fake = FakePosixView::new("alice", "staff");
    let view: Arc<dyn native::BasicFileAttributeView> = fake.clone();
    let encoded = BasicFileAttributeViewConversion::encode(view);

    encoded
        .set_times(None, Some(shadow::FileTime::from_millis(9_000)), None)
        .unwrap();

    let state = fake.state.lock().unwrap();
    assert_eq!(state.modified, native::FileTime::from_millis(1_000));
    assert_eq!(state.accessed, native::FileTime::from_millis(9_000));
    assert_eq!(state.created, native::FileTime::from_millis(500));
}

#[test]
fn test_acl_flags_keep_order() {
    let flags: native::IndexSet<_> = [native::AclEntryFlag::InheritOnly, native::AclEntryFlag::FileInherit]
        .into_iter()
        .collect();
    let entry = native::AclEntry::new(native::AclEntryType::Allow, FakeUser::new("alice"))
        .with_flags(flags.iter().copied());

    let encoded = AclEntryConversion::encode(entry.clone());
    assert_eq!(
        encoded.flags().iter().copied().collect::<Vec<_>>(),
        vec![shadow::AclEntryFlag::InheritOnly, shadow::AclEntryFlag::FileInherit]
    );
    assert_eq!(AclEntryConversion::decode(encoded), entry);
}

#[test]
fn test_acl_list_through_both_directions() {
    // Native view, used through the shadow API.
    let fake = FakeAclView::new("alice");
    let view: Arc<dyn native::AclFileAttributeView> = fake.clone();
    let encoded = AclFileAttributeViewConversion::encode(view);

    let entries = vec![
        shadow::AclEntry::new(shadow::AclEntryType::Allow, ShadowUser::new("carol"))
            .with_permissions([shadow::AclEntryPermission::ReadData]),
        shadow::AclEntry::new(shadow::AclEntryType::Deny, ShadowUser::new("dave"))
            .with_permissions([shadow::AclEntryPermission::WriteData]),
    ];
    encoded.set_acl(entries.clone()).unwrap();
    assert_eq!(fake.acl.lock().unwrap().len(), 2);
    assert_eq!(encoded.acl().unwrap(), entries);

    // Shadow view, used through the native API.
    let shadow_fake = ShadowAclView::new("erin");
    let view: Arc<dyn shadow::AclFileAttributeView> = shadow_fake.clone();
    let decoded = AclFileAttributeViewConversion::decode(view);

    let entry = native::AclEntry::new(native::AclEntryType::Audit, FakeUser::new("frank"))
        .with_permissions([native::AclEntryPermission::Synchronize]);
    decoded.set_acl(vec![entry.clone()]).unwrap();
    assert_eq!(decoded.acl().unwrap(), vec![entry]);
    assert_eq!(decoded.owner().unwrap().name(), "erin");

    // The shadow view's failure arrives as a native failure.
    let err = decoded.set_acl(Vec::new()).unwrap_err();
    assert_eq!(err.kind(), native::ErrorKind::FileSystem);
    assert_eq!(err.message(), "/acl: empty acl");
}

#[test]
fn test_failures_are_translated() {
    let view: Arc<dyn native::BasicFileAttributeView> = Arc::new(DeniedView);
    let encoded = BasicFileAttributeViewConversion::encode(view);

    let err = encoded.read_attributes().unwrap_err();
    let expected = DeniedView::error();
    assert_eq!(err.kind(), shadow::ErrorKind::AccessDenied);
    assert_eq!(err.message(), expected.message());
    assert_eq!(err.file(), Some("/secret"));

    let source = err.source().unwrap().downcast_ref::<native::IoError>().unwrap();
    assert_eq!(source.kind(), native::ErrorKind::AccessDenied);

    let err = encoded.set_times(None, None, None).unwrap_err();
    assert_eq!(err.reason(), Some("not permitted"));
}

#[test]
fn test_wrappers_compare_by_delegate() {
    let a = UserPrincipalConversion::encode(FakeUser::new("alice"));
    let b = UserPrincipalConversion::encode(FakeUser::new("alice"));
    let c = UserPrincipalConversion::encode(FakeUser::new("bob"));

    assert!(!Arc::ptr_eq(&a, &b));
    assert_eq!(*a, *b);
    assert_ne!(*a, *c);

    let set: HashSet<_> = [a, b, c].into_iter().collect();
    assert_eq!(set.len(), 2);

    // A wrapper is never equal to a raw value of its own hierarchy.
    let wrapped = UserPrincipalConversion::encode(FakeUser::new("carol"));
    let raw = ShadowUser::new("carol");
    assert_ne!(*wrapped, *raw);
}

#[test]
fn test_permission_sets_keep_order() {
    let input = perms(&[P::OthersWrite, P::OwnerRead, P::GroupExecute]);
    let encoded = PosixFilePermissionConversion::encode_set(input.clone());
    assert_eq!(
        encoded.iter().copied().collect::<Vec<_>>(),
        vec![
            shadow::PosixFilePermission::OthersWrite,
            shadow::PosixFilePermission::OwnerRead,
            shadow::PosixFilePermission::GroupExecute,
        ]
    );
    assert_eq!(PosixFilePermissionConversion::decode_set(encoded), input);
    assert_eq!(
        native::posix_permissions_to_string(&input),
        shadow::posix_permissions_to_string(&PosixFilePermissionConversion::encode_set(input.clone()))
    );
}

#[test]
fn test_user_defined_attributes() {
    let fake = Arc::new(FakeUserDefinedView::default());
    let view: Arc<dyn native::UserDefinedFileAttributeView> = fake.clone();
    let encoded = UserDefinedFileAttributeViewConversion::encode(view);

    assert_eq!(encoded.write("color", b"blue").unwrap(), 4);
    assert_eq!(encoded.list().unwrap(), vec!["color".to_string()]);
    assert_eq!(encoded.size("color").unwrap(), 4);

    let mut buf = shadow::BytesMut::new();
    assert_eq!(encoded.read("color", &mut buf).unwrap(), 4);
    assert_eq!(&buf[..], b"blue");

    encoded.delete("color").unwrap();
    let err = encoded.read("color", &mut buf).unwrap_err();
    assert_eq!(err.kind(), shadow::ErrorKind::NoSuchFile);
    assert_eq!(err.message(), "/data/file: no attribute color");
}

#[test]
fn test_dos_setters_in_both_directions() {
    let fake = Arc::new(FakeDosView::default());
    let view: Arc<dyn native::DosFileAttributeView> = fake.clone();
    let encoded = DosFileAttributeViewConversion::encode(view);

    encoded.set_read_only(true).unwrap();
    encoded.set_hidden(true).unwrap();
    encoded.set_archive(true).unwrap();
    assert_eq!(
        *fake.flags.lock().unwrap(),
        DosFlags {
            read_only: true,
            hidden: true,
            system: false,
            archive: true,
        }
    );
    let attrs = encoded.read_dos_attributes().unwrap();
    assert!(attrs.is_read_only() && attrs.is_hidden() && !attrs.is_system());

    let shadow_fake = Arc::new(ShadowDosView::default());
    let view: Arc<dyn shadow::DosFileAttributeView> = shadow_fake.clone();
    let decoded = DosFileAttributeViewConversion::decode(view);
    decoded.set_hidden(true).unwrap();
    assert!(*shadow_fake.hidden.lock().unwrap());

    let err = decoded.read_dos_attributes().unwrap_err();
    assert_eq!(err.kind(), native::ErrorKind::Other);
    assert_eq!(err.message(), "not readable");
}

#[test]
fn test_lookup_service_narrows_groups() {
    let lookup: Arc<dyn native::UserPrincipalLookupService> = Arc::new(FakeLookup {
        users: vec!["alice".to_string()],
        groups: vec!["staff".to_string()],
    });
    let encoded = UserPrincipalLookupServiceConversion::encode(lookup);

    let group = encoded.lookup_principal_by_group_name("staff").unwrap();
    assert_eq!(group.name(), "staff");

    // The shadow group is also a shadow user, and decodes to the original group.
    let as_user = shadow::AsUserPrincipal::into_user_principal(group);
    let native_user = UserPrincipalConversion::decode(as_user);
    let staff = native::AsUserPrincipal::into_user_principal(FakeGroup::new("staff"));
    assert_eq!(*native_user, *staff);

    assert_eq!(encoded.lookup_principal_by_name("alice").unwrap().name(), "alice");
    let err = encoded.lookup_principal_by_name("mallory").unwrap_err();
    assert_eq!(err.message(), "user not found: mallory");
}

#[test]
fn test_file_store_views_through_dispatch() {
    let store: Arc<dyn native::FileStore> = FakeFileStore::new();
    let encoded = FileStoreConversion::encode(store);

    assert_eq!(encoded.name(), "/dev/sda1");
    assert_eq!(encoded.store_type(), "ext4");
    assert_eq!(encoded.total_space().unwrap(), 1 << 30);
    assert_eq!(encoded.block_size().unwrap_err().message(), "block size unknown");

    assert!(encoded.supports_file_attribute_view(TypeId::of::<dyn shadow::PosixFileAttributeView>()));
    assert!(!encoded.supports_file_attribute_view(TypeId::of::<dyn shadow::DosFileAttributeView>()));
    assert!(encoded.supports_file_attribute_view_named("posix"));

    let view = encoded
        .file_store_attribute_view(TypeId::of::<dyn shadow::FileStoreAttributeView>())
        .unwrap();
    assert_eq!(view.kind(), shadow::ViewKind::FileStore);
    assert_eq!(view.name(), "quota");
    assert!(encoded
        .file_store_attribute_view(TypeId::of::<dyn shadow::PosixFileAttributeView>())
        .is_none());

    let limit = encoded.attribute("quota:limit").unwrap();
    assert_eq!(limit.downcast_ref::<u64>(), Some(&100));
}
