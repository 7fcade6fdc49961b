//! Permission, flag and entry-type enumerations.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// A POSIX file permission bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PosixFilePermission {
    OwnerRead,
    OwnerWrite,
    OwnerExecute,
    GroupRead,
    GroupWrite,
    GroupExecute,
    OthersRead,
    OthersWrite,
    OthersExecute,
}

impl PosixFilePermission {
    /// Every permission, in `rwxrwxrwx` order.
    pub const ALL: [PosixFilePermission; 9] = [
        PosixFilePermission::OwnerRead,
        PosixFilePermission::OwnerWrite,
        PosixFilePermission::OwnerExecute,
        PosixFilePermission::GroupRead,
        PosixFilePermission::GroupWrite,
        PosixFilePermission::GroupExecute,
        PosixFilePermission::OthersRead,
        PosixFilePermission::OthersWrite,
        PosixFilePermission::OthersExecute,
    ];

    /// The character this permission occupies in the `rwxrwxrwx` form.
    pub fn symbol(&self) -> char {
        match self {
            PosixFilePermission::OwnerRead
            | PosixFilePermission::GroupRead
            | PosixFilePermission::OthersRead => 'r',
            PosixFilePermission::OwnerWrite
            | PosixFilePermission::GroupWrite
            | PosixFilePermission::OthersWrite => 'w',
            PosixFilePermission::OwnerExecute
            | PosixFilePermission::GroupExecute
            | PosixFilePermission::OthersExecute => 'x',
        }
    }
}

/// Render a permission set in the nine-character `rwxr-x---` form.
pub fn posix_permissions_to_string(perms: &IndexSet<PosixFilePermission>) -> String {
    PosixFilePermission::ALL
        .iter()
        .map(|p| if perms.contains(p) { p.symbol() } else { '-' })
        .collect()
}

/// Parse the nine-character `rwxr-x---` form.
///
/// Returns `None` when the string has the wrong length or a character other
/// than the expected symbol or `-` in any position. The resulting set is in
/// `rwxrwxrwx` order.
pub fn posix_permissions_from_string(s: &str) -> Option<IndexSet<PosixFilePermission>> {
    if s.chars().count() != PosixFilePermission::ALL.len() {
        return None;
    }

    let mut perms = IndexSet::new();
    for (c, p) in s.chars().zip(PosixFilePermission::ALL) {
        if c == p.symbol() {
            perms.insert(p);
        } else if c != '-' {
            return None;
        }
    }
    Some(perms)
}

/// A permission that an ACL entry grants or denies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AclEntryPermission {
    ReadData,
    WriteData,
    AppendData,
    ReadNamedAttrs,
    WriteNamedAttrs,
    Execute,
    DeleteChild,
    ReadAttributes,
    WriteAttributes,
    Delete,
    ReadAcl,
    WriteAcl,
    WriteOwner,
    Synchronize,
}

impl AclEntryPermission {
    pub const LIST_DIRECTORY: AclEntryPermission = AclEntryPermission::ReadData;
    pub const ADD_FILE: AclEntryPermission = AclEntryPermission::WriteData;
    pub const ADD_SUBDIRECTORY: AclEntryPermission = AclEntryPermission::AppendData;

    pub const ALL: [AclEntryPermission; 14] = [
        AclEntryPermission::ReadData,
        AclEntryPermission::WriteData,
        AclEntryPermission::AppendData,
        AclEntryPermission::ReadNamedAttrs,
        AclEntryPermission::WriteNamedAttrs,
        AclEntryPermission::Execute,
        AclEntryPermission::DeleteChild,
        AclEntryPermission::ReadAttributes,
        AclEntryPermission::WriteAttributes,
        AclEntryPermission::Delete,
        AclEntryPermission::ReadAcl,
        AclEntryPermission::WriteAcl,
        AclEntryPermission::WriteOwner,
        AclEntryPermission::Synchronize,
    ];
}

/// Inheritance and propagation flags of an ACL entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AclEntryFlag {
    FileInherit,
    DirectoryInherit,
    NoPropagateInherit,
    InheritOnly,
}

impl AclEntryFlag {
    pub const ALL: [AclEntryFlag; 4] = [
        AclEntryFlag::FileInherit,
        AclEntryFlag::DirectoryInherit,
        AclEntryFlag::NoPropagateInherit,
        AclEntryFlag::InheritOnly,
    ];
}

/// What an ACL entry does when it matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AclEntryType {
    Allow,
    Deny,
    Audit,
    Alarm,
}

impl AclEntryType {
    pub const ALL: [AclEntryType; 4] = [
        AclEntryType::Allow,
        AclEntryType::Deny,
        AclEntryType::Audit,
        AclEntryType::Alarm,
    ];
}
