//! Access control list entries.

use std::sync::Arc;

use indexmap::IndexSet;

use crate::permission::{AclEntryFlag, AclEntryPermission, AclEntryType};
use crate::principal::UserPrincipal;

/// One entry of an access control list.
///
/// Two entries are equal when their type, principal, permissions and flags
/// are equal. Permission and flag sets compare without regard to order.
#[derive(Clone, Debug)]
pub struct AclEntry {
    entry_type: AclEntryType,
    principal: Arc<dyn UserPrincipal>,
    permissions: IndexSet<AclEntryPermission>,
    flags: IndexSet<AclEntryFlag>,
}

impl PartialEq for AclEntry {
    fn eq(&self, other: &Self) -> bool {
        self.entry_type == other.entry_type
            && *self.principal == *other.principal
            && self.permissions == other.permissions
            && self.flags == other.flags
    }
}

impl Eq for AclEntry {}

impl AclEntry {
    /// Create an entry with no permissions and no flags.
    pub fn new(entry_type: AclEntryType, principal: Arc<dyn UserPrincipal>) -> Self {
        Self {
            entry_type,
            principal,
            permissions: IndexSet::new(),
            flags: IndexSet::new(),
        }
    }

    pub fn with_permissions(
        mut self,
        permissions: impl IntoIterator<Item = AclEntryPermission>,
    ) -> Self {
        self.permissions = permissions.into_iter().collect();
        self
    }

    pub fn with_flags(mut self, flags: impl IntoIterator<Item = AclEntryFlag>) -> Self {
        self.flags = flags.into_iter().collect();
        self
    }

    pub fn entry_type(&self) -> AclEntryType {
        self.entry_type
    }

    pub fn principal(&self) -> &Arc<dyn UserPrincipal> {
        &self.principal
    }

    pub fn permissions(&self) -> &IndexSet<AclEntryPermission> {
        &self.permissions
    }

    pub fn flags(&self) -> &IndexSet<AclEntryFlag> {
        &self.flags
    }
}
