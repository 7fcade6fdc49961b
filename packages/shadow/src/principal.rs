//! User and group principals, and the service that looks them up by name.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::error::Result;
use crate::object::Object;

/// Widens an `Arc` of any user principal to `Arc<dyn UserPrincipal>`.
pub trait AsUserPrincipal {
    fn into_user_principal(self: Arc<Self>) -> Arc<dyn UserPrincipal>;
}

impl<T: UserPrincipal> AsUserPrincipal for T {
    fn into_user_principal(self: Arc<Self>) -> Arc<dyn UserPrincipal> {
        self
    }
}

/// An identity that can own files and appear in ACL entries.
pub trait UserPrincipal: Object + AsUserPrincipal {
    fn name(&self) -> String;
}

/// A group identity.
pub trait GroupPrincipal: UserPrincipal {}

/// Resolves principals by name.
pub trait UserPrincipalLookupService: Object {
    fn lookup_principal_by_name(&self, name: &str) -> Result<Arc<dyn UserPrincipal>>;

    fn lookup_principal_by_group_name(&self, group: &str) -> Result<Arc<dyn GroupPrincipal>>;
}

impl PartialEq for dyn UserPrincipal {
    fn eq(&self, other: &Self) -> bool {
        self.dyn_eq(other.as_object())
    }
}

impl Eq for dyn UserPrincipal {}

impl Hash for dyn UserPrincipal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.dyn_hash());
    }
}

impl PartialEq for dyn GroupPrincipal {
    fn eq(&self, other: &Self) -> bool {
        self.dyn_eq(other.as_object())
    }
}

impl Eq for dyn GroupPrincipal {}

impl Hash for dyn GroupPrincipal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.dyn_hash());
    }
}
