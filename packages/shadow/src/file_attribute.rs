//! Single named attributes, as passed when creating a file.

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use indexmap::IndexSet;

use crate::object::Object;
use crate::permission::{posix_permissions_to_string, PosixFilePermission};

/// An opaque attribute value. Its concrete type is defined by the attribute
/// name (`"posix:permissions"` carries an `IndexSet<PosixFilePermission>`).
pub type AttributeValue = Arc<dyn Any + Send + Sync>;

/// A named attribute and its value.
pub trait FileAttribute: Object {
    /// The qualified name, `view:attribute`.
    fn name(&self) -> String;
    fn value(&self) -> AttributeValue;
}

impl PartialEq for dyn FileAttribute {
    fn eq(&self, other: &Self) -> bool {
        self.dyn_eq(other.as_object())
    }
}

impl Eq for dyn FileAttribute {}

impl Hash for dyn FileAttribute {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.dyn_hash());
    }
}

/// A [`FileAttribute`] holding a fixed name and value.
#[derive(Clone)]
pub struct SimpleFileAttribute {
    name: String,
    value: AttributeValue,
}

impl SimpleFileAttribute {
    pub fn new(name: impl Into<String>, value: AttributeValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// The `posix:permissions` attribute for the given permission set.
    pub fn posix_permissions(perms: IndexSet<PosixFilePermission>) -> Self {
        Self::new("posix:permissions", Arc::new(perms))
    }
}

impl fmt::Debug for SimpleFileAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("SimpleFileAttribute");
        s.field("name", &self.name);
        match self.value.downcast_ref::<IndexSet<PosixFilePermission>>() {
            Some(perms) => s.field("value", &posix_permissions_to_string(perms)),
            None => s.field("value", &"<opaque>"),
        };
        s.finish()
    }
}

impl Object for SimpleFileAttribute {}

impl FileAttribute for SimpleFileAttribute {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn value(&self) -> AttributeValue {
        self.value.clone()
    }
}
