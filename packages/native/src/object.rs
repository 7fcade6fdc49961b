//! Equality and hashing for trait objects of this hierarchy.
//!
//! Every trait in the hierarchy extends [`Object`]. Its defaults compare by
//! identity (two values are equal when they are the same allocation), which
//! implementors override when they have value semantics.

use std::any::Any;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Upcasts available on every [`Object`], including through generic code.
pub trait AsObject {
    fn as_object(&self) -> &dyn Object;
    fn as_any(&self) -> &dyn Any;
}

impl<T: Object> AsObject for T {
    fn as_object(&self) -> &dyn Object {
        self
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Root of every trait object in the hierarchy.
pub trait Object: AsObject + Any + fmt::Debug + Send + Sync {
    /// Whether `other` denotes the same value as `self`.
    fn dyn_eq(&self, other: &dyn Object) -> bool {
        std::ptr::addr_eq(self as *const Self, other as *const dyn Object)
    }

    /// A hash consistent with [`Object::dyn_eq`].
    fn dyn_hash(&self) -> u64 {
        (self as *const Self).cast::<()>() as usize as u64
    }
}

/// `dyn_eq` for implementors with value semantics.
pub fn value_eq<T: Object + PartialEq>(this: &T, other: &dyn Object) -> bool {
    other
        .as_any()
        .downcast_ref::<T>()
        .is_some_and(|other| this == other)
}

/// `dyn_hash` for implementors with value semantics.
pub fn value_hash<T: Hash>(this: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    this.hash(&mut hasher);
    hasher.finish()
}
