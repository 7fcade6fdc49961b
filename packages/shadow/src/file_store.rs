//! File stores: partitions, volumes and other units of storage.

use std::any::TypeId;

use crate::error::Result;
use crate::file_attribute::AttributeValue;
use crate::object::Object;
use crate::view::AnyAttributeView;

/// A storage pool, device or partition holding files.
pub trait FileStore: Object {
    fn name(&self) -> String;

    /// The implementation-specific store type, such as `"ext4"`.
    fn store_type(&self) -> String;
    fn is_read_only(&self) -> bool;
    fn total_space(&self) -> Result<u64>;
    fn usable_space(&self) -> Result<u64>;
    fn unallocated_space(&self) -> Result<u64>;
    fn block_size(&self) -> Result<u64>;

    /// Whether files in this store support the view whose trait object type
    /// has the given type tag (`TypeId::of::<dyn PosixFileAttributeView>()`).
    fn supports_file_attribute_view(&self, view_type: TypeId) -> bool;

    /// Whether files in this store support the view with the given name.
    fn supports_file_attribute_view_named(&self, name: &str) -> bool;

    /// The store's own attribute view of the requested type, if it has one.
    fn file_store_attribute_view(&self, view_type: TypeId) -> Option<AnyAttributeView>;

    /// Read a store attribute, `view:attribute`.
    fn attribute(&self, attribute: &str) -> Result<AttributeValue>;
}
