//! File stores.
//!
//! The view queries take a type tag of the caller's hierarchy. The wrapper
//! maps the tag to the delegate's hierarchy, asks the delegate, and converts
//! any returned view back to the trait the caller asked for.

use std::any::TypeId;

use fsattr_native as native;
use fsattr_shadow as shadow;

use super::value::AttributeValueConversion;
use crate::conversion::Conversion;
use crate::dispatch;
use crate::exceptions::{decode_checked, encode_checked};
use crate::wrapper::{wrapper_conversion, Decoded, Encoded};

impl<D: native::FileStore + ?Sized> shadow::FileStore for Encoded<D> {
    fn name(&self) -> String {
        self.delegate().name()
    }

    fn store_type(&self) -> String {
        self.delegate().store_type()
    }

    fn is_read_only(&self) -> bool {
        self.delegate().is_read_only()
    }

    fn total_space(&self) -> shadow::Result<u64> {
        self.delegate().total_space().map_err(encode_checked)
    }

    fn usable_space(&self) -> shadow::Result<u64> {
        self.delegate().usable_space().map_err(encode_checked)
    }

    fn unallocated_space(&self) -> shadow::Result<u64> {
        self.delegate().unallocated_space().map_err(encode_checked)
    }

    fn block_size(&self) -> shadow::Result<u64> {
        self.delegate().block_size().map_err(encode_checked)
    }

    fn supports_file_attribute_view(&self, view_type: TypeId) -> bool {
        self.delegate()
            .supports_file_attribute_view(dispatch::decode_view_type(view_type))
    }

    fn supports_file_attribute_view_named(&self, name: &str) -> bool {
        self.delegate().supports_file_attribute_view_named(name)
    }

    fn file_store_attribute_view(&self, view_type: TypeId) -> Option<shadow::AnyAttributeView> {
        let view = self
            .delegate()
            .file_store_attribute_view(dispatch::decode_view_type(view_type))?;
        match dispatch::encode_view_as(view, view_type) {
            Ok(encoded) => Some(encoded),
            Err(e) => {
                tracing::warn!(error = %e, "file store returned an unusable view");
                None
            }
        }
    }

    fn attribute(&self, attribute: &str) -> shadow::Result<shadow::AttributeValue> {
        self.delegate()
            .attribute(attribute)
            .map(AttributeValueConversion::encode)
            .map_err(encode_checked)
    }
}

impl<D: shadow::FileStore + ?Sized> native::FileStore for Decoded<D> {
    fn name(&self) -> String {
        self.delegate().name()
    }

    fn store_type(&self) -> String {
        self.delegate().store_type()
    }

    fn is_read_only(&self) -> bool {
        self.delegate().is_read_only()
    }

    fn total_space(&self) -> native::Result<u64> {
        self.delegate().total_space().map_err(decode_checked)
    }

    fn usable_space(&self) -> native::Result<u64> {
        self.delegate().usable_space().map_err(decode_checked)
    }

    fn unallocated_space(&self) -> native::Result<u64> {
        self.delegate().unallocated_space().map_err(decode_checked)
    }

    fn block_size(&self) -> native::Result<u64> {
        self.delegate().block_size().map_err(decode_checked)
    }

    fn supports_file_attribute_view(&self, view_type: TypeId) -> bool {
        self.delegate()
            .supports_file_attribute_view(dispatch::encode_view_type(view_type))
    }

    fn supports_file_attribute_view_named(&self, name: &str) -> bool {
        self.delegate().supports_file_attribute_view_named(name)
    }

    fn file_store_attribute_view(&self, view_type: TypeId) -> Option<native::AnyAttributeView> {
        let view = self
            .delegate()
            .file_store_attribute_view(dispatch::encode_view_type(view_type))?;
        match dispatch::decode_view_as(view, view_type) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                tracing::warn!(error = %e, "file store returned an unusable view");
                None
            }
        }
    }

    fn attribute(&self, attribute: &str) -> native::Result<native::AttributeValue> {
        self.delegate()
            .attribute(attribute)
            .map(AttributeValueConversion::decode)
            .map_err(decode_checked)
    }
}

wrapper_conversion!(FileStoreConversion => FileStore);
