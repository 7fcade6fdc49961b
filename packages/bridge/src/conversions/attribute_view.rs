//! The abstract views: root, file and file-store.
//!
//! These add nothing to the root but a name. Their conversions matter
//! because a caller holding a concrete view typed to one of them must still
//! get the original delegate back on a round trip, so they recognize the
//! wrappers of every more specific view.

use std::sync::Arc;

use fsattr_native as native;
use fsattr_shadow as shadow;

use crate::dispatch;
use crate::wrapper::{wrapper_conversion, Decoded, Encoded};

impl<D: native::AttributeView + ?Sized> shadow::AttributeView for Encoded<D> {
    fn name(&self) -> String {
        self.delegate().name()
    }

    fn into_any_view(self: Arc<Self>) -> shadow::AnyAttributeView {
        let delegate = native::AttributeView::into_any_view(self.delegate().clone());
        dispatch::encode_view(delegate)
    }
}

impl<D: native::FileAttributeView + ?Sized> shadow::FileAttributeView for Encoded<D> {}

impl<D: native::FileStoreAttributeView + ?Sized> shadow::FileStoreAttributeView for Encoded<D> {}

impl<D: shadow::AttributeView + ?Sized> native::AttributeView for Decoded<D> {
    fn name(&self) -> String {
        self.delegate().name()
    }

    fn into_any_view(self: Arc<Self>) -> native::AnyAttributeView {
        let delegate = shadow::AttributeView::into_any_view(self.delegate().clone());
        dispatch::decode_view(delegate)
    }
}

impl<D: shadow::FileAttributeView + ?Sized> native::FileAttributeView for Decoded<D> {}

impl<D: shadow::FileStoreAttributeView + ?Sized> native::FileStoreAttributeView for Decoded<D> {}

wrapper_conversion!(
    /// The root view trait.
    AttributeViewConversion => AttributeView,
    unwraps [
        FileAttributeView,
        FileStoreAttributeView,
        BasicFileAttributeView,
        FileOwnerAttributeView,
        PosixFileAttributeView,
        DosFileAttributeView,
        AclFileAttributeView,
        UserDefinedFileAttributeView,
    ] via AsAttributeView::into_attribute_view
);

wrapper_conversion!(
    FileAttributeViewConversion => FileAttributeView,
    unwraps [
        BasicFileAttributeView,
        FileOwnerAttributeView,
        PosixFileAttributeView,
        DosFileAttributeView,
        AclFileAttributeView,
        UserDefinedFileAttributeView,
    ] via AsFileAttributeView::into_file_attribute_view
);

wrapper_conversion!(FileStoreAttributeViewConversion => FileStoreAttributeView);
