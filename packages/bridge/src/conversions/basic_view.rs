use std::sync::Arc;

use fsattr_native as native;
use fsattr_shadow as shadow;

use super::attributes::BasicFileAttributesConversion;
use super::time::FileTimeConversion;
use crate::conversion::Conversion;
use crate::exceptions::{decode_checked, encode_checked};
use crate::wrapper::{wrapper_conversion, Decoded, Encoded};

impl<D: native::BasicFileAttributeView + ?Sized> shadow::BasicFileAttributeView for Encoded<D> {
    fn read_attributes(&self) -> shadow::Result<Arc<dyn shadow::BasicFileAttributes>> {
        self.delegate()
            .read_attributes()
            .map(BasicFileAttributesConversion::encode)
            .map_err(encode_checked)
    }

    fn set_times(
        &self,
        last_modified_time: Option<shadow::FileTime>,
        last_access_time: Option<shadow::FileTime>,
        create_time: Option<shadow::FileTime>,
    ) -> shadow::Result<()> {
        self.delegate()
            .set_times(
                FileTimeConversion::decode_opt(last_modified_time),
                FileTimeConversion::decode_opt(last_access_time),
                FileTimeConversion::decode_opt(create_time),
            )
            .map_err(encode_checked)
    }
}

impl<D: shadow::BasicFileAttributeView + ?Sized> native::BasicFileAttributeView for Decoded<D> {
    fn read_attributes(&self) -> native::Result<Arc<dyn native::BasicFileAttributes>> {
        self.delegate()
            .read_attributes()
            .map(BasicFileAttributesConversion::decode)
            .map_err(decode_checked)
    }

    fn set_times(
        &self,
        last_modified_time: Option<native::FileTime>,
        last_access_time: Option<native::FileTime>,
        create_time: Option<native::FileTime>,
    ) -> native::Result<()> {
        self.delegate()
            .set_times(
                FileTimeConversion::encode_opt(last_modified_time),
                FileTimeConversion::encode_opt(last_access_time),
                FileTimeConversion::encode_opt(create_time),
            )
            .map_err(decode_checked)
    }
}

wrapper_conversion!(
    /// Basic views. POSIX and DOS view wrappers are basic views too and
    /// unwrap here.
    BasicFileAttributeViewConversion => BasicFileAttributeView,
    unwraps [PosixFileAttributeView, DosFileAttributeView]
        via AsBasicFileAttributeView::into_basic_file_attribute_view
);
