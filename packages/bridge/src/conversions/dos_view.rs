use std::sync::Arc;

use fsattr_native as native;
use fsattr_shadow as shadow;

use super::attributes::DosFileAttributesConversion;
use crate::conversion::Conversion;
use crate::exceptions::{decode_checked, encode_checked};
use crate::wrapper::{wrapper_conversion, Decoded, Encoded};

impl<D: native::DosFileAttributeView + ?Sized> shadow::DosFileAttributeView for Encoded<D> {
    fn read_dos_attributes(&self) -> shadow::Result<Arc<dyn shadow::DosFileAttributes>> {
        self.delegate()
            .read_dos_attributes()
            .map(DosFileAttributesConversion::encode)
            .map_err(encode_checked)
    }

    fn set_read_only(&self, value: bool) -> shadow::Result<()> {
        self.delegate().set_read_only(value).map_err(encode_checked)
    }

    fn set_hidden(&self, value: bool) -> shadow::Result<()> {
        self.delegate().set_hidden(value).map_err(encode_checked)
    }

    fn set_system(&self, value: bool) -> shadow::Result<()> {
        self.delegate().set_system(value).map_err(encode_checked)
    }

    fn set_archive(&self, value: bool) -> shadow::Result<()> {
        self.delegate().set_archive(value).map_err(encode_checked)
    }
}

impl<D: shadow::DosFileAttributeView + ?Sized> native::DosFileAttributeView for Decoded<D> {
    fn read_dos_attributes(&self) -> native::Result<Arc<dyn native::DosFileAttributes>> {
        self.delegate()
            .read_dos_attributes()
            .map(DosFileAttributesConversion::decode)
            .map_err(decode_checked)
    }

    fn set_read_only(&self, value: bool) -> native::Result<()> {
        self.delegate().set_read_only(value).map_err(decode_checked)
    }

    fn set_hidden(&self, value: bool) -> native::Result<()> {
        self.delegate().set_hidden(value).map_err(decode_checked)
    }

    fn set_system(&self, value: bool) -> native::Result<()> {
        self.delegate().set_system(value).map_err(decode_checked)
    }

    fn set_archive(&self, value: bool) -> native::Result<()> {
        self.delegate().set_archive(value).map_err(decode_checked)
    }
}

wrapper_conversion!(DosFileAttributeViewConversion => DosFileAttributeView);
