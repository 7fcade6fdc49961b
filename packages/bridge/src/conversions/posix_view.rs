//! POSIX views.
//!
//! Only the POSIX-specific operations live here. Reading timestamps and the
//! owner goes through the basic and file-owner impls, which the same wrapper
//! picks up from its delegate's supertraits.

use std::sync::Arc;

use fsattr_native as native;
use fsattr_shadow as shadow;

use super::attributes::PosixFileAttributesConversion;
use super::enums::PosixFilePermissionConversion;
use super::principal::GroupPrincipalConversion;
use crate::conversion::Conversion;
use crate::exceptions::{decode_checked, encode_checked};
use crate::wrapper::{wrapper_conversion, Decoded, Encoded};

impl<D: native::PosixFileAttributeView + ?Sized> shadow::PosixFileAttributeView for Encoded<D> {
    fn read_posix_attributes(&self) -> shadow::Result<Arc<dyn shadow::PosixFileAttributes>> {
        self.delegate()
            .read_posix_attributes()
            .map(PosixFileAttributesConversion::encode)
            .map_err(encode_checked)
    }

    fn set_permissions(
        &self,
        perms: shadow::IndexSet<shadow::PosixFilePermission>,
    ) -> shadow::Result<()> {
        self.delegate()
            .set_permissions(PosixFilePermissionConversion::decode_set(perms))
            .map_err(encode_checked)
    }

    fn set_group(&self, group: Arc<dyn shadow::GroupPrincipal>) -> shadow::Result<()> {
        self.delegate()
            .set_group(GroupPrincipalConversion::decode(group))
            .map_err(encode_checked)
    }
}

impl<D: shadow::PosixFileAttributeView + ?Sized> native::PosixFileAttributeView for Decoded<D> {
    fn read_posix_attributes(&self) -> native::Result<Arc<dyn native::PosixFileAttributes>> {
        self.delegate()
            .read_posix_attributes()
            .map(PosixFileAttributesConversion::decode)
            .map_err(decode_checked)
    }

    fn set_permissions(
        &self,
        perms: native::IndexSet<native::PosixFilePermission>,
    ) -> native::Result<()> {
        self.delegate()
            .set_permissions(PosixFilePermissionConversion::encode_set(perms))
            .map_err(decode_checked)
    }

    fn set_group(&self, group: Arc<dyn native::GroupPrincipal>) -> native::Result<()> {
        self.delegate()
            .set_group(GroupPrincipalConversion::encode(group))
            .map_err(decode_checked)
    }
}

wrapper_conversion!(PosixFileAttributeViewConversion => PosixFileAttributeView);
