//! Attribute value snapshots.
//!
//! These wrappers only carry data, so no call on them can fail and no error
//! translation happens here.

use std::sync::Arc;

use fsattr_native as native;
use fsattr_shadow as shadow;

use super::enums::PosixFilePermissionConversion;
use super::principal::{GroupPrincipalConversion, UserPrincipalConversion};
use super::time::FileTimeConversion;
use super::value::AttributeValueConversion;
use crate::conversion::Conversion;
use crate::wrapper::{wrapper_conversion, Decoded, Encoded};

impl<D: native::BasicFileAttributes + ?Sized> shadow::BasicFileAttributes for Encoded<D> {
    fn last_modified_time(&self) -> shadow::FileTime {
        FileTimeConversion::encode(self.delegate().last_modified_time())
    }

    fn last_access_time(&self) -> shadow::FileTime {
        FileTimeConversion::encode(self.delegate().last_access_time())
    }

    fn creation_time(&self) -> shadow::FileTime {
        FileTimeConversion::encode(self.delegate().creation_time())
    }

    fn is_regular_file(&self) -> bool {
        self.delegate().is_regular_file()
    }

    fn is_directory(&self) -> bool {
        self.delegate().is_directory()
    }

    fn is_symbolic_link(&self) -> bool {
        self.delegate().is_symbolic_link()
    }

    fn is_other(&self) -> bool {
        self.delegate().is_other()
    }

    fn size(&self) -> u64 {
        self.delegate().size()
    }

    fn file_key(&self) -> Option<shadow::AttributeValue> {
        AttributeValueConversion::encode_opt(self.delegate().file_key())
    }
}

impl<D: native::PosixFileAttributes + ?Sized> shadow::PosixFileAttributes for Encoded<D> {
    fn owner(&self) -> Arc<dyn shadow::UserPrincipal> {
        UserPrincipalConversion::encode(self.delegate().owner())
    }

    fn group(&self) -> Arc<dyn shadow::GroupPrincipal> {
        GroupPrincipalConversion::encode(self.delegate().group())
    }

    fn permissions(&self) -> shadow::IndexSet<shadow::PosixFilePermission> {
        PosixFilePermissionConversion::encode_set(self.delegate().permissions())
    }
}

impl<D: native::DosFileAttributes + ?Sized> shadow::DosFileAttributes for Encoded<D> {
    fn is_read_only(&self) -> bool {
        self.delegate().is_read_only()
    }

    fn is_hidden(&self) -> bool {
        self.delegate().is_hidden()
    }

    fn is_archive(&self) -> bool {
        self.delegate().is_archive()
    }

    fn is_system(&self) -> bool {
        self.delegate().is_system()
    }
}

impl<D: shadow::BasicFileAttributes + ?Sized> native::BasicFileAttributes for Decoded<D> {
    fn last_modified_time(&self) -> native::FileTime {
        FileTimeConversion::decode(self.delegate().last_modified_time())
    }

    fn last_access_time(&self) -> native::FileTime {
        FileTimeConversion::decode(self.delegate().last_access_time())
    }

    fn creation_time(&self) -> native::FileTime {
        FileTimeConversion::decode(self.delegate().creation_time())
    }

    fn is_regular_file(&self) -> bool {
        self.delegate().is_regular_file()
    }

    fn is_directory(&self) -> bool {
        self.delegate().is_directory()
    }

    fn is_symbolic_link(&self) -> bool {
        self.delegate().is_symbolic_link()
    }

    fn is_other(&self) -> bool {
        self.delegate().is_other()
    }

    fn size(&self) -> u64 {
        self.delegate().size()
    }

    fn file_key(&self) -> Option<native::AttributeValue> {
        AttributeValueConversion::decode_opt(self.delegate().file_key())
    }
}

impl<D: shadow::PosixFileAttributes + ?Sized> native::PosixFileAttributes for Decoded<D> {
    fn owner(&self) -> Arc<dyn native::UserPrincipal> {
        UserPrincipalConversion::decode(self.delegate().owner())
    }

    fn group(&self) -> Arc<dyn native::GroupPrincipal> {
        GroupPrincipalConversion::decode(self.delegate().group())
    }

    fn permissions(&self) -> native::IndexSet<native::PosixFilePermission> {
        PosixFilePermissionConversion::decode_set(self.delegate().permissions())
    }
}

impl<D: shadow::DosFileAttributes + ?Sized> native::DosFileAttributes for Decoded<D> {
    fn is_read_only(&self) -> bool {
        self.delegate().is_read_only()
    }

    fn is_hidden(&self) -> bool {
        self.delegate().is_hidden()
    }

    fn is_archive(&self) -> bool {
        self.delegate().is_archive()
    }

    fn is_system(&self) -> bool {
        self.delegate().is_system()
    }
}

wrapper_conversion!(
    BasicFileAttributesConversion => BasicFileAttributes,
    unwraps [PosixFileAttributes, DosFileAttributes]
        via AsBasicFileAttributes::into_basic_file_attributes
);

wrapper_conversion!(PosixFileAttributesConversion => PosixFileAttributes);

wrapper_conversion!(DosFileAttributesConversion => DosFileAttributes);
