use fsattr_native as native;
use fsattr_shadow as shadow;

use super::acl_entry::AclEntryConversion;
use crate::conversion::Conversion;
use crate::exceptions::{decode_checked, encode_checked};
use crate::wrapper::{wrapper_conversion, Decoded, Encoded};

impl<D: native::AclFileAttributeView + ?Sized> shadow::AclFileAttributeView for Encoded<D> {
    fn acl(&self) -> shadow::Result<Vec<shadow::AclEntry>> {
        self.delegate()
            .acl()
            .map(AclEntryConversion::encode_list)
            .map_err(encode_checked)
    }

    fn set_acl(&self, acl: Vec<shadow::AclEntry>) -> shadow::Result<()> {
        self.delegate()
            .set_acl(AclEntryConversion::decode_list(acl))
            .map_err(encode_checked)
    }
}

impl<D: shadow::AclFileAttributeView + ?Sized> native::AclFileAttributeView for Decoded<D> {
    fn acl(&self) -> native::Result<Vec<native::AclEntry>> {
        self.delegate()
            .acl()
            .map(AclEntryConversion::decode_list)
            .map_err(decode_checked)
    }

    fn set_acl(&self, acl: Vec<native::AclEntry>) -> native::Result<()> {
        self.delegate()
            .set_acl(AclEntryConversion::encode_list(acl))
            .map_err(decode_checked)
    }
}

wrapper_conversion!(AclFileAttributeViewConversion => AclFileAttributeView);
