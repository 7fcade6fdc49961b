use std::sync::Arc;

use fsattr_native as native;
use fsattr_shadow as shadow;

use super::principal::UserPrincipalConversion;
use crate::conversion::Conversion;
use crate::exceptions::{decode_checked, encode_checked};
use crate::wrapper::{wrapper_conversion, Decoded, Encoded};

impl<D: native::FileOwnerAttributeView + ?Sized> shadow::FileOwnerAttributeView for Encoded<D> {
    fn owner(&self) -> shadow::Result<Arc<dyn shadow::UserPrincipal>> {
        self.delegate()
            .owner()
            .map(UserPrincipalConversion::encode)
            .map_err(encode_checked)
    }

    fn set_owner(&self, owner: Arc<dyn shadow::UserPrincipal>) -> shadow::Result<()> {
        self.delegate()
            .set_owner(UserPrincipalConversion::decode(owner))
            .map_err(encode_checked)
    }
}

impl<D: shadow::FileOwnerAttributeView + ?Sized> native::FileOwnerAttributeView for Decoded<D> {
    fn owner(&self) -> native::Result<Arc<dyn native::UserPrincipal>> {
        self.delegate()
            .owner()
            .map(UserPrincipalConversion::decode)
            .map_err(decode_checked)
    }

    fn set_owner(&self, owner: Arc<dyn native::UserPrincipal>) -> native::Result<()> {
        self.delegate()
            .set_owner(UserPrincipalConversion::encode(owner))
            .map_err(decode_checked)
    }
}

wrapper_conversion!(
    FileOwnerAttributeViewConversion => FileOwnerAttributeView,
    unwraps [PosixFileAttributeView, AclFileAttributeView]
        via AsFileOwnerAttributeView::into_file_owner_attribute_view
);
