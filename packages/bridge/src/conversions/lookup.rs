use std::sync::Arc;

use fsattr_native as native;
use fsattr_shadow as shadow;

use super::principal::{GroupPrincipalConversion, UserPrincipalConversion};
use crate::conversion::Conversion;
use crate::exceptions::{decode_checked, encode_checked};
use crate::wrapper::{wrapper_conversion, Decoded, Encoded};

impl<D: native::UserPrincipalLookupService + ?Sized> shadow::UserPrincipalLookupService
    for Encoded<D>
{
    fn lookup_principal_by_name(&self, name: &str) -> shadow::Result<Arc<dyn shadow::UserPrincipal>> {
        self.delegate()
            .lookup_principal_by_name(name)
            .map(UserPrincipalConversion::encode)
            .map_err(encode_checked)
    }

    fn lookup_principal_by_group_name(
        &self,
        group: &str,
    ) -> shadow::Result<Arc<dyn shadow::GroupPrincipal>> {
        self.delegate()
            .lookup_principal_by_group_name(group)
            .map(GroupPrincipalConversion::encode)
            .map_err(encode_checked)
    }
}

impl<D: shadow::UserPrincipalLookupService + ?Sized> native::UserPrincipalLookupService
    for Decoded<D>
{
    fn lookup_principal_by_name(&self, name: &str) -> native::Result<Arc<dyn native::UserPrincipal>> {
        self.delegate()
            .lookup_principal_by_name(name)
            .map(UserPrincipalConversion::decode)
            .map_err(decode_checked)
    }

    fn lookup_principal_by_group_name(
        &self,
        group: &str,
    ) -> native::Result<Arc<dyn native::GroupPrincipal>> {
        self.delegate()
            .lookup_principal_by_group_name(group)
            .map(GroupPrincipalConversion::decode)
            .map_err(decode_checked)
    }
}

wrapper_conversion!(
    /// Principal lookup services. Principals returned by the wrapped service
    /// are converted on the way out.
    UserPrincipalLookupServiceConversion => UserPrincipalLookupService
);
