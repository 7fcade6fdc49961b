//! User and group principals.
//!
//! A wrapper around a group principal is both a user principal and a group
//! principal on the other side, so the user-principal conversion also
//! recognizes group wrappers when unwrapping.

use fsattr_native as native;
use fsattr_shadow as shadow;

use crate::wrapper::{wrapper_conversion, Decoded, Encoded};

impl<D: native::UserPrincipal + ?Sized> shadow::UserPrincipal for Encoded<D> {
    fn name(&self) -> String {
        self.delegate().name()
    }
}

impl<D: native::GroupPrincipal + ?Sized> shadow::GroupPrincipal for Encoded<D> {}

impl<D: shadow::UserPrincipal + ?Sized> native::UserPrincipal for Decoded<D> {
    fn name(&self) -> String {
        self.delegate().name()
    }
}

impl<D: shadow::GroupPrincipal + ?Sized> native::GroupPrincipal for Decoded<D> {}

wrapper_conversion!(
    UserPrincipalConversion => UserPrincipal,
    unwraps [GroupPrincipal] via AsUserPrincipal::into_user_principal
);

wrapper_conversion!(GroupPrincipalConversion => GroupPrincipal);
