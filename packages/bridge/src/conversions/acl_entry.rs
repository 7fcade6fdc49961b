use fsattr_native as native;
use fsattr_shadow as shadow;

use super::enums::{AclEntryFlagConversion, AclEntryPermissionConversion, AclEntryTypeConversion};
use super::principal::UserPrincipalConversion;
use crate::conversion::Conversion;

/// ACL entries are plain values: each conversion builds a fresh entry from
/// the converted type, principal, permissions and flags.
pub struct AclEntryConversion;

impl Conversion for AclEntryConversion {
    type Native = native::AclEntry;
    type Shadow = shadow::AclEntry;

    fn encode(value: native::AclEntry) -> shadow::AclEntry {
        shadow::AclEntry::new(
            AclEntryTypeConversion::encode(value.entry_type()),
            UserPrincipalConversion::encode(value.principal().clone()),
        )
        .with_permissions(AclEntryPermissionConversion::encode_set(
            value.permissions().clone(),
        ))
        .with_flags(AclEntryFlagConversion::encode_set(value.flags().clone()))
    }

    fn decode(value: shadow::AclEntry) -> native::AclEntry {
        native::AclEntry::new(
            AclEntryTypeConversion::decode(value.entry_type()),
            UserPrincipalConversion::decode(value.principal().clone()),
        )
        .with_permissions(AclEntryPermissionConversion::decode_set(
            value.permissions().clone(),
        ))
        .with_flags(AclEntryFlagConversion::decode_set(value.flags().clone()))
    }
}
