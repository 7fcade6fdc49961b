//! Enumerations that exist in both hierarchies.
//!
//! Every table is an exhaustive `match` in both directions, so a variant
//! added on either side does not compile until it is mapped here.

use fsattr_native as native;
use fsattr_shadow as shadow;

use crate::conversion::Conversion;

macro_rules! enum_conversion {
    ($(#[$meta:meta])* $name:ident, $enum:ident { $($variant:ident),* $(,)? }) => {
        $(#[$meta])*
        pub struct $name;

        impl Conversion for $name {
            type Native = native::$enum;
            type Shadow = shadow::$enum;

            fn encode(value: native::$enum) -> shadow::$enum {
                match value {
                    $(native::$enum::$variant => shadow::$enum::$variant,)*
                }
            }

            fn decode(value: shadow::$enum) -> native::$enum {
                match value {
                    $(shadow::$enum::$variant => native::$enum::$variant,)*
                }
            }
        }
    };
}

enum_conversion!(
    PosixFilePermissionConversion,
    PosixFilePermission {
        OwnerRead,
        OwnerWrite,
        OwnerExecute,
        GroupRead,
        GroupWrite,
        GroupExecute,
        OthersRead,
        OthersWrite,
        OthersExecute,
    }
);

enum_conversion!(
    AclEntryPermissionConversion,
    AclEntryPermission {
        ReadData,
        WriteData,
        AppendData,
        ReadNamedAttrs,
        WriteNamedAttrs,
        Execute,
        DeleteChild,
        ReadAttributes,
        WriteAttributes,
        Delete,
        ReadAcl,
        WriteAcl,
        WriteOwner,
        Synchronize,
    }
);

enum_conversion!(
    AclEntryFlagConversion,
    AclEntryFlag {
        FileInherit,
        DirectoryInherit,
        NoPropagateInherit,
        InheritOnly,
    }
);

enum_conversion!(
    AclEntryTypeConversion,
    AclEntryType {
        Allow,
        Deny,
        Audit,
        Alarm,
    }
);

enum_conversion!(
    /// I/O failure categories, used by the exception translator.
    ErrorKindConversion,
    ErrorKind {
        AccessDenied,
        AtomicMoveNotSupported,
        DirectoryNotEmpty,
        FileAlreadyExists,
        FileSystemLoop,
        NoSuchFile,
        NotDirectory,
        NotLink,
        FileSystem,
        Other,
    }
);

enum_conversion!(
    /// View trait kinds, used by the dispatch tables.
    ViewKindConversion,
    ViewKind {
        Attribute,
        File,
        FileStore,
        Basic,
        FileOwner,
        Posix,
        Dos,
        Acl,
        UserDefined,
    }
);

enum_conversion!(
    AttributesKindConversion,
    AttributesKind { Basic, Posix, Dos }
);
