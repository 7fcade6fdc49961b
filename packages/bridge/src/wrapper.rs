//! The two wrapper types and the macro building their conversions.
//!
//! [`Encoded`] holds a native delegate and implements shadow traits;
//! [`Decoded`] holds a shadow delegate and implements native traits. `D` is
//! the most specific trait object type known for the delegate, e.g.
//! `dyn fsattr_native::PosixFileAttributeView`. A wrapper implements every
//! trait of the other hierarchy that `D` implements in its own, so one
//! wrapper around a POSIX view is also a basic, file-owner, file and root
//! view.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

use fsattr_native as native;
use fsattr_shadow as shadow;

/// A native value presented as a shadow value.
pub struct Encoded<D: ?Sized> {
    delegate: Arc<D>,
}

/// A shadow value presented as a native value.
pub struct Decoded<D: ?Sized> {
    delegate: Arc<D>,
}

macro_rules! wrapper_common {
    ($wrapper:ident) => {
        impl<D: ?Sized + 'static> $wrapper<D> {
            /// Wrap the given delegate.
            pub fn wrap(delegate: Arc<D>) -> Self {
                Self { delegate }
            }

            /// The wrapped delegate.
            pub fn delegate(&self) -> &Arc<D> {
                &self.delegate
            }

            pub fn into_delegate(self) -> Arc<D> {
                self.delegate
            }

            /// The type tag of the delegate's trait object type.
            pub fn delegate_type(&self) -> TypeId {
                TypeId::of::<D>()
            }

            /// The delegate of `value`, if `value` is exactly this wrapper
            /// type.
            pub fn unwrap_from(value: &dyn Any) -> Option<Arc<D>> {
                value
                    .downcast_ref::<Self>()
                    .map(|wrapper| wrapper.delegate.clone())
            }
        }

        impl<D: ?Sized + fmt::Debug> fmt::Debug for $wrapper<D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($wrapper))
                    .field("delegate", &self.delegate)
                    .finish()
            }
        }
    };
}

wrapper_common!(Encoded);
wrapper_common!(Decoded);

impl<D: native::Object + ?Sized> shadow::Object for Encoded<D> {
    fn dyn_eq(&self, other: &dyn shadow::Object) -> bool {
        shadow::AsObject::as_any(other)
            .downcast_ref::<Self>()
            .is_some_and(|other| {
                native::Object::dyn_eq(
                    &*self.delegate,
                    native::AsObject::as_object(&*other.delegate),
                )
            })
    }

    fn dyn_hash(&self) -> u64 {
        native::Object::dyn_hash(&*self.delegate)
    }
}

impl<D: shadow::Object + ?Sized> native::Object for Decoded<D> {
    fn dyn_eq(&self, other: &dyn native::Object) -> bool {
        native::AsObject::as_any(other)
            .downcast_ref::<Self>()
            .is_some_and(|other| {
                shadow::Object::dyn_eq(
                    &*self.delegate,
                    shadow::AsObject::as_object(&*other.delegate),
                )
            })
    }

    fn dyn_hash(&self) -> u64 {
        shadow::Object::dyn_hash(&*self.delegate)
    }
}

/// Declare a unit struct converting `Arc<dyn fsattr_native::$trait>` to
/// `Arc<dyn fsattr_shadow::$trait>` and back through [`Encoded`] and
/// [`Decoded`].
///
/// Before wrapping, the value is checked against the opposite wrapper of
/// `$trait` and of every listed sub-trait. A match returns the original
/// delegate, widened to `$trait` through the given `As*` method, so a round
/// trip yields the very same `Arc`.
macro_rules! wrapper_conversion {
    ($(#[$meta:meta])* $name:ident => $trait:ident) => {
        wrapper_conversion!(@impl $(#[$meta])* $name => $trait;);
    };
    (
        $(#[$meta:meta])* $name:ident => $trait:ident,
        unwraps [$($sub:ident),* $(,)?] via $as_trait:ident::$into:ident
    ) => {
        wrapper_conversion!(@impl $(#[$meta])* $name => $trait; $($sub => $as_trait::$into),*);
    };
    (@impl $(#[$meta:meta])* $name:ident => $trait:ident; $($sub:ident => $as_trait:ident::$into:ident),*) => {
        $(#[$meta])*
        pub struct $name;

        impl $crate::conversion::Conversion for $name {
            type Native = ::std::sync::Arc<dyn ::fsattr_native::$trait>;
            type Shadow = ::std::sync::Arc<dyn ::fsattr_shadow::$trait>;

            fn encode(value: Self::Native) -> Self::Shadow {
                let any = ::fsattr_native::AsObject::as_any(&*value);
                if let Some(delegate) =
                    $crate::wrapper::Decoded::<dyn ::fsattr_shadow::$trait>::unwrap_from(any)
                {
                    ::tracing::trace!(target: "fsattr_bridge::wrapper", "unwrapped decoded {}", stringify!($trait));
                    return delegate;
                }
                $(
                    if let Some(delegate) =
                        $crate::wrapper::Decoded::<dyn ::fsattr_shadow::$sub>::unwrap_from(any)
                    {
                        ::tracing::trace!(
                            target: "fsattr_bridge::wrapper",
                            "unwrapped decoded {} as {}",
                            stringify!($sub),
                            stringify!($trait)
                        );
                        return ::fsattr_shadow::$as_trait::$into(delegate);
                    }
                )*
                ::tracing::trace!(target: "fsattr_bridge::wrapper", "encoding {}", stringify!($trait));
                ::std::sync::Arc::new($crate::wrapper::Encoded::wrap(value))
            }

            fn decode(value: Self::Shadow) -> Self::Native {
                let any = ::fsattr_shadow::AsObject::as_any(&*value);
                if let Some(delegate) =
                    $crate::wrapper::Encoded::<dyn ::fsattr_native::$trait>::unwrap_from(any)
                {
                    ::tracing::trace!(target: "fsattr_bridge::wrapper", "unwrapped encoded {}", stringify!($trait));
                    return delegate;
                }
                $(
                    if let Some(delegate) =
                        $crate::wrapper::Encoded::<dyn ::fsattr_native::$sub>::unwrap_from(any)
                    {
                        ::tracing::trace!(
                            target: "fsattr_bridge::wrapper",
                            "unwrapped encoded {} as {}",
                            stringify!($sub),
                            stringify!($trait)
                        );
                        return ::fsattr_native::$as_trait::$into(delegate);
                    }
                )*
                ::tracing::trace!(target: "fsattr_bridge::wrapper", "decoding {}", stringify!($trait));
                ::std::sync::Arc::new($crate::wrapper::Decoded::wrap(value))
            }
        }
    };
}

pub(crate) use wrapper_conversion;
