#![cfg_attr(docsrs, feature(doc_cfg))]
//! Wire schema for the audio client IPC interface.
//!
//! Enumerations are modelled the way the AIDL Rust backend models them: a
//! transparent newtype over the backing integer with one associated constant
//! per named value. Any integer can therefore be received from the wire, and
//! it is up to the converters to reject the values they do not know.
//!
//! Unions are Rust enums whose variant is the active tag.

/// Declare an int-backed AIDL enumeration.
macro_rules! aidl_enum {
    (
        $(#[$meta:meta])*
        pub struct $name:ident($repr:ty) {
            $( $(#[$vmeta:meta])* $variant:ident = $value:expr, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(transparent)
        )]
        #[repr(transparent)]
        pub struct $name(pub $repr);

        impl $name {
            $( $(#[$vmeta])* pub const $variant: Self = Self($value); )+

            /// Every named value, in declaration order.
            pub const VALUES: &'static [Self] = &[$(Self::$variant),+];

            /// Raw backing value as carried on the wire.
            pub const fn raw(self) -> $repr {
                self.0
            }

            /// Symbolic name of a known value.
            pub fn name(self) -> Option<&'static str> {
                match self {
                    $( Self::$variant => Some(stringify!($variant)), )+
                    _ => None,
                }
            }
        }

        impl From<$repr> for $name {
            fn from(raw: $repr) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for $repr {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self.name() {
                    Some(name) => f.write_str(name),
                    None => write!(f, "{}({})", stringify!($name), self.0),
                }
            }
        }
    };
}

pub mod descriptor;
pub mod enums;
pub mod port;

pub use descriptor::{
    AudioAttributesInternal, AudioClient, AudioConfig, AudioConfigBase, AudioIoDescriptor,
    AudioOffloadInfo, AudioPatch, SharedFileRegion,
};
pub use enums::{
    AudioContentType, AudioEncapsulationMode, AudioFlag, AudioFormat, AudioGainMode,
    AudioInputFlags, AudioIoConfigEvent, AudioOutputFlags, AudioPortConfigType, AudioPortRole,
    AudioPortType, AudioSourceType, AudioStreamType, AudioUsage,
};
pub use port::{
    AudioGainConfig, AudioIoFlags, AudioPortConfig, AudioPortConfigDeviceExt, AudioPortConfigExt,
    AudioPortConfigMixExt, AudioPortConfigMixExtUseCase, AudioPortConfigSessionExt,
};
