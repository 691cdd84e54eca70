#![cfg_attr(docsrs, feature(doc_cfg))]
//! Conversion between AIDL wire descriptors and native audio descriptors.
//!
//! Every converter is a pure function named after the pair it converts,
//! `aidl2legacy_<wire>_<native>` or `legacy2aidl_<native>_<wire>`, and
//! returns a [`ConversionResult`]. Conversions are all-or-nothing: the first
//! field that cannot be represented on the other side fails the whole call
//! with [`ConversionError::BadValue`] and no partial result escapes.
//!
//! ```
//! use aidl_conversion::{
//!     aidl2legacy_audio_port_config_audio_port_config,
//!     legacy2aidl_audio_port_config_audio_port_config,
//! };
//! use media_aidl::{AudioPortConfig, AudioPortConfigExt, AudioPortConfigSessionExt};
//! use media_aidl::{AudioPortRole, AudioPortType};
//!
//! let port = AudioPortConfig {
//!     id: 12,
//!     role: AudioPortRole::NONE,
//!     r#type: AudioPortType::SESSION,
//!     ext: AudioPortConfigExt::Session(AudioPortConfigSessionExt { session: 33 }),
//!     ..Default::default()
//! };
//! let native = aidl2legacy_audio_port_config_audio_port_config(&port)?;
//! assert_eq!(native.ext.session.session, 33);
//! assert_eq!(legacy2aidl_audio_port_config_audio_port_config(&native)?, port);
//! # Ok::<(), aidl_conversion::ConversionError>(())
//! ```

/// Borrow the payload of the expected union variant, or fail with
/// [`ConversionError::BadValue`] when another variant is active.
macro_rules! union_get {
    ($value:expr, $($variant:tt)+) => {
        match $value {
            $($variant)+(payload) => Ok(payload),
            _ => Err($crate::error::ConversionError::BadValue),
        }
    };
}

pub mod bitmask;
pub mod descriptor;
pub mod direction;
pub mod enums;
mod error;
pub mod port;
pub mod scalar;
pub mod shmem;

pub use bitmask::{
    bitmask_is_set, convert_bitmask, enum_to_mask_bitmask, enum_to_mask_index,
    index_to_enum_bitmask, index_to_enum_index, MaskBits,
};
pub use descriptor::*;
pub use direction::Direction;
pub use enums::*;
pub use error::{ConversionError, ConversionResult};
pub use port::*;
pub use scalar::*;
pub use shmem::*;
