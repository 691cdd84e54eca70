#![cfg_attr(docsrs, feature(doc_cfg))]
//! Audio client descriptor facade that re-exports the workspace crates.
//!
//! - [`aidl`]: the wire schema exchanged over IPC.
//! - [`legacy`]: the native descriptors used inside the audio server.
//! - [`conversion`]: converters between the two.
//! - [`shmem`]: the shared memory bridge contract the converters call into.
//!
//! ```rust
//! use audioclient::{aidl, conversion, legacy, ConversionError};
//!
//! let attributes = aidl::AudioAttributesInternal {
//!     content_type: aidl::AudioContentType::SPEECH,
//!     usage: aidl::AudioUsage::VOICE_COMMUNICATION,
//!     tags: "oem=car".into(),
//!     ..Default::default()
//! };
//! let native = conversion::aidl2legacy_audio_attributes_internal_audio_attributes_t(&attributes)?;
//! assert_eq!(native.usage, legacy::AUDIO_USAGE_VOICE_COMMUNICATION);
//!
//! // One unknown usage rejects the whole descriptor.
//! let unknown = aidl::AudioAttributesInternal {
//!     usage: aidl::AudioUsage(12345),
//!     ..attributes
//! };
//! let err = conversion::aidl2legacy_audio_attributes_internal_audio_attributes_t(&unknown)
//!     .unwrap_err();
//! assert_eq!(err, ConversionError::BadValue);
//! assert_eq!(err.status(), legacy::BAD_VALUE);
//! # Ok::<(), ConversionError>(())
//! ```

pub use aidl_conversion as conversion;
pub use audio_legacy as legacy;
pub use media_aidl as aidl;
pub use shmem_compat as shmem;

pub use aidl_conversion::{ConversionError, ConversionResult, Direction};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facade_reaches_every_layer() {
        let direction = Direction::of_aidl(aidl::AudioPortRole::SINK, aidl::AudioPortType::DEVICE);
        assert_eq!(direction, Ok(Direction::Output));
        assert_eq!(
            conversion::aidl2legacy_audio_port_role_audio_port_role_t(aidl::AudioPortRole::SINK),
            Ok(legacy::AUDIO_PORT_ROLE_SINK)
        );
    }
}
