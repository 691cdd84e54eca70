#![cfg_attr(docsrs, feature(doc_cfg))]
//! Native audio descriptors as used inside the audio server.
//!
//! Everything in this crate mirrors a fixed C layout: opaque handles are raw
//! integers, enumerations are integer constants, masks are flag words, and
//! strings live in NUL terminated fixed-capacity buffers. Unions whose active
//! member is decided by a sibling field are plain structs holding every
//! member; nothing here records which member is meaningful.

pub mod channel;
pub mod descriptor;
pub mod flags;
pub mod port;

pub use channel::{channel_count_from_in_mask, channel_count_from_out_mask};
pub use descriptor::{
    AudioAttributes, AudioClient, AudioConfig, AudioConfigBase, AudioIoDescriptor,
    AudioOffloadInfo, AudioPatch,
};
pub use flags::{AudioFlagsMask, AudioGainMode, AudioInputFlags, AudioOutputFlags, PortConfigMask};
pub use port::{
    AudioGainConfig, AudioIoFlags, AudioPortConfig, AudioPortConfigDeviceExt, AudioPortConfigExt,
    AudioPortConfigMixExt, AudioPortConfigMixExtUsecase, AudioPortConfigSessionExt,
};

/// Handle of a loaded hardware module.
pub type AudioModuleHandle = i32;
/// Handle of an input or output stream.
pub type AudioIoHandle = i32;
/// Handle of a port or port configuration.
pub type AudioPortHandle = i32;
/// Handle of a patch.
pub type AudioPatchHandle = i32;
/// Generic unique id allocated by the server.
pub type AudioUniqueId = i32;
/// Audio session id.
pub type AudioSession = i32;
/// Process or thread id.
pub type Pid = i32;
/// User id.
pub type Uid = u32;
/// Channel mask word; its meaning depends on the direction.
pub type AudioChannelMask = u32;
/// Device type word.
pub type AudioDevices = u32;
/// Format word.
pub type AudioFormat = u32;
/// UTF-16 string as held by native binder objects.
pub type String16 = Vec<u16>;

/// Generic "bad value" status code (`-EINVAL`).
pub const BAD_VALUE: i32 = -22;

/// Maximum length of a device address, terminator included.
pub const AUDIO_DEVICE_MAX_ADDRESS_LEN: usize = 32;
/// Maximum length of an attributes tag string, terminator included.
pub const AUDIO_ATTRIBUTES_TAGS_MAX_SIZE: usize = 256;
/// Maximum number of sinks or sources in a patch.
pub const AUDIO_PATCH_PORTS_MAX: usize = 16;
/// Capacity of the per-channel gain value array: one slot per channel mask bit.
pub const AUDIO_GAIN_MAX_VALUES: usize = AudioChannelMask::BITS as usize;

pub type AudioPortRole = u32;
pub const AUDIO_PORT_ROLE_NONE: AudioPortRole = 0;
pub const AUDIO_PORT_ROLE_SOURCE: AudioPortRole = 1;
pub const AUDIO_PORT_ROLE_SINK: AudioPortRole = 2;

pub type AudioPortType = u32;
pub const AUDIO_PORT_TYPE_NONE: AudioPortType = 0;
pub const AUDIO_PORT_TYPE_DEVICE: AudioPortType = 1;
pub const AUDIO_PORT_TYPE_MIX: AudioPortType = 2;
pub const AUDIO_PORT_TYPE_SESSION: AudioPortType = 3;

pub type AudioIoConfigEvent = u32;
pub const AUDIO_OUTPUT_REGISTERED: AudioIoConfigEvent = 0;
pub const AUDIO_OUTPUT_OPENED: AudioIoConfigEvent = 1;
pub const AUDIO_OUTPUT_CLOSED: AudioIoConfigEvent = 2;
pub const AUDIO_OUTPUT_CONFIG_CHANGED: AudioIoConfigEvent = 3;
pub const AUDIO_INPUT_REGISTERED: AudioIoConfigEvent = 4;
pub const AUDIO_INPUT_OPENED: AudioIoConfigEvent = 5;
pub const AUDIO_INPUT_CLOSED: AudioIoConfigEvent = 6;
pub const AUDIO_INPUT_CONFIG_CHANGED: AudioIoConfigEvent = 7;
pub const AUDIO_CLIENT_STARTED: AudioIoConfigEvent = 8;

pub type AudioStreamType = i32;
pub const AUDIO_STREAM_DEFAULT: AudioStreamType = -1;
pub const AUDIO_STREAM_VOICE_CALL: AudioStreamType = 0;
pub const AUDIO_STREAM_SYSTEM: AudioStreamType = 1;
pub const AUDIO_STREAM_RING: AudioStreamType = 2;
pub const AUDIO_STREAM_MUSIC: AudioStreamType = 3;
pub const AUDIO_STREAM_ALARM: AudioStreamType = 4;
pub const AUDIO_STREAM_NOTIFICATION: AudioStreamType = 5;
pub const AUDIO_STREAM_BLUETOOTH_SCO: AudioStreamType = 6;
pub const AUDIO_STREAM_ENFORCED_AUDIBLE: AudioStreamType = 7;
pub const AUDIO_STREAM_DTMF: AudioStreamType = 8;
pub const AUDIO_STREAM_TTS: AudioStreamType = 9;
pub const AUDIO_STREAM_ACCESSIBILITY: AudioStreamType = 10;
pub const AUDIO_STREAM_ASSISTANT: AudioStreamType = 11;
pub const AUDIO_STREAM_REROUTING: AudioStreamType = 12;
pub const AUDIO_STREAM_PATCH: AudioStreamType = 13;
pub const AUDIO_STREAM_CALL_ASSISTANT: AudioStreamType = 14;

pub type AudioSource = i32;
pub const AUDIO_SOURCE_INVALID: AudioSource = -1;
pub const AUDIO_SOURCE_DEFAULT: AudioSource = 0;
pub const AUDIO_SOURCE_MIC: AudioSource = 1;
pub const AUDIO_SOURCE_VOICE_UPLINK: AudioSource = 2;
pub const AUDIO_SOURCE_VOICE_DOWNLINK: AudioSource = 3;
pub const AUDIO_SOURCE_VOICE_CALL: AudioSource = 4;
pub const AUDIO_SOURCE_CAMCORDER: AudioSource = 5;
pub const AUDIO_SOURCE_VOICE_RECOGNITION: AudioSource = 6;
pub const AUDIO_SOURCE_VOICE_COMMUNICATION: AudioSource = 7;
pub const AUDIO_SOURCE_REMOTE_SUBMIX: AudioSource = 8;
pub const AUDIO_SOURCE_UNPROCESSED: AudioSource = 9;
pub const AUDIO_SOURCE_VOICE_PERFORMANCE: AudioSource = 10;
pub const AUDIO_SOURCE_ECHO_REFERENCE: AudioSource = 1997;
pub const AUDIO_SOURCE_FM_TUNER: AudioSource = 1998;
pub const AUDIO_SOURCE_HOTWORD: AudioSource = 1999;

pub type AudioContentType = u32;
pub const AUDIO_CONTENT_TYPE_UNKNOWN: AudioContentType = 0;
pub const AUDIO_CONTENT_TYPE_SPEECH: AudioContentType = 1;
pub const AUDIO_CONTENT_TYPE_MUSIC: AudioContentType = 2;
pub const AUDIO_CONTENT_TYPE_MOVIE: AudioContentType = 3;
pub const AUDIO_CONTENT_TYPE_SONIFICATION: AudioContentType = 4;

pub type AudioUsage = u32;
pub const AUDIO_USAGE_UNKNOWN: AudioUsage = 0;
pub const AUDIO_USAGE_MEDIA: AudioUsage = 1;
pub const AUDIO_USAGE_VOICE_COMMUNICATION: AudioUsage = 2;
pub const AUDIO_USAGE_VOICE_COMMUNICATION_SIGNALLING: AudioUsage = 3;
pub const AUDIO_USAGE_ALARM: AudioUsage = 4;
pub const AUDIO_USAGE_NOTIFICATION: AudioUsage = 5;
pub const AUDIO_USAGE_NOTIFICATION_TELEPHONY_RINGTONE: AudioUsage = 6;
pub const AUDIO_USAGE_NOTIFICATION_COMMUNICATION_REQUEST: AudioUsage = 7;
pub const AUDIO_USAGE_NOTIFICATION_COMMUNICATION_INSTANT: AudioUsage = 8;
pub const AUDIO_USAGE_NOTIFICATION_COMMUNICATION_DELAYED: AudioUsage = 9;
pub const AUDIO_USAGE_NOTIFICATION_EVENT: AudioUsage = 10;
pub const AUDIO_USAGE_ASSISTANCE_ACCESSIBILITY: AudioUsage = 11;
pub const AUDIO_USAGE_ASSISTANCE_NAVIGATION_GUIDANCE: AudioUsage = 12;
pub const AUDIO_USAGE_ASSISTANCE_SONIFICATION: AudioUsage = 13;
pub const AUDIO_USAGE_GAME: AudioUsage = 14;
pub const AUDIO_USAGE_VIRTUAL_SOURCE: AudioUsage = 15;
pub const AUDIO_USAGE_ASSISTANT: AudioUsage = 16;
pub const AUDIO_USAGE_CALL_ASSISTANT: AudioUsage = 17;
pub const AUDIO_USAGE_EMERGENCY: AudioUsage = 1000;
pub const AUDIO_USAGE_SAFETY: AudioUsage = 1001;
pub const AUDIO_USAGE_VEHICLE_STATUS: AudioUsage = 1002;
pub const AUDIO_USAGE_ANNOUNCEMENT: AudioUsage = 1003;

pub type AudioEncapsulationMode = u32;
pub const AUDIO_ENCAPSULATION_MODE_NONE: AudioEncapsulationMode = 0;
pub const AUDIO_ENCAPSULATION_MODE_ELEMENTARY_STREAM: AudioEncapsulationMode = 1;
pub const AUDIO_ENCAPSULATION_MODE_HANDLE: AudioEncapsulationMode = 2;

/// Build an offload info version word from its major and minor parts.
pub const fn make_offload_info_version(major: u16, minor: u16) -> u16 {
    ((major & 0xff) << 8) | (minor & 0xff)
}

pub const AUDIO_OFFLOAD_INFO_VERSION_0_1: u16 = make_offload_info_version(0, 1);
pub const AUDIO_OFFLOAD_INFO_VERSION_0_2: u16 = make_offload_info_version(0, 2);
pub const AUDIO_OFFLOAD_INFO_VERSION_CURRENT: u16 = AUDIO_OFFLOAD_INFO_VERSION_0_2;

/// Length of the NUL terminated string held in `buf`, or `None` when the
/// buffer is full and carries no terminator.
pub fn c_str_len(buf: &[u8]) -> Option<usize> {
    buf.iter().position(|&byte| byte == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offload_versions() {
        assert_eq!(AUDIO_OFFLOAD_INFO_VERSION_0_1, 0x0001);
        assert_eq!(AUDIO_OFFLOAD_INFO_VERSION_0_2, 0x0002);
        assert_eq!(make_offload_info_version(1, 0), 0x0100);
    }

    #[test]
    fn c_str_len_requires_terminator() {
        assert_eq!(c_str_len(b"abc\0\0"), Some(3));
        assert_eq!(c_str_len(b"\0"), Some(0));
        assert_eq!(c_str_len(b"abcd"), None);
        assert_eq!(AUDIO_GAIN_MAX_VALUES, 32);
    }
}
