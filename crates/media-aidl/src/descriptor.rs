//! Composite descriptors built on top of port configurations.

use crate::enums::{
    AudioContentType, AudioEncapsulationMode, AudioFormat, AudioSourceType, AudioStreamType,
    AudioUsage,
};
use crate::port::AudioPortConfig;

/// Connection between source and sink port configurations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct AudioPatch {
    pub id: i32,
    pub sinks: Vec<AudioPortConfig>,
    pub sources: Vec<AudioPortConfig>,
}

/// State of an input or output stream reported to I/O listeners.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct AudioIoDescriptor {
    pub io_handle: i32,
    pub patch: AudioPatch,
    pub sampling_rate: i32,
    pub format: AudioFormat,
    pub channel_mask: i32,
    pub frame_count: i64,
    #[cfg_attr(feature = "serde", serde(rename = "frameCountHAL"))]
    pub frame_count_hal: i64,
    pub latency: i32,
    pub port_id: i32,
}

/// Identity of the process a request originates from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct AudioClient {
    pub client_uid: i32,
    pub client_pid: i32,
    pub client_tid: i32,
    pub package_name: String,
}

/// Audio attributes as exchanged between client and server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct AudioAttributesInternal {
    pub content_type: AudioContentType,
    pub usage: AudioUsage,
    pub source: AudioSourceType,
    /// Bitmask of `AudioFlag` positions.
    pub flags: i32,
    /// Semicolon separated vendor tags.
    pub tags: String,
}

/// Sample rate, channel mask and format triple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct AudioConfigBase {
    pub sample_rate: i32,
    pub channel_mask: i32,
    pub format: AudioFormat,
}

/// Description of a compressed stream offloaded to the hardware.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct AudioOffloadInfo {
    pub version: i32,
    pub config: AudioConfigBase,
    pub stream_type: AudioStreamType,
    pub bit_rate: i32,
    pub duration_us: i64,
    pub has_video: bool,
    pub is_streaming: bool,
    pub bit_width: i32,
    pub offload_buffer_size: i32,
    pub usage: AudioUsage,
    pub encapsulation_mode: AudioEncapsulationMode,
    pub content_id: i32,
    pub sync_id: i32,
}

/// Full stream configuration including offload parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct AudioConfig {
    pub sample_rate: i32,
    pub channel_mask: i32,
    pub format: AudioFormat,
    pub offload_info: AudioOffloadInfo,
    pub frame_count: i64,
}

/// Region of a file descriptor shared between processes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct SharedFileRegion {
    /// Raw descriptor of the backing file.
    pub fd: i32,
    pub offset: i64,
    pub size: i64,
    pub writeable: bool,
}
