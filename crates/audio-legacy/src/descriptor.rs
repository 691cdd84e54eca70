//! Composite native descriptors.

use core::mem::{offset_of, size_of};

use crate::flags::AudioFlagsMask;
use crate::port::AudioPortConfig;
use crate::{
    AudioChannelMask, AudioContentType, AudioEncapsulationMode, AudioFormat, AudioIoHandle,
    AudioPatchHandle, AudioPortHandle, AudioSource, AudioStreamType, AudioUsage, Pid, String16,
    Uid, AUDIO_ATTRIBUTES_TAGS_MAX_SIZE, AUDIO_OFFLOAD_INFO_VERSION_CURRENT, AUDIO_PATCH_PORTS_MAX,
    AUDIO_SOURCE_DEFAULT, AUDIO_STREAM_DEFAULT,
};

/// Patch between up to [`AUDIO_PATCH_PORTS_MAX`] sources and sinks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AudioPatch {
    pub id: AudioPatchHandle,
    /// Number of valid entries in `sinks`.
    pub num_sinks: u32,
    pub sinks: [AudioPortConfig; AUDIO_PATCH_PORTS_MAX],
    /// Number of valid entries in `sources`.
    pub num_sources: u32,
    pub sources: [AudioPortConfig; AUDIO_PATCH_PORTS_MAX],
}

impl AudioPatch {
    /// The valid sinks, clamped to the array capacity.
    pub fn sinks(&self) -> &[AudioPortConfig] {
        &self.sinks[..(self.num_sinks as usize).min(AUDIO_PATCH_PORTS_MAX)]
    }

    /// The valid sources, clamped to the array capacity.
    pub fn sources(&self) -> &[AudioPortConfig] {
        &self.sources[..(self.num_sources as usize).min(AUDIO_PATCH_PORTS_MAX)]
    }
}

/// Stream state shared with I/O configuration listeners. Handed out behind
/// an `Arc` since listeners keep it after the notification returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioIoDescriptor {
    pub io_handle: AudioIoHandle,
    pub patch: AudioPatch,
    pub sampling_rate: u32,
    pub format: AudioFormat,
    pub channel_mask: AudioChannelMask,
    pub frame_count: usize,
    pub frame_count_hal: usize,
    pub latency: u32,
    pub port_id: AudioPortHandle,
}

/// Identity of a client process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioClient {
    pub client_uid: Uid,
    pub client_pid: Pid,
    pub client_tid: Pid,
    pub package_name: String16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioAttributes {
    pub content_type: AudioContentType,
    pub usage: AudioUsage,
    pub source: AudioSource,
    pub flags: AudioFlagsMask,
    /// NUL terminated, semicolon separated tags.
    pub tags: [u8; AUDIO_ATTRIBUTES_TAGS_MAX_SIZE],
}

impl Default for AudioAttributes {
    fn default() -> Self {
        Self {
            content_type: 0,
            usage: 0,
            source: AUDIO_SOURCE_DEFAULT,
            flags: AudioFlagsMask::NONE,
            tags: [0; AUDIO_ATTRIBUTES_TAGS_MAX_SIZE],
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AudioConfigBase {
    pub sample_rate: u32,
    pub channel_mask: AudioChannelMask,
    pub format: AudioFormat,
}

/// Offload parameters in their versioned C layout.
///
/// `size` records how many bytes of this struct the producer filled in;
/// readers must not look past it.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioOffloadInfo {
    pub version: u16,
    pub size: u16,
    pub sample_rate: u32,
    pub channel_mask: AudioChannelMask,
    pub format: AudioFormat,
    pub stream_type: AudioStreamType,
    pub bit_rate: u32,
    pub duration_us: i64,
    pub has_video: bool,
    pub is_streaming: bool,
    pub bit_width: u32,
    pub offload_buffer_size: u32,
    pub usage: AudioUsage,
    // Version 0.2 fields.
    pub encapsulation_mode: AudioEncapsulationMode,
    pub content_id: i32,
    pub sync_id: i32,
}

impl AudioOffloadInfo {
    /// Bytes covering every version 0.1 field.
    pub const SIZE_V0_1: usize = offset_of!(AudioOffloadInfo, usage) + size_of::<AudioUsage>();
    /// Bytes covering every version 0.2 field.
    pub const SIZE_V0_2: usize = offset_of!(AudioOffloadInfo, sync_id) + size_of::<i32>();
    /// Value of `size` for a fully populated struct.
    pub const FULL_SIZE: u16 = size_of::<AudioOffloadInfo>() as u16;
}

impl Default for AudioOffloadInfo {
    fn default() -> Self {
        Self {
            version: AUDIO_OFFLOAD_INFO_VERSION_CURRENT,
            size: Self::FULL_SIZE,
            sample_rate: 0,
            channel_mask: 0,
            format: 0,
            stream_type: AUDIO_STREAM_DEFAULT,
            bit_rate: 0,
            duration_us: 0,
            has_video: false,
            is_streaming: false,
            bit_width: 16,
            offload_buffer_size: 0,
            usage: 0,
            encapsulation_mode: 0,
            content_id: 0,
            sync_id: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AudioConfig {
    pub sample_rate: u32,
    pub channel_mask: AudioChannelMask,
    pub format: AudioFormat,
    pub offload_info: AudioOffloadInfo,
    pub frame_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offload_info_layout() {
        assert_eq!(AudioOffloadInfo::SIZE_V0_1, 48);
        assert_eq!(AudioOffloadInfo::SIZE_V0_2, 60);
        assert_eq!(AudioOffloadInfo::FULL_SIZE, 64);
        let info = AudioOffloadInfo::default();
        assert_eq!(info.version, AUDIO_OFFLOAD_INFO_VERSION_CURRENT);
        assert_eq!(usize::from(info.size), size_of::<AudioOffloadInfo>());
    }

    #[test]
    fn patch_slices_follow_counts() {
        let mut patch = AudioPatch {
            num_sinks: 2,
            ..Default::default()
        };
        patch.sinks[1].id = 9;
        assert_eq!(patch.sinks().len(), 2);
        assert_eq!(patch.sinks()[1].id, 9);
        assert!(patch.sources().is_empty());
        patch.num_sources = 99;
        assert_eq!(patch.sources().len(), AUDIO_PATCH_PORTS_MAX);
    }
}
