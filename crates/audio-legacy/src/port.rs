//! Port configuration structs.

use crate::flags::{AudioGainMode, AudioInputFlags, AudioOutputFlags, PortConfigMask};
use crate::{
    AudioChannelMask, AudioDevices, AudioFormat, AudioIoHandle, AudioModuleHandle,
    AudioPortHandle, AudioPortRole, AudioPortType, AudioSession, AudioSource, AudioStreamType,
    AUDIO_DEVICE_MAX_ADDRESS_LEN, AUDIO_GAIN_MAX_VALUES,
};

/// Gain settings of a port.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AudioGainConfig {
    pub index: i32,
    pub mode: AudioGainMode,
    pub channel_mask: AudioChannelMask,
    /// Only the first `1` (joint mode) or channel count entries are used.
    pub values: [i32; AUDIO_GAIN_MAX_VALUES],
    pub ramp_duration_ms: u32,
}

/// Input or output flags. Which member is meaningful follows from the
/// port role and type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AudioIoFlags {
    pub input: AudioInputFlags,
    pub output: AudioOutputFlags,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AudioPortConfigDeviceExt {
    pub hw_module: AudioModuleHandle,
    pub type_: AudioDevices,
    /// NUL terminated device address.
    pub address: [u8; AUDIO_DEVICE_MAX_ADDRESS_LEN],
}

/// Mix use case. `stream` is meaningful for a source mix, `source` for a
/// sink mix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AudioPortConfigMixExtUsecase {
    pub stream: AudioStreamType,
    pub source: AudioSource,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AudioPortConfigMixExt {
    pub hw_module: AudioModuleHandle,
    pub handle: AudioIoHandle,
    pub usecase: AudioPortConfigMixExtUsecase,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AudioPortConfigSessionExt {
    pub session: AudioSession,
}

/// Type specific extension; the member matching the port type is meaningful.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AudioPortConfigExt {
    pub device: AudioPortConfigDeviceExt,
    pub mix: AudioPortConfigMixExt,
    pub session: AudioPortConfigSessionExt,
}

/// Port configuration. Fields gated by `config_mask` are only meaningful
/// when the matching bit is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AudioPortConfig {
    pub id: AudioPortHandle,
    pub role: AudioPortRole,
    pub type_: AudioPortType,
    pub config_mask: PortConfigMask,
    pub sample_rate: u32,
    pub channel_mask: AudioChannelMask,
    pub format: AudioFormat,
    pub gain: AudioGainConfig,
    pub flags: AudioIoFlags,
    pub ext: AudioPortConfigExt,
}
