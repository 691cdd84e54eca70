//! Port configuration parcelables and their unions.

use crate::enums::{AudioFormat, AudioPortRole, AudioPortType, AudioSourceType, AudioStreamType};

/// Gain configuration applied to a port.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct AudioGainConfig {
    /// Index of the gain controller in the port's gain list.
    pub index: i32,
    /// Bitmask of `AudioGainMode` positions.
    pub mode: i32,
    /// Channels the per-channel values apply to.
    pub channel_mask: i32,
    /// Gain values in millibels: one value for joint mode, otherwise one per channel.
    pub values: Vec<i32>,
    pub ramp_duration_ms: i32,
}

/// Input or output flags, depending on the port direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum AudioIoFlags {
    /// Bitmask of `AudioInputFlags` positions.
    Input(i32),
    /// Bitmask of `AudioOutputFlags` positions.
    Output(i32),
}

impl Default for AudioIoFlags {
    fn default() -> Self {
        AudioIoFlags::Input(0)
    }
}

/// Device specific part of a port configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct AudioPortConfigDeviceExt {
    pub hw_module: i32,
    /// Device type word, carried opaquely.
    pub r#type: i32,
    pub address: String,
}

/// Use case of a mix port: a stream when playing, a source when recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum AudioPortConfigMixExtUseCase {
    /// No use case. The payload is meaningless and always `false`.
    Nothing(bool),
    Stream(AudioStreamType),
    Source(AudioSourceType),
}

impl Default for AudioPortConfigMixExtUseCase {
    fn default() -> Self {
        AudioPortConfigMixExtUseCase::Nothing(false)
    }
}

/// Mix specific part of a port configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct AudioPortConfigMixExt {
    pub hw_module: i32,
    /// I/O handle of the mix.
    pub handle: i32,
    pub usecase: AudioPortConfigMixExtUseCase,
}

/// Session specific part of a port configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct AudioPortConfigSessionExt {
    pub session: i32,
}

/// Type specific extension of a port configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum AudioPortConfigExt {
    /// No extension. The payload is meaningless and always `false`.
    Nothing(bool),
    Device(AudioPortConfigDeviceExt),
    Mix(AudioPortConfigMixExt),
    Session(AudioPortConfigSessionExt),
}

impl Default for AudioPortConfigExt {
    fn default() -> Self {
        AudioPortConfigExt::Nothing(false)
    }
}

/// Configuration of an audio port.
///
/// `config_mask` holds `AudioPortConfigType` bit positions and decides which
/// of `sample_rate`, `channel_mask`, `format`, `gain` and `flags` carry data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct AudioPortConfig {
    pub id: i32,
    pub role: AudioPortRole,
    pub r#type: AudioPortType,
    pub config_mask: i32,
    pub sample_rate: i32,
    pub channel_mask: i32,
    pub format: AudioFormat,
    pub gain: AudioGainConfig,
    pub flags: AudioIoFlags,
    pub ext: AudioPortConfigExt,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_defaults_select_first_field() {
        assert_eq!(AudioIoFlags::default(), AudioIoFlags::Input(0));
        assert_eq!(
            AudioPortConfigExt::default(),
            AudioPortConfigExt::Nothing(false)
        );
        assert_eq!(
            AudioPortConfigMixExtUseCase::default(),
            AudioPortConfigMixExtUseCase::Nothing(false)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn port_config_json_uses_wire_field_names() {
        let config = AudioPortConfig {
            id: 7,
            role: AudioPortRole::SINK,
            r#type: AudioPortType::DEVICE,
            config_mask: 1,
            sample_rate: 48_000,
            ext: AudioPortConfigExt::Device(AudioPortConfigDeviceExt {
                hw_module: 1,
                r#type: 2,
                address: "bus0".into(),
            }),
            ..Default::default()
        };
        let json = serde_json::to_value(&config).expect("serialize");
        assert_eq!(json["configMask"], 1);
        assert_eq!(json["sampleRate"], 48_000);
        assert_eq!(json["type"], 1);
        assert_eq!(json["ext"]["device"]["address"], "bus0");
        let back: AudioPortConfig = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, config);
    }
}
