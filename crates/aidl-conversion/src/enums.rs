//! Enumeration and flag mask conversions.
//!
//! Every enumeration is mapped through an explicit table of wire/native
//! pairs and looked up in either direction. A value missing from the table
//! has no counterpart and is rejected. Flag masks reuse the same tables one
//! bit at a time through [`convert_bitmask`].

use audio_legacy as legacy;
use media_aidl as aidl;

use crate::bitmask::{
    convert_bitmask, enum_to_mask_bitmask, enum_to_mask_index, index_to_enum_bitmask,
    index_to_enum_index,
};
use crate::error::{ConversionError, ConversionResult};

fn lookup_legacy<A, L>(table: &[(A, L)], aidl: A) -> ConversionResult<L>
where
    A: Copy + PartialEq,
    L: Copy,
{
    table
        .iter()
        .find(|(wire, _)| *wire == aidl)
        .map(|&(_, native)| native)
        .ok_or(ConversionError::BadValue)
}

fn lookup_aidl<A, L>(table: &[(A, L)], legacy: L) -> ConversionResult<A>
where
    A: Copy,
    L: Copy + PartialEq,
{
    table
        .iter()
        .find(|(_, native)| *native == legacy)
        .map(|&(wire, _)| wire)
        .ok_or(ConversionError::BadValue)
}

/// Declare the converter pair backed by a mapping table.
macro_rules! table_converters {
    ($(
        $(#[$meta:meta])*
        $table:ident: $wire:ty => $native:ty { $to_legacy:ident, $to_aidl:ident }
    )+) => {
        $(
            $(#[$meta])*
            pub fn $to_legacy(aidl: $wire) -> ConversionResult<$native> {
                lookup_legacy($table, aidl)
            }

            $(#[$meta])*
            pub fn $to_aidl(legacy: $native) -> ConversionResult<$wire> {
                lookup_aidl($table, legacy)
            }
        )+
    };
}

const PORT_CONFIG_TYPES: &[(aidl::AudioPortConfigType, legacy::PortConfigMask)] = &[
    (aidl::AudioPortConfigType::SAMPLE_RATE, legacy::PortConfigMask::SAMPLE_RATE),
    (aidl::AudioPortConfigType::CHANNEL_MASK, legacy::PortConfigMask::CHANNEL_MASK),
    (aidl::AudioPortConfigType::FORMAT, legacy::PortConfigMask::FORMAT),
    (aidl::AudioPortConfigType::GAIN, legacy::PortConfigMask::GAIN),
    (aidl::AudioPortConfigType::FLAGS, legacy::PortConfigMask::FLAGS),
];

const IO_CONFIG_EVENTS: &[(aidl::AudioIoConfigEvent, legacy::AudioIoConfigEvent)] = &[
    (aidl::AudioIoConfigEvent::OUTPUT_REGISTERED, legacy::AUDIO_OUTPUT_REGISTERED),
    (aidl::AudioIoConfigEvent::OUTPUT_OPENED, legacy::AUDIO_OUTPUT_OPENED),
    (aidl::AudioIoConfigEvent::OUTPUT_CLOSED, legacy::AUDIO_OUTPUT_CLOSED),
    (aidl::AudioIoConfigEvent::OUTPUT_CONFIG_CHANGED, legacy::AUDIO_OUTPUT_CONFIG_CHANGED),
    (aidl::AudioIoConfigEvent::INPUT_REGISTERED, legacy::AUDIO_INPUT_REGISTERED),
    (aidl::AudioIoConfigEvent::INPUT_OPENED, legacy::AUDIO_INPUT_OPENED),
    (aidl::AudioIoConfigEvent::INPUT_CLOSED, legacy::AUDIO_INPUT_CLOSED),
    (aidl::AudioIoConfigEvent::INPUT_CONFIG_CHANGED, legacy::AUDIO_INPUT_CONFIG_CHANGED),
    (aidl::AudioIoConfigEvent::CLIENT_STARTED, legacy::AUDIO_CLIENT_STARTED),
];

const PORT_ROLES: &[(aidl::AudioPortRole, legacy::AudioPortRole)] = &[
    (aidl::AudioPortRole::NONE, legacy::AUDIO_PORT_ROLE_NONE),
    (aidl::AudioPortRole::SOURCE, legacy::AUDIO_PORT_ROLE_SOURCE),
    (aidl::AudioPortRole::SINK, legacy::AUDIO_PORT_ROLE_SINK),
];

const PORT_TYPES: &[(aidl::AudioPortType, legacy::AudioPortType)] = &[
    (aidl::AudioPortType::NONE, legacy::AUDIO_PORT_TYPE_NONE),
    (aidl::AudioPortType::DEVICE, legacy::AUDIO_PORT_TYPE_DEVICE),
    (aidl::AudioPortType::MIX, legacy::AUDIO_PORT_TYPE_MIX),
    (aidl::AudioPortType::SESSION, legacy::AUDIO_PORT_TYPE_SESSION),
];

const GAIN_MODES: &[(aidl::AudioGainMode, legacy::AudioGainMode)] = &[
    (aidl::AudioGainMode::JOINT, legacy::AudioGainMode::JOINT),
    (aidl::AudioGainMode::CHANNELS, legacy::AudioGainMode::CHANNELS),
    (aidl::AudioGainMode::RAMP, legacy::AudioGainMode::RAMP),
];

const INPUT_FLAGS: &[(aidl::AudioInputFlags, legacy::AudioInputFlags)] = &[
    (aidl::AudioInputFlags::FAST, legacy::AudioInputFlags::FAST),
    (aidl::AudioInputFlags::HW_HOTWORD, legacy::AudioInputFlags::HW_HOTWORD),
    (aidl::AudioInputFlags::RAW, legacy::AudioInputFlags::RAW),
    (aidl::AudioInputFlags::SYNC, legacy::AudioInputFlags::SYNC),
    (aidl::AudioInputFlags::MMAP_NOIRQ, legacy::AudioInputFlags::MMAP_NOIRQ),
    (aidl::AudioInputFlags::VOIP_TX, legacy::AudioInputFlags::VOIP_TX),
    (aidl::AudioInputFlags::HW_AV_SYNC, legacy::AudioInputFlags::HW_AV_SYNC),
    (aidl::AudioInputFlags::DIRECT, legacy::AudioInputFlags::DIRECT),
];

// Wire indices are dense; native bits 11 and 12 are skipped.
const OUTPUT_FLAGS: &[(aidl::AudioOutputFlags, legacy::AudioOutputFlags)] = &[
    (aidl::AudioOutputFlags::DIRECT, legacy::AudioOutputFlags::DIRECT),
    (aidl::AudioOutputFlags::PRIMARY, legacy::AudioOutputFlags::PRIMARY),
    (aidl::AudioOutputFlags::FAST, legacy::AudioOutputFlags::FAST),
    (aidl::AudioOutputFlags::DEEP_BUFFER, legacy::AudioOutputFlags::DEEP_BUFFER),
    (aidl::AudioOutputFlags::COMPRESS_OFFLOAD, legacy::AudioOutputFlags::COMPRESS_OFFLOAD),
    (aidl::AudioOutputFlags::NON_BLOCKING, legacy::AudioOutputFlags::NON_BLOCKING),
    (aidl::AudioOutputFlags::HW_AV_SYNC, legacy::AudioOutputFlags::HW_AV_SYNC),
    (aidl::AudioOutputFlags::TTS, legacy::AudioOutputFlags::TTS),
    (aidl::AudioOutputFlags::RAW, legacy::AudioOutputFlags::RAW),
    (aidl::AudioOutputFlags::SYNC, legacy::AudioOutputFlags::SYNC),
    (aidl::AudioOutputFlags::IEC958_NONAUDIO, legacy::AudioOutputFlags::IEC958_NONAUDIO),
    (aidl::AudioOutputFlags::DIRECT_PCM, legacy::AudioOutputFlags::DIRECT_PCM),
    (aidl::AudioOutputFlags::MMAP_NOIRQ, legacy::AudioOutputFlags::MMAP_NOIRQ),
    (aidl::AudioOutputFlags::VOIP_RX, legacy::AudioOutputFlags::VOIP_RX),
    (aidl::AudioOutputFlags::INCALL_MUSIC, legacy::AudioOutputFlags::INCALL_MUSIC),
];

const STREAM_TYPES: &[(aidl::AudioStreamType, legacy::AudioStreamType)] = &[
    (aidl::AudioStreamType::DEFAULT, legacy::AUDIO_STREAM_DEFAULT),
    (aidl::AudioStreamType::VOICE_CALL, legacy::AUDIO_STREAM_VOICE_CALL),
    (aidl::AudioStreamType::SYSTEM, legacy::AUDIO_STREAM_SYSTEM),
    (aidl::AudioStreamType::RING, legacy::AUDIO_STREAM_RING),
    (aidl::AudioStreamType::MUSIC, legacy::AUDIO_STREAM_MUSIC),
    (aidl::AudioStreamType::ALARM, legacy::AUDIO_STREAM_ALARM),
    (aidl::AudioStreamType::NOTIFICATION, legacy::AUDIO_STREAM_NOTIFICATION),
    (aidl::AudioStreamType::BLUETOOTH_SCO, legacy::AUDIO_STREAM_BLUETOOTH_SCO),
    (aidl::AudioStreamType::ENFORCED_AUDIBLE, legacy::AUDIO_STREAM_ENFORCED_AUDIBLE),
    (aidl::AudioStreamType::DTMF, legacy::AUDIO_STREAM_DTMF),
    (aidl::AudioStreamType::TTS, legacy::AUDIO_STREAM_TTS),
    (aidl::AudioStreamType::ACCESSIBILITY, legacy::AUDIO_STREAM_ACCESSIBILITY),
    (aidl::AudioStreamType::ASSISTANT, legacy::AUDIO_STREAM_ASSISTANT),
    (aidl::AudioStreamType::REROUTING, legacy::AUDIO_STREAM_REROUTING),
    (aidl::AudioStreamType::PATCH, legacy::AUDIO_STREAM_PATCH),
    (aidl::AudioStreamType::CALL_ASSISTANT, legacy::AUDIO_STREAM_CALL_ASSISTANT),
];

const SOURCE_TYPES: &[(aidl::AudioSourceType, legacy::AudioSource)] = &[
    (aidl::AudioSourceType::INVALID, legacy::AUDIO_SOURCE_INVALID),
    (aidl::AudioSourceType::DEFAULT, legacy::AUDIO_SOURCE_DEFAULT),
    (aidl::AudioSourceType::MIC, legacy::AUDIO_SOURCE_MIC),
    (aidl::AudioSourceType::VOICE_UPLINK, legacy::AUDIO_SOURCE_VOICE_UPLINK),
    (aidl::AudioSourceType::VOICE_DOWNLINK, legacy::AUDIO_SOURCE_VOICE_DOWNLINK),
    (aidl::AudioSourceType::VOICE_CALL, legacy::AUDIO_SOURCE_VOICE_CALL),
    (aidl::AudioSourceType::CAMCORDER, legacy::AUDIO_SOURCE_CAMCORDER),
    (aidl::AudioSourceType::VOICE_RECOGNITION, legacy::AUDIO_SOURCE_VOICE_RECOGNITION),
    (aidl::AudioSourceType::VOICE_COMMUNICATION, legacy::AUDIO_SOURCE_VOICE_COMMUNICATION),
    (aidl::AudioSourceType::REMOTE_SUBMIX, legacy::AUDIO_SOURCE_REMOTE_SUBMIX),
    (aidl::AudioSourceType::UNPROCESSED, legacy::AUDIO_SOURCE_UNPROCESSED),
    (aidl::AudioSourceType::VOICE_PERFORMANCE, legacy::AUDIO_SOURCE_VOICE_PERFORMANCE),
    (aidl::AudioSourceType::ECHO_REFERENCE, legacy::AUDIO_SOURCE_ECHO_REFERENCE),
    (aidl::AudioSourceType::FM_TUNER, legacy::AUDIO_SOURCE_FM_TUNER),
    (aidl::AudioSourceType::HOTWORD, legacy::AUDIO_SOURCE_HOTWORD),
];

const CONTENT_TYPES: &[(aidl::AudioContentType, legacy::AudioContentType)] = &[
    (aidl::AudioContentType::UNKNOWN, legacy::AUDIO_CONTENT_TYPE_UNKNOWN),
    (aidl::AudioContentType::SPEECH, legacy::AUDIO_CONTENT_TYPE_SPEECH),
    (aidl::AudioContentType::MUSIC, legacy::AUDIO_CONTENT_TYPE_MUSIC),
    (aidl::AudioContentType::MOVIE, legacy::AUDIO_CONTENT_TYPE_MOVIE),
    (aidl::AudioContentType::SONIFICATION, legacy::AUDIO_CONTENT_TYPE_SONIFICATION),
];

const USAGES: &[(aidl::AudioUsage, legacy::AudioUsage)] = &[
    (aidl::AudioUsage::UNKNOWN, legacy::AUDIO_USAGE_UNKNOWN),
    (aidl::AudioUsage::MEDIA, legacy::AUDIO_USAGE_MEDIA),
    (aidl::AudioUsage::VOICE_COMMUNICATION, legacy::AUDIO_USAGE_VOICE_COMMUNICATION),
    (
        aidl::AudioUsage::VOICE_COMMUNICATION_SIGNALLING,
        legacy::AUDIO_USAGE_VOICE_COMMUNICATION_SIGNALLING,
    ),
    (aidl::AudioUsage::ALARM, legacy::AUDIO_USAGE_ALARM),
    (aidl::AudioUsage::NOTIFICATION, legacy::AUDIO_USAGE_NOTIFICATION),
    (
        aidl::AudioUsage::NOTIFICATION_TELEPHONY_RINGTONE,
        legacy::AUDIO_USAGE_NOTIFICATION_TELEPHONY_RINGTONE,
    ),
    (
        aidl::AudioUsage::NOTIFICATION_COMMUNICATION_REQUEST,
        legacy::AUDIO_USAGE_NOTIFICATION_COMMUNICATION_REQUEST,
    ),
    (
        aidl::AudioUsage::NOTIFICATION_COMMUNICATION_INSTANT,
        legacy::AUDIO_USAGE_NOTIFICATION_COMMUNICATION_INSTANT,
    ),
    (
        aidl::AudioUsage::NOTIFICATION_COMMUNICATION_DELAYED,
        legacy::AUDIO_USAGE_NOTIFICATION_COMMUNICATION_DELAYED,
    ),
    (aidl::AudioUsage::NOTIFICATION_EVENT, legacy::AUDIO_USAGE_NOTIFICATION_EVENT),
    (
        aidl::AudioUsage::ASSISTANCE_ACCESSIBILITY,
        legacy::AUDIO_USAGE_ASSISTANCE_ACCESSIBILITY,
    ),
    (
        aidl::AudioUsage::ASSISTANCE_NAVIGATION_GUIDANCE,
        legacy::AUDIO_USAGE_ASSISTANCE_NAVIGATION_GUIDANCE,
    ),
    (
        aidl::AudioUsage::ASSISTANCE_SONIFICATION,
        legacy::AUDIO_USAGE_ASSISTANCE_SONIFICATION,
    ),
    (aidl::AudioUsage::GAME, legacy::AUDIO_USAGE_GAME),
    (aidl::AudioUsage::VIRTUAL_SOURCE, legacy::AUDIO_USAGE_VIRTUAL_SOURCE),
    (aidl::AudioUsage::ASSISTANT, legacy::AUDIO_USAGE_ASSISTANT),
    (aidl::AudioUsage::CALL_ASSISTANT, legacy::AUDIO_USAGE_CALL_ASSISTANT),
    (aidl::AudioUsage::EMERGENCY, legacy::AUDIO_USAGE_EMERGENCY),
    (aidl::AudioUsage::SAFETY, legacy::AUDIO_USAGE_SAFETY),
    (aidl::AudioUsage::VEHICLE_STATUS, legacy::AUDIO_USAGE_VEHICLE_STATUS),
    (aidl::AudioUsage::ANNOUNCEMENT, legacy::AUDIO_USAGE_ANNOUNCEMENT),
];

// The native "no flag" value has no wire index.
const AUDIO_FLAGS: &[(aidl::AudioFlag, legacy::AudioFlagsMask)] = &[
    (aidl::AudioFlag::AUDIBILITY_ENFORCED, legacy::AudioFlagsMask::AUDIBILITY_ENFORCED),
    (aidl::AudioFlag::SECURE, legacy::AudioFlagsMask::SECURE),
    (aidl::AudioFlag::SCO, legacy::AudioFlagsMask::SCO),
    (aidl::AudioFlag::BEACON, legacy::AudioFlagsMask::BEACON),
    (aidl::AudioFlag::HW_AV_SYNC, legacy::AudioFlagsMask::HW_AV_SYNC),
    (aidl::AudioFlag::HW_HOTWORD, legacy::AudioFlagsMask::HW_HOTWORD),
    (
        aidl::AudioFlag::BYPASS_INTERRUPTION_POLICY,
        legacy::AudioFlagsMask::BYPASS_INTERRUPTION_POLICY,
    ),
    (aidl::AudioFlag::BYPASS_MUTE, legacy::AudioFlagsMask::BYPASS_MUTE),
    (aidl::AudioFlag::LOW_LATENCY, legacy::AudioFlagsMask::LOW_LATENCY),
    (aidl::AudioFlag::DEEP_BUFFER, legacy::AudioFlagsMask::DEEP_BUFFER),
    (aidl::AudioFlag::NO_MEDIA_PROJECTION, legacy::AudioFlagsMask::NO_MEDIA_PROJECTION),
    (aidl::AudioFlag::MUTE_HAPTIC, legacy::AudioFlagsMask::MUTE_HAPTIC),
    (aidl::AudioFlag::NO_SYSTEM_CAPTURE, legacy::AudioFlagsMask::NO_SYSTEM_CAPTURE),
    (aidl::AudioFlag::CAPTURE_PRIVATE, legacy::AudioFlagsMask::CAPTURE_PRIVATE),
];

const ENCAPSULATION_MODES: &[(aidl::AudioEncapsulationMode, legacy::AudioEncapsulationMode)] = &[
    (aidl::AudioEncapsulationMode::NONE, legacy::AUDIO_ENCAPSULATION_MODE_NONE),
    (
        aidl::AudioEncapsulationMode::ELEMENTARY_STREAM,
        legacy::AUDIO_ENCAPSULATION_MODE_ELEMENTARY_STREAM,
    ),
    (aidl::AudioEncapsulationMode::HANDLE, legacy::AUDIO_ENCAPSULATION_MODE_HANDLE),
];

table_converters! {
    /// One bit of a port configuration mask.
    PORT_CONFIG_TYPES: aidl::AudioPortConfigType => legacy::PortConfigMask {
        aidl2legacy_audio_port_config_type, legacy2aidl_audio_port_config_type
    }

    IO_CONFIG_EVENTS: aidl::AudioIoConfigEvent => legacy::AudioIoConfigEvent {
        aidl2legacy_audio_io_config_event_audio_io_config_event,
        legacy2aidl_audio_io_config_event_audio_io_config_event
    }

    PORT_ROLES: aidl::AudioPortRole => legacy::AudioPortRole {
        aidl2legacy_audio_port_role_audio_port_role_t,
        legacy2aidl_audio_port_role_t_audio_port_role
    }

    PORT_TYPES: aidl::AudioPortType => legacy::AudioPortType {
        aidl2legacy_audio_port_type_audio_port_type_t,
        legacy2aidl_audio_port_type_t_audio_port_type
    }

    /// One bit of a gain mode mask.
    GAIN_MODES: aidl::AudioGainMode => legacy::AudioGainMode {
        aidl2legacy_audio_gain_mode_audio_gain_mode_t,
        legacy2aidl_audio_gain_mode_t_audio_gain_mode
    }

    /// One bit of an input flags mask.
    INPUT_FLAGS: aidl::AudioInputFlags => legacy::AudioInputFlags {
        aidl2legacy_audio_input_flags_audio_input_flags_t,
        legacy2aidl_audio_input_flags_t_audio_input_flags
    }

    /// One bit of an output flags mask.
    OUTPUT_FLAGS: aidl::AudioOutputFlags => legacy::AudioOutputFlags {
        aidl2legacy_audio_output_flags_audio_output_flags_t,
        legacy2aidl_audio_output_flags_t_audio_output_flags
    }

    STREAM_TYPES: aidl::AudioStreamType => legacy::AudioStreamType {
        aidl2legacy_audio_stream_type_audio_stream_type_t,
        legacy2aidl_audio_stream_type_t_audio_stream_type
    }

    SOURCE_TYPES: aidl::AudioSourceType => legacy::AudioSource {
        aidl2legacy_audio_source_type_audio_source_t,
        legacy2aidl_audio_source_t_audio_source_type
    }

    CONTENT_TYPES: aidl::AudioContentType => legacy::AudioContentType {
        aidl2legacy_audio_content_type_audio_content_type_t,
        legacy2aidl_audio_content_type_t_audio_content_type
    }

    USAGES: aidl::AudioUsage => legacy::AudioUsage {
        aidl2legacy_audio_usage_audio_usage_t,
        legacy2aidl_audio_usage_t_audio_usage
    }

    /// One attributes flag. The native empty mask is not a flag and is
    /// rejected.
    AUDIO_FLAGS: aidl::AudioFlag => legacy::AudioFlagsMask {
        aidl2legacy_audio_flag_audio_flags_mask_t,
        legacy2aidl_audio_flags_mask_t_audio_flag
    }

    ENCAPSULATION_MODES: aidl::AudioEncapsulationMode => legacy::AudioEncapsulationMode {
        aidl2legacy_audio_encapsulation_mode_audio_encapsulation_mode_t,
        legacy2aidl_audio_encapsulation_mode_t_audio_encapsulation_mode
    }
}

/// Wire `configMask` (bit per [`aidl::AudioPortConfigType`]) to native.
pub fn aidl2legacy_int32_t_config_mask(aidl: i32) -> ConversionResult<legacy::PortConfigMask> {
    convert_bitmask(
        aidl,
        aidl2legacy_audio_port_config_type,
        index_to_enum_index::<aidl::AudioPortConfigType>,
        enum_to_mask_bitmask::<legacy::PortConfigMask, legacy::PortConfigMask>,
    )
}

pub fn legacy2aidl_config_mask_int32_t(legacy: legacy::PortConfigMask) -> ConversionResult<i32> {
    convert_bitmask(
        legacy,
        legacy2aidl_audio_port_config_type,
        index_to_enum_bitmask::<legacy::PortConfigMask>,
        enum_to_mask_index::<i32, aidl::AudioPortConfigType>,
    )
}

pub fn aidl2legacy_int32_t_audio_gain_mode_t_mask(
    aidl: i32,
) -> ConversionResult<legacy::AudioGainMode> {
    convert_bitmask(
        aidl,
        aidl2legacy_audio_gain_mode_audio_gain_mode_t,
        index_to_enum_index::<aidl::AudioGainMode>,
        enum_to_mask_bitmask::<legacy::AudioGainMode, legacy::AudioGainMode>,
    )
}

pub fn legacy2aidl_audio_gain_mode_t_int32_t_mask(
    legacy: legacy::AudioGainMode,
) -> ConversionResult<i32> {
    convert_bitmask(
        legacy,
        legacy2aidl_audio_gain_mode_t_audio_gain_mode,
        index_to_enum_bitmask::<legacy::AudioGainMode>,
        enum_to_mask_index::<i32, aidl::AudioGainMode>,
    )
}

pub fn aidl2legacy_int32_t_audio_input_flags_t_mask(
    aidl: i32,
) -> ConversionResult<legacy::AudioInputFlags> {
    convert_bitmask(
        aidl,
        aidl2legacy_audio_input_flags_audio_input_flags_t,
        index_to_enum_index::<aidl::AudioInputFlags>,
        enum_to_mask_bitmask::<legacy::AudioInputFlags, legacy::AudioInputFlags>,
    )
}

pub fn legacy2aidl_audio_input_flags_t_int32_t_mask(
    legacy: legacy::AudioInputFlags,
) -> ConversionResult<i32> {
    convert_bitmask(
        legacy,
        legacy2aidl_audio_input_flags_t_audio_input_flags,
        index_to_enum_bitmask::<legacy::AudioInputFlags>,
        enum_to_mask_index::<i32, aidl::AudioInputFlags>,
    )
}

pub fn aidl2legacy_int32_t_audio_output_flags_t_mask(
    aidl: i32,
) -> ConversionResult<legacy::AudioOutputFlags> {
    convert_bitmask(
        aidl,
        aidl2legacy_audio_output_flags_audio_output_flags_t,
        index_to_enum_index::<aidl::AudioOutputFlags>,
        enum_to_mask_bitmask::<legacy::AudioOutputFlags, legacy::AudioOutputFlags>,
    )
}

pub fn legacy2aidl_audio_output_flags_t_int32_t_mask(
    legacy: legacy::AudioOutputFlags,
) -> ConversionResult<i32> {
    convert_bitmask(
        legacy,
        legacy2aidl_audio_output_flags_t_audio_output_flags,
        index_to_enum_bitmask::<legacy::AudioOutputFlags>,
        enum_to_mask_index::<i32, aidl::AudioOutputFlags>,
    )
}

pub fn aidl2legacy_int32_t_audio_flags_mask_t_mask(
    aidl: i32,
) -> ConversionResult<legacy::AudioFlagsMask> {
    convert_bitmask(
        aidl,
        aidl2legacy_audio_flag_audio_flags_mask_t,
        index_to_enum_index::<aidl::AudioFlag>,
        enum_to_mask_bitmask::<legacy::AudioFlagsMask, legacy::AudioFlagsMask>,
    )
}

pub fn legacy2aidl_audio_flags_mask_t_int32_t_mask(
    legacy: legacy::AudioFlagsMask,
) -> ConversionResult<i32> {
    convert_bitmask(
        legacy,
        legacy2aidl_audio_flags_mask_t_audio_flag,
        index_to_enum_bitmask::<legacy::AudioFlagsMask>,
        enum_to_mask_index::<i32, aidl::AudioFlag>,
    )
}
