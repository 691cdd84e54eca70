//! Int-backed enumerations of the wire schema.
//!
//! Enums used inside bitmasks (`AudioPortConfigType`, `AudioGainMode`,
//! `AudioInputFlags`, `AudioOutputFlags`, `AudioFlag`) are index-based: the
//! value is the bit position within the corresponding `int` mask field.

aidl_enum! {
    /// Role of an audio port within a patch.
    pub struct AudioPortRole(i32) {
        NONE = 0,
        SOURCE = 1,
        SINK = 2,
    }
}

aidl_enum! {
    /// Kind of entity an audio port represents.
    pub struct AudioPortType(i32) {
        NONE = 0,
        DEVICE = 1,
        MIX = 2,
        SESSION = 3,
    }
}

aidl_enum! {
    /// Bit positions of `AudioPortConfig::config_mask`.
    pub struct AudioPortConfigType(i32) {
        SAMPLE_RATE = 0,
        CHANNEL_MASK = 1,
        FORMAT = 2,
        GAIN = 3,
        FLAGS = 4,
    }
}

aidl_enum! {
    /// Events reported to I/O configuration listeners.
    pub struct AudioIoConfigEvent(i32) {
        OUTPUT_REGISTERED = 0,
        OUTPUT_OPENED = 1,
        OUTPUT_CLOSED = 2,
        OUTPUT_CONFIG_CHANGED = 3,
        INPUT_REGISTERED = 4,
        INPUT_OPENED = 5,
        INPUT_CLOSED = 6,
        INPUT_CONFIG_CHANGED = 7,
        CLIENT_STARTED = 8,
    }
}

aidl_enum! {
    /// Bit positions of a gain mode mask.
    pub struct AudioGainMode(i32) {
        JOINT = 0,
        CHANNELS = 1,
        RAMP = 2,
    }
}

aidl_enum! {
    /// Bit positions of an input flags mask.
    pub struct AudioInputFlags(i32) {
        FAST = 0,
        HW_HOTWORD = 1,
        RAW = 2,
        SYNC = 3,
        MMAP_NOIRQ = 4,
        VOIP_TX = 5,
        HW_AV_SYNC = 6,
        DIRECT = 7,
    }
}

aidl_enum! {
    /// Bit positions of an output flags mask.
    pub struct AudioOutputFlags(i32) {
        DIRECT = 0,
        PRIMARY = 1,
        FAST = 2,
        DEEP_BUFFER = 3,
        COMPRESS_OFFLOAD = 4,
        NON_BLOCKING = 5,
        HW_AV_SYNC = 6,
        TTS = 7,
        RAW = 8,
        SYNC = 9,
        IEC958_NONAUDIO = 10,
        DIRECT_PCM = 11,
        MMAP_NOIRQ = 12,
        VOIP_RX = 13,
        INCALL_MUSIC = 14,
    }
}

aidl_enum! {
    /// Logical stream a mix port plays.
    pub struct AudioStreamType(i32) {
        DEFAULT = -1,
        VOICE_CALL = 0,
        SYSTEM = 1,
        RING = 2,
        MUSIC = 3,
        ALARM = 4,
        NOTIFICATION = 5,
        BLUETOOTH_SCO = 6,
        ENFORCED_AUDIBLE = 7,
        DTMF = 8,
        TTS = 9,
        ACCESSIBILITY = 10,
        ASSISTANT = 11,
        REROUTING = 12,
        PATCH = 13,
        CALL_ASSISTANT = 14,
    }
}

aidl_enum! {
    /// Capture source a mix port records from.
    pub struct AudioSourceType(i32) {
        INVALID = -1,
        DEFAULT = 0,
        MIC = 1,
        VOICE_UPLINK = 2,
        VOICE_DOWNLINK = 3,
        VOICE_CALL = 4,
        CAMCORDER = 5,
        VOICE_RECOGNITION = 6,
        VOICE_COMMUNICATION = 7,
        REMOTE_SUBMIX = 8,
        UNPROCESSED = 9,
        VOICE_PERFORMANCE = 10,
        ECHO_REFERENCE = 1997,
        FM_TUNER = 1998,
        HOTWORD = 1999,
    }
}

aidl_enum! {
    /// Content type of an audio attributes set.
    pub struct AudioContentType(i32) {
        UNKNOWN = 0,
        SPEECH = 1,
        MUSIC = 2,
        MOVIE = 3,
        SONIFICATION = 4,
    }
}

aidl_enum! {
    /// Usage of an audio attributes set.
    pub struct AudioUsage(i32) {
        UNKNOWN = 0,
        MEDIA = 1,
        VOICE_COMMUNICATION = 2,
        VOICE_COMMUNICATION_SIGNALLING = 3,
        ALARM = 4,
        NOTIFICATION = 5,
        NOTIFICATION_TELEPHONY_RINGTONE = 6,
        NOTIFICATION_COMMUNICATION_REQUEST = 7,
        NOTIFICATION_COMMUNICATION_INSTANT = 8,
        NOTIFICATION_COMMUNICATION_DELAYED = 9,
        NOTIFICATION_EVENT = 10,
        ASSISTANCE_ACCESSIBILITY = 11,
        ASSISTANCE_NAVIGATION_GUIDANCE = 12,
        ASSISTANCE_SONIFICATION = 13,
        GAME = 14,
        VIRTUAL_SOURCE = 15,
        ASSISTANT = 16,
        CALL_ASSISTANT = 17,
        EMERGENCY = 1000,
        SAFETY = 1001,
        VEHICLE_STATUS = 1002,
        ANNOUNCEMENT = 1003,
    }
}

aidl_enum! {
    /// Bit positions of the audio attributes flags mask.
    pub struct AudioFlag(i32) {
        AUDIBILITY_ENFORCED = 0,
        SECURE = 1,
        SCO = 2,
        BEACON = 3,
        HW_AV_SYNC = 4,
        HW_HOTWORD = 5,
        BYPASS_INTERRUPTION_POLICY = 6,
        BYPASS_MUTE = 7,
        LOW_LATENCY = 8,
        DEEP_BUFFER = 9,
        NO_MEDIA_PROJECTION = 10,
        MUTE_HAPTIC = 11,
        NO_SYSTEM_CAPTURE = 12,
        CAPTURE_PRIVATE = 13,
    }
}

aidl_enum! {
    /// Encapsulation mode of an offloaded stream.
    pub struct AudioEncapsulationMode(i32) {
        NONE = 0,
        ELEMENTARY_STREAM = 1,
        HANDLE = 2,
    }
}

aidl_enum! {
    /// Sample/encoding format. Kept numerically in sync with the native
    /// format word, so only a representative subset is named here.
    pub struct AudioFormat(i32) {
        DEFAULT = 0,
        PCM_16_BIT = 0x1,
        PCM_8_BIT = 0x2,
        PCM_32_BIT = 0x3,
        PCM_8_24_BIT = 0x4,
        PCM_FLOAT = 0x5,
        PCM_24_BIT_PACKED = 0x6,
        MP3 = 0x0100_0000,
        AMR_NB = 0x0200_0000,
        AMR_WB = 0x0300_0000,
        AAC = 0x0400_0000,
        HE_AAC_V1 = 0x0500_0000,
        AC3 = 0x0900_0000,
        E_AC3 = 0x0A00_0000,
        OPUS = 0x0800_0000,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_and_raw_values() {
        assert_eq!(AudioPortRole::SINK.raw(), 2);
        assert_eq!(AudioPortRole::SINK.name(), Some("SINK"));
        assert_eq!(AudioStreamType::DEFAULT.raw(), -1);
        assert_eq!(AudioSourceType::HOTWORD.raw(), 1999);
        assert_eq!(AudioUsage::from(1003), AudioUsage::ANNOUNCEMENT);
    }

    #[test]
    fn unknown_values_are_representable() {
        let role = AudioPortRole(42);
        assert_eq!(role.name(), None);
        assert_eq!(role.to_string(), "AudioPortRole(42)");
        assert_eq!(i32::from(role), 42);
    }

    #[test]
    fn value_lists_are_complete() {
        assert_eq!(AudioOutputFlags::VALUES.len(), 15);
        assert_eq!(AudioFlag::VALUES.len(), 14);
        assert_eq!(AudioUsage::VALUES.len(), 22);
        assert!(AudioInputFlags::VALUES
            .iter()
            .enumerate()
            .all(|(index, flag)| flag.raw() == index as i32));
    }
}
