//! Mask-based flag words.
//!
//! Each named flag is a single bit; the same type serves both as the per-bit
//! enumeration and as the mask of several bits, exactly like the native
//! headers. Unknown bits are retained (`from_bits_retain`) so that callers
//! can detect and reject them.

use bitflags::bitflags;

bitflags! {
    /// Which optional fields of a port configuration are valid.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PortConfigMask: u32 {
        const SAMPLE_RATE = 0x1;
        const CHANNEL_MASK = 0x2;
        const FORMAT = 0x4;
        const GAIN = 0x8;
        const FLAGS = 0x10;
    }
}

impl PortConfigMask {
    /// Every optional field.
    pub const ALL: Self = Self::all();
}

bitflags! {
    /// How a gain controller is applied.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AudioGainMode: u32 {
        /// A single value applies to all channels.
        const JOINT = 0x1;
        /// One value per channel.
        const CHANNELS = 0x2;
        const RAMP = 0x4;
    }
}

bitflags! {
    /// Input stream flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AudioInputFlags: u32 {
        const FAST = 0x1;
        const HW_HOTWORD = 0x2;
        const RAW = 0x4;
        const SYNC = 0x8;
        const MMAP_NOIRQ = 0x10;
        const VOIP_TX = 0x20;
        const HW_AV_SYNC = 0x40;
        const DIRECT = 0x80;
    }
}

bitflags! {
    /// Output stream flags. Bits 11 and 12 are unassigned.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AudioOutputFlags: u32 {
        const DIRECT = 0x1;
        const PRIMARY = 0x2;
        const FAST = 0x4;
        const DEEP_BUFFER = 0x8;
        const COMPRESS_OFFLOAD = 0x10;
        const NON_BLOCKING = 0x20;
        const HW_AV_SYNC = 0x40;
        const TTS = 0x80;
        const RAW = 0x100;
        const SYNC = 0x200;
        const IEC958_NONAUDIO = 0x400;
        const DIRECT_PCM = 0x2000;
        const MMAP_NOIRQ = 0x4000;
        const VOIP_RX = 0x8000;
        const INCALL_MUSIC = 0x1_0000;
    }
}

bitflags! {
    /// Flags of an audio attributes set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AudioFlagsMask: u32 {
        const AUDIBILITY_ENFORCED = 0x1;
        const SECURE = 0x2;
        const SCO = 0x4;
        const BEACON = 0x8;
        const HW_AV_SYNC = 0x10;
        const HW_HOTWORD = 0x20;
        const BYPASS_INTERRUPTION_POLICY = 0x40;
        const BYPASS_MUTE = 0x80;
        const LOW_LATENCY = 0x100;
        const DEEP_BUFFER = 0x200;
        const NO_MEDIA_PROJECTION = 0x400;
        const MUTE_HAPTIC = 0x800;
        const NO_SYSTEM_CAPTURE = 0x1000;
        const CAPTURE_PRIVATE = 0x2000;
    }
}

impl AudioFlagsMask {
    /// No flag set. Not a flag in its own right.
    pub const NONE: Self = Self::empty();
}

macro_rules! empty_default {
    ($($flags:ty),+) => {
        $(
            impl Default for $flags {
                fn default() -> Self {
                    Self::empty()
                }
            }
        )+
    };
}

empty_default!(
    PortConfigMask,
    AudioGainMode,
    AudioInputFlags,
    AudioOutputFlags,
    AudioFlagsMask
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_bits_are_retained() {
        let flags = AudioOutputFlags::from_bits_retain(0x800 | 0x1);
        assert!(flags.contains(AudioOutputFlags::DIRECT));
        assert_eq!(flags.bits(), 0x801);
        assert_eq!(flags.bits() & !AudioOutputFlags::all().bits(), 0x800);
    }

    #[test]
    fn config_mask_all_covers_every_field() {
        assert_eq!(PortConfigMask::ALL.bits(), 0x1F);
        assert_eq!(PortConfigMask::default(), PortConfigMask::empty());
        assert!(AudioFlagsMask::NONE.is_empty());
    }
}
