//! Channel mask layout and channel counting.
//!
//! The top two bits of a channel mask select its representation. A
//! positional mask assigns each bit to a speaker (output) or microphone
//! (input) position, and those positions differ between the two directions.
//! An index mask simply numbers channels.

use crate::AudioChannelMask;

/// Number of low bits carrying channel data.
pub const AUDIO_CHANNEL_REPRESENTATION_LOG2: u32 = 30;
/// Bits of a mask that carry channel data.
pub const AUDIO_CHANNEL_BITS_MASK: AudioChannelMask = (1 << AUDIO_CHANNEL_REPRESENTATION_LOG2) - 1;

pub const AUDIO_CHANNEL_NONE: AudioChannelMask = 0;

pub const AUDIO_CHANNEL_OUT_FRONT_LEFT: AudioChannelMask = 0x1;
pub const AUDIO_CHANNEL_OUT_FRONT_RIGHT: AudioChannelMask = 0x2;
pub const AUDIO_CHANNEL_OUT_FRONT_CENTER: AudioChannelMask = 0x4;
pub const AUDIO_CHANNEL_OUT_LOW_FREQUENCY: AudioChannelMask = 0x8;
pub const AUDIO_CHANNEL_OUT_BACK_LEFT: AudioChannelMask = 0x10;
pub const AUDIO_CHANNEL_OUT_BACK_RIGHT: AudioChannelMask = 0x20;
pub const AUDIO_CHANNEL_OUT_MONO: AudioChannelMask = AUDIO_CHANNEL_OUT_FRONT_LEFT;
pub const AUDIO_CHANNEL_OUT_STEREO: AudioChannelMask =
    AUDIO_CHANNEL_OUT_FRONT_LEFT | AUDIO_CHANNEL_OUT_FRONT_RIGHT;
pub const AUDIO_CHANNEL_OUT_5POINT1: AudioChannelMask = AUDIO_CHANNEL_OUT_FRONT_LEFT
    | AUDIO_CHANNEL_OUT_FRONT_RIGHT
    | AUDIO_CHANNEL_OUT_FRONT_CENTER
    | AUDIO_CHANNEL_OUT_LOW_FREQUENCY
    | AUDIO_CHANNEL_OUT_BACK_LEFT
    | AUDIO_CHANNEL_OUT_BACK_RIGHT;
/// Every positional output speaker bit (front left through top side right).
pub const AUDIO_CHANNEL_OUT_ALL: AudioChannelMask = 0x000F_FFFF;
pub const AUDIO_CHANNEL_OUT_HAPTIC_A: AudioChannelMask = 0x2000_0000;
pub const AUDIO_CHANNEL_OUT_HAPTIC_B: AudioChannelMask = 0x1000_0000;
pub const AUDIO_CHANNEL_HAPTIC_ALL: AudioChannelMask =
    AUDIO_CHANNEL_OUT_HAPTIC_A | AUDIO_CHANNEL_OUT_HAPTIC_B;

pub const AUDIO_CHANNEL_IN_LEFT: AudioChannelMask = 0x4;
pub const AUDIO_CHANNEL_IN_RIGHT: AudioChannelMask = 0x8;
pub const AUDIO_CHANNEL_IN_FRONT: AudioChannelMask = 0x10;
pub const AUDIO_CHANNEL_IN_BACK: AudioChannelMask = 0x20;
pub const AUDIO_CHANNEL_IN_VOICE_UPLINK: AudioChannelMask = 0x4000;
pub const AUDIO_CHANNEL_IN_VOICE_DNLINK: AudioChannelMask = 0x8000;
pub const AUDIO_CHANNEL_IN_MONO: AudioChannelMask = AUDIO_CHANNEL_IN_FRONT;
pub const AUDIO_CHANNEL_IN_STEREO: AudioChannelMask =
    AUDIO_CHANNEL_IN_LEFT | AUDIO_CHANNEL_IN_RIGHT;
/// Every positional input bit: bits 2..=15 plus the back/center/low
/// frequency/top positions in bits 16..=22 (bit 19 unassigned).
pub const AUDIO_CHANNEL_IN_ALL: AudioChannelMask = 0x0077_FFFC;

/// How the bits of a channel mask are to be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelRepresentation {
    Position,
    Index,
    /// Representation values 1 and 3 are reserved.
    Reserved(u32),
}

impl ChannelRepresentation {
    /// Decode the representation field of a channel mask.
    pub const fn of(mask: AudioChannelMask) -> Self {
        match mask >> AUDIO_CHANNEL_REPRESENTATION_LOG2 {
            0 => ChannelRepresentation::Position,
            2 => ChannelRepresentation::Index,
            other => ChannelRepresentation::Reserved(other),
        }
    }
}

/// Channel data bits of a mask, representation stripped.
pub const fn channel_mask_bits(mask: AudioChannelMask) -> AudioChannelMask {
    mask & AUDIO_CHANNEL_BITS_MASK
}

/// Build an index-representation mask from a set of channel indices.
pub const fn channel_mask_from_index_bits(bits: AudioChannelMask) -> AudioChannelMask {
    (2 << AUDIO_CHANNEL_REPRESENTATION_LOG2) | channel_mask_bits(bits)
}

/// Number of channels described by a capture channel mask.
pub const fn channel_count_from_in_mask(mask: AudioChannelMask) -> usize {
    let bits = channel_mask_bits(mask);
    match ChannelRepresentation::of(mask) {
        ChannelRepresentation::Position => (bits & AUDIO_CHANNEL_IN_ALL).count_ones() as usize,
        ChannelRepresentation::Index => bits.count_ones() as usize,
        ChannelRepresentation::Reserved(_) => 0,
    }
}

/// Number of channels described by a playback channel mask, haptic
/// channels included.
pub const fn channel_count_from_out_mask(mask: AudioChannelMask) -> usize {
    let bits = channel_mask_bits(mask);
    match ChannelRepresentation::of(mask) {
        ChannelRepresentation::Position => {
            (bits & (AUDIO_CHANNEL_OUT_ALL | AUDIO_CHANNEL_HAPTIC_ALL)).count_ones() as usize
        }
        ChannelRepresentation::Index => bits.count_ones() as usize,
        ChannelRepresentation::Reserved(_) => 0,
    }
}
