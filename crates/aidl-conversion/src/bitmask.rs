//! Generic bitmask transcoding.
//!
//! A mask is converted bit by bit: every set bit of the source is turned
//! into a source enumerator, converted to a destination enumerator, and the
//! destination image of that enumerator is OR'ed into the result. The two
//! ends of that pipeline are pluggable, since wire masks number their bits
//! by enumerator value (index based) while native masks use the enumerator
//! as the bit itself (mask based).

use audio_legacy as legacy;
use tracing::trace;

use crate::error::ConversionResult;

/// Integer-like mask word.
pub trait MaskBits: Copy {
    /// Declared width of the mask in bits.
    const WIDTH: u32;

    /// Bits of the mask, zero extended.
    fn to_unsigned(self) -> u64;

    /// Build a mask from its bits, dropping anything above the width.
    fn from_unsigned(bits: u64) -> Self;
}

macro_rules! impl_mask_bits_int {
    ($($ty:ty => $unsigned:ty),+ $(,)?) => {
        $(
            impl MaskBits for $ty {
                const WIDTH: u32 = <$ty>::BITS;

                fn to_unsigned(self) -> u64 {
                    self as $unsigned as u64
                }

                fn from_unsigned(bits: u64) -> Self {
                    bits as $unsigned as $ty
                }
            }
        )+
    };
}

impl_mask_bits_int!(i32 => u32, u32 => u32, i64 => u64, u64 => u64);

macro_rules! impl_mask_bits_flags {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl MaskBits for $ty {
                const WIDTH: u32 = u32::BITS;

                fn to_unsigned(self) -> u64 {
                    u64::from(self.bits())
                }

                fn from_unsigned(bits: u64) -> Self {
                    Self::from_bits_retain(bits as u32)
                }
            }
        )+
    };
}

impl_mask_bits_flags!(
    legacy::PortConfigMask,
    legacy::AudioGainMode,
    legacy::AudioInputFlags,
    legacy::AudioOutputFlags,
    legacy::AudioFlagsMask,
);

/// Transcode `src` into a destination mask.
///
/// `src_index_to_enum` names the source enumerator of a bit index,
/// `enum_conversion` maps it across, and `dest_enum_to_mask` gives the
/// destination bits of the result. The first bit that fails to convert
/// fails the whole mask.
pub fn convert_bitmask<Dest, Src, DestEnum, SrcEnum>(
    src: Src,
    enum_conversion: impl Fn(SrcEnum) -> ConversionResult<DestEnum>,
    src_index_to_enum: impl Fn(u32) -> SrcEnum,
    dest_enum_to_mask: impl Fn(DestEnum) -> Dest,
) -> ConversionResult<Dest>
where
    Dest: MaskBits,
    Src: MaskBits,
{
    let mut dest = 0u64;
    let mut remaining = src.to_unsigned();
    let mut index = 0u32;
    while remaining != 0 {
        if remaining & 1 != 0 {
            let converted = enum_conversion(src_index_to_enum(index))?;
            dest |= dest_enum_to_mask(converted).to_unsigned();
        }
        remaining >>= 1;
        index += 1;
    }
    trace!(src = src.to_unsigned(), dest, "bitmask transcoded");
    Ok(Dest::from_unsigned(dest))
}

/// Index based source enumerator: the bit index is the value.
pub fn index_to_enum_index<E: From<i32>>(index: u32) -> E {
    // Indices never exceed 63.
    E::from(index as i32)
}

/// Mask based source enumerator: the single bit at `index`.
pub fn index_to_enum_bitmask<E: MaskBits>(index: u32) -> E {
    E::from_unsigned(1u64 << index)
}

/// Mask based destination: the enumerator already is its mask.
pub fn enum_to_mask_bitmask<M: MaskBits, E: MaskBits>(value: E) -> M {
    M::from_unsigned(value.to_unsigned())
}

/// Index based destination: the enumerator value is a bit index.
pub fn enum_to_mask_index<M: MaskBits, E: Into<i32>>(value: E) -> M {
    let index = value.into();
    debug_assert!(
        u32::try_from(index).is_ok_and(|index| index < M::WIDTH),
        "bit index {index} out of range"
    );
    let bits = u32::try_from(index)
        .ok()
        .and_then(|index| 1u64.checked_shl(index))
        .unwrap_or(0);
    M::from_unsigned(bits)
}

/// Whether the bit named by the index based `value` is set in `mask`.
pub fn bitmask_is_set<M: MaskBits, E: Into<i32>>(mask: M, value: E) -> bool {
    mask.to_unsigned() & enum_to_mask_index::<M, E>(value).to_unsigned() != 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConversionError;
    use media_aidl as aidl;

    fn double_index(value: aidl::AudioGainMode) -> ConversionResult<aidl::AudioGainMode> {
        match value.raw() {
            0..=7 => Ok(aidl::AudioGainMode(value.raw() * 2)),
            _ => Err(ConversionError::BadValue),
        }
    }

    #[test]
    fn every_set_bit_is_mapped() {
        let out: i32 = convert_bitmask(
            0b101i32,
            double_index,
            index_to_enum_index::<aidl::AudioGainMode>,
            enum_to_mask_index::<i32, aidl::AudioGainMode>,
        )
        .unwrap();
        // bits 0 and 2 map to bits 0 and 4
        assert_eq!(out, 0b1_0001);
    }

    #[test]
    fn first_unmappable_bit_fails() {
        let result: ConversionResult<i32> = convert_bitmask(
            0x101i32,
            double_index,
            index_to_enum_index::<aidl::AudioGainMode>,
            enum_to_mask_index::<i32, aidl::AudioGainMode>,
        );
        assert_eq!(result, Err(ConversionError::BadValue));
    }

    #[test]
    fn empty_mask_converts_to_empty() {
        let out: legacy::AudioGainMode = convert_bitmask(
            0i32,
            |_: aidl::AudioGainMode| -> ConversionResult<legacy::AudioGainMode> {
                Err(ConversionError::BadValue)
            },
            index_to_enum_index::<aidl::AudioGainMode>,
            enum_to_mask_bitmask::<legacy::AudioGainMode, legacy::AudioGainMode>,
        )
        .unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn sign_bit_is_a_regular_bit() {
        let out: u32 = convert_bitmask(
            i32::MIN,
            |bit: u32| -> ConversionResult<u32> { Ok(bit) },
            index_to_enum_bitmask::<u32>,
            enum_to_mask_bitmask::<u32, u32>,
        )
        .unwrap();
        assert_eq!(out, 0x8000_0000);
    }

    #[test]
    fn is_set_reads_index_bits() {
        assert!(bitmask_is_set(0b100i32, aidl::AudioGainMode::RAMP));
        assert!(!bitmask_is_set(0b100i32, aidl::AudioGainMode::JOINT));
    }
}
