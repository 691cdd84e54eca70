//! Scalar, handle and string conversions.
//!
//! Handles are opaque integers on both sides. Where the two representations
//! share a width the value is carried bit for bit; the width equality is
//! checked at compile time next to each pair of converters. Everything else
//! goes through a range checked [`convert_integral`].

use core::mem::size_of;

use audio_legacy as legacy;
use media_aidl as aidl;

use crate::error::{ConversionError, ConversionResult};

/// Convert between integer types, failing when the value does not fit.
pub fn convert_integral<To, From>(from: From) -> ConversionResult<To>
where
    To: TryFrom<From>,
{
    To::try_from(from).map_err(|_| ConversionError::BadValue)
}

/// Integer pairs of identical width whose values can be carried bit for bit.
pub trait Reinterpret<To> {
    fn reinterpret(self) -> To;
}

macro_rules! impl_reinterpret {
    ($($from:ty => $to:ty),+ $(,)?) => {
        $(
            const _: () = assert!(size_of::<$from>() == size_of::<$to>());

            impl Reinterpret<$to> for $from {
                #[inline]
                fn reinterpret(self) -> $to {
                    self as $to
                }
            }
        )+
    };
}

impl_reinterpret!(
    i32 => i32,
    u32 => u32,
    i32 => u32,
    u32 => i32,
    i64 => i64,
    i64 => u64,
    u64 => i64,
);

/// Carry a value into a type of the same width without range checks.
pub fn convert_reinterpret<To, From: Reinterpret<To>>(from: From) -> To {
    from.reinterpret()
}

/// Declare the converter pair of an opaque integer handle.
macro_rules! handle_converters {
    ($(
        $(#[$meta:meta])*
        $to_legacy:ident, $to_aidl:ident: $wire:ty => $native:ty;
    )+) => {
        $(
            const _: () = assert!(size_of::<$wire>() == size_of::<$native>());

            $(#[$meta])*
            pub fn $to_legacy(aidl: $wire) -> ConversionResult<$native> {
                Ok(convert_reinterpret(aidl))
            }

            $(#[$meta])*
            pub fn $to_aidl(legacy: $native) -> ConversionResult<$wire> {
                Ok(convert_reinterpret(legacy))
            }
        )+
    };
}

handle_converters! {
    aidl2legacy_int32_t_audio_module_handle_t,
    legacy2aidl_audio_module_handle_t_int32_t: i32 => legacy::AudioModuleHandle;

    aidl2legacy_int32_t_audio_io_handle_t,
    legacy2aidl_audio_io_handle_t_int32_t: i32 => legacy::AudioIoHandle;

    aidl2legacy_int32_t_audio_port_handle_t,
    legacy2aidl_audio_port_handle_t_int32_t: i32 => legacy::AudioPortHandle;

    aidl2legacy_int32_t_audio_patch_handle_t,
    legacy2aidl_audio_patch_handle_t_int32_t: i32 => legacy::AudioPatchHandle;

    aidl2legacy_int32_t_audio_unique_id_t,
    legacy2aidl_audio_unique_id_t_int32_t: i32 => legacy::AudioUniqueId;

    aidl2legacy_int32_t_audio_session_t,
    legacy2aidl_audio_session_t_int32_t: i32 => legacy::AudioSession;

    aidl2legacy_int32_t_pid_t,
    legacy2aidl_pid_t_int32_t: i32 => legacy::Pid;

    /// User ids travel as signed integers; large ids come out negative.
    aidl2legacy_int32_t_uid_t,
    legacy2aidl_uid_t_int32_t: i32 => legacy::Uid;

    /// Channel masks are carried opaquely: the direction dependent meaning
    /// of each bit is not translated.
    aidl2legacy_int32_t_audio_channel_mask_t,
    legacy2aidl_audio_channel_mask_t_int32_t: i32 => legacy::AudioChannelMask;

    /// Device types are carried opaquely.
    aidl2legacy_int32_t_audio_devices_t,
    legacy2aidl_audio_devices_t_int32_t: i32 => legacy::AudioDevices;
}

/// Format words are carried opaquely, so formats without a wire name
/// still round trip.
pub fn aidl2legacy_audio_format_audio_format_t(
    aidl: aidl::AudioFormat,
) -> ConversionResult<legacy::AudioFormat> {
    Ok(convert_reinterpret(aidl.raw()))
}

pub fn legacy2aidl_audio_format_audio_format_t(
    legacy: legacy::AudioFormat,
) -> ConversionResult<aidl::AudioFormat> {
    Ok(aidl::AudioFormat(convert_reinterpret(legacy)))
}

/// Copy `aidl` into the NUL terminated buffer `dest`.
///
/// Fails when the string plus its terminator does not fit, or when it
/// contains a NUL of its own (it would not read back). Bytes after the
/// terminator are zeroed.
pub fn aidl2legacy_string(aidl: &str, dest: &mut [u8]) -> ConversionResult<()> {
    let bytes = aidl.as_bytes();
    if bytes.len() >= dest.len() || bytes.contains(&0) {
        return Err(ConversionError::BadValue);
    }
    dest[..bytes.len()].copy_from_slice(bytes);
    dest[bytes.len()..].fill(0);
    Ok(())
}

/// Read the NUL terminated string held in `legacy`.
///
/// Fails when the buffer has no terminator or is not UTF-8.
pub fn legacy2aidl_string(legacy: &[u8]) -> ConversionResult<String> {
    let len = legacy::c_str_len(legacy).ok_or(ConversionError::BadValue)?;
    core::str::from_utf8(&legacy[..len])
        .map(str::to_owned)
        .map_err(|_| ConversionError::BadValue)
}

pub fn aidl2legacy_string_view_string16(aidl: &str) -> ConversionResult<legacy::String16> {
    Ok(aidl.encode_utf16().collect())
}

/// Fails on unpaired surrogates.
pub fn legacy2aidl_string16_string(legacy: &[u16]) -> ConversionResult<String> {
    String::from_utf16(legacy).map_err(|_| ConversionError::BadValue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_conversion_checks_range() {
        assert_eq!(convert_integral::<u32, _>(48_000i32), Ok(48_000));
        assert_eq!(
            convert_integral::<u32, _>(-1i32),
            Err(ConversionError::BadValue)
        );
        assert_eq!(
            convert_integral::<u16, _>(0x1_0000i32),
            Err(ConversionError::BadValue)
        );
        assert_eq!(convert_integral::<i64, _>(usize::MAX >> 1), Ok(i64::MAX));
    }

    #[test]
    fn handles_are_carried_unchanged() {
        assert_eq!(aidl2legacy_int32_t_audio_io_handle_t(-5), Ok(-5));
        assert_eq!(legacy2aidl_audio_patch_handle_t_int32_t(77), Ok(77));
        assert_eq!(aidl2legacy_int32_t_uid_t(-1), Ok(u32::MAX));
        assert_eq!(legacy2aidl_uid_t_int32_t(10_057), Ok(10_057));
        assert_eq!(
            aidl2legacy_int32_t_audio_channel_mask_t(i32::MIN),
            Ok(0x8000_0000)
        );
    }

    #[test]
    fn unnamed_formats_round_trip() {
        let raw = aidl::AudioFormat(0x1F00_0000);
        let legacy = aidl2legacy_audio_format_audio_format_t(raw).unwrap();
        assert_eq!(legacy, 0x1F00_0000);
        assert_eq!(legacy2aidl_audio_format_audio_format_t(legacy), Ok(raw));
    }

    #[test]
    fn string_must_leave_room_for_terminator() {
        let mut buf = [0xAAu8; 4];
        assert!(aidl2legacy_string("abc", &mut buf).is_ok());
        assert_eq!(&buf, b"abc\0");
        assert_eq!(
            aidl2legacy_string("abcd", &mut buf),
            Err(ConversionError::BadValue)
        );
        assert_eq!(
            aidl2legacy_string("a\0b", &mut buf),
            Err(ConversionError::BadValue)
        );
    }

    #[test]
    fn string_tail_is_zeroed() {
        let mut buf = [0xAAu8; 6];
        aidl2legacy_string("ab", &mut buf).unwrap();
        assert_eq!(&buf, b"ab\0\0\0\0");
    }

    #[test]
    fn legacy_string_needs_terminator_and_utf8() {
        assert_eq!(legacy2aidl_string(b"bus0\0xx").as_deref(), Ok("bus0"));
        assert_eq!(legacy2aidl_string(b"bus0"), Err(ConversionError::BadValue));
        assert_eq!(
            legacy2aidl_string(&[0xFF, 0xFE, 0]),
            Err(ConversionError::BadValue)
        );
    }

    #[test]
    fn string16_round_trip_and_invalid_surrogate() {
        let units = aidl2legacy_string_view_string16("com.example.müsic").unwrap();
        assert_eq!(
            legacy2aidl_string16_string(&units).as_deref(),
            Ok("com.example.müsic")
        );
        assert_eq!(
            legacy2aidl_string16_string(&[0xD800]),
            Err(ConversionError::BadValue)
        );
    }
}
