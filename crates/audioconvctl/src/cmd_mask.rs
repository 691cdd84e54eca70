use std::fmt::Display;

use aidl_conversion as conv;
use anyhow::Result;
use audio_legacy as legacy;
use clap::ValueEnum;
use media_aidl as aidl;
use serde::Serialize;
use tracing::debug;

use crate::common;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MaskKind {
    /// Port configuration field mask
    Config,
    GainMode,
    InputFlags,
    OutputFlags,
    /// Audio attributes flags
    AudioFlags,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MaskReport {
    kind: String,
    to_wire: bool,
    input: u32,
    output: u32,
    names: String,
}

/// Names of the index based wire bits set in `mask`.
fn wire_names<E>(values: &[E], mask: i32) -> String
where
    E: Copy + Into<i32> + Display,
{
    let names: Vec<String> = values
        .iter()
        .filter(|&&value| conv::bitmask_is_set(mask, value))
        .map(ToString::to_string)
        .collect();
    names.join(" | ")
}

fn to_legacy(kind: MaskKind, wire: i32) -> conv::ConversionResult<(u32, String)> {
    Ok(match kind {
        MaskKind::Config => {
            let mask = conv::aidl2legacy_int32_t_config_mask(wire)?;
            (mask.bits(), format!("{mask:?}"))
        }
        MaskKind::GainMode => {
            let mask = conv::aidl2legacy_int32_t_audio_gain_mode_t_mask(wire)?;
            (mask.bits(), format!("{mask:?}"))
        }
        MaskKind::InputFlags => {
            let mask = conv::aidl2legacy_int32_t_audio_input_flags_t_mask(wire)?;
            (mask.bits(), format!("{mask:?}"))
        }
        MaskKind::OutputFlags => {
            let mask = conv::aidl2legacy_int32_t_audio_output_flags_t_mask(wire)?;
            (mask.bits(), format!("{mask:?}"))
        }
        MaskKind::AudioFlags => {
            let mask = conv::aidl2legacy_int32_t_audio_flags_mask_t_mask(wire)?;
            (mask.bits(), format!("{mask:?}"))
        }
    })
}

fn to_wire(kind: MaskKind, native: u32) -> conv::ConversionResult<(i32, String)> {
    Ok(match kind {
        MaskKind::Config => {
            let mask = legacy::PortConfigMask::from_bits_retain(native);
            let wire = conv::legacy2aidl_config_mask_int32_t(mask)?;
            (wire, wire_names(aidl::AudioPortConfigType::VALUES, wire))
        }
        MaskKind::GainMode => {
            let mask = legacy::AudioGainMode::from_bits_retain(native);
            let wire = conv::legacy2aidl_audio_gain_mode_t_int32_t_mask(mask)?;
            (wire, wire_names(aidl::AudioGainMode::VALUES, wire))
        }
        MaskKind::InputFlags => {
            let mask = legacy::AudioInputFlags::from_bits_retain(native);
            let wire = conv::legacy2aidl_audio_input_flags_t_int32_t_mask(mask)?;
            (wire, wire_names(aidl::AudioInputFlags::VALUES, wire))
        }
        MaskKind::OutputFlags => {
            let mask = legacy::AudioOutputFlags::from_bits_retain(native);
            let wire = conv::legacy2aidl_audio_output_flags_t_int32_t_mask(mask)?;
            (wire, wire_names(aidl::AudioOutputFlags::VALUES, wire))
        }
        MaskKind::AudioFlags => {
            let mask = legacy::AudioFlagsMask::from_bits_retain(native);
            let wire = conv::legacy2aidl_audio_flags_mask_t_int32_t_mask(mask)?;
            (wire, wire_names(aidl::AudioFlag::VALUES, wire))
        }
    })
}

/// Transcode a raw mask. Without `to_wire` the value is a wire mask.
pub fn run(kind: MaskKind, value: &str, to_wire_side: bool, json: bool) -> Result<()> {
    let input = common::parse_mask(value)?;
    debug!(?kind, input, to_wire = to_wire_side, "transcoding mask");
    let (output, names) = if to_wire_side {
        let (wire, names) =
            to_wire(kind, input).map_err(common::conversion_failed("convert mask to aidl"))?;
        (wire as u32, names)
    } else {
        to_legacy(kind, input as i32)
            .map_err(common::conversion_failed("convert mask to legacy"))?
    };

    if json {
        let report = MaskReport {
            kind: format!("{kind:?}"),
            to_wire: to_wire_side,
            input,
            output,
            names,
        };
        common::print_json(&report)?;
    } else {
        println!("{output:#x} {names}");
    }
    Ok(())
}
