//! Port configuration conversions.
//!
//! A port configuration carries two discriminated parts whose active member
//! is not stored next to them: the I/O flags and gain values depend on the
//! port [`Direction`], and the extension depends on the port type (and, for
//! mixes, on the role). On the wire these are unions with an explicit tag,
//! natively they are plain structs where only the matching member is
//! meaningful.

use audio_legacy as legacy;
use media_aidl as aidl;
use tracing::trace;

use crate::bitmask::bitmask_is_set;
use crate::direction::Direction;
use crate::enums::{
    aidl2legacy_audio_port_role_audio_port_role_t, aidl2legacy_audio_port_type_audio_port_type_t,
    aidl2legacy_audio_source_type_audio_source_t, aidl2legacy_audio_stream_type_audio_stream_type_t,
    aidl2legacy_int32_t_audio_gain_mode_t_mask, aidl2legacy_int32_t_audio_input_flags_t_mask,
    aidl2legacy_int32_t_audio_output_flags_t_mask, aidl2legacy_int32_t_config_mask,
    legacy2aidl_audio_gain_mode_t_int32_t_mask, legacy2aidl_audio_input_flags_t_int32_t_mask,
    legacy2aidl_audio_output_flags_t_int32_t_mask, legacy2aidl_audio_port_role_t_audio_port_role,
    legacy2aidl_audio_port_type_t_audio_port_type, legacy2aidl_audio_source_t_audio_source_type,
    legacy2aidl_audio_stream_type_t_audio_stream_type, legacy2aidl_config_mask_int32_t,
};
use crate::error::{ConversionError, ConversionResult};
use crate::scalar::{
    aidl2legacy_audio_format_audio_format_t, aidl2legacy_int32_t_audio_channel_mask_t,
    aidl2legacy_int32_t_audio_devices_t, aidl2legacy_int32_t_audio_io_handle_t,
    aidl2legacy_int32_t_audio_module_handle_t, aidl2legacy_int32_t_audio_port_handle_t,
    aidl2legacy_int32_t_audio_session_t, aidl2legacy_string, convert_integral,
    legacy2aidl_audio_channel_mask_t_int32_t, legacy2aidl_audio_devices_t_int32_t,
    legacy2aidl_audio_format_audio_format_t, legacy2aidl_audio_io_handle_t_int32_t,
    legacy2aidl_audio_module_handle_t_int32_t, legacy2aidl_audio_port_handle_t_int32_t,
    legacy2aidl_audio_session_t_int32_t, legacy2aidl_string,
};

/// Number of gain values a gain configuration carries.
fn gain_value_count(
    joint: bool,
    channel_mask: legacy::AudioChannelMask,
    direction: Direction,
) -> usize {
    if joint {
        return 1;
    }
    match direction {
        Direction::Input => legacy::channel_count_from_in_mask(channel_mask),
        Direction::Output => legacy::channel_count_from_out_mask(channel_mask),
    }
}

fn gain_config_to_legacy(
    aidl: &aidl::AudioGainConfig,
    direction: Direction,
) -> ConversionResult<legacy::AudioGainConfig> {
    let mut legacy = legacy::AudioGainConfig {
        index: convert_integral(aidl.index)?,
        mode: aidl2legacy_int32_t_audio_gain_mode_t_mask(aidl.mode)?,
        channel_mask: aidl2legacy_int32_t_audio_channel_mask_t(aidl.channel_mask)?,
        ..Default::default()
    };
    let joint = bitmask_is_set(aidl.mode, aidl::AudioGainMode::JOINT);
    let num_values = gain_value_count(joint, legacy.channel_mask, direction);
    if aidl.values.len() != num_values || num_values > legacy.values.len() {
        return Err(ConversionError::BadValue);
    }
    for (slot, &value) in legacy.values.iter_mut().zip(&aidl.values) {
        *slot = convert_integral(value)?;
    }
    legacy.ramp_duration_ms = convert_integral(aidl.ramp_duration_ms)?;
    Ok(legacy)
}

fn gain_config_to_aidl(
    legacy: &legacy::AudioGainConfig,
    direction: Direction,
) -> ConversionResult<aidl::AudioGainConfig> {
    let mode = legacy2aidl_audio_gain_mode_t_int32_t_mask(legacy.mode)?;
    let channel_mask = legacy2aidl_audio_channel_mask_t_int32_t(legacy.channel_mask)?;
    let joint = bitmask_is_set(mode, aidl::AudioGainMode::JOINT);
    let num_values = gain_value_count(joint, legacy.channel_mask, direction);
    let values = legacy
        .values
        .get(..num_values)
        .ok_or(ConversionError::BadValue)?
        .iter()
        .map(|&value| convert_integral(value))
        .collect::<ConversionResult<Vec<i32>>>()?;
    Ok(aidl::AudioGainConfig {
        index: convert_integral(legacy.index)?,
        mode,
        channel_mask,
        values,
        ramp_duration_ms: convert_integral(legacy.ramp_duration_ms)?,
    })
}

/// Gain settings of a port with the given role and type.
///
/// Joint gain carries exactly one value; otherwise there is one value per
/// channel of `channel_mask`, counted for the port direction.
pub fn aidl2legacy_audio_gain_config_audio_gain_config(
    aidl: &aidl::AudioGainConfig,
    role: aidl::AudioPortRole,
    type_: aidl::AudioPortType,
) -> ConversionResult<legacy::AudioGainConfig> {
    gain_config_to_legacy(aidl, Direction::of_aidl(role, type_)?)
}

pub fn legacy2aidl_audio_gain_config_audio_gain_config(
    legacy: &legacy::AudioGainConfig,
    role: legacy::AudioPortRole,
    type_: legacy::AudioPortType,
) -> ConversionResult<aidl::AudioGainConfig> {
    gain_config_to_aidl(legacy, Direction::of_legacy(role, type_)?)
}

fn io_flags_to_legacy(
    aidl: &aidl::AudioIoFlags,
    direction: Direction,
) -> ConversionResult<legacy::AudioIoFlags> {
    let mut legacy = legacy::AudioIoFlags::default();
    match direction {
        Direction::Input => {
            let flags = union_get!(aidl, aidl::AudioIoFlags::Input)?;
            legacy.input = aidl2legacy_int32_t_audio_input_flags_t_mask(*flags)?;
        }
        Direction::Output => {
            let flags = union_get!(aidl, aidl::AudioIoFlags::Output)?;
            legacy.output = aidl2legacy_int32_t_audio_output_flags_t_mask(*flags)?;
        }
    }
    Ok(legacy)
}

fn io_flags_to_aidl(
    legacy: &legacy::AudioIoFlags,
    direction: Direction,
) -> ConversionResult<aidl::AudioIoFlags> {
    Ok(match direction {
        Direction::Input => {
            aidl::AudioIoFlags::Input(legacy2aidl_audio_input_flags_t_int32_t_mask(legacy.input)?)
        }
        Direction::Output => aidl::AudioIoFlags::Output(
            legacy2aidl_audio_output_flags_t_int32_t_mask(legacy.output)?,
        ),
    })
}

/// I/O flags of a port. The wire variant must match the port direction.
pub fn aidl2legacy_audio_io_flags_audio_io_flags(
    aidl: &aidl::AudioIoFlags,
    role: aidl::AudioPortRole,
    type_: aidl::AudioPortType,
) -> ConversionResult<legacy::AudioIoFlags> {
    io_flags_to_legacy(aidl, Direction::of_aidl(role, type_)?)
}

pub fn legacy2aidl_audio_io_flags_audio_io_flags(
    legacy: &legacy::AudioIoFlags,
    role: legacy::AudioPortRole,
    type_: legacy::AudioPortType,
) -> ConversionResult<aidl::AudioIoFlags> {
    io_flags_to_aidl(legacy, Direction::of_legacy(role, type_)?)
}

pub fn aidl2legacy_audio_port_config_device_ext(
    aidl: &aidl::AudioPortConfigDeviceExt,
) -> ConversionResult<legacy::AudioPortConfigDeviceExt> {
    let mut legacy = legacy::AudioPortConfigDeviceExt {
        hw_module: aidl2legacy_int32_t_audio_module_handle_t(aidl.hw_module)?,
        type_: aidl2legacy_int32_t_audio_devices_t(aidl.r#type)?,
        ..Default::default()
    };
    aidl2legacy_string(&aidl.address, &mut legacy.address)?;
    Ok(legacy)
}

pub fn legacy2aidl_audio_port_config_device_ext(
    legacy: &legacy::AudioPortConfigDeviceExt,
) -> ConversionResult<aidl::AudioPortConfigDeviceExt> {
    Ok(aidl::AudioPortConfigDeviceExt {
        hw_module: legacy2aidl_audio_module_handle_t_int32_t(legacy.hw_module)?,
        r#type: legacy2aidl_audio_devices_t_int32_t(legacy.type_)?,
        address: legacy2aidl_string(&legacy.address)?,
    })
}

/// Mix use case: a stream for a source mix, a capture source for a sink
/// mix, nothing for a port without a role.
///
/// # Panics
///
/// Panics if `role` is not a known port role.
pub fn aidl2legacy_audio_port_config_mix_ext_usecase(
    aidl: &aidl::AudioPortConfigMixExtUseCase,
    role: aidl::AudioPortRole,
) -> ConversionResult<legacy::AudioPortConfigMixExtUsecase> {
    use aidl::AudioPortConfigMixExtUseCase as UseCase;
    let mut legacy = legacy::AudioPortConfigMixExtUsecase::default();
    match role {
        aidl::AudioPortRole::NONE => {
            union_get!(aidl, UseCase::Nothing)?;
        }
        aidl::AudioPortRole::SOURCE => {
            let stream = union_get!(aidl, UseCase::Stream)?;
            legacy.stream = aidl2legacy_audio_stream_type_audio_stream_type_t(*stream)?;
        }
        aidl::AudioPortRole::SINK => {
            let source = union_get!(aidl, UseCase::Source)?;
            legacy.source = aidl2legacy_audio_source_type_audio_source_t(*source)?;
        }
        _ => unreachable!("unknown port role {role}"),
    }
    Ok(legacy)
}

/// # Panics
///
/// Panics if `role` is not a known port role.
pub fn legacy2aidl_audio_port_config_mix_ext_usecase(
    legacy: &legacy::AudioPortConfigMixExtUsecase,
    role: legacy::AudioPortRole,
) -> ConversionResult<aidl::AudioPortConfigMixExtUseCase> {
    use aidl::AudioPortConfigMixExtUseCase as UseCase;
    Ok(match role {
        legacy::AUDIO_PORT_ROLE_NONE => UseCase::Nothing(false),
        legacy::AUDIO_PORT_ROLE_SOURCE => {
            UseCase::Stream(legacy2aidl_audio_stream_type_t_audio_stream_type(legacy.stream)?)
        }
        legacy::AUDIO_PORT_ROLE_SINK => {
            UseCase::Source(legacy2aidl_audio_source_t_audio_source_type(legacy.source)?)
        }
        _ => unreachable!("unknown port role {role}"),
    })
}

pub fn aidl2legacy_audio_port_config_mix_ext(
    aidl: &aidl::AudioPortConfigMixExt,
    role: aidl::AudioPortRole,
) -> ConversionResult<legacy::AudioPortConfigMixExt> {
    Ok(legacy::AudioPortConfigMixExt {
        hw_module: aidl2legacy_int32_t_audio_module_handle_t(aidl.hw_module)?,
        handle: aidl2legacy_int32_t_audio_io_handle_t(aidl.handle)?,
        usecase: aidl2legacy_audio_port_config_mix_ext_usecase(&aidl.usecase, role)?,
    })
}

pub fn legacy2aidl_audio_port_config_mix_ext(
    legacy: &legacy::AudioPortConfigMixExt,
    role: legacy::AudioPortRole,
) -> ConversionResult<aidl::AudioPortConfigMixExt> {
    Ok(aidl::AudioPortConfigMixExt {
        hw_module: legacy2aidl_audio_module_handle_t_int32_t(legacy.hw_module)?,
        handle: legacy2aidl_audio_io_handle_t_int32_t(legacy.handle)?,
        usecase: legacy2aidl_audio_port_config_mix_ext_usecase(&legacy.usecase, role)?,
    })
}

pub fn aidl2legacy_audio_port_config_session_ext(
    aidl: &aidl::AudioPortConfigSessionExt,
) -> ConversionResult<legacy::AudioPortConfigSessionExt> {
    Ok(legacy::AudioPortConfigSessionExt {
        session: aidl2legacy_int32_t_audio_session_t(aidl.session)?,
    })
}

pub fn legacy2aidl_audio_port_config_session_ext(
    legacy: &legacy::AudioPortConfigSessionExt,
) -> ConversionResult<aidl::AudioPortConfigSessionExt> {
    Ok(aidl::AudioPortConfigSessionExt {
        session: legacy2aidl_audio_session_t_int32_t(legacy.session)?,
    })
}

/// Type specific extension of a port configuration.
///
/// # Panics
///
/// Panics if `type_` is not a known port type, or if it is a mix and `role`
/// is not a known port role.
pub fn aidl2legacy_audio_port_config_ext(
    aidl: &aidl::AudioPortConfigExt,
    type_: aidl::AudioPortType,
    role: aidl::AudioPortRole,
) -> ConversionResult<legacy::AudioPortConfigExt> {
    use aidl::AudioPortConfigExt as Ext;
    let mut legacy = legacy::AudioPortConfigExt::default();
    match type_ {
        aidl::AudioPortType::NONE => {
            union_get!(aidl, Ext::Nothing)?;
        }
        aidl::AudioPortType::DEVICE => {
            legacy.device = aidl2legacy_audio_port_config_device_ext(union_get!(aidl, Ext::Device)?)?;
        }
        aidl::AudioPortType::MIX => {
            legacy.mix = aidl2legacy_audio_port_config_mix_ext(union_get!(aidl, Ext::Mix)?, role)?;
        }
        aidl::AudioPortType::SESSION => {
            legacy.session =
                aidl2legacy_audio_port_config_session_ext(union_get!(aidl, Ext::Session)?)?;
        }
        _ => unreachable!("unknown port type {type_}"),
    }
    Ok(legacy)
}

/// # Panics
///
/// Panics if `type_` is not a known port type, or if it is a mix and `role`
/// is not a known port role.
pub fn legacy2aidl_audio_port_config_ext(
    legacy: &legacy::AudioPortConfigExt,
    type_: legacy::AudioPortType,
    role: legacy::AudioPortRole,
) -> ConversionResult<aidl::AudioPortConfigExt> {
    use aidl::AudioPortConfigExt as Ext;
    Ok(match type_ {
        legacy::AUDIO_PORT_TYPE_NONE => Ext::Nothing(false),
        legacy::AUDIO_PORT_TYPE_DEVICE => {
            Ext::Device(legacy2aidl_audio_port_config_device_ext(&legacy.device)?)
        }
        legacy::AUDIO_PORT_TYPE_MIX => Ext::Mix(legacy2aidl_audio_port_config_mix_ext(&legacy.mix, role)?),
        legacy::AUDIO_PORT_TYPE_SESSION => {
            Ext::Session(legacy2aidl_audio_port_config_session_ext(&legacy.session)?)
        }
        _ => unreachable!("unknown port type {type_}"),
    })
}

/// Full port configuration.
///
/// Optional fields are converted only when their `config_mask` bit is set;
/// the extension is always converted. The direction needed by gain and flags
/// is derived once from the role and type and only required when one of
/// those two fields is present.
pub fn aidl2legacy_audio_port_config_audio_port_config(
    aidl: &aidl::AudioPortConfig,
) -> ConversionResult<legacy::AudioPortConfig> {
    use aidl::AudioPortConfigType as Field;
    let mut legacy = legacy::AudioPortConfig {
        id: aidl2legacy_int32_t_audio_port_handle_t(aidl.id)?,
        role: aidl2legacy_audio_port_role_audio_port_role_t(aidl.role)?,
        type_: aidl2legacy_audio_port_type_audio_port_type_t(aidl.r#type)?,
        config_mask: aidl2legacy_int32_t_config_mask(aidl.config_mask)?,
        ..Default::default()
    };
    let direction = Direction::of_aidl(aidl.role, aidl.r#type);
    if bitmask_is_set(aidl.config_mask, Field::SAMPLE_RATE) {
        legacy.sample_rate = convert_integral(aidl.sample_rate)?;
    }
    if bitmask_is_set(aidl.config_mask, Field::CHANNEL_MASK) {
        legacy.channel_mask = aidl2legacy_int32_t_audio_channel_mask_t(aidl.channel_mask)?;
    }
    if bitmask_is_set(aidl.config_mask, Field::FORMAT) {
        legacy.format = aidl2legacy_audio_format_audio_format_t(aidl.format)?;
    }
    if bitmask_is_set(aidl.config_mask, Field::GAIN) {
        legacy.gain = gain_config_to_legacy(&aidl.gain, direction?)?;
    }
    if bitmask_is_set(aidl.config_mask, Field::FLAGS) {
        legacy.flags = io_flags_to_legacy(&aidl.flags, direction?)?;
    }
    legacy.ext = aidl2legacy_audio_port_config_ext(&aidl.ext, aidl.r#type, aidl.role)?;
    trace!(
        id = legacy.id,
        role = legacy.role,
        port_type = legacy.type_,
        config_mask = legacy.config_mask.bits(),
        "port config to legacy"
    );
    Ok(legacy)
}

pub fn legacy2aidl_audio_port_config_audio_port_config(
    legacy: &legacy::AudioPortConfig,
) -> ConversionResult<aidl::AudioPortConfig> {
    use legacy::PortConfigMask as Field;
    let mut aidl = aidl::AudioPortConfig {
        id: legacy2aidl_audio_port_handle_t_int32_t(legacy.id)?,
        role: legacy2aidl_audio_port_role_t_audio_port_role(legacy.role)?,
        r#type: legacy2aidl_audio_port_type_t_audio_port_type(legacy.type_)?,
        config_mask: legacy2aidl_config_mask_int32_t(legacy.config_mask)?,
        ..Default::default()
    };
    let direction = Direction::of_legacy(legacy.role, legacy.type_);
    if legacy.config_mask.contains(Field::SAMPLE_RATE) {
        aidl.sample_rate = convert_integral(legacy.sample_rate)?;
    }
    if legacy.config_mask.contains(Field::CHANNEL_MASK) {
        aidl.channel_mask = legacy2aidl_audio_channel_mask_t_int32_t(legacy.channel_mask)?;
    }
    if legacy.config_mask.contains(Field::FORMAT) {
        aidl.format = legacy2aidl_audio_format_audio_format_t(legacy.format)?;
    }
    if legacy.config_mask.contains(Field::GAIN) {
        aidl.gain = gain_config_to_aidl(&legacy.gain, direction?)?;
    }
    if legacy.config_mask.contains(Field::FLAGS) {
        aidl.flags = io_flags_to_aidl(&legacy.flags, direction?)?;
    }
    aidl.ext = legacy2aidl_audio_port_config_ext(&legacy.ext, legacy.type_, legacy.role)?;
    trace!(
        id = aidl.id,
        role = %aidl.role,
        port_type = %aidl.r#type,
        config_mask = aidl.config_mask,
        "port config to aidl"
    );
    Ok(aidl)
}

#[cfg(test)]
mod tests {
    use super::*;
    use audio_legacy::channel::{AUDIO_CHANNEL_IN_STEREO, AUDIO_CHANNEL_OUT_5POINT1};
    use media_aidl::{AudioPortRole as Role, AudioPortType as Type};

    fn gain(mode: i32, channel_mask: u32, values: Vec<i32>) -> aidl::AudioGainConfig {
        aidl::AudioGainConfig {
            index: 1,
            mode,
            channel_mask: channel_mask as i32,
            values,
            ramp_duration_ms: 20,
        }
    }

    #[test]
    fn joint_gain_takes_one_value() {
        let joint = 1 << aidl::AudioGainMode::JOINT.raw();
        let config = gain(joint, AUDIO_CHANNEL_OUT_5POINT1, vec![-300]);
        let legacy =
            aidl2legacy_audio_gain_config_audio_gain_config(&config, Role::SINK, Type::DEVICE)
                .unwrap();
        assert_eq!(legacy.values[0], -300);
        assert!(legacy.values[1..].iter().all(|&v| v == 0));

        let two = gain(joint, AUDIO_CHANNEL_OUT_5POINT1, vec![1, 2]);
        assert_eq!(
            aidl2legacy_audio_gain_config_audio_gain_config(&two, Role::SINK, Type::DEVICE),
            Err(ConversionError::BadValue)
        );
    }

    #[test]
    fn per_channel_gain_counts_by_direction() {
        let channels = 1 << aidl::AudioGainMode::CHANNELS.raw();
        let config = gain(channels, AUDIO_CHANNEL_OUT_5POINT1, vec![0; 6]);
        // A sink device is an output: six positional output channels.
        let legacy =
            aidl2legacy_audio_gain_config_audio_gain_config(&config, Role::SINK, Type::DEVICE)
                .unwrap();
        let back = legacy2aidl_audio_gain_config_audio_gain_config(
            &legacy,
            legacy::AUDIO_PORT_ROLE_SINK,
            legacy::AUDIO_PORT_TYPE_DEVICE,
        )
        .unwrap();
        assert_eq!(back, config);

        // Read as a capture mask the same bits name four channels.
        assert_eq!(
            aidl2legacy_audio_gain_config_audio_gain_config(&config, Role::SOURCE, Type::DEVICE),
            Err(ConversionError::BadValue)
        );

        let input = gain(channels, AUDIO_CHANNEL_IN_STEREO, vec![5, 6]);
        assert!(
            aidl2legacy_audio_gain_config_audio_gain_config(&input, Role::SINK, Type::MIX).is_ok()
        );
    }

    #[test]
    fn gain_needs_a_direction() {
        let config = gain(1, AUDIO_CHANNEL_OUT_5POINT1, vec![0]);
        assert_eq!(
            aidl2legacy_audio_gain_config_audio_gain_config(&config, Role::NONE, Type::DEVICE),
            Err(ConversionError::BadValue)
        );
    }

    #[test]
    fn negative_ramp_is_rejected() {
        let mut config = gain(1, AUDIO_CHANNEL_OUT_5POINT1, vec![0]);
        config.ramp_duration_ms = -1;
        assert_eq!(
            aidl2legacy_audio_gain_config_audio_gain_config(&config, Role::SINK, Type::DEVICE),
            Err(ConversionError::BadValue)
        );
    }

    #[test]
    fn io_flags_variant_must_match_direction() {
        let flags = aidl::AudioIoFlags::Output(1 << aidl::AudioOutputFlags::FAST.raw());
        let legacy =
            aidl2legacy_audio_io_flags_audio_io_flags(&flags, Role::SOURCE, Type::MIX).unwrap();
        assert_eq!(legacy.output, legacy::AudioOutputFlags::FAST);
        assert!(legacy.input.is_empty());
        assert_eq!(
            aidl2legacy_audio_io_flags_audio_io_flags(&flags, Role::SINK, Type::MIX),
            Err(ConversionError::BadValue)
        );
        assert_eq!(
            legacy2aidl_audio_io_flags_audio_io_flags(
                &legacy,
                legacy::AUDIO_PORT_ROLE_SOURCE,
                legacy::AUDIO_PORT_TYPE_MIX
            ),
            Ok(flags)
        );
    }

    #[test]
    fn device_address_must_fit() {
        let mut ext = aidl::AudioPortConfigDeviceExt {
            hw_module: 10,
            r#type: 0x2,
            address: "bus0_media_out".into(),
        };
        let legacy = aidl2legacy_audio_port_config_device_ext(&ext).unwrap();
        assert_eq!(&legacy.address[..15], b"bus0_media_out\0");
        assert_eq!(legacy2aidl_audio_port_config_device_ext(&legacy), Ok(ext.clone()));

        ext.address = "x".repeat(legacy::AUDIO_DEVICE_MAX_ADDRESS_LEN);
        assert_eq!(
            aidl2legacy_audio_port_config_device_ext(&ext),
            Err(ConversionError::BadValue)
        );
    }

    #[test]
    fn unterminated_legacy_address_fails() {
        let legacy = legacy::AudioPortConfigDeviceExt {
            address: [b'a'; legacy::AUDIO_DEVICE_MAX_ADDRESS_LEN],
            ..Default::default()
        };
        assert_eq!(
            legacy2aidl_audio_port_config_device_ext(&legacy),
            Err(ConversionError::BadValue)
        );
    }

    #[test]
    fn usecase_follows_role() {
        use aidl::AudioPortConfigMixExtUseCase as UseCase;
        let stream = UseCase::Stream(aidl::AudioStreamType::MUSIC);
        let legacy = aidl2legacy_audio_port_config_mix_ext_usecase(&stream, Role::SOURCE).unwrap();
        assert_eq!(legacy.stream, legacy::AUDIO_STREAM_MUSIC);
        assert_eq!(
            aidl2legacy_audio_port_config_mix_ext_usecase(&stream, Role::SINK),
            Err(ConversionError::BadValue)
        );

        let source = UseCase::Source(aidl::AudioSourceType::MIC);
        let legacy = aidl2legacy_audio_port_config_mix_ext_usecase(&source, Role::SINK).unwrap();
        assert_eq!(legacy.source, legacy::AUDIO_SOURCE_MIC);

        assert!(aidl2legacy_audio_port_config_mix_ext_usecase(&UseCase::Nothing(true), Role::NONE)
            .is_ok());
        assert_eq!(
            legacy2aidl_audio_port_config_mix_ext_usecase(&legacy, legacy::AUDIO_PORT_ROLE_NONE),
            Ok(UseCase::Nothing(false))
        );
    }

    #[test]
    #[should_panic(expected = "unknown port role")]
    fn unknown_role_in_usecase_is_a_bug() {
        let _ = aidl2legacy_audio_port_config_mix_ext_usecase(
            &aidl::AudioPortConfigMixExtUseCase::Nothing(false),
            Role(42),
        );
    }

    #[test]
    fn ext_tag_must_match_type() {
        let session = aidl::AudioPortConfigExt::Session(aidl::AudioPortConfigSessionExt { session: 9 });
        let legacy = aidl2legacy_audio_port_config_ext(&session, Type::SESSION, Role::NONE).unwrap();
        assert_eq!(legacy.session.session, 9);
        assert_eq!(
            aidl2legacy_audio_port_config_ext(&session, Type::DEVICE, Role::SINK),
            Err(ConversionError::BadValue)
        );
        assert_eq!(
            aidl2legacy_audio_port_config_ext(&session, Type::NONE, Role::NONE),
            Err(ConversionError::BadValue)
        );
    }

    #[test]
    fn gated_fields_are_skipped_when_mask_is_clear() {
        let aidl = aidl::AudioPortConfig {
            id: 3,
            role: Role::SINK,
            r#type: Type::DEVICE,
            config_mask: 0,
            // Would fail every check if it were converted.
            sample_rate: -1,
            gain: gain(0, 0, vec![1, 2, 3]),
            flags: aidl::AudioIoFlags::Input(1 << 31),
            ext: aidl::AudioPortConfigExt::Device(Default::default()),
            ..Default::default()
        };
        let legacy = aidl2legacy_audio_port_config_audio_port_config(&aidl).unwrap();
        assert_eq!(legacy.sample_rate, 0);
        assert_eq!(legacy.gain, legacy::AudioGainConfig::default());
        assert!(legacy.config_mask.is_empty());
    }
}
