//! Patch, stream and client descriptor conversions.

use std::sync::Arc;

use audio_legacy as legacy;
use media_aidl as aidl;
use tracing::trace;

use crate::enums::{
    aidl2legacy_audio_content_type_audio_content_type_t,
    aidl2legacy_audio_encapsulation_mode_audio_encapsulation_mode_t,
    aidl2legacy_audio_source_type_audio_source_t, aidl2legacy_audio_stream_type_audio_stream_type_t,
    aidl2legacy_audio_usage_audio_usage_t, aidl2legacy_int32_t_audio_flags_mask_t_mask,
    legacy2aidl_audio_content_type_t_audio_content_type,
    legacy2aidl_audio_encapsulation_mode_t_audio_encapsulation_mode,
    legacy2aidl_audio_flags_mask_t_int32_t_mask, legacy2aidl_audio_source_t_audio_source_type,
    legacy2aidl_audio_stream_type_t_audio_stream_type, legacy2aidl_audio_usage_t_audio_usage,
};
use crate::error::{ConversionError, ConversionResult};
use crate::port::{
    aidl2legacy_audio_port_config_audio_port_config,
    legacy2aidl_audio_port_config_audio_port_config,
};
use crate::scalar::{
    aidl2legacy_audio_format_audio_format_t, aidl2legacy_int32_t_audio_channel_mask_t,
    aidl2legacy_int32_t_audio_io_handle_t, aidl2legacy_int32_t_audio_patch_handle_t,
    aidl2legacy_int32_t_audio_port_handle_t, aidl2legacy_int32_t_pid_t,
    aidl2legacy_int32_t_uid_t, aidl2legacy_string, aidl2legacy_string_view_string16,
    convert_integral, convert_reinterpret, legacy2aidl_audio_channel_mask_t_int32_t,
    legacy2aidl_audio_format_audio_format_t, legacy2aidl_audio_io_handle_t_int32_t,
    legacy2aidl_audio_patch_handle_t_int32_t, legacy2aidl_audio_port_handle_t_int32_t,
    legacy2aidl_pid_t_int32_t, legacy2aidl_string, legacy2aidl_string16_string,
    legacy2aidl_uid_t_int32_t,
};

/// Copy wire port configurations into a fixed-capacity native array.
fn port_configs_to_legacy(
    aidl: &[aidl::AudioPortConfig],
    dest: &mut [legacy::AudioPortConfig; legacy::AUDIO_PATCH_PORTS_MAX],
) -> ConversionResult<u32> {
    if aidl.len() > dest.len() {
        return Err(ConversionError::BadValue);
    }
    for (slot, port) in dest.iter_mut().zip(aidl) {
        *slot = aidl2legacy_audio_port_config_audio_port_config(port)?;
    }
    convert_integral(aidl.len())
}

fn port_configs_to_aidl(
    legacy: &[legacy::AudioPortConfig; legacy::AUDIO_PATCH_PORTS_MAX],
    count: u32,
) -> ConversionResult<Vec<aidl::AudioPortConfig>> {
    let count: usize = convert_integral(count)?;
    legacy
        .get(..count)
        .ok_or(ConversionError::BadValue)?
        .iter()
        .map(legacy2aidl_audio_port_config_audio_port_config)
        .collect()
}

/// Patch with at most [`legacy::AUDIO_PATCH_PORTS_MAX`] sinks and sources.
pub fn aidl2legacy_audio_patch_audio_patch(
    aidl: &aidl::AudioPatch,
) -> ConversionResult<legacy::AudioPatch> {
    let mut legacy = legacy::AudioPatch {
        id: aidl2legacy_int32_t_audio_patch_handle_t(aidl.id)?,
        ..Default::default()
    };
    legacy.num_sinks = port_configs_to_legacy(&aidl.sinks, &mut legacy.sinks)?;
    legacy.num_sources = port_configs_to_legacy(&aidl.sources, &mut legacy.sources)?;
    trace!(
        id = legacy.id,
        sinks = legacy.num_sinks,
        sources = legacy.num_sources,
        "patch to legacy"
    );
    Ok(legacy)
}

pub fn legacy2aidl_audio_patch_audio_patch(
    legacy: &legacy::AudioPatch,
) -> ConversionResult<aidl::AudioPatch> {
    let aidl = aidl::AudioPatch {
        id: legacy2aidl_audio_patch_handle_t_int32_t(legacy.id)?,
        sinks: port_configs_to_aidl(&legacy.sinks, legacy.num_sinks)?,
        sources: port_configs_to_aidl(&legacy.sources, legacy.num_sources)?,
    };
    trace!(
        id = aidl.id,
        sinks = aidl.sinks.len(),
        sources = aidl.sources.len(),
        "patch to aidl"
    );
    Ok(aidl)
}

/// Stream descriptor handed to I/O configuration listeners. The result is
/// shared, since listeners keep it past the notification.
pub fn aidl2legacy_audio_io_descriptor_audio_io_descriptor(
    aidl: &aidl::AudioIoDescriptor,
) -> ConversionResult<Arc<legacy::AudioIoDescriptor>> {
    let legacy = legacy::AudioIoDescriptor {
        io_handle: aidl2legacy_int32_t_audio_io_handle_t(aidl.io_handle)?,
        patch: aidl2legacy_audio_patch_audio_patch(&aidl.patch)?,
        sampling_rate: convert_integral(aidl.sampling_rate)?,
        format: aidl2legacy_audio_format_audio_format_t(aidl.format)?,
        channel_mask: aidl2legacy_int32_t_audio_channel_mask_t(aidl.channel_mask)?,
        frame_count: convert_integral(aidl.frame_count)?,
        frame_count_hal: convert_integral(aidl.frame_count_hal)?,
        latency: convert_integral(aidl.latency)?,
        port_id: aidl2legacy_int32_t_audio_port_handle_t(aidl.port_id)?,
    };
    trace!(io_handle = legacy.io_handle, "io descriptor to legacy");
    Ok(Arc::new(legacy))
}

pub fn legacy2aidl_audio_io_descriptor_audio_io_descriptor(
    legacy: &Arc<legacy::AudioIoDescriptor>,
) -> ConversionResult<aidl::AudioIoDescriptor> {
    let aidl = aidl::AudioIoDescriptor {
        io_handle: legacy2aidl_audio_io_handle_t_int32_t(legacy.io_handle)?,
        patch: legacy2aidl_audio_patch_audio_patch(&legacy.patch)?,
        sampling_rate: convert_integral(legacy.sampling_rate)?,
        format: legacy2aidl_audio_format_audio_format_t(legacy.format)?,
        channel_mask: legacy2aidl_audio_channel_mask_t_int32_t(legacy.channel_mask)?,
        frame_count: convert_integral(legacy.frame_count)?,
        frame_count_hal: convert_integral(legacy.frame_count_hal)?,
        latency: convert_integral(legacy.latency)?,
        port_id: legacy2aidl_audio_port_handle_t_int32_t(legacy.port_id)?,
    };
    trace!(io_handle = aidl.io_handle, "io descriptor to aidl");
    Ok(aidl)
}

pub fn aidl2legacy_audio_client_audio_client(
    aidl: &aidl::AudioClient,
) -> ConversionResult<legacy::AudioClient> {
    Ok(legacy::AudioClient {
        client_uid: aidl2legacy_int32_t_uid_t(aidl.client_uid)?,
        client_pid: aidl2legacy_int32_t_pid_t(aidl.client_pid)?,
        client_tid: aidl2legacy_int32_t_pid_t(aidl.client_tid)?,
        package_name: aidl2legacy_string_view_string16(&aidl.package_name)?,
    })
}

pub fn legacy2aidl_audio_client_audio_client(
    legacy: &legacy::AudioClient,
) -> ConversionResult<aidl::AudioClient> {
    Ok(aidl::AudioClient {
        client_uid: legacy2aidl_uid_t_int32_t(legacy.client_uid)?,
        client_pid: legacy2aidl_pid_t_int32_t(legacy.client_pid)?,
        client_tid: legacy2aidl_pid_t_int32_t(legacy.client_tid)?,
        package_name: legacy2aidl_string16_string(&legacy.package_name)?,
    })
}

/// Attributes; the tags must fit the native tag buffer with its terminator.
pub fn aidl2legacy_audio_attributes_internal_audio_attributes_t(
    aidl: &aidl::AudioAttributesInternal,
) -> ConversionResult<legacy::AudioAttributes> {
    let mut legacy = legacy::AudioAttributes {
        content_type: aidl2legacy_audio_content_type_audio_content_type_t(aidl.content_type)?,
        usage: aidl2legacy_audio_usage_audio_usage_t(aidl.usage)?,
        source: aidl2legacy_audio_source_type_audio_source_t(aidl.source)?,
        flags: aidl2legacy_int32_t_audio_flags_mask_t_mask(aidl.flags)?,
        ..Default::default()
    };
    aidl2legacy_string(&aidl.tags, &mut legacy.tags)?;
    trace!(
        usage = legacy.usage,
        flags = legacy.flags.bits(),
        "attributes to legacy"
    );
    Ok(legacy)
}

pub fn legacy2aidl_audio_attributes_t_audio_attributes_internal(
    legacy: &legacy::AudioAttributes,
) -> ConversionResult<aidl::AudioAttributesInternal> {
    Ok(aidl::AudioAttributesInternal {
        content_type: legacy2aidl_audio_content_type_t_audio_content_type(legacy.content_type)?,
        usage: legacy2aidl_audio_usage_t_audio_usage(legacy.usage)?,
        source: legacy2aidl_audio_source_t_audio_source_type(legacy.source)?,
        flags: legacy2aidl_audio_flags_mask_t_int32_t_mask(legacy.flags)?,
        tags: legacy2aidl_string(&legacy.tags)?,
    })
}

pub fn aidl2legacy_audio_config_base_audio_config_base_t(
    aidl: &aidl::AudioConfigBase,
) -> ConversionResult<legacy::AudioConfigBase> {
    Ok(legacy::AudioConfigBase {
        sample_rate: convert_integral(aidl.sample_rate)?,
        channel_mask: aidl2legacy_int32_t_audio_channel_mask_t(aidl.channel_mask)?,
        format: aidl2legacy_audio_format_audio_format_t(aidl.format)?,
    })
}

pub fn legacy2aidl_audio_config_base_t_audio_config_base(
    legacy: &legacy::AudioConfigBase,
) -> ConversionResult<aidl::AudioConfigBase> {
    Ok(aidl::AudioConfigBase {
        sample_rate: convert_integral(legacy.sample_rate)?,
        channel_mask: legacy2aidl_audio_channel_mask_t_int32_t(legacy.channel_mask)?,
        format: legacy2aidl_audio_format_audio_format_t(legacy.format)?,
    })
}

/// Offload parameters. The native struct is always produced at the current
/// version and full size.
pub fn aidl2legacy_audio_offload_info_audio_offload_info_t(
    aidl: &aidl::AudioOffloadInfo,
) -> ConversionResult<legacy::AudioOffloadInfo> {
    let base = aidl2legacy_audio_config_base_audio_config_base_t(&aidl.config)?;
    let legacy = legacy::AudioOffloadInfo {
        version: convert_integral(aidl.version)?,
        size: legacy::AudioOffloadInfo::FULL_SIZE,
        sample_rate: base.sample_rate,
        channel_mask: base.channel_mask,
        format: base.format,
        stream_type: aidl2legacy_audio_stream_type_audio_stream_type_t(aidl.stream_type)?,
        bit_rate: convert_integral(aidl.bit_rate)?,
        duration_us: convert_integral(aidl.duration_us)?,
        has_video: aidl.has_video,
        is_streaming: aidl.is_streaming,
        bit_width: convert_integral(aidl.bit_width)?,
        offload_buffer_size: convert_integral(aidl.offload_buffer_size)?,
        usage: aidl2legacy_audio_usage_audio_usage_t(aidl.usage)?,
        encapsulation_mode: aidl2legacy_audio_encapsulation_mode_audio_encapsulation_mode_t(
            aidl.encapsulation_mode,
        )?,
        content_id: convert_reinterpret(aidl.content_id),
        sync_id: convert_reinterpret(aidl.sync_id),
    };
    trace!(
        version = legacy.version,
        format = legacy.format,
        "offload info to legacy"
    );
    Ok(legacy)
}

/// Offload parameters, reading only what the producer's `size` covers.
///
/// The version 0.1 fields are mandatory. The version 0.2 fields are read
/// when `version` announces them, and must then be covered as well.
pub fn legacy2aidl_audio_offload_info_t_audio_offload_info(
    legacy: &legacy::AudioOffloadInfo,
) -> ConversionResult<aidl::AudioOffloadInfo> {
    let size = usize::from(legacy.size);
    if size < legacy::AudioOffloadInfo::SIZE_V0_1 {
        return Err(ConversionError::BadValue);
    }
    let mut aidl = aidl::AudioOffloadInfo {
        version: convert_integral(legacy.version)?,
        config: aidl::AudioConfigBase {
            sample_rate: convert_integral(legacy.sample_rate)?,
            channel_mask: legacy2aidl_audio_channel_mask_t_int32_t(legacy.channel_mask)?,
            format: legacy2aidl_audio_format_audio_format_t(legacy.format)?,
        },
        stream_type: legacy2aidl_audio_stream_type_t_audio_stream_type(legacy.stream_type)?,
        bit_rate: convert_integral(legacy.bit_rate)?,
        duration_us: convert_integral(legacy.duration_us)?,
        has_video: legacy.has_video,
        is_streaming: legacy.is_streaming,
        bit_width: convert_integral(legacy.bit_width)?,
        offload_buffer_size: convert_integral(legacy.offload_buffer_size)?,
        usage: legacy2aidl_audio_usage_t_audio_usage(legacy.usage)?,
        ..Default::default()
    };
    if legacy.version >= legacy::AUDIO_OFFLOAD_INFO_VERSION_0_2 {
        if size < legacy::AudioOffloadInfo::SIZE_V0_2 {
            return Err(ConversionError::BadValue);
        }
        aidl.encapsulation_mode =
            legacy2aidl_audio_encapsulation_mode_t_audio_encapsulation_mode(
                legacy.encapsulation_mode,
            )?;
        aidl.content_id = convert_reinterpret(legacy.content_id);
        aidl.sync_id = convert_reinterpret(legacy.sync_id);
    }
    trace!(version = aidl.version, size, "offload info to aidl");
    Ok(aidl)
}

pub fn aidl2legacy_audio_config_audio_config_t(
    aidl: &aidl::AudioConfig,
) -> ConversionResult<legacy::AudioConfig> {
    let frame_count: u32 = convert_integral(aidl.frame_count)?;
    Ok(legacy::AudioConfig {
        sample_rate: convert_integral(aidl.sample_rate)?,
        channel_mask: aidl2legacy_int32_t_audio_channel_mask_t(aidl.channel_mask)?,
        format: aidl2legacy_audio_format_audio_format_t(aidl.format)?,
        offload_info: aidl2legacy_audio_offload_info_audio_offload_info_t(&aidl.offload_info)?,
        frame_count: convert_integral(frame_count)?,
    })
}

pub fn legacy2aidl_audio_config_t_audio_config(
    legacy: &legacy::AudioConfig,
) -> ConversionResult<aidl::AudioConfig> {
    Ok(aidl::AudioConfig {
        sample_rate: convert_integral(legacy.sample_rate)?,
        channel_mask: legacy2aidl_audio_channel_mask_t_int32_t(legacy.channel_mask)?,
        format: legacy2aidl_audio_format_audio_format_t(legacy.format)?,
        offload_info: legacy2aidl_audio_offload_info_t_audio_offload_info(&legacy.offload_info)?,
        frame_count: convert_integral(legacy.frame_count)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offload() -> aidl::AudioOffloadInfo {
        aidl::AudioOffloadInfo {
            version: i32::from(legacy::AUDIO_OFFLOAD_INFO_VERSION_0_2),
            config: aidl::AudioConfigBase {
                sample_rate: 44_100,
                channel_mask: 0x3,
                format: aidl::AudioFormat::MP3,
            },
            stream_type: aidl::AudioStreamType::MUSIC,
            bit_rate: 320_000,
            duration_us: 180_000_000,
            has_video: false,
            is_streaming: true,
            bit_width: 16,
            offload_buffer_size: 32_768,
            usage: aidl::AudioUsage::MEDIA,
            encapsulation_mode: aidl::AudioEncapsulationMode::ELEMENTARY_STREAM,
            content_id: 7,
            sync_id: -3,
        }
    }

    #[test]
    fn offload_info_round_trip() {
        let info = offload();
        let legacy = aidl2legacy_audio_offload_info_audio_offload_info_t(&info).unwrap();
        assert_eq!(legacy.size, legacy::AudioOffloadInfo::FULL_SIZE);
        assert_eq!(legacy.format, 0x0100_0000);
        assert_eq!(legacy2aidl_audio_offload_info_t_audio_offload_info(&legacy), Ok(info));
    }

    #[test]
    fn offload_version_out_of_range() {
        let mut info = offload();
        info.version = 0x1_0000;
        assert_eq!(
            aidl2legacy_audio_offload_info_audio_offload_info_t(&info),
            Err(ConversionError::BadValue)
        );
    }

    #[test]
    fn frame_count_is_bounded_by_u32() {
        let config = aidl::AudioConfig {
            frame_count: i64::from(u32::MAX) + 1,
            offload_info: offload(),
            ..Default::default()
        };
        assert_eq!(
            aidl2legacy_audio_config_audio_config_t(&config),
            Err(ConversionError::BadValue)
        );
    }

    #[test]
    fn patch_count_beyond_capacity_fails_on_read() {
        let legacy = legacy::AudioPatch {
            num_sources: legacy::AUDIO_PATCH_PORTS_MAX as u32 + 1,
            ..Default::default()
        };
        assert_eq!(
            legacy2aidl_audio_patch_audio_patch(&legacy),
            Err(ConversionError::BadValue)
        );
    }

    #[test]
    fn client_identity_round_trip() {
        let client = aidl::AudioClient {
            client_uid: 10_123,
            client_pid: 4_321,
            client_tid: 4_322,
            package_name: "com.example.player".into(),
        };
        let legacy = aidl2legacy_audio_client_audio_client(&client).unwrap();
        assert_eq!(legacy.client_uid, 10_123);
        assert_eq!(legacy.package_name.len(), "com.example.player".len());
        assert_eq!(legacy2aidl_audio_client_audio_client(&legacy), Ok(client));
    }
}
