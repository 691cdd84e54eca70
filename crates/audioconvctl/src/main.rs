use std::path::PathBuf;

use aidl_conversion as conv;
use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd_convert;
mod cmd_mask;
mod common;

use cmd_convert::Descriptor;
use cmd_mask::MaskKind;

#[derive(Parser, Debug)]
#[command(
    name = "audioconvctl",
    version,
    about = "Convert audio descriptors between AIDL and native form"
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Output a JSON report instead of text
    #[arg(long)]
    json: bool,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Round-trip an AudioPortConfig document
    PortConfig {
        #[arg(default_value = "-")]
        input: PathBuf,
    },
    /// Round-trip an AudioPatch document
    Patch {
        #[arg(default_value = "-")]
        input: PathBuf,
    },
    /// Round-trip an AudioIoDescriptor document
    IoDescriptor {
        #[arg(default_value = "-")]
        input: PathBuf,
    },
    /// Round-trip an AudioAttributesInternal document
    Attributes {
        #[arg(default_value = "-")]
        input: PathBuf,
    },
    /// Round-trip an AudioOffloadInfo document
    Offload {
        #[arg(default_value = "-")]
        input: PathBuf,
    },
    /// Round-trip an AudioConfig document
    Config {
        #[arg(default_value = "-")]
        input: PathBuf,
    },
    /// Transcode a raw bitmask (wire to native unless --to-wire)
    Mask {
        #[arg(value_enum)]
        kind: MaskKind,
        value: String,
        #[arg(long)]
        to_wire: bool,
    },
}

fn main() -> Result<()> {
    let Cli { verbose, json, cmd } = Cli::parse();

    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| level.into()),
        ))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cmd {
        Cmd::PortConfig { input } => cmd_convert::run(
            Descriptor {
                name: "port-config",
                to_legacy: conv::aidl2legacy_audio_port_config_audio_port_config,
                to_aidl: conv::legacy2aidl_audio_port_config_audio_port_config,
            },
            &input,
            json,
        )?,
        Cmd::Patch { input } => cmd_convert::run(
            Descriptor {
                name: "patch",
                to_legacy: conv::aidl2legacy_audio_patch_audio_patch,
                to_aidl: conv::legacy2aidl_audio_patch_audio_patch,
            },
            &input,
            json,
        )?,
        Cmd::IoDescriptor { input } => cmd_convert::run(
            Descriptor {
                name: "io-descriptor",
                to_legacy: conv::aidl2legacy_audio_io_descriptor_audio_io_descriptor,
                to_aidl: conv::legacy2aidl_audio_io_descriptor_audio_io_descriptor,
            },
            &input,
            json,
        )?,
        Cmd::Attributes { input } => cmd_convert::run(
            Descriptor {
                name: "attributes",
                to_legacy: conv::aidl2legacy_audio_attributes_internal_audio_attributes_t,
                to_aidl: conv::legacy2aidl_audio_attributes_t_audio_attributes_internal,
            },
            &input,
            json,
        )?,
        Cmd::Offload { input } => cmd_convert::run(
            Descriptor {
                name: "offload",
                to_legacy: conv::aidl2legacy_audio_offload_info_audio_offload_info_t,
                to_aidl: conv::legacy2aidl_audio_offload_info_t_audio_offload_info,
            },
            &input,
            json,
        )?,
        Cmd::Config { input } => cmd_convert::run(
            Descriptor {
                name: "config",
                to_legacy: conv::aidl2legacy_audio_config_audio_config_t,
                to_aidl: conv::legacy2aidl_audio_config_t_audio_config,
            },
            &input,
            json,
        )?,
        Cmd::Mask {
            kind,
            value,
            to_wire,
        } => cmd_mask::run(kind, &value, to_wire, json)?,
    };

    Ok(())
}
