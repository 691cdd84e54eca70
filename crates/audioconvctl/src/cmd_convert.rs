use std::fmt::Debug;
use std::path::Path;

use aidl_conversion::ConversionResult;
use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use crate::common;

/// Converter pair of one descriptor kind.
pub struct Descriptor<W, L> {
    pub name: &'static str,
    pub to_legacy: fn(&W) -> ConversionResult<L>,
    pub to_aidl: fn(&L) -> ConversionResult<W>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a, W> {
    descriptor: &'a str,
    legacy: String,
    wire: &'a W,
    round_trip: bool,
}

/// Parse a wire document, convert it to the native form and back.
pub fn run<W, L>(descriptor: Descriptor<W, L>, input: &Path, json: bool) -> Result<()>
where
    W: DeserializeOwned + Serialize + PartialEq,
    L: Debug,
{
    let text = common::read_input(input)?;
    let wire: W = common::parse_json(&text)?;
    debug!(descriptor = descriptor.name, bytes = text.len(), "parsed wire document");

    let legacy = (descriptor.to_legacy)(&wire)
        .map_err(common::conversion_failed("convert to legacy"))?;
    let back = (descriptor.to_aidl)(&legacy)
        .map_err(common::conversion_failed("convert back to aidl"))?;
    let round_trip = back == wire;
    info!(descriptor = descriptor.name, round_trip, "converted");

    if json {
        let report = Report {
            descriptor: descriptor.name,
            legacy: format!("{legacy:?}"),
            wire: &back,
            round_trip,
        };
        common::print_json(&report)?;
    } else {
        println!("{legacy:#?}");
        common::print_json(&back)?;
        println!("round-trip: {}", if round_trip { "ok" } else { "changed" });
    }
    Ok(())
}
