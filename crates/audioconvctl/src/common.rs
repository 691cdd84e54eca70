use std::fs;
use std::io::{self, Read};
use std::path::Path;

use aidl_conversion::ConversionError;
use anyhow::{anyhow, Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Read a whole document from `path`, or from stdin when it is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("read document from stdin")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

pub fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T> {
    serde_json::from_str(text).context("parse wire JSON document")
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("serialise JSON output")?;
    println!("{text}");
    Ok(())
}

/// Parse a mask given in decimal or with a `0x`/`0b` prefix.
pub fn parse_mask(text: &str) -> Result<u32> {
    let text = text.trim();
    let parsed = if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        u32::from_str_radix(&hex.replace('_', ""), 16)
    } else if let Some(bin) = text.strip_prefix("0b") {
        u32::from_str_radix(&bin.replace('_', ""), 2)
    } else if let Some(negative) = text.strip_prefix('-') {
        // Wire masks are signed; accept their two's complement form.
        negative
            .parse::<u32>()
            .map(|magnitude| (magnitude as i32).wrapping_neg() as u32)
    } else {
        text.parse::<u32>()
    };
    parsed.map_err(|err| anyhow!("invalid mask {text:?}: {err}"))
}

/// Attach the native status code to a conversion failure.
pub fn conversion_failed(what: &str) -> impl FnOnce(ConversionError) -> anyhow::Error + '_ {
    move |err| anyhow!("{what}: {err} (status {})", err.status())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_in_any_radix() {
        assert_eq!(parse_mask("17").expect("dec"), 17);
        assert_eq!(parse_mask("0x1_0000").expect("hex"), 0x1_0000);
        assert_eq!(parse_mask("0b101").expect("bin"), 5);
        assert_eq!(parse_mask("-1").expect("neg"), u32::MAX);
        assert!(parse_mask("0xZZ").is_err());
    }

    #[test]
    fn conversion_errors_carry_status() {
        let err = conversion_failed("convert patch")(ConversionError::BadValue);
        assert_eq!(err.to_string(), "convert patch: bad value (status -22)");
    }
}
