use std::str::FromStr;

use http::{HeaderName, HeaderValue};
use timber::{Level, LEVELS};

/// Parses `Name: value` (or `Name=value`) into a header pair
pub fn parse_header(raw: &str) -> Result<(HeaderName, HeaderValue), String> {
    let (name, value) = raw
        .split_once(':')
        .or_else(|| raw.split_once('='))
        .ok_or_else(|| format!("expected `Name: value`, found `{raw}`"))?;
    let name = HeaderName::from_str(name.trim())
        .map_err(|err| format!("invalid header name `{}`: {err}", name.trim()))?;
    let value = HeaderValue::from_str(value.trim())
        .map_err(|err| format!("invalid value for header `{name}`: {err}"))?;
    Ok((name, value))
}

/// Parses one of [`LEVELS`], ignoring case
pub fn parse_level(raw: &str) -> Result<Level, String> {
    Level::from_str(&raw.to_lowercase())
        .map_err(|_| format!("expected one of {}, found `{raw}`", LEVELS.join(", ")))
}
