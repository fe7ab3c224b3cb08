//! Header storage helpers.
//!
//! Headers live in an [`http::HeaderMap`], which already gives us
//! case-insensitive names and multiple values per name in insertion order.
//! This module only adds the conversion layer on top: callers hand in plain
//! strings (one or many values per name) and get back validated
//! `HeaderName`/`HeaderValue` pairs or a [`MessageError`].
//!
//! ## Normalisation
//! - Names are validated by `http` and stored lowercased.
//! - Values are trimmed of leading/trailing spaces and tabs before validation.
//! - Values are read back as lossy UTF-8, so non-ASCII values round-trip.
use std::borrow::Cow;

use http::header::{HeaderMap, HeaderName, HeaderValue};

use crate::errors::MessageError;

/// One or more values for a single header name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderValues(pub Vec<String>);

impl HeaderValues {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<&str> for HeaderValues {
    fn from(v: &str) -> Self {
        HeaderValues(vec![v.to_string()])
    }
}

impl From<String> for HeaderValues {
    fn from(v: String) -> Self {
        HeaderValues(vec![v])
    }
}

impl From<Vec<String>> for HeaderValues {
    fn from(v: Vec<String>) -> Self {
        HeaderValues(v)
    }
}

impl From<Vec<&str>> for HeaderValues {
    fn from(v: Vec<&str>) -> Self {
        HeaderValues(v.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for HeaderValues {
    fn from(v: [&str; N]) -> Self {
        HeaderValues(v.iter().map(|s| s.to_string()).collect())
    }
}

pub(crate) fn parse_name(name: &str) -> Result<HeaderName, MessageError> {
    HeaderName::from_bytes(name.as_bytes())
        .map_err(|_| MessageError::InvalidHeaderName(name.to_string()))
}

pub(crate) fn parse_value(name: &str, value: &str) -> Result<HeaderValue, MessageError> {
    let trimmed = value.trim_matches(|c: char| c == ' ' || c == '\t');
    HeaderValue::from_str(trimmed).map_err(|_| MessageError::InvalidHeaderValue {
        name: name.to_string(),
        value: value.to_string(),
    })
}

/// Replaces all values of `name` in `map`.
pub(crate) fn set(
    map: &mut HeaderMap,
    name: &str,
    values: &HeaderValues,
) -> Result<(), MessageError> {
    let header_name = parse_name(name)?;
    let parsed = values
        .iter()
        .map(|v| parse_value(name, v))
        .collect::<Result<Vec<_>, _>>()?;

    map.remove(&header_name);
    for value in parsed {
        map.append(header_name.clone(), value);
    }
    Ok(())
}

/// Appends values to `name` in `map`, keeping the existing ones.
pub(crate) fn append(
    map: &mut HeaderMap,
    name: &str,
    values: &HeaderValues,
) -> Result<(), MessageError> {
    let header_name = parse_name(name)?;
    for v in values.iter() {
        let value = parse_value(name, v)?;
        map.append(header_name.clone(), value);
    }
    Ok(())
}

/// `true` when `name` has at least one value. Invalid names are never present.
pub(crate) fn contains(map: &HeaderMap, name: &str) -> bool {
    parse_name(name).is_ok_and(|n| map.contains_key(n))
}

/// All values of `name` in insertion order, decoded as lossy UTF-8.
pub(crate) fn values<'a>(map: &'a HeaderMap, name: &str) -> Vec<Cow<'a, str>> {
    match parse_name(name) {
        Ok(n) => map
            .get_all(n)
            .iter()
            .map(|v| String::from_utf8_lossy(v.as_bytes()))
            .collect(),
        Err(_) => Vec::new(),
    }
}
