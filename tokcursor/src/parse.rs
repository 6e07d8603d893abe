//! Plaintext token parsing.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{CursorError, CursorResult};

/// Separates `key:value` segments inside a token.
pub const SEGMENT_DELIMITER: char = ',';
/// Separates a key from its value inside a segment.
pub const PAIR_DELIMITER: char = ':';
/// Removed from the whole payload before splitting.
pub const STRIPPED: char = ' ';

/// Constraints carried by a cursor. Iteration order is unspecified; use
/// [`crate::canonical`] for anything observable.
pub type KeyValues = HashMap<String, String>;

/// Parse a plaintext payload into its key/value mapping.
///
/// All space characters are removed first, including those inside a key or
/// value (`va lue` becomes `value`). An empty payload is an empty mapping.
/// Every remaining `,`-separated segment must split into exactly two parts on
/// `:`; the first segment that does not fails the whole parse. A repeated key
/// keeps the value of its last occurrence.
///
/// ```
/// let kv = tokcursor::parse("key1: value1, key2: value2")?;
/// assert_eq!(kv["key1"], "value1");
/// assert!(tokcursor::parse("key1:va:lue1").is_err());
/// # Ok::<(), tokcursor::CursorError>(())
/// ```
pub fn parse(payload: &str) -> CursorResult<KeyValues> {
    let stripped: String = payload.chars().filter(|&c| c != STRIPPED).collect();
    if stripped.is_empty() {
        return Ok(KeyValues::new());
    }

    let mut key_values = KeyValues::new();
    for segment in stripped.split(SEGMENT_DELIMITER) {
        let (key, value) = split_segment(segment).ok_or_else(|| {
            debug!(segment, "rejecting malformed cursor segment");
            CursorError::format(segment)
        })?;
        key_values.insert(key.to_owned(), value.to_owned());
    }

    Ok(key_values)
}

/// Like [`parse`], for payloads that are still raw bytes.
///
/// Bytes that are not valid UTF-8 are a decode failure, not a format one.
pub fn parse_bytes(payload: &[u8]) -> CursorResult<KeyValues> {
    let payload = std::str::from_utf8(payload).map_err(|source| CursorError::Utf8 {
        token: String::from_utf8_lossy(payload).into_owned(),
        source,
    })?;
    parse(payload)
}

fn split_segment(segment: &str) -> Option<(&str, &str)> {
    let mut parts = segment.split(PAIR_DELIMITER);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(key), Some(value), None) => Some((key, value)),
        _ => None,
    }
}
