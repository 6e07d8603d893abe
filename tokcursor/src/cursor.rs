use std::fmt;

use base64::{Engine as _, engine::general_purpose::STANDARD as B64};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    canonical,
    error::{CursorError, CursorResult},
    parse::{self, KeyValues, PAIR_DELIMITER, SEGMENT_DELIMITER, STRIPPED},
};

/// A decoded pagination cursor.
///
/// Built once from a token and a page size, then read-only. The next page is
/// described by a new `Cursor`, never by mutating this one.
///
/// The page size is carried as given; zero and negative values are the
/// caller's business.
///
/// On the wire a cursor serializes as `{"token": <base64>, "page_size": <i32>}`
/// and deserializes through [`Cursor::from_base64`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "CursorWire", try_from = "CursorWire")]
pub struct Cursor {
    raw_token: String,
    token: String,
    key_values: KeyValues,
    page_size: i32,
}

impl Cursor {
    /// Build a cursor from a plaintext `key:value,...` token.
    ///
    /// The raw token is the base64 encoding of `token` exactly as given,
    /// spaces included.
    pub fn from_plaintext(token: &str, page_size: i32) -> CursorResult<Self> {
        let key_values = parse::parse(token)?;
        let cursor = Self {
            raw_token: B64.encode(token),
            token: token.to_owned(),
            key_values,
            page_size,
        };
        cursor.trace_built();
        Ok(cursor)
    }

    /// Build a cursor from a base64 token as handed back by a client.
    ///
    /// The raw token is kept unchanged.
    pub fn from_base64(raw_token: &str, page_size: i32) -> CursorResult<Self> {
        let bytes = B64.decode(raw_token).map_err(|source| {
            debug!(token = raw_token, error = %source, "cursor token is not base64");
            CursorError::Decode {
                token: raw_token.to_owned(),
                source,
            }
        })?;
        let token = String::from_utf8(bytes).map_err(|err| CursorError::Utf8 {
            token: raw_token.to_owned(),
            source: err.utf8_error(),
        })?;
        let key_values = parse::parse(&token)?;

        let cursor = Self {
            raw_token: raw_token.to_owned(),
            token,
            key_values,
            page_size,
        };
        cursor.trace_built();
        Ok(cursor)
    }

    /// Build the cursor for a page from its constraints.
    ///
    /// The plaintext token is the canonical rendering of `pairs`. A key or
    /// value containing `:`, `,` or a space could not survive a parse of that
    /// rendering and is rejected with [`CursorError::Format`].
    ///
    /// ```
    /// use tokcursor::Cursor;
    ///
    /// let next = Cursor::from_key_values([("id", "42"), ("after", "2024-01-01")], 10)?;
    /// assert_eq!(next.token(), "after:2024-01-01,id:42");
    /// assert!(Cursor::from_key_values([("name", "full name")], 10).is_err());
    /// # Ok::<(), tokcursor::CursorError>(())
    /// ```
    pub fn from_key_values<I, K, V>(pairs: I, page_size: i32) -> CursorResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let key_values: KeyValues = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        for (key, value) in &key_values {
            if !is_token_safe(key) || !is_token_safe(value) {
                let segment = format!("{key}{PAIR_DELIMITER}{value}");
                debug!(segment, "refusing to encode unsafe cursor pair");
                return Err(CursorError::Format { segment });
            }
        }

        let token = canonical::render(&key_values);
        let cursor = Self {
            raw_token: B64.encode(&token),
            token,
            key_values,
            page_size,
        };
        cursor.trace_built();
        Ok(cursor)
    }

    /// The plaintext token.
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn token_bytes(&self) -> &[u8] {
        self.token.as_bytes()
    }

    /// The base64 token, as handed to clients.
    pub fn raw_token(&self) -> &str {
        &self.raw_token
    }

    pub fn key_values(&self) -> &KeyValues {
        &self.key_values
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.key_values.get(key).map(String::as_str)
    }

    pub fn page_size(&self) -> i32 {
        self.page_size
    }

    pub fn len(&self) -> usize {
        self.key_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.key_values.is_empty()
    }

    /// Identity key: the sorted keys joined by `,`, values left out.
    pub fn key(&self) -> String {
        canonical::identity_key(&self.key_values)
    }

    pub fn into_parts(self) -> (KeyValues, i32) {
        (self.key_values, self.page_size)
    }

    fn trace_built(&self) {
        trace!(
            keys = %canonical::identity_key(&self.key_values),
            page_size = self.page_size,
            "built cursor"
        );
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&canonical::render(&self.key_values))
    }
}

fn is_token_safe(s: &str) -> bool {
    !s.contains([PAIR_DELIMITER, SEGMENT_DELIMITER, STRIPPED])
}

#[derive(Serialize, Deserialize)]
struct CursorWire {
    token: String,
    page_size: i32,
}

impl From<Cursor> for CursorWire {
    fn from(cursor: Cursor) -> Self {
        Self {
            token: cursor.raw_token,
            page_size: cursor.page_size,
        }
    }
}

impl TryFrom<CursorWire> for Cursor {
    type Error = CursorError;

    fn try_from(wire: CursorWire) -> Result<Self, Self::Error> {
        Cursor::from_base64(&wire.token, wire.page_size)
    }
}
