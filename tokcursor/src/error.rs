use std::fmt;

/// Broad category of a [`CursorError`].
///
/// Callers that only need to tell an undecodable token apart from a
/// decodable but malformed one can branch on this instead of matching every
/// variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The raw token could not be turned into a plaintext payload.
    Decode,
    /// The plaintext payload is not a list of `key:value` segments.
    Format,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Decode => f.write_str("decode"),
            ErrorKind::Format => f.write_str("format"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CursorError {
    #[error("cursor token {token:?} is not valid base64")]
    Decode {
        token: String,
        #[source]
        source: base64::DecodeError,
    },
    #[error("cursor token {token:?} does not decode to utf-8")]
    Utf8 {
        token: String,
        #[source]
        source: std::str::Utf8Error,
    },
    #[error("token format incorrect: got {segment:?}")]
    Format { segment: String },
}

pub type CursorResult<T> = Result<T, CursorError>;

impl CursorError {
    pub(crate) fn format(segment: impl Into<String>) -> Self {
        CursorError::Format {
            segment: segment.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CursorError::Decode { .. } | CursorError::Utf8 { .. } => ErrorKind::Decode,
            CursorError::Format { .. } => ErrorKind::Format,
        }
    }

    /// The raw token or segment that caused the failure.
    pub fn offending_input(&self) -> &str {
        match self {
            CursorError::Decode { token, .. } | CursorError::Utf8 { token, .. } => token,
            CursorError::Format { segment } => segment,
        }
    }
}
