//! Pagination cursor tokens.
//!
//! A cursor is an opaque token handed out by list/query APIs so that a client
//! can resume iteration where the previous page ended. It carries a set of
//! key/value constraints and the requested page size.
//!
//! ## Token format (wire-stable)
//!
//! The plaintext payload is zero or more comma-separated `key:value`
//! segments, for example `key1:value1,key2:value2`. Every space character is
//! removed before the payload is split, so `key1: value1, key2: value2` is the
//! same token. On the wire the payload travels as standard, padded base64.
//!
//! ## Canonical forms
//!
//! - `Cursor::to_string()` renders the mapping sorted by key
//!   (`key1:value1,key2:value2`).
//! - `Cursor::key()` renders only the sorted keys (`key1,key2`). Two cursors
//!   over the same key set share this identity key whatever their values are,
//!   which makes it suitable for grouping or caching.
//!
//! ```
//! use tokcursor::Cursor;
//!
//! let cursor = Cursor::from_plaintext("key2: value2, key1: value1", 25)?;
//! assert_eq!(cursor.to_string(), "key1:value1,key2:value2");
//! assert_eq!(cursor.key(), "key1,key2");
//!
//! let resumed = Cursor::from_base64(cursor.raw_token(), cursor.page_size())?;
//! assert_eq!(resumed.key_values(), cursor.key_values());
//! # Ok::<(), tokcursor::CursorError>(())
//! ```

pub mod canonical;
pub mod cursor;
pub mod error;
pub mod parse;

// --- Core Public Surface ---

pub use cursor::Cursor;
pub use error::{CursorError, CursorResult, ErrorKind};
pub use parse::{KeyValues, parse, parse_bytes};
