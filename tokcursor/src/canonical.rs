//! Deterministic renderings of a cursor's key/value mapping.
//!
//! `KeyValues` is a hash map, so both renderings go through an explicit sort
//! of the keys. The output depends only on the final contents of the mapping,
//! never on how it was populated.

use crate::parse::{KeyValues, PAIR_DELIMITER, SEGMENT_DELIMITER};

/// Keys of `key_values`, sorted byte-wise ascending.
pub fn sorted_keys(key_values: &KeyValues) -> Vec<&str> {
    let mut keys: Vec<&str> = key_values.keys().map(String::as_str).collect();
    keys.sort_unstable();
    keys
}

/// Render `key:value` segments in key order, joined by `,`.
///
/// The empty mapping renders to the empty string.
pub fn render(key_values: &KeyValues) -> String {
    let mut out = String::new();
    for key in sorted_keys(key_values) {
        if !out.is_empty() {
            out.push(SEGMENT_DELIMITER);
        }
        out.push_str(key);
        out.push(PAIR_DELIMITER);
        out.push_str(&key_values[key]);
    }
    out
}

/// Render only the sorted keys, joined by `,`.
///
/// Cursors over the same key set produce the same identity key regardless
/// of their values.
pub fn identity_key(key_values: &KeyValues) -> String {
    sorted_keys(key_values).join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kv(pairs: &[(&str, &str)]) -> KeyValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&KeyValues::new()), "");
    }

    #[test]
    fn test_render_ordered() {
        let m = kv(&[("key1", "value1"), ("key2", "value2")]);
        assert_eq!(render(&m), "key1:value1,key2:value2");
    }

    #[test]
    fn test_render_unordered() {
        let m = kv(&[("key2", "value2"), ("key1", "value1")]);
        assert_eq!(render(&m), "key1:value1,key2:value2");
    }

    #[test]
    fn test_render_single_pair_has_no_separator() {
        let m = kv(&[("only", "one")]);
        assert_eq!(render(&m), "only:one");
    }

    #[test]
    fn test_render_sorts_bytewise() {
        // uppercase sorts before lowercase, "a" before "aa"
        let m = kv(&[("b", "1"), ("aa", "2"), ("a", "3"), ("Z", "4")]);
        assert_eq!(render(&m), "Z:4,a:3,aa:2,b:1");
    }

    #[test]
    fn test_identity_key_empty() {
        assert_eq!(identity_key(&KeyValues::new()), "");
    }

    #[test]
    fn test_identity_key_ordered() {
        let m = kv(&[("key1", "value1"), ("key2", "value2")]);
        assert_eq!(identity_key(&m), "key1,key2");
    }

    #[test]
    fn test_identity_key_unordered() {
        let m = kv(&[("key2", "value2"), ("key1", "value1")]);
        assert_eq!(identity_key(&m), "key1,key2");
    }

    #[test]
    fn test_identity_key_ignores_values() {
        let a = kv(&[("key1", "x"), ("key2", "y")]);
        let b = kv(&[("key1", "value1"), ("key2", "value2")]);
        assert_eq!(identity_key(&a), identity_key(&b));
        assert_ne!(render(&a), render(&b));
    }

    #[test]
    fn test_renderings_are_idempotent() {
        let m = kv(&[("c", "3"), ("a", "1"), ("b", "2")]);
        assert_eq!(render(&m), render(&m));
        assert_eq!(identity_key(&m), identity_key(&m));
    }

    #[test]
    fn test_sorted_keys() {
        let m = kv(&[("key2", "value2"), ("key1", "value1")]);
        assert_eq!(sorted_keys(&m), vec!["key1", "key2"]);
    }
}
