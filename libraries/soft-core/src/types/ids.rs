/// ID types for Soft Music entities
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Synthetic identity of one track inside one materialized search result
///
/// Keys are generated when a `SearchResult` is built and are never reused,
/// so state keyed by the entries of an older result cannot collide with the
/// entries of a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackKey(Uuid);

impl TrackKey {
    /// Generate a new random key
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for TrackKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_keys_are_distinct() {
        let a = TrackKey::generate();
        let b = TrackKey::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn key_serializes_as_plain_string() {
        let key = TrackKey::generate();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, format!("\"{}\"", key));
    }
}
