//! ID utilities for the Quizcast client.
//!
//! Provides type-safe string IDs via phantom markers, with `tiny_id` backed
//! generation for the IDs the client mints itself. Server-assigned IDs (such
//! as player IDs) are only ever parsed off the wire, never generated here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use std::sync::Mutex;
use tiny_id::ShortCodeGenerator;

/// Lazy-initialized short code generator behind a mutex, so one global
/// generator can be shared without threading it through call sites.
type LazyShortCodeGenerator = LazyLock<Mutex<ShortCodeGenerator<char>>>;

static CLIENT_ID_GENERATOR: LazyShortCodeGenerator = LazyLock::new(|| {
    // Alphanumeric minus the characters that read ambiguously in logs
    let alphabet: Vec<char> = "123456789ABCDEFGHJKMNPQRSTUVWXYZabcdefghkmnpqrstuvwxyz"
        .chars()
        .collect();
    Mutex::new(ShortCodeGenerator::with_alphabet(alphabet, 8))
});

/// A type-safe wrapper around string IDs.
///
/// Prevents mixing IDs of different entities while serializing as a bare
/// string on the wire.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Id<T> {
    value: String,
    _phantom: std::marker::PhantomData<T>,
}

// Custom serde implementation to serialize as just a string
impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_string(value))
    }
}

impl<T> Id<T> {
    /// Wraps an existing string value.
    ///
    /// # Example
    /// ```
    /// use quizcast::id::{Id, PlayerMarker};
    ///
    /// let player_id = Id::<PlayerMarker>::from_string("abc123".to_string());
    /// assert_eq!(player_id.as_str(), "abc123");
    /// ```
    pub fn from_string(value: String) -> Self {
        Self {
            value,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Returns the string value of the ID.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consumes the ID and returns the inner string value.
    pub fn into_string(self) -> String {
        self.value
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<String> for Id<T> {
    fn from(value: String) -> Self {
        Self::from_string(value)
    }
}

impl<T> From<&str> for Id<T> {
    fn from(value: &str) -> Self {
        Self::from_string(value.to_string())
    }
}

impl<T> AsRef<str> for Id<T> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

// Type markers for the entities the client deals in
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerMarker;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientMarker;

/// A player's ID, assigned by the game server when the player joins.
pub type PlayerId = Id<PlayerMarker>;

/// A locally minted ID identifying this browser session in log output.
pub type ClientId = Id<ClientMarker>;

impl ClientId {
    /// Generates a new client ID (8 characters, no ambiguous glyphs).
    ///
    /// # Example
    /// ```
    /// use quizcast::id::ClientId;
    ///
    /// let client_id = ClientId::new();
    /// assert_eq!(client_id.as_str().len(), 8);
    /// ```
    pub fn new() -> Self {
        let mut generator = CLIENT_ID_GENERATOR.lock().unwrap();
        Self {
            value: generator.next_string(),
            _phantom: std::marker::PhantomData,
        }
    }
}

impl Default for ClientId {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_id_generation() {
        let id1 = ClientId::new();
        let id2 = ClientId::new();

        assert_ne!(id1, id2);
        assert_eq!(id1.as_str().len(), 8);
        assert_eq!(id2.as_str().len(), 8);
    }

    #[test]
    fn test_client_id_format() {
        let id = ClientId::new();

        // Should not contain confusing characters
        let confusing_chars = "0OIl";
        assert!(!id.as_str().chars().any(|c| confusing_chars.contains(c)));
    }

    #[test]
    fn test_id_creation() {
        let id = PlayerId::from_string("test123".to_string());
        assert_eq!(id.as_str(), "test123");
        assert_eq!(id.to_string(), "test123");
    }

    #[test]
    fn test_id_from_str() {
        let id: PlayerId = "abc123".into();
        assert_eq!(id.as_str(), "abc123");
    }

    #[test]
    fn test_type_safety() {
        let player_id = PlayerId::from_string("p1".to_string());
        let client_id = ClientId::new();

        // This should compile - same ID type
        let _same_player: PlayerId = player_id.clone();

        // This would not compile - different ID types
        // let _wrong_type: PlayerId = client_id;

        let _used = client_id.as_str();
    }

    #[test]
    fn test_serde() {
        let original = PlayerId::from_string("test123".to_string());

        let serialized = serde_json::to_string(&original).unwrap();
        assert_eq!(serialized, "\"test123\"");

        let deserialized: PlayerId = serde_json::from_str(&serialized).unwrap();
        assert_eq!(original, deserialized);
    }
}
