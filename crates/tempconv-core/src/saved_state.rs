//! Key-value save slot for state that must outlive its hosting surface.
//!
//! A [`SavedStateRegistry`] maps a component key to a serialized value. Hosts
//! write state into it as it changes, flatten the whole registry into a text
//! bundle before the surface goes away, and rebuild it from that bundle when
//! the surface comes back. Nothing here touches disk: the bundle lives as long
//! as the process that holds it.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Failures moving values in and out of a [`SavedStateRegistry`].
#[derive(Debug, Error)]
pub enum SavedStateError {
    /// A value could not be serialized for its slot.
    #[error("failed to encode saved state for key `{key}`")]
    Encode {
        /// Slot key.
        key: String,
        /// Serializer failure.
        #[source]
        source: serde_json::Error,
    },
    /// A slot holds data that does not match the requested type.
    #[error("saved state for key `{key}` has an unexpected shape")]
    Decode {
        /// Slot key.
        key: String,
        /// Deserializer failure.
        #[source]
        source: serde_json::Error,
    },
    /// The registry bundle itself could not be written or read.
    #[error("saved state bundle is unreadable")]
    Bundle(#[from] serde_json::Error),
}

/// Saved values keyed by component identity.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedStateRegistry {
    entries: BTreeMap<String, Value>,
}

impl SavedStateRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, replacing any earlier entry.
    pub fn save<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), SavedStateError> {
        let encoded = serde_json::to_value(value).map_err(|source| SavedStateError::Encode {
            key: key.to_string(),
            source,
        })?;
        log::trace!("saved state `{}` <- {}", key, encoded);
        self.entries.insert(key.to_string(), encoded);
        Ok(())
    }

    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` for a key that was never saved.
    pub fn restore<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, SavedStateError> {
        let Some(encoded) = self.entries.get(key) else {
            return Ok(None);
        };
        T::deserialize(encoded)
            .map(Some)
            .map_err(|source| SavedStateError::Decode {
                key: key.to_string(),
                source,
            })
    }

    /// Drops the entry for `key`, reporting whether one existed.
    pub fn remove(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Whether `key` has an entry.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of saved entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is saved.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Saved keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Flattens the registry into a JSON bundle.
    pub fn to_bundle(&self) -> Result<String, SavedStateError> {
        let bundle = serde_json::to_string(self)?;
        log::debug!("saved state bundle written ({} entries)", self.entries.len());
        Ok(bundle)
    }

    /// Rebuilds a registry from a bundle produced by [`Self::to_bundle`].
    pub fn from_bundle(bundle: &str) -> Result<Self, SavedStateError> {
        let registry: Self = serde_json::from_str(bundle)?;
        log::debug!("saved state bundle read ({} entries)", registry.entries.len());
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::ConverterState;

    #[test]
    fn missing_key_restores_none() {
        let registry = SavedStateRegistry::new();
        let restored: Option<ConverterState> = registry.restore("hoisted").unwrap();
        assert!(restored.is_none());
    }

    #[test]
    fn save_replaces_previous_value() {
        let mut registry = SavedStateRegistry::new();
        registry.save("hoisted", &ConverterState::from_input("1")).unwrap();
        registry.save("hoisted", &ConverterState::from_input("2")).unwrap();

        assert_eq!(registry.len(), 1);
        let restored: ConverterState = registry.restore("hoisted").unwrap().unwrap();
        assert_eq!(restored.input, "2");
    }

    #[test]
    fn wrong_shape_is_a_decode_error() {
        let mut registry = SavedStateRegistry::new();
        registry.save("hoisted", &42u32).unwrap();

        let err = registry.restore::<ConverterState>("hoisted").unwrap_err();
        assert!(matches!(err, SavedStateError::Decode { ref key, .. } if key == "hoisted"));
        assert!(err.to_string().contains("hoisted"));
    }

    #[test]
    fn bundle_survives_a_rebuild() {
        let mut registry = SavedStateRegistry::new();
        registry.save("hoisted", &ConverterState::from_input("37")).unwrap();
        registry.save("other", &"kept").unwrap();

        let bundle = registry.to_bundle().unwrap();
        drop(registry);
        let rebuilt = SavedStateRegistry::from_bundle(&bundle).unwrap();

        assert_eq!(rebuilt.keys().collect::<Vec<_>>(), vec!["hoisted", "other"]);
        let state: ConverterState = rebuilt.restore("hoisted").unwrap().unwrap();
        assert_eq!(state, ConverterState::from_input("37"));
        assert_eq!(rebuilt.restore::<String>("other").unwrap().as_deref(), Some("kept"));
    }

    #[test]
    fn garbage_bundle_is_rejected() {
        let err = SavedStateRegistry::from_bundle("not json").unwrap_err();
        assert!(matches!(err, SavedStateError::Bundle(_)));
    }

    #[test]
    fn remove_and_contains() {
        let mut registry = SavedStateRegistry::new();
        assert!(registry.is_empty());
        registry.save("hoisted", &ConverterState::default()).unwrap();
        assert!(registry.contains("hoisted"));
        assert!(registry.remove("hoisted"));
        assert!(!registry.remove("hoisted"));
        assert!(registry.is_empty());
    }
}
