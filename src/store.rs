use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::models::Sensor;

/// Error type for store operations
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No entry exists for the requested id
    #[error("sensor not found")]
    NotFound,
}

/// Capability set required from a sensor store.
///
/// Handlers depend on this trait rather than a concrete store so the
/// backing implementation can be swapped without touching the HTTP layer.
/// Keys are slugs derived from sensor names by the caller; the store never
/// computes or rewrites them.
pub trait SensorStore: Send + Sync {
    /// Insert or overwrite the entry at `id`. Overwriting is not an error.
    fn add(&self, id: &str, sensor: Sensor) -> Result<(), StoreError>;

    /// Return the sensor stored at `id`.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] if no entry exists for `id`.
    fn get(&self, id: &str) -> Result<Sensor, StoreError>;

    /// Return a snapshot of every entry, keyed by id.
    fn list(&self) -> Result<HashMap<String, Sensor>, StoreError>;

    /// Replace the value at `id` only if it already exists. The key stays
    /// as it was, even when the new sensor's name would slugify differently.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] if no entry exists for `id`.
    fn update(&self, id: &str, sensor: Sensor) -> Result<(), StoreError>;

    /// Delete the entry at `id`. Deleting an absent key is not an error.
    fn remove(&self, id: &str) -> Result<(), StoreError>;
}

/// In-memory sensor store for use across async handlers.
///
/// Clones share the same underlying map, so the store can be handed to
/// every request handler while all of them observe the same data. Reads
/// and writes go through a read-write lock; each operation is a single
/// map access, so a poisoned lock cannot hide a half-applied write and
/// is simply recovered.
#[derive(Clone, Default)]
pub struct MemStore {
    inner: Arc<RwLock<HashMap<String, Sensor>>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SensorStore for MemStore {
    fn add(&self, id: &str, sensor: Sensor) -> Result<(), StoreError> {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        map.insert(id.to_string(), sensor);
        tracing::debug!("stored sensor with id: {}", id);
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Sensor, StoreError> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        map.get(id).cloned().ok_or(StoreError::NotFound)
    }

    fn list(&self) -> Result<HashMap<String, Sensor>, StoreError> {
        // Snapshot so JSON encoding never races a concurrent write.
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(map.clone())
    }

    fn update(&self, id: &str, sensor: Sensor) -> Result<(), StoreError> {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        match map.get_mut(id) {
            Some(entry) => {
                *entry = sensor;
                tracing::debug!("updated sensor with id: {}", id);
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    fn remove(&self, id: &str) -> Result<(), StoreError> {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        map.remove(id);
        tracing::debug!("removed sensor with id: {}", id);
        Ok(())
    }
}
