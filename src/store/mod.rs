//! # Epoch store
//!
//! Key-value cache of state vectors: the key is the epoch text exactly as delivered by the feed,
//! the value is the JSON record produced by [`StateVector::to_record`]. Writing a key twice keeps
//! the last value.
//!
//! The store is filled once, at start-up, by [`populate_if_empty`]; it is never refreshed or
//! invalidated afterwards.
//!
//! Implementations:
//! * [`MemoryStore`] – in-process map, insertion ordered.
//! * `RedisStore` – Redis backend, behind the `redis-store` feature.
mod memory;
#[cfg(feature = "redis-store")]
mod redis_store;

pub use memory::MemoryStore;
#[cfg(feature = "redis-store")]
pub use redis_store::RedisStore;

use tracing::info;

use crate::{oem::StateVector, tracker_errors::TrackerError};

pub trait EpochStore: Send + Sync {
    /// Number of cached epochs.
    fn len(&self) -> Result<usize, TrackerError>;

    fn is_empty(&self) -> Result<bool, TrackerError> {
        Ok(self.len()? == 0)
    }

    /// Insert or overwrite the record cached under `epoch`.
    fn put(&self, epoch: &str, record: &str) -> Result<(), TrackerError>;

    fn get(&self, epoch: &str) -> Result<Option<String>, TrackerError>;

    /// Every cached record, in the store's stable iteration order.
    fn records(&self) -> Result<Vec<String>, TrackerError>;
}

/// Write every sample into `store`, unless the store already holds data.
///
/// Return
/// ------
/// * the number of writes performed (0 when the store was not empty); duplicated epochs count
///   once per write but leave a single key holding the last sample
pub fn populate_if_empty(
    store: &dyn EpochStore,
    entries: &[StateVector],
) -> Result<usize, TrackerError> {
    if !store.is_empty()? {
        info!(cached = store.len()?, "epoch store already populated");
        return Ok(0);
    }

    for entry in entries {
        store.put(&entry.epoch, &entry.to_record()?)?;
    }

    info!(written = entries.len(), "epoch store populated");
    Ok(entries.len())
}
