use std::{
    collections::HashMap,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use crate::tracker_errors::TrackerError;

use super::EpochStore;

#[derive(Debug, Default)]
struct Records {
    /// Keys in first-insertion order
    order: Vec<String>,
    values: HashMap<String, String>,
}

/// In-process epoch store.
///
/// Records are listed in the order their key was first written; overwriting a key keeps its
/// position.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Records>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Records>, TrackerError> {
        self.records
            .read()
            .map_err(|e| TrackerError::StoreUnavailable(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Records>, TrackerError> {
        self.records
            .write()
            .map_err(|e| TrackerError::StoreUnavailable(e.to_string()))
    }
}

impl EpochStore for MemoryStore {
    fn len(&self) -> Result<usize, TrackerError> {
        Ok(self.read()?.values.len())
    }

    fn put(&self, epoch: &str, record: &str) -> Result<(), TrackerError> {
        let mut records = self.write()?;
        if records
            .values
            .insert(epoch.to_string(), record.to_string())
            .is_none()
        {
            records.order.push(epoch.to_string());
        }
        Ok(())
    }

    fn get(&self, epoch: &str) -> Result<Option<String>, TrackerError> {
        Ok(self.read()?.values.get(epoch).cloned())
    }

    fn records(&self) -> Result<Vec<String>, TrackerError> {
        let records = self.read()?;
        Ok(records
            .order
            .iter()
            .filter_map(|key| records.values.get(key).cloned())
            .collect())
    }
}
