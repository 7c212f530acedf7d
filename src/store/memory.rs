use crate::{error, record, store};

use async_trait::async_trait;
use indexmap::IndexMap;
use std::{collections, sync};

type Collections = collections::HashMap<String, IndexMap<String, record::UserRecord>>;

/// [`store::Store`] implementation backed by process memory.
///
/// Collections are insertion-ordered maps, so scans return records in the
/// order they were first put. Mirrors the managed store's semantics: put and
/// delete are unconditional, and update materializes the record when the key
/// is absent.
///
/// ```rust
/// use user_record_service::{service, store};
///
/// let service = service::UserRecordService::new(store::memory::MemoryStore::new(), "UsersDB");
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: sync::Mutex<Collections>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<sync::MutexGuard<'_, Collections>, error::StoreError> {
        self.collections
            .lock()
            .map_err(|_| error::StoreError::new("memory store mutex poisoned"))
    }
}

#[async_trait]
impl store::Store for MemoryStore {
    async fn scan(
        &self,
        collection: &str,
    ) -> Result<Vec<record::UserRecord>, error::StoreError> {
        let collections = self.lock()?;
        let records = collections
            .get(collection)
            .map(|records| records.values().cloned().collect())
            .unwrap_or_default();
        Ok(records)
    }

    async fn put(
        &self,
        collection: &str,
        record: record::UserRecord,
    ) -> Result<(), error::StoreError> {
        let mut collections = self.lock()?;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(record.id.clone(), record);
        Ok(())
    }

    async fn update(
        &self,
        collection: &str,
        key: &str,
        fields: &record::UserFields,
    ) -> Result<(), error::StoreError> {
        let record = record::UserRecord::new(key.to_string(), fields.clone());
        let mut collections = self.lock()?;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(record.id.clone(), record);
        Ok(())
    }

    async fn delete(&self, collection: &str, key: &str) -> Result<(), error::StoreError> {
        let mut collections = self.lock()?;
        if let Some(records) = collections.get_mut(collection) {
            records.shift_remove(key);
        }
        Ok(())
    }
}
