//! Key-value store collaborator.
//!
//! The handlers consume this narrow contract and nothing else: a full
//! collection scan plus unconditional put, full-field update, and delete, all
//! keyed by the record id. Keeping the seam this small isolates the handlers
//! from any specific storage technology and makes them testable against the
//! in-memory implementation.

/// DynamoDB-backed store implementation.
pub mod dynamodb;

/// In-memory store implementation.
pub mod memory;

use crate::{error, record};

use async_trait::async_trait;

/// External key-value persistence collaborator, addressed by a collection
/// name and the record's primary key.
#[async_trait]
pub trait Store {
    /// Return every record in the collection, in store-defined order.
    async fn scan(
        &self,
        collection: &str,
    ) -> Result<Vec<record::UserRecord>, error::StoreError>;

    /// Insert or overwrite the record at its primary key, unconditionally.
    async fn put(
        &self,
        collection: &str,
        record: record::UserRecord,
    ) -> Result<(), error::StoreError>;

    /// Overwrite the full field set of the record at `key`.
    ///
    /// Carries the store's upsert semantics: updating an absent key
    /// materializes the record rather than failing.
    async fn update(
        &self,
        collection: &str,
        key: &str,
        fields: &record::UserFields,
    ) -> Result<(), error::StoreError>;

    /// Remove the record at `key`; removing an absent key succeeds.
    async fn delete(&self, collection: &str, key: &str) -> Result<(), error::StoreError>;
}
