use crate::id;

/// The request handlers' shared context: a store, an id generator, and the
/// name of the collection user records live in.
///
/// Carries no other state; every invocation is independent and all record
/// state lives in the store. The conventional collection name is `UsersDB`.
///
/// ```rust
/// use user_record_service::{service, store};
///
/// let service = service::UserRecordService::new(store::memory::MemoryStore::new(), "UsersDB");
/// ```
#[derive(Clone, Debug)]
pub struct UserRecordService<S, G = id::RandomIds> {
    collection: String,
    generator: G,
    store: S,
}

impl<S> UserRecordService<S> {
    /// A service over `store` using the default random id generator.
    pub fn new(store: S, collection: impl Into<String>) -> Self {
        Self::with_generator(store, collection, id::RandomIds)
    }
}

impl<S, G> UserRecordService<S, G> {
    /// A service over `store` using a caller-supplied id generator.
    pub fn with_generator(store: S, collection: impl Into<String>, generator: G) -> Self {
        Self {
            collection: collection.into(),
            generator,
            store,
        }
    }

    pub(crate) fn collection(&self) -> &str {
        &self.collection
    }

    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    pub(crate) fn generate_id(&self) -> String
    where
        G: id::IdGenerator,
    {
        self.generator.generate()
    }
}
