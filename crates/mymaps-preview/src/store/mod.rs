//! Read-only access to the document store that owns posts and profiles.
//!
//! The gateway never writes. Every call is a single attempt; callers turn the
//! outcome into a [`Lookup`] and decide for themselves whether to fail open.

pub mod document;
pub mod firestore;
pub mod query;

use async_trait::async_trait;

use crate::error::StoreError;

pub use self::document::{Document, Value};
pub use self::firestore::FirestoreClient;
pub use self::query::StructuredQuery;

/// Collection holding post documents.
pub const POSTS: &str = "posts";

/// Collection holding user profile documents.
pub const USERS: &str = "users";

/// Document store read operations.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch one document by primary id. `Ok(None)` when it does not exist.
    async fn get_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, StoreError>;

    /// Run a structured query, returning matches in store order.
    async fn run_query(&self, query: &StructuredQuery) -> Result<Vec<Document>, StoreError>;
}

/// Outcome of a single lookup.
#[derive(Debug)]
pub enum Lookup<T> {
    /// The entity exists and may be previewed.
    Found(T),
    /// Nothing to preview: no document, or one that must not be exposed.
    Missing,
    /// The store could not answer.
    Failed(StoreError),
}

impl<T> Lookup<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Self::Found(value) => Lookup::Found(f(value)),
            Self::Missing => Lookup::Missing,
            Self::Failed(err) => Lookup::Failed(err),
        }
    }

    /// Keep a found value only if it passes `predicate`.
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        match self {
            Self::Found(value) if predicate(&value) => Self::Found(value),
            Self::Found(_) => Self::Missing,
            other => other,
        }
    }
}

impl<T> From<Result<Option<T>, StoreError>> for Lookup<T> {
    fn from(result: Result<Option<T>, StoreError>) -> Self {
        match result {
            Ok(Some(value)) => Self::Found(value),
            Ok(None) => Self::Missing,
            Err(err) => Self::Failed(err),
        }
    }
}
