//! Remote data-store collaborator for the iHerd site.
//!
//! The site only ever *appends* lead documents; there is no read path. The
//! [`LeadStore`] trait is the seam the UI talks to, with a Firestore REST
//! implementation for production and an in-memory one for tests and demos.

mod config;
mod error;
mod firestore;
mod memory;

pub use config::{StoreConfig, LEADS_COLLECTION};
pub use error::StoreError;
pub use firestore::FirestoreStore;
pub use memory::MemoryStore;

use std::collections::BTreeMap;

use futures::future::LocalBoxFuture;

/// A flat document: string keys to string values.
pub type Fields = BTreeMap<String, String>;

/// Append-only document store.
///
/// Futures are local (`!Send`) because the browser fetch backend is
/// single-threaded.
pub trait LeadStore {
    /// Append one document to `collection`.
    fn append<'a>(
        &'a self,
        collection: &'a str,
        fields: Fields,
    ) -> LocalBoxFuture<'a, Result<(), StoreError>>;
}
