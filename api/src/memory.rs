use std::cell::{Cell, RefCell};

use futures::future::LocalBoxFuture;
use tracing::warn;

use crate::{Fields, LeadStore, StoreError};

/// In-process store: keeps appended documents in memory.
///
/// `reject_next` makes the following append fail with `Rejected`, which is
/// how callers exercise their failure path.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RefCell<Vec<(String, Fields)>>,
    reject_next: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject_next(&self) {
        self.reject_next.set(true);
    }

    /// Snapshot of `(collection, document)` pairs in append order.
    pub fn documents(&self) -> Vec<(String, Fields)> {
        self.documents.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.documents.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.borrow().is_empty()
    }
}

impl LeadStore for MemoryStore {
    fn append<'a>(
        &'a self,
        collection: &'a str,
        fields: Fields,
    ) -> LocalBoxFuture<'a, Result<(), StoreError>> {
        Box::pin(async move {
            if self.reject_next.replace(false) {
                warn!(collection, "memory store rejecting write");
                return Err(StoreError::Rejected {
                    status: 503,
                    body: "unavailable".into(),
                });
            }
            self.documents
                .borrow_mut()
                .push((collection.to_string(), fields));
            Ok(())
        })
    }
}
