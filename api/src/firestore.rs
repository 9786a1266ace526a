//! Cloud Firestore REST client (append only).

use futures::future::LocalBoxFuture;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::{Fields, LeadStore, StoreConfig, StoreError};

/// Appends documents through the Firestore `createDocument` REST call.
#[derive(Debug, Clone)]
pub struct FirestoreStore {
    config: StoreConfig,
    client: reqwest::Client,
}

/// `{"fields": {"name": {"stringValue": "..."}}}`
#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct FirestoreDocument<'a> {
    fields: BTreeMap<&'a str, StringValue<'a>>,
}

#[derive(Debug, Serialize, PartialEq)]
struct StringValue<'a> {
    #[serde(rename = "stringValue")]
    string_value: &'a str,
}

impl<'a> FirestoreDocument<'a> {
    pub(crate) fn from_fields(fields: &'a Fields) -> Self {
        Self {
            fields: fields
                .iter()
                .map(|(k, v)| (k.as_str(), StringValue { string_value: v }))
                .collect(),
        }
    }
}

impl FirestoreStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    async fn create_document(&self, collection: &str, fields: Fields) -> Result<(), StoreError> {
        let url = self.config.documents_url(collection);
        debug!(collection, field_count = fields.len(), "appending document");

        let response = self
            .client
            .post(&url)
            .json(&FirestoreDocument::from_fields(&fields))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        info!(collection, "document appended");
        Ok(())
    }
}

impl LeadStore for FirestoreStore {
    fn append<'a>(
        &'a self,
        collection: &'a str,
        fields: Fields,
    ) -> LocalBoxFuture<'a, Result<(), StoreError>> {
        Box::pin(self.create_document(collection, fields))
    }
}
