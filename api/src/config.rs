//! Store configuration.
//!
//! Values are compile-time constants; project and key can be swapped at build
//! time with `IHERD_FIRESTORE_PROJECT` / `IHERD_FIRESTORE_API_KEY`.

const FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com";
const DEFAULT_PROJECT: &str = "chimertech123";
/// Collection every lead lands in.
pub const LEADS_COLLECTION: &str = "farmers";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub base_url: String,
    pub project_id: String,
    pub api_key: Option<String>,
}

impl StoreConfig {
    /// Same config pointed at another host (emulator, test server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// `POST` target for appending a document to `collection`.
    pub fn documents_url(&self, collection: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let mut url = format!(
            "{base}/v1/projects/{}/databases/(default)/documents/{collection}",
            self.project_id
        );
        if let Some(key) = self.api_key.as_deref().filter(|k| !k.is_empty()) {
            url.push_str("?key=");
            url.push_str(key);
        }
        url
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: FIRESTORE_BASE_URL.to_string(),
            project_id: option_env!("IHERD_FIRESTORE_PROJECT")
                .unwrap_or(DEFAULT_PROJECT)
                .to_string(),
            api_key: option_env!("IHERD_FIRESTORE_API_KEY").map(str::to_string),
        }
    }
}
