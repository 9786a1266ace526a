use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("store rejected write ({status}): {body}")]
    Rejected { status: u16, body: String },
}
