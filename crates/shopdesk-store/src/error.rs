use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize {record}: {source}")]
    Serialize {
        record: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("stored {record} record is corrupt: {source}")]
    Corrupt {
        record: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("shop id must not be empty")]
    EmptyShopId,

    #[error("home directory not found — cannot resolve profile directory")]
    NoHomeDir,
}
