use thiserror::Error;

#[derive(Error, Debug)]
pub enum TributaryError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("Hashnode endpoint unreachable: {0}")]
    SourceUnreachable(#[source] reqwest::Error),

    #[error("Hashnode API rejected the request: {0}")]
    SourceRejected(String),

    #[error("publication not found: {0}")]
    PublicationMissing(String),

    #[error("failed to read document {path}: {reason}")]
    DocumentRead { path: String, reason: String },

    #[error("failed to write document {path}: {reason}")]
    DocumentWrite { path: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, TributaryError>;
