//! Error types for the wallet connection manager

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0} wallet is not installed. Please install the {0} browser extension.")]
    NotAvailable(&'static str),

    #[error("{0} wallet integration coming soon")]
    NotImplemented(&'static str),

    #[error("Wallet {0} is not available")]
    Unsupported(String),

    #[error("Failed to connect to Freighter: {0}")]
    ProviderRejected(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
