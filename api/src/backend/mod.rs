//! Defines traits and implementations for the remote auth provider and data
//! store backing the transaction history.

mod config;
mod shared;
pub mod supabase;

pub use config::BackendConfig;
pub use shared::backend;

use crate::session::Session;
use crate::session::UserId;
use crate::transaction::Transaction;
use thiserror::Error;

/// Errors talking to the backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// A required environment variable is unset or empty.
    #[error("missing backend configuration: {0}")]
    MissingConfig(&'static str),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The backend answered with a non-success status.
    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unable to read session file {path}: {source}")]
    SessionFile {
        path: String,
        source: std::io::Error,
    },
    /// A key or token contains characters not allowed in a header.
    #[error("invalid credential: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A service that can report who is signed in.
pub trait SessionProvider {
    /// Returns the active session, or `None` when nobody is signed in.
    async fn current_session(&self) -> Result<Option<Session>, BackendError>;
}

/// A service that can list the transactions credited to a recipient.
pub trait TransactionStore {
    /// Returns every completed transaction whose recipient is `recipient`,
    /// newest first, with the related food item's name joined in.
    async fn completed_transactions(
        &self,
        recipient: &UserId,
    ) -> Result<Vec<Transaction>, BackendError>;
}
