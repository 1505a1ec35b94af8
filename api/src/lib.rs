//! This crate contains the shared data model and all fullstack server functions.

pub mod amount;
#[cfg(not(target_arch = "wasm32"))]
pub mod backend;
pub mod currency;
pub mod session;
pub mod transaction;

use dioxus::prelude::*;
use session::Session;
use session::UserId;
use transaction::Transaction;

pub type ApiError = anyhow::Error;

/// Looks up the signed-in user.
///
/// Returns `Ok(None)` when no access token is configured or the backend
/// rejects it.
#[post("/api/session")]
pub async fn session() -> Result<Option<Session>, ApiError> {
    use backend::SessionProvider;

    let backend = backend::backend().await?;
    let session = backend.current_session().await?;

    match &session {
        Some(session) => dioxus_logger::tracing::info!("session lookup: user {}", session.user_id),
        None => dioxus_logger::tracing::info!("session lookup: signed out"),
    }
    Ok(session)
}

/// Lists the completed transactions credited to `recipient_id`, newest first.
#[post("/api/transaction_history")]
pub async fn transaction_history(recipient_id: UserId) -> Result<Vec<Transaction>, ApiError> {
    use backend::TransactionStore;

    let backend = backend::backend().await?;
    let transactions = backend.completed_transactions(&recipient_id).await?;

    dioxus_logger::tracing::info!(
        "loaded {} completed transactions for {}",
        transactions.len(),
        recipient_id
    );
    Ok(transactions)
}
