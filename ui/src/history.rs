//! Mount-time flow of the transaction history screen, kept free of Dioxus
//! so it can be driven directly in tests.

use std::fmt::Display;
use std::future::Future;

use api::session::Session;
use api::session::UserId;
use api::transaction::HistorySummary;
use api::transaction::Transaction;
use dioxus_logger::tracing::error;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;

/// Message shown to the user when the transaction fetch fails.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load transaction history";

/// What happened when the screen mounted.
#[derive(Debug, Clone, PartialEq)]
pub enum MountOutcome {
    /// No session (or the lookup failed). The caller redirects to sign-in.
    Unauthenticated,
    /// The fetch succeeded. The list may be empty.
    Loaded {
        session: Session,
        transactions: Vec<Transaction>,
    },
    /// The fetch failed. The screen shows an empty list.
    Failed { session: Session, error: String },
}

impl MountOutcome {
    pub fn transactions(&self) -> &[Transaction] {
        match self {
            Self::Loaded { transactions, .. } => transactions,
            _ => &[],
        }
    }
}

/// Runs the session check and, only when signed in, the transaction fetch.
///
/// A failed session lookup is treated exactly like having no session.
pub async fn mount<SF, SE, L, LF, LE>(session: SF, load: L) -> MountOutcome
where
    SF: Future<Output = Result<Option<Session>, SE>>,
    SE: Display,
    L: FnOnce(UserId) -> LF,
    LF: Future<Output = Result<Vec<Transaction>, LE>>,
    LE: Display,
{
    let session = match session.await {
        Ok(Some(session)) => session,
        Ok(None) => return MountOutcome::Unauthenticated,
        Err(e) => {
            warn!("session lookup failed: {}", e);
            return MountOutcome::Unauthenticated;
        }
    };

    match load(session.user_id.clone()).await {
        Ok(transactions) => {
            info!("transaction history: {} rows", transactions.len());
            MountOutcome::Loaded {
                session,
                transactions,
            }
        }
        Err(e) => {
            error!("Error fetching transactions: {}", e);
            MountOutcome::Failed {
                session,
                error: e.to_string(),
            }
        }
    }
}

/// The three mutually exclusive things the screen can show.
#[derive(Debug, PartialEq)]
pub enum HistoryView<'a> {
    Loading,
    Empty,
    Populated {
        summary: HistorySummary,
        transactions: &'a [Transaction],
    },
}

impl<'a> HistoryView<'a> {
    /// `None` means the mount flow has not finished yet. An unauthenticated
    /// outcome keeps showing the loading state until the redirect lands.
    pub fn classify(outcome: Option<&'a MountOutcome>) -> Self {
        match outcome {
            None | Some(MountOutcome::Unauthenticated) => Self::Loading,
            Some(outcome) => {
                let transactions = outcome.transactions();
                if transactions.is_empty() {
                    Self::Empty
                } else {
                    Self::Populated {
                        summary: HistorySummary::from_transactions(transactions),
                        transactions,
                    }
                }
            }
        }
    }
}
