//=============================================================================
// File: src/screens/transaction_history.rs
//=============================================================================
use crate::app_state_mut::AppStateMut;
use crate::components::empty_state::EmptyState;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Spinner;
use crate::components::summary_panel::SummaryPanel;
use crate::components::transaction_card::TransactionCard;
use crate::history;
use crate::history::HistoryView;
use crate::history::MountOutcome;
use crate::history::LOAD_FAILED_MESSAGE;
use crate::hooks::use_toast::use_toast;
use crate::hooks::use_toast::Toaster;
use crate::Screen;
use dioxus::prelude::*;

/// Back button and title, shown above every state of the screen.
#[component]
fn HistoryHeader() -> Element {
    let mut app_state_mut = use_context::<AppStateMut>();

    rsx! {
        header {
            style: "display: flex; align-items: center; gap: 1rem; margin-bottom: 1rem;",
            Button {
                button_type: ButtonType::Secondary,
                outline: true,
                on_click: move |_| app_state_mut.navigate(Screen::Dashboard),
                "←"
            }
            h3 { style: "margin: 0;", "Transaction History" }
        }
    }
}

/// Redirects when signed out, records the session otherwise, and raises a
/// toast when the fetch failed.
fn apply_outcome(outcome: &MountOutcome, app_state_mut: &mut AppStateMut, toaster: &mut Toaster) {
    match outcome {
        MountOutcome::Unauthenticated => {
            app_state_mut.session.set(None);
            app_state_mut.navigate(Screen::Auth);
        }
        MountOutcome::Loaded { session, .. } => {
            app_state_mut.session.set(Some(session.clone()));
        }
        MountOutcome::Failed { session, .. } => {
            app_state_mut.session.set(Some(session.clone()));
            toaster.error(LOAD_FAILED_MESSAGE);
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn TransactionHistoryScreen() -> Element {
    let mut app_state_mut = use_context::<AppStateMut>();
    let mut toaster = use_toast();

    // Dropped with the screen, so a late response never touches state.
    let history_resource = use_resource(move || async move {
        let outcome = history::mount(api::session(), api::transaction_history).await;
        apply_outcome(&outcome, &mut app_state_mut, &mut toaster);
        outcome
    });

    let outcome = history_resource.read();
    let body = match HistoryView::classify((*outcome).as_ref()) {
        HistoryView::Loading => rsx! {
            Spinner { caption: "Loading transaction history...".to_string() }
        },
        HistoryView::Empty => rsx! {
            EmptyState {
                title: "No transactions yet".to_string(),
                description: Some("When someone buys you a treat, it will show up here.".to_string()),
                icon: rsx! { "🍽️" },
                action_label: Some("Back to Dashboard".to_string()),
                on_action: move |_| app_state_mut.navigate(Screen::Dashboard),
            }
        },
        HistoryView::Populated {
            summary,
            transactions,
        } => rsx! {
            SummaryPanel { summary }
            div {
                class: "transaction-list",
                style: "flex: 1; overflow-y: auto; min-height: 0;",
                for transaction in transactions.iter() {
                    TransactionCard {
                        key: "{transaction.id}",
                        transaction: transaction.clone(),
                    }
                }
            }
        },
    };

    rsx! {
        div {
            class: "transaction-history",
            HistoryHeader {}
            {body}
        }
    }
}
