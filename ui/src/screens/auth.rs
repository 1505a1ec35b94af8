//=============================================================================
// File: src/screens/auth.rs
//=============================================================================
use crate::app_state_mut::AppStateMut;
use crate::components::empty_state::EmptyState;
use crate::Screen;
use dioxus::prelude::*;

/// Landing spot for signed-out users. Signing in happens outside this app;
/// once a session exists, retrying picks it up.
#[component]
pub fn AuthScreen() -> Element {
    let mut app_state_mut = use_context::<AppStateMut>();

    rsx! {
        EmptyState {
            title: "Sign in required".to_string(),
            description: Some("Sign in to see the gifts you have received.".to_string()),
            icon: rsx! { "🔒" },
            action_label: Some("Try again".to_string()),
            on_action: move |_| app_state_mut.navigate(Screen::TransactionHistory),
        }
    }
}
