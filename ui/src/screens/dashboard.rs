//=============================================================================
// File: src/screens/dashboard.rs
//=============================================================================
use crate::app_state_mut::AppStateMut;
use crate::components::action_link::ActionLink;
use crate::components::pico::Card;
use crate::Screen;
use dioxus::prelude::*;

#[component]
pub fn DashboardScreen() -> Element {
    let app_state_mut = use_context::<AppStateMut>();
    let greeting = match &*app_state_mut.session.read() {
        Some(session) => match &session.email {
            Some(email) => format!("Signed in as {email}"),
            None => "Signed in".to_string(),
        },
        None => "Welcome".to_string(),
    };

    rsx! {
        Card {
            h3 { "Dashboard" }
            p { "{greeting}" }
            ActionLink {
                to: Screen::TransactionHistory,
                "View received gifts"
            }
        }
    }
}
