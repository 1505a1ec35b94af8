//! The components module contains all shared components for our app. Components are the building blocks of dioxus apps.
//! They can be used to defined common UI elements like buttons, cards, and notifications.
pub mod action_link;
pub mod empty_state;
pub mod pico;
pub mod summary_panel;
pub mod toast;
pub mod transaction_card;
