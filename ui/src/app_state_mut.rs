//! Defines the mutable, reactive state for the application's UI.

use api::session::Session;
use dioxus::prelude::*;

use crate::Screen;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// This struct holds `Signal`s for any UI-related state that needs to change
/// and trigger automatic re-renders in the view.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// The screen currently shown.
    pub active_screen: Signal<Screen>,
    /// The signed-in user, once a screen has looked it up. `None` when
    /// signed out or not yet known.
    pub session: Signal<Option<Session>>,
}

impl AppStateMut {
    pub fn navigate(&mut self, screen: Screen) {
        dioxus_logger::tracing::debug!("navigate to {}", screen.path());
        self.active_screen.set(screen);
    }
}
