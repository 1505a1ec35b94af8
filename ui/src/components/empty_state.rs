//! Placeholder panel for a screen with nothing to show yet.

use crate::components::pico::Button;
use dioxus::prelude::*;

/// Title, optional description and icon, and an optional single action.
///
/// The action button is rendered only when `action_label` is set; clicking
/// it calls `on_action`.
#[component]
pub fn EmptyState(
    title: String,
    #[props(default)] description: Option<String>,
    #[props(default)] icon: Option<Element>,
    #[props(default)] action_label: Option<String>,
    #[props(optional)] on_action: Option<EventHandler<MouseEvent>>,
) -> Element {
    rsx! {
        div {
            class: "empty-state",
            if let Some(icon) = icon {
                div { class: "empty-state-icon", {icon} }
            }
            h4 { class: "empty-state-title", "{title}" }
            if let Some(desc) = description {
                p { class: "empty-state-description", "{desc}" }
            }
            if let Some(label) = action_label {
                Button {
                    on_click: move |evt| {
                        if let Some(handler) = &on_action {
                            handler.call(evt);
                        }
                    },
                    "{label}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Callbacks must be created inside the Dioxus runtime, so the element is
    // built from within a component rather than in the test body.
    #[component]
    fn Labelled() -> Element {
        rsx! {
            EmptyState {
                title: "No transactions yet".to_string(),
                description: Some("Nothing here.".to_string()),
                action_label: Some("Back to Dashboard".to_string()),
                on_action: move |_| {},
            }
        }
    }

    #[test]
    fn renders_action_button_when_labelled() {
        let html = dioxus_ssr::render_element(rsx! { Labelled {} });

        assert!(html.contains("No transactions yet"));
        assert!(html.contains("Nothing here."));
        assert!(html.contains("<button"));
        assert!(html.contains("Back to Dashboard"));
    }

    #[test]
    fn omits_button_and_description_when_absent() {
        let html = dioxus_ssr::render_element(rsx! {
            EmptyState { title: "Empty".to_string() }
        });

        assert!(html.contains("Empty"));
        assert!(!html.contains("<button"));
        assert!(!html.contains("<p"));
    }
}
