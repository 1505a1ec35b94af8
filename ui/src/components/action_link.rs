use crate::app_state_mut::AppStateMut;
use crate::Screen;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ActionLinkProps {
    /// Screen to navigate to when clicked.
    #[props(optional)]
    pub to: Option<Screen>,

    pub children: Element,
}

/// An in-app link. Renders the target's route as `href` but navigates by
/// switching the active screen.
#[component]
pub fn ActionLink(props: ActionLinkProps) -> Element {
    let mut app_state_mut = use_context::<AppStateMut>();
    let href = props.to.as_ref().map(Screen::path).unwrap_or("#");

    rsx! {
        a {
            href: "{href}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();

                if let Some(target) = &props.to {
                    app_state_mut.navigate(*target);
                }
            },
            {props.children}
        }
    }
}
