//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// A responsive grid layout.
/// Wraps its children in a `<div class="grid">`.
#[component]
pub fn Grid(children: Element) -> Element {
    rsx! { div { class: "grid", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

/// Pico's built-in busy indicator, followed by a caption.
#[component]
pub fn Spinner(caption: String) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; padding: 3rem 0;",
            span { "aria-busy": "true" }
            p { style: "margin-top: 1rem; color: var(--pico-muted-color);", "{caption}" }
        }
    }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let class_str = match (&props.button_type, props.outline) {
        (ButtonType::Primary, false) => "",
        (ButtonType::Primary, true) | (ButtonType::Secondary, _) => "secondary",
    };
    let outline = if props.outline { "outline" } else { "" };
    rsx! {
        button {
            class: "{class_str} {outline}",
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}
