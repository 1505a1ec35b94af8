//! Renders the transient notification published through [`Toaster`].

use crate::hooks::use_toast::use_toast;
use crate::hooks::use_toast::use_toast_auto_dismiss;
use dioxus::prelude::*;

/// Mount once near the root. Shows the current toast, if any.
#[component]
pub fn ToastHost() -> Element {
    let mut toaster = use_toast();
    use_toast_auto_dismiss(toaster);

    let current = toaster.current();
    let toast = current.read().clone();

    rsx! {
        if let Some(toast) = toast {
            div {
                class: "toast toast-error",
                role: "status",
                onclick: move |_| toaster.dismiss(),
                "{toast.text}"
            }
        }
    }
}
