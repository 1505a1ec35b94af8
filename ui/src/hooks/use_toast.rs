use dioxus::prelude::*;
use std::time::Duration;

use crate::compat;

/// How long a toast stays visible before dismissing itself.
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

/// An error notification. Clicking it dismisses it early.
#[derive(Clone, PartialEq, Debug)]
pub struct ToastMessage {
    pub text: String,
    /// Distinguishes repeated identical messages so an older timer can't
    /// dismiss a newer toast.
    id: u64,
}

#[derive(Clone, Copy)]
pub struct Toaster {
    current: Signal<Option<ToastMessage>>,
    next_id: Signal<u64>,
}

impl Toaster {
    pub fn error(&mut self, text: impl Into<String>) {
        let id = *self.next_id.peek() + 1;
        self.next_id.set(id);
        self.current.set(Some(ToastMessage {
            text: text.into(),
            id,
        }));
    }

    pub fn dismiss(&mut self) {
        self.current.set(None);
    }

    /// Returns the read-only signal for the visible toast.
    /// Call .read() on this in a component to subscribe to changes.
    pub fn current(&self) -> Signal<Option<ToastMessage>> {
        self.current
    }
}

/// Dismisses the visible toast after [`TOAST_DURATION`]. A newer toast
/// restarts the timer.
pub fn use_toast_auto_dismiss(toaster: Toaster) {
    let mut current = toaster.current;
    let _timer = use_resource(move || async move {
        let Some(id) = current.read().as_ref().map(|t| t.id) else {
            return;
        };
        compat::sleep(TOAST_DURATION).await;
        if current.peek().as_ref().map(|t| t.id) == Some(id) {
            current.set(None);
        }
    });
}

/// Provides the toast channel to every component below the caller.
pub fn use_toast_provider() -> Toaster {
    let current = use_signal(|| None);
    let next_id = use_signal(|| 0);
    use_context_provider(|| Toaster { current, next_id })
}

pub fn use_toast() -> Toaster {
    use_context::<Toaster>()
}
