// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state_mut;
pub mod compat;
mod components;
mod currency;
pub mod history;
pub mod hooks;
mod screens;

use app_state_mut::AppStateMut;
use components::pico::Container;
use components::toast::ToastHost;
use hooks::use_toast::use_toast_provider;
use screens::auth::AuthScreen;
use screens::dashboard::DashboardScreen;
use screens::transaction_history::TransactionHistoryScreen;

/// Enum to represent the different screens in our application.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Screen {
    Dashboard,
    #[default]
    TransactionHistory,
    Auth,
}

impl Screen {
    /// Helper to get the display name for each screen.
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::TransactionHistory => "History",
            Screen::Auth => "Sign In",
        }
    }

    /// The route each screen is addressed by.
    pub fn path(&self) -> &'static str {
        match self {
            Screen::Dashboard => "/dashboard",
            Screen::TransactionHistory => "/transactions",
            Screen::Auth => "/auth",
        }
    }
}

/// Screens reachable from the navigation tabs.
const TAB_SCREENS: [Screen; 2] = [Screen::Dashboard, Screen::TransactionHistory];

/// The navigation tabs component.
#[component]
fn Tabs(mut active_screen: Signal<Screen>) -> Element {
    rsx! {
        nav {
            class: "tab-menu",
            ul {
                for screen in TAB_SCREENS {
                    li {
                        a {
                            href: "{screen.path()}",
                            class: {
                                if *active_screen.read() == screen { "active-tab" } else { "" }
                            },
                            "aria-current": {
                                if *active_screen.read() == screen { "page" } else { "false" }
                            },
                            onclick: move |event| {
                                event.prevent_default();
                                active_screen.set(screen);
                            },
                            "{screen.name()}"
                        }
                    }
                }
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let responsive_css = r#"
    /* --- RESET --- */
    * { box-sizing: border-box; }

    html, body {
        height: 100%;
        width: 100%;
        margin: 0;
        padding: 0;
        overflow: hidden;
        background-color: var(--pico-muted-border-color);
    }

    /* --- APP FRAME --- */
    .app-main-container {
        position: fixed;
        top: 0; left: 0; right: 0; bottom: 0;
        padding: 10px;

        display: flex;
        flex-direction: column;
        overflow: hidden;
        background-color: var(--pico-background-color);
    }

    .app-main-container > * {
        flex: 1;
        display: flex !important;
        flex-direction: column;
        height: 100%;
        min-height: 0;
        overflow: hidden;
        margin: 0 !important;
        width: 100% !important;
        max-width: 100% !important;
    }

    .app-main-container > * > header {
        flex-shrink: 0;
        padding: 0 1rem;
        --pico-nav-element-spacing-vertical: 0.5rem;
    }

    /* --- NAVIGATION TABS --- */
    .tab-menu a.active-tab {
        color: var(--pico-primary) !important;
        border-bottom: 3px solid var(--pico-primary);
        text-decoration: none;
    }

    .tab-menu a:not(.active-tab) {
        color: var(--pico-muted-color);
        border-bottom: 3px solid transparent;
    }

    /* --- CONTENT AREA --- */
    .app-main-container .content {
        flex: 1;
        display: flex;
        flex-direction: column;
        overflow: hidden;
        min-height: 0;
        padding: 0 1rem;
    }

    .app-main-container .content > * {
        flex: 1;
        display: flex;
        flex-direction: column;
        overflow: hidden;
        min-height: 0;
        margin-bottom: 1rem;
    }

    /* --- EMPTY STATE --- */
    .empty-state {
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        padding: 2rem;
        margin: 1rem 0;
        text-align: center;
        color: var(--pico-muted-color);
        border: 2px dashed var(--pico-card-border-color);
        border-radius: var(--pico-border-radius);
        background-color: var(--pico-card-sectioning-background-color);
    }
    .empty-state-icon { font-size: 20vmin; line-height: 1; margin-bottom: 1rem; opacity: 0.8; }
    .empty-state-title { margin-bottom: 0.5rem; color: var(--pico-h4-color); }
    .empty-state-description { max-width: 400px; margin: 0 auto 1.5rem auto; }

    /* --- TRANSACTIONS --- */
    .status-badge {
        border-radius: 1rem;
        padding: 0.1rem 0.6rem;
        font-size: 0.75rem;
        text-transform: capitalize;
    }
    .status-completed { background-color: var(--pico-ins-color); color: white; }
    .transaction-fee, .transaction-date { color: var(--pico-muted-color); }
    .buyer-note { font-style: italic; }

    /* --- TOAST --- */
    .toast {
        position: fixed;
        bottom: 1.5rem;
        left: 50%;
        transform: translateX(-50%);
        padding: 0.75rem 1.25rem;
        border-radius: var(--pico-border-radius);
        background-color: var(--pico-contrast-background);
        color: var(--pico-contrast-inverse);
        box-shadow: 0 4px 20px rgba(0,0,0,0.25);
        cursor: pointer;
        z-index: 1000;
    }
    .toast-error { background-color: var(--pico-del-color); color: white; }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css",
        }
        style {
            "{responsive_css}"
        }
        AppBody {}
    }
}

/// Provides app-wide state and switches between screens.
#[component]
fn AppBody() -> Element {
    let active_screen = use_signal(Screen::default);
    let session = use_signal(|| None);

    use_context_provider(|| AppStateMut {
        active_screen,
        session,
    });
    use_toast_provider();

    rsx! {
        div {
            class: "app-main-container",
            Container {
                header {
                    nav {
                        ul {
                            li {
                                strong { "FoodGift" }
                            }
                        }
                        ul {
                            li {
                                Tabs {
                                    active_screen,
                                }
                            }
                        }
                    }
                }
                div {
                    class: "content",
                    match active_screen() {
                        Screen::Dashboard => rsx! {
                            DashboardScreen {}
                        },
                        Screen::TransactionHistory => rsx! {
                            TransactionHistoryScreen {}
                        },
                        Screen::Auth => rsx! {
                            AuthScreen {}
                        },
                    }
                }
            }
            ToastHost {}
        }
    }
}
