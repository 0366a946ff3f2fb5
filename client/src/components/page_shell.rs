//! Shared page layout: navigation bar, isolated content, footer, chat widget.
//!
//! ARCHITECTURE
//! ============
//! Page content renders inside an `ErrorBoundary`. An `Err` anywhere in the
//! content subtree swaps that region for `FaultNotice`; the navigation bar,
//! footer and chat widget are siblings of the boundary and keep rendering.
//!
//! A render fault here means content yielding `Result::Err` (for example a
//! `PageError` from a catalogue lookup). Panics are not isolated: the wasm
//! release profile sets `panic = "abort"`, so a panic in any component ends
//! the whole app.

use leptos::prelude::*;

use crate::components::chat_widget::ChatWidget;
use crate::components::footer::Footer;
use crate::components::nav_bar::NavBar;
use crate::state::theme::use_theme;

pub const FAULT_MESSAGE: &str = "Something went wrong while loading this page.";

/// Fallback rendered in place of failed page content.
#[component]
pub fn FaultNotice() -> impl IntoView {
    view! {
        <section class="fault-notice" role="alert">
            <h2 class="fault-notice__title">{FAULT_MESSAGE}</h2>
            <p class="fault-notice__body">"Try refreshing, or head back to the home page."</p>
            <a href="/" class="btn btn--secondary">"Back to home"</a>
        </section>
    }
}

/// Wraps a page's content in the site chrome.
#[component]
pub fn PageShell(children: Children) -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class="site" data-theme=move || theme.get().as_str()>
            <NavBar/>
            <main class="site__content">
                <ErrorBoundary fallback=|_errors| view! { <FaultNotice/> }>{children()}</ErrorBoundary>
            </main>
            <Footer/>
            <ChatWidget/>
        </div>
    }
}
