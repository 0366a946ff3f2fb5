//! Fixed site header with primary links and overlay toggles.
//!
//! DESIGN
//! ======
//! The bar owns a `NavState` signal for its two overlays. Overlays receive a
//! close callback rather than the signal itself, so they never depend on the
//! bar's state shape. The theme toggle delegates to the shared `ThemeContext`.

use leptos::prelude::*;

use crate::components::mobile_menu::MobileMenu;
use crate::components::resources_panel::ResourcesPanel;
use crate::content::navigation::{DEMO_LINK, PRIMARY_LINKS};
use crate::state::nav::NavState;
use crate::state::theme::use_theme;
use crate::util::dark_mode;

fn expanded(open: bool) -> &'static str {
    if open { "true" } else { "false" }
}

/// Light/dark switch bound to the shared theme.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    view! {
        <button
            class="theme-toggle"
            aria-label=move || dark_mode::toggle_label(theme.get())
            title=move || dark_mode::toggle_label(theme.get())
            on:click=move |_| {
                theme.toggle();
            }
        >
            {move || dark_mode::toggle_icon(theme.get())}
        </button>
    }
}

/// Top navigation bar with the resources dropdown and mobile menu.
#[component]
pub fn NavBar() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());

    let resources_open = move || nav.with(|n| n.resources_open);
    let mobile_menu_open = move || nav.with(|n| n.mobile_menu_open);

    view! {
        <header class="nav-bar">
            <div class="nav-bar__inner">
                <a href="/" class="nav-bar__brand">
                    <span class="nav-bar__logo">"\u{25C6}"</span>
                    "Cadence"
                </a>

                <nav class="nav-bar__links" aria-label="Primary">
                    {PRIMARY_LINKS
                        .iter()
                        .map(|link| view! { <a href=link.href class="nav-bar__link">{link.label}</a> })
                        .collect_view()}
                    <button
                        class="nav-bar__link nav-bar__resources-toggle"
                        aria-haspopup="true"
                        aria-expanded=move || expanded(resources_open())
                        on:click=move |_| nav.update(NavState::toggle_resources)
                    >
                        "Resources"
                        <span class="nav-bar__caret">{move || if resources_open() { "\u{25B4}" } else { "\u{25BE}" }}</span>
                    </button>
                </nav>

                <div class="nav-bar__actions">
                    <ThemeToggle/>
                    <a href=DEMO_LINK.href class="btn btn--primary nav-bar__cta">{DEMO_LINK.label}</a>
                    <button
                        class="nav-bar__menu-toggle"
                        aria-label="Toggle menu"
                        aria-expanded=move || expanded(mobile_menu_open())
                        on:click=move |_| nav.update(NavState::toggle_mobile_menu)
                    >
                        {move || if mobile_menu_open() { "\u{2715}" } else { "\u{2630}" }}
                    </button>
                </div>
            </div>
        </header>

        <NavOverlays nav=nav/>
    }
}

/// Overlays for the flags in `nav`; each closes only its own flag.
#[component]
pub fn NavOverlays(nav: RwSignal<NavState>) -> impl IntoView {
    let close_resources = Callback::new(move |()| nav.update(NavState::close_resources));
    let close_mobile_menu = Callback::new(move |()| nav.update(NavState::close_mobile_menu));

    view! {
        <Show when=move || nav.with(|n| n.resources_open)>
            <ResourcesPanel on_request_close=close_resources/>
        </Show>
        <Show when=move || nav.with(|n| n.mobile_menu_open)>
            <MobileMenu on_request_close=close_mobile_menu/>
        </Show>
    }
}
