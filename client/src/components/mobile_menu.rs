//! Full-width menu overlay for narrow viewports.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::components::nav_bar::ThemeToggle;
use crate::components::resources_panel::request_close_on;
use crate::content::navigation::{DEMO_LINK, NavLink, PRIMARY_LINKS, RESOURCE_GROUPS};

fn menu_link(link: &'static NavLink, on_request_close: Callback<()>) -> impl IntoView {
    view! {
        <a href=link.href class="mobile-menu__link" on:click={request_close_on::<MouseEvent>(on_request_close)}>
            {link.label}
        </a>
    }
}

/// Primary links, resource groups and the demo call to action.
#[component]
pub fn MobileMenu(on_request_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="mobile-menu" role="dialog" aria-label="Site menu">
            <div class="mobile-menu__header">
                <span class="mobile-menu__title">"Menu"</span>
                <button class="mobile-menu__close" aria-label="Close menu" on:click={request_close_on::<MouseEvent>(on_request_close)}>
                    "\u{2715}"
                </button>
            </div>
            <nav class="mobile-menu__section">
                {PRIMARY_LINKS.iter().map(|link| menu_link(link, on_request_close)).collect_view()}
            </nav>
            {RESOURCE_GROUPS
                .iter()
                .map(|group| {
                    view! {
                        <div class="mobile-menu__section">
                            <h3 class="mobile-menu__heading">{group.title}</h3>
                            {group.links.iter().map(|link| menu_link(link, on_request_close)).collect_view()}
                        </div>
                    }
                })
                .collect_view()}
            <div class="mobile-menu__footer">
                <ThemeToggle/>
                <a href=DEMO_LINK.href class="btn btn--primary" on:click={request_close_on::<MouseEvent>(on_request_close)}>
                    {DEMO_LINK.label}
                </a>
            </div>
        </div>
    }
}
