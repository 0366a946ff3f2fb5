//! Resources dropdown rendered below the navigation bar.

#[cfg(test)]
#[path = "resources_panel_test.rs"]
mod resources_panel_test;

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::content::navigation::RESOURCE_GROUPS;

/// Event handler that asks the overlay's owner to close it.
///
/// Shared by every link and close control in the navigation overlays.
pub(crate) fn request_close_on<E: 'static>(on_request_close: Callback<()>) -> impl Fn(E) + Copy + Send + Sync + 'static {
    move |_| on_request_close.run(())
}

/// Fixed-position panel of grouped resource links.
///
/// Every link and the close control call `on_request_close`; the owner
/// decides what closing means.
#[component]
pub fn ResourcesPanel(on_request_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="resources-panel" role="menu">
            <div class="resources-panel__inner">
                {RESOURCE_GROUPS
                    .iter()
                    .map(|group| {
                        view! {
                            <div class="resources-panel__group">
                                <h3 class="resources-panel__heading">{group.title}</h3>
                                <ul>
                                    {group
                                        .links
                                        .iter()
                                        .map(|link| {
                                            view! {
                                                <li>
                                                    <a
                                                        href=link.href
                                                        class="resources-panel__link"
                                                        role="menuitem"
                                                        on:click={request_close_on::<MouseEvent>(on_request_close)}
                                                    >
                                                        {link.label}
                                                    </a>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
                <button
                    class="resources-panel__close"
                    aria-label="Close resources"
                    on:click={request_close_on::<MouseEvent>(on_request_close)}
                >
                    "\u{2715}"
                </button>
            </div>
        </div>
    }
}
