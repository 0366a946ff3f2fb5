//! Static site footer.

use leptos::prelude::*;

use crate::content::navigation::FOOTER_GROUPS;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__inner">
                <div class="site-footer__brand">
                    <a href="/" class="nav-bar__brand">
                        <span class="nav-bar__logo">"\u{25C6}"</span>
                        "Cadence"
                    </a>
                    <p class="site-footer__tagline">"Where teams plan, track and ship together."</p>
                </div>
                {FOOTER_GROUPS
                    .iter()
                    .map(|group| {
                        view! {
                            <div class="site-footer__group">
                                <h4>{group.title}</h4>
                                <ul>
                                    {group
                                        .links
                                        .iter()
                                        .map(|link| view! { <li><a href=link.href>{link.label}</a></li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="site-footer__legal">
                <span>"\u{00A9} 2025 Cadence Labs, Inc. All rights reserved."</span>
                <span class="site-footer__legal-links">
                    <a href="/help">"Privacy"</a>
                    <a href="/help">"Terms"</a>
                </span>
            </div>
        </footer>
    }
}
