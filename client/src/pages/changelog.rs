//! Release history.

use leptos::prelude::*;

use crate::components::page_shell::PageShell;
use crate::components::sections::PageHero;
use crate::content::changelog::RELEASES;

#[component]
pub fn ChangelogPage() -> impl IntoView {
    view! {
        <PageShell>
            <PageHero eyebrow="Changelog" title="What's new in Cadence" subtitle="New features, improvements and fixes, newest first."/>
            <section class="release-list">
                {RELEASES
                    .iter()
                    .map(|release| {
                        view! {
                            <article class="release">
                                <header class="release__header">
                                    <span class="release__version">{release.version}</span>
                                    <time class="release__date">{release.date}</time>
                                </header>
                                <h3 class="release__title">{release.title}</h3>
                                <ul>{release.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}</ul>
                            </article>
                        }
                    })
                    .collect_view()}
            </section>
        </PageShell>
    }
}
