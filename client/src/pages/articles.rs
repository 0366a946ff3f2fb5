//! Best-practice articles.

use leptos::prelude::*;

use crate::components::page_shell::PageShell;
use crate::components::sections::PageHero;
use crate::content::articles::ARTICLES;

#[component]
pub fn ArticlesPage() -> impl IntoView {
    view! {
        <PageShell>
            <PageHero eyebrow="Articles" title="Best practices for collaborative teams" subtitle="Practical advice from teams who run on Cadence."/>
            <section class="card-grid">
                {ARTICLES
                    .iter()
                    .map(|article| {
                        view! {
                            <div class="post-card">
                                <span class="post-card__category">{article.category}</span>
                                <h3 class="post-card__title">{article.title}</h3>
                                <p class="post-card__excerpt">{article.summary}</p>
                                <p class="post-card__meta">{article.read_time}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
        </PageShell>
    }
}
