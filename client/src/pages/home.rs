//! Landing page.

use leptos::prelude::*;

use crate::components::page_shell::PageShell;
use crate::components::sections::{CallToAction, FeatureCard};
use crate::content::features::{FEATURES, STATS};
use crate::content::solutions::SOLUTIONS;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageShell>
            <section class="home-hero">
                <span class="page-hero__eyebrow">"New: Timeline dependencies"</span>
                <h1 class="home-hero__title">"Where teams plan, track and ship together"</h1>
                <p class="home-hero__subtitle">
                    "Cadence brings projects, conversations and docs into one workspace so nothing falls through the cracks."
                </p>
                <div class="home-hero__actions">
                    <a href="/request-demo" class="btn btn--primary">"Request a demo"</a>
                    <a href="/features" class="btn btn--secondary">"Explore features"</a>
                </div>
            </section>

            <section class="stats-band">
                {STATS
                    .iter()
                    .map(|(value, label)| {
                        view! {
                            <div class="stats-band__item">
                                <span class="stats-band__value">{*value}</span>
                                <span class="stats-band__label">{*label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="section">
                <h2 class="section__title">"Everything your team needs"</h2>
                <div class="card-grid">
                    {FEATURES.iter().take(3).map(|feature| view! { <FeatureCard feature=feature/> }).collect_view()}
                </div>
                <a href="/features" class="section__more">"See all features \u{2192}"</a>
            </section>

            <section class="section">
                <h2 class="section__title">"Built for every team"</h2>
                <div class="card-grid">
                    {SOLUTIONS
                        .iter()
                        .map(|solution| {
                            view! {
                                <a href=format!("/solutions/{}", solution.slug) class="solution-card">
                                    <h3>{solution.name}</h3>
                                    <p>{solution.tagline}</p>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <CallToAction/>
        </PageShell>
    }
}
