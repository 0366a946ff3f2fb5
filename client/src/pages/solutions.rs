//! Per-team solution pages.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::page_shell::PageShell;
use crate::components::sections::{CallToAction, PageHero};
use crate::content::solutions::{SOLUTIONS, Solution, solution_or_first};

#[component]
pub fn SolutionsPage() -> impl IntoView {
    view! {
        <PageShell>
            <PageHero eyebrow="Solutions" title="Cadence for every team" subtitle="See how teams across your company put Cadence to work."/>
            <section class="card-grid">
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
            </section>
        </PageShell>
    }
}

fn solution_detail(solution: &'static Solution) -> impl IntoView {
    view! {
        <section class="page-hero">
            <span class="page-hero__eyebrow">{solution.name}</span>
            <h1 class="page-hero__title">{solution.tagline}</h1>
            <p class="page-hero__subtitle">{solution.summary}</p>
        </section>
        <section class="section">
            <ul class="check-list">{solution.benefits.iter().map(|b| view! { <li>{*b}</li> }).collect_view()}</ul>
        </section>
    }
}

/// Solution for `slug`; unknown slugs render the first solution.
#[component]
pub fn SolutionDetail(#[prop(into)] slug: Signal<String>) -> impl IntoView {
    move || slug.with(|slug| solution_or_first(slug).map(solution_detail))
}

/// `/solutions/:slug`.
#[component]
pub fn SolutionPage() -> impl IntoView {
    let params = use_params_map();
    let slug = Signal::derive(move || params.read().get("slug").unwrap_or_default());

    view! {
        <PageShell>
            <SolutionDetail slug=slug/>
            <CallToAction/>
        </PageShell>
    }
}
