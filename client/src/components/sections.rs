//! Presentational building blocks shared by the marketing pages.

use leptos::prelude::*;

use crate::content::features::Feature;

/// Page heading band.
#[component]
pub fn PageHero(
    title: &'static str,
    subtitle: &'static str,
    #[prop(optional)] eyebrow: Option<&'static str>,
) -> impl IntoView {
    view! {
        <section class="page-hero">
            {eyebrow.map(|text| view! { <span class="page-hero__eyebrow">{text}</span> })}
            <h1 class="page-hero__title">{title}</h1>
            <p class="page-hero__subtitle">{subtitle}</p>
        </section>
    }
}

#[component]
pub fn FeatureCard(feature: &'static Feature) -> impl IntoView {
    view! {
        <div class="feature-card">
            <span class="feature-card__icon" aria-hidden="true">{feature.icon}</span>
            <h3 class="feature-card__title">{feature.title}</h3>
            <p class="feature-card__description">{feature.description}</p>
        </div>
    }
}

/// Closing banner pointing at the demo request page.
#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="cta-banner">
            <h2>"Ready to bring your team together?"</h2>
            <p>"Join thousands of teams who plan, track and ship with Cadence."</p>
            <div class="cta-banner__actions">
                <a href="/request-demo" class="btn btn--primary">"Request a demo"</a>
                <a href="/pricing" class="btn btn--secondary">"See pricing"</a>
            </div>
        </section>
    }
}
