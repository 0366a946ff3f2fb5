//! Plan comparison page.

use leptos::prelude::*;

use crate::components::page_shell::PageShell;
use crate::components::sections::PageHero;
use crate::content::faq::FAQ;
use crate::content::pricing::{PLANS, Plan};

fn plan_card(plan: &'static Plan) -> impl IntoView {
    let class = if plan.highlighted { "pricing-card pricing-card--highlighted" } else { "pricing-card" };
    view! {
        <div class=class>
            {plan.highlighted.then_some(view! { <span class="pricing-card__badge">"Most popular"</span> })}
            <h3 class="pricing-card__name">{plan.name}</h3>
            <p class="pricing-card__price">
                {plan.price}
                <span class="pricing-card__period">{plan.period}</span>
            </p>
            <p class="pricing-card__description">{plan.description}</p>
            <ul class="pricing-card__features">
                {plan.features.iter().map(|f| view! { <li>"\u{2713} "{*f}</li> }).collect_view()}
            </ul>
            <a href=plan.cta_href class="btn btn--primary">{plan.cta_label}</a>
        </div>
    }
}

#[component]
pub fn PricingPage() -> impl IntoView {
    view! {
        <PageShell>
            <PageHero title="Simple, transparent pricing" subtitle="Start free. Upgrade when your team is ready."/>
            <section class="pricing-grid">{PLANS.iter().map(plan_card).collect_view()}</section>
            <section class="section">
                <h2 class="section__title">"Frequently asked questions"</h2>
                <div class="faq-list">
                    {FAQ
                        .iter()
                        .map(|(question, answer)| {
                            view! {
                                <details class="faq-item">
                                    <summary>{*question}</summary>
                                    <p>{*answer}</p>
                                </details>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </PageShell>
    }
}
