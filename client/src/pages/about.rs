//! Company story, values and leadership.

use leptos::prelude::*;

use crate::components::page_shell::PageShell;
use crate::components::sections::PageHero;

const VALUES: &[(&str, &str)] = &[
    ("Clarity over noise", "We build tools that make the important work obvious."),
    ("Default to trust", "Teams do their best work when information is open."),
    ("Ship, learn, repeat", "Small releases, real feedback, steady improvement."),
];

const LEADERSHIP: &[(&str, &str)] = &[
    ("Jordan Ellis", "Co-founder & CEO"),
    ("Sam Okafor", "Co-founder & CTO"),
    ("Mei Tanaka", "VP of Product"),
    ("Luis Ortega", "VP of Customer Success"),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <PageShell>
            <PageHero
                eyebrow="About us"
                title="We help teams do their best work together"
                subtitle="Cadence started in 2019 with a simple idea: collaboration software should get out of the way."
            />
            <section class="section">
                <h2 class="section__title">"Our values"</h2>
                <div class="card-grid">
                    {VALUES
                        .iter()
                        .map(|(title, body)| {
                            view! {
                                <div class="value-card">
                                    <h3>{*title}</h3>
                                    <p>{*body}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
            <section class="section">
                <h2 class="section__title">"Leadership"</h2>
                <div class="team-grid">
                    {LEADERSHIP
                        .iter()
                        .map(|(name, role)| {
                            view! {
                                <div class="team-member">
                                    <div class="team-member__avatar" aria-hidden="true">{name.chars().next().unwrap_or('?')}</div>
                                    <h3>{*name}</h3>
                                    <p>{*role}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </PageShell>
    }
}
