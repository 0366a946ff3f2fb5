//! Open positions and perks.

use leptos::prelude::*;

use crate::components::page_shell::PageShell;
use crate::components::sections::PageHero;
use crate::content::careers::{JOBS, PERKS};

#[component]
pub fn CareersPage() -> impl IntoView {
    view! {
        <PageShell>
            <PageHero
                eyebrow="Careers"
                title="Build the future of teamwork"
                subtitle="We're a remote-first team of builders who care about craft and each other."
            />
            <section class="section">
                <h2 class="section__title">"Why Cadence"</h2>
                <div class="card-grid">
                    {PERKS
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
                <h2 class="section__title">"Open positions"</h2>
                <ul class="job-list">
                    {JOBS
                        .iter()
                        .map(|job| {
                            view! {
                                <li class="job-list__item">
                                    <div>
                                        <h3 class="job-list__title">{job.title}</h3>
                                        <p class="job-list__meta">
                                            {job.department}" \u{00B7} "{job.location}" \u{00B7} "{job.kind}
                                        </p>
                                    </div>
                                    <a href=format!("/apply?position={}", job.id) class="btn btn--secondary">
                                        "Apply"
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>
        </PageShell>
    }
}
