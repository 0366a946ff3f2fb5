//! General contact form.

use leptos::prelude::*;

use crate::components::page_shell::PageShell;
use crate::components::sections::PageHero;
use crate::components::submission_form::SubmissionForm;
use crate::state::forms::{FormDraft, FormKind};

const OFFICES: &[(&str, &str)] = &[
    ("San Francisco", "500 Howard St, San Francisco, CA"),
    ("London", "1 Finsbury Ave, London"),
    ("Remote", "Teammates in 20+ countries"),
];

#[component]
pub fn ContactPage() -> impl IntoView {
    let draft = RwSignal::new(FormDraft::new(FormKind::Contact));

    view! {
        <PageShell>
            <PageHero eyebrow="Contact" title="Get in touch" subtitle="Questions about Cadence? We'd love to hear from you."/>
            <section class="split-section">
                <div class="split-section__copy">
                    <p>"Email " <a href="mailto:hello@cadence.example">"hello@cadence.example"</a></p>
                    <ul class="office-list">
                        {OFFICES
                            .iter()
                            .map(|(city, address)| {
                                view! {
                                    <li>
                                        <strong>{*city}</strong>
                                        <span>{*address}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div class="split-section__form">
                    <SubmissionForm draft=draft/>
                </div>
            </section>
        </PageShell>
    }
}
