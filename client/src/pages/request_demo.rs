//! Demo request form.

use leptos::prelude::*;

use crate::components::page_shell::PageShell;
use crate::components::submission_form::SubmissionForm;
use crate::state::forms::{FormDraft, FormKind};

const DEMO_HIGHLIGHTS: &[&str] = &[
    "A 30-minute walkthrough tailored to your team",
    "Answers on security, SSO and data migration",
    "A custom onboarding plan",
];

#[component]
pub fn RequestDemoPage() -> impl IntoView {
    let draft = RwSignal::new(FormDraft::new(FormKind::RequestDemo));

    view! {
        <PageShell>
            <section class="split-section">
                <div class="split-section__copy">
                    <span class="page-hero__eyebrow">"Request a demo"</span>
                    <h1>"See Cadence in action"</h1>
                    <p>"Book time with our product team and we'll show you how Cadence fits the way you work."</p>
                    <ul class="check-list">
                        {DEMO_HIGHLIGHTS.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                    </ul>
                </div>
                <div class="split-section__form">
                    <SubmissionForm draft=draft/>
                </div>
            </section>
        </PageShell>
    }
}
