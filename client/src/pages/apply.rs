//! Job application form (`/apply?position=<job id>`).

#[cfg(test)]
#[path = "apply_test.rs"]
mod apply_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::page_shell::PageShell;
use crate::components::sections::PageHero;
use crate::components::submission_form::SubmissionForm;
use crate::content::careers::job_by_id;
use crate::state::forms::{FormDraft, FormKind};

/// Empty application, with the position pre-filled when `position_id`
/// names a known opening.
pub fn prefilled_application(position_id: Option<&str>) -> FormDraft {
    let mut draft = FormDraft::new(FormKind::ApplyNow);
    if let Some(job) = position_id.and_then(job_by_id) {
        if let Err(err) = draft.set("position", job.title) {
            leptos::logging::warn!("could not pre-fill position: {err}");
        }
    }
    draft
}

#[component]
pub fn ApplyPage() -> impl IntoView {
    let query = use_query_map();
    let position_id = query.with_untracked(|q| q.get("position"));
    let draft = RwSignal::new(prefilled_application(position_id.as_deref()));

    view! {
        <PageShell>
            <PageHero
                eyebrow="Careers"
                title="Apply to join Cadence"
                subtitle="Tell us about yourself. We read every application."
            />
            <section class="section section--narrow">
                <SubmissionForm draft=draft/>
            </section>
        </PageShell>
    }
}
