//! Generic renderer for the simulated submission forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Demo request, job application, support ticket and contact pages all hand a
//! `FormDraft` signal to `SubmissionForm`. Required-field checks are left to
//! native browser validation (`required` attributes); the draft re-checks them
//! before entering the submitting phase. After `FORM_SUBMIT_DELAY` the form is
//! replaced by a confirmation echoing selected values.

#[cfg(test)]
#[path = "submission_form_test.rs"]
mod submission_form_test;

use leptos::prelude::*;

use crate::state::forms::{FieldKind, FieldSpec, FormDraft, FormError, SubmissionPhase, new_ticket_reference};
use crate::util::deferred::{FORM_SUBMIT_DELAY, Liveness, Scheduler, use_scheduler};

/// Start a simulated submission and schedule its completion.
///
/// # Errors
///
/// Propagates `FormDraft::begin_submit` failures; nothing is scheduled then.
pub fn submit_form(draft: RwSignal<FormDraft>, scheduler: &dyn Scheduler, liveness: &Liveness) -> Result<(), FormError> {
    let Some(started) = draft.try_update(FormDraft::begin_submit) else {
        return Ok(());
    };
    started?;

    let kind = draft.with_untracked(FormDraft::kind);
    leptos::logging::log!("{kind:?} submission started");

    let complete = liveness.guard("form submission", move || {
        let reference = kind.issues_reference().then(new_ticket_reference);
        if draft.try_update(|d| d.complete_submit(reference)) == Some(true) {
            leptos::logging::log!("{kind:?} submission completed");
        }
    });
    scheduler.schedule(FORM_SUBMIT_DELAY, complete);
    Ok(())
}

fn set_field(draft: RwSignal<FormDraft>, name: &'static str, value: String) {
    if let Some(Err(err)) = draft.try_update(|d| d.set(name, value)) {
        leptos::logging::warn!("form field update rejected: {err}");
    }
}

#[component]
fn FormField(draft: RwSignal<FormDraft>, spec: &'static FieldSpec) -> impl IntoView {
    let name = spec.name;
    let value = move || draft.with(|d| d.value(name).to_owned());
    let locked = move || draft.with(|d| d.phase() != SubmissionPhase::Idle);

    let control = match spec.kind {
        FieldKind::TextArea => view! {
            <textarea
                id=name
                name=name
                rows="5"
                required=spec.required
                disabled=locked
                prop:value=value
                on:input=move |ev| set_field(draft, name, event_target_value(&ev))
            ></textarea>
        }
        .into_any(),
        FieldKind::Select(options) => view! {
            <select
                id=name
                name=name
                required=spec.required
                disabled=locked
                prop:value=value
                on:change=move |ev| set_field(draft, name, event_target_value(&ev))
            >
                <option value="">"Select..."</option>
                {options.iter().map(|option| view! { <option value=*option>{*option}</option> }).collect_view()}
            </select>
        }
        .into_any(),
        kind => view! {
            <input
                id=name
                name=name
                type=kind.input_type()
                required=spec.required
                disabled=locked
                prop:value=value
                on:input=move |ev| set_field(draft, name, event_target_value(&ev))
            />
        }
        .into_any(),
    };

    view! {
        <div class="form-field">
            <label class="form-field__label" for=name>
                {spec.label}
                {spec.required.then_some(view! { <span class="form-field__required">" *"</span> })}
            </label>
            {control}
        </div>
    }
}

#[component]
fn Confirmation(draft: RwSignal<FormDraft>) -> impl IntoView {
    let kind = draft.with_untracked(FormDraft::kind);
    view! {
        <div class="form-confirmation" role="status">
            <div class="form-confirmation__icon">"\u{2713}"</div>
            <h2 class="form-confirmation__title">{kind.confirmation_title()}</h2>
            <dl class="form-confirmation__echo">
                {move || {
                    draft
                        .with(FormDraft::confirmation_echo)
                        .into_iter()
                        .map(|(label, value)| view! {
                            <dt>{label}</dt>
                            <dd>{value}</dd>
                        })
                        .collect_view()
                }}
            </dl>
            <a href="/" class="btn btn--secondary">"Back to home"</a>
        </div>
    }
}

/// Form for `draft`, swapped for a confirmation once submitted.
#[component]
pub fn SubmissionForm(draft: RwSignal<FormDraft>) -> impl IntoView {
    let scheduler = use_scheduler();
    let liveness = Liveness::for_current_owner();
    let kind = draft.with_untracked(FormDraft::kind);

    let submit = Callback::new(move |()| {
        if let Err(err) = submit_form(draft, scheduler.as_dyn(), &liveness) {
            leptos::logging::warn!("{kind:?} submission rejected: {err}");
        }
    });

    let submitting = move || draft.with(FormDraft::is_submitting);

    view! {
        <Show
            when=move || draft.with(FormDraft::is_submitted)
            fallback=move || {
                view! {
                    <form
                        class="submission-form"
                        on:submit=move |ev: leptos::ev::SubmitEvent| {
                            ev.prevent_default();
                            submit.run(());
                        }
                    >
                        {kind.fields().iter().map(|spec| view! { <FormField draft=draft spec=spec/> }).collect_view()}
                        <button type="submit" class="btn btn--primary submission-form__submit" disabled=submitting>
                            {move || if submitting() { kind.progress_label() } else { kind.submit_label() }}
                        </button>
                    </form>
                }
            }
        >
            <Confirmation draft=draft/>
        </Show>
    }
}
