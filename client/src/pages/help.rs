//! Help center: topic index, guides, guide detail and the support ticket form.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::page_shell::PageShell;
use crate::components::sections::PageHero;
use crate::components::submission_form::SubmissionForm;
use crate::content::faq::HELP_TOPICS;
use crate::content::guides::{GUIDES, Guide, guide_or_first};
use crate::state::forms::{FormDraft, FormKind};

#[component]
pub fn HelpPage() -> impl IntoView {
    view! {
        <PageShell>
            <PageHero eyebrow="Help center" title="How can we help?" subtitle="Find answers, learn the basics or reach our support team."/>
            <section class="card-grid">
                {HELP_TOPICS
                    .iter()
                    .map(|(title, description, href)| {
                        view! {
                            <a href=*href class="topic-card">
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </a>
                        }
                    })
                    .collect_view()}
            </section>
        </PageShell>
    }
}

#[component]
pub fn GuidesPage() -> impl IntoView {
    view! {
        <PageShell>
            <PageHero eyebrow="Guides" title="Learn Cadence step by step" subtitle="Short walkthroughs for the things teams set up first."/>
            <section class="card-grid">
                {GUIDES
                    .iter()
                    .map(|guide| {
                        view! {
                            <a href=format!("/help/guides/{}", guide.slug) class="post-card">
                                <span class="post-card__category">{guide.category}</span>
                                <h3 class="post-card__title">{guide.title}</h3>
                                <p class="post-card__excerpt">{guide.summary}</p>
                            </a>
                        }
                    })
                    .collect_view()}
            </section>
        </PageShell>
    }
}

fn guide_article(guide: &'static Guide) -> impl IntoView {
    view! {
        <article class="post">
            <a href="/help/guides" class="post__back">"\u{2190} All guides"</a>
            <span class="post-card__category">{guide.category}</span>
            <h1 class="post__title">{guide.title}</h1>
            <p class="post__lead">{guide.summary}</p>
            <ol class="guide-steps">{guide.steps.iter().map(|step| view! { <li>{*step}</li> }).collect_view()}</ol>
            <p class="post__footer">
                "Still stuck? " <a href="/help/ticket">"Submit a ticket"</a>
            </p>
        </article>
    }
}

/// Guide for `slug`; unknown slugs render the first guide.
#[component]
pub fn GuideDetail(#[prop(into)] slug: Signal<String>) -> impl IntoView {
    move || slug.with(|slug| guide_or_first(slug).map(guide_article))
}

/// `/help/guides/:slug`.
#[component]
pub fn GuidePage() -> impl IntoView {
    let params = use_params_map();
    let slug = Signal::derive(move || params.read().get("slug").unwrap_or_default());

    view! {
        <PageShell>
            <GuideDetail slug=slug/>
        </PageShell>
    }
}

#[component]
pub fn TicketPage() -> impl IntoView {
    let draft = RwSignal::new(FormDraft::new(FormKind::SupportTicket));

    view! {
        <PageShell>
            <PageHero eyebrow="Support" title="Submit a ticket" subtitle="Describe the problem and we'll get back to you within one business day."/>
            <section class="section section--narrow">
                <SubmissionForm draft=draft/>
            </section>
        </PageShell>
    }
}
