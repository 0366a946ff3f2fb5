//! Feature overview page.

use leptos::prelude::*;

use crate::components::page_shell::PageShell;
use crate::components::sections::{CallToAction, FeatureCard, PageHero};
use crate::content::features::FEATURES;

const INTEGRATIONS: &[&str] = &["Slack", "GitHub", "GitLab", "Google Drive", "Figma", "Zoom", "Jira", "Salesforce"];

#[component]
pub fn FeaturesPage() -> impl IntoView {
    view! {
        <PageShell>
            <PageHero
                eyebrow="Features"
                title="Powerful features for modern teams"
                subtitle="Plan projects, track progress and collaborate in real time, all in one place."
            />
            <section class="section">
                <div class="card-grid">
                    {FEATURES.iter().map(|feature| view! { <FeatureCard feature=feature/> }).collect_view()}
                </div>
            </section>
            <section class="section">
                <h2 class="section__title">"Works with the tools you already use"</h2>
                <div class="integration-list">
                    {INTEGRATIONS.iter().map(|name| view! { <span class="integration-chip">{*name}</span> }).collect_view()}
                </div>
            </section>
            <CallToAction/>
        </PageShell>
    }
}
