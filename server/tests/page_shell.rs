//! Server-rendered page shell: failed page content must not take down the
//! surrounding navigation, footer or chat launcher.

use client::components::page_shell::{FAULT_MESSAGE, PageShell};
use client::content::PageError;
use client::state::theme::provide_theme;
use leptos::prelude::*;
use leptos::reactive::owner::Owner;

#[component]
fn BrokenContent() -> impl IntoView {
    Err::<(), PageError>(PageError::EmptyCatalog("blog"))
}

#[component]
fn HealthyContent() -> impl IntoView {
    view! { <p class="healthy">"All good here"</p> }
}

fn render(build: impl FnOnce() -> String) -> String {
    let owner = Owner::new();
    owner.with(|| {
        provide_theme();
        build()
    })
}

#[test]
fn failing_content_renders_fault_notice_inside_chrome() {
    let html = render(|| {
        view! {
            <PageShell>
                <BrokenContent/>
            </PageShell>
        }
        .to_html()
    });

    assert!(html.contains(FAULT_MESSAGE), "fault notice missing: {html}");
    assert!(html.contains("nav-bar"), "navigation missing: {html}");
    assert!(html.contains("Cadence Labs, Inc."), "footer missing: {html}");
    assert!(html.contains("chat-widget"), "chat launcher missing: {html}");
}

#[test]
fn healthy_content_renders_without_fault_notice() {
    let html = render(|| {
        view! {
            <PageShell>
                <HealthyContent/>
            </PageShell>
        }
        .to_html()
    });

    assert!(html.contains("All good here"));
    assert!(!html.contains(FAULT_MESSAGE));
}

#[test]
fn shell_carries_light_theme_by_default() {
    let html = render(|| view! { <PageShell><HealthyContent/></PageShell> }.to_html());
    assert!(html.contains(r#"data-theme="light""#), "theme attribute missing: {html}");
}
