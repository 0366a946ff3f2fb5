//! Fallback for unmatched paths.

use leptos::prelude::*;

use crate::components::page_shell::PageShell;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <PageShell>
            <section class="page-hero">
                <h1 class="page-hero__title">"Page not found"</h1>
                <p class="page-hero__subtitle">"The page you're looking for doesn't exist or has moved."</p>
                <a href="/" class="btn btn--primary">"Back to home"</a>
            </section>
        </PageShell>
    }
}
