//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    about::AboutPage,
    apply::ApplyPage,
    articles::ArticlesPage,
    blog::{BlogPage, BlogPostPage},
    careers::CareersPage,
    changelog::ChangelogPage,
    contact::ContactPage,
    features::FeaturesPage,
    help::{GuidePage, GuidesPage, HelpPage, TicketPage},
    home::HomePage,
    not_found::NotFoundPage,
    pricing::PricingPage,
    request_demo::RequestDemoPage,
    solutions::{SolutionPage, SolutionsPage},
};
use crate::state::theme::provide_theme;
use crate::util::deferred::SchedulerHandle;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the theme and deferred-task scheduler to every page and maps
/// each public path to its page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_theme();
    provide_context(SchedulerHandle::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/cadence-site.css"/>
        <Title text="Cadence"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("pricing") view=PricingPage/>
                <Route path=StaticSegment("features") view=FeaturesPage/>
                <Route path=StaticSegment("about") view=AboutPage/>
                <Route path=StaticSegment("careers") view=CareersPage/>
                <Route path=StaticSegment("apply") view=ApplyPage/>
                <Route path=StaticSegment("request-demo") view=RequestDemoPage/>
                <Route path=StaticSegment("blog") view=BlogPage/>
                <Route path=(StaticSegment("blog"), ParamSegment("id")) view=BlogPostPage/>
                <Route path=StaticSegment("help") view=HelpPage/>
                <Route path=(StaticSegment("help"), StaticSegment("guides")) view=GuidesPage/>
                <Route
                    path=(StaticSegment("help"), StaticSegment("guides"), ParamSegment("slug"))
                    view=GuidePage
                />
                <Route path=(StaticSegment("help"), StaticSegment("ticket")) view=TicketPage/>
                <Route path=StaticSegment("solutions") view=SolutionsPage/>
                <Route path=(StaticSegment("solutions"), ParamSegment("slug")) view=SolutionPage/>
                <Route path=StaticSegment("articles") view=ArticlesPage/>
                <Route path=StaticSegment("contact") view=ContactPage/>
                <Route path=StaticSegment("changelog") view=ChangelogPage/>
            </Routes>
        </Router>
    }
}
