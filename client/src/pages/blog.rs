//! Blog index and post pages.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::page_shell::PageShell;
use crate::components::sections::PageHero;
use crate::content::blog::{BlogPost, POSTS, post_or_first};

fn post_card(post: &'static BlogPost) -> impl IntoView {
    view! {
        <a href=format!("/blog/{}", post.id) class="post-card">
            <span class="post-card__category">{post.category}</span>
            <h3 class="post-card__title">{post.title}</h3>
            <p class="post-card__excerpt">{post.excerpt}</p>
            <p class="post-card__meta">{post.author}" \u{00B7} "{post.date}" \u{00B7} "{post.read_time}</p>
        </a>
    }
}

#[component]
pub fn BlogPage() -> impl IntoView {
    view! {
        <PageShell>
            <PageHero eyebrow="Blog" title="Ideas for better teamwork" subtitle="Product news, guides and stories from the Cadence team."/>
            <section class="card-grid">{POSTS.iter().map(post_card).collect_view()}</section>
        </PageShell>
    }
}

fn post_article(post: &'static BlogPost) -> impl IntoView {
    view! {
        <article class="post">
            <a href="/blog" class="post__back">"\u{2190} All posts"</a>
            <span class="post-card__category">{post.category}</span>
            <h1 class="post__title">{post.title}</h1>
            <p class="post__meta">{post.author}" \u{00B7} "{post.date}" \u{00B7} "{post.read_time}</p>
            {post.body.iter().map(|paragraph| view! { <p class="post__paragraph">{*paragraph}</p> }).collect_view()}
        </article>
    }
}

/// Post for `post_id`; unknown ids render the first post.
#[component]
pub fn PostDetail(#[prop(into)] post_id: Signal<String>) -> impl IntoView {
    move || post_id.with(|id| post_or_first(id).map(post_article))
}

/// `/blog/:id`.
#[component]
pub fn BlogPostPage() -> impl IntoView {
    let params = use_params_map();
    let post_id = Signal::derive(move || params.read().get("id").unwrap_or_default());

    view! {
        <PageShell>
            <PostDetail post_id=post_id/>
        </PageShell>
    }
}
