//! Server-rendered navigation overlays: link coverage and visibility driven
//! by the navigation bar's flags.

use client::components::mobile_menu::MobileMenu;
use client::components::nav_bar::{NavBar, NavOverlays};
use client::components::resources_panel::ResourcesPanel;
use client::content::navigation::{DEMO_LINK, PRIMARY_LINKS, RESOURCE_GROUPS};
use client::state::nav::NavState;
use client::state::theme::provide_theme;
use leptos::prelude::*;
use leptos::reactive::owner::Owner;

fn render(build: impl FnOnce() -> String) -> String {
    let owner = Owner::new();
    owner.with(|| {
        provide_theme();
        build()
    })
}

fn resource_link_count() -> usize {
    RESOURCE_GROUPS.iter().map(|group| group.links.len()).sum()
}

fn noop_close() -> Callback<()> {
    Callback::new(|()| {})
}

// =============================================================================
// ResourcesPanel / MobileMenu
// =============================================================================

#[test]
fn resources_panel_renders_every_group_link_and_close_control() {
    let html = render(|| view! { <ResourcesPanel on_request_close=noop_close()/> }.to_html());

    assert_eq!(html.matches("resources-panel__link").count(), resource_link_count(), "{html}");
    assert_eq!(html.matches("resources-panel__close").count(), 1, "{html}");
    for group in RESOURCE_GROUPS {
        assert!(html.contains(group.title), "missing group {}", group.title);
        for link in group.links {
            assert!(html.contains(&format!(r#"href="{}""#, link.href)), "missing link {}", link.href);
        }
    }
}

#[test]
fn mobile_menu_renders_primary_and_resource_links_with_demo_cta() {
    let html = render(|| view! { <MobileMenu on_request_close=noop_close()/> }.to_html());

    assert_eq!(html.matches("mobile-menu__link").count(), PRIMARY_LINKS.len() + resource_link_count(), "{html}");
    for link in PRIMARY_LINKS {
        assert!(html.contains(&format!(r#"href="{}""#, link.href)), "missing link {}", link.href);
    }
    assert!(html.contains(&format!(r#"href="{}""#, DEMO_LINK.href)));
    assert!(html.contains("mobile-menu__close"));
    assert!(html.contains("theme-toggle"));
}

// =============================================================================
// NavOverlays visibility
// =============================================================================

fn overlays_for(state: NavState) -> String {
    render(|| {
        let nav = RwSignal::new(state);
        view! { <NavOverlays nav=nav/> }.to_html()
    })
}

#[test]
fn overlays_hidden_when_both_flags_closed() {
    let html = overlays_for(NavState::default());
    assert!(!html.contains("resources-panel"), "{html}");
    assert!(!html.contains("mobile-menu"), "{html}");
}

#[test]
fn resources_flag_shows_only_resources_panel() {
    let html = overlays_for(NavState { resources_open: true, mobile_menu_open: false });
    assert!(html.contains("resources-panel"), "{html}");
    assert!(!html.contains("mobile-menu"), "{html}");
}

#[test]
fn mobile_flag_shows_only_mobile_menu() {
    let html = overlays_for(NavState { resources_open: false, mobile_menu_open: true });
    assert!(!html.contains("resources-panel"), "{html}");
    assert!(html.contains("mobile-menu"), "{html}");
}

#[test]
fn both_overlays_can_be_open_together() {
    let html = overlays_for(NavState { resources_open: true, mobile_menu_open: true });
    assert!(html.contains("resources-panel"), "{html}");
    assert!(html.contains("mobile-menu"), "{html}");
}

#[test]
fn nav_bar_starts_with_overlays_closed() {
    let html = render(|| view! { <NavBar/> }.to_html());
    assert!(html.contains("nav-bar__resources-toggle"), "{html}");
    assert!(html.contains(r#"aria-expanded="false""#), "{html}");
    assert!(!html.contains("resources-panel"), "{html}");
    assert!(!html.contains("mobile-menu"), "{html}");
}
