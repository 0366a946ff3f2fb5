use super::*;

#[derive(Debug)]
struct Item(&'static str);

impl Keyed for Item {
    fn key(&self) -> &str {
        self.0
    }
}

fn assert_unique_keys<T: Keyed>(catalog: &[T]) {
    let mut keys: Vec<&str> = catalog.iter().map(|record| record.key()).collect();
    let total = keys.len();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), total);
}

// =============================================================
// find_or_first
// =============================================================

#[test]
fn find_or_first_returns_exact_match() {
    let items = [Item("a"), Item("b"), Item("c")];
    assert_eq!(find_or_first(&items, "items", "b").unwrap().0, "b");
}

#[test]
fn find_or_first_falls_back_to_first_on_miss() {
    let items = [Item("a"), Item("b")];
    assert_eq!(find_or_first(&items, "items", "zzz").unwrap().0, "a");
}

#[test]
fn find_or_first_empty_catalog_is_error() {
    let items: [Item; 0] = [];
    assert_eq!(find_or_first(&items, "items", "a").unwrap_err(), PageError::EmptyCatalog("items"));
}

#[test]
fn page_error_message_names_catalog() {
    assert_eq!(PageError::EmptyCatalog("blog").to_string(), "the blog catalogue is empty");
}

// =============================================================
// Catalogues
// =============================================================

#[test]
fn unknown_blog_id_renders_first_post() {
    let post = blog::post_or_first("999").unwrap();
    assert_eq!(post.title, blog::POSTS[0].title);
}

#[test]
fn known_blog_id_resolves_exactly() {
    assert_eq!(blog::post_or_first("3").unwrap().title, "Introducing Timeline View");
}

#[test]
fn unknown_guide_slug_falls_back() {
    assert_eq!(guides::guide_or_first("no-such-guide").unwrap().slug, guides::GUIDES[0].slug);
    assert_eq!(guides::guide_or_first("permissions").unwrap().slug, "permissions");
}

#[test]
fn unknown_solution_slug_falls_back() {
    assert_eq!(solutions::solution_or_first("").unwrap().slug, solutions::SOLUTIONS[0].slug);
    assert_eq!(solutions::solution_or_first("marketing").unwrap().name, "Marketing");
}

#[test]
fn keyed_catalogues_have_unique_keys() {
    assert_unique_keys(blog::POSTS);
    assert_unique_keys(guides::GUIDES);
    assert_unique_keys(solutions::SOLUTIONS);
}

#[test]
fn job_lookup_has_no_fallback() {
    assert_eq!(careers::job_by_id("product-designer").map(|j| j.title), Some("Product Designer"));
    assert!(careers::job_by_id("unknown").is_none());
}

#[test]
fn exactly_one_highlighted_plan() {
    assert_eq!(pricing::PLANS.iter().filter(|p| p.highlighted).count(), 1);
}

#[test]
fn navigation_links_are_site_relative() {
    let groups = navigation::RESOURCE_GROUPS.iter().chain(navigation::FOOTER_GROUPS);
    let links = groups.flat_map(|g| g.links.iter()).chain(navigation::PRIMARY_LINKS);
    for link in links {
        assert!(link.href.starts_with('/'), "{}", link.href);
    }
}
