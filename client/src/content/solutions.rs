//! Solutions by team type, keyed by slug (`/solutions/:slug`).

use super::{Keyed, PageError, find_or_first};

#[derive(Debug)]
pub struct Solution {
    pub slug: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub summary: &'static str,
    pub benefits: &'static [&'static str],
}

impl Keyed for Solution {
    fn key(&self) -> &str {
        self.slug
    }
}

pub const SOLUTIONS: &[Solution] = &[
    Solution {
        slug: "engineering",
        name: "Engineering",
        tagline: "Ship faster with fewer status meetings",
        summary: "Plan sprints, track bugs and link work to pull requests in one place.",
        benefits: &["Sprint planning and burndown", "GitHub and GitLab sync", "Bug triage workflows"],
    },
    Solution {
        slug: "marketing",
        name: "Marketing",
        tagline: "Launch campaigns on time, every time",
        summary: "Coordinate briefs, creative reviews and launch calendars across channels.",
        benefits: &["Campaign calendars", "Creative approval flows", "Asset libraries"],
    },
    Solution {
        slug: "product",
        name: "Product",
        tagline: "Roadmaps your whole company can follow",
        summary: "Connect discovery, specs and delivery so everyone sees why work matters.",
        benefits: &["Outcome-based roadmaps", "Feedback intake", "Release tracking"],
    },
    Solution {
        slug: "operations",
        name: "Operations",
        tagline: "Repeatable processes without the spreadsheets",
        summary: "Turn recurring work into templates with owners, checklists and SLAs.",
        benefits: &["Process templates", "Request intake forms", "Workload balancing"],
    },
];

/// Solution for `/solutions/:slug`, falling back to the first entry.
///
/// # Errors
///
/// Returns `PageError::EmptyCatalog` if there are no solutions.
pub fn solution_or_first(slug: &str) -> Result<&'static Solution, PageError> {
    find_or_first(SOLUTIONS, "solutions", slug)
}
