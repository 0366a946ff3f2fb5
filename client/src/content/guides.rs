//! Help center guides, keyed by slug (`/help/guides/:slug`).

use super::{Keyed, PageError, find_or_first};

#[derive(Debug)]
pub struct Guide {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub category: &'static str,
    pub steps: &'static [&'static str],
}

impl Keyed for Guide {
    fn key(&self) -> &str {
        self.slug
    }
}

pub const GUIDES: &[Guide] = &[
    Guide {
        slug: "getting-started",
        title: "Getting Started with Cadence",
        summary: "Create your workspace, invite your team and set up your first project.",
        category: "Basics",
        steps: &[
            "Sign up and name your workspace.",
            "Invite teammates from Settings > Members.",
            "Create a project from a template or start blank.",
            "Add tasks, assign owners and set due dates.",
        ],
    },
    Guide {
        slug: "boards-and-views",
        title: "Working with Boards and Views",
        summary: "Switch between board, list, calendar and timeline views of the same work.",
        category: "Projects",
        steps: &[
            "Open a project and pick a view from the toolbar.",
            "Group cards by status, assignee or priority.",
            "Save filtered views to share with your team.",
        ],
    },
    Guide {
        slug: "integrations",
        title: "Connecting Integrations",
        summary: "Bring Slack, GitHub and Google Drive activity into your projects.",
        category: "Integrations",
        steps: &[
            "Go to Settings > Integrations.",
            "Choose a service and authorize access.",
            "Pick which projects receive updates.",
        ],
    },
    Guide {
        slug: "permissions",
        title: "Managing Roles and Permissions",
        summary: "Control who can view, edit and administer each project.",
        category: "Administration",
        steps: &[
            "Open Settings > Roles.",
            "Assign Owner, Editor or Viewer per member.",
            "Restrict sensitive projects to selected groups.",
        ],
    },
];

/// Guide for `/help/guides/:slug`, falling back to the first guide.
///
/// # Errors
///
/// Returns `PageError::EmptyCatalog` if there are no guides.
pub fn guide_or_first(slug: &str) -> Result<&'static Guide, PageError> {
    find_or_first(GUIDES, "guides", slug)
}
