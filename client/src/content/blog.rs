//! Blog posts, keyed by numeric id string (`/blog/:id`).

use super::{Keyed, PageError, find_or_first};

#[derive(Debug)]
pub struct BlogPost {
    pub id: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub author: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub category: &'static str,
    pub body: &'static [&'static str],
}

impl Keyed for BlogPost {
    fn key(&self) -> &str {
        self.id
    }
}

pub const POSTS: &[BlogPost] = &[
    BlogPost {
        id: "1",
        title: "10 Ways to Run Better Remote Standups",
        excerpt: "Short, focused standups keep distributed teams aligned without eating the morning.",
        author: "Priya Raman",
        date: "March 12, 2025",
        read_time: "6 min read",
        category: "Remote Work",
        body: &[
            "Standups exist to surface blockers, not to report status. Start every meeting with that goal and the agenda writes itself.",
            "Keep the update format fixed: what moved, what is next, what is stuck. Async updates in a shared board let the live call focus on the stuck items.",
            "Rotate the facilitator weekly. Ownership spreads, and the meeting stops depending on one calendar.",
        ],
    },
    BlogPost {
        id: "2",
        title: "How We Rebuilt Our Roadmap Around Outcomes",
        excerpt: "Swapping feature lists for measurable outcomes changed how our product team plans each quarter.",
        author: "Marcus Chen",
        date: "February 27, 2025",
        read_time: "8 min read",
        category: "Product",
        body: &[
            "A roadmap full of features invites debates about scope. A roadmap full of outcomes invites debates about impact, which are far more useful.",
            "Each outcome now carries one metric and one owner. Projects attach to outcomes, never the other way round.",
        ],
    },
    BlogPost {
        id: "3",
        title: "Introducing Timeline View",
        excerpt: "Plan launches across teams with dependencies, milestones and drag-to-reschedule.",
        author: "Cadence Team",
        date: "February 3, 2025",
        read_time: "4 min read",
        category: "Product Updates",
        body: &[
            "Timeline view lays every project task on a shared calendar so cross-team launches stop slipping between the cracks.",
            "Drag a bar to reschedule and its dependents follow. Milestones stay pinned unless you move them explicitly.",
        ],
    },
    BlogPost {
        id: "4",
        title: "A Practical Guide to Async Decision Making",
        excerpt: "Decision docs, clear owners and time boxes help teams decide without another meeting.",
        author: "Elena Novak",
        date: "January 15, 2025",
        read_time: "7 min read",
        category: "Collaboration",
        body: &[
            "Write the decision down before discussing it. A one-page proposal with options and a recommendation focuses every comment.",
            "Set a deadline and name the decider. Silence by the deadline counts as consent.",
        ],
    },
];

/// Post for `/blog/:id`, falling back to the first post.
///
/// # Errors
///
/// Returns `PageError::EmptyCatalog` if there are no posts.
pub fn post_or_first(id: &str) -> Result<&'static BlogPost, PageError> {
    find_or_first(POSTS, "blog", id)
}
