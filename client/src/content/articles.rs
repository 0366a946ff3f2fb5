//! Long-form articles listed on `/articles`.

#[derive(Debug)]
pub struct Article {
    pub title: &'static str,
    pub summary: &'static str,
    pub category: &'static str,
    pub read_time: &'static str,
}

pub const ARTICLES: &[Article] = &[
    Article {
        title: "The State of Hybrid Collaboration",
        summary: "What 2,000 teams told us about meetings, focus time and tooling.",
        category: "Research",
        read_time: "12 min read",
    },
    Article {
        title: "Designing Workflows That Scale",
        summary: "Patterns for keeping process light as a team grows from ten to a hundred.",
        category: "Best Practices",
        read_time: "9 min read",
    },
    Article {
        title: "Capacity Planning Without Guesswork",
        summary: "Use historical throughput to plan realistic quarters.",
        category: "Planning",
        read_time: "8 min read",
    },
    Article {
        title: "Writing Project Briefs People Actually Read",
        summary: "A one-page template that answers the questions stakeholders ask first.",
        category: "Templates",
        read_time: "5 min read",
    },
];
