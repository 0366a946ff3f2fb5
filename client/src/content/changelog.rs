//! Product release notes for `/changelog`, newest first.

#[derive(Debug)]
pub struct Release {
    pub version: &'static str,
    pub date: &'static str,
    pub title: &'static str,
    pub highlights: &'static [&'static str],
}

pub const RELEASES: &[Release] = &[
    Release {
        version: "3.4.0",
        date: "March 2025",
        title: "Timeline dependencies",
        highlights: &[
            "Dependencies between tasks on the timeline",
            "Drag-to-reschedule moves dependent tasks",
            "Milestone markers in exports",
        ],
    },
    Release {
        version: "3.3.0",
        date: "February 2025",
        title: "Smarter notifications",
        highlights: &["Daily digest emails", "Per-project notification rules", "Quiet hours"],
    },
    Release {
        version: "3.2.0",
        date: "January 2025",
        title: "Custom fields",
        highlights: &["Number, date and dropdown fields", "Filter and sort by custom fields"],
    },
];
