//! Feature highlights shared by the home and features pages.

#[derive(Debug)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "\u{1F4CB}",
        title: "Boards & Lists",
        description: "Organize work your way with flexible boards, lists and custom statuses.",
    },
    Feature {
        icon: "\u{1F4C5}",
        title: "Timelines",
        description: "Map dependencies and milestones across every team on one timeline.",
    },
    Feature {
        icon: "\u{1F4AC}",
        title: "Real-time Chat",
        description: "Discuss work in context with threaded comments and mentions.",
    },
    Feature {
        icon: "\u{26A1}",
        title: "Automations",
        description: "Move cards, assign owners and send reminders without lifting a finger.",
    },
    Feature {
        icon: "\u{1F4CA}",
        title: "Reporting",
        description: "Dashboards for workload, progress and cycle time, updated live.",
    },
    Feature {
        icon: "\u{1F512}",
        title: "Enterprise Security",
        description: "SSO, audit logs and granular permissions for every workspace.",
    },
];

pub const STATS: &[(&str, &str)] = &[
    ("10k+", "Teams"),
    ("150+", "Countries"),
    ("99.9%", "Uptime"),
    ("4.8/5", "Average rating"),
];
