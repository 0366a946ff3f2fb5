//! Help center FAQ and support categories.

pub const FAQ: &[(&str, &str)] = &[
    (
        "How do I reset my password?",
        "Use the \"Forgot password\" link on the sign-in page and follow the emailed instructions.",
    ),
    (
        "Can I change my plan at any time?",
        "Yes. Upgrades apply immediately and downgrades take effect at the next billing cycle.",
    ),
    (
        "Is there a limit on projects?",
        "The Free plan includes three projects. Paid plans have unlimited projects.",
    ),
    ("Do you offer discounts for nonprofits?", "Registered nonprofits receive 50% off any paid plan."),
    ("How do I export my data?", "Workspace owners can export everything as CSV or JSON from Settings > Export."),
];

/// Help center topic tiles: (title, description, link).
pub const HELP_TOPICS: &[(&str, &str, &str)] = &[
    ("Guides", "Step-by-step walkthroughs for every feature.", "/help/guides"),
    ("Articles", "Best practices from teams using Cadence.", "/articles"),
    ("Changelog", "See what shipped recently.", "/changelog"),
    ("Submit a ticket", "Our support team replies within one business day.", "/help/ticket"),
];
