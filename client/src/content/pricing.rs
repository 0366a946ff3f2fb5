//! Pricing plans for `/pricing`.

#[derive(Debug)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub cta_label: &'static str,
    pub cta_href: &'static str,
    pub highlighted: bool,
}

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Free",
        price: "$0",
        period: "forever",
        description: "For individuals and small teams getting started.",
        features: &["Up to 5 members", "3 projects", "Boards and lists", "Community support"],
        cta_label: "Get started",
        cta_href: "/request-demo",
        highlighted: false,
    },
    Plan {
        name: "Pro",
        price: "$12",
        period: "per user / month",
        description: "For growing teams that need more structure.",
        features: &["Unlimited projects", "Timelines and calendars", "Automations", "Priority email support"],
        cta_label: "Start free trial",
        cta_href: "/request-demo",
        highlighted: true,
    },
    Plan {
        name: "Enterprise",
        price: "Custom",
        period: "billed annually",
        description: "For organizations with advanced security needs.",
        features: &["SSO and SCIM", "Audit logs", "Dedicated success manager", "99.9% uptime SLA"],
        cta_label: "Contact sales",
        cta_href: "/contact",
        highlighted: false,
    },
];
