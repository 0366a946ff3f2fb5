//! Link tables for the navigation bar, overlays and footer.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

const fn link(label: &'static str, href: &'static str) -> NavLink {
    NavLink { label, href }
}

/// A titled group of links, as shown in the resources panel and footer.
#[derive(Clone, Copy, Debug)]
pub struct LinkGroup {
    pub title: &'static str,
    pub links: &'static [NavLink],
}

pub const PRIMARY_LINKS: &[NavLink] = &[
    link("Features", "/features"),
    link("Solutions", "/solutions"),
    link("Pricing", "/pricing"),
    link("Blog", "/blog"),
    link("Careers", "/careers"),
    link("Contact", "/contact"),
];

pub const RESOURCE_GROUPS: &[LinkGroup] = &[
    LinkGroup {
        title: "Learn",
        links: &[link("Blog", "/blog"), link("Articles", "/articles"), link("Changelog", "/changelog")],
    },
    LinkGroup {
        title: "Support",
        links: &[link("Help Center", "/help"), link("Guides", "/help/guides"), link("Submit a Ticket", "/help/ticket")],
    },
    LinkGroup {
        title: "Company",
        links: &[link("About", "/about"), link("Careers", "/careers"), link("Contact", "/contact")],
    },
];

pub const FOOTER_GROUPS: &[LinkGroup] = &[
    LinkGroup {
        title: "Product",
        links: &[
            link("Features", "/features"),
            link("Pricing", "/pricing"),
            link("Solutions", "/solutions"),
            link("Changelog", "/changelog"),
        ],
    },
    LinkGroup {
        title: "Resources",
        links: &[link("Blog", "/blog"), link("Articles", "/articles"), link("Help Center", "/help")],
    },
    LinkGroup {
        title: "Company",
        links: &[link("About", "/about"), link("Careers", "/careers"), link("Contact", "/contact")],
    },
];

pub const DEMO_LINK: NavLink = link("Request a demo", "/request-demo");
