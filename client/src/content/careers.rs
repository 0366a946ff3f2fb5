//! Open positions and company perks for `/careers` and `/apply`.

#[derive(Debug)]
pub struct Job {
    pub id: &'static str,
    pub title: &'static str,
    pub department: &'static str,
    pub location: &'static str,
    pub kind: &'static str,
}

pub const JOBS: &[Job] = &[
    Job {
        id: "senior-frontend-engineer",
        title: "Senior Frontend Engineer",
        department: "Engineering",
        location: "Remote (US/EU)",
        kind: "Full-time",
    },
    Job {
        id: "backend-engineer",
        title: "Backend Engineer, Realtime",
        department: "Engineering",
        location: "Remote",
        kind: "Full-time",
    },
    Job {
        id: "product-designer",
        title: "Product Designer",
        department: "Design",
        location: "New York, NY",
        kind: "Full-time",
    },
    Job {
        id: "customer-success-manager",
        title: "Customer Success Manager",
        department: "Customer Success",
        location: "London, UK",
        kind: "Full-time",
    },
    Job {
        id: "content-marketing-intern",
        title: "Content Marketing Intern",
        department: "Marketing",
        location: "Remote",
        kind: "Internship",
    },
];

pub const PERKS: &[(&str, &str)] = &[
    ("Remote-first", "Work from anywhere with a home office stipend."),
    ("Health coverage", "Medical, dental and vision for you and your family."),
    ("Learning budget", "$1,500 a year for courses, books and conferences."),
    ("Time off", "Minimum 25 days off plus company-wide recharge weeks."),
];

/// Exact lookup used to pre-fill the application form; no fallback.
pub fn job_by_id(id: &str) -> Option<&'static Job> {
    JOBS.iter().find(|job| job.id == id)
}
