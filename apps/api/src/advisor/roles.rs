//! Job-title and employer classification tables.

use crate::rules::{first_match, KeywordRule};

/// Job title → career path name. Order matters: "data engineer" is a
/// Software Engineer because the engineer rule comes first.
pub const TITLE_RULES: &[KeywordRule<&str>] = &[
    KeywordRule {
        any_of: &["full stack", "full-stack", "fullstack"],
        all_of: &[],
        result: "Software Engineer",
    },
    KeywordRule {
        any_of: &["software", "engineer", "developer"],
        all_of: &[],
        result: "Software Engineer",
    },
    KeywordRule {
        any_of: &["intern"],
        all_of: &["data"],
        result: "Data Scientist",
    },
    KeywordRule {
        any_of: &["intern"],
        all_of: &[],
        result: "Software Engineer",
    },
    KeywordRule {
        any_of: &["data", "machine learning"],
        all_of: &[],
        result: "Data Scientist",
    },
    KeywordRule {
        any_of: &["product"],
        all_of: &[],
        result: "Product Manager",
    },
    KeywordRule {
        any_of: &["ux", "ui", "designer"],
        all_of: &[],
        result: "UX/UI Designer",
    },
    KeywordRule {
        any_of: &["marketing"],
        all_of: &[],
        result: "Marketing Manager",
    },
];

/// Skills required when a title matches no career path.
pub const FALLBACK_SKILLS: &[&str] = &["Communication", "Problem Solving", "Teamwork"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployerGroup {
    pub label: &'static str,
    pub skills: &'static [&'static str],
}

pub const EMPLOYER_RULES: &[KeywordRule<EmployerGroup>] = &[
    KeywordRule {
        any_of: &["amazon"],
        all_of: &[],
        result: EmployerGroup {
            label: "cloud / e-commerce",
            skills: &[
                "AWS",
                "Distributed Systems",
                "Microservices",
                "Scalability",
                "React",
                "Node.js",
            ],
        },
    },
    KeywordRule {
        any_of: &["jpm", "jp morgan", "jpmorgan"],
        all_of: &[],
        result: EmployerGroup {
            label: "finance",
            skills: &[
                "SQL",
                "Java",
                "Low-latency Systems",
                "Data Structures",
                "Finance Domain Knowledge",
            ],
        },
    },
    KeywordRule {
        any_of: &["google", "meta", "facebook"],
        all_of: &[],
        result: EmployerGroup {
            label: "big tech",
            skills: &[
                "System Design",
                "Distributed Systems",
                "Algorithms",
                "Large-scale Systems",
            ],
        },
    },
];

pub fn classify_title_keywords(job_title: &str) -> Option<&'static str> {
    first_match(TITLE_RULES, job_title).copied()
}

pub fn classify_employer(company: &str) -> Option<&'static EmployerGroup> {
    first_match(EMPLOYER_RULES, company)
}
