//! Built-in catalog data. Loaded once into a `KnowledgeBase` at startup.

use super::{CareerPath, KnowledgeBase, ResumeTips, SkillTaxonomy};

/// (name, required skills, education fields, description)
const CAREER_PATHS: &[(&str, &[&str], &[&str], &str)] = &[
    (
        "Software Engineer",
        &["Programming", "Problem Solving", "Data Structures", "System Design"],
        &["Computer Science", "Engineering", "Information Technology"],
        "Develop and maintain software applications",
    ),
    (
        "Data Scientist",
        &["Python", "Statistics", "Machine Learning", "SQL"],
        &["Mathematics", "Statistics", "Computer Science"],
        "Analyze complex data sets to help organizations make decisions",
    ),
    (
        "Product Manager",
        &["Communication", "Leadership", "Analytics", "Strategy"],
        &["Business", "Engineering", "Economics"],
        "Lead product development and strategy",
    ),
    (
        "UX/UI Designer",
        &["Design", "Communication", "Problem Solving", "Empathy"],
        &["Design", "Psychology", "Computer Science"],
        "Create beautiful and user-friendly interfaces",
    ),
    (
        "Marketing Manager",
        &["Communication", "Creativity", "Analytics", "Leadership"],
        &["Marketing", "Business", "Communications"],
        "Drive marketing strategy and brand growth",
    ),
];

/// (area, beginner, intermediate, advanced)
const SKILL_TAXONOMIES: &[(&str, &[&str], &[&str], &[&str])] = &[
    (
        "Programming",
        &["Python", "JavaScript", "HTML/CSS"],
        &["Django", "React", "SQL"],
        &["System Design", "Microservices", "Cloud Architecture"],
    ),
    (
        "Data Science",
        &["Python", "Statistics", "Pandas"],
        &["Machine Learning", "TensorFlow", "Data Visualization"],
        &["Deep Learning", "NLP", "Reinforcement Learning"],
    ),
    (
        "Design",
        &["UI Principles", "Color Theory", "Typography"],
        &["Figma", "Prototyping", "User Research"],
        &["Design Systems", "Interaction Design", "A/B Testing"],
    ),
];

const FORMATTING_TIPS: &[&str] = &[
    "Use a clean, simple font (Arial, Calibri, or Times New Roman) in 10-12pt size",
    "Keep margins between 0.5 and 1 inch on all sides",
    "Use consistent spacing and bullet points for readability",
    "Limit your resume to 1-2 pages maximum",
    "Use a professional email address and phone number",
    "Avoid using images, graphics, or colored text (unless you're a designer)",
];

const CONTENT_TIPS: &[&str] = &[
    "Start with a professional summary or objective statement",
    "List your most recent experience first (reverse chronological order)",
    "Use action verbs like 'developed', 'managed', 'implemented', 'created'",
    "Include quantifiable achievements (e.g., 'increased sales by 20%')",
    "Tailor your resume for each job application",
    "Proofread carefully for spelling and grammar mistakes",
    "Include a LinkedIn profile URL if you have one",
];

const STRUCTURE_TIPS: &[&str] = &[
    "Contact Information: Name, Email, Phone, City/State, LinkedIn URL",
    "Professional Summary: 2-3 lines highlighting your key strengths",
    "Skills: Organized by category (Technical, Leadership, Languages)",
    "Work Experience: Job title, Company, Duration, Key achievements",
    "Education: Degree, University, Graduation date, Relevant coursework",
    "Certifications & Awards: Industry certifications and achievements",
];

const INTERVIEW_TIPS: &[&str] = &[
    "Research the company thoroughly before the interview",
    "Practice common interview questions like 'Tell me about yourself'",
    "Use the STAR method (Situation, Task, Action, Result) for behavioral questions",
    "Prepare 2-3 thoughtful questions to ask the interviewer",
    "Dress professionally and arrive 10-15 minutes early",
    "Make eye contact, smile, and give a firm handshake",
    "Speak clearly and avoid filler words like 'um' and 'uh'",
    "Follow up with a thank-you email within 24 hours of the interview",
];

/// Skills employers search for most often. Drives the keyword gap check.
const IN_DEMAND_SKILLS: &[&str] = &[
    "Python",
    "Java",
    "JavaScript",
    "SQL",
    "AWS",
    "Git",
    "React",
    "Node.js",
    "Machine Learning",
    "Data Analysis",
    "Leadership",
    "Communication",
    "Project Management",
    "Teamwork",
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(super) fn builtin() -> KnowledgeBase {
    KnowledgeBase {
        career_paths: CAREER_PATHS
            .iter()
            .map(|(name, skills, education, description)| CareerPath {
                name: name.to_string(),
                required_skills: owned(skills),
                education_fields: owned(education),
                description: description.to_string(),
            })
            .collect(),
        skill_taxonomies: SKILL_TAXONOMIES
            .iter()
            .map(|(area, beginner, intermediate, advanced)| SkillTaxonomy {
                area: area.to_string(),
                beginner: owned(beginner),
                intermediate: owned(intermediate),
                advanced: owned(advanced),
            })
            .collect(),
        resume_tips: ResumeTips {
            formatting: owned(FORMATTING_TIPS),
            content: owned(CONTENT_TIPS),
            structure: owned(STRUCTURE_TIPS),
        },
        interview_tips: owned(INTERVIEW_TIPS),
        in_demand_skills: owned(IN_DEMAND_SKILLS),
    }
}
