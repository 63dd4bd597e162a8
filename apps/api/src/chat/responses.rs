//! Reply templates for each chat intent.

use crate::advisor::JobRequirementResult;
use crate::knowledge::KnowledgeBase;
use crate::models::resume::ResumeRecord;

pub fn career_guidance(knowledge: &KnowledgeBase) -> String {
    let mut out = String::from(
        "I'd be happy to help you explore career options! Here are some exciting paths you might consider:\n\n",
    );

    for path in knowledge.career_paths.iter().take(3) {
        let key_skills: Vec<&str> = path.required_skills.iter().take(2).map(String::as_str).collect();
        out.push_str(&format!("**{}**\n", path.name));
        out.push_str(&format!("• Description: {}\n", path.description));
        out.push_str(&format!("• Key Skills: {}\n", key_skills.join(", ")));
        out.push_str(&format!(
            "• Educational Background: {}\n\n",
            path.education_fields.first().map(String::as_str).unwrap_or("")
        ));
    }

    out.push_str("Which of these interests you? I can provide more detailed information about any career path, including:\n");
    out.push_str("• Required skills and qualifications\n");
    out.push_str("• Steps to get started\n");
    out.push_str("• Job market outlook and salary ranges\n");
    out.push_str("• Companies hiring for these roles\n\n");
    out.push_str("Feel free to ask follow-up questions!");
    out
}

pub fn resume_advice(knowledge: &KnowledgeBase, resume: Option<&ResumeRecord>) -> String {
    let mut out = String::from("Great! I'm here to help improve your resume. ");

    match resume {
        Some(record) => {
            out.push_str("Based on your uploaded resume, here are some personalized suggestions:\n\n");
            out.push_str(&resume_feedback(record));
        }
        None => {
            out.push_str("Here are some essential resume tips:\n\n");
            let tips = &knowledge.resume_tips;
            for (title, list) in [
                ("Formatting Tips", &tips.formatting),
                ("Content Tips", &tips.content),
                ("Resume Structure", &tips.structure),
            ] {
                out.push_str(&format!("**{title}:**\n"));
                for tip in list.iter().take(3) {
                    out.push_str(&format!("• {tip}\n"));
                }
                out.push('\n');
            }
        }
    }

    out.push_str("\nWould you like more specific advice on any section? You can also upload your resume for personalized feedback!");
    out
}

/// Personalised notes on an extracted resume.
pub fn resume_feedback(record: &ResumeRecord) -> String {
    let mut out = String::new();

    if record.skills.is_empty() {
        out.push_str("**Add a Skills Section:** Create a dedicated section highlighting your technical and professional abilities.\n\n");
    } else {
        let shown: Vec<&str> = record.skills.iter().take(5).map(String::as_str).collect();
        out.push_str("**Your Skills:**\n");
        out.push_str(&format!(
            "Great! You've listed {} skills. Make sure they're:\n",
            record.skills.len()
        ));
        out.push_str("• Relevant to the jobs you're applying for\n");
        out.push_str("• Organized by category (Technical, Professional, Languages)\n");
        out.push_str(&format!("Current skills: {}\n\n", shown.join(", ")));
    }

    if !record.education.is_empty() {
        out.push_str("**Education:**\n");
        out.push_str(&format!(
            "Good! You have {} educational qualification(s).\n\n",
            record.education.len()
        ));
    }

    if record.experience.is_empty() {
        out.push_str("**Add Work Experience:** Highlight your previous roles and key achievements with measurable results.\n\n");
    } else {
        out.push_str("**Experience:**\n");
        out.push_str(&format!(
            "You've documented {} work experience(s). ",
            record.experience.len()
        ));
        out.push_str("Make sure each includes:\n");
        out.push_str("• Job title, Company, and Duration\n");
        out.push_str("• 3-4 achievement bullets with quantifiable results\n");
        out.push_str("• Action verbs like 'developed', 'managed', 'improved'\n\n");
    }

    out.push_str("**Next Steps:**\n");
    out.push_str("1. Tailor your resume for each job application\n");
    out.push_str("2. Ask colleagues or mentors for feedback\n");
    out.push_str("3. Keep it to 1-2 pages\n");
    out.push_str("4. Proofread carefully for any errors\n");
    out
}

pub fn interview_prep(knowledge: &KnowledgeBase) -> String {
    let mut out = String::from("Preparing for an interview? Here are some essential tips:\n\n");
    for tip in knowledge.interview_tips.iter().take(4) {
        out.push_str(&format!("• {tip}\n"));
    }

    out.push_str("\n**Common Interview Questions to Practice:**\n");
    out.push_str("1. 'Tell me about yourself' - Focus on your professional journey\n");
    out.push_str("2. 'Why are you interested in this position?' - Show you've researched the company\n");
    out.push_str("3. 'What are your strengths and weaknesses?' - Be honest and constructive\n");
    out.push_str("4. 'Tell me about a challenge you overcame' - Use the STAR method\n");
    out.push_str("5. 'Why should we hire you?' - Highlight unique value you bring\n\n");
    out.push_str("Remember: Most interviews test both your technical knowledge and your communication skills. ");
    out.push_str("Practice speaking clearly and confidently about your experience!");
    out
}

pub fn targeted_skill_guidance(role: &str, result: &JobRequirementResult) -> String {
    let mut out = if result.company.is_empty() {
        format!("Targeted guidance for {role}:\n\n")
    } else {
        format!("Targeted guidance for {role} at {}:\n\n", result.company)
    };

    if !result.required_skills.is_empty() {
        out.push_str(&format!("• Required Skills: {}\n", result.required_skills.join(", ")));
    }
    if !result.missing_skills.is_empty() {
        out.push_str(&format!("• Missing Skills: {}\n", result.missing_skills.join(", ")));
    }
    if !result.advice.is_empty() {
        out.push_str("\nRecommendations:\n");
        for line in &result.advice {
            out.push_str(&format!("• {line}\n"));
        }
    }
    out
}

pub fn skill_development(knowledge: &KnowledgeBase) -> String {
    let mut out = String::from(
        "Developing new skills is key to career growth! Here's a learning path for popular skills:\n\n",
    );

    for taxonomy in knowledge.skill_taxonomies.iter().take(2) {
        out.push_str(&format!("**{} Learning Path:**\n", taxonomy.area));
        out.push_str(&format!("• Beginner: {}\n", taxonomy.beginner.join(", ")));
        out.push_str(&format!("• Intermediate: {}\n", taxonomy.intermediate.join(", ")));
        out.push_str(&format!("• Advanced: {}\n\n", taxonomy.advanced.join(", ")));
    }

    out.push_str("**Tips for Skill Development:**\n");
    out.push_str("• Start with fundamentals and practice consistently\n");
    out.push_str("• Build real projects to apply what you've learned\n");
    out.push_str("• Learn from others through blogs, courses, and communities\n");
    out.push_str("• Don't be afraid to fail - it's part of the learning process\n\n");
    out.push_str("What skill would you like to develop? I can provide specific learning resources and career paths!");
    out
}

pub fn general() -> String {
    let mut out = String::from("That's a great question about your career! I can help you with:\n\n");
    out.push_str("💼 **Career Guidance** - Explore different career paths and choose the right one for you\n");
    out.push_str("📄 **Resume Help** - Improve your resume with formatting and content tips\n");
    out.push_str("🎤 **Interview Prep** - Prepare for interviews with tips and practice questions\n");
    out.push_str("🎓 **Skill Development** - Learn what skills you need and how to develop them\n");
    out.push_str("📊 **Career Analytics** - Understand job market trends and salary insights\n\n");
    out.push_str("Feel free to ask me anything career-related, and I'll do my best to provide helpful, friendly advice. ");
    out.push_str("What would you like to focus on today?");
    out
}
