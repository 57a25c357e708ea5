//! Threshold rules producing advice, strengths and critical issues
//!
//! Every table is evaluated in order and each rule contributes at most one
//! entry, so output order always matches table order.

use crate::scoring::analysis::{AdviceItem, Impact, Insights, Score};

pub type Predicate = fn(&Score, &Insights) -> bool;

/// A threshold rule that yields one advice item when it fires
pub struct AdviceRule {
    pub applies: Predicate,
    pub category: &'static str,
    pub issue: &'static str,
    pub suggestion: &'static str,
    pub impact: Impact,
    pub examples: &'static [&'static str],
}

impl AdviceRule {
    pub fn evaluate(&self, score: &Score, insights: &Insights) -> Option<AdviceItem> {
        if !(self.applies)(score, insights) {
            return None;
        }
        let examples = if self.examples.is_empty() {
            None
        } else {
            Some(self.examples.iter().map(|e| e.to_string()).collect())
        };
        Some(AdviceItem {
            category: self.category.to_string(),
            issue: self.issue.to_string(),
            suggestion: self.suggestion.to_string(),
            impact: self.impact,
            examples,
        })
    }
}

/// A threshold rule that yields one fixed message when it fires
pub struct MessageRule {
    pub applies: Predicate,
    pub message: &'static str,
}

impl MessageRule {
    pub fn evaluate(&self, score: &Score, insights: &Insights) -> Option<String> {
        (self.applies)(score, insights).then(|| self.message.to_string())
    }
}

pub const ADVICE_RULES: &[AdviceRule] = &[
    AdviceRule {
        applies: |_, i| !i.contact_info_complete,
        category: "Contact Information",
        issue: "Your resume is missing an email address or phone number.",
        suggestion: "Put your full name, a professional email address and a phone number at the top of the page so recruiters can reach you.",
        impact: Impact::Critical,
        examples: &[
            "Jane Smith | jane.smith@email.com | (555) 123-4567",
            "Add a LinkedIn profile URL next to your email",
        ],
    },
    AdviceRule {
        applies: |s, _| s.content.experience < 50,
        category: "Work Experience",
        issue: "Your work history is thin or hard to find.",
        suggestion: "List each role with a job title, employer and dates, followed by two to four bullet points describing what you did.",
        impact: Impact::Critical,
        examples: &[
            "Software Developer, Acme Corp (2019 - 2023)",
            "Developed and maintained customer-facing web features used by 50,000 users",
        ],
    },
    AdviceRule {
        applies: |_, i| i.quantified_achievements < 3,
        category: "Achievements",
        issue: "Few of your accomplishments include numbers.",
        suggestion: "Add percentages, dollar amounts, team sizes or timeframes to show the scale of your results.",
        impact: Impact::High,
        examples: &[
            "Increased sales by 25% within 6 months",
            "Managed a team of 8 people across 3 projects",
            "Reduced support costs by $40,000 per year",
        ],
    },
    AdviceRule {
        applies: |s, _| s.optimization.action_verbs < 60,
        category: "Language",
        issue: "Your bullet points rarely start with strong action verbs.",
        suggestion: "Open each bullet with a verb that shows ownership instead of phrases like \"responsible for\".",
        impact: Impact::High,
        examples: &[
            "Led, Developed, Implemented, Improved, Launched",
            "\"Responsible for onboarding\" becomes \"Streamlined onboarding for new hires\"",
        ],
    },
    AdviceRule {
        applies: |_, i| i.word_count < 300,
        category: "Content Length",
        issue: "Your resume is too brief to show your qualifications.",
        suggestion: "Aim for 400 to 800 words by expanding on your roles, projects and skills.",
        impact: Impact::High,
        examples: &[],
    },
    AdviceRule {
        applies: |_, i| i.word_count > 1000,
        category: "Content Length",
        issue: "Your resume is too long to scan quickly.",
        suggestion: "Trim older or less relevant roles and keep the document to one or two pages.",
        impact: Impact::Medium,
        examples: &[],
    },
    AdviceRule {
        applies: |s, _| s.content.skills < 60,
        category: "Skills Section",
        issue: "Your skills are not clearly listed.",
        suggestion: "Add a dedicated Skills section with the tools, technologies and soft skills relevant to the jobs you want.",
        impact: Impact::Medium,
        examples: &[
            "Technical: Python, SQL, AWS, Docker",
            "Soft skills: Communication, Leadership, Problem solving",
        ],
    },
    AdviceRule {
        applies: |s, _| s.optimization.keywords < 50,
        category: "Keywords",
        issue: "Your resume uses few industry keywords.",
        suggestion: "Mirror the language of the job postings you target so applicant tracking systems recognise your experience.",
        impact: Impact::Medium,
        examples: &[
            "Agile, stakeholder management, CI/CD, data analytics",
        ],
    },
    AdviceRule {
        applies: |s, _| s.structure.sections < 70,
        category: "Structure",
        issue: "Some standard resume sections are missing.",
        suggestion: "Use clear headings for Contact, Summary, Experience, Education and Skills.",
        impact: Impact::Medium,
        examples: &[
            "SUMMARY / EXPERIENCE / EDUCATION / SKILLS / PROJECTS",
        ],
    },
];

pub const STRENGTH_RULES: &[MessageRule] = &[
    MessageRule {
        applies: |s, _| s.content.experience >= 80,
        message: "Strong, well-described work experience",
    },
    MessageRule {
        applies: |s, _| s.content.skills >= 80,
        message: "Comprehensive skill set",
    },
    MessageRule {
        applies: |s, _| s.content.education >= 80,
        message: "Excellent educational background",
    },
    MessageRule {
        applies: |s, _| s.structure.formatting >= 80,
        message: "Well-structured, professional format",
    },
    MessageRule {
        applies: |s, _| s.optimization.quantification >= 80,
        message: "Achievements backed by concrete numbers",
    },
    MessageRule {
        applies: |s, _| s.optimization.action_verbs >= 80,
        message: "Strong use of action verbs",
    },
    MessageRule {
        applies: |_, i| i.experience_years >= 5,
        message: "Substantial professional experience (5+ years)",
    },
    MessageRule {
        applies: |_, i| i.contact_info_complete,
        message: "Complete contact information",
    },
];

pub const CRITICAL_ISSUE_RULES: &[MessageRule] = &[
    MessageRule {
        applies: |_, i| !i.contact_info_complete,
        message: "Missing contact information (email and phone number)",
    },
    MessageRule {
        applies: |s, _| s.content.experience < 40,
        message: "Work experience is missing or poorly described",
    },
    MessageRule {
        applies: |_, i| i.quantified_achievements == 0,
        message: "No quantified achievements",
    },
    MessageRule {
        applies: |s, _| s.structure.sections < 50,
        message: "Key resume sections are missing",
    },
    MessageRule {
        applies: |_, i| i.word_count < 200,
        message: "Resume is far too short",
    },
    MessageRule {
        applies: |s, _| s.optimization.action_verbs < 30,
        message: "Almost no action verbs",
    },
];

pub fn generate_advice(score: &Score, insights: &Insights) -> Vec<AdviceItem> {
    ADVICE_RULES
        .iter()
        .filter_map(|rule| rule.evaluate(score, insights))
        .collect()
}

pub fn identify_strengths(score: &Score, insights: &Insights) -> Vec<String> {
    evaluate_messages(STRENGTH_RULES, score, insights)
}

pub fn identify_critical_issues(score: &Score, insights: &Insights) -> Vec<String> {
    evaluate_messages(CRITICAL_ISSUE_RULES, score, insights)
}

fn evaluate_messages(rules: &[MessageRule], score: &Score, insights: &Insights) -> Vec<String> {
    rules
        .iter()
        .filter_map(|rule| rule.evaluate(score, insights))
        .collect()
}
