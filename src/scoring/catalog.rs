//! Keyword and pattern tables used by the heuristic scorer

use crate::scoring::analysis::Section;
use crate::scoring::matcher::KeywordMatcher;
use regex::Regex;

/// Bumped whenever a table below changes in a way that moves scores
pub const CATALOG_VERSION: &str = "2024.1";

#[rustfmt::skip]
pub const TECHNICAL_SKILLS: &[&str] = &[
    // Languages
    "javascript", "typescript", "python", "java", "c++", "c#", "rust", "ruby",
    "php", "swift", "kotlin", "scala", "sql", "html", "css",
    // Frameworks
    "react", "angular", "vue", "node", "django", "flask", "spring", "express",
    ".net",
    // Databases
    "mongodb", "postgresql", "mysql", "redis", "graphql",
    // Platforms and tooling
    "docker", "kubernetes", "aws", "azure", "gcp", "git", "linux", "terraform",
    "jenkins", "rest api", "machine learning", "data analysis",
    // Soft skills
    "leadership", "communication", "teamwork", "problem solving",
    "project management", "agile", "scrum",
];

#[rustfmt::skip]
pub const SOFT_SKILLS: &[&str] = &[
    "leadership", "communication", "teamwork", "problem solving", "collaboration",
    "adaptability", "time management", "critical thinking", "mentoring",
];

#[rustfmt::skip]
pub const JOB_TITLES: &[&str] = &[
    "engineer", "developer", "manager", "analyst", "designer", "consultant",
    "architect", "director", "specialist", "coordinator", "administrator",
    "lead", "intern", "scientist", "officer", "supervisor",
];

#[rustfmt::skip]
pub const RESPONSIBILITY_VERBS: &[&str] = &[
    "managed", "led", "developed", "created", "implemented", "designed",
    "coordinated", "supervised", "built", "launched", "maintained",
];

#[rustfmt::skip]
pub const ACTION_VERBS: &[&str] = &[
    "achieved", "improved", "increased", "reduced", "managed", "led",
    "developed", "created", "implemented", "designed", "launched", "delivered",
    "optimized", "streamlined", "spearheaded", "coordinated", "established",
    "negotiated", "mentored", "resolved",
];

#[rustfmt::skip]
pub const ACHIEVEMENT_WORDS: &[&str] = &[
    "increased", "improved", "reduced", "achieved", "awarded", "recognized",
    "promoted", "saved", "generated", "won", "exceeded", "delivered",
];

pub const DOCTORATE_TERMS: &[&str] = &["phd", "ph.d", "doctorate", "doctoral"];
pub const MASTER_TERMS: &[&str] = &["master", "mba", "m.s.", "msc"];
pub const BACHELOR_TERMS: &[&str] = &["bachelor", "b.s.", "b.a.", "bsc"];
#[rustfmt::skip]
pub const GENERAL_EDUCATION_TERMS: &[&str] = &[
    "university", "college", "degree", "diploma", "graduate", "associate",
];

#[rustfmt::skip]
pub const CERTIFICATION_TERMS: &[&str] = &[
    "certified", "certification", "certificate", "license", "accredited",
];

#[rustfmt::skip]
pub const INDUSTRY_KEYWORDS: &[&str] = &[
    // Technical
    "agile", "scrum", "devops", "ci/cd", "microservices", "api", "cloud",
    "database", "frontend", "backend", "full stack", "mobile", "security",
    "automation", "testing",
    // Business
    "strategy", "stakeholder", "budget", "revenue", "roi", "kpi", "operations",
    "growth", "analytics",
    // Professional
    "cross-functional", "collaboration", "leadership", "project management",
    "process improvement", "customer",
];

pub const SECTION_SYNONYMS: &[(Section, &[&str])] = &[
    (
        Section::Experience,
        &["experience", "employment", "work history", "professional background"],
    ),
    (
        Section::Education,
        &["education", "academic", "university", "college", "degree"],
    ),
    (
        Section::Skills,
        &["skills", "competencies", "technologies", "proficiencies"],
    ),
    (Section::Contact, &["contact", "email", "phone", "linkedin"]),
    (Section::Summary, &["summary", "objective", "profile", "about me"]),
    (Section::Projects, &["projects", "portfolio"]),
    (
        Section::Certifications,
        &["certifications", "certified", "certificate", "licenses"],
    ),
    (Section::Awards, &["awards", "honors", "honours", "recognition"]),
];

pub const QUANTIFIED_ACHIEVEMENT_PATTERNS: &[&str] = &[
    r"[0-9]+%",
    r"\$[0-9]+",
    r"[0-9]+\s*(?:million|thousand|k)",
    r"[0-9]+\s*(?:years?|months?)",
    r"[0-9]+\s*(?:people|team|members)",
    r"[0-9]+\s*(?:projects?|clients?|customers?)",
];

pub const BULLET_GLYPHS: &[char] = &['•', '·', '▪', '▫', '‣', '⁃'];

/// Owned term lists, substitutable in tests
#[derive(Debug, Clone)]
pub struct CatalogTerms {
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub job_titles: Vec<String>,
    pub responsibility_verbs: Vec<String>,
    pub action_verbs: Vec<String>,
    pub achievement_words: Vec<String>,
    /// Degree tiers, highest first, with the points each tier awards
    pub degree_tiers: Vec<(u8, Vec<String>)>,
    pub certifications: Vec<String>,
    pub industry_keywords: Vec<String>,
    pub section_synonyms: Vec<(Section, Vec<String>)>,
}

fn owned(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|t| t.to_string()).collect()
}

impl Default for CatalogTerms {
    fn default() -> Self {
        Self {
            technical_skills: owned(TECHNICAL_SKILLS),
            soft_skills: owned(SOFT_SKILLS),
            job_titles: owned(JOB_TITLES),
            responsibility_verbs: owned(RESPONSIBILITY_VERBS),
            action_verbs: owned(ACTION_VERBS),
            achievement_words: owned(ACHIEVEMENT_WORDS),
            degree_tiers: vec![
                (40, owned(DOCTORATE_TERMS)),
                (35, owned(MASTER_TERMS)),
                (25, owned(BACHELOR_TERMS)),
                (15, owned(GENERAL_EDUCATION_TERMS)),
            ],
            certifications: owned(CERTIFICATION_TERMS),
            industry_keywords: owned(INDUSTRY_KEYWORDS),
            section_synonyms: SECTION_SYNONYMS
                .iter()
                .map(|(section, synonyms)| (*section, owned(synonyms)))
                .collect(),
        }
    }
}

/// Compiled matchers and patterns consumed by the insight extractor and calculators
#[derive(Debug, Clone)]
pub struct Catalog {
    pub technical_skills: KeywordMatcher,
    pub soft_skills: KeywordMatcher,
    pub job_titles: KeywordMatcher,
    pub responsibility_verbs: KeywordMatcher,
    pub action_verbs: KeywordMatcher,
    pub achievement_words: KeywordMatcher,
    pub degree_tiers: Vec<(u8, KeywordMatcher)>,
    pub certifications: KeywordMatcher,
    pub industry_keywords: KeywordMatcher,
    pub section_synonyms: Vec<(Section, KeywordMatcher)>,
    pub quantified_patterns: Vec<Regex>,
    pub year_regex: Regex,
    pub phone_regex: Regex,
    pub number_regex: Regex,
    pub percent_regex: Regex,
    pub currency_regex: Regex,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::from_terms(CatalogTerms::default())
    }
}

impl Catalog {
    pub fn from_terms(terms: CatalogTerms) -> Self {
        let quantified_patterns = QUANTIFIED_ACHIEVEMENT_PATTERNS
            .iter()
            .map(|p| Regex::new(p).expect("Invalid achievement pattern"))
            .collect();

        Self {
            technical_skills: KeywordMatcher::new(&terms.technical_skills),
            soft_skills: KeywordMatcher::new(&terms.soft_skills),
            job_titles: KeywordMatcher::new(&terms.job_titles),
            responsibility_verbs: KeywordMatcher::new(&terms.responsibility_verbs),
            action_verbs: KeywordMatcher::new(&terms.action_verbs),
            achievement_words: KeywordMatcher::new(&terms.achievement_words),
            degree_tiers: terms
                .degree_tiers
                .iter()
                .map(|(points, words)| (*points, KeywordMatcher::new(words)))
                .collect(),
            certifications: KeywordMatcher::new(&terms.certifications),
            industry_keywords: KeywordMatcher::new(&terms.industry_keywords),
            section_synonyms: terms
                .section_synonyms
                .iter()
                .map(|(section, words)| (*section, KeywordMatcher::new(words)))
                .collect(),
            quantified_patterns,
            year_regex: Regex::new(r"[0-9]{4}").expect("Invalid year regex"),
            phone_regex: Regex::new(r"[0-9]{3}[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}")
                .expect("Invalid phone regex"),
            number_regex: Regex::new(r"[0-9]+").expect("Invalid number regex"),
            percent_regex: Regex::new(r"[0-9]+%").expect("Invalid percent regex"),
            currency_regex: Regex::new(r"\$[0-9]+").expect("Invalid currency regex"),
        }
    }

    /// Sections whose synonyms occur in `text`, in canonical order
    pub fn detect_sections(&self, text: &str) -> Vec<Section> {
        Section::ALL
            .iter()
            .copied()
            .filter(|section| {
                self.section_synonyms
                    .iter()
                    .any(|(s, matcher)| s == section && matcher.contains_any(text))
            })
            .collect()
    }

    /// Points for the highest degree tier present, or 0
    pub fn degree_points(&self, text: &str) -> u8 {
        self.degree_tiers
            .iter()
            .find(|(_, matcher)| matcher.contains_any(text))
            .map(|(points, _)| *points)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_sizes() {
        let catalog = Catalog::default();
        assert!(catalog.technical_skills.len() >= 45);
        assert_eq!(catalog.soft_skills.len(), 9);
        assert_eq!(catalog.job_titles.len(), 16);
        assert_eq!(catalog.responsibility_verbs.len(), 11);
        assert_eq!(catalog.action_verbs.len(), 20);
        assert_eq!(catalog.achievement_words.len(), 12);
        assert_eq!(catalog.certifications.len(), 5);
        assert_eq!(catalog.industry_keywords.len(), 30);
        assert_eq!(catalog.quantified_patterns.len(), 6);
    }

    #[test]
    fn test_sections_follow_canonical_order() {
        let catalog = Catalog::default();
        let sections = catalog.detect_sections("awards\nskills\nwork history\nsummary");
        assert_eq!(
            sections,
            vec![Section::Experience, Section::Skills, Section::Summary, Section::Awards]
        );
    }

    #[test]
    fn test_highest_degree_tier_wins() {
        let catalog = Catalog::default();
        assert_eq!(catalog.degree_points("bachelor of science, then phd"), 40);
        assert_eq!(catalog.degree_points("mba from state university"), 35);
        assert_eq!(catalog.degree_points("bachelor of arts"), 25);
        assert_eq!(catalog.degree_points("community college"), 15);
        assert_eq!(catalog.degree_points("self taught"), 0);
    }

    #[test]
    fn test_substituted_terms() {
        let mut terms = CatalogTerms::default();
        terms.technical_skills = vec!["cobol".to_string()];
        let catalog = Catalog::from_terms(terms);
        assert_eq!(
            catalog.technical_skills.count_present("cobol and python"),
            1
        );
    }
}
