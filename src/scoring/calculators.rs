//! The twelve sub-score calculators
//!
//! Each calculator adds weighted contributions from counted signals and
//! clamps the result to 0..=100.

use crate::scoring::analysis::{Insights, Section};
use crate::scoring::catalog::{Catalog, BULLET_GLYPHS};
use crate::scoring::insights::EARLIEST_CAREER_YEAR;

/// Inputs shared by every calculator
pub struct ScoringContext<'a> {
    /// Lowercased text
    pub text: &'a str,
    /// Text with original casing
    pub original: &'a str,
    pub insights: &'a Insights,
    pub catalog: &'a Catalog,
    pub reference_year: u32,
}

/// Years-of-experience points, by tier
const EXPERIENCE_TIERS: &[(u32, f64)] = &[(10, 40.0), (5, 35.0), (3, 25.0), (1, 15.0)];
const EXPERIENCE_BASE: f64 = 5.0;

const REQUIRED_SECTIONS: [Section; 4] = [
    Section::Experience,
    Section::Education,
    Section::Skills,
    Section::Contact,
];
const OPTIONAL_SECTIONS: [Section; 4] = [
    Section::Summary,
    Section::Projects,
    Section::Certifications,
    Section::Awards,
];
const CORE_SECTIONS: [Section; 3] = [Section::Experience, Section::Education, Section::Skills];

const RECENT_YEARS: u32 = 5;

fn clamp_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

fn capped(count: usize, weight: f64, cap: f64) -> f64 {
    (count as f64 * weight).min(cap)
}

// ---- content -------------------------------------------------------------

pub fn experience(ctx: &ScoringContext) -> u8 {
    let years = ctx.insights.experience_years;
    let tier = EXPERIENCE_TIERS
        .iter()
        .find(|(min_years, _)| years >= *min_years)
        .map(|(_, points)| *points)
        .unwrap_or(EXPERIENCE_BASE);

    let titles = ctx.catalog.job_titles.count_present(ctx.text);
    let verbs = ctx.catalog.responsibility_verbs.count_present(ctx.text);

    clamp_score(tier + capped(titles, 6.0, 30.0) + capped(verbs, 3.0, 30.0))
}

pub fn skills(ctx: &ScoringContext) -> u8 {
    let mut score = capped(ctx.insights.skills_count, 4.0, 50.0);
    if ctx.insights.has_section(Section::Skills) {
        score += 25.0;
    }
    score += capped(ctx.catalog.soft_skills.count_present(ctx.text), 5.0, 25.0);
    clamp_score(score)
}

pub fn education(ctx: &ScoringContext) -> u8 {
    let degree = f64::from(ctx.catalog.degree_points(ctx.text));
    let certifications = ctx.catalog.certifications.count_present(ctx.text);
    clamp_score(30.0 + degree + capped(certifications, 10.0, 30.0))
}

pub fn achievements(ctx: &ScoringContext) -> u8 {
    let quantified = capped(ctx.insights.quantified_achievements, 12.0, 60.0);
    let words = capped(
        ctx.catalog.achievement_words.count_present(ctx.text),
        5.0,
        40.0,
    );
    clamp_score(quantified + words)
}

// ---- structure -----------------------------------------------------------

pub fn formatting(ctx: &ScoringContext) -> u8 {
    let mut score = if ctx.insights.contact_info_complete { 30.0 } else { 10.0 };

    let core_found = CORE_SECTIONS
        .iter()
        .filter(|s| ctx.insights.has_section(**s))
        .count();
    score += core_found as f64 / CORE_SECTIONS.len() as f64 * 35.0;

    if mentions_career_year(ctx) {
        score += 15.0;
    }
    if ctx.insights.sections_found.len() >= 3 {
        score += 20.0;
    }
    clamp_score(score)
}

/// Phone and postcode digits are not years
fn mentions_career_year(ctx: &ScoringContext) -> bool {
    ctx.catalog
        .year_regex
        .find_iter(ctx.text)
        .filter_map(|m| m.as_str().parse::<u32>().ok())
        .any(|year| (EARLIEST_CAREER_YEAR..=ctx.reference_year).contains(&year))
}

pub fn sections(ctx: &ScoringContext) -> u8 {
    let required = REQUIRED_SECTIONS
        .iter()
        .filter(|s| ctx.insights.has_section(**s))
        .count();
    let optional = OPTIONAL_SECTIONS
        .iter()
        .filter(|s| ctx.insights.has_section(**s))
        .count();

    let score =
        required as f64 / REQUIRED_SECTIONS.len() as f64 * 70.0 + capped(optional, 7.5, 30.0);
    clamp_score(score)
}

pub fn length(ctx: &ScoringContext) -> u8 {
    match ctx.insights.word_count {
        400..=800 => 100,
        300..=1000 => 85,
        200..=1200 => 70,
        n if n < 200 => 30,
        _ => 50,
    }
}

pub fn readability(ctx: &ScoringContext) -> u8 {
    let mut score = 50.0;

    let lines: Vec<&str> = ctx
        .original
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();
    if !lines.is_empty() {
        let words: usize = lines.iter().map(|line| line.split_whitespace().count()).sum();
        let average = words as f64 / lines.len() as f64;
        if (8.0..=15.0).contains(&average) {
            score += 25.0;
        }
    }

    let bullets = ctx
        .original
        .chars()
        .filter(|c| BULLET_GLYPHS.contains(c))
        .count();
    score += capped(bullets, 2.0, 25.0);

    clamp_score(score)
}

// ---- optimization --------------------------------------------------------

pub fn keywords(ctx: &ScoringContext) -> u8 {
    clamp_score(capped(
        ctx.catalog.industry_keywords.count_present(ctx.text),
        5.0,
        100.0,
    ))
}

pub fn action_verbs(ctx: &ScoringContext) -> u8 {
    clamp_score(capped(ctx.insights.action_verbs_used, 8.0, 100.0))
}

pub fn quantification(ctx: &ScoringContext) -> u8 {
    let numbers = ctx.catalog.number_regex.find_iter(ctx.text).count();
    let percents = ctx.catalog.percent_regex.find_iter(ctx.text).count();
    let currency = ctx.catalog.currency_regex.find_iter(ctx.text).count();
    clamp_score(capped(numbers + percents * 2 + currency * 2, 3.0, 100.0))
}

/// Depends on the keywords sub-score, which the caller passes in
pub fn relevance(ctx: &ScoringContext, keywords_score: u8) -> u8 {
    let mut score = 60.0;
    if keywords_score > 30 {
        score += 25.0;
    }
    if mentions_recent_year(ctx.text, ctx.reference_year) {
        score += 15.0;
    }
    clamp_score(score)
}

fn mentions_recent_year(text: &str, reference_year: u32) -> bool {
    (0..RECENT_YEARS)
        .filter_map(|offset| reference_year.checked_sub(offset))
        .any(|year| text.contains(&year.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::insights::InsightExtractor;

    const YEAR: u32 = 2025;

    fn with_context<T>(original: &str, f: impl FnOnce(&ScoringContext) -> T) -> T {
        let catalog = Catalog::default();
        let insights = InsightExtractor::new(&catalog, YEAR).extract(original);
        let lower = original.to_lowercase();
        let ctx = ScoringContext {
            text: &lower,
            original,
            insights: &insights,
            catalog: &catalog,
            reference_year: YEAR,
        };
        f(&ctx)
    }

    #[test]
    fn test_empty_text_scores() {
        with_context("", |ctx| {
            assert_eq!(experience(ctx), 5);
            assert_eq!(skills(ctx), 0);
            assert_eq!(education(ctx), 30);
            assert_eq!(achievements(ctx), 0);
            assert_eq!(formatting(ctx), 10);
            assert_eq!(sections(ctx), 0);
            assert_eq!(length(ctx), 30);
            assert_eq!(readability(ctx), 50);
            assert_eq!(keywords(ctx), 0);
            assert_eq!(action_verbs(ctx), 0);
            assert_eq!(quantification(ctx), 0);
            assert_eq!(relevance(ctx, 0), 60);
        });
    }

    #[test]
    fn test_experience_tiers() {
        // 2015..2023 is eight years: the 5-year tier
        assert_eq!(with_context("2015 2023", experience), 35);
        assert_eq!(with_context("2010 2023", experience), 40);
        assert_eq!(with_context("2020 2023", experience), 25);
        assert_eq!(with_context("2022 2023", experience), 15);
    }

    #[test]
    fn test_experience_titles_and_verbs() {
        // engineer + developer = 12; managed + built = 6; no years = 5
        assert_eq!(
            with_context("engineer developer managed built", experience),
            23
        );
    }

    #[test]
    fn test_experience_caps_at_100() {
        let text = "2000 2020 engineer developer manager analyst designer consultant \
                    managed led developed created implemented designed coordinated \
                    supervised built launched maintained";
        assert_eq!(with_context(text, experience), 100);
    }

    #[test]
    fn test_skills_with_section_heading() {
        let text = "Skills\nPython, Docker, Kubernetes, Redis, Terraform, Linux";
        assert_eq!(with_context(text, skills), 49);
    }

    #[test]
    fn test_education_tiers_and_certifications() {
        assert_eq!(with_context("PhD in physics", education), 70);
        assert_eq!(
            with_context("Bachelor of Arts, certified scrum practitioner", education),
            65
        );
        // "scrum master" reads as a master's degree
        assert_eq!(
            with_context("Bachelor of Arts, certified scrum master", education),
            75
        );
    }

    #[test]
    fn test_achievements() {
        let text = "increased sales 40% and saved $300";
        // two quantified matches (24) + increased, saved (10)
        assert_eq!(with_context(text, achievements), 34);
    }

    #[test]
    fn test_formatting_full_marks() {
        let text = "Contact: jane@mail.com 555-123-4567\nExperience 2019\nEducation\nSkills";
        assert_eq!(with_context(text, formatting), 100);
    }

    #[test]
    fn test_formatting_ignores_phone_digits_as_years() {
        // contact 30, no sections, and 4567 is outside 1990..=2025
        assert_eq!(
            with_context("contact me at a@b.c 555-123-4567", formatting),
            30
        );
        assert_eq!(
            with_context("contact me at a@b.c 555-123-4567 since 2021", formatting),
            45
        );
        assert_eq!(
            with_context("a@b.c 555-123-4567 until 2031", formatting),
            30
        );
    }

    #[test]
    fn test_sections_rounding() {
        // experience + summary: 17.5 + 7.5 = 25
        assert_eq!(with_context("experience summary", sections), 25);
        // experience, education, skills, contact, projects
        assert_eq!(
            with_context("experience education skills contact projects", sections),
            78
        );
    }

    #[test]
    fn test_length_bands() {
        assert_eq!(with_context(&"w ".repeat(500), length), 100);
        assert_eq!(with_context(&"w ".repeat(900), length), 85);
        assert_eq!(with_context(&"w ".repeat(250), length), 70);
        assert_eq!(with_context(&"w ".repeat(150), length), 30);
        assert_eq!(with_context(&"w ".repeat(1500), length), 50);
    }

    #[test]
    fn test_readability_line_length_and_bullets() {
        let text = "• Led a team of engineers across three product areas\n\
                    • Built the deployment pipeline used by every service";
        // 9.5 words per line; two bullets
        assert_eq!(with_context(text, readability), 79);
    }

    #[test]
    fn test_keywords_and_action_verbs() {
        assert_eq!(with_context("agile scrum devops", keywords), 15);
        assert_eq!(
            with_context("achieved improved increased", action_verbs),
            24
        );
    }

    #[test]
    fn test_quantification_weights() {
        // numbers: 40, 3 -> 2; percent: 1; currency: 1 -> (2 + 2 + 2) * 3
        assert_eq!(with_context("40% of $3", quantification), 18);
    }

    #[test]
    fn test_non_ascii_digits_are_not_numbers() {
        with_context("１２３ ٤٥٦ ４０% ＄５", |ctx| {
            assert_eq!(quantification(ctx), 0);
            assert_eq!(achievements(ctx), 0);
            assert_eq!(ctx.insights.quantified_achievements, 0);
        });
        with_context("a@b.c ５５５-１２３-４５６７ ２０２０ ２０２４", |ctx| {
            assert!(!ctx.insights.contact_info_complete);
            assert_eq!(ctx.insights.experience_years, 0);
        });
    }

    #[test]
    fn test_relevance_recent_year() {
        assert_eq!(
            with_context("worked there until 2022", |ctx| relevance(ctx, 35)),
            100
        );
        assert_eq!(
            with_context("worked there until 2015", |ctx| relevance(ctx, 10)),
            60
        );
    }
}
