//! Derives structural facts from raw resume text

use crate::scoring::analysis::Insights;
use crate::scoring::catalog::Catalog;
use log::debug;

pub const WORDS_PER_PAGE: usize = 250;
pub const EARLIEST_CAREER_YEAR: u32 = 1990;

pub struct InsightExtractor<'a> {
    catalog: &'a Catalog,
    reference_year: u32,
}

impl<'a> InsightExtractor<'a> {
    pub fn new(catalog: &'a Catalog, reference_year: u32) -> Self {
        Self {
            catalog,
            reference_year,
        }
    }

    /// Extract insights; `text` may be in any case
    pub fn extract(&self, text: &str) -> Insights {
        let lower = text.to_lowercase();

        let word_count = lower.split_whitespace().count();
        let insights = Insights {
            word_count,
            page_estimate: word_count.div_ceil(WORDS_PER_PAGE),
            experience_years: self.experience_years(&lower),
            skills_count: self.catalog.technical_skills.count_present(&lower),
            quantified_achievements: self.quantified_achievements(&lower),
            action_verbs_used: self.catalog.action_verbs.count_present(&lower),
            contact_info_complete: self.contact_info_complete(&lower),
            sections_found: self
                .catalog
                .detect_sections(&lower)
                .iter()
                .map(|s| s.as_str().to_string())
                .collect(),
        };

        debug!("Extracted insights: {:?}", insights);
        insights
    }

    /// Four-digit numbers that look like career years
    pub fn career_years(&self, text: &str) -> Vec<u32> {
        self.catalog
            .year_regex
            .find_iter(text)
            .filter_map(|m| m.as_str().parse::<u32>().ok())
            .filter(|year| (EARLIEST_CAREER_YEAR..=self.reference_year).contains(year))
            .collect()
    }

    fn experience_years(&self, text: &str) -> u32 {
        let years = self.career_years(text);
        if years.len() < 2 {
            return 0;
        }
        match (years.iter().max(), years.iter().min()) {
            (Some(max), Some(min)) => max - min,
            _ => 0,
        }
    }

    fn quantified_achievements(&self, text: &str) -> usize {
        self.catalog
            .quantified_patterns
            .iter()
            .map(|pattern| pattern.find_iter(text).count())
            .sum()
    }

    fn contact_info_complete(&self, text: &str) -> bool {
        text.contains('@') && self.catalog.phone_regex.is_match(text)
    }
}
