//! Heuristic scoring engine: text -> insights -> scores -> feedback

use crate::scoring::aggregator::{aggregate, industry_match};
use crate::scoring::analysis::{Analysis, ContentScores, OptimizationScores, StructureScores};
use crate::scoring::calculators::{self, ScoringContext};
use crate::scoring::catalog::Catalog;
use crate::scoring::insights::InsightExtractor;
use crate::scoring::rules;
use chrono::Datelike;
use log::debug;

/// Deterministic rule-based resume scorer
///
/// The engine holds no mutable state; `analyze` is a pure function of its
/// input text, the catalog and the reference year.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    catalog: Catalog,
    reference_year: u32,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoringEngine {
    /// Engine using the default catalog and the local calendar year
    pub fn new() -> Self {
        Self::with_reference_year(current_year())
    }

    pub fn with_reference_year(reference_year: u32) -> Self {
        Self::with_catalog(Catalog::default(), reference_year)
    }

    pub fn with_catalog(catalog: Catalog, reference_year: u32) -> Self {
        Self {
            catalog,
            reference_year,
        }
    }

    pub fn reference_year(&self) -> u32 {
        self.reference_year
    }

    /// Score `text`. Never fails; empty input yields minimum scores.
    pub fn analyze(&self, text: &str) -> Analysis {
        let lower = text.to_lowercase();
        let insights = InsightExtractor::new(&self.catalog, self.reference_year).extract(text);

        let ctx = ScoringContext {
            text: &lower,
            original: text,
            insights: &insights,
            catalog: &self.catalog,
            reference_year: self.reference_year,
        };

        let content = ContentScores {
            experience: calculators::experience(&ctx),
            skills: calculators::skills(&ctx),
            education: calculators::education(&ctx),
            achievements: calculators::achievements(&ctx),
        };
        let structure = StructureScores {
            formatting: calculators::formatting(&ctx),
            sections: calculators::sections(&ctx),
            length: calculators::length(&ctx),
            readability: calculators::readability(&ctx),
        };
        let keywords = calculators::keywords(&ctx);
        let optimization = OptimizationScores {
            keywords,
            action_verbs: calculators::action_verbs(&ctx),
            quantification: calculators::quantification(&ctx),
            relevance: calculators::relevance(&ctx, keywords),
        };

        let score = aggregate(content, structure, optimization);
        debug!(
            "Overall score {} for {} words",
            score.overall,
            insights.word_count
        );

        let advice = rules::generate_advice(&score, &insights);
        let strengths = rules::identify_strengths(&score, &insights);
        let critical_issues = rules::identify_critical_issues(&score, &insights);
        let industry_match = industry_match(
            score.optimization.keywords,
            score.optimization.relevance,
        );

        Analysis {
            score,
            advice,
            insights,
            strengths,
            critical_issues,
            industry_match,
        }
    }
}

fn current_year() -> u32 {
    u32::try_from(chrono::Local::now().year()).unwrap_or(1970)
}
