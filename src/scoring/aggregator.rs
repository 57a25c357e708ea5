//! Combines sub-scores into category averages and a weighted overall score

use crate::scoring::analysis::{ContentScores, OptimizationScores, Score, StructureScores};

pub const CONTENT_WEIGHT: f64 = 0.40;
pub const STRUCTURE_WEIGHT: f64 = 0.35;
pub const OPTIMIZATION_WEIGHT: f64 = 0.25;

pub fn aggregate(
    content: ContentScores,
    structure: StructureScores,
    optimization: OptimizationScores,
) -> Score {
    Score {
        overall: overall_score(&content, &structure, &optimization),
        content,
        structure,
        optimization,
    }
}

pub fn overall_score(
    content: &ContentScores,
    structure: &StructureScores,
    optimization: &OptimizationScores,
) -> u8 {
    let weighted = content.average() * CONTENT_WEIGHT
        + structure.average() * STRUCTURE_WEIGHT
        + optimization.average() * OPTIMIZATION_WEIGHT;
    weighted.round() as u8
}

/// Blend of keyword density and estimated relevance, truncated to an integer
pub fn industry_match(keywords: u8, relevance: u8) -> u8 {
    ((u16::from(keywords) + u16::from(relevance)).min(100) / 2) as u8
}
