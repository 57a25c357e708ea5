//! Heuristic resume scoring

pub mod aggregator;
pub mod analysis;
pub mod calculators;
pub mod catalog;
pub mod engine;
pub mod insights;
pub mod matcher;
pub mod rules;
