//! Case-insensitive keyword matching over catalog terms

use aho_corasick::{AhoCorasick, MatchKind};
use std::collections::HashSet;

/// Matcher that reports which catalog terms occur anywhere in a text
///
/// Terms are matched as plain substrings, so "java" is also found inside
/// "javascript". Overlapping matches are reported so that nested terms
/// are counted independently.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    automaton: AhoCorasick,
    terms: Vec<String>,
}

impl KeywordMatcher {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut terms: Vec<String> = terms
            .into_iter()
            .map(|t| t.as_ref().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        let mut seen = HashSet::new();
        terms.retain(|t| seen.insert(t.clone()));

        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::Standard)
            .build(&terms)
            .expect("catalog terms are plain literals");

        Self { automaton, terms }
    }

    /// Number of distinct terms present in `text`
    pub fn count_present(&self, text: &str) -> usize {
        self.present_ids(text).len()
    }

    pub fn contains_any(&self, text: &str) -> bool {
        self.automaton.is_match(text)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    fn present_ids(&self, text: &str) -> HashSet<usize> {
        self.automaton
            .find_overlapping_iter(text)
            .map(|m| m.pattern().as_usize())
            .collect()
    }
}
