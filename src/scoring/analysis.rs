//! Analysis record produced by every backend

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Canonical resume sections, in detection order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Experience,
    Education,
    Skills,
    Contact,
    Summary,
    Projects,
    Certifications,
    Awards,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Experience,
        Section::Education,
        Section::Skills,
        Section::Contact,
        Section::Summary,
        Section::Projects,
        Section::Certifications,
        Section::Awards,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Skills => "skills",
            Section::Contact => "contact",
            Section::Summary => "summary",
            Section::Projects => "projects",
            Section::Certifications => "certifications",
            Section::Awards => "awards",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural facts derived from the resume text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub word_count: usize,
    pub page_estimate: usize,
    pub experience_years: u32,
    pub skills_count: usize,
    pub quantified_achievements: usize,
    pub action_verbs_used: usize,
    pub contact_info_complete: bool,
    /// Section names as free text so remote replies like "work history" still parse
    pub sections_found: Vec<String>,
}

impl Insights {
    pub fn has_section(&self, section: Section) -> bool {
        self.sections_found.iter().any(|s| s == section.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentScores {
    #[serde(deserialize_with = "deserialize_score")]
    pub experience: u8,
    #[serde(deserialize_with = "deserialize_score")]
    pub skills: u8,
    #[serde(deserialize_with = "deserialize_score")]
    pub education: u8,
    #[serde(deserialize_with = "deserialize_score")]
    pub achievements: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureScores {
    #[serde(deserialize_with = "deserialize_score")]
    pub formatting: u8,
    #[serde(deserialize_with = "deserialize_score")]
    pub sections: u8,
    #[serde(deserialize_with = "deserialize_score")]
    pub length: u8,
    #[serde(deserialize_with = "deserialize_score")]
    pub readability: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationScores {
    #[serde(deserialize_with = "deserialize_score")]
    pub keywords: u8,
    #[serde(deserialize_with = "deserialize_score")]
    pub action_verbs: u8,
    #[serde(deserialize_with = "deserialize_score")]
    pub quantification: u8,
    #[serde(deserialize_with = "deserialize_score")]
    pub relevance: u8,
}

impl ContentScores {
    pub fn average(&self) -> f64 {
        mean([
            self.experience,
            self.skills,
            self.education,
            self.achievements,
        ])
    }
}

impl StructureScores {
    pub fn average(&self) -> f64 {
        mean([
            self.formatting,
            self.sections,
            self.length,
            self.readability,
        ])
    }
}

impl OptimizationScores {
    pub fn average(&self) -> f64 {
        mean([
            self.keywords,
            self.action_verbs,
            self.quantification,
            self.relevance,
        ])
    }
}

fn mean(values: [u8; 4]) -> f64 {
    values.iter().map(|&v| f64::from(v)).sum::<f64>() / values.len() as f64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    #[serde(deserialize_with = "deserialize_score")]
    pub overall: u8,
    pub content: ContentScores,
    pub structure: StructureScores,
    pub optimization: OptimizationScores,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Critical,
    High,
    Medium,
    Low,
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Impact::Critical => "critical",
            Impact::High => "high",
            Impact::Medium => "medium",
            Impact::Low => "low",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceItem {
    pub category: String,
    pub issue: String,
    pub suggestion: String,
    pub impact: Impact,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub score: Score,
    pub advice: Vec<AdviceItem>,
    pub insights: Insights,
    pub strengths: Vec<String>,
    pub critical_issues: Vec<String>,
    #[serde(deserialize_with = "deserialize_score")]
    pub industry_match: u8,
}

/// Whole-number score in 0..=100; remote replies may carry fractions
fn deserialize_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() {
        return Err(D::Error::custom("score is not a finite number"));
    }
    Ok(value.round().clamp(0.0, 100.0) as u8)
}

/// Human-readable band for an overall score
pub fn rating_label(overall: u8) -> &'static str {
    match overall {
        90..=u8::MAX => "Exceptional",
        80..=89 => "Excellent",
        70..=79 => "Good",
        60..=69 => "Average",
        50..=59 => "Below Average",
        _ => "Needs Improvement",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bands() {
        assert_eq!(rating_label(95), "Exceptional");
        assert_eq!(rating_label(80), "Excellent");
        assert_eq!(rating_label(79), "Good");
        assert_eq!(rating_label(60), "Average");
        assert_eq!(rating_label(50), "Below Average");
        assert_eq!(rating_label(12), "Needs Improvement");
    }

    #[test]
    fn test_camel_case_field_names() {
        let insights = Insights {
            word_count: 3,
            page_estimate: 1,
            experience_years: 0,
            skills_count: 0,
            quantified_achievements: 0,
            action_verbs_used: 0,
            contact_info_complete: false,
            sections_found: vec!["skills".to_string()],
        };
        let json = serde_json::to_value(&insights).unwrap();
        assert_eq!(json["wordCount"], 3);
        assert_eq!(json["contactInfoComplete"], false);
        assert!(insights.has_section(Section::Skills));
        assert!(!insights.has_section(Section::Awards));
    }

    #[test]
    fn test_advice_examples_omitted_when_absent() {
        let item = AdviceItem {
            category: "Keywords".to_string(),
            issue: "issue".to_string(),
            suggestion: "suggestion".to_string(),
            impact: Impact::Medium,
            examples: None,
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("examples"));
        assert!(json.contains("\"impact\":\"medium\""));
    }

    #[test]
    fn test_fractional_scores_are_rounded() {
        let scores: ContentScores = serde_json::from_str(
            r#"{"experience": 72.5, "skills": 64.4, "education": 130, "achievements": -3}"#,
        )
        .unwrap();
        assert_eq!(scores.experience, 73);
        assert_eq!(scores.skills, 64);
        assert_eq!(scores.education, 100);
        assert_eq!(scores.achievements, 0);

        let text: Result<ContentScores, _> = serde_json::from_str(
            r#"{"experience": "high", "skills": 1, "education": 1, "achievements": 1}"#,
        );
        assert!(text.is_err());
    }
}
