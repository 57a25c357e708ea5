//! Integration tests for the resume scorer

use resume_scorer::config::OutputFormat;
use resume_scorer::input::InputManager;
use resume_scorer::output::{Report, ReportGenerator};
use resume_scorer::scoring::analysis::Section;
use resume_scorer::{ResumeScorerError, ScoringEngine};
use std::io::Write;
use std::path::Path;
use tempfile::tempdir;

const REFERENCE_YEAR: u32 = 2025;

async fn sample_text() -> String {
    let mut manager = InputManager::new();
    manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_text_extraction_from_docx() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("resume.docx");

    let file = std::fs::File::create(&path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    writer
        .start_file(
            "word/document.xml",
            zip::write::SimpleFileOptions::default(),
        )
        .unwrap();
    writer
        .write_all(
            br#"<?xml version="1.0"?><w:document><w:body><w:p><w:r><w:t>Jane Smith</w:t></w:r></w:p><w:p><w:r><w:t>Experience</w:t></w:r></w:p><w:p><w:r><w:t>Data Analyst &amp; Engineer</w:t></w:r></w:p></w:body></w:document>"#,
        )
        .unwrap();
    writer.finish().unwrap();

    let mut manager = InputManager::new();
    let text = manager.extract_text(&path).await.unwrap();
    assert_eq!(text, "Jane Smith\nExperience\nData Analyst & Engineer");
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    // First extraction
    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    // Second extraction should use cache
    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_cache_disabled() {
    let mut manager = InputManager::new().with_cache(false);
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.extract_text(path).await;
    assert!(matches!(
        result,
        Err(ResumeScorerError::UnsupportedFormat(_))
    ));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(ResumeScorerError::InvalidInput(_))));
}

#[tokio::test]
async fn test_blank_document_is_rejected() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/blank.txt");

    let result = manager.extract_text(path).await;
    match result {
        Err(ResumeScorerError::EmptyDocument(message)) => {
            assert!(message.contains("No text could be extracted"));
        }
        other => panic!("expected EmptyDocument, got {:?}", other),
    }
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_sample_resume_insights() {
    let text = sample_text().await;
    let analysis = ScoringEngine::with_reference_year(REFERENCE_YEAR).analyze(&text);
    let insights = &analysis.insights;

    // Earliest year 2010, latest 2024
    assert_eq!(insights.experience_years, 14);
    assert!(insights.contact_info_complete);
    assert!(insights.skills_count >= 10);
    assert!(insights.quantified_achievements >= 3);
    assert!(insights.action_verbs_used >= 5);
    assert!(insights.word_count >= 400);
    assert_eq!(insights.page_estimate, 2);
    for section in Section::ALL {
        assert!(insights.has_section(section), "missing {}", section);
    }
}

#[tokio::test]
async fn test_sample_resume_scores_are_bounded_and_consistent() {
    let text = sample_text().await;
    let analysis = ScoringEngine::with_reference_year(REFERENCE_YEAR).analyze(&text);
    let score = &analysis.score;

    let all = [
        score.content.experience,
        score.content.skills,
        score.content.education,
        score.content.achievements,
        score.structure.formatting,
        score.structure.sections,
        score.structure.length,
        score.structure.readability,
        score.optimization.keywords,
        score.optimization.action_verbs,
        score.optimization.quantification,
        score.optimization.relevance,
        score.overall,
        analysis.industry_match,
    ];
    assert!(all.iter().all(|&v| v <= 100));

    let expected = (score.content.average() * 0.4
        + score.structure.average() * 0.35
        + score.optimization.average() * 0.25)
        .round() as u8;
    assert_eq!(score.overall, expected);

    let blended = (u16::from(score.optimization.keywords)
        + u16::from(score.optimization.relevance))
    .min(100);
    assert_eq!(u16::from(analysis.industry_match), blended / 2);

    // 2024 is within the recency window of 2025
    assert!(score.optimization.relevance >= 75);
    assert!(score.overall >= 60, "overall was {}", score.overall);
    assert!(analysis.critical_issues.is_empty());
    assert!(!analysis.strengths.is_empty());
}

#[tokio::test]
async fn test_analysis_is_deterministic() {
    let text = sample_text().await;
    let engine = ScoringEngine::with_reference_year(REFERENCE_YEAR);
    assert_eq!(engine.analyze(&text), engine.analyze(&text));
}

#[tokio::test]
async fn test_more_quantified_results_never_lower_scores() {
    let text = sample_text().await;
    let engine = ScoringEngine::with_reference_year(REFERENCE_YEAR);
    let before = engine.analyze(&text);

    let extended = format!(
        "{}\n• Grew quarterly revenue by 25% across 12 customers\n",
        text
    );
    let after = engine.analyze(&extended);

    assert!(
        after.insights.quantified_achievements > before.insights.quantified_achievements
    );
    assert!(
        after.score.content.achievements >= before.score.content.achievements
    );
    assert!(
        after.score.optimization.quantification >= before.score.optimization.quantification
    );
}

#[test]
fn test_empty_text_analysis() {
    let analysis = ScoringEngine::with_reference_year(REFERENCE_YEAR).analyze("");
    assert_eq!(analysis.insights.word_count, 0);
    assert_eq!(analysis.insights.page_estimate, 0);
    assert!(analysis.insights.sections_found.is_empty());
    assert!(!analysis.critical_issues.is_empty());
    assert!(analysis.strengths.is_empty());
}

#[tokio::test]
async fn test_json_report_uses_camel_case() {
    let text = sample_text().await;
    let analysis = ScoringEngine::with_reference_year(REFERENCE_YEAR).analyze(&text);
    let report = Report::new(analysis, "tests/fixtures/sample_resume.txt", "heuristic", 3);

    let json = ReportGenerator::with_options(false, false, true, true)
        .generate_report(&report, &OutputFormat::Json)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let analysis = &value["analysis"];
    for field in ["score", "advice", "insights", "strengths", "criticalIssues", "industryMatch"] {
        assert!(analysis.get(field).is_some(), "missing {}", field);
    }
    assert!(
        analysis["score"]["optimization"].get("actionVerbs").is_some()
    );
    assert!(analysis["insights"].get("contactInfoComplete").is_some());
    assert_eq!(value["metadata"]["catalogVersion"], "2024.1");
}
