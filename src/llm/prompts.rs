//! Prompt templates for the remote analyzer

/// Prompt templates with `{resume}` placeholders
#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub system: String,
    pub analysis: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            system: SYSTEM_PROMPT.to_string(),
            analysis: ANALYSIS_TEMPLATE.to_string(),
        }
    }
}

impl PromptTemplates {
    pub fn render_analysis(&self, resume_content: &str) -> String {
        self.analysis.replace("{resume}", resume_content)
    }
}

const SYSTEM_PROMPT: &str = "You are an experienced HR professional and career coach. Provide practical, realistic resume feedback that normal people can understand and implement. Focus on what actually helps people get jobs.";

const ANALYSIS_TEMPLATE: &str = r#"You are an experienced HR professional and career coach who has reviewed thousands of resumes. Analyze this resume and provide practical, realistic feedback that anyone can understand and implement.

Resume Content:
"""
{resume}
"""

Return a JSON object with exactly this structure. Be realistic in your scoring; most resumes have room for improvement:

{
  "score": {
    "overall": number (0-100, average resumes score 60-75),
    "content": {
      "experience": number (0-100, how well work history is described),
      "skills": number (0-100, relevant skills listed),
      "education": number (0-100, educational background),
      "achievements": number (0-100, specific accomplishments mentioned)
    },
    "structure": {
      "formatting": number (0-100, how professional and organized it looks),
      "sections": number (0-100, has key sections like contact, experience, education),
      "length": number (0-100, appropriate length),
      "readability": number (0-100, easy to scan quickly)
    },
    "optimization": {
      "keywords": number (0-100, uses relevant job-related terms),
      "actionVerbs": number (0-100, uses strong verbs like "managed", "created"),
      "quantification": number (0-100, includes numbers, percentages, results),
      "relevance": number (0-100, content matches typical job requirements)
    }
  },
  "advice": [
    {
      "category": "string (e.g. 'Work Experience', 'Contact Information', 'Skills Section')",
      "issue": "string (plain explanation of what is missing or wrong)",
      "suggestion": "string (specific, actionable advice)",
      "impact": "critical|high|medium|low",
      "examples": ["practical examples they can use"]
    }
  ],
  "insights": {
    "wordCount": number,
    "pageEstimate": number,
    "experienceYears": number,
    "skillsCount": number,
    "quantifiedAchievements": number,
    "actionVerbsUsed": number,
    "contactInfoComplete": boolean,
    "sectionsFound": ["contact", "experience", "education", "skills"]
  },
  "strengths": ["what this person is doing well"],
  "criticalIssues": ["major problems that need immediate attention"],
  "industryMatch": number (0-100, how well it matches common job requirements)
}

Use simple language, give examples they can copy, and focus on what employers actually look for. Order advice from most to least important."#;
