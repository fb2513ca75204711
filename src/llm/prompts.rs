//! ATS analysis prompt with an explicit output schema
//!
//! The schema field names in the template are a wire contract shared with
//! the response parser; changing one side breaks the other.

use crate::error::{OptiScoreError, Result};
use serde::{Deserialize, Serialize};

/// One resume-to-JD analysis submission. Consumed once, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub resume_text: String,
    pub job_description: String,
}

impl AnalysisRequest {
    pub fn new(resume_text: impl Into<String>, job_description: impl Into<String>) -> Result<Self> {
        let resume_text = resume_text.into();
        let job_description = job_description.into();

        if job_description.trim().is_empty() {
            return Err(OptiScoreError::InvalidInput(
                "Job description must not be empty".to_string(),
            ));
        }

        Ok(Self {
            resume_text,
            job_description,
        })
    }
}

#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub ats_analysis: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            ats_analysis: ATS_ANALYSIS_TEMPLATE.to_string(),
        }
    }
}

impl PromptTemplates {
    /// Renders the single analysis prompt, embedding both texts verbatim.
    pub fn render_analysis(&self, request: &AnalysisRequest) -> String {
        self.ats_analysis
            .replace("{resume}", &request.resume_text)
            .replace("{job_description}", &request.job_description)
    }
}

const ATS_ANALYSIS_TEMPLATE: &str = r#"Act as an experienced Applicant Tracking System (ATS) with deep expertise in
software engineering, data science, and technical recruiting. Evaluate the
resume below against the job description. The job market is highly
competitive, so be precise: estimate the overall match percentage and list
the keywords from the job description that are missing from the resume.

<RESUME>
{resume}
</RESUME>

<JOB DESCRIPTION>
{job_description}
</JOB DESCRIPTION>

Respond with a single JSON object and nothing else, using exactly this
structure:
{"JD Match": "%", "MissingKeywords": [], "Profile Summary": ""}

"JD Match" is the match percentage as a string (for example "78%").
"MissingKeywords" is an array of strings.
"Profile Summary" is a short assessment of the candidate's fit."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_embeds_both_texts_verbatim() {
        let templates = PromptTemplates::default();
        let request = AnalysisRequest::new(
            "Software Engineer with Python experience at Tech Corp.",
            "Senior Software Engineer role requiring React and Python.",
        )
        .unwrap();

        let prompt = templates.render_analysis(&request);

        assert!(prompt.contains("Software Engineer with Python experience at Tech Corp."));
        assert!(prompt.contains("Senior Software Engineer role requiring React and Python."));
        assert!(prompt.contains("<RESUME>"));
        assert!(prompt.contains("</JOB DESCRIPTION>"));
    }

    #[test]
    fn test_render_includes_schema_field_names() {
        let templates = PromptTemplates::default();
        let request = AnalysisRequest::new("resume", "jd").unwrap();

        let prompt = templates.render_analysis(&request);

        assert!(prompt.contains("\"JD Match\""));
        assert!(prompt.contains("\"MissingKeywords\""));
        assert!(prompt.contains("\"Profile Summary\""));
    }

    #[test]
    fn test_empty_job_description_rejected() {
        let err = AnalysisRequest::new("resume text", "   ").unwrap_err();
        assert!(matches!(err, OptiScoreError::InvalidInput(_)));
    }

    #[test]
    fn test_empty_resume_text_allowed() {
        // A scanned PDF can extract to nothing; that is still a valid request
        let request = AnalysisRequest::new("", "some job description");
        assert!(request.is_ok());
    }
}
