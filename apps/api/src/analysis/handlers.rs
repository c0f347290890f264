//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::analysis::analyzer::analyze_resume;
use crate::analysis::report::AnalysisReport;
use crate::errors::AppError;
use crate::state::AppState;

/// Both fields stay optional at the serde layer so absence reaches the
/// handler as `None` instead of an extractor rejection; the handler answers
/// 400 naming every missing field.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub resume: Option<String>,
    pub job_description: Option<String>,
}

/// POST /api/v1/analyze
///
/// Validates the two inputs, requires a configured provider, then relays
/// the recovered analysis verbatim.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    let (resume, job_description) = require_inputs(&request)?;

    let llm = state.llm.as_ref().ok_or_else(|| {
        AppError::Configuration(
            "OPENAI_API_KEY is not configured; the analyze endpoint is unavailable".to_string(),
        )
    })?;

    let report = analyze_resume(resume, job_description, llm.as_ref()).await?;

    Ok(Json(report))
}

/// Treats absent, empty, and whitespace-only values as missing and names
/// every missing field in the error.
fn require_inputs(request: &AnalyzeRequest) -> Result<(&str, &str), AppError> {
    let resume = present(&request.resume);
    let job_description = present(&request.job_description);

    let mut missing = Vec::new();
    if resume.is_none() {
        missing.push("resume");
    }
    if job_description.is_none() {
        missing.push("jobDescription");
    }

    match (resume, job_description) {
        (Some(resume), Some(job_description)) => Ok((resume, job_description)),
        _ => Err(AppError::Validation(format!(
            "missing required fields: {}",
            missing.join(", ")
        ))),
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(resume: Option<&str>, job_description: Option<&str>) -> AnalyzeRequest {
        AnalyzeRequest {
            resume: resume.map(str::to_string),
            job_description: job_description.map(str::to_string),
        }
    }

    #[test]
    fn test_require_inputs_accepts_both_present() {
        let req = request(Some("resume text"), Some("jd text"));
        let (resume, job_description) = require_inputs(&req).unwrap();
        assert_eq!(resume, "resume text");
        assert_eq!(job_description, "jd text");
    }

    #[test]
    fn test_require_inputs_trims_surrounding_whitespace() {
        let req = request(Some("  resume text \n"), Some("jd"));
        let (resume, _) = require_inputs(&req).unwrap();
        assert_eq!(resume, "resume text");
    }

    #[test]
    fn test_missing_resume_is_named() {
        let req = request(None, Some("jd"));
        let message = require_inputs(&req).unwrap_err().to_string();
        assert!(message.contains("resume"));
        assert!(!message.contains("jobDescription"));
    }

    #[test]
    fn test_whitespace_only_resume_counts_as_missing() {
        let req = request(Some("   \n\t"), Some("jd"));
        assert!(require_inputs(&req).is_err());
    }

    #[test]
    fn test_both_missing_names_both_in_order() {
        let req = request(None, Some("  "));
        let message = require_inputs(&req).unwrap_err().to_string();
        assert!(message.contains("resume, jobDescription"));
    }

    #[test]
    fn test_request_accepts_camel_case_keys() {
        let req: AnalyzeRequest =
            serde_json::from_str(r#"{"resume": "r", "jobDescription": "jd"}"#).unwrap();
        assert_eq!(req.resume.as_deref(), Some("r"));
        assert_eq!(req.job_description.as_deref(), Some("jd"));
    }

    #[test]
    fn test_request_tolerates_absent_and_null_fields() {
        let req: AnalyzeRequest = serde_json::from_str("{}").unwrap();
        assert!(req.resume.is_none());
        assert!(req.job_description.is_none());

        let req: AnalyzeRequest =
            serde_json::from_str(r#"{"resume": null, "jobDescription": null}"#).unwrap();
        assert!(req.resume.is_none());
        assert!(req.job_description.is_none());
    }
}
