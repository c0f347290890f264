//! Resume-fit analysis pipeline: build the prompt, make one model call,
//! recover the typed report.

use tracing::{info, warn};

use crate::analysis::prompts::{ANALYZE_PROMPT_TEMPLATE, ANALYZE_SYSTEM};
use crate::analysis::report::AnalysisReport;
use crate::errors::AppError;
use crate::llm_client::recovery::recover_report;
use crate::llm_client::LlmClient;

/// Runs one analysis end to end. Strictly sequential, no retries: a single
/// provider call followed by a single recovery pass.
pub async fn analyze_resume(
    resume: &str,
    job_description: &str,
    llm: &dyn LlmClient,
) -> Result<AnalysisReport, AppError> {
    let prompt = build_analysis_prompt(resume, job_description);

    let reply = llm.complete(&prompt, ANALYZE_SYSTEM).await?;

    let report: AnalysisReport = recover_report(&reply)?;

    if report.match_score > 100 {
        warn!(
            "model returned matchScore {} outside the 0-100 contract",
            report.match_score
        );
    }

    info!(
        "analysis complete: matchScore={}, {} matched / {} missing skills",
        report.match_score,
        report.matched_skills.len(),
        report.missing_skills.len()
    );

    Ok(report)
}

fn build_analysis_prompt(resume: &str, job_description: &str) -> String {
    ANALYZE_PROMPT_TEMPLATE
        .replace("{resume}", resume)
        .replace("{job_description}", job_description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::report::Priority;
    use crate::llm_client::test_support::ScriptedLlm;
    use crate::llm_client::LlmError;

    const REPORT_JSON: &str = r#"{
        "matchScore": 85,
        "verdict": "Very strong match.",
        "matchedSkills": ["Rust"],
        "missingSkills": ["GraphQL"],
        "roadmap": [
            {
                "skill": "GraphQL",
                "why": "All client APIs are GraphQL.",
                "resource": "Official GraphQL docs",
                "priority": "High"
            }
        ],
        "tips": ["Lead with the Rust services work."]
    }"#;

    #[test]
    fn test_prompt_interpolates_both_texts() {
        let prompt = build_analysis_prompt("RESUME BODY", "JD BODY");
        assert!(prompt.contains("RESUME BODY"));
        assert!(prompt.contains("JD BODY"));
        assert!(!prompt.contains("{resume}"));
        assert!(!prompt.contains("{job_description}"));
    }

    #[tokio::test]
    async fn test_analyze_with_clean_reply() {
        let llm = ScriptedLlm::with_reply(REPORT_JSON);
        let report = analyze_resume("resume", "jd", &llm).await.unwrap();
        assert_eq!(report.match_score, 85);
        assert_eq!(report.roadmap[0].priority, Priority::High);
    }

    #[tokio::test]
    async fn test_analyze_recovers_fenced_reply() {
        let llm = ScriptedLlm::with_reply(&format!("```json\n{REPORT_JSON}\n```"));
        let report = analyze_resume("resume", "jd", &llm).await.unwrap();
        assert_eq!(report.match_score, 85);
    }

    #[tokio::test]
    async fn test_analyze_recovers_reply_wrapped_in_prose() {
        let llm = ScriptedLlm::with_reply(&format!(
            "Sure! Here's the analysis: {REPORT_JSON} Hope this helps!"
        ));
        let report = analyze_resume("resume", "jd", &llm).await.unwrap();
        assert_eq!(report.verdict, "Very strong match.");
    }

    #[tokio::test]
    async fn test_analyze_rejects_reply_without_json() {
        let llm = ScriptedLlm::with_reply("I'm sorry, I can't help with that.");
        let err = analyze_resume("resume", "jd", &llm).await.unwrap_err();
        assert!(matches!(err, AppError::Recovery(_)));
    }

    #[tokio::test]
    async fn test_analyze_rejects_reply_with_wrong_shape() {
        let llm = ScriptedLlm::with_reply(r#"{"matchScore": "eighty", "verdict": "?"}"#);
        let err = analyze_resume("resume", "jd", &llm).await.unwrap_err();
        assert!(matches!(err, AppError::Recovery(_)));
    }

    #[tokio::test]
    async fn test_analyze_maps_empty_content() {
        let llm = ScriptedLlm::with_error(LlmError::EmptyContent);
        let err = analyze_resume("resume", "jd", &llm).await.unwrap_err();
        assert!(matches!(err, AppError::EmptyCompletion));
    }

    #[tokio::test]
    async fn test_out_of_range_score_passes_through_unclamped() {
        let inflated = REPORT_JSON.replace("85", "130");
        let llm = ScriptedLlm::with_reply(&inflated);
        let report = analyze_resume("resume", "jd", &llm).await.unwrap();
        assert_eq!(report.match_score, 130);
    }
}
