//! Typed shape of the analysis relayed to callers.

use serde::{Deserialize, Serialize};

/// Roadmap priority. The prompt pins exactly these three spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// One learning-roadmap entry for a skill the resume is missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapItem {
    pub skill: String,
    pub why: String,
    pub resource: String,
    pub priority: Priority,
}

/// Full resume-vs-JD analysis as produced by the model.
/// Replies that deserialize into this shape are relayed verbatim; anything
/// else is rejected during recovery.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// 0-100 per the prompt contract. Out-of-range values are logged by the
    /// analyzer, not clamped.
    pub match_score: u8,
    pub verdict: String,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub roadmap: Vec<RoadmapItem>,
    pub tips: Vec<String>,
}
