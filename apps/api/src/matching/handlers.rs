use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::matching::fit_scoring::{score_batch, JobRequirements, MatchReport, ResumeSubmission};
use crate::matching::MODEL_VERSION;
use crate::models::matching::{sample_results, stored_results, MatchResult, StoredMatch};
use crate::state::AppState;

const DEFAULT_MIN_SCORE: &str = "70";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingRequest {
    /// Any JSON value is accepted; only logged.
    pub job_id: Option<Value>,
    pub candidate_ids: Option<Vec<u32>>,
    pub reprocess_all: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingResponse {
    pub success: bool,
    pub results: Vec<MatchResult>,
    pub processed_count: usize,
    pub processing_time: String,
    pub model_version: &'static str,
}

/// POST /api/ai-matching
pub async fn handle_process_matching(
    State(state): State<AppState>,
    body: Result<Json<MatchingRequest>, JsonRejection>,
) -> Result<Json<MatchingResponse>, AppError> {
    let Json(req) = body.map_err(|e| AppError::Matching(e.body_text()))?;
    let started = Instant::now();

    state.matching_latency.wait().await;

    let mut results = sample_results(Utc::now());
    if let Some(ids) = req.candidate_ids.as_ref().filter(|ids| !ids.is_empty()) {
        if !req.reprocess_all.unwrap_or(false) {
            results.retain(|r| ids.contains(&r.candidate_id));
        }
    }

    let processing_time = format!("{:.1}s", started.elapsed().as_secs_f64());
    info!(
        job_id = ?req.job_id,
        processed = results.len(),
        %processing_time,
        "AI matching run complete"
    );

    Ok(Json(MatchingResponse {
        success: true,
        processed_count: results.len(),
        results,
        processing_time,
        model_version: MODEL_VERSION,
    }))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingQuery {
    pub job_id: Option<String>,
    pub min_score: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingFilters {
    pub job_id: Option<String>,
    pub min_score: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredMatchesResponse {
    pub success: bool,
    pub results: Vec<StoredMatch>,
    pub total_count: usize,
    pub filters: MatchingFilters,
}

/// GET /api/ai-matching
pub async fn handle_list_matches(
    Query(params): Query<MatchingQuery>,
) -> Json<StoredMatchesResponse> {
    let min_score = params
        .min_score
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_MIN_SCORE.to_string());

    // A threshold that does not start with a number matches nothing.
    let results: Vec<StoredMatch> = match parse_leading_int(&min_score) {
        Some(threshold) => stored_results(params.job_id.as_deref())
            .into_iter()
            .filter(|r| i64::from(r.overall_score) >= threshold)
            .collect(),
        None => Vec::new(),
    };

    Json(StoredMatchesResponse {
        success: true,
        total_count: results.len(),
        results,
        filters: MatchingFilters {
            job_id: params.job_id,
            min_score,
        },
    })
}

/// Leading integer of `raw`: "85abc" → 85, " -3" → -3, "abc" → None.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value: i64 = digits[..end].parse().unwrap_or(i64::MAX);
    Some(sign * value)
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub resumes: Vec<ResumeSubmission>,
    #[serde(default)]
    pub requirements: Option<JobRequirements>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub success: bool,
    pub results: Vec<MatchReport>,
    pub processed_count: usize,
}

/// POST /api/ai-matching/score
pub async fn handle_score_resumes(
    State(state): State<AppState>,
    body: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<ScoreResponse>, AppError> {
    let Json(req) = body.map_err(|e| AppError::Validation(e.body_text()))?;

    if req.resumes.is_empty() {
        return Err(AppError::Validation(
            "At least one resume is required".to_string(),
        ));
    }
    if req.resumes.iter().any(|r| r.resume_text.trim().is_empty()) {
        return Err(AppError::Validation("Resume text is required".to_string()));
    }

    let requirements = req.requirements.unwrap_or_default();
    let results = score_batch(state.fit_scorer.as_ref(), &req.resumes, &requirements).await?;
    info!(
        processed = results.len(),
        job = %requirements.title,
        "Scored resumes"
    );

    Ok(Json(ScoreResponse {
        success: true,
        processed_count: results.len(),
        results,
    }))
}
