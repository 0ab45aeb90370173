//! Fit scoring: pluggable, trait-based scorer that measures a resume against job
//! requirements.
//!
//! Default: `KeywordFitScorer` (pure-Rust, deterministic, fully testable).
//! `AppState` holds an `Arc<dyn FitScorer>`.

use async_trait::async_trait;
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::resume_parser::{
    extract_contact_info, extract_education, extract_experience, extract_skills, ContactInfo,
    EducationSummary, ExperienceSummary,
};
use crate::models::resume::strings;

const SKILLS_WEIGHT: f64 = 0.4;
const EXPERIENCE_WEIGHT: f64 = 0.35;
const EDUCATION_WEIGHT: f64 = 0.25;

const EDUCATION_WITH_DEGREE: f64 = 80.0;
const EDUCATION_WITHOUT_DEGREE: f64 = 60.0;

// ────────────────────────────────────────────────────────────────────────────
// Input / output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRequirements {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    #[serde(default)]
    pub min_experience: u32,
    #[serde(default)]
    pub education_required: bool,
}

impl Default for JobRequirements {
    /// The Senior Frontend Developer opening used across the HR screens.
    fn default() -> Self {
        Self {
            title: "Senior Frontend Developer".to_string(),
            required_skills: strings(&["React", "TypeScript", "Next.js", "GraphQL", "Jest"]),
            preferred_skills: strings(&["Node.js", "AWS", "Docker"]),
            min_experience: 5,
            education_required: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSubmission {
    pub candidate_id: Option<u32>,
    pub candidate_name: Option<String>,
    pub resume_text: String,
}

/// Percentages, 0 – 100, rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchScores {
    pub overall: f64,
    pub skills_match: f64,
    pub experience_match: f64,
    pub education_match: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchLabel {
    #[serde(rename = "Excellent Match")]
    Excellent,
    #[serde(rename = "Good Match")]
    Good,
    #[serde(rename = "Needs Review")]
    NeedsReview,
}

impl MatchLabel {
    pub fn for_score(score: f64) -> Self {
        if score >= 85.0 {
            MatchLabel::Excellent
        } else if score >= 70.0 {
            MatchLabel::Good
        } else {
            MatchLabel::NeedsReview
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    pub candidate_id: Option<u32>,
    pub candidate_name: Option<String>,
    pub contact_info: ContactInfo,
    pub skills: Vec<String>,
    pub experience: ExperienceSummary,
    pub education: EducationSummary,
    pub scores: MatchScores,
    pub label: MatchLabel,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub matched_preferred_skills: Vec<String>,
    pub summary: String,
    pub scorer_backend: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap scoring backends without touching the handlers.
#[async_trait]
pub trait FitScorer: Send + Sync {
    async fn score(
        &self,
        resume: &ResumeSubmission,
        requirements: &JobRequirements,
    ) -> Result<MatchReport, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordFitScorer
// ────────────────────────────────────────────────────────────────────────────

/// Keyword scorer:
/// 1. skills = matched required skills / required skills × 100
/// 2. experience = 100 when the minimum is met (or zero), else the ratio × 100
/// 3. education = 80 with a recognised degree, 60 without
/// 4. overall = 0.4·skills + 0.35·experience + 0.25·education, capped at 100
#[derive(Debug, Clone, Default)]
pub struct KeywordFitScorer {
    /// Year experience is measured up to; the current year when unset.
    reference_year: Option<i32>,
}

impl KeywordFitScorer {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn as_of(year: i32) -> Self {
        Self {
            reference_year: Some(year),
        }
    }
}

#[async_trait]
impl FitScorer for KeywordFitScorer {
    async fn score(
        &self,
        resume: &ResumeSubmission,
        requirements: &JobRequirements,
    ) -> Result<MatchReport, AppError> {
        let year = self.reference_year.unwrap_or_else(|| Utc::now().year());
        Ok(compute_keyword_fit(resume, requirements, year))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core keyword fit algorithm
// ────────────────────────────────────────────────────────────────────────────

fn compute_keyword_fit(
    resume: &ResumeSubmission,
    requirements: &JobRequirements,
    current_year: i32,
) -> MatchReport {
    let text = &resume.resume_text;
    let contact_info = extract_contact_info(text);
    let skills = extract_skills(text);
    let experience = extract_experience(text, current_year);
    let education = extract_education(text);

    let has_skill = |wanted: &String| skills.iter().any(|s| s.eq_ignore_ascii_case(wanted));

    let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = requirements
        .required_skills
        .iter()
        .cloned()
        .partition(|s| has_skill(s));
    let matched_preferred_skills: Vec<String> = requirements
        .preferred_skills
        .iter()
        .filter(|s| has_skill(s))
        .cloned()
        .collect();

    let skills_match = skill_match(matched_skills.len(), requirements.required_skills.len());
    let experience_match = experience_match(experience.total_years, requirements.min_experience);
    let education_match = if education.degrees.is_empty() {
        EDUCATION_WITHOUT_DEGREE
    } else {
        EDUCATION_WITH_DEGREE
    };
    let overall = overall_score(skills_match, experience_match, education_match);

    let summary = build_summary(overall, &matched_skills, &missing_skills);

    MatchReport {
        candidate_id: resume.candidate_id,
        candidate_name: resume.candidate_name.clone(),
        contact_info,
        skills,
        experience,
        education,
        scores: MatchScores {
            overall: round1(overall),
            skills_match: round1(skills_match),
            experience_match: round1(experience_match),
            education_match: round1(education_match),
        },
        label: MatchLabel::for_score(overall),
        matched_skills,
        missing_skills,
        matched_preferred_skills,
        summary,
        scorer_backend: "keyword".to_string(),
    }
}

fn skill_match(matched: usize, required: usize) -> f64 {
    if required == 0 {
        return 0.0;
    }
    matched as f64 / required as f64 * 100.0
}

fn experience_match(years: u32, required: u32) -> f64 {
    if required == 0 || years >= required {
        100.0
    } else {
        f64::from(years) / f64::from(required) * 100.0
    }
}

fn overall_score(skills: f64, experience: f64, education: f64) -> f64 {
    (skills * SKILLS_WEIGHT + experience * EXPERIENCE_WEIGHT + education * EDUCATION_WEIGHT)
        .min(100.0)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Builds a one-paragraph summary from the score and skill coverage.
fn build_summary(score: f64, matched: &[String], missing: &[String]) -> String {
    let mut summary = if score >= 85.0 {
        "Excellent candidate with strong alignment to job requirements.".to_string()
    } else if score >= 70.0 {
        "Good candidate with solid qualifications for the role.".to_string()
    } else {
        "Candidate may need additional training or experience.".to_string()
    };

    if !matched.is_empty() {
        let top: Vec<&str> = matched.iter().take(3).map(String::as_str).collect();
        summary.push_str(&format!(" Strong in {}.", top.join(", ")));
    }
    if !missing.is_empty() {
        let top: Vec<&str> = missing.iter().take(2).map(String::as_str).collect();
        summary.push_str(&format!(" Would benefit from experience in {}.", top.join(", ")));
    }
    summary
}

/// Scores every resume and orders the reports best first.
pub async fn score_batch(
    scorer: &dyn FitScorer,
    resumes: &[ResumeSubmission],
    requirements: &JobRequirements,
) -> Result<Vec<MatchReport>, AppError> {
    let mut reports = Vec::with_capacity(resumes.len());
    for resume in resumes {
        reports.push(scorer.score(resume, requirements).await?);
    }
    reports.sort_by(|a, b| b.scores.overall.total_cmp(&a.scores.overall));
    Ok(reports)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
