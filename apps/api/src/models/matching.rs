//! Wire shapes of the AI matching endpoints.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::models::resume::strings;

/// One candidate's result from a (re)processing run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub candidate_id: u32,
    pub candidate_name: String,
    pub email: String,
    pub job_title: String,
    pub overall_score: u8,
    pub skills_match: u8,
    pub experience_match: u8,
    pub education_match: u8,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub summary: String,
    pub extracted_skills: Vec<String>,
    pub experience_years: u32,
    pub education: String,
    #[serde(serialize_with = "rfc3339_millis")]
    pub processed_at: DateTime<Utc>,
}

/// A previously computed match as returned by the listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredMatch {
    pub candidate_id: u32,
    pub candidate_name: String,
    pub email: String,
    pub job_id: Option<String>,
    pub overall_score: u8,
    pub skills_match: u8,
    pub experience_match: u8,
    pub education_match: u8,
    #[serde(serialize_with = "rfc3339_millis")]
    pub last_processed: DateTime<Utc>,
}

/// Timestamps go out as `2024-01-18T10:30:00.000Z`, matching the chatbot replies.
fn rfc3339_millis<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Results produced by a processing run finishing at `processed_at`.
pub fn sample_results(processed_at: DateTime<Utc>) -> Vec<MatchResult> {
    vec![
        MatchResult {
            candidate_id: 1,
            candidate_name: "John Doe".to_string(),
            email: "john.doe@email.com".to_string(),
            job_title: "Senior Frontend Developer".to_string(),
            overall_score: 92,
            skills_match: 88,
            experience_match: 95,
            education_match: 90,
            matched_skills: strings(&["React", "TypeScript", "Next.js"]),
            missing_skills: strings(&["GraphQL"]),
            summary: "Highly experienced frontend developer with strong React and TypeScript skills. Perfect match for senior role.".to_string(),
            extracted_skills: strings(&[
                "React",
                "TypeScript",
                "Next.js",
                "Node.js",
                "JavaScript",
                "HTML",
                "CSS",
            ]),
            experience_years: 6,
            education: "Bachelor of Science in Computer Science".to_string(),
            processed_at,
        },
        MatchResult {
            candidate_id: 2,
            candidate_name: "Jane Smith".to_string(),
            email: "jane.smith@email.com".to_string(),
            job_title: "Senior Frontend Developer".to_string(),
            overall_score: 87,
            skills_match: 85,
            experience_match: 90,
            education_match: 85,
            matched_skills: strings(&["React", "JavaScript"]),
            missing_skills: strings(&["TypeScript", "Next.js"]),
            summary: "Experienced developer with strong React background. Would benefit from TypeScript training.".to_string(),
            extracted_skills: strings(&["React", "Vue.js", "JavaScript", "CSS", "HTML"]),
            experience_years: 8,
            education: "Bachelor of Arts in Web Design".to_string(),
            processed_at,
        },
    ]
}

/// Stored results for `job_id`, last processed 2024-01-18 10:30 UTC.
pub fn stored_results(job_id: Option<&str>) -> Vec<StoredMatch> {
    let last_processed = DateTime::parse_from_rfc3339("2024-01-18T10:30:00Z")
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_default();
    let job_id = job_id.map(str::to_string);

    vec![
        StoredMatch {
            candidate_id: 1,
            candidate_name: "John Doe".to_string(),
            email: "john.doe@email.com".to_string(),
            job_id: job_id.clone(),
            overall_score: 92,
            skills_match: 88,
            experience_match: 95,
            education_match: 90,
            last_processed,
        },
        StoredMatch {
            candidate_id: 2,
            candidate_name: "Jane Smith".to_string(),
            email: "jane.smith@email.com".to_string(),
            job_id,
            overall_score: 87,
            skills_match: 85,
            experience_match: 90,
            education_match: 85,
            last_processed,
        },
    ]
}
