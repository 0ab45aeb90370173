use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A job applicant as seen by the assistants and matching endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub position: String,
    /// AI matching score, 0 – 100.
    pub score: u8,
    pub skills: Vec<String>,
    pub experience_years: u32,
    pub location: String,
    pub applied_date: NaiveDate,
}

/// Read-only, insertion-ordered candidate table. Fixed at startup and shared
/// between requests behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct CandidateStore {
    candidates: Vec<Candidate>,
}

impl CandidateStore {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    /// The five reference applicants used by every assistant.
    pub fn sample() -> Self {
        Self::new(vec![
            candidate(
                1,
                "John Doe",
                "Senior Frontend Developer",
                92,
                &["React", "TypeScript", "Next.js", "Node.js", "GraphQL"],
                6,
                "San Francisco, CA",
                (2024, 1, 16),
            ),
            candidate(
                2,
                "Jane Smith",
                "Senior Frontend Developer",
                87,
                &["React", "Vue.js", "JavaScript", "CSS", "HTML"],
                8,
                "Remote",
                (2024, 1, 17),
            ),
            candidate(
                3,
                "Mike Johnson",
                "Java Developer",
                85,
                &["Java", "Spring", "MySQL", "AWS", "Docker"],
                5,
                "New York, NY",
                (2024, 1, 15),
            ),
            candidate(
                4,
                "Sarah Wilson",
                "Java Developer",
                88,
                &["Java", "Spring Boot", "PostgreSQL", "Docker", "Kubernetes"],
                7,
                "Austin, TX",
                (2024, 1, 14),
            ),
            candidate(
                5,
                "Alex Chen",
                "Python Developer",
                90,
                &["Python", "Django", "PostgreSQL", "AWS", "Redis"],
                4,
                "Seattle, WA",
                (2024, 1, 18),
            ),
        ])
    }

    pub fn all(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

#[allow(clippy::too_many_arguments)]
fn candidate(
    id: u32,
    name: &str,
    position: &str,
    score: u8,
    skills: &[&str],
    experience_years: u32,
    location: &str,
    (year, month, day): (i32, u32, u32),
) -> Candidate {
    let email = format!("{}@email.com", name.to_lowercase().replace(' ', "."));
    Candidate {
        id,
        name: name.to_string(),
        email,
        position: position.to_string(),
        score,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        experience_years,
        location: location.to_string(),
        applied_date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
    }
}
