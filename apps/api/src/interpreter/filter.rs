use crate::interpreter::extract::contains_word;
use crate::models::candidate::Candidate;

/// Conjunction of optional candidate predicates plus an optional result cap.
/// Results are always ordered by score, highest first; ties keep table order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateFilter {
    pub skill: Option<String>,
    pub location: Option<String>,
    pub min_experience: Option<u32>,
    pub limit: Option<usize>,
}

impl CandidateFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skill(mut self, skill: impl Into<String>) -> Self {
        self.skill = Some(skill.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn min_experience(mut self, years: u32) -> Self {
        self.min_experience = Some(years);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn matches(&self, candidate: &Candidate) -> bool {
        let skill_ok = self
            .skill
            .as_deref()
            .map_or(true, |skill| has_skill(candidate, skill));
        let location_ok = self.location.as_deref().map_or(true, |location| {
            candidate
                .location
                .to_lowercase()
                .contains(&location.to_lowercase())
        });
        let experience_ok = self
            .min_experience
            .map_or(true, |years| candidate.experience_years >= years);

        skill_ok && location_ok && experience_ok
    }

    pub fn apply(&self, candidates: &[Candidate]) -> Vec<Candidate> {
        let mut selected: Vec<Candidate> = candidates
            .iter()
            .filter(|c| self.matches(c))
            .cloned()
            .collect();

        // sort_by is stable
        selected.sort_by(|a, b| b.score.cmp(&a.score));

        if let Some(limit) = self.limit {
            selected.truncate(limit);
        }
        selected
    }
}

pub fn has_skill(candidate: &Candidate, skill: &str) -> bool {
    candidate.skills.iter().any(|s| contains_word(s, skill))
}
