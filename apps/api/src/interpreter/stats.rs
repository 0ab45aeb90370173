use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::candidate::Candidate;

/// Share of all applications reported as "this week". A placeholder ratio,
/// not a time-windowed count.
const THIS_WEEK_RATIO: f64 = 0.3;
const TOP_SKILLS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineStats {
    pub total_applications: usize,
    pub this_week: usize,
    pub average_score: u32,
    pub top_skills: Vec<String>,
}

impl PipelineStats {
    pub fn compute(candidates: &[Candidate]) -> Self {
        let total_applications = candidates.len();
        let this_week = (total_applications as f64 * THIS_WEEK_RATIO).floor() as usize;

        let average_score = if candidates.is_empty() {
            0
        } else {
            let sum: u32 = candidates.iter().map(|c| u32::from(c.score)).sum();
            (f64::from(sum) / total_applications as f64).round() as u32
        };

        Self {
            total_applications,
            this_week,
            average_score,
            top_skills: most_frequent_skills(candidates, TOP_SKILLS),
        }
    }
}

/// Skills ranked by how many times they appear; ties keep first-seen order.
fn most_frequent_skills(candidates: &[Candidate], k: usize) -> Vec<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for skill in candidates.iter().flat_map(|c| c.skills.iter()) {
        match index.get(skill.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(skill.as_str(), counts.len());
                counts.push((skill.as_str(), 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(k)
        .map(|(skill, _)| skill.to_string())
        .collect()
}
