//! Talent pipeline search: the assistant behind `POST /api/chatbot`.

use std::sync::Arc;

use crate::interpreter::extract::{
    capitalize_first, first_keyword, min_years, HEADLINE_SKILLS, LOCATIONS, SKILL_PRIORITY,
    SKILL_TRIGGERS,
};
use crate::interpreter::filter::CandidateFilter;
use crate::interpreter::intents::{IntentRule, IntentTable, Predicate};
use crate::interpreter::stats::PipelineStats;
use crate::interpreter::{Assistant, AssistantKind, AssistantReply, Query, ReplyData};
use crate::models::candidate::CandidateStore;

const TOP_LIMIT: usize = 5;
const DEFAULT_EXPERIENCE_YEARS: u32 = 5;

pub const HELP_TEXT: &str = "I can help you find candidates based on skills, experience, location, or scores. Try asking: 'Show me top Java developers', 'Find React candidates with 5+ years', or 'Who are the highest scoring candidates?'";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineIntent {
    Top,
    Skill,
    Location,
    Experience,
    Stats,
    Help,
}

const RULES: &[IntentRule<PipelineIntent>] = &[
    IntentRule {
        intent: PipelineIntent::Top,
        predicate: Predicate::Any(&["top", "best", "highest"]),
    },
    IntentRule {
        intent: PipelineIntent::Skill,
        predicate: Predicate::Any(SKILL_TRIGGERS),
    },
    IntentRule {
        intent: PipelineIntent::Location,
        predicate: Predicate::Any(LOCATIONS),
    },
    IntentRule {
        intent: PipelineIntent::Experience,
        predicate: Predicate::Any(&["experience", "years"]),
    },
    IntentRule {
        intent: PipelineIntent::Stats,
        predicate: Predicate::Any(&["stats", "summary", "recent"]),
    },
];

pub const INTENTS: IntentTable<PipelineIntent> = IntentTable {
    rules: RULES,
    fallback: PipelineIntent::Help,
};

pub struct PipelineAssistant {
    candidates: Arc<CandidateStore>,
}

impl PipelineAssistant {
    pub fn new(candidates: Arc<CandidateStore>) -> Self {
        Self { candidates }
    }

    fn top(&self, query: &Query) -> AssistantReply {
        let skill = first_keyword(query, HEADLINE_SKILLS);

        let mut filter = CandidateFilter::new().limit(TOP_LIMIT);
        if let Some(skill) = skill {
            filter = filter.skill(skill);
        }
        let top = filter.apply(self.candidates.all());

        let subject = match skill {
            Some(skill) => format!("{} developers", capitalize_first(skill)),
            None => "candidates".to_string(),
        };
        AssistantReply::candidates(
            format!(
                "Here are the top {} {subject} based on AI matching scores:",
                top.len()
            ),
            top,
        )
    }

    fn skill(&self, query: &Query) -> AssistantReply {
        let skill = first_keyword(query, SKILL_PRIORITY).unwrap_or_default();
        let min_experience = min_years(query).unwrap_or(0);

        let mut filter = CandidateFilter::new().skill(skill);
        if min_experience > 0 {
            filter = filter.min_experience(min_experience);
        }
        let found = filter.apply(self.candidates.all());

        let experience_text = if min_experience > 0 {
            format!(" with {min_experience}+ years of experience")
        } else {
            String::new()
        };
        AssistantReply::candidates(
            format!("Found {} {skill} developers{experience_text}:", found.len()),
            found,
        )
    }

    fn location(&self, query: &Query) -> AssistantReply {
        let location = first_keyword(query, LOCATIONS).unwrap_or_default();
        let skill = first_keyword(query, HEADLINE_SKILLS);

        let mut filter = CandidateFilter::new().location(location);
        if let Some(skill) = skill {
            filter = filter.skill(skill);
        }
        let found = filter.apply(self.candidates.all());

        let skill_text = skill.map(|s| format!("{s} ")).unwrap_or_default();
        AssistantReply::candidates(
            format!(
                "Found {} {skill_text}developers in {}:",
                found.len(),
                capitalize_first(location)
            ),
            found,
        )
    }

    fn experience(&self, query: &Query) -> AssistantReply {
        let min_experience = min_years(query).unwrap_or(DEFAULT_EXPERIENCE_YEARS);
        let found = CandidateFilter::new()
            .min_experience(min_experience)
            .apply(self.candidates.all());

        AssistantReply::candidates(
            format!(
                "Found {} candidates with {min_experience}+ years of experience:",
                found.len()
            ),
            found,
        )
    }

    fn stats(&self) -> AssistantReply {
        AssistantReply::with_data(
            "Here's a summary of your current talent pipeline:",
            ReplyData::Stats {
                stats: PipelineStats::compute(self.candidates.all()),
            },
        )
    }
}

impl Assistant for PipelineAssistant {
    fn kind(&self) -> AssistantKind {
        AssistantKind::Pipeline
    }

    fn respond(&self, query: &Query) -> AssistantReply {
        match INTENTS.classify(query) {
            PipelineIntent::Top => self.top(query),
            PipelineIntent::Skill => self.skill(query),
            PipelineIntent::Location => self.location(query),
            PipelineIntent::Experience => self.experience(query),
            PipelineIntent::Stats => self.stats(),
            PipelineIntent::Help => AssistantReply::text(HELP_TEXT),
        }
    }
}
