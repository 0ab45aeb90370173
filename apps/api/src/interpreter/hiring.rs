//! HR hiring assistant. Narrower, phrase-oriented rules than the pipeline
//! search; every answer is still computed from the shared candidate table.

use std::sync::Arc;

use crate::interpreter::filter::CandidateFilter;
use crate::interpreter::intents::{IntentRule, IntentTable, Predicate};
use crate::interpreter::stats::PipelineStats;
use crate::interpreter::{Assistant, AssistantKind, AssistantReply, Query, ReplyData};
use crate::models::candidate::CandidateStore;

const TOP_LIMIT: usize = 5;
const SENIOR_REACT_YEARS: u32 = 5;

pub const HELP_TEXT: &str = "I'm not sure how to help with that specific query. Try asking me about finding candidates by skills, experience, location, or scores. For example: 'Show me React developers' or 'Find candidates with 5+ years experience'.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HiringIntent {
    TopJava,
    ReactExperience,
    HighestScoring,
    PythonSeattle,
    Aws,
    RecentApplications,
    Help,
}

const RULES: &[IntentRule<HiringIntent>] = &[
    IntentRule {
        intent: HiringIntent::TopJava,
        predicate: Predicate::All(&["top", "java"]),
    },
    IntentRule {
        intent: HiringIntent::ReactExperience,
        predicate: Predicate::All(&["react", "experience"]),
    },
    IntentRule {
        intent: HiringIntent::HighestScoring,
        predicate: Predicate::Any(&["highest scoring", "best candidates"]),
    },
    IntentRule {
        intent: HiringIntent::PythonSeattle,
        predicate: Predicate::All(&["python", "seattle"]),
    },
    IntentRule {
        intent: HiringIntent::Aws,
        predicate: Predicate::Any(&["aws"]),
    },
    IntentRule {
        intent: HiringIntent::RecentApplications,
        predicate: Predicate::Any(&["recent applications"]),
    },
];

pub const INTENTS: IntentTable<HiringIntent> = IntentTable {
    rules: RULES,
    fallback: HiringIntent::Help,
};

pub struct HiringAssistant {
    candidates: Arc<CandidateStore>,
}

impl HiringAssistant {
    pub fn new(candidates: Arc<CandidateStore>) -> Self {
        Self { candidates }
    }

    fn search(&self, filter: CandidateFilter, content: impl Fn(usize) -> String) -> AssistantReply {
        let found = filter.apply(self.candidates.all());
        AssistantReply::candidates(content(found.len()), found)
    }
}

impl Assistant for HiringAssistant {
    fn kind(&self) -> AssistantKind {
        AssistantKind::Hiring
    }

    fn respond(&self, query: &Query) -> AssistantReply {
        match INTENTS.classify(query) {
            HiringIntent::TopJava => self.search(
                CandidateFilter::new().skill("java").limit(TOP_LIMIT),
                |n| format!("Here are the top {n} Java developers based on AI matching scores:"),
            ),
            HiringIntent::ReactExperience => self.search(
                CandidateFilter::new()
                    .skill("react")
                    .min_experience(SENIOR_REACT_YEARS),
                |n| format!("Found {n} React developers with {SENIOR_REACT_YEARS}+ years of experience:"),
            ),
            HiringIntent::HighestScoring => self.search(
                CandidateFilter::new().limit(TOP_LIMIT),
                |_| "Here are the highest scoring candidates across all positions:".to_string(),
            ),
            HiringIntent::PythonSeattle => self.search(
                CandidateFilter::new().skill("python").location("seattle"),
                |n| format!("Found {n} Python developers in Seattle:"),
            ),
            HiringIntent::Aws => self.search(CandidateFilter::new().skill("aws"), |n| {
                format!("Found {n} candidates with AWS experience:")
            }),
            HiringIntent::RecentApplications => AssistantReply::with_data(
                "Here's a summary of recent applications:",
                ReplyData::Stats {
                    stats: PipelineStats::compute(self.candidates.all()),
                },
            ),
            HiringIntent::Help => AssistantReply::text(HELP_TEXT),
        }
    }
}
