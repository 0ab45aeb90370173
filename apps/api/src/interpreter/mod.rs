//! Rule-based query interpreter shared by every chat surface.
//!
//! A query is lower-cased once, classified against an ordered [`intents::IntentTable`]
//! (first match wins), and the chosen intent's handler filters the candidate table
//! and formats a canned sentence. Interpretation is pure: the same query over the
//! same table always yields the same reply.

pub mod extract;
pub mod filter;
pub mod handlers;
pub mod hiring;
pub mod intents;
pub mod pipeline;
pub mod resume;
pub mod stats;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::interpreter::stats::PipelineStats;
use crate::models::candidate::{Candidate, CandidateStore};
use crate::models::resume::ResumeProfile;

/// Raw query text plus its lower-cased form used by every predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    raw: String,
    lower: String,
}

impl Query {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let lower = raw.to_lowercase();
        Self { raw, lower }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn lower(&self) -> &str {
        &self.lower
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lower.contains(needle)
    }
}

/// Structured payload rendered next to the reply sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplyData {
    Candidates {
        candidates: Vec<Candidate>,
    },
    Stats {
        stats: PipelineStats,
    },
    ResumeAnalysis {
        analysis: ResumeProfile,
    },
    SkillsHighlight {
        skills: Vec<String>,
        suggestions: Vec<String>,
    },
    Improvements {
        suggestions: Vec<String>,
        areas: Vec<String>,
    },
    Keywords {
        current: Vec<String>,
        suggested: Vec<String>,
    },
    Rating {
        score: u8,
        strengths: Vec<String>,
        weaknesses: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantReply {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ReplyData>,
}

impl AssistantReply {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            data: None,
        }
    }

    pub fn with_data(content: impl Into<String>, data: ReplyData) -> Self {
        Self {
            content: content.into(),
            data: Some(data),
        }
    }

    pub fn candidates(content: impl Into<String>, candidates: Vec<Candidate>) -> Self {
        Self::with_data(content, ReplyData::Candidates { candidates })
    }
}

/// A chat surface: an intent table plus the handlers behind it.
pub trait Assistant: Send + Sync {
    fn kind(&self) -> AssistantKind;
    fn respond(&self, query: &Query) -> AssistantReply;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssistantKind {
    /// Talent pipeline search behind `POST /api/chatbot`.
    #[default]
    Pipeline,
    /// HR hiring assistant.
    Hiring,
    /// Candidate-facing resume analyzer.
    Resume,
}

impl AssistantKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "pipeline" => Some(Self::Pipeline),
            "hiring" => Some(Self::Hiring),
            "resume" => Some(Self::Resume),
            _ => None,
        }
    }
}

/// Every assistant, built once at startup over the shared read-only data.
pub struct Assistants {
    pipeline: pipeline::PipelineAssistant,
    hiring: hiring::HiringAssistant,
    resume: resume::ResumeAssistant,
}

impl Assistants {
    pub fn new(candidates: Arc<CandidateStore>, profile: Arc<ResumeProfile>) -> Self {
        Self {
            pipeline: pipeline::PipelineAssistant::new(candidates.clone()),
            hiring: hiring::HiringAssistant::new(candidates),
            resume: resume::ResumeAssistant::new(profile),
        }
    }

    pub fn get(&self, kind: AssistantKind) -> &dyn Assistant {
        match kind {
            AssistantKind::Pipeline => &self.pipeline,
            AssistantKind::Hiring => &self.hiring,
            AssistantKind::Resume => &self.resume,
        }
    }
}
