//! Resume analyzer: answers questions about the candidate's own resume.

use std::sync::Arc;

use crate::interpreter::intents::{IntentRule, IntentTable, Predicate};
use crate::interpreter::{Assistant, AssistantKind, AssistantReply, Query, ReplyData};
use crate::models::resume::{strings, ResumeProfile};

pub const HELP_TEXT: &str = "I can help you analyze your resume for ATS optimization, suggest improvements, highlight skills, and more. Try asking me about analyzing your resume, checking keywords, or getting improvement suggestions.";

const SKILL_GROUPS: &[&str] = &[
    "Frontend: React, TypeScript, HTML/CSS",
    "Backend: Node.js, MongoDB, APIs",
    "DevOps: AWS, Docker, Git",
    "Soft Skills: Agile, Team Collaboration",
];

const SUGGESTED_KEYWORDS: &[&str] = &[
    "machine learning",
    "data analysis",
    "cloud computing",
    "microservices",
    "CI/CD",
    "testing",
    "performance optimization",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeIntent {
    Analysis,
    SkillsHighlight,
    Improvements,
    Keywords,
    Rating,
    Help,
}

const RULES: &[IntentRule<ResumeIntent>] = &[
    IntentRule {
        intent: ResumeIntent::Analysis,
        predicate: Predicate::Any(&["analyze", "ats", "optimization"]),
    },
    IntentRule {
        intent: ResumeIntent::SkillsHighlight,
        predicate: Predicate::All(&["skills", "highlight"]),
    },
    IntentRule {
        intent: ResumeIntent::Improvements,
        predicate: Predicate::Any(&["improve", "suggestions"]),
    },
    IntentRule {
        intent: ResumeIntent::Keywords,
        predicate: Predicate::Any(&["keywords", "missing"]),
    },
    IntentRule {
        intent: ResumeIntent::Rating,
        predicate: Predicate::Any(&["rate", "strength"]),
    },
];

pub const INTENTS: IntentTable<ResumeIntent> = IntentTable {
    rules: RULES,
    fallback: ResumeIntent::Help,
};

pub struct ResumeAssistant {
    profile: Arc<ResumeProfile>,
}

impl ResumeAssistant {
    pub fn new(profile: Arc<ResumeProfile>) -> Self {
        Self { profile }
    }
}

impl Assistant for ResumeAssistant {
    fn kind(&self) -> AssistantKind {
        AssistantKind::Resume
    }

    fn respond(&self, query: &Query) -> AssistantReply {
        let profile = self.profile.as_ref();
        match INTENTS.classify(query) {
            ResumeIntent::Analysis => AssistantReply::with_data(
                "Here's a comprehensive analysis of your resume for ATS optimization:",
                ReplyData::ResumeAnalysis {
                    analysis: profile.clone(),
                },
            ),
            ResumeIntent::SkillsHighlight => AssistantReply::with_data(
                "Based on your resume, here are the key skills you should emphasize:",
                ReplyData::SkillsHighlight {
                    skills: profile.skills.clone(),
                    suggestions: strings(SKILL_GROUPS),
                },
            ),
            ResumeIntent::Improvements => AssistantReply::with_data(
                "Here are specific suggestions to improve your resume:",
                ReplyData::Improvements {
                    suggestions: profile.suggestions.clone(),
                    areas: profile.improvement_areas.clone(),
                },
            ),
            ResumeIntent::Keywords => AssistantReply::with_data(
                "Here's an analysis of your resume keywords and suggestions:",
                ReplyData::Keywords {
                    current: profile.keywords.clone(),
                    suggested: strings(SUGGESTED_KEYWORDS),
                },
            ),
            ResumeIntent::Rating => AssistantReply::with_data(
                format!(
                    "Your resume currently scores {}/100. Here's the breakdown:",
                    profile.overall_score
                ),
                ReplyData::Rating {
                    score: profile.overall_score,
                    strengths: profile.strengths.clone(),
                    weaknesses: profile.weaknesses.clone(),
                },
            ),
            ResumeIntent::Help => AssistantReply::text(HELP_TEXT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assistant() -> ResumeAssistant {
        ResumeAssistant::new(Arc::new(ResumeProfile::sample()))
    }

    #[test]
    fn test_suggested_queries_classify() {
        let cases = [
            ("Analyze my resume for ATS optimization", ResumeIntent::Analysis),
            ("What skills should I highlight?", ResumeIntent::SkillsHighlight),
            ("How can I improve my resume?", ResumeIntent::Improvements),
            ("Check for missing keywords", ResumeIntent::Keywords),
            ("Rate my resume strength", ResumeIntent::Rating),
            ("Suggest improvements", ResumeIntent::Improvements),
            ("good morning", ResumeIntent::Help),
        ];
        for (text, expected) in cases {
            assert_eq!(INTENTS.classify(&Query::new(text)), expected, "{text}");
        }
    }

    #[test]
    fn test_analysis_shadows_later_rules() {
        // "ats" also appears inside "stats"; the analysis rule is listed first.
        assert_eq!(
            INTENTS.classify(&Query::new("rate my stats")),
            ResumeIntent::Analysis
        );
    }

    #[test]
    fn test_rating_reports_profile_score() {
        let reply = assistant().respond(&Query::new("Rate my resume strength"));
        assert_eq!(
            reply.content,
            "Your resume currently scores 85/100. Here's the breakdown:"
        );
        match reply.data {
            Some(ReplyData::Rating {
                score,
                strengths,
                weaknesses,
            }) => {
                assert_eq!(score, 85);
                assert_eq!(strengths.len(), 4);
                assert_eq!(weaknesses.len(), 3);
            }
            other => panic!("expected rating, got {other:?}"),
        }
    }

    #[test]
    fn test_keywords_lists_current_and_suggested() {
        let reply = assistant().respond(&Query::new("Check for missing keywords"));
        match reply.data {
            Some(ReplyData::Keywords { current, suggested }) => {
                assert!(current.contains(&"react".to_string()));
                assert!(suggested.contains(&"CI/CD".to_string()));
            }
            other => panic!("expected keywords, got {other:?}"),
        }
    }

    #[test]
    fn test_analysis_returns_full_profile() {
        let reply = assistant().respond(&Query::new("analyze this"));
        assert_eq!(
            reply.data,
            Some(ReplyData::ResumeAnalysis {
                analysis: ResumeProfile::sample()
            })
        );
    }

    #[test]
    fn test_help_has_no_data() {
        let reply = assistant().respond(&Query::new("good morning"));
        assert_eq!(reply.content, HELP_TEXT);
        assert!(reply.data.is_none());
    }
}
