use std::sync::Arc;

use crate::config::Config;
use crate::interpreter::Assistants;
use crate::latency::SimulatedLatency;
use crate::matching::fit_scoring::{FitScorer, KeywordFitScorer};
use crate::models::candidate::CandidateStore;
use crate::models::resume::ResumeProfile;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything behind it is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub assistants: Arc<Assistants>,
    pub candidates: Arc<CandidateStore>,
    /// Pluggable fit scorer. Default: KeywordFitScorer.
    pub fit_scorer: Arc<dyn FitScorer>,
    pub chatbot_latency: SimulatedLatency,
    pub matching_latency: SimulatedLatency,
}

impl AppState {
    /// Builds the state over the built-in sample candidates and resume profile.
    pub fn new(config: &Config) -> Self {
        let candidates = Arc::new(CandidateStore::sample());
        let profile = Arc::new(ResumeProfile::sample());

        Self {
            assistants: Arc::new(Assistants::new(candidates.clone(), profile)),
            candidates,
            fit_scorer: Arc::new(KeywordFitScorer::new()),
            chatbot_latency: SimulatedLatency::new(config.chatbot_delay),
            matching_latency: SimulatedLatency::new(config.matching_delay),
        }
    }

    /// Same state without any simulated delay.
    #[cfg(test)]
    pub fn instant() -> Self {
        let mut state = Self::new(&Config::default());
        state.chatbot_latency = SimulatedLatency::none();
        state.matching_latency = SimulatedLatency::none();
        state
    }
}
