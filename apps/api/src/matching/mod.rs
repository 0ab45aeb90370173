pub mod fit_scoring;
pub mod handlers;
pub mod resume_parser;

/// Reported by every processing run of the matching endpoint.
pub const MODEL_VERSION: &str = "v2.1.3";
