pub mod candidate;
pub mod matching;
pub mod resume;
