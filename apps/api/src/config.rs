use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; unset ones fall back to `Config::default()`.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Simulated "thinking" time before the chatbot answers.
    pub chatbot_delay: Duration,
    /// Simulated model time before the AI matching endpoints answer.
    pub matching_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            chatbot_delay: Duration::from_millis(1000),
            matching_delay: Duration::from_millis(2000),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| defaults.port.to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            chatbot_delay: delay_from_env("CHATBOT_DELAY_MS", defaults.chatbot_delay)?,
            matching_delay: delay_from_env("MATCHING_DELAY_MS", defaults.matching_delay)?,
        })
    }
}

fn delay_from_env(key: &str, default: Duration) -> Result<Duration> {
    match std::env::var(key) {
        Ok(raw) => parse_delay_ms(&raw)
            .with_context(|| format!("{key} must be a whole number of milliseconds")),
        Err(_) => Ok(default),
    }
}

fn parse_delay_ms(raw: &str) -> Result<Duration> {
    let millis = raw.trim().parse::<u64>()?;
    Ok(Duration::from_millis(millis))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_mock_latencies() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.chatbot_delay, Duration::from_millis(1000));
        assert_eq!(config.matching_delay, Duration::from_millis(2000));
    }

    #[test]
    fn test_parse_delay_accepts_zero_and_whitespace() {
        assert_eq!(parse_delay_ms("0").unwrap(), Duration::ZERO);
        assert_eq!(parse_delay_ms(" 250 ").unwrap(), Duration::from_millis(250));
    }

    #[test]
    fn test_parse_delay_rejects_garbage() {
        assert!(parse_delay_ms("fast").is_err());
        assert!(parse_delay_ms("-5").is_err());
    }
}
