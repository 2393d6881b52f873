use tracing::Level;

pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LogConfig {
    pub level: Level,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig { level: Level::INFO }
    }
}

impl LogConfig {
    /// Reads `LOG_LEVEL`, falling back to INFO when unset or unrecognised.
    pub fn from_env() -> Self {
        std::env::var(LOG_LEVEL_VAR)
            .ok()
            .and_then(|value| Self::parse_level(&value))
            .map(|level| LogConfig { level })
            .unwrap_or_default()
    }

    pub fn parse_level(value: &str) -> Option<Level> {
        match value.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" => Some(Level::INFO),
            "warn" | "warning" => Some(Level::WARN),
            "error" => Some(Level::ERROR),
            _ => None,
        }
    }
}
