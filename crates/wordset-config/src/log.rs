use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive, `RUST_LOG` wins when set
    pub filter: String,
    /// Emit JSON log lines instead of human-readable ones
    pub json: bool,
}

impl LogConfig {
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let filter = var("WORDSET_LOG").unwrap_or_else(|| "info".to_string());

        let json = var("WORDSET_LOG_JSON")
            .and_then(|v| v.parse().ok())
            .unwrap_or(false);

        Self { filter, json }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::from_vars(|_| None)
    }
}
