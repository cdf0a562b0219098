//! Logger configuration

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use super::level::LogLevel;

/// Environment variable holding the level name
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

/// Environment variable holding a single output sink identifier
pub const ENV_LOG_OUTPUT: &str = "LOG_OUTPUT";

/// Identifier of the standard output sink
pub const STDOUT: &str = "stdout";

/// Identifier of the standard error sink
pub const STDERR: &str = "stderr";

/// Logger configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Records below this level are dropped
    pub level: LogLevel,

    /// Sinks receiving every record
    pub output_paths: Vec<String>,

    /// Sinks additionally receiving error-class records
    pub error_output_paths: Vec<String>,

    /// Fields attached to every record
    pub initial_fields: Map<String, JsonValue>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            output_paths: vec![STDOUT.to_string()],
            error_output_paths: vec![STDERR.to_string()],
            initial_fields: Map::new(),
        }
    }
}

impl LoggerConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `LOG_LEVEL` and `LOG_OUTPUT` from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable source; unset or blank values keep defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config.level = LogLevel::parse(&level);
        }

        if let Some(output) = lookup(ENV_LOG_OUTPUT) {
            let output = output.trim();
            if !output.is_empty() {
                config.output_paths = vec![output.to_string()];
            }
        }

        config
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_output_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.output_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_error_output_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.error_output_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Add a field attached to every record
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.initial_fields.insert(key.into(), value.into());
        self
    }
}
