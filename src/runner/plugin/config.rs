//! Runtime configuration file parsing.

use std::fs;
use std::path::Path;

use super::registry::PluginError;

pub const ENV_REPORT_UNCONSUMED: &str = "ARGCONV_REPORT_UNCONSUMED";
pub const ENV_LOG_LEVEL: &str = "ARGCONV_LOG_LEVEL";

/// Settings consulted by the native call layer.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    /// Record a diagnostic when an exact-arity native leaves arguments unread.
    pub report_unconsumed_arguments: bool,
    /// Default `tracing` level used by [`crate::logging::init_with_config`].
    pub log_level: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        RuntimeConfig {
            report_unconsumed_arguments: true,
            log_level: "info".to_string(),
        }
    }
}

impl RuntimeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_report_unconsumed_arguments(mut self, enabled: bool) -> Self {
        self.report_unconsumed_arguments = enabled;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Defaults overridden by `ARGCONV_REPORT_UNCONSUMED` and `ARGCONV_LOG_LEVEL`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(val) = std::env::var(ENV_REPORT_UNCONSUMED) {
            if let Some(b) = parse_bool(&val) {
                config.report_unconsumed_arguments = b;
            }
        }
        if let Ok(level) = std::env::var(ENV_LOG_LEVEL) {
            config.log_level = level.to_lowercase();
        }
        config
    }

    /// Load configuration from a TOML file.
    ///
    /// Expected format:
    /// ```toml
    /// [argconv]
    /// report_unconsumed_arguments = false
    ///
    /// [log]
    /// level = "debug"
    /// ```
    pub fn load(path: &Path) -> Result<Self, PluginError> {
        let content = fs::read_to_string(path)
            .map_err(|e| PluginError::ConfigError(format!("Failed to read config file: {}", e)))?;

        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    /// Only the flat `key = value` pairs of the two known sections are read.
    pub fn parse(content: &str) -> Result<Self, PluginError> {
        let mut config = RuntimeConfig::new();
        let mut current_section = String::new();

        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                current_section = line[1..line.len() - 1].trim().to_string();
                continue;
            }

            let (key, value) = Self::parse_key_value(line).ok_or_else(|| {
                PluginError::ConfigError(format!("Line {}: expected key = value", line_no + 1))
            })?;

            match (current_section.as_str(), key.as_str()) {
                ("argconv", "report_unconsumed_arguments") => {
                    config.report_unconsumed_arguments = parse_bool(&value).ok_or_else(|| {
                        PluginError::ConfigError(format!(
                            "Line {}: expected true or false, found {}",
                            line_no + 1,
                            value
                        ))
                    })?;
                }
                ("log", "level") => {
                    config.log_level = value.to_lowercase();
                }
                _ => {
                    tracing::warn!(section = %current_section, key = %key, "unknown config key ignored");
                }
            }
        }

        Ok(config)
    }

    /// Parse `key = value`, stripping quotes from the value.
    fn parse_key_value(line: &str) -> Option<(String, String)> {
        let mut parts = line.splitn(2, '=');
        let key = parts.next()?.trim();
        let value = parts.next()?.trim();
        if key.is_empty() {
            return None;
        }
        let value = value.trim_matches('"');
        Some((key.to_string(), value.to_string()))
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
