//! Roman Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all Roman crates.

use serde::{Deserialize, Serialize};

/// Log verbosity, as written in `roman.json` or passed on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parse a level name, case-insensitive
    ///
    /// `"silent"` is accepted as an alias of `error`.
    pub fn parse(s: &str) -> Option<LogLevel> {
        match s.to_lowercase().as_str() {
            "silent" => Some(LogLevel::Error), // silent = only errors
            "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Warn
    }
}

/// How conversion results are printed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<numeral> -> <value>`
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<OutputFormat> {
        match s.to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Component enum for target-specific log configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Component {
    Converter,
    Api,
    Cli,
}

impl Component {
    /// Get the string name of the component
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Converter => "converter",
            Component::Api => "api",
            Component::Cli => "cli",
        }
    }

    /// Get the log target name for this component
    pub fn target(&self) -> String {
        format!("roman::{}", self.as_str())
    }
}

/// Contents of `roman.json`
///
/// Every field is optional; command line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Global log level
    pub log_level: Option<LogLevel>,
    /// Converter-specific log level, falls back to `log_level`
    pub converter_log_level: Option<LogLevel>,
    /// API-layer log level, falls back to `log_level`
    pub api_log_level: Option<LogLevel>,
    /// Output format
    pub format: Option<OutputFormat>,
    /// Print the scan steps of every conversion
    pub explain: Option<bool>,
    /// Numerals converted when none are given on the command line
    pub samples: Option<Vec<String>>,
}

impl FileConfig {
    /// Parse from JSON text
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
