//! CLI 配置
//!
//! 包含 CLI 特有的配置：日志配置和运行配置的组合

use roman_api::{Component, LogLevel, RunConfig};
use tracing::Level;

/// CLI 日志配置
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub global: Level,
    pub converter: Option<Level>,
    pub api: Option<Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: Level::WARN,
            converter: None,
            api: None,
        }
    }
}

impl LogConfig {
    /// Build from the run configuration
    pub fn from_run_config(config: &RunConfig) -> Self {
        Self {
            global: to_tracing_level(config.log_level),
            converter: config.converter_log_level.map(to_tracing_level),
            api: config.api_log_level.map(to_tracing_level),
        }
    }

    /// Get log level for a specific target
    pub fn level_for(&self, target: &str) -> Level {
        match target {
            "roman::converter" => self.converter.unwrap_or(self.global),
            "roman::api" => self.api.unwrap_or(self.global),
            _ => self.global,
        }
    }

    /// Get log level for a component
    pub fn level_for_component(&self, component: Component) -> Level {
        self.level_for(&component.target())
    }
}

/// Map a configured level onto `tracing`
pub fn to_tracing_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}
