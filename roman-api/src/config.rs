//! API 层配置
//!
//! 包含执行配置 RunConfig 和全局单例（供 CLI 使用）

use once_cell::sync::OnceCell;
use roman_config::{FileConfig, LogLevel, OutputFormat};

use crate::error::RomanError;

/// Conversion configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunConfig {
    /// Output format used by front ends
    pub format: OutputFormat,
    /// Whether to record and return the scan steps
    pub explain: bool,
    /// Global log level
    pub log_level: LogLevel,
    /// Converter log level (falls back to `log_level`)
    pub converter_log_level: Option<LogLevel>,
    /// API log level (falls back to `log_level`)
    pub api_log_level: Option<LogLevel>,
}

impl RunConfig {
    /// Build from `roman.json` contents, filling in defaults
    pub fn from_file_config(file: &FileConfig) -> Self {
        Self {
            format: file.format.unwrap_or_default(),
            explain: file.explain.unwrap_or(false),
            log_level: file.log_level.unwrap_or_default(),
            converter_log_level: file.converter_log_level,
            api_log_level: file.api_log_level,
        }
    }

    /// Effective converter log level
    pub fn converter_level(&self) -> LogLevel {
        self.converter_log_level.unwrap_or(self.log_level)
    }

    /// Effective API log level
    pub fn api_level(&self) -> LogLevel {
        self.api_log_level.unwrap_or(self.log_level)
    }
}

// Global config singleton for CLI convenience
static GLOBAL_CONFIG: OnceCell<RunConfig> = OnceCell::new();

/// Initialize global configuration
///
/// Fails if the configuration was already set (explicitly or by a
/// `quick_convert` call).
pub fn init(config: RunConfig) -> Result<(), RomanError> {
    GLOBAL_CONFIG
        .set(config)
        .map_err(|_| RomanError::Config("configuration already initialized".to_string()))
}

/// Get global config reference, initializing it with defaults if unset
pub fn config() -> &'static RunConfig {
    GLOBAL_CONFIG.get_or_init(RunConfig::default)
}

/// Check if config is initialized
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}
