//! CLI 日志系统初始化
//!
//! 基于 `tracing-subscriber` 实现分目标日志控制。
//! 日志写到 stderr，stdout 只输出转换结果。

use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry,
};

use crate::config::LogConfig;
use roman_api::{Component, RomanError};

/// 日志输出格式
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// 彩色格式化（开发使用）
    Pretty,
    /// 紧凑格式
    #[default]
    Compact,
    /// JSON 格式（工具集成）
    Json,
}

/// 按日志配置构建目标过滤器
pub fn build_targets(log_config: &LogConfig) -> Targets {
    Targets::new()
        .with_default(log_config.global)
        .with_target(
            Component::Converter.target(),
            log_config.level_for_component(Component::Converter),
        )
        .with_target(Component::Api.target(), log_config.level_for_component(Component::Api))
        .with_target(Component::Cli.target(), log_config.global)
}

/// 使用指定格式和日志配置初始化日志系统
///
/// 指定 `file` 时同时输出到 stderr 和文件（追加模式）。
pub fn init(
    log_config: &LogConfig,
    format: LogFormat,
    file: Option<&Path>,
) -> Result<(), RomanError> {
    let targets = build_targets(log_config);

    let file_layer = match file {
        Some(path) => {
            let handle = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    RomanError::Io(format!("无法打开日志文件 '{}': {}", path.display(), e))
                })?;
            Some(
                fmt::layer()
                    .with_writer(Mutex::new(handle))
                    .with_ansi(false)
                    .with_filter(targets.clone()),
            )
        }
        None => None,
    };

    let stderr_layer = create_format_layer(format, io::stderr).with_filter(targets);

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| RomanError::Config(format!("日志系统初始化失败: {}", e)))
}

/// Create formatter layer based on format
fn create_format_layer<W, F>(format: LogFormat, make_writer: F) -> impl Layer<Registry>
where
    W: io::Write + Send + Sync + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    #[test]
    fn test_targets_follow_log_config() {
        let cfg = LogConfig {
            global: Level::WARN,
            converter: Some(Level::TRACE),
            api: None,
        };
        let targets = build_targets(&cfg);
        assert!(targets.would_enable("roman::converter", &Level::TRACE));
        assert!(!targets.would_enable("roman::api", &Level::INFO));
        assert!(targets.would_enable("roman::api", &Level::WARN));
        assert!(!targets.would_enable("other", &Level::DEBUG));
    }

    #[test]
    fn test_api_target_override() {
        let cfg = LogConfig {
            global: Level::ERROR,
            converter: None,
            api: Some(Level::DEBUG),
        };
        let targets = build_targets(&cfg);
        assert!(targets.would_enable("roman::api", &Level::DEBUG));
        assert!(!targets.would_enable("roman::converter", &Level::WARN));
    }

    #[test]
    fn test_default_log_format() {
        assert_eq!(LogFormat::default(), LogFormat::Compact);
    }
}
