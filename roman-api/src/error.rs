//! API 错误类型
//!
//! 提供统一的错误类型和结构化错误报告。

use serde::Serialize;
use thiserror::Error;

/// 转换错误（结构化）
pub use roman_core::{ConvertError, ErrorKind};

/// Roman 错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RomanError {
    /// 转换错误（结构化）
    #[error("{0}")]
    Convert(#[from] ConvertError),

    /// 配置错误
    #[error("Config error: {0}")]
    Config(String),

    /// IO 错误
    #[error("IO error: {0}")]
    Io(String),
}

impl RomanError {
    /// 出错字符的位置（如果有）
    pub fn position(&self) -> Option<usize> {
        match self {
            RomanError::Convert(e) => e.position(),
            _ => None,
        }
    }

    /// 获取错误类型名称
    pub fn kind_name(&self) -> &'static str {
        match self {
            RomanError::Convert(e) => e.kind().as_str(),
            RomanError::Config(_) => "Config",
            RomanError::Io(_) => "Io",
        }
    }

    /// 转换为结构化错误报告
    ///
    /// 适用于 JSON 输出等需要结构化数据的场景。
    /// CLI 可以直接打印，也可以序列化为 JSON。
    pub fn to_report(&self) -> ErrorReport {
        match self {
            RomanError::Convert(ConvertError::InvalidInput { message }) => ErrorReport {
                kind: self.kind_name(),
                message: message.clone(),
                symbol: None,
                position: None,
            },
            RomanError::Convert(ConvertError::InvalidSymbol { symbol, position }) => {
                ErrorReport {
                    kind: self.kind_name(),
                    message: format!("invalid symbol: {}", symbol),
                    symbol: Some(*symbol),
                    position: Some(*position),
                }
            }
            RomanError::Config(msg) | RomanError::Io(msg) => ErrorReport {
                kind: self.kind_name(),
                message: msg.clone(),
                symbol: None,
                position: None,
            },
        }
    }
}

/// 结构化错误报告
///
/// 上层应用（CLI、Web）可以根据自己的需求格式化。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    /// 错误类型（可用于程序化处理）
    pub kind: &'static str,
    /// 人类可读的错误消息
    pub message: String,
    /// 出错字符（仅 InvalidSymbol）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<char>,
    /// 出错字符位置，0-based（仅 InvalidSymbol）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
}

impl std::fmt::Display for ErrorReport {
    /// 默认的 CLI 友好格式
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position {
            Some(position) => write!(f, "[{}] {} error: {}", position, self.kind, self.message),
            None => write!(f, "{} error: {}", self.kind, self.message),
        }
    }
}

impl ErrorReport {
    /// 转换为 JSON 值
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    /// 简洁格式（适合终端）
    pub fn to_short(&self) -> String {
        format!("{}: {}", self.kind, self.message)
    }
}
