//! 转换错误类型
//!
//! 提供结构化的错误信息，调用方可以按错误类型分支处理。

use thiserror::Error;

/// InvalidInput 的固定消息
pub const INVALID_INPUT_MESSAGE: &str = "input must be a non-empty Roman numeral string";

/// 错误类型（不带数据，用于程序化分支）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 输入为空、全空白，或不是字符串
    InvalidInput,
    /// 出现符号表之外的字符
    InvalidSymbol,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "InvalidInput",
            ErrorKind::InvalidSymbol => "InvalidSymbol",
        }
    }
}

/// 转换错误
///
/// 两种错误都会立即终止本次转换，不返回部分结果。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// 输入不合法
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// 非法符号
    ///
    /// `position` 是大写归一化后字符串中的字符下标（0-based）。
    #[error("Invalid symbol '{symbol}' at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
}

impl ConvertError {
    /// 使用默认消息创建 InvalidInput
    pub fn invalid_input() -> Self {
        ConvertError::InvalidInput {
            message: INVALID_INPUT_MESSAGE.to_string(),
        }
    }

    /// 使用自定义消息创建 InvalidInput
    pub fn invalid_input_with(message: impl Into<String>) -> Self {
        ConvertError::InvalidInput {
            message: message.into(),
        }
    }

    pub fn invalid_symbol(symbol: char, position: usize) -> Self {
        ConvertError::InvalidSymbol { symbol, position }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::InvalidInput { .. } => ErrorKind::InvalidInput,
            ConvertError::InvalidSymbol { .. } => ErrorKind::InvalidSymbol,
        }
    }

    /// 出错字符的位置（仅 InvalidSymbol）
    pub fn position(&self) -> Option<usize> {
        match self {
            ConvertError::InvalidSymbol { position, .. } => Some(*position),
            ConvertError::InvalidInput { .. } => None,
        }
    }

    /// 出错字符（仅 InvalidSymbol）
    pub fn symbol(&self) -> Option<char> {
        match self {
            ConvertError::InvalidSymbol { symbol, .. } => Some(*symbol),
            ConvertError::InvalidInput { .. } => None,
        }
    }
}
