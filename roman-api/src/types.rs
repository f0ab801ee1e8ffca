//! API 类型定义
//!
//! 转换的输出类型。

use serde::Serialize;
use serde_json::{json, Value};

use crate::error::RomanError;

/// 转换输出
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    /// 原始输入
    pub input: String,
    /// 大写归一化后的输入
    pub normalized: String,
    /// 十进制值
    pub value: u64,
    /// 计算过程（仅在 `RunConfig::explain` 开启时）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl Conversion {
    /// 文本格式：`<numeral> -> <value>`
    pub fn to_line(&self) -> String {
        format!("{} -> {}", self.input, self.value)
    }
}

/// 批量转换中的一项
#[derive(Debug, Clone, PartialEq)]
pub struct BatchEntry {
    /// 原始输入（任意 JSON 值）
    pub input: Value,
    /// 转换结果
    pub outcome: Result<Conversion, RomanError>,
}

impl BatchEntry {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    /// JSON 格式：`{"input": ..., "value": N}` 或 `{"input": ..., "error": {...}}`
    pub fn to_json(&self) -> Value {
        match &self.outcome {
            Ok(conversion) => {
                let mut out = json!({
                    "input": self.input,
                    "value": conversion.value,
                });
                if let Some(explanation) = &conversion.explanation {
                    out["explanation"] = json!(explanation);
                }
                out
            }
            Err(e) => json!({
                "input": self.input,
                "error": e.to_report().to_json(),
            }),
        }
    }

    /// 输入的显示文本：字符串原样输出，其他 JSON 值按 JSON 输出
    pub fn input_text(&self) -> String {
        match &self.input {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}
