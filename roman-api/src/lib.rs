//! Roman API - Conversion orchestration layer
//!
//! Provides a unified conversion interface, including:
//! - Configuration abstraction (RunConfig)
//! - Conversion of untyped (JSON) inputs and batches
//! - Unified error handling (RomanError) and structured reports
//!
//! For CLI convenience, this crate provides a global singleton API.
//! For library use, prefer the explicit `convert(input, &config)` API.

use serde_json::Value;
use tracing::{debug, info};

use roman_core::{ConvertError, Converter, INVALID_INPUT_MESSAGE};

// Re-export config
pub mod config;
pub use config::{config as get_config, init as init_config, is_initialized, RunConfig};

// Re-export config types from roman_config
pub use roman_config::{Component, FileConfig, LogLevel, OutputFormat};

// Re-export error and types
pub mod error;
pub mod types;
pub use error::{ErrorReport, RomanError};
pub use types::{BatchEntry, Conversion};

// Re-export core types
pub use roman_config;
pub use roman_core::{roman_to_int, ErrorKind, Scan, Step, Symbol};

/// Numerals converted by the demonstration driver
pub const DEFAULT_SAMPLES: [&str; 5] = ["III", "LVIII", "MCMXCIV", "XIV", "CDXLIV"];

/// Convert with explicit configuration
///
/// This is the recommended API for library users.
pub fn convert(input: &str, config: &RunConfig) -> Result<Conversion, RomanError> {
    let converter = if config.explain {
        Converter::explaining()
    } else {
        Converter::new()
    };

    let scan = converter.scan(input)?;
    let explanation = config.explain.then(|| scan.explain());

    debug!(target: "roman::api", input, value = scan.total, "conversion completed");

    Ok(Conversion {
        input: input.to_string(),
        normalized: scan.normalized,
        value: scan.total,
        explanation,
    })
}

/// Convert an untyped value
///
/// Anything other than a JSON string is rejected with `InvalidInput`.
pub fn convert_value(input: &Value, config: &RunConfig) -> Result<Conversion, RomanError> {
    match input {
        Value::String(s) => convert(s, config),
        other => {
            debug!(target: "roman::api", kind = json_type_name(other), "rejected non-string input");
            Err(ConvertError::invalid_input_with(format!(
                "{} (got {})",
                INVALID_INPUT_MESSAGE,
                json_type_name(other)
            ))
            .into())
        }
    }
}

/// Convert every entry independently
///
/// A failing entry does not stop the others.
pub fn convert_batch(inputs: &[Value], config: &RunConfig) -> Vec<BatchEntry> {
    info!(target: "roman::api", count = inputs.len(), "Starting batch conversion");

    let entries: Vec<BatchEntry> = inputs
        .iter()
        .map(|input| BatchEntry {
            input: input.clone(),
            outcome: convert_value(input, config),
        })
        .collect();

    let failed = entries.iter().filter(|e| !e.is_ok()).count();
    info!(target: "roman::api", count = entries.len(), failed, "Batch conversion completed");
    entries
}

/// Parse a JSON array of inputs
pub fn parse_batch(text: &str) -> Result<Vec<Value>, RomanError> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(items)) => Ok(items),
        Ok(other) => Err(RomanError::Config(format!(
            "batch must be a JSON array, got {}",
            json_type_name(&other)
        ))),
        Err(e) => Err(RomanError::Config(format!("invalid batch JSON: {}", e))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ==================== Global config API ====================

/// Convert using the global config (defaults if never initialized)
pub fn quick_convert(input: &str) -> Result<Conversion, RomanError> {
    convert(input, get_config())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_convert_with_explicit_config() {
        let result = convert("MCMXCIV", &RunConfig::default()).unwrap();
        assert_eq!(result.value, 1994);
        assert_eq!(result.normalized, "MCMXCIV");
        assert_eq!(result.explanation, None);
    }

    #[test]
    fn test_convert_keeps_original_input() {
        let result = convert("xiv", &RunConfig::default()).unwrap();
        assert_eq!(result.input, "xiv");
        assert_eq!(result.normalized, "XIV");
        assert_eq!(result.to_line(), "xiv -> 14");
    }

    #[test]
    fn test_convert_explain() {
        let config = RunConfig {
            explain: true,
            ..RunConfig::default()
        };
        let result = convert("XIV", &config).unwrap();
        assert_eq!(result.explanation.as_deref(), Some("X(10) + IV(4) = 14"));
    }

    #[test]
    fn test_convert_value_non_string() {
        let config = RunConfig::default();
        for value in [json!(null), json!(14), json!(true), json!(["XIV"]), json!({})] {
            let err = convert_value(&value, &config).unwrap_err();
            match err {
                RomanError::Convert(ConvertError::InvalidInput { message }) => {
                    assert!(message.starts_with(INVALID_INPUT_MESSAGE));
                }
                other => panic!("Expected InvalidInput, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_convert_value_string() {
        let result = convert_value(&json!("cdxliv"), &RunConfig::default()).unwrap();
        assert_eq!(result.value, 444);
    }

    #[test]
    fn test_convert_batch_independent_entries() {
        let inputs = vec![json!("III"), json!(""), json!("XZ"), json!(7), json!("LVIII")];
        let entries = convert_batch(&inputs, &RunConfig::default());

        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0].outcome.as_ref().map(|c| c.value), Ok(3));
        assert_eq!(entries[1].outcome.as_ref().unwrap_err().kind_name(), "InvalidInput");
        assert_eq!(entries[2].outcome.as_ref().unwrap_err().position(), Some(1));
        assert_eq!(entries[3].outcome.as_ref().unwrap_err().kind_name(), "InvalidInput");
        assert_eq!(entries[4].outcome.as_ref().map(|c| c.value), Ok(58));
    }

    #[test]
    fn test_parse_batch() {
        let items = parse_batch(r#"["III", 4, null]"#).unwrap();
        assert_eq!(items, vec![json!("III"), json!(4), json!(null)]);

        assert!(matches!(parse_batch(r#"{"a": 1}"#), Err(RomanError::Config(_))));
        assert!(matches!(parse_batch("[1,"), Err(RomanError::Config(_))));
    }

    #[test]
    fn test_quick_convert() {
        let result = quick_convert("LVIII").unwrap();
        assert_eq!(result.value, 58);
    }

    #[test]
    fn test_default_samples() {
        let values: Vec<u64> = DEFAULT_SAMPLES
            .iter()
            .map(|s| convert(s, &RunConfig::default()).unwrap().value)
            .collect();
        assert_eq!(values, vec![3, 58, 1994, 14, 444]);
    }
}
