//! 罗马数字转换器
//!
//! 单遍从左到右扫描：
//! - 当前符号小于下一个符号时，两者组成减法对，累加差值并跳过两个字符
//! - 否则累加当前符号的值，前进一个字符
//!
//! 减法对不限于 IV/IX/XL/XC/CD/CM，任何"小在大前"的相邻对都按差值计算，
//! 因此 "IC" 得到 99 而不是报错。

use tracing::{debug, trace};

use crate::error::ConvertError;
use crate::symbol::Symbol;

/// 扫描中的一步
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// 单个符号，直接累加
    Additive { symbol: Symbol, position: usize },
    /// 减法对，累加 `major - minor`
    Subtractive {
        minor: Symbol,
        major: Symbol,
        position: usize,
    },
}

impl Step {
    /// 本步累加的值
    pub fn value(&self) -> u64 {
        match self {
            Step::Additive { symbol, .. } => symbol.value(),
            Step::Subtractive { minor, major, .. } => major.value() - minor.value(),
        }
    }

    /// 本步起始字符的位置
    pub fn position(&self) -> usize {
        match self {
            Step::Additive { position, .. } | Step::Subtractive { position, .. } => *position,
        }
    }

    /// 本步消耗的字符数
    pub fn width(&self) -> usize {
        match self {
            Step::Additive { .. } => 1,
            Step::Subtractive { .. } => 2,
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Additive { symbol, .. } => write!(f, "{}({})", symbol, self.value()),
            Step::Subtractive { minor, major, .. } => {
                write!(f, "{}{}({})", minor, major, self.value())
            }
        }
    }
}

/// 一次扫描的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scan {
    /// 大写归一化后的输入
    pub normalized: String,
    /// 十进制值
    pub total: u64,
    /// 依次应用的步骤（仅在 `record_steps` 开启时填充）
    pub steps: Vec<Step>,
}

impl Scan {
    /// 可读的计算过程，例如 `X(10) + IV(4) = 14`
    pub fn explain(&self) -> String {
        if self.steps.is_empty() {
            return self.total.to_string();
        }
        let terms: Vec<String> = self.steps.iter().map(|s| s.to_string()).collect();
        format!("{} = {}", terms.join(" + "), self.total)
    }
}

/// 转换器
///
/// 不持有任何可变状态，可以在线程间共享并发调用。
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    record_steps: bool,
}

impl Converter {
    pub fn new() -> Self {
        Self {
            record_steps: false,
        }
    }

    /// 记录扫描步骤的转换器（用于 `Scan::explain`）
    pub fn explaining() -> Self {
        Self { record_steps: true }
    }

    pub fn records_steps(&self) -> bool {
        self.record_steps
    }

    /// 转换为十进制值
    pub fn convert(&self, input: &str) -> Result<u64, ConvertError> {
        self.scan(input).map(|scan| scan.total)
    }

    /// 扫描输入，返回结果和（可选的）步骤
    ///
    /// # Errors
    /// - 输入为空或全空白：`ConvertError::InvalidInput`
    /// - 遇到符号表之外的字符：`ConvertError::InvalidSymbol`，扫描在该字符处终止
    pub fn scan(&self, input: &str) -> Result<Scan, ConvertError> {
        if input.trim().is_empty() {
            debug!(target: "roman::converter", "rejected empty input");
            return Err(ConvertError::invalid_input());
        }

        let normalized = input.to_uppercase();
        let chars: Vec<char> = normalized.chars().collect();

        let mut total: u64 = 0;
        let mut steps = Vec::new();
        let mut index = 0;

        while index < chars.len() {
            let current = match Symbol::from_char(chars[index]) {
                Some(symbol) => symbol,
                None => {
                    debug!(
                        target: "roman::converter",
                        symbol = %chars[index],
                        position = index,
                        "invalid symbol"
                    );
                    return Err(ConvertError::invalid_symbol(chars[index], index));
                }
            };

            // 下一个字符不合法时按"无下一个"处理，留给下一轮报错
            let next = chars.get(index + 1).copied().and_then(Symbol::from_char);

            let step = match next {
                Some(major) if current.value() < major.value() => Step::Subtractive {
                    minor: current,
                    major,
                    position: index,
                },
                _ => Step::Additive {
                    symbol: current,
                    position: index,
                },
            };

            trace!(target: "roman::converter", step = %step, total, "scan step");
            total += step.value();
            index += step.width();

            if self.record_steps {
                steps.push(step);
            }
        }

        debug!(target: "roman::converter", input = %normalized, total, "converted");

        Ok(Scan {
            normalized,
            total,
            steps,
        })
    }
}

/// 将罗马数字字符串转换为十进制整数（大小写不敏感）
///
/// ```
/// assert_eq!(roman_core::roman_to_int("MCMXCIV"), Ok(1994));
/// ```
pub fn roman_to_int(input: &str) -> Result<u64, ConvertError> {
    Converter::new().convert(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_samples() {
        assert_eq!(roman_to_int("III"), Ok(3));
        assert_eq!(roman_to_int("LVIII"), Ok(58));
        assert_eq!(roman_to_int("MCMXCIV"), Ok(1994));
        assert_eq!(roman_to_int("XIV"), Ok(14));
        assert_eq!(roman_to_int("CDXLIV"), Ok(444));
    }

    #[test]
    fn test_single_symbols() {
        for symbol in Symbol::ALL {
            let input = symbol.as_char().to_string();
            assert_eq!(roman_to_int(&input), Ok(symbol.value()));
        }
    }

    #[test]
    fn test_lowercase_and_mixed_case() {
        assert_eq!(roman_to_int("mcmxciv"), Ok(1994));
        assert_eq!(roman_to_int("xIv"), Ok(14));
    }

    #[test]
    fn test_empty_and_whitespace() {
        for input in ["", " ", "\t\n", "   "] {
            let err = roman_to_int(input).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput, "input {:?}", input);
        }
    }

    #[test]
    fn test_invalid_symbol_position() {
        assert_eq!(
            roman_to_int("XIZ"),
            Err(ConvertError::invalid_symbol('Z', 2))
        );
        assert_eq!(roman_to_int("A"), Err(ConvertError::invalid_symbol('A', 0)));
    }

    #[test]
    fn test_invalid_symbol_after_valid_pair_candidate() {
        // 'Z' 只在下一轮被检查
        assert_eq!(roman_to_int("IZ"), Err(ConvertError::invalid_symbol('Z', 1)));
    }

    #[test]
    fn test_surrounding_whitespace_is_invalid_symbol() {
        assert_eq!(roman_to_int(" III"), Err(ConvertError::invalid_symbol(' ', 0)));
        assert_eq!(roman_to_int("III "), Err(ConvertError::invalid_symbol(' ', 3)));
    }

    #[test]
    fn test_scan_stops_at_first_invalid_symbol() {
        assert_eq!(roman_to_int("Q?"), Err(ConvertError::invalid_symbol('Q', 0)));
    }

    #[test]
    fn test_permissive_pairs() {
        assert_eq!(roman_to_int("IC"), Ok(99));
        assert_eq!(roman_to_int("IIII"), Ok(4));
        assert_eq!(roman_to_int("VX"), Ok(5));
        assert_eq!(roman_to_int("IIV"), Ok(5));
        assert_eq!(roman_to_int("IM"), Ok(999));
    }

    #[test]
    fn test_equal_neighbours_are_additive() {
        assert_eq!(roman_to_int("XX"), Ok(20));
        assert_eq!(roman_to_int("MMM"), Ok(3000));
    }

    #[test]
    fn test_no_upper_bound() {
        let input = "M".repeat(10_000);
        assert_eq!(roman_to_int(&input), Ok(10_000_000));
    }

    #[test]
    fn test_scan_records_steps() {
        let scan = Converter::explaining().scan("xiv").unwrap();
        assert_eq!(scan.normalized, "XIV");
        assert_eq!(scan.total, 14);
        assert_eq!(
            scan.steps,
            vec![
                Step::Additive {
                    symbol: Symbol::X,
                    position: 0
                },
                Step::Subtractive {
                    minor: Symbol::I,
                    major: Symbol::V,
                    position: 1
                },
            ]
        );
        assert_eq!(scan.explain(), "X(10) + IV(4) = 14");
    }

    #[test]
    fn test_scan_without_steps() {
        let converter = Converter::new();
        assert!(!converter.records_steps());
        let scan = converter.scan("CDXLIV").unwrap();
        assert!(scan.steps.is_empty());
        assert_eq!(scan.explain(), "444");
    }

    #[test]
    fn test_step_sum_equals_total() {
        let scan = Converter::explaining().scan("MCMXCIV").unwrap();
        let sum: u64 = scan.steps.iter().map(Step::value).sum();
        assert_eq!(sum, scan.total);
        let width: usize = scan.steps.iter().map(Step::width).sum();
        assert_eq!(width, scan.normalized.chars().count());
    }

    #[test]
    fn test_repeated_calls_are_stable() {
        let converter = Converter::new();
        let first = converter.convert("MMXXIV");
        for _ in 0..10 {
            assert_eq!(converter.convert("MMXXIV"), first);
        }
        assert_eq!(first, Ok(2024));
    }
}
