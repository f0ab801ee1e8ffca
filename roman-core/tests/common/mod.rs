//! 测试辅助工具
//!
//! 提供标准写法的罗马数字生成，用来对照转换结果

/// 按标准规则（只用 IV/IX/XL/XC/CD/CM 六种减法对）生成罗马数字
///
/// # Example
/// ```
/// assert_eq!(standard_numeral(1994), "MCMXCIV");
/// ```
pub fn standard_numeral(mut n: u64) -> String {
    const PARTS: [(u64, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];

    let mut out = String::new();
    for (value, text) in PARTS {
        while n >= value {
            out.push_str(text);
            n -= value;
        }
    }
    out
}

/// 所有不在符号表中的 ASCII 可打印字符（大小写归一化后）
pub fn non_symbol_ascii() -> Vec<char> {
    (' '..='~')
        .filter(|c| !"IVXLCDMivxlcdm".contains(*c))
        .collect()
}
