//! CLI 格式化输出
//!
//! 提供命令行友好的错误显示和输入上下文打印。

use roman_api::RomanError;

/// 打印错误并显示输入上下文
pub fn print_error_with_source(e: &RomanError, input: &str) {
    eprintln!("❌ {}: {}", input, e);

    if let Some(position) = e.position() {
        if let Some(context) = render_source_context(input, position) {
            eprint!("{}", context);
        }
    }
}

/// 渲染输入并在出错字符下方标记 `^`
///
/// `position` 是大写归一化后字符串中的字符下标，因此这里显示归一化后的文本。
pub fn render_source_context(input: &str, position: usize) -> Option<String> {
    let normalized = input.to_uppercase();
    let width = normalized.chars().count();

    if position >= width {
        return None;
    }

    let marker: String = std::iter::repeat(' ').take(position).collect();
    Some(format!("  | {}\n  | {}^\n", normalized, marker))
}
