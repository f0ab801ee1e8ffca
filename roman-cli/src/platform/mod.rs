//! 平台适配层（终端输出格式化）

pub mod cli;

pub use cli::{print_error_with_source, render_source_context};
