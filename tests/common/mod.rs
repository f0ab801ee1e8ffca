//! 测试辅助工具
//!
//! 提供端到端测试的辅助函数

use roman_workspace::{convert_batch, parse_batch, BatchEntry, RunConfig};

/// 解析 JSON 批量输入并逐项转换
pub fn run_batch(json: &str) -> Vec<BatchEntry> {
    let inputs = parse_batch(json).expect("batch JSON should parse");
    convert_batch(&inputs, &RunConfig::default())
}

/// 获取成功项的值（失败项为 None）
pub fn values(entries: &[BatchEntry]) -> Vec<Option<u64>> {
    entries
        .iter()
        .map(|e| e.outcome.as_ref().ok().map(|c| c.value))
        .collect()
}
