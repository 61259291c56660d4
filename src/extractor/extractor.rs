//! 名称提取器
//! 按顺序对同一文本执行所有捕获模式，结果并入一个去重集合

use std::collections::HashSet;

use tracing::debug;

use super::pattern::CapturePattern;
use crate::error::LibcallResult;

/// 名称提取器（模式有序，可扩展）
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    patterns: Vec<CapturePattern>,
}

impl Extractor {
    /// 默认提取器：声明形式 + 字符串字面量形式
    pub fn libcalls() -> LibcallResult<Self> {
        Ok(Self::with_patterns(vec![
            CapturePattern::declaration()?,
            CapturePattern::string_literal()?,
        ]))
    }

    pub fn with_patterns(patterns: Vec<CapturePattern>) -> Self {
        Self { patterns }
    }

    /// 追加一条模式（不影响去重与排序流程）
    pub fn push(&mut self, pattern: CapturePattern) -> &mut Self {
        self.patterns.push(pattern);
        self
    }

    pub fn patterns(&self) -> &[CapturePattern] {
        &self.patterns
    }

    /// 提取所有名称；无任何匹配时返回空集合
    pub fn extract(&self, text: &str) -> HashSet<String> {
        let mut names = HashSet::new();
        for pattern in &self.patterns {
            let before = names.len();
            let mut matched = 0usize;
            for name in pattern.captures_iter(text) {
                matched += 1;
                names.insert(name.to_string());
            }
            debug!(
                "pattern [{}] matched {} times, {} new names",
                pattern.name(),
                matched,
                names.len() - before
            );
        }
        debug!("extracted {} unique names", names.len());
        names
    }
}
