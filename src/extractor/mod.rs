//! 提取模块：负责从 .td 文本中扫描运行时库调用名称
pub mod pattern;
pub mod extractor;

// 导出核心接口
pub use self::pattern::{CapturePattern, DECLARATION_PATTERN, STRING_LITERAL_PATTERN};
pub use self::extractor::Extractor;
