//! 文档获取模块：负责拉取 RuntimeLibcalls.td 文本
pub mod source;
pub mod http_source;

// 导出核心接口
pub use self::source::{DocumentSource, FileSource, StaticSource, decode_lossy};
pub use self::http_source::HttpSource;
