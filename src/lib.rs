//! llvm-libcalls - 列出 LLVM RuntimeLibcalls.td 中声明的全部运行时库调用名称

// 导出全局错误类型
pub use self::error::{LibcallError, LibcallResult};

// 导出配置模块
pub use self::config::{ScrapeConfig, ScrapeConfigBuilder, DEFAULT_TD_URL, DEFAULT_HTTP_TIMEOUT};

// 导出文档获取模块核心接口
pub use self::fetcher::{DocumentSource, HttpSource, FileSource, StaticSource};

// 导出提取模块核心接口
pub use self::extractor::{Extractor, CapturePattern};

// 导出输出与流程接口
pub use self::reporter::{sorted_names, write_report};
pub use self::scraper::{scrape, run};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod fetcher;
pub mod extractor;
pub mod reporter;
pub mod scraper;
