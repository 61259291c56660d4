//! 全局配置管理,存储所有可配置项

use std::time::Duration;

use url::Url;

use crate::error::{LibcallError, LibcallResult};

/// LLVM 主干上的运行时库调用定义文件
pub const DEFAULT_TD_URL: &str =
    "https://raw.githubusercontent.com/llvm/llvm-project/main/llvm/include/llvm/IR/RuntimeLibcalls.td";

/// 默认超时（单位：秒）
pub const DEFAULT_HTTP_TIMEOUT: u64 = 15;

/// 抓取配置
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    // 文档URL
    pub url: String,
    // 请求头 User-Agent
    pub user_agent: String,
    // 连接/读取超时
    pub http_timeout: Duration,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_TD_URL.to_string(),
            user_agent: format!("llvm-libcalls/{}", env!("CARGO_PKG_VERSION")),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT),
        }
    }
}

impl ScrapeConfig {
    /// 自定义配置
    pub fn builder() -> ScrapeConfigBuilder {
        ScrapeConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct ScrapeConfigBuilder {
    config: ScrapeConfig,
}

impl ScrapeConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.config.url = url.into();
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn http_timeout(mut self, timeout: Duration) -> Self {
        self.config.http_timeout = timeout;
        self
    }

    /// 校验并生成配置
    pub fn build(self) -> LibcallResult<ScrapeConfig> {
        Url::parse(&self.config.url)?;
        if self.config.http_timeout.is_zero() {
            return Err(LibcallError::InvalidInput("http timeout must be non-zero".to_string()));
        }
        if self.config.user_agent.trim().is_empty() {
            return Err(LibcallError::InvalidInput("user agent must not be empty".to_string()));
        }
        Ok(self.config)
    }
}
