//! Remote document fetcher
//! 远程 .td 文档拉取：单次 GET，固定 User-Agent，固定超时，不重试

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::USER_AGENT;
use tracing::debug;

use super::source::{DocumentSource, decode_lossy};
use crate::config::ScrapeConfig;
use crate::error::{LibcallError, LibcallResult};

/// 基于 reqwest 的远程文档来源
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    url: String,
    user_agent: String,
}

impl HttpSource {
    /// 按配置构建客户端（超时作用于建立连接与每次读取，不限制整体下载时长）
    pub fn new(config: &ScrapeConfig) -> LibcallResult<Self> {
        let client = Client::builder()
            .connect_timeout(config.http_timeout)
            .read_timeout(config.http_timeout)
            .build()?;

        Ok(Self {
            client,
            url: config.url.clone(),
            user_agent: config.user_agent.clone(),
        })
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> LibcallResult<String> {
        debug!("GET {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LibcallError::HttpStatus {
                url: self.url.clone(),
                status,
            });
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            debug!("URL {} returned an empty body", self.url);
        }
        debug!("URL {} returned {} ({} bytes)", self.url, status, bytes.len());

        Ok(decode_lossy(&bytes))
    }
}
