//! Document source abstraction
//! 文档来源抽象：网络、本地文件、内存字符串统一为一个异步接口

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use crate::error::{LibcallError, LibcallResult};

/// 文档来源
/// 实现者返回完整的已解码文本；任何获取失败都应归入 fetch failure 类错误
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// 来源描述（用于日志输出）
    fn describe(&self) -> String;

    /// 获取完整文档文本
    async fn fetch(&self) -> LibcallResult<String>;
}

/// UTF-8 宽松解码，非法字节序列替换为 U+FFFD
pub fn decode_lossy(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    if text.contains(char::REPLACEMENT_CHARACTER) {
        debug!("document contained invalid UTF-8, replaced with U+FFFD");
    }
    text.into_owned()
}

/// 内存中的文档（测试或库调用方注入）
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    text: String,
}

impl StaticSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl DocumentSource for StaticSource {
    fn describe(&self) -> String {
        format!("<memory, {} bytes>", self.text.len())
    }

    async fn fetch(&self) -> LibcallResult<String> {
        Ok(self.text.clone())
    }
}

/// 本地 .td 文件
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DocumentSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> LibcallResult<String> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| LibcallError::SourceReadError {
                path: self.path.clone(),
                source,
            })?;
        if bytes.is_empty() {
            debug!("input file {} is empty", self.path.display());
        }
        debug!("read {} bytes from {}", bytes.len(), self.path.display());
        Ok(decode_lossy(&bytes))
    }
}
