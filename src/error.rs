//! 全局错误类型定义

use std::io::Error as IoError;
use std::path::PathBuf;

use regex::Error as RegexError;
use reqwest::StatusCode;
use thiserror::Error;
use url::ParseError as UrlParseError;

#[derive(Error, Debug)]
pub enum LibcallError {
    // 文档获取相关错误（统一视为 fetch failure）
    #[error("网络请求失败：{0}")]
    HttpError(#[from] reqwest::Error),
    #[error("HTTP状态码 {status}：{url}")]
    HttpStatus { url: String, status: StatusCode },
    #[error("读取文件失败 {}：{source}", path.display())]
    SourceReadError {
        path: PathBuf,
        #[source]
        source: IoError,
    },

    // 模式相关错误
    #[error("正则编译失败：{0}")]
    RegexCompileError(#[from] RegexError),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
    #[error("URL解析失败：{0}")]
    UrlError(#[from] UrlParseError),
    #[error("无效输入：{0}")]
    InvalidInput(String),
}

impl LibcallError {
    /// 是否属于"文档获取失败"这一类（网络、状态码、本地读取）
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            LibcallError::HttpError(_)
                | LibcallError::HttpStatus { .. }
                | LibcallError::SourceReadError { .. }
        )
    }

    /// 带完整错误链的描述（reqwest 的 Display 不包含底层原因）
    pub fn chain_message(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            let text = cause.to_string();
            // 已被上层消息包含的原因不再重复
            if !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = cause.source();
        }
        message
    }
}

// 全局Result类型
pub type LibcallResult<T> = Result<T, LibcallError>;
