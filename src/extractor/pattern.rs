//! 捕获模式模型
//! 一条正则 + 一个捕获分组索引

use regex::Regex;

use crate::error::{LibcallError, LibcallResult};

/// 声明形式：`def IDENT : RuntimeLibcallImpl`
pub const DECLARATION_PATTERN: &str = r"\bdef\s+([A-Za-z_]\w*)\s*:\s*RuntimeLibcallImpl\b";

/// 字符串字面量形式：`RuntimeLibcallImpl<"symbol"`（仅取第一个字面量，不处理转义）
pub const STRING_LITERAL_PATTERN: &str = r#"RuntimeLibcallImpl\s*<\s*"([^"]+)""#;

/// 编译后的捕获模式
#[derive(Debug, Clone)]
pub struct CapturePattern {
    name: String,
    regex: Regex,
    group: usize,
}

impl CapturePattern {
    /// 编译模式并校验分组索引存在
    pub fn new(name: impl Into<String>, pattern: &str, group: usize) -> LibcallResult<Self> {
        let name = name.into();
        let regex = Regex::new(pattern)?;
        if group >= regex.captures_len() {
            return Err(LibcallError::InvalidInput(format!(
                "pattern [{}] has no capture group {} (groups: {})",
                name,
                group,
                regex.captures_len() - 1
            )));
        }
        Ok(Self { name, regex, group })
    }

    pub fn declaration() -> LibcallResult<Self> {
        Self::new("declaration", DECLARATION_PATTERN, 1)
    }

    pub fn string_literal() -> LibcallResult<Self> {
        Self::new("string-literal", STRING_LITERAL_PATTERN, 1)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// 遍历文本中所有不重叠匹配，产出捕获分组内容
    pub fn captures_iter<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.regex
            .captures_iter(text)
            .filter_map(move |caps| caps.get(self.group))
            .map(|m| m.as_str())
    }
}
