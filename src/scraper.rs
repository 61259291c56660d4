//! 抓取流程：获取文档 → 提取名称 → 输出
//! 严格顺序执行，获取失败即终止（不提取、不输出）

use std::collections::HashSet;
use std::io::Write;
use std::time::Instant;

use tracing::debug;

use crate::error::LibcallResult;
use crate::extractor::Extractor;
use crate::fetcher::DocumentSource;
use crate::reporter::write_report;

/// 获取文档并提取名称集合
pub async fn scrape(source: &dyn DocumentSource, extractor: &Extractor) -> LibcallResult<HashSet<String>> {
    let start = Instant::now();
    let text = source.fetch().await?;
    debug!(
        "fetched {} ({} bytes) in {:?}",
        source.describe(),
        text.len(),
        start.elapsed()
    );
    Ok(extractor.extract(&text))
}

/// 完整流程，返回输出行数
pub async fn run<W: Write>(
    source: &dyn DocumentSource,
    extractor: &Extractor,
    out: &mut W,
) -> LibcallResult<usize> {
    let names = scrape(source, extractor).await?;
    write_report(&names, out)
}
